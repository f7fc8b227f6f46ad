//! Property-based tests for the sentence model using proptest.

use std::collections::HashMap;

use proptest::prelude::*;

use super::Sentence;
use crate::{builder::parser::parse_sentence, structures::valuation::Value};

const NAMES: [&str; 4] = ["A", "B", "C", "D"];

/// Generate a random sentence of bounded depth over a fixed set of symbols.
fn arb_sentence(max_depth: u32) -> BoxedStrategy<Sentence> {
    let leaf = (0..NAMES.len()).prop_map(|i| Sentence::symbol(NAMES[i]));

    if max_depth == 0 {
        leaf.boxed()
    } else {
        let part = arb_sentence(max_depth - 1);
        prop_oneof![
            3 => leaf,
            1 => part.clone().prop_map(Sentence::negation),
            1 => (part.clone(), part.clone()).prop_map(|(l, r)| Sentence::conjunction(l, r)),
            1 => (part.clone(), part.clone()).prop_map(|(l, r)| Sentence::disjunction(l, r)),
            1 => (part.clone(), part).prop_map(|(l, r)| Sentence::implication(l, r)),
        ]
        .boxed()
    }
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![Just(Some(true)), Just(Some(false)), Just(None)]
}

/// Generate a valuation binding every symbol.
fn arb_valuation() -> impl Strategy<Value = HashMap<String, Value>> {
    proptest::collection::vec(arb_value(), NAMES.len()).prop_map(|values| {
        NAMES
            .iter()
            .map(|name| name.to_string())
            .zip(values)
            .collect()
    })
}

proptest! {
    #[test]
    fn evaluate_is_deterministic(sentence in arb_sentence(4), valuation in arb_valuation()) {
        let first = sentence.evaluate(&valuation);
        prop_assert!(first.is_ok(), "every symbol is bound");
        prop_assert_eq!(first, sentence.clone().evaluate(&valuation));
    }

    #[test]
    fn symbols_are_a_union(left in arb_sentence(3), right in arb_sentence(3)) {
        let union = left
            .symbols()
            .union(&right.symbols())
            .copied()
            .collect::<std::collections::BTreeSet<_>>();

        for compound in [
            Sentence::conjunction(left.clone(), right.clone()),
            Sentence::disjunction(left.clone(), right.clone()),
            Sentence::implication(left.clone(), right.clone()),
        ] {
            prop_assert_eq!(compound.symbols(), union.clone());
            prop_assert_eq!(compound.symbols(), compound.symbols());
        }
    }

    #[test]
    fn formula_parses_to_an_equal_sentence(sentence in arb_sentence(4)) {
        let parsed = parse_sentence(&sentence.formula());
        prop_assert_eq!(parsed, Ok(sentence));
    }

    #[test]
    fn de_morgan_negates(
        left in arb_sentence(2),
        right in arb_sentence(2),
        conjunction in any::<bool>(),
        valuation in arb_valuation(),
    ) {
        // Implications are not compared, due to the short-circuit of evaluation.
        let sentence = match conjunction {
            true => Sentence::conjunction(left, right),
            false => Sentence::disjunction(left, right),
        };

        let negation = Sentence::negation(sentence.clone()).evaluate(&valuation);
        let rewrite = sentence.apply_de_morgan().and_then(|s| s.evaluate(&valuation));
        prop_assert_eq!(rewrite, negation);
    }
}
