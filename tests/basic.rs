use std::collections::HashMap;

use infero::{
    inference::{
        DisjunctiveSyllogism, HypotheticalSyllogism, Inference, ModusPonens, ModusTollens, Side,
    },
    structures::{sentence::Sentence, valuation::Value},
    types::err::{self, ErrorKind},
};

fn a() -> Sentence {
    Sentence::symbol("A")
}

fn b() -> Sentence {
    Sentence::symbol("B")
}

fn c() -> Sentence {
    Sentence::symbol("C")
}

fn valuation(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

mod sentences {
    use super::*;

    #[test]
    fn evaluation() {
        let s = Sentence::disjunction(
            Sentence::conjunction(a(), Sentence::negation(b())),
            c(),
        );

        let v = valuation(&[("A", Some(true)), ("B", Some(false)), ("C", None)]);
        assert_eq!(s.evaluate(&v), Ok(Some(true)));

        let v = valuation(&[("A", Some(true)), ("B", None), ("C", Some(false))]);
        assert_eq!(s.evaluate(&v), Ok(None));

        let v = valuation(&[("A", Some(false)), ("B", None), ("C", Some(false))]);
        assert_eq!(s.evaluate(&v), Ok(Some(false)));
    }

    #[test]
    fn implication_of_unknown_antecedent() {
        let v = valuation(&[("A", None), ("B", Some(false))]);
        assert_eq!(Sentence::implication(a(), b()).evaluate(&v), Ok(Some(true)));
    }

    #[test]
    fn unbound() {
        let v = valuation(&[("A", Some(true))]);
        assert_eq!(
            Sentence::conjunction(a(), b()).evaluate(&v),
            Err(ErrorKind::Valuation(err::ValuationError::UnboundSymbol(
                "B".to_string()
            )))
        );
    }

    #[test]
    fn de_morgan() {
        assert_eq!(
            Sentence::implication(a(), b()).apply_de_morgan(),
            Ok(Sentence::conjunction(a(), Sentence::negation(b())))
        );
        assert_eq!(
            Sentence::negation(a()).apply_de_morgan(),
            Err(ErrorKind::Structural(err::StructuralError::DeMorgan))
        );
    }

    #[test]
    fn formulas() {
        let s = Sentence::negation(Sentence::implication(
            Sentence::disjunction(a(), b()),
            Sentence::negation(c()),
        ));
        assert_eq!(s.formula(), "~((A | B) -> (~C))");
        assert_eq!(s.to_string(), s.formula());
    }
}

mod inference {
    use super::*;

    #[test]
    fn disjunctive_syllogism_sides() {
        let a_or_b = Sentence::disjunction(a(), b());

        let left = DisjunctiveSyllogism::from_rule(&a_or_b, Side::Left).unwrap();
        assert_eq!(left.conclusion(), &b());

        let right = DisjunctiveSyllogism::from_rule(&a_or_b, Side::Right).unwrap();
        assert_eq!(right.conclusion(), &a());
    }

    #[test]
    fn hypothetical_syllogism_apply() {
        let hs = HypotheticalSyllogism::from_rules(
            &Sentence::implication(a(), b()),
            &Sentence::implication(b(), c()),
        )
        .unwrap();

        assert_eq!(hs.apply(), Sentence::implication(a(), c()));
    }

    #[test]
    fn firing() {
        let a_b = Sentence::implication(a(), b());
        let mp = ModusPonens::from_rule(&a_b).unwrap();
        let mt = ModusTollens::from_rule(&a_b).unwrap();

        let v = valuation(&[("A", Some(true)), ("B", None)]);
        assert_eq!(mp.evaluate(&v), Ok(Some(true)));
        assert_eq!(mt.evaluate(&v), Ok(None));

        let v = valuation(&[("A", None), ("B", Some(false))]);
        assert_eq!(mp.evaluate(&v), Ok(None));
        assert_eq!(mt.evaluate(&v), Ok(Some(true)));
    }

    #[test]
    fn shapes() {
        let a_or_b = Sentence::disjunction(a(), b());
        assert!(ModusPonens::from_rule(&a_or_b).is_err());
        assert!(ModusTollens::from_rule(&a_or_b).is_err());
        assert!(HypotheticalSyllogism::from_rules(&a_or_b, &a_or_b).is_err());
        assert!(
            DisjunctiveSyllogism::from_rule(&Sentence::implication(a(), b()), Side::Right).is_err()
        );
    }
}
