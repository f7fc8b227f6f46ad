/*!
Sentences of propositional logic, as immutable expression trees.

A sentence is one of five shapes:
- A symbol, naming some [atom](crate::structures::atom).
- The negation of a sentence, `~p`.
- The conjunction of two sentences, `p & q`.
- The disjunction of two sentences, `p | q`.
- An implication from one sentence (the antecedent) to another (the consequent), `p -> q`.

The set of shapes is closed, and so dispatch on the shape of a sentence is by (exhaustive) pattern matching.

Equality of sentences is structural.
That is, two sentences are equal when they have the same shape and equal parts, regardless of where or when they were built.
This is relied on when chaining [inference rules](crate::inference), which match sub-sentences of distinct rules by value.

# Example

```rust
# use std::collections::HashMap;
# use infero::structures::sentence::Sentence;
let a = Sentence::symbol("A");
let b = Sentence::symbol("B");
let a_implies_b = Sentence::implication(a.clone(), b.clone());

let valuation: HashMap<String, Option<bool>> =
    HashMap::from([("A".to_string(), Some(true)), ("B".to_string(), None)]);

assert_eq!(a_implies_b.formula(), "A -> B");
assert_eq!(a_implies_b.evaluate(&valuation), Ok(None));
assert_eq!(a_implies_b.symbols().len(), 2);
```
*/

mod de_morgan;
mod formula;

#[cfg(test)]
mod proptest_tests;

use std::collections::BTreeSet;

use crate::{
    structures::valuation::{Valuation, Value},
    types::err::{self, ErrorKind},
};

/// A sentence of propositional logic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentence {
    /// An atomic sentence, identified by name.
    Symbol(String),

    /// The negation of the operand.
    Not(Box<Sentence>),

    /// The conjunction of the left and right conjuncts.
    And(Box<Sentence>, Box<Sentence>),

    /// The disjunction of the left and right disjuncts.
    Or(Box<Sentence>, Box<Sentence>),

    /// An implication from the antecedent to the consequent.
    Implication(Box<Sentence>, Box<Sentence>),
}

impl Sentence {
    /// A symbol with the given name.
    ///
    /// Any name is accepted, though only words of letters other than `end` may be written in the `.ifo` notation.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    pub fn negation(operand: Sentence) -> Self {
        Self::Not(Box::new(operand))
    }

    pub fn conjunction(left: Sentence, right: Sentence) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    pub fn disjunction(left: Sentence, right: Sentence) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    pub fn implication(antecedent: Sentence, consequent: Sentence) -> Self {
        Self::Implication(Box::new(antecedent), Box::new(consequent))
    }

    /// Whether the sentence is a symbol.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    /// Whether the sentence may be used as a rule, i.e. is an implication or disjunction.
    pub fn is_rule(&self) -> bool {
        matches!(self, Self::Implication(..) | Self::Or(..))
    }

    /// If the sentence is a symbol under zero or more negations, the name of the symbol paired with the value which makes the sentence true.
    ///
    /// ```rust
    /// # use infero::structures::sentence::Sentence;
    /// let not_not_not_a = Sentence::negation(Sentence::negation(Sentence::negation(Sentence::symbol("A"))));
    /// assert_eq!(not_not_not_a.literal(), Some(("A", false)));
    ///
    /// let a_and_b = Sentence::conjunction(Sentence::symbol("A"), Sentence::symbol("B"));
    /// assert_eq!(a_and_b.literal(), None);
    /// ```
    pub fn literal(&self) -> Option<(&str, bool)> {
        let mut polarity = true;
        let mut sentence = self;
        loop {
            match sentence {
                Self::Symbol(name) => return Some((name.as_str(), polarity)),
                Self::Not(operand) => {
                    polarity = !polarity;
                    sentence = operand.as_ref();
                }
                _ => return None,
            }
        }
    }

    /// The names of all atoms in the sentence.
    pub fn symbols(&self) -> BTreeSet<&str> {
        let mut symbols = BTreeSet::default();
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols<'s>(&'s self, symbols: &mut BTreeSet<&'s str>) {
        match self {
            Self::Symbol(name) => {
                symbols.insert(name.as_str());
            }

            Self::Not(operand) => operand.collect_symbols(symbols),

            Self::And(left, right) | Self::Or(left, right) | Self::Implication(left, right) => {
                left.collect_symbols(symbols);
                right.collect_symbols(symbols);
            }
        }
    }

    /// The value of the sentence on the given valuation.
    ///
    /// Values follow Kleene's strong three-valued logic:
    /// - A negation is unknown if the operand is unknown.
    /// - A conjunction is false if either conjunct is false, and otherwise is unknown unless both are true.
    /// - A disjunction is true if either disjunct is true, and otherwise is unknown unless both are false.
    ///
    /// With the exception of implication, which is evaluated as the negation of the antecedent *or* the consequent, with truthy short-circuiting.
    /// So, if the antecedent is not true (false *or unknown*) the implication is true, and the consequent is not evaluated.
    /// Otherwise, the implication has the value of the consequent.
    ///
    /// Where possible, a compound sentence is evaluated left to right and the right part is not evaluated if the left part settles the value.
    ///
    /// An error is returned if an atom of some evaluated part of the sentence is not part of the valuation.
    pub fn evaluate<V: Valuation + ?Sized>(&self, valuation: &V) -> Result<Value, ErrorKind> {
        match self {
            Self::Symbol(name) => match valuation.value_of(name) {
                Some(value) => Ok(value),
                None => Err(ErrorKind::from(err::ValuationError::UnboundSymbol(
                    name.clone(),
                ))),
            },

            Self::Not(operand) => Ok(operand.evaluate(valuation)?.map(|value| !value)),

            Self::And(left, right) => match left.evaluate(valuation)? {
                Some(false) => Ok(Some(false)),
                Some(true) => right.evaluate(valuation),
                None => match right.evaluate(valuation)? {
                    Some(false) => Ok(Some(false)),
                    _ => Ok(None),
                },
            },

            Self::Or(left, right) => match left.evaluate(valuation)? {
                Some(true) => Ok(Some(true)),
                Some(false) => right.evaluate(valuation),
                None => match right.evaluate(valuation)? {
                    Some(true) => Ok(Some(true)),
                    _ => Ok(None),
                },
            },

            Self::Implication(antecedent, consequent) => match antecedent.evaluate(valuation)? {
                Some(true) => consequent.evaluate(valuation),
                Some(false) | None => Ok(Some(true)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn valuation(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    const VALUES: [Value; 3] = [Some(true), Some(false), None];

    #[test]
    fn kleene_tables() {
        let a = Sentence::symbol("A");
        let b = Sentence::symbol("B");
        let not_a = Sentence::negation(a.clone());
        let a_and_b = Sentence::conjunction(a.clone(), b.clone());
        let a_or_b = Sentence::disjunction(a.clone(), b.clone());

        for va in VALUES {
            for vb in VALUES {
                let v = valuation(&[("A", va), ("B", vb)]);

                assert_eq!(not_a.evaluate(&v), Ok(va.map(|x| !x)));

                let and = match (va, vb) {
                    (Some(true), Some(true)) => Some(true),
                    (Some(false), _) | (_, Some(false)) => Some(false),
                    _ => None,
                };
                assert_eq!(a_and_b.evaluate(&v), Ok(and), "{va:?} & {vb:?}");

                let or = match (va, vb) {
                    (Some(false), Some(false)) => Some(false),
                    (Some(true), _) | (_, Some(true)) => Some(true),
                    _ => None,
                };
                assert_eq!(a_or_b.evaluate(&v), Ok(or), "{va:?} | {vb:?}");
            }
        }
    }

    #[test]
    fn implication_short_circuit() {
        let a_implies_b = Sentence::implication(Sentence::symbol("A"), Sentence::symbol("B"));

        let v = valuation(&[("A", None), ("B", Some(false))]);
        assert_eq!(a_implies_b.evaluate(&v), Ok(Some(true)));

        let v = valuation(&[("A", Some(false)), ("B", None)]);
        assert_eq!(a_implies_b.evaluate(&v), Ok(Some(true)));

        let v = valuation(&[("A", Some(true)), ("B", None)]);
        assert_eq!(a_implies_b.evaluate(&v), Ok(None));

        let v = valuation(&[("A", Some(true)), ("B", Some(false))]);
        assert_eq!(a_implies_b.evaluate(&v), Ok(Some(false)));

        // The consequent is not evaluated, and so need not be bound.
        let v = valuation(&[("A", None)]);
        assert_eq!(a_implies_b.evaluate(&v), Ok(Some(true)));
    }

    #[test]
    fn unbound_symbol() {
        let a_or_c = Sentence::disjunction(Sentence::symbol("A"), Sentence::symbol("C"));
        let v = valuation(&[("A", None)]);

        assert_eq!(
            a_or_c.evaluate(&v),
            Err(ErrorKind::Valuation(err::ValuationError::UnboundSymbol(
                "C".to_string()
            )))
        );
    }

    #[test]
    fn symbols_union() {
        let left = Sentence::conjunction(Sentence::symbol("A"), Sentence::symbol("B"));
        let right = Sentence::negation(Sentence::disjunction(
            Sentence::symbol("B"),
            Sentence::symbol("C"),
        ));
        let both = Sentence::implication(left.clone(), right.clone());

        let union = left
            .symbols()
            .union(&right.symbols())
            .copied()
            .collect::<BTreeSet<_>>();

        assert_eq!(both.symbols(), union);
        assert_eq!(
            both.symbols().into_iter().collect::<Vec<_>>(),
            ["A", "B", "C"]
        );
    }

    #[test]
    fn structural_equality() {
        let built_once = Sentence::implication(Sentence::symbol("A"), Sentence::symbol("B"));
        let built_twice = Sentence::implication(Sentence::symbol("A"), Sentence::symbol("B"));
        assert_eq!(built_once, built_twice);

        let flipped = Sentence::implication(Sentence::symbol("B"), Sentence::symbol("A"));
        assert_ne!(built_once, flipped);

        let or = Sentence::disjunction(Sentence::symbol("A"), Sentence::symbol("B"));
        assert_ne!(built_once, or);
    }

    #[test]
    fn shapes() {
        let a = Sentence::symbol("A");
        assert!(a.is_atomic());
        assert!(!a.is_rule());
        assert_eq!(a.literal(), Some(("A", true)));

        let not_a = Sentence::negation(a.clone());
        assert!(!not_a.is_atomic());
        assert_eq!(not_a.literal(), Some(("A", false)));

        assert!(Sentence::disjunction(a.clone(), not_a.clone()).is_rule());
        assert!(Sentence::implication(a.clone(), not_a.clone()).is_rule());
        assert!(!Sentence::conjunction(a, not_a).is_rule());
    }
}
