//! De Morgan rewriting, used to push a negation through a compound sentence.

use super::Sentence;
use crate::types::err::{self, ErrorKind};

impl Sentence {
    /// The sentence equivalent to the *negation* of this sentence, with the negation pushed one level down.
    ///
    /// - `p & q` is rewritten to `~p | ~q`.
    /// - `p | q` is rewritten to `~p & ~q`.
    /// - `p -> q` is rewritten to `p & ~q`.
    ///
    /// Any other sentence is an error, as there is no compound to push a negation through.
    ///
    /// ```rust
    /// # use infero::structures::sentence::Sentence;
    /// let a_or_b = Sentence::disjunction(Sentence::symbol("A"), Sentence::symbol("B"));
    /// assert_eq!(a_or_b.apply_de_morgan().unwrap().formula(), "(~A) & (~B)");
    /// ```
    pub fn apply_de_morgan(&self) -> Result<Sentence, ErrorKind> {
        match self {
            Self::And(left, right) => Ok(Sentence::disjunction(
                Sentence::Not(left.clone()),
                Sentence::Not(right.clone()),
            )),

            Self::Or(left, right) => Ok(Sentence::conjunction(
                Sentence::Not(left.clone()),
                Sentence::Not(right.clone()),
            )),

            Self::Implication(antecedent, consequent) => Ok(Sentence::conjunction(
                antecedent.as_ref().clone(),
                Sentence::Not(consequent.clone()),
            )),

            Self::Symbol(_) | Self::Not(_) => Err(err::StructuralError::DeMorgan.into()),
        }
    }
}
