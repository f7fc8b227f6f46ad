use crate::{
    inference::Inference,
    structures::{
        sentence::Sentence,
        valuation::{Valuation, Value},
    },
    types::err::{self, ErrorKind},
};

/// From `a -> b` and `b -> c`, conclude `a -> c`.
///
/// The consequent of the first implication must be (structurally) equal to the antecedent of the second.
/// The rule requires no evidence from a valuation, and so [evaluate](Inference::evaluate) is always true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HypotheticalSyllogism {
    first: Sentence,
    second: Sentence,
    chained: Sentence,
}

impl HypotheticalSyllogism {
    /// Hypothetical syllogism from a pair of implications, or an error if the pair do not chain.
    pub fn from_rules(first: &Sentence, second: &Sentence) -> Result<Self, ErrorKind> {
        match (first, second) {
            (
                Sentence::Implication(antecedent, middle),
                Sentence::Implication(second_antecedent, consequent),
            ) if middle == second_antecedent => Ok(HypotheticalSyllogism {
                first: first.clone(),
                second: second.clone(),
                chained: Sentence::implication(
                    antecedent.as_ref().clone(),
                    consequent.as_ref().clone(),
                ),
            }),

            _ => Err(err::StructuralError::UnexpectedShape.into()),
        }
    }

    /// The chained implication.
    pub fn apply(&self) -> Sentence {
        self.chained.clone()
    }
}

impl Inference for HypotheticalSyllogism {
    const NAME: &'static str = "Hypothetical Syllogism";

    fn premise_one(&self) -> &Sentence {
        &self.first
    }

    fn premise_two(&self) -> &Sentence {
        &self.second
    }

    fn conclusion(&self) -> &Sentence {
        &self.chained
    }

    fn evaluate<V: Valuation + ?Sized>(&self, _valuation: &V) -> Result<Value, ErrorKind> {
        Ok(Some(true))
    }
}
