use crate::{
    inference::Inference,
    structures::sentence::Sentence,
    types::err::{self, ErrorKind},
};

/// From `a | b` and the negation of one disjunct, conclude the other disjunct.
///
/// The *side* of the rule is the disjunct which is negated in the second premise.
/// So, on the left side, from `a | b` and `~a` conclude `b`, and on the right side from `a | b` and `~b` conclude `a`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjunctiveSyllogism {
    rule: Sentence,
    not_chosen: Sentence,
    other: Sentence,
}

/// The side of a disjunction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl DisjunctiveSyllogism {
    /// Disjunctive syllogism on the given side of a disjunction, or an error if the rule is not a disjunction.
    pub fn from_rule(rule: &Sentence, side: Side) -> Result<Self, ErrorKind> {
        match rule {
            Sentence::Or(left, right) => {
                let (chosen, other) = match side {
                    Side::Left => (left, right),
                    Side::Right => (right, left),
                };

                Ok(DisjunctiveSyllogism {
                    rule: rule.clone(),
                    not_chosen: Sentence::negation(chosen.as_ref().clone()),
                    other: other.as_ref().clone(),
                })
            }

            _ => Err(err::StructuralError::UnexpectedShape.into()),
        }
    }
}

impl Inference for DisjunctiveSyllogism {
    const NAME: &'static str = "Disjunctive Syllogism";

    fn premise_one(&self) -> &Sentence {
        &self.rule
    }

    fn premise_two(&self) -> &Sentence {
        &self.not_chosen
    }

    fn conclusion(&self) -> &Sentence {
        &self.other
    }
}
