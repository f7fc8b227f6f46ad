use crate::{
    inference::Inference,
    structures::sentence::Sentence,
    types::err::{self, ErrorKind},
};

/// From `a -> b` and `~b`, conclude `~a`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModusTollens {
    rule: Sentence,
    not_consequent: Sentence,
    not_antecedent: Sentence,
}

impl ModusTollens {
    /// Modus tollens from an implication, or an error if the rule is not an implication.
    pub fn from_rule(rule: &Sentence) -> Result<Self, ErrorKind> {
        match rule {
            Sentence::Implication(antecedent, consequent) => Ok(ModusTollens {
                rule: rule.clone(),
                not_consequent: Sentence::negation(consequent.as_ref().clone()),
                not_antecedent: Sentence::negation(antecedent.as_ref().clone()),
            }),

            _ => Err(err::StructuralError::UnexpectedShape.into()),
        }
    }
}

impl Inference for ModusTollens {
    const NAME: &'static str = "Modus Tollens";

    fn premise_one(&self) -> &Sentence {
        &self.rule
    }

    fn premise_two(&self) -> &Sentence {
        &self.not_consequent
    }

    fn conclusion(&self) -> &Sentence {
        &self.not_antecedent
    }
}
