use crate::{
    inference::Inference,
    structures::sentence::Sentence,
    types::err::{self, ErrorKind},
};

/// From `a -> b` and `a`, conclude `b`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModusPonens {
    rule: Sentence,
    antecedent: Sentence,
    consequent: Sentence,
}

impl ModusPonens {
    /// Modus ponens from an implication, or an error if the rule is not an implication.
    pub fn from_rule(rule: &Sentence) -> Result<Self, ErrorKind> {
        match rule {
            Sentence::Implication(antecedent, consequent) => Ok(ModusPonens {
                rule: rule.clone(),
                antecedent: antecedent.as_ref().clone(),
                consequent: consequent.as_ref().clone(),
            }),

            _ => Err(err::StructuralError::UnexpectedShape.into()),
        }
    }
}

impl Inference for ModusPonens {
    const NAME: &'static str = "Modus Ponens";

    fn premise_one(&self) -> &Sentence {
        &self.rule
    }

    fn premise_two(&self) -> &Sentence {
        &self.antecedent
    }

    fn conclusion(&self) -> &Sentence {
        &self.consequent
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn fires_on_antecedent() {
        let rule = Sentence::implication(Sentence::symbol("A"), Sentence::symbol("B"));
        let mp = ModusPonens::from_rule(&rule).unwrap();

        assert_eq!(mp.premise_two(), &Sentence::symbol("A"));
        assert_eq!(mp.conclusion(), &Sentence::symbol("B"));

        let mut valuation: HashMap<String, Option<bool>> =
            HashMap::from([("A".to_string(), None), ("B".to_string(), None)]);
        assert_eq!(mp.evaluate(&valuation), Ok(None));

        valuation.insert("A".to_string(), Some(true));
        assert_eq!(mp.evaluate(&valuation), Ok(Some(true)));
    }

    #[test]
    fn shape() {
        let rule = Sentence::disjunction(Sentence::symbol("A"), Sentence::symbol("B"));
        assert_eq!(
            ModusPonens::from_rule(&rule),
            Err(ErrorKind::Structural(err::StructuralError::UnexpectedShape))
        );
    }
}
