/*!
Inference rules, built from sentences of a knowledge base.

Each rule is built from one (or two) existing sentences and has:
- A first premise, the sentence the rule was built from.
- A second premise, whose truth licenses the rule.
- A conclusion, which may be committed to a valuation when the second premise is true.

| Rule                      | Built from          | Second premise   | Conclusion |
|---------------------------|---------------------|------------------|------------|
| [ModusPonens]             | `a -> b`            | `a`              | `b`        |
| [ModusTollens]            | `a -> b`            | `~b`             | `~a`       |
| [DisjunctiveSyllogism]    | `a \| b`, side      | `~a` (or `~b`)   | `b` (or `a`) |
| [HypotheticalSyllogism]   | `a -> b`, `b -> c`  | `b -> c`         | `a -> c`   |

Whether a rule may fire is given by [evaluate](Inference::evaluate), which is the value of the second premise on some valuation.
The exception is hypothetical syllogism, which requires no evidence and so always evaluates to true.

Rules which fire are recorded as a [Step] of a derivation, and each step has a trace of the form:

```none
Modus Ponens
A -> B
A
------
B
```
*/

mod disjunctive_syllogism;
mod hypothetical_syllogism;
mod modus_ponens;
mod modus_tollens;

pub use disjunctive_syllogism::{DisjunctiveSyllogism, Side};
pub use hypothetical_syllogism::HypotheticalSyllogism;
pub use modus_ponens::ModusPonens;
pub use modus_tollens::ModusTollens;

use crate::{
    structures::{
        sentence::Sentence,
        valuation::{Valuation, Value},
    },
    types::err::ErrorKind,
};

/// The inference rule trait.
pub trait Inference {
    /// The name of the rule, as used in a trace.
    const NAME: &'static str;

    /// The sentence the rule was built from.
    fn premise_one(&self) -> &Sentence;

    /// The sentence whose truth licenses the rule.
    fn premise_two(&self) -> &Sentence;

    /// What follows from the premises.
    fn conclusion(&self) -> &Sentence;

    /// The value of the second premise on the given valuation.
    fn evaluate<V: Valuation + ?Sized>(&self, valuation: &V) -> Result<Value, ErrorKind> {
        self.premise_two().evaluate(valuation)
    }

    /// A multi-line trace of the rule, ending with a newline.
    fn trace(&self) -> String {
        format!(
            "{}\n{}\n{}\n------\n{}\n",
            Self::NAME,
            self.premise_one().formula(),
            self.premise_two().formula(),
            self.conclusion().formula(),
        )
    }
}

/// A step of a derivation, i.e. some inference rule which fired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    ModusPonens(ModusPonens),
    ModusTollens(ModusTollens),
    DisjunctiveSyllogism(DisjunctiveSyllogism),
    HypotheticalSyllogism(HypotheticalSyllogism),
}

impl Step {
    /// The name of the rule of the step.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ModusPonens(_) => ModusPonens::NAME,
            Self::ModusTollens(_) => ModusTollens::NAME,
            Self::DisjunctiveSyllogism(_) => DisjunctiveSyllogism::NAME,
            Self::HypotheticalSyllogism(_) => HypotheticalSyllogism::NAME,
        }
    }

    /// The premises of the step.
    pub fn premises(&self) -> [&Sentence; 2] {
        match self {
            Self::ModusPonens(rule) => [rule.premise_one(), rule.premise_two()],
            Self::ModusTollens(rule) => [rule.premise_one(), rule.premise_two()],
            Self::DisjunctiveSyllogism(rule) => [rule.premise_one(), rule.premise_two()],
            Self::HypotheticalSyllogism(rule) => [rule.premise_one(), rule.premise_two()],
        }
    }

    pub fn conclusion(&self) -> &Sentence {
        match self {
            Self::ModusPonens(rule) => rule.conclusion(),
            Self::ModusTollens(rule) => rule.conclusion(),
            Self::DisjunctiveSyllogism(rule) => rule.conclusion(),
            Self::HypotheticalSyllogism(rule) => rule.conclusion(),
        }
    }

    /// A multi-line trace of the step.
    pub fn trace(&self) -> String {
        match self {
            Self::ModusPonens(rule) => rule.trace(),
            Self::ModusTollens(rule) => rule.trace(),
            Self::DisjunctiveSyllogism(rule) => rule.trace(),
            Self::HypotheticalSyllogism(rule) => rule.trace(),
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.trace())
    }
}

impl From<ModusPonens> for Step {
    fn from(rule: ModusPonens) -> Self {
        Step::ModusPonens(rule)
    }
}

impl From<ModusTollens> for Step {
    fn from(rule: ModusTollens) -> Self {
        Step::ModusTollens(rule)
    }
}

impl From<DisjunctiveSyllogism> for Step {
    fn from(rule: DisjunctiveSyllogism) -> Self {
        Step::DisjunctiveSyllogism(rule)
    }
}

impl From<HypotheticalSyllogism> for Step {
    fn from(rule: HypotheticalSyllogism) -> Self {
        Step::HypotheticalSyllogism(rule)
    }
}
