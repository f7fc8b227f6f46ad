//! JSON representations of a solve, for use by other tools.
//!
//! ```rust
//! # use infero::config::Config;
//! # use infero::context::Context;
//! # use infero::reports::json::SolveJson;
//! # use infero::structures::sentence::Sentence;
//! let mut the_context = Context::from_config(Config::default());
//! let _ = the_context.add_rule(Sentence::disjunction(Sentence::symbol("A"), Sentence::symbol("B")));
//! let _ = the_context.add_fact(Sentence::negation(Sentence::symbol("A")));
//! let _ = the_context.set_query(Sentence::symbol("B"));
//! let _ = the_context.solve();
//!
//! let json = SolveJson::from_context(&the_context);
//! assert_eq!(json.report, infero::reports::Report::Entailed);
//! assert_eq!(json.path[0].rule, "Disjunctive Syllogism");
//! assert!(serde_json::to_string(&json).unwrap().contains("\"conclusion\":\"B\""));
//! ```

use serde::Serialize;

use crate::{context::Context, inference::Step, reports::Report};

/// JSON representation of a step of a derivation.
#[derive(Debug, Clone, Serialize)]
pub struct StepJson {
    pub rule: String,
    pub premises: [String; 2],
    pub conclusion: String,
}

impl From<&Step> for StepJson {
    fn from(step: &Step) -> Self {
        let [one, two] = step.premises();
        StepJson {
            rule: step.name().to_string(),
            premises: [one.formula(), two.formula()],
            conclusion: step.conclusion().formula(),
        }
    }
}

/// JSON representation of the value of an atom.
#[derive(Debug, Clone, Serialize)]
pub struct AtomJson {
    pub symbol: String,
    pub value: Option<bool>,
}

/// JSON representation of a solve.
#[derive(Debug, Clone, Serialize)]
pub struct SolveJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub report: Report,
    pub path: Vec<StepJson>,
    pub valuation: Vec<AtomJson>,
    pub iterations: u32,
}

impl SolveJson {
    pub fn from_context(context: &Context) -> Self {
        SolveJson {
            query: context.query.as_ref().map(|query| query.formula()),
            report: context.report(),
            path: context.path.iter().map(StepJson::from).collect(),
            valuation: context
                .atom_db
                .valuation_pairs()
                .map(|(symbol, value)| AtomJson {
                    symbol: symbol.to_string(),
                    value,
                })
                .collect(),
            iterations: context.counters.iterations,
        }
    }
}
