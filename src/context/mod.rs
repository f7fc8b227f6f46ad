/*!
The context, to which rules, facts, and a query are added and within which a solve takes place.

A context owns everything relevant to a solve:
- The [configuration](crate::config).
- The [atom database](crate::db::atom), which holds the valuation.
- The rules, in order of addition, and the query.
- The [worklist](crate::db::worklist) of rules yet to be resolved.
- The derivation path, as a sequence of [steps](crate::inference::Step).

Nothing is shared between contexts.
So, to settle a collection of queries against the same rules and facts in parallel, clone a context for each query before [setting the query](Context::set_query).

# Example
```rust
# use infero::context::Context;
# use infero::config::Config;
# use infero::reports::Report;
# use infero::structures::sentence::Sentence;
let mut the_context = Context::from_config(Config::default());

let a = Sentence::symbol("A");
let b = Sentence::symbol("B");

assert!(the_context.add_rule(Sentence::implication(a.clone(), b.clone())).is_ok());
assert!(the_context.add_fact(a).is_ok());
assert!(the_context.set_query(b).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Entailed));
assert_eq!(the_context.path.len(), 1);
assert_eq!(the_context.atom_db.valuation_string(), "A B");
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{atom::AtomDB, worklist::Worklist},
    inference::Step,
    reports::Report,
    structures::sentence::Sentence,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// A solve is in progress, or was interrupted by an error.
    Solving,

    /// The query is true on the valuation of the solve.
    Entailed,

    /// The query is false on the valuation of the solve.
    Contradicted,

    /// The solve ended without a value for the query.
    Undetermined,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Entailed => write!(f, "Entailed"),
            Self::Contradicted => write!(f, "Contradicted"),
            Self::Undetermined => write!(f, "Undetermined"),
        }
    }
}

/// A context.
#[derive(Clone, Debug)]
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The rules of the context, in the order they were added.
    pub rules: Vec<Sentence>,

    /// The query of the context, if one has been set.
    pub query: Option<Sentence>,

    /// The worklist of the solve.
    pub worklist: Worklist,

    /// The derivation, in the order rules fired.
    pub path: Vec<Step>,

    /// The state of the context.
    pub state: ContextState,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            atom_db: AtomDB::new(&config),

            config,

            counters: Counters::default(),
            rules: Vec::default(),
            query: None,
            worklist: Worklist::default(),
            path: Vec::default(),
            state: ContextState::Input,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }
}
