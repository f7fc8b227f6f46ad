/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
Some structures copy parts of the configuration, e.g. the [atom database](crate::db::atom) keeps the [ConflictPolicy].

Each option is a [ConfigOption], which pairs a value with a name and the bounds of acceptable values.

```rust
# use infero::config::{Config, ConflictPolicy};
let mut config = Config::default();
assert_eq!(config.iteration_limit.value, 100);

config.conflict_policy.value = ConflictPolicy::Overwrite;
assert_eq!(config.conflict_policy.value.to_string(), "Overwrite");
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod conflict_policy;
pub use conflict_policy::ConflictPolicy;

use crate::db::worklist::Score;

/// The default limit on iterations of the solve loop.
pub const ITERATION_LIMIT: u32 = 100;

/// The default reduction in score for an implication whose consequent is the query.
pub const QUERY_BONUS: Score = 0.5;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum number of iterations of the solve loop.
    ///
    /// A limit guarantees termination, as chained hypothetical syllogisms need not reach a fixed point.
    pub iteration_limit: ConfigOption<u32>,

    /// The reduction in score (and so increase in priority) given to an implication whose consequent is the query.
    pub query_bonus: ConfigOption<Score>,

    /// How to handle the derivation of a value for an atom which has the opposite value.
    pub conflict_policy: ConfigOption<ConflictPolicy>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            iteration_limit: ConfigOption {
                name: "iteration_limit",
                min: 1,
                max: u32::MAX,
                value: ITERATION_LIMIT,
            },

            query_bonus: ConfigOption {
                name: "query_bonus",
                min: 0.0,
                max: 1.0,
                value: QUERY_BONUS,
            },

            conflict_policy: ConfigOption {
                name: "conflict_policy",
                min: ConflictPolicy::MIN,
                max: ConflictPolicy::MAX,
                value: ConflictPolicy::Reject,
            },
        }
    }
}
