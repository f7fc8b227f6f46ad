/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide a trace of a solve which is more detailed than the [derivation path](crate::inference::Step).

Note, no log implementation is provided by the library.
The `infero` binary installs [log4rs](https://docs.rs/log4rs) when built with the `log` feature.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [solve procedure](crate::procedures::solve)
    pub const SOLVE: &str = "solve";

    /// Logs related to [propagation](crate::procedures::propagate)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the construction and firing of [inference rules](crate::inference)
    pub const INFERENCE: &str = "inference";

    /// Logs related to the [worklist](crate::db::worklist)
    pub const WORKLIST: &str = "worklist";

    /// Logs related to the valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to the [builder](crate::builder)
    pub const PARSER: &str = "parser";
}
