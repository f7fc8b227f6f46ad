use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// The total number of iterations through a solve.
    pub iterations: u32,

    /// A count of inference rules which fired.
    pub derivations: usize,

    /// A count of rules pushed back to the worklist to be retried.
    pub retries: usize,

    /// A count of rules removed from the worklist as they can no longer fire.
    pub discharged: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
