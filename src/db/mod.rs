//! Databases for holding information relevant to a solve.
//!
//! - [The atom database](crate::db::atom)
//!   + The atoms of a context, with internal and external names, and the current valuation of each atom.
//!     The atom database is the truth assignment of a solve, and is written to only when seeding facts and during [propagation](crate::procedures::propagate).
//! - [The worklist](crate::db::worklist)
//!   + Rules which have yet to be resolved, each paired with a score used to prioritise the rule.

pub mod atom;
pub mod worklist;
