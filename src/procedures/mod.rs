//! Procedures for settling a query.
//!
//! - [propagate] commits the consequences of a sentence known to be true to a valuation.
//! - [solve] is the forward-chaining loop of a [context](crate::context), built over propagation and the [inference rules](crate::inference).
//!
//!For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod propagate;
pub mod solve;
