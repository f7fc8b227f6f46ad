//! A library for deciding whether a query of propositional logic is entailed, contradicted, or left undetermined by a small knowledge base.
//!
//! A knowledge base is a collection of rules (implications and disjunctions) and facts (atoms and negated atoms).
//! Given a query, infero searches forward from the facts by firing classical inference rules, and records each rule fired.
//! The result is a [report](crate::reports::Report) together with a derivation which may be read and checked by hand.
//!
//! infero is not a satisfiability solver, nor a complete theorem prover.
//! The search is greedy, and a query which follows from the knowledge base may be left undetermined.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config), and rules, facts, and a query are added either [programmatically](crate::builder) or from a program written in the `.ifo` [notation](crate::builder::parser).
//!
//! Useful starting points, then, may be:
//! - The [sentence model](crate::structures::sentence), for the representation and three-valued evaluation of sentences.
//! - The [inference rules](crate::inference) which may be fired during a solve.
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//!
//! # Examples
//!
//! + Parse and solve a program.
//!
//! ```rust
//! # use infero::builder::parser::parse;
//! # use infero::config::Config;
//! # use infero::context::Context;
//! # use infero::reports::Report;
//! let program = parse("
//! rules:
//!   A -> B
//!   B -> C
//! end
//! facts:
//!   ~C
//! end
//! query:
//!   ~A
//! end
//! ").unwrap();
//!
//! let mut the_context = Context::from_program(program, Config::default()).unwrap();
//!
//! assert_eq!(the_context.solve(), Ok(Report::Entailed));
//! for step in &the_context.path {
//!     assert_eq!(step.name(), "Modus Tollens");
//! }
//! ```
//!
//! + Settle a handful of queries against the same knowledge base.
//!
//! ```rust
//! # use infero::config::Config;
//! # use infero::context::Context;
//! # use infero::reports::Report;
//! # use infero::structures::sentence::Sentence;
//! let mut base = Context::from_config(Config::default());
//! let _ = base.add_rule(Sentence::disjunction(Sentence::symbol("A"), Sentence::symbol("B")));
//! let _ = base.add_fact(Sentence::negation(Sentence::symbol("A")));
//!
//! let reports = ["B", "A"]
//!     .map(|query| {
//!         let mut the_context = base.clone();
//!         let _ = the_context.set_query(Sentence::symbol(query));
//!         the_context.solve()
//!     });
//!
//! assert_eq!(reports, [Ok(Report::Entailed), Ok(Report::Contradicted)]);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod inference;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;

pub mod reports;
