//! Key structures, such as sentences and valuations.
//!
//! ## Sentences
//!
//! A [sentence] is a formula of propositional logic built from [atoms](atom) by negation, conjunction, disjunction, and implication.
//! Sentences are immutable trees, and two sentences are equal exactly when they have the same shape and the same atoms at the same places.
//!
//! ## Languages
//! A *language* 𝓛 is some set of atoms, closed under the operations of negation, conjunction, disjunction, and implication. \
//! Every [context](crate::context) is implicitly relative to the language of the atoms registered with it, and every sentence evaluated relative to a context must belong to that language.
//!
//! ## Values
//!
//! A value is one of *true*, *false*, or *unknown*, represented as `Some(true)`, `Some(false)`, and `None`.
//! Values of compound sentences follow [Kleene](https://en.wikipedia.org/wiki/Three-valued_logic)'s strong three-valued logic, with one exception for implication (see [Sentence::evaluate](sentence::Sentence::evaluate)).

pub mod atom;
pub mod sentence;
pub mod valuation;
