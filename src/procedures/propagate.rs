/*!
Propagation of a sentence known to be true.

A sentence is broken apart until each part is either a literal, or a rule:
- A symbol is valued true.
- A negated symbol is valued false.
- A double negation is replaced by the doubly negated sentence.
- The negation of some other compound is [rewritten](crate::structures::sentence::Sentence::apply_de_morgan), pushing the negation inwards.
- Each conjunct of a conjunction is propagated.
- Implications and disjunctions cannot be valued directly, and are returned to the caller.

Parts are propagated left to right, and rules are returned in the order they were found.

```rust
# use infero::config::Config;
# use infero::db::atom::AtomDB;
# use infero::procedures::propagate::propagate;
# use infero::structures::sentence::Sentence;
let mut atom_db = AtomDB::new(&Config::default());
for name in ["A", "B", "C"] {
    atom_db.fresh_or_existing_atom(name).unwrap();
}

// ~(A | (B -> C))
let sentence = Sentence::negation(Sentence::disjunction(
    Sentence::symbol("A"),
    Sentence::implication(Sentence::symbol("B"), Sentence::symbol("C")),
));

let deferred = propagate(sentence, &mut atom_db).unwrap();
assert!(deferred.is_empty());
assert_eq!(atom_db.valuation_string(), "~A B ~C");
```
*/

use crate::{
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::sentence::Sentence,
    types::err::ErrorKind,
};

/// Commits the consequences of the (true) sentence to the atom database, and returns the implications and disjunctions which could not be committed.
///
/// An error is returned if a symbol of the sentence is not in the database, or a value conflicts with an existing value under the [ConflictPolicy](crate::config::ConflictPolicy) of the database.
pub fn propagate(sentence: Sentence, atom_db: &mut AtomDB) -> Result<Vec<Sentence>, ErrorKind> {
    log::debug!(target: targets::PROPAGATION, "Propagating: {sentence}");

    let mut deferred = Vec::default();
    let mut stack = vec![sentence];

    while let Some(sentence) = stack.pop() {
        match sentence {
            Sentence::Symbol(name) => {
                atom_db.set_value(&name, true)?;
            }

            Sentence::Not(operand) => match *operand {
                Sentence::Symbol(name) => {
                    atom_db.set_value(&name, false)?;
                }

                Sentence::Not(inner) => stack.push(*inner),

                compound => stack.push(compound.apply_de_morgan()?),
            },

            // The right conjunct is pushed first, so the left is propagated first.
            Sentence::And(left, right) => {
                stack.push(*right);
                stack.push(*left);
            }

            rule @ (Sentence::Implication(..) | Sentence::Or(..)) => {
                log::debug!(target: targets::PROPAGATION, "Deferred: {rule}");
                deferred.push(rule);
            }
        }
    }

    Ok(deferred)
}
