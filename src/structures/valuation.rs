/*!
A (partial) function from atoms to truth values.

Values are optional booleans, where `None` is interpreted as *unknown*.

A valuation is read through the [Valuation] trait by the name of an atom.
The trait distinguishes an atom with an unknown value from an atom which is not part of the valuation at all:
- `value_of(name)` is `Some(value)` if the atom is part of the valuation, with `value` possibly `None`.
- `value_of(name)` is `None` if the atom is not part of the valuation.

Evaluation of a sentence which mentions an atom outside the valuation is an [error](crate::types::err::ValuationError::UnboundSymbol), rather than a value of *unknown*.

The canonical valuation is the [atom database](crate::db::atom::AtomDB), though the trait is implemented for maps from names to optional booleans.

```rust
# use std::collections::HashMap;
# use infero::structures::valuation::Valuation;
let valuation: HashMap<String, Option<bool>> =
    HashMap::from([("A".to_string(), Some(true)), ("B".to_string(), None)]);

assert_eq!(valuation.value_of("A"), Some(Some(true)));
assert_eq!(valuation.value_of("B"), Some(None));
assert_eq!(valuation.value_of("C"), None);
```
*/

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

/// A value, where `None` is unknown.
pub type Value = Option<bool>;

/// Something which stores the value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of the atom under the valuation, or otherwise nothing if the atom is not part of the valuation.
    fn value_of(&self, name: &str) -> Option<Value>;

    /// Whether the atom is part of the valuation and has some (known) value.
    fn is_valued(&self, name: &str) -> bool {
        matches!(self.value_of(name), Some(Some(_)))
    }
}

impl<S: BuildHasher> Valuation for HashMap<String, Value, S> {
    fn value_of(&self, name: &str) -> Option<Value> {
        self.get(name).copied()
    }
}

impl Valuation for BTreeMap<String, Value> {
    fn value_of(&self, name: &str) -> Option<Value> {
        self.get(name).copied()
    }
}

/// The result of comparing a value to the value already held by an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValuationStatus {
    /// The atom has no value.
    NotSet,

    /// The atom already has the value.
    Match,

    /// The atom has the opposite value.
    Conflict,
}

/// Compares some value for an atom to the value already held.
pub fn check_value(held: Value, value: bool) -> ValuationStatus {
    match held {
        None => ValuationStatus::NotSet,
        Some(v) if v == value => ValuationStatus::Match,
        Some(_) => ValuationStatus::Conflict,
    }
}
