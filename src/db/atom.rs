/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) [valuation](Valuation).
- Internal and external name maps, for reading and writing [Atom]s.

Atoms are registered in the order their names are first seen, and iteration over the database follows this order.
*/

use std::collections::HashMap;

use crate::{
    config::{Config, ConflictPolicy},
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        valuation::{check_value, Valuation, ValuationStatus, Value},
    },
    types::err::{self, ErrorKind},
};

/// The atom database.
#[derive(Clone, Debug)]
pub struct AtomDB {
    /// The current value of each atom, indexed by atom.
    valuation: Vec<Value>,

    /// The external name of each atom, indexed by atom.
    names: Vec<String>,

    /// A map from external names to atoms.
    atom_map: HashMap<String, Atom>,

    /// How to handle a value committed to an atom with the opposite value.
    conflict_policy: ConflictPolicy,
}

impl AtomDB {
    /// A new [AtomDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        AtomDB {
            valuation: Vec::default(),
            names: Vec::default(),
            atom_map: HashMap::default(),
            conflict_policy: config.conflict_policy.value,
        }
    }

    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The atom with the given name, if one exists.
    pub fn atom(&self, name: &str) -> Option<Atom> {
        self.atom_map.get(name).copied()
    }

    /// The name of the given atom, if the atom exists.
    pub fn name(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom as usize).map(String::as_str)
    }

    /// The atom with the given name, registering a fresh atom with an unknown value if required.
    pub fn fresh_or_existing_atom(&mut self, name: &str) -> Result<Atom, ErrorKind> {
        if let Some(atom) = self.atom(name) {
            return Ok(atom);
        }

        let atom = match Atom::try_from(self.valuation.len()) {
            Ok(atom) if atom < ATOM_MAX => atom,
            _ => return Err(err::ValuationError::AtomsExhausted.into()),
        };

        self.valuation.push(None);
        self.names.push(name.to_string());
        self.atom_map.insert(name.to_string(), atom);
        log::debug!(target: targets::VALUATION, "Atom {atom} registered for {name}");

        Ok(atom)
    }

    /// Commits the value to the atom with the given name.
    ///
    /// If the atom already has the opposite value, the [ConflictPolicy] of the database decides whether the value is overwritten or an error returned.
    ///
    /// On success, the status of the atom *before* the value was committed is returned.
    pub fn set_value(&mut self, name: &str, value: bool) -> Result<ValuationStatus, ErrorKind> {
        let Some(atom) = self.atom(name) else {
            return Err(err::ValuationError::UnboundSymbol(name.to_string()).into());
        };

        let status = check_value(self.valuation[atom as usize], value);
        match status {
            ValuationStatus::NotSet => {
                log::debug!(target: targets::VALUATION, "{name} set to {value}");
            }

            ValuationStatus::Match => {}

            ValuationStatus::Conflict => match self.conflict_policy {
                ConflictPolicy::Reject => {
                    log::warn!(
                        target: targets::VALUATION,
                        "{name} already has the value {}",
                        !value
                    );
                    return Err(err::ValuationError::Conflict(name.to_string()).into());
                }
                ConflictPolicy::Overwrite => {
                    log::warn!(target: targets::VALUATION, "{name} overwritten with {value}");
                }
            },
        }

        self.valuation[atom as usize] = Some(value);
        Ok(status)
    }

    /// The current value of the given atom, or nothing if the atom does not exist.
    pub fn value(&self, atom: Atom) -> Option<Value> {
        self.valuation.get(atom as usize).copied()
    }

    /// An iterator through all (name, value) pairs, in atom order.
    pub fn valuation_pairs(&self) -> impl Iterator<Item = (&str, Value)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.valuation.iter().copied())
    }

    /// The valued atoms of the database, as a string of names, with a `~` prefix on those valued false.
    pub fn valuation_string(&self) -> String {
        self.valuation_pairs()
            .filter_map(|(name, value)| match value {
                Some(true) => Some(name.to_string()),
                Some(false) => Some(format!("~{name}")),
                None => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Valuation for AtomDB {
    fn value_of(&self, name: &str) -> Option<Value> {
        self.atom(name).and_then(|atom| self.value(atom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_order() {
        let mut db = AtomDB::new(&Config::default());
        assert_eq!(db.fresh_or_existing_atom("B"), Ok(0));
        assert_eq!(db.fresh_or_existing_atom("A"), Ok(1));
        assert_eq!(db.fresh_or_existing_atom("B"), Ok(0));

        assert_eq!(db.count(), 2);
        assert_eq!(db.name(1), Some("A"));
        assert_eq!(
            db.valuation_pairs().collect::<Vec<_>>(),
            vec![("B", None), ("A", None)]
        );
    }

    #[test]
    fn values() {
        let mut db = AtomDB::new(&Config::default());
        let _ = db.fresh_or_existing_atom("A");
        let _ = db.fresh_or_existing_atom("B");

        assert_eq!(db.value_of("A"), Some(None));
        assert_eq!(db.value_of("C"), None);

        assert_eq!(db.set_value("A", true), Ok(ValuationStatus::NotSet));
        assert_eq!(db.set_value("A", true), Ok(ValuationStatus::Match));
        assert_eq!(db.set_value("B", false), Ok(ValuationStatus::NotSet));

        assert!(db.is_valued("A"));
        assert_eq!(db.valuation_string(), "A ~B");

        assert_eq!(
            db.set_value("C", true),
            Err(ErrorKind::Valuation(err::ValuationError::UnboundSymbol(
                "C".to_string()
            )))
        );
    }

    #[test]
    fn conflict_rejected() {
        let mut db = AtomDB::new(&Config::default());
        let _ = db.fresh_or_existing_atom("A");

        assert!(db.set_value("A", true).is_ok());
        assert_eq!(
            db.set_value("A", false),
            Err(ErrorKind::Valuation(err::ValuationError::Conflict(
                "A".to_string()
            )))
        );
        assert_eq!(db.value_of("A"), Some(Some(true)));
    }

    #[test]
    fn conflict_overwritten() {
        let mut config = Config::default();
        config.conflict_policy.value = ConflictPolicy::Overwrite;

        let mut db = AtomDB::new(&config);
        let _ = db.fresh_or_existing_atom("A");

        assert!(db.set_value("A", true).is_ok());
        assert_eq!(db.set_value("A", false), Ok(ValuationStatus::Conflict));
        assert_eq!(db.value_of("A"), Some(Some(false)));
    }
}
