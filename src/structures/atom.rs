/*!
(The internal representation of) an atom (aka. a 'symbol').

- 'External' atoms are names, a non-empty string of letters, e.g. `A`, `rain`, `Wet`.
- 'Internal' atoms are indices, used to store the value of an atom in the [atom database](crate::db::atom).

Each internal atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

So, the atoms of a context are [0..*m*) for some *m*, in the order in which their names were first registered.

Sentences refer to atoms by name, and the name of an atom is mapped to its index through the atom database.
*/

/// An atom, aka. a 'symbol'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX;
