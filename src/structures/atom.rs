/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

So, the atoms of a context are [0..*m*) for some *m*, and atoms may be used as indicies of a structure without taking too much space.

The atom `0` is fixed internally with a value of true and never appears in a clause.
As a consequence, the atom of a DIMACS variable *n* is *n*.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom fixed internally with a value of true.
pub const TOP_ATOM: Atom = 0;

/// The maximum instance of an atom, limited by the integer representation of literals.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
