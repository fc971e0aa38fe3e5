//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The canonical literal is an integer, with the sign of the integer indicating the polarity of the literal, as in DIMACS.
//!
//! ```rust
//! # use otter_red::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate(), -79);
//! ```

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;

    /// A dense index for the literal, with the two literals of an atom adjacent.
    fn index(&self) -> usize {
        ((self.atom() as usize) << 1) | (self.polarity() as usize)
    }
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_pairs() {
        let p = CLiteral::new(3, true);
        assert_eq!(p.index(), 7);
        assert_eq!(p.negate().index(), 6);
        assert_eq!(p.negate().negate(), p);
    }
}
