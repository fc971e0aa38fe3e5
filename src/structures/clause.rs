//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use otter_red::structures::{clause::Clause, literal::CLiteral};
//! let clause: Vec<CLiteral> = vec![23, -41, -3, 15, -4];
//!
//! assert_eq!(clause.size(), 5);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 15 -4 0");
//!
//! let mut valuation = vec![Some(false); 42];
//! valuation[23] = Some(false);
//! valuation[15] = Some(false);
//! assert!(clause.satisfied_on(&valuation));
//!
//! valuation[3] = Some(true);
//! valuation[4] = Some(true);
//! valuation[41] = Some(true);
//! assert!(!clause.satisfied_on(&valuation));
//!
//! let shorter: Vec<CLiteral> = vec![-3, 15];
//! assert!(shorter.subsumes(&clause));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use crate::{
    config::LBD,
    db::atom::AtomDB,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self.literals() {
            the_string.push_str(format!("{literal} ").as_str());
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    /// An iterator over all literals in the clause, in the order stored.
    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in the order stored.
    fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.literals().map(|literal| literal.atom())
    }

    /// Whether some literal of the clause is true on the given valuation.
    fn satisfied_on(&self, valuation: &[Option<bool>]) -> bool {
        self.literals()
            .any(|literal| valuation.literal_value(literal) == Some(true))
    }

    /// Whether every literal of the clause appears in `other`.
    fn subsumes(&self, other: &[CLiteral]) -> bool {
        self.literals().all(|literal| other.contains(&literal))
    }

    /// The Literal Block Distance of the clause.
    /// That is, the number of (distinct) decision levels of atoms in the clause, saturating at [LBD::MAX].
    ///
    /// Atoms without a value are ignored.
    fn lbd(&self, atom_db: &AtomDB) -> LBD {
        let mut levels = self
            .atoms()
            .filter(|atom| atom_db.value_of(*atom).is_some())
            .map(|atom| atom_db.level_of(atom))
            .collect::<Vec<_>>();
        levels.sort_unstable();
        levels.dedup();
        LBD::try_from(levels.len()).unwrap_or(LBD::MAX)
    }
}

/// The implementation of a clause as a vector of literals.
#[allow(non_camel_case_types)]
pub type vClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = vClause;

impl Clause for [CLiteral] {
    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl Clause for vClause {
    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl Clause for CLiteral {
    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        std::iter::once(*self)
    }

    fn size(&self) -> usize {
        1
    }
}

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause read from a formula.
    Original,

    /// A clause derived via resolution during conflict analysis.
    Resolution,

    /// A clause strengthened by the reducer.
    Reducer,
}
