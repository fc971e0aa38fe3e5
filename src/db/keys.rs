use crate::structures::literal::{CLiteral, Literal};

/// The index to a clause stored in a vector.
pub type FormulaIndex = u32;

slotmap::new_key_type! {
    /// A stable handle to a long added clause.
    ///
    /// Long added clauses are stored in an arena which is compacted when the clause database is reduced.
    /// The handle is resolved through the arena, and so is unaffected by compaction.
    /// A handle to a removed clause is never reused, and fails to resolve.
    pub struct AdditionKey;
}

/// A key to access a clause stored in the clause database.
///
/// Within the clause database clauses are stored in some indexed structure, and keys contain the index to the clause.
///
/// The exception is unit clauses, where the key contains the literal of the clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClauseKey {
    /// The key to a unit clause contains the (unit) clause.
    OriginalUnit(CLiteral),

    /// The key to a unit clause contains the (unit) clause.
    AdditionUnit(CLiteral),

    /// The key to a binary clause.
    OriginalBinary(FormulaIndex),

    /// The key to a binary clause.
    AdditionBinary(FormulaIndex),

    /// The key to an original clause.
    Original(FormulaIndex),

    /// The key to an addition.
    Addition(AdditionKey),
}

impl ClauseKey {
    /// Whether the key is to an original clause.
    pub fn is_original(&self) -> bool {
        matches!(
            self,
            Self::OriginalUnit(_) | Self::OriginalBinary(_) | Self::Original(_)
        )
    }

    /// Whether the key is to a unit clause.
    pub fn is_unit(&self) -> bool {
        matches!(self, Self::OriginalUnit(_) | Self::AdditionUnit(_))
    }

    /// The literal of a unit key.
    pub fn unit_literal(&self) -> Option<CLiteral> {
        match self {
            Self::OriginalUnit(literal) | Self::AdditionUnit(literal) => Some(*literal),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OriginalUnit(literal) => write!(f, "OriginalUnit({})", literal.as_int()),
            Self::AdditionUnit(literal) => write!(f, "AdditionUnit({})", literal.as_int()),
            Self::OriginalBinary(index) => write!(f, "OriginalBinary({index})"),
            Self::AdditionBinary(index) => write!(f, "AdditionBinary({index})"),
            Self::Original(index) => write!(f, "Original({index})"),
            Self::Addition(key) => write!(f, "Addition({key:?})"),
        }
    }
}
