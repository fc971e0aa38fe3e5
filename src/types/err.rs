//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Some of these are internally expected: e.g. BCP conflicts are used to control the flow of a solve.
//! - Some are external: e.g. a context returns a [BuildError] when asked to add a clause containing an atom it does not know.
//!
//! A few errors have a special standing:
//! - [ErrorKind::OutOfMemory] is caught by a solve and reported as an [unknown](crate::reports::Report::Unknown) result.
//! - [ReducerError::NotSubsumed] means the reducer sent a clause which is not a subset of the clause it was given.
//!   This breaks the soundness of the solver, and so is surfaced from a solve rather than handled.
//!
//! Names of the error enums overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::db::ClauseKey;

/// The error type of the library, wrapping errors from specific areas.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    AtomDB(AtomDBError),
    BCP(BCPError),
    Build(BuildError),
    ClauseDB(ClauseDBError),
    Config(ConfigError),
    Parse(ParseError),
    Reducer(ReducerError),

    /// Some reservation of memory failed.
    OutOfMemory,

    /// A method was called in a state which does not support the method.
    InvalidState,
}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Somehow resolution resolved to an empty clause.
    EmptyResolution,

    /// Resolution reached a literal without a reason before finding a unique implication point.
    NoAssertion,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Noted errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),

    /// Some corruption in the watched literals of a clause.
    /// This is unexpected.
    CorruptWatch,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Malformed input, rejected before reaching the search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A clause without any literals.
    EmptyClause,

    /// The literal `0`, which has no atom.
    ZeroLiteral,

    /// A literal whose atom is not part of the context.
    UnknownAtom,

    /// An assumption whose atom is not part of the context.
    UnknownAssumption,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Attempt to read the literals of a unit clause through its key.
    UnitKey,

    /// Attempt to transfer a clause which is not two literals long to the binary database.
    TransferBinary,

    /// A clause is missing, most likely due to a reduction of the database.
    Missing,

    /// An invalid key index.
    InvalidKeyIndex,

    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// All possible keys have been used for some clause type.
    StorageExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors when revising a configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value is outside the range of the option.
    OutOfRange {
        /// The name of the option.
        name: &'static str,
    },

    /// The option may not be revised in the current state of the context.
    InvalidState {
        /// The name of the option.
        name: &'static str,
    },
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A token which is not an integer, at a specific line.
    Literal(usize),

    /// A literal whose atom is beyond the count given in the problem specification, at a specific line.
    AtomOutOfRange(usize),

    /// A clause was not terminated with a `0`.
    UnterminatedClause,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors in the exchange between a solve and the reducer thread.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReducerError {
    /// The reducer thread could not be started.
    Spawn,

    /// The reducer thread stopped unexpectedly, e.g. due to a panic.
    Disconnected,

    /// The shared snapshot of permanent facts was poisoned.
    PoisonedSnapshot,

    /// A strengthened clause is not a subset of the clause it was derived from.
    NotSubsumed(ClauseKey),
}

impl From<ReducerError> for ErrorKind {
    fn from(e: ReducerError) -> Self {
        ErrorKind::Reducer(e)
    }
}
