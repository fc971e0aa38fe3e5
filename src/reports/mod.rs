/*!
Reports for the context, and the result format written by the binary.

A result is written as a line of `SAT`, `UNSAT` or `INDET`, and in the case of `SAT` followed by a model: each atom as a signed literal, in order, terminated by `0`.

```rust
# use otter_red::reports::{write_result, Report};
let mut out = Vec::default();
let model = vec![Some(true), Some(false), None, Some(true)];
write_result(&mut out, Report::Satisfiable, &model).unwrap();
assert_eq!(String::from_utf8(out).unwrap(), "SAT\n-1 2 3 0\n");

let mut out = Vec::default();
write_result(&mut out, Report::Unknown, &[]).unwrap();
assert_eq!(String::from_utf8(out).unwrap(), "INDET\n");
```

Atoms without a value in a model are written as positive literals, as any value satisfies the formula.
*/

use std::io::Write;

use crate::{
    context::ContextState,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Configuration | ContextState::Input | ContextState::Solving => {
                Self::Unknown
            }
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable(_) | ContextState::AssumptionsFailed => {
                Self::Unsatisfiable
            }
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The literals of `model`, skipping the top atom.
pub fn model_literals(model: &[Option<bool>]) -> impl Iterator<Item = CLiteral> + '_ {
    model
        .iter()
        .enumerate()
        .skip(1)
        .map(|(atom, value)| CLiteral::new(atom as Atom, value.unwrap_or(true)))
}

/// Writes `report` in the result format, with `model` written only if the report is satisfiable.
pub fn write_result(
    out: &mut impl Write,
    report: Report,
    model: &[Option<bool>],
) -> std::io::Result<()> {
    match report {
        Report::Satisfiable => {
            writeln!(out, "SAT")?;
            for literal in model_literals(model) {
                write!(out, "{literal} ")?;
            }
            writeln!(out, "0")
        }
        Report::Unsatisfiable => writeln!(out, "UNSAT"),
        Report::Unknown => writeln!(out, "INDET"),
    }
}
