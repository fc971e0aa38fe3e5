/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::GenericContext::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.

A formula may also be read from its DIMACS representation, with [read_dimacs](crate::context::GenericContext::read_dimacs).

Clauses are checked before reaching the search, and a clause with the literal `0`, with an atom outside the context, or without any literals, is rejected with a [BuildError].

# Examples

```rust
# use otter_red::context::Context;
# use otter_red::config::Config;
# use otter_red::reports::Report;
# use otter_red::builder::ClauseOk;
# use otter_red::structures::{clause::CClause, literal::{CLiteral, Literal}};
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let clause_a = CClause::from([CLiteral::new(p, true), CLiteral::new(q, false)]);
let clause_b = CClause::from([CLiteral::new(p, false), CLiteral::new(q, true)]);

assert_eq!(the_context.add_clause(clause_a), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause(clause_b), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause(vec![-(p as i32), p as i32]), Ok(ClauseOk::Tautology));
assert!(the_context.add_clause(vec![3]).is_err());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```
*/

pub mod dimacs;

use crate::{
    context::{ContextState, GenericContext},
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause, ClauseSource},
        literal::{CLiteral, Literal},
    },
    types::err::{BuildError, ErrorKind},
};

/// Ok results of adding a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added.
    Added,

    /// The clause contains some literal and its negation, and was skipped.
    Tautology,

    /// The clause contains some literal true at level zero, and was skipped.
    Satisfied,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Adds a clause to the context.
    ///
    /// Any decisions made are undone, and literals false at level zero are removed from the clause.
    /// If every literal of the clause is false at level zero, the context is noted as unsatisfiable.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        if clause.size() == 0 {
            return Err(BuildError::EmptyClause.into());
        }

        let mut literals = CClause::with_capacity(clause.size());
        for literal in clause.literals() {
            if literal == 0 {
                return Err(BuildError::ZeroLiteral.into());
            }
            if literal.atom() as usize >= self.atom_db.count() {
                return Err(BuildError::UnknownAtom.into());
            }
            literals.push(literal);
        }

        self.backjump(0);
        match self.state {
            ContextState::Unsatisfiable(_) => return Ok(ClauseOk::Added),
            _ => self.state = ContextState::Input,
        }

        literals.sort_unstable();
        literals.dedup();
        if literals
            .iter()
            .any(|literal| literals.binary_search(&literal.negate()).is_ok())
        {
            return Ok(ClauseOk::Tautology);
        }

        if literals
            .iter()
            .any(|literal| self.atom_db.literal_value(*literal) == Some(true))
        {
            return Ok(ClauseOk::Satisfied);
        }

        let falsified = literals[0];
        literals.retain(|literal| self.atom_db.literal_value(*literal).is_none());

        match literals.len() {
            0 => {
                let key = self
                    .atom_db
                    .reason_of(falsified.atom())
                    .unwrap_or(ClauseKey::OriginalUnit(falsified.negate()));
                log::info!(target: targets::CLAUSE_DB, "Clause falsified at level zero by {key}");
                self.state = ContextState::Unsatisfiable(key);
            }

            1 => {
                let literal = literals[0];
                let key =
                    self.clause_db
                        .store(literals, ClauseSource::Original, 1, &mut self.watches)?;
                self.assign(literal, Some(key));
            }

            _ => {
                self.clause_db
                    .store(literals, ClauseSource::Original, 0, &mut self.watches)?;
            }
        }

        Ok(ClauseOk::Added)
    }

    /// Adds each clause of `clauses` to the context.
    pub fn add_clauses<C: Clause>(
        &mut self,
        clauses: impl IntoIterator<Item = C>,
    ) -> Result<(), ErrorKind> {
        for clause in clauses {
            self.add_clause(clause)?;
        }
        Ok(())
    }

    /// Whether `literal` is a literal of some atom of the context.
    pub fn is_known(&self, literal: CLiteral) -> bool {
        literal != 0 && (literal.atom() as usize) < self.atom_db.count()
    }
}
