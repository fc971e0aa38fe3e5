//! Reading formulas in the DIMACS CNF format.
//!
//! - Lines beginning with `c` are comments.
//! - An optional problem line `p cnf <atoms> <clauses>` fixes the atoms of the formula, and a literal outside these atoms is an error.
//!   Without a problem line, atoms are added as met.
//! - Clauses are sequences of non-zero integers terminated by `0`, and may span lines.
//! - A line beginning with `%` ends the formula.

use std::io::BufRead;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{atom::Atom, clause::CClause, literal::Literal},
    types::err::{ErrorKind, ParseError},
};

/// Details of a formula read from DIMACS.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DimacsInfo {
    /// The count of atoms given in the problem line, if any.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given in the problem line, if any.
    pub expected_clauses: Option<usize>,

    /// The count of clauses read.
    pub clauses: usize,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Reads a DIMACS formula into the context.
    ///
    /// ```rust
    /// # use otter_red::context::Context;
    /// # use otter_red::config::Config;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let dimacs = b"
    /// c A comment.
    /// p cnf 4 3
    ///  1  2       0
    /// -1  2  3
    ///       -3 -4 0
    ///  4          0
    /// ";
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.expected_atoms, Some(4));
    /// assert_eq!(info.clauses, 3);
    /// assert_eq!(the_context.atom_count(), 4);
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<DimacsInfo, ErrorKind> {
        let mut info = DimacsInfo::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer = CClause::default();
        let mut line_counter = 0;

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ParseError::Line(line_counter).into()),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue 'formula_loop,

                Some('%') => break 'formula_loop,

                Some('p') => {
                    if info.expected_atoms.is_some() {
                        return Err(ParseError::ProblemSpecification.into());
                    }
                    let mut details = buffer.split_whitespace().skip(1);
                    if details.next() != Some("cnf") {
                        return Err(ParseError::ProblemSpecification.into());
                    }
                    let mut count = || -> Result<usize, ErrorKind> {
                        details
                            .next()
                            .and_then(|string| string.parse().ok())
                            .ok_or(ParseError::ProblemSpecification.into())
                    };
                    let atoms = count()?;
                    let clauses = count()?;

                    let max_atom =
                        Atom::try_from(atoms).map_err(|_| ParseError::ProblemSpecification)?;
                    self.ensure_atom(max_atom)?;
                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                }

                Some(_) => {
                    for item in buffer.split_whitespace() {
                        let literal = item
                            .parse::<i32>()
                            .map_err(|_| ParseError::Literal(line_counter))?;

                        if literal == 0 {
                            self.add_clause(std::mem::take(&mut clause_buffer))?;
                            info.clauses += 1;
                            continue;
                        }

                        let atom = literal.atom();
                        match info.expected_atoms {
                            Some(atoms) if atom as usize > atoms => {
                                return Err(ParseError::AtomOutOfRange(line_counter).into());
                            }
                            Some(_) => {}
                            None => self.ensure_atom(atom)?,
                        }
                        clause_buffer.push(literal);
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(ParseError::UnterminatedClause.into());
        }

        log::info!(
            target: targets::CLAUSE_DB,
            "Read {} clauses over {} atoms",
            info.clauses,
            self.atom_count()
        );
        Ok(info)
    }
}
