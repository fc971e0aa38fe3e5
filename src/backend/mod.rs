/*!
A uniform interface to a solver, for tools built over a choice of solvers.

The interface is the [SatBackend] trait, and [Backend] enumerates the implementations available, selected by [BackendKind] at construction.
At present, the only implementation is a [Context] of this library.

```rust
# use otter_red::backend::{Backend, BackendKind, SatBackend};
# use otter_red::config::Config;
# use otter_red::reports::Report;
let mut backend = Backend::new(BackendKind::OtterRed, Config::default());

let p = backend.fresh_literal().unwrap();
let q = backend.fresh_literal().unwrap();
backend.add_clause(vec![p, q]).unwrap();
backend.add_clause(vec![-p]).unwrap();

assert_eq!(backend.solve_given(vec![-q]), Ok(Report::Unsatisfiable));
assert_eq!(backend.failed_assumptions(), vec![-q]);

assert_eq!(backend.solve_given(vec![]), Ok(Report::Satisfiable));
assert_eq!(backend.value_of(q as u32), Some(true));
```
*/

use rand::SeedableRng;

use crate::{
    config::Config,
    context::Context,
    generic::minimal_pcg::MinimalPCG32,
    reports::Report,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
        valuation::vValuation,
    },
    types::err::ErrorKind,
};

/// The capabilities of a solver.
pub trait SatBackend {
    /// A literal which is always true.
    fn true_literal(&mut self) -> Result<CLiteral, ErrorKind>;

    /// A positive literal of a fresh atom.
    fn fresh_literal(&mut self) -> Result<CLiteral, ErrorKind>;

    fn add_clause(&mut self, clause: CClause) -> Result<(), ErrorKind>;

    /// Limits the next solve to `limit` conflicts, after which the solve returns an unknown result.
    fn set_conflict_limit(&mut self, limit: u64);

    /// Determines satisfiability under the given assumptions.
    fn solve_given(&mut self, assumptions: Vec<CLiteral>) -> Result<Report, ErrorKind>;

    /// False if the formula is known to be unsatisfiable, regardless of assumptions.
    fn okay(&self) -> bool;

    /// The value of `atom` after a satisfiable solve.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The model of the last solve, if satisfiable.
    fn model(&self) -> Option<vValuation>;

    /// A subset of the assumptions of the last solve which is inconsistent with the formula.
    fn failed_assumptions(&self) -> Vec<CLiteral>;

    fn clause_count(&self) -> usize;

    fn learnt_count(&self) -> usize;

    fn atom_count(&self) -> usize;

    /// Notes `atom` must be kept by any simplification.
    fn freeze(&mut self, atom: Atom);

    fn thaw(&mut self, atom: Atom);

    fn set_verbosity(&mut self, verbosity: u8) -> Result<(), ErrorKind>;

    /// Shuffles the order in which atoms are chosen for decisions.
    fn randomize_decisions(&mut self, seed: u64);
}

/// The kinds of backend available.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    OtterRed,
}

/// A backend, of some [kind](BackendKind).
pub enum Backend {
    OtterRed(Box<Context>),
}

impl Backend {
    pub fn new(kind: BackendKind, config: Config) -> Self {
        match kind {
            BackendKind::OtterRed => Backend::OtterRed(Box::new(Context::from_config(config))),
        }
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::OtterRed(_) => BackendKind::OtterRed,
        }
    }
}

impl SatBackend for Backend {
    fn true_literal(&mut self) -> Result<CLiteral, ErrorKind> {
        match self {
            Backend::OtterRed(context) => context.true_literal(),
        }
    }

    fn fresh_literal(&mut self) -> Result<CLiteral, ErrorKind> {
        match self {
            Backend::OtterRed(context) => {
                let atom = context.fresh_atom()?;
                Ok(CLiteral::new(atom, true))
            }
        }
    }

    fn add_clause(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        match self {
            Backend::OtterRed(context) => context.add_clause(clause).map(|_| ()),
        }
    }

    fn set_conflict_limit(&mut self, limit: u64) {
        match self {
            Backend::OtterRed(context) => context.set_conflict_limit(Some(limit)),
        }
    }

    fn solve_given(&mut self, assumptions: Vec<CLiteral>) -> Result<Report, ErrorKind> {
        match self {
            Backend::OtterRed(context) => context.solve_given(assumptions),
        }
    }

    fn okay(&self) -> bool {
        match self {
            Backend::OtterRed(context) => context.okay(),
        }
    }

    fn value_of(&self, atom: Atom) -> Option<bool> {
        match self {
            Backend::OtterRed(context) => context.value_of(atom),
        }
    }

    fn model(&self) -> Option<vValuation> {
        match self {
            Backend::OtterRed(context) => context.model().cloned(),
        }
    }

    fn failed_assumptions(&self) -> Vec<CLiteral> {
        match self {
            Backend::OtterRed(context) => context.failed_assumptions().to_vec(),
        }
    }

    fn clause_count(&self) -> usize {
        match self {
            Backend::OtterRed(context) => context.clause_db.original_count(),
        }
    }

    fn learnt_count(&self) -> usize {
        match self {
            Backend::OtterRed(context) => context.clause_db.addition_count(),
        }
    }

    fn atom_count(&self) -> usize {
        match self {
            Backend::OtterRed(context) => context.atom_count(),
        }
    }

    fn freeze(&mut self, atom: Atom) {
        match self {
            Backend::OtterRed(context) => context.atom_db.freeze(atom),
        }
    }

    fn thaw(&mut self, atom: Atom) {
        match self {
            Backend::OtterRed(context) => context.atom_db.thaw(atom),
        }
    }

    fn set_verbosity(&mut self, verbosity: u8) -> Result<(), ErrorKind> {
        match self {
            Backend::OtterRed(context) => {
                let state = context.state;
                context
                    .config
                    .verbosity
                    .set_in_state(verbosity, &state)?;
                Ok(())
            }
        }
    }

    fn randomize_decisions(&mut self, seed: u64) {
        match self {
            Backend::OtterRed(context) => {
                context.rng = MinimalPCG32::seed_from_u64(seed);
                let context = context.as_mut();
                context.atom_db.randomize_activity(&mut context.rng);
            }
        }
    }
}
