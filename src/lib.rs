//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form, where a second thread shortens learnt clauses while the search runs.
//!
//! otter_red is a conflict-driven clause-learning solver with glucose style restarts and clause database reduction.
//! Beside the search a *reducer* thread receives each learnt clause, tries to strengthen it against the permanent facts the search has established, and sends back a shorter clause, a unit, or a proof that the formula is unsatisfiable.
//!
//! # Orientation
//!
//! The library is designed around a [context].
//!
//! Contexts are built from a [configuration](crate::config::Config).
//! Clauses may be added through the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula or [programatically](crate::context::GenericContext::add_clause).
//!
//! Internally a solve is viewed in terms of a handful of databases:
//! - A formula is stored in a [clause database](crate::db::clause), and clauses are accessed through [keys](crate::db::ClauseKey).
//! - A valuation, with the level and reason of each assignment, is stored in an [atom database](crate::db::atom).
//! - The order of assignments is stored on a [trail](crate::db::trail).
//!
//! The search is factored into a collection of [procedures], and the concurrent part of the solver lives in [reducer].
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) for the dynamics of a solve.
//! - The [reducer] for the hand-off of learnt clauses between threads.
//! - The [apply step](crate::procedures::apply_reductions) for how reducer output reaches the search.
//!
//! # Examples
//!
//! ```rust
//! # use otter_red::config::Config;
//! # use otter_red::context::Context;
//! # use otter_red::reports::Report;
//! # use otter_red::structures::literal::Literal;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let [p, q] = *the_context.fresh_or_max_literals(2).as_slice() else {
//!     panic!("Insufficient literals");
//! };
//!
//! assert!(the_context.add_clause(vec![p, q]).is_ok());
//! assert!(the_context.add_clause(vec![-p, -q]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_ne!(the_context.value_of(p.atom()), the_context.value_of(q.atom()));
//! ```
//!
//! Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use otter_red::config::Config;
//! # use otter_red::context::Context;
//! # use otter_red::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is installed by the library.
//! The binary installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, so for example:
//! - Logs of the reducer thread can be filtered with `RUST_LOG=reducer …`
//! - Logs of results applied to the search can be found with `RUST_LOG=coordinator=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod backend;
pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reducer;
pub mod reports;
pub mod structures;
pub mod types;
