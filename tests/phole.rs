use otter_red::{
    config::{restarts::RestartPolicy, Config},
    context::Context,
    reports::Report,
    structures::clause::CClause,
};

/// The pigeonhole formula of `holes + 1` pigeons in `holes` holes.
fn pigeonhole(holes: usize) -> (usize, Vec<CClause>) {
    let pigeons = holes + 1;
    let atom = |pigeon: usize, hole: usize| (pigeon * holes + hole + 1) as i32;

    let mut clauses = Vec::default();
    for pigeon in 0..pigeons {
        clauses.push((0..holes).map(|hole| atom(pigeon, hole)).collect());
    }
    for hole in 0..holes {
        for a in 0..pigeons {
            for b in a + 1..pigeons {
                clauses.push(vec![-atom(a, hole), -atom(b, hole)]);
            }
        }
    }
    (pigeons * holes, clauses)
}

fn report_on(holes: usize, config: Config) -> Report {
    let (atoms, clauses) = pigeonhole(holes);
    let mut ctx = Context::from_config(config);
    let _ = ctx.fresh_or_max_literals(atoms);
    for clause in clauses {
        assert!(ctx.add_clause(clause).is_ok());
    }
    ctx.solve().unwrap()
}

mod phole {
    use super::*;

    #[test]
    fn normal() {
        for holes in [3, 4, 5, 6] {
            assert_eq!(report_on(holes, Config::default()), Report::Unsatisfiable);
        }
    }

    #[test]
    fn without_reducer() {
        let mut config = Config::default();
        config.reducer.enabled.value = false;
        for holes in [4, 5, 6] {
            assert_eq!(report_on(holes, config.clone()), Report::Unsatisfiable);
        }
    }

    #[test]
    fn luby_restarts() {
        let mut config = Config::default();
        config.restarts.policy.value = RestartPolicy::Luby;
        config.restarts.luby_u.value = 4;
        assert_eq!(report_on(6, config), Report::Unsatisfiable);
    }

    #[test]
    fn no_restarts_small_workset() {
        let mut config = Config::default();
        config.restarts.policy.value = RestartPolicy::Never;
        config.reducer.workset_capacity.value = 1;
        assert_eq!(report_on(6, config), Report::Unsatisfiable);
    }

    #[test]
    fn frequent_reductions() {
        let mut config = Config::default();
        config.clause_db.reduction_first.value = 20;
        config.clause_db.reduction_increment.value = 10;
        config.random_decision_bias.value = 0.05;
        let (atoms, clauses) = pigeonhole(6);

        let mut ctx = Context::from_config(config);
        let _ = ctx.fresh_or_max_literals(atoms);
        for clause in clauses {
            assert!(ctx.add_clause(clause).is_ok());
        }
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.counters.reductions > 0);
    }

    #[test]
    fn enough_holes() {
        let (atoms, mut clauses) = pigeonhole(5);
        // Remove the last pigeon.
        clauses.remove(5);
        clauses.retain(|clause| {
            clause
                .iter()
                .all(|literal| (literal.unsigned_abs() as usize) <= 5 * 5)
        });

        let mut ctx = Context::from_config(Config::default());
        let _ = ctx.fresh_or_max_literals(atoms);
        for clause in &clauses {
            assert!(ctx.add_clause(clause.clone()).is_ok());
        }
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let model = ctx.model().unwrap();
        for clause in &clauses {
            assert!(clause
                .iter()
                .any(|literal| model[literal.unsigned_abs() as usize] == Some(*literal > 0)));
        }
    }
}
