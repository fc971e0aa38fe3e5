use otter_red::{builder::ClauseOk, config::Config, context::Context, reports::Report};

mod basic {
    use otter_red::structures::literal::Literal;

    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literals(1)[0];

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(p));
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p.atom()), Some(true));
    }

    #[test]
    fn empty_formula() {
        let mut ctx = Context::from_config(Config::default());
        let _ = ctx.fresh_or_max_literals(3);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model().map(|model| model.len()), Some(4));
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.unsatisfiable_clause().is_ok());
        assert!(!ctx.okay());
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(vec![p, q]));
        assert!(ctx.add_clause(-p).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p.atom()), Some(false));
        assert_eq!(ctx.value_of(q.atom()), Some(true));
    }

    #[test]
    fn duplicates_and_tautologies() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert_eq!(ctx.add_clause(vec![p, p, q, q]), Ok(ClauseOk::Added));
        assert_eq!(ctx.add_clause(vec![p, -p]), Ok(ClauseOk::Tautology));
        assert_eq!(ctx.clause_db.original_binary().len(), 1);
        assert_eq!(ctx.atom_count(), 2);
    }

    #[test]
    fn satisfied_at_level_zero() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        assert_eq!(ctx.add_clause(p), Ok(ClauseOk::Added));
        assert_eq!(ctx.add_clause(vec![p, q, r]), Ok(ClauseOk::Satisfied));
        assert_eq!(ctx.clause_db.original_count(), 1);
    }

    #[test]
    fn falsified_at_level_zero() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(-p).is_ok());
        assert!(ctx.add_clause(-q).is_ok());
        assert!(ctx.add_clause(vec![p, q]).is_ok());

        assert!(!ctx.okay());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn malformed_clauses() {
        let mut ctx = Context::from_config(Config::default());
        let _ = ctx.fresh_or_max_literals(2);

        assert!(ctx.add_clause(Vec::<i32>::new()).is_err());
        assert!(ctx.add_clause(vec![1, 0]).is_err());
        assert!(ctx.add_clause(vec![1, 3]).is_err());
        assert_eq!(ctx.clause_db.original_count(), 0);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn simplify_finds_conflict() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert_eq!(ctx.simplify(), Ok(true));

        assert!(ctx.add_clause(p).is_ok());
        assert_eq!(ctx.simplify(), Ok(false));
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn resolve_after_extension() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q, r]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert!(ctx.add_clause(-p).is_ok());
        assert!(ctx.add_clause(-q).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(r.atom()), Some(true));

        assert!(ctx.add_clause(-r).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn true_literal_is_true() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literals(1)[0];
        let top = ctx.true_literal().unwrap();

        assert_eq!(ctx.true_literal(), Ok(top));
        assert!(ctx.add_clause(vec![-top, p]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p.atom()), Some(true));
    }
}

mod limits {
    use std::sync::atomic::Ordering;

    use super::*;

    fn chain(ctx: &mut Context, length: usize) {
        let literals = ctx.fresh_or_max_literals(length);
        for pair in literals.windows(2) {
            assert!(ctx.add_clause(vec![-pair[0], pair[1]]).is_ok());
        }
    }

    #[test]
    fn interrupt_before_solve() {
        let mut ctx = Context::from_config(Config::default());
        chain(&mut ctx, 8);

        let interrupt = ctx.interrupt_handle();
        interrupt.store(true, Ordering::Relaxed);
        assert_eq!(ctx.solve(), Ok(Report::Unknown));
        assert_eq!(ctx.report(), Report::Unknown);

        interrupt.store(false, Ordering::Relaxed);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn conflict_budget_is_for_one_solve() {
        let mut ctx = Context::from_config(Config::default());
        chain(&mut ctx, 8);

        ctx.set_conflict_limit(Some(0));
        assert_eq!(ctx.solve(), Ok(Report::Unknown));
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn terminate_callback() {
        let mut ctx = Context::from_config(Config::default());
        chain(&mut ctx, 8);

        ctx.set_callback_terminate(Box::new(|| true));
        assert_eq!(ctx.solve(), Ok(Report::Unknown));
    }
}
