use otter_red::{
    backend::{Backend, BackendKind, SatBackend},
    config::Config,
    reports::Report,
};

fn backend() -> Backend {
    Backend::new(BackendKind::OtterRed, Config::default())
}

mod backend {
    use super::*;

    #[test]
    fn kind() {
        assert_eq!(backend().kind(), BackendKind::OtterRed);
    }

    #[test]
    fn incremental_use() {
        let mut backend = backend();
        let [p, q, r] = [(); 3].map(|_| backend.fresh_literal().unwrap());
        assert_eq!(backend.atom_count(), 3);

        backend.add_clause(vec![p, q, r]).unwrap();
        backend.add_clause(vec![-p, q]).unwrap();
        assert_eq!(backend.clause_count(), 2);

        assert_eq!(backend.solve_given(vec![-q, -r]), Ok(Report::Unsatisfiable));
        let failed = backend.failed_assumptions();
        assert!(!failed.is_empty());
        assert!(failed.iter().all(|literal| [-q, -r].contains(literal)));
        assert!(backend.okay());

        assert_eq!(backend.solve_given(vec![-q]), Ok(Report::Satisfiable));
        assert_eq!(backend.value_of(r as u32), Some(true));
        assert_eq!(backend.value_of(p as u32), Some(false));
        assert!(backend.model().is_some());

        backend.add_clause(vec![-r]).unwrap();
        assert_eq!(backend.solve_given(vec![-q]), Ok(Report::Unsatisfiable));
        assert!(backend.model().is_none());

        backend.add_clause(vec![-q]).unwrap();
        assert_eq!(backend.solve_given(vec![]), Ok(Report::Unsatisfiable));
        assert!(!backend.okay());
        assert!(backend.failed_assumptions().is_empty());
    }

    #[test]
    fn true_literal() {
        let mut backend = backend();
        let top = backend.true_literal().unwrap();
        let p = backend.fresh_literal().unwrap();
        backend.add_clause(vec![-top, p]).unwrap();

        assert_eq!(backend.solve_given(vec![]), Ok(Report::Satisfiable));
        assert_eq!(backend.value_of(p as u32), Some(true));
    }

    #[test]
    fn conflict_limit() {
        let mut backend = backend();
        let atoms = (0..12)
            .map(|_| backend.fresh_literal().unwrap())
            .collect::<Vec<_>>();
        // Pigeons 0..4 into holes 0..3.
        let atom = |pigeon: usize, hole: usize| atoms[pigeon * 3 + hole];
        for pigeon in 0..4 {
            backend.add_clause((0..3).map(|hole| atom(pigeon, hole)).collect()).unwrap();
        }
        for hole in 0..3 {
            for a in 0..4 {
                for b in a + 1..4 {
                    backend.add_clause(vec![-atom(a, hole), -atom(b, hole)]).unwrap();
                }
            }
        }

        backend.set_conflict_limit(0);
        assert_eq!(backend.solve_given(vec![]), Ok(Report::Unknown));
        assert!(backend.okay());

        assert_eq!(backend.solve_given(vec![]), Ok(Report::Unsatisfiable));
        assert!(backend.learnt_count() > 0);
    }

    #[test]
    fn randomized_decisions() {
        let mut backend = backend();
        let literals = (0..8)
            .map(|_| backend.fresh_literal().unwrap())
            .collect::<Vec<_>>();
        for pair in literals.windows(2) {
            backend.add_clause(vec![-pair[0], pair[1]]).unwrap();
        }
        backend.randomize_decisions(7);
        assert!(backend.set_verbosity(0).is_ok());

        assert_eq!(backend.solve_given(vec![literals[0]]), Ok(Report::Satisfiable));
        assert!(literals
            .iter()
            .all(|literal| backend.value_of(*literal as u32) == Some(true)));
    }

    #[test]
    fn freeze_and_thaw() {
        let mut backend = backend();
        let p = backend.fresh_literal().unwrap();
        backend.freeze(p as u32);
        backend.add_clause(vec![p]).unwrap();
        backend.thaw(p as u32);

        assert_eq!(backend.solve_given(vec![]), Ok(Report::Satisfiable));
        assert_eq!(backend.value_of(p as u32), Some(true));
    }
}
