use otter_red::{
    config::{restarts::RestartPolicy, Config},
    context::Context,
    db::ClauseKey,
    generic::minimal_pcg::MinimalPCG32,
    procedures::apply_reductions::ApplyOk,
    reducer::{knowledge::Knowledge, strengthen::strengthen, Reduction, ReductionResult},
    reports::Report,
    structures::{
        clause::{CClause, ClauseSource},
        literal::CLiteral,
    },
    types::err::{ErrorKind, ReducerError},
};
use rand::{Rng, SeedableRng};

mod soundness {
    use super::*;

    const ATOMS: u32 = 6;

    fn random_literal(rng: &mut MinimalPCG32) -> CLiteral {
        let atom = rng.gen_range(1..=ATOMS as i32);
        match rng.gen_bool(0.5) {
            true => atom,
            false => -atom,
        }
    }

    fn holds(literal: CLiteral, assignment: u32) -> bool {
        (assignment & (1 << (literal.unsigned_abs() - 1)) != 0) == (literal > 0)
    }

    /// Every assignment satisfying the facts and `clause` satisfies `result`, and no assignment satisfies the facts and `clause` if `result` is a contradiction.
    fn sound(
        units: &[CLiteral],
        binaries: &[(CLiteral, CLiteral)],
        clause: &[CLiteral],
        result: &ReductionResult,
    ) -> bool {
        (0..1_u32 << ATOMS)
            .filter(|assignment| {
                units.iter().all(|unit| holds(*unit, *assignment))
                    && binaries
                        .iter()
                        .all(|(a, b)| holds(*a, *assignment) || holds(*b, *assignment))
                    && clause.iter().any(|literal| holds(*literal, *assignment))
            })
            .all(|assignment| match result {
                ReductionResult::Unchanged => true,
                ReductionResult::Contradiction => false,
                ReductionResult::Unit(literal) => holds(*literal, assignment),
                ReductionResult::Strengthened { literals, .. } => {
                    literals.iter().any(|literal| holds(*literal, assignment))
                }
            })
    }

    #[test]
    fn exhaustive_on_random_knowledge() {
        let mut rng = MinimalPCG32::seed_from_u64(3);

        for _ in 0..500 {
            let mut knowledge = Knowledge::default();

            let mut units = Vec::default();
            for _ in 0..rng.gen_range(0..3) {
                let unit = random_literal(&mut rng);
                if units.contains(&-unit) {
                    continue;
                }
                knowledge.add_unit(unit);
                units.push(unit);
            }

            let mut binaries = Vec::default();
            for _ in 0..rng.gen_range(0..8) {
                let (a, b) = (random_literal(&mut rng), random_literal(&mut rng));
                knowledge.add_binary(a, b);
                binaries.push((a, b));
            }

            let mut clause = CClause::default();
            for _ in 0..rng.gen_range(2..6) {
                let literal = random_literal(&mut rng);
                if !clause.contains(&literal) && !clause.contains(&-literal) {
                    clause.push(literal);
                }
            }

            let result = strengthen(&clause, &knowledge);
            if let ReductionResult::Strengthened { literals, removed } = &result {
                assert!(literals.len() < clause.len());
                assert!(literals.iter().all(|literal| clause.contains(literal)));
                assert_eq!(literals.len() + removed.len(), clause.len());
            }
            if let ReductionResult::Unit(literal) = &result {
                assert!(clause.contains(literal));
            }
            assert!(
                sound(&units, &binaries, &clause, &result),
                "{clause:?} with {units:?} and {binaries:?} gave {result:?}"
            );
        }
    }
}

mod coordinator {
    use super::*;

    fn context() -> (Context, Vec<CLiteral>) {
        let mut config = Config::default();
        config.reducer.enabled.value = false;
        let mut ctx = Context::from_config(config);
        let literals = ctx.fresh_or_max_literals(6);
        (ctx, literals)
    }

    fn learnt(ctx: &mut Context, clause: CClause) -> ClauseKey {
        ctx.clause_db
            .store(clause, ClauseSource::Resolution, 3, &mut ctx.watches)
            .unwrap()
    }

    #[test]
    fn stale_results_are_discarded() {
        let (mut ctx, _) = context();

        ctx.trail.push_level();
        ctx.assign(1, None);
        let epoch = ctx.trail.epoch();
        let key = learnt(&mut ctx, vec![-1, 2, 3, 4]);

        ctx.backjump(0);
        ctx.trail.push_level();
        ctx.assign(5, None);

        let reduction = Reduction {
            key,
            epoch,
            input_size: 4,
            result: ReductionResult::Unit(2),
        };
        assert_eq!(ctx.apply_reduction(reduction), Ok(ApplyOk::Quiet));
        assert_eq!(ctx.counters.reducer_stale, 1);
        assert_eq!(ctx.counters.reducer_not_output_literals, 4);
        assert_eq!(ctx.atom_db.value_of(2), None);
        assert_eq!(ctx.trail.level(), 1);
    }

    #[test]
    fn stale_strengthening_leaves_the_clause() {
        let (mut ctx, _) = context();

        ctx.trail.push_level();
        ctx.assign(-1, None);
        let epoch = ctx.trail.epoch();
        let key = learnt(&mut ctx, vec![1, 2, 3, 4]);
        let before = ctx.clause_db.literals_of(key).unwrap().to_vec();

        ctx.backjump(0);
        ctx.trail.push_level();
        ctx.assign(-2, None);

        let reduction = Reduction {
            key,
            epoch,
            input_size: 4,
            result: ReductionResult::Strengthened {
                literals: vec![2, 3, 4],
                removed: vec![1],
            },
        };
        assert_eq!(ctx.apply_reduction(reduction), Ok(ApplyOk::Quiet));
        assert_eq!(ctx.clause_db.literals_of(key).unwrap(), before.as_slice());
        assert_eq!(ctx.counters.reducer_stale, 1);
        assert_eq!(ctx.counters.reduced_clauses, 0);
        assert_eq!(ctx.counters.reducer_backtracks, 0);
        assert_eq!(ctx.trail.level(), 1);
        assert_eq!(ctx.atom_db.value_of(2), Some(false));
    }

    #[test]
    fn unit_backjumps_to_zero() {
        let (mut ctx, _) = context();

        let epoch = ctx.trail.epoch();
        let key = learnt(&mut ctx, vec![2, 3, 4]);
        ctx.trail.push_level();
        ctx.assign(-3, None);

        let reduction = Reduction {
            key,
            epoch,
            input_size: 3,
            result: ReductionResult::Unit(2),
        };
        assert_eq!(ctx.apply_reduction(reduction), Ok(ApplyOk::Changed));
        assert_eq!(ctx.trail.level(), 0);
        assert_eq!(ctx.atom_db.value_of(2), Some(true));
        assert_eq!(ctx.counters.reducer_backtracks, 1);
        assert_eq!(ctx.counters.reducer_backtracks_to_zero, 1);
        assert_eq!(ctx.counters.reduced_clauses, 1);
    }

    #[test]
    fn unit_against_level_zero() {
        let (mut ctx, _) = context();
        assert!(ctx.add_clause(-2).is_ok());

        let key = learnt(&mut ctx, vec![2, 3, 4]);
        let reduction = Reduction {
            key,
            epoch: ctx.trail.epoch(),
            input_size: 3,
            result: ReductionResult::Unit(2),
        };
        assert_eq!(ctx.apply_reduction(reduction), Ok(ApplyOk::Contradiction));
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn contradiction() {
        let (mut ctx, _) = context();

        let key = learnt(&mut ctx, vec![2, 3, 4]);
        let reduction = Reduction {
            key,
            epoch: ctx.trail.epoch(),
            input_size: 3,
            result: ReductionResult::Contradiction,
        };
        assert_eq!(ctx.apply_reduction(reduction), Ok(ApplyOk::Contradiction));
        assert_eq!(ctx.unsatisfiable_clause(), Ok(key));
    }

    #[test]
    fn strengthened_to_binary() {
        let (mut ctx, _) = context();

        let key = learnt(&mut ctx, vec![2, 3, 4]);
        let reduction = Reduction {
            key,
            epoch: ctx.trail.epoch(),
            input_size: 3,
            result: ReductionResult::Strengthened {
                literals: vec![2, 3],
                removed: vec![4],
            },
        };
        assert_eq!(ctx.apply_reduction(reduction), Ok(ApplyOk::Changed));
        assert_eq!(ctx.clause_db.long_addition_count(), 0);
        assert_eq!(ctx.clause_db.addition_binary(), &[vec![2, 3]]);
        assert_eq!(ctx.counters.reducer_not_output_literals, 1);
    }

    #[test]
    fn strengthened_and_unit_asserts() {
        let (mut ctx, _) = context();

        ctx.trail.push_level();
        ctx.assign(-2, None);
        let epoch = ctx.trail.epoch();
        let key = learnt(&mut ctx, vec![2, 3, 4, 5]);
        ctx.trail.push_level();
        ctx.assign(-3, None);

        let reduction = Reduction {
            key,
            epoch,
            input_size: 4,
            result: ReductionResult::Strengthened {
                literals: vec![2, 3, 4],
                removed: vec![5],
            },
        };
        assert_eq!(ctx.apply_reduction(reduction), Ok(ApplyOk::Changed));
        assert_eq!(ctx.trail.level(), 2);
        assert_eq!(ctx.atom_db.value_of(4), Some(true));
        assert_eq!(ctx.atom_db.reason_of(4), Some(key));
        assert_eq!(ctx.clause_db.literals_of(key).map(|c| c.len()), Ok(3));
    }

    #[test]
    fn strengthened_and_false_backjumps() {
        let (mut ctx, _) = context();

        ctx.trail.push_level();
        ctx.assign(-2, None);
        let epoch = ctx.trail.epoch();
        let key = learnt(&mut ctx, vec![2, 3, 4, 5]);
        ctx.trail.push_level();
        ctx.assign(-3, None);
        ctx.trail.push_level();
        ctx.assign(-4, None);

        let reduction = Reduction {
            key,
            epoch,
            input_size: 4,
            result: ReductionResult::Strengthened {
                literals: vec![2, 3, 4],
                removed: vec![5],
            },
        };
        assert_eq!(ctx.apply_reduction(reduction), Ok(ApplyOk::Changed));
        assert_eq!(ctx.trail.level(), 2);
        assert_eq!(ctx.atom_db.value_of(4), Some(true));
        assert_eq!(ctx.counters.reducer_backtracks, 1);
        assert_eq!(ctx.counters.reducer_backtrack_levels, 1);
        assert_eq!(ctx.counters.reducer_backtracks_to_zero, 0);
    }

    #[test]
    fn not_a_subset_is_an_error() {
        let (mut ctx, _) = context();

        let key = learnt(&mut ctx, vec![2, 3, 4]);
        let reduction = Reduction {
            key,
            epoch: ctx.trail.epoch(),
            input_size: 3,
            result: ReductionResult::Strengthened {
                literals: vec![2, 5],
                removed: vec![3, 4],
            },
        };
        assert_eq!(
            ctx.apply_reduction(reduction),
            Err(ErrorKind::Reducer(ReducerError::NotSubsumed(key)))
        );
    }
}

mod end_to_end {
    use super::*;

    #[test]
    fn reducer_counts_reach_the_context() {
        let holes = 6;
        let pigeons = holes + 1;
        let atom = |pigeon: usize, hole: usize| (pigeon * holes + hole + 1) as i32;

        let mut ctx = Context::from_config(Config::default());
        let _ = ctx.fresh_or_max_literals(pigeons * holes);
        for pigeon in 0..pigeons {
            let clause = (0..holes).map(|hole| atom(pigeon, hole)).collect::<CClause>();
            assert!(ctx.add_clause(clause).is_ok());
        }
        for hole in 0..holes {
            for a in 0..pigeons {
                for b in a + 1..pigeons {
                    assert!(ctx.add_clause(vec![-atom(a, hole), -atom(b, hole)]).is_ok());
                }
            }
        }

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));

        let counters = &ctx.counters;
        assert!(counters.workset_inserts > 0);
        assert!(counters.reducer.inputs <= counters.workset_inserts);
        assert!(counters.reducer.outputs <= counters.reducer.inputs);
        assert!(counters.workset_deletions <= counters.workset_inserts);
    }

    const ATOMS: usize = 100;

    /// A formula of `binaries` binary clauses and `ternaries` clauses of three, over distinct atoms.
    fn mixed_formula(rng: &mut MinimalPCG32, binaries: usize, ternaries: usize) -> Vec<CClause> {
        let width = |index: usize| match index < binaries {
            true => 2,
            false => 3,
        };
        (0..binaries + ternaries)
            .map(|index| {
                let mut clause = CClause::default();
                while clause.len() < width(index) {
                    let atom = rng.gen_range(1..=ATOMS as i32);
                    if clause.iter().any(|literal: &CLiteral| literal.abs() == atom) {
                        continue;
                    }
                    clause.push(match rng.gen_bool(0.5) {
                        true => atom,
                        false => -atom,
                    });
                }
                clause
            })
            .collect()
    }

    fn context_with(formula: &[CClause], config: Config) -> Context {
        let mut ctx = Context::from_config(config);
        let _ = ctx.fresh_or_max_literals(ATOMS);
        for clause in formula {
            assert!(ctx.add_clause(clause.clone()).is_ok());
        }
        ctx
    }

    #[test]
    fn applied_results_agree_with_a_plain_search() {
        let mut rng = MinimalPCG32::seed_from_u64(29);

        let mut with_reducer = Config::default();
        with_reducer.restarts.policy.value = RestartPolicy::Never;
        let mut without_reducer = with_reducer.clone();
        without_reducer.reducer.enabled.value = false;

        let mut reduced = 0;
        let mut rounds = 0;
        while rounds < 40 && (rounds < 4 || reduced == 0) {
            rounds += 1;
            let formula = mixed_formula(&mut rng, 100, 330);

            let mut ctx = context_with(&formula, with_reducer.clone());
            let report = ctx.solve().unwrap();
            reduced += ctx.counters.reduced_clauses;

            let mut plain = context_with(&formula, without_reducer.clone());
            assert_eq!(plain.solve(), Ok(report), "{formula:?}");

            match report {
                Report::Satisfiable => {
                    let model = ctx.model().unwrap();
                    for clause in &formula {
                        assert!(clause.iter().any(|literal| {
                            model[literal.unsigned_abs() as usize] == Some(*literal > 0)
                        }));
                    }
                }
                Report::Unsatisfiable => {}
                Report::Unknown => panic!("Unknown without a limit"),
            }

            assert_eq!(ctx.solve(), Ok(report));
        }

        assert!(reduced > 0, "No result applied in {rounds} formulas");
    }
}
