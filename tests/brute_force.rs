use otter_red::{
    config::Config, context::Context, generic::minimal_pcg::MinimalPCG32, reports::Report,
    structures::clause::CClause,
};
use rand::{Rng, SeedableRng};

const ATOMS: usize = 10;

fn random_formula(rng: &mut MinimalPCG32, clause_count: usize) -> Vec<CClause> {
    (0..clause_count)
        .map(|_| {
            let width = rng.gen_range(1..=4);
            (0..width)
                .map(|_| {
                    let atom = rng.gen_range(1..=ATOMS as i32);
                    match rng.gen_bool(0.5) {
                        true => atom,
                        false => -atom,
                    }
                })
                .collect()
        })
        .collect()
}

fn satisfied_by(clause: &[i32], assignment: u32) -> bool {
    clause.iter().any(|literal| {
        let value = assignment & (1 << (literal.unsigned_abs() - 1)) != 0;
        value == (*literal > 0)
    })
}

fn brute_force(formula: &[CClause], assumptions: &[i32]) -> bool {
    (0..1_u32 << ATOMS).any(|assignment| {
        assumptions
            .iter()
            .all(|literal| satisfied_by(&[*literal], assignment))
            && formula.iter().all(|clause| satisfied_by(clause, assignment))
    })
}

fn check(formula: &[CClause], assumptions: &[i32], config: Config) {
    let mut ctx = Context::from_config(config);
    let _ = ctx.fresh_or_max_literals(ATOMS);
    for clause in formula {
        assert!(ctx.add_clause(clause.clone()).is_ok());
    }

    let report = ctx.solve_given(assumptions.to_vec()).unwrap();
    let expected = brute_force(formula, assumptions);

    match report {
        Report::Satisfiable => {
            assert!(expected, "{formula:?} under {assumptions:?}");
            let model = ctx.model().unwrap();
            for clause in formula {
                assert!(clause
                    .iter()
                    .any(|literal| model[literal.unsigned_abs() as usize] == Some(*literal > 0)));
            }
            for literal in assumptions {
                assert_eq!(model[literal.unsigned_abs() as usize], Some(*literal > 0));
            }
        }

        Report::Unsatisfiable => {
            assert!(!expected, "{formula:?} under {assumptions:?}");
            let failed = ctx.failed_assumptions();
            assert!(failed.iter().all(|literal| assumptions.contains(literal)));
            if !failed.is_empty() {
                assert!(!brute_force(formula, failed));
            }
        }

        Report::Unknown => panic!("Unknown without a limit"),
    }
}

mod brute_force {
    use super::*;

    #[test]
    fn random_formulas() {
        let mut rng = MinimalPCG32::seed_from_u64(7);
        for round in 0..200 {
            let formula = random_formula(&mut rng, 20 + round % 40);
            check(&formula, &[], Config::default());
        }
    }

    #[test]
    fn random_formulas_without_reducer() {
        let mut rng = MinimalPCG32::seed_from_u64(11);
        let mut config = Config::default();
        config.reducer.enabled.value = false;
        for round in 0..200 {
            let formula = random_formula(&mut rng, 20 + round % 40);
            check(&formula, &[], config.clone());
        }
    }

    #[test]
    fn random_formulas_under_assumptions() {
        let mut rng = MinimalPCG32::seed_from_u64(13);
        for round in 0..200 {
            let formula = random_formula(&mut rng, 10 + round % 30);
            let assumptions = (0..rng.gen_range(1..4))
                .map(|_| {
                    let atom = rng.gen_range(1..=ATOMS as i32);
                    match rng.gen_bool(0.5) {
                        true => atom,
                        false => -atom,
                    }
                })
                .collect::<Vec<_>>();
            check(&formula, &assumptions, Config::default());
        }
    }

    #[test]
    fn random_decisions_without_phase_saving() {
        let mut rng = MinimalPCG32::seed_from_u64(17);
        let mut config = Config::default();
        config.random_decision_bias.value = 0.3;
        config.phase_saving.value = false;
        config.polarity_lean.value = 0.5;
        for round in 0..100 {
            let formula = random_formula(&mut rng, 30 + round % 20);
            check(&formula, &[], config.clone());
        }
    }
}
