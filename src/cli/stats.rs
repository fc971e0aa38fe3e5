use std::time::Duration;

use otter_red::context::Counters;

const RULE: &str = "c =========================================================================================================";

fn per_second(count: u64, time: f64) -> f64 {
    match time > 0.0 {
        true => count as f64 / time,
        false => 0.0,
    }
}

fn percentage(part: u64, whole: u64) -> f64 {
    match whole {
        0 => 0.0,
        _ => part as f64 * 100.0 / whole as f64,
    }
}

fn average(total: u64, count: u64) -> f64 {
    match count {
        0 => 0.0,
        _ => total as f64 / count as f64,
    }
}

pub fn print_header() {
    println!("c ========================================[ Problem Statistics ]===========================================");
    println!("c |                                                                                                       |");
}

pub fn print_problem(atoms: usize, clauses: usize, parse_time: Duration, mem_lim: Option<u64>) {
    println!("c |  Number of variables:  {atoms:>12}                                                                   |");
    println!("c |  Number of clauses:    {clauses:>12}                                                                   |");
    println!("c |  Parse time:           {:>12.2} s                                                                 |", parse_time.as_secs_f64());
    if let Some(mb) = mem_lim {
        println!("c |  Memory limit:         {mb:>12} MB (noted)                                                         |");
    }
    println!("c |                                                                                                       |");
}

pub fn print_rule() {
    println!("{RULE}");
}

pub fn print_progress(counters: &Counters) {
    println!(
        "c | {:>10} conflicts | {:>8} restarts | {:>8} reductions | {:>10} reduced by the reducer |",
        counters.conflicts, counters.restarts, counters.reductions, counters.reduced_clauses
    );
}

pub fn print_stats(counters: &Counters, time: Duration) {
    let time = time.as_secs_f64();
    let reducer = &counters.reducer;

    println!("c restarts              : {} ({} conflicts in avg)", counters.restarts, counters.conflicts.checked_div(counters.restarts).unwrap_or(0));
    println!("c blocked restarts      : {} (multiple: {}) ", counters.blocked_restarts, counters.blocked_restarts_in_row);
    println!("c last block at restart : {}", counters.last_block_at_restart);
    println!("c nb ReduceDB           : {}", counters.reductions);
    println!("c nb removed Clauses    : {}", counters.removed_clauses);
    println!("c nb learnts DL2        : {}", counters.learnt_glue_two);
    println!("c nb learnts size 2     : {}", counters.learnt_binary);
    println!("c nb learnts size 1     : {}", counters.learnt_unit);

    println!("c conflicts             : {:<12}   ({:.0} /sec)", counters.conflicts, per_second(counters.conflicts, time));
    println!("c decisions             : {:<12}   ({:4.2} % random) ({:.0} /sec)", counters.decisions, percentage(counters.random_decisions, counters.decisions), per_second(counters.decisions, time));
    println!("c propagations          : {:<12}   ({:.0} /sec)", counters.propagations, per_second(counters.propagations, time));
    println!("c conflict literals     : {:<12}   ({:4.2} % deleted)", counters.tot_literals, percentage(counters.max_literals - counters.tot_literals, counters.max_literals));
    println!("c nb reduced Clauses    : {}", counters.reduced_clauses);

    println!();
    println!("c -- solver/reducer statistics --");
    println!("c workset inserts       : {:<12}", counters.workset_inserts);
    println!("c workset inserts lits  : {:<12}", counters.workset_insert_literals);
    println!("c workset deletions     : {:<12}", counters.workset_deletions);
    println!("c workset deletions lits: {:<12}", counters.workset_deletion_literals);
    println!("c reducer inputs        : {:<12}", reducer.inputs);
    println!("c reducer inputs lits   : {:<12}", reducer.input_literals);
    println!("c reducer outputs       : {:<12}", reducer.outputs);
    println!("c reducer outputs lits  : {:<12}", reducer.output_literals);
    println!("c reducer not outp. lits: {:<12}", counters.reducer_not_output_literals);
    println!("c reducer stale results : {:<12}", counters.reducer_stale);
    println!(
        "c reducer forced backtr.: {:<12}   (avg. {:.1} levels from level {:.1})",
        counters.reducer_backtracks,
        average(counters.reducer_backtrack_levels, counters.reducer_backtracks),
        average(counters.reducer_backtrack_level_before, counters.reducer_backtracks)
    );
    println!("c reducer f.backtr. to 0: {:<12}", counters.reducer_backtracks_to_zero);
    println!();

    println!("c wall time             : {time} s");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_ratios() {
        assert_eq!(per_second(10, 0.0), 0.0);
        assert_eq!(percentage(1, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(average(9, 3), 3.0);
    }
}
