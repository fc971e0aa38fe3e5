#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{fs::File, io::Write, path::PathBuf, time::Instant};

use otter_red::{
    context::Context,
    reports::{model_literals, write_result, Report},
    types::err::ErrorKind,
};

mod parse;
mod read;
mod stats;

use read::ReadError;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let start = Instant::now();
    let matches = parse::cli().get_matches();
    let options = parse::options_from_args(&matches);

    let config = match parse::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            println!("c ERROR! Invalid option: {e:?}");
            std::process::exit(1);
        }
    };
    let verbose = config.verbosity.value > 0;

    println!("c This is otter_red {}", env!("CARGO_PKG_VERSION"));

    let mut the_context = Context::from_config(config);
    if verbose {
        the_context.set_callback_progress(Box::new(stats::print_progress));
        stats::print_header();
    }

    let info = match read::read_formula(&mut the_context, options.input.as_deref()) {
        Ok(info) => info,
        Err(ReadError::Open) => {
            println!("c ERROR! Could not open file: {}", display_input(&options.input));
            std::process::exit(1);
        }
        Err(ReadError::Unsupported) => {
            println!("c ERROR! Support for xz compressed input is not built in");
            std::process::exit(1);
        }
        Err(ReadError::Formula(e)) => {
            println!("c ERROR! Malformed input: {e:?}");
            std::process::exit(1);
        }
    };

    let mut result_file = options.result.as_ref().and_then(|path| match File::create(path) {
        Ok(file) => Some(file),
        Err(_) => {
            println!("c WARNING! Could not open result file: {}", path.display());
            None
        }
    });

    if verbose {
        stats::print_problem(
            the_context.atom_count(),
            info.clauses,
            start.elapsed(),
            options.mem_lim,
        );
    }

    let settled = match settled_by_simplify(the_context.simplify()) {
        Ok(settled) => settled,
        Err(e) => {
            println!("c ERROR! {e:?}");
            std::process::exit(1);
        }
    };

    if settled == Some(Report::Unsatisfiable) {
        if let Some(file) = &mut result_file {
            let _ = write_result(file, Report::Unsatisfiable, &[]);
        }
        if verbose {
            stats::print_rule();
            println!("c Solved by unit propagation");
            stats::print_stats(&the_context.counters, start.elapsed());
            println!();
        }
        println!("s UNSATISFIABLE");
        std::process::exit(exit_code(Report::Unsatisfiable));
    }

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            println!("c ERROR! {e:?}");
            std::process::exit(1);
        }
    };

    if verbose {
        stats::print_stats(&the_context.counters, start.elapsed());
        println!();
    }

    let model = the_context.model().cloned().unwrap_or_default();
    match &mut result_file {
        Some(file) => {
            if write_result(file, report, &model).is_err() {
                println!("c WARNING! Could not write result file");
            }
        }

        None => {
            let mut stdout = std::io::stdout().lock();
            let _ = match report {
                Report::Satisfiable => writeln!(stdout, "s SATISFIABLE"),
                Report::Unsatisfiable => writeln!(stdout, "s UNSATISFIABLE"),
                Report::Unknown => writeln!(stdout, "s UNKNOWN"),
            };
            if report == Report::Satisfiable {
                let _ = write!(stdout, "v");
                for literal in model_literals(&model) {
                    let _ = write!(stdout, " {literal}");
                }
                let _ = writeln!(stdout, " 0");
            }
        }
    }

    drop(the_context);
    std::process::exit(exit_code(report))
}

/// The report settled by level zero propagation, if any.
///
/// Errors pass through, as these are internal failures and not evidence of unsatisfiability.
fn settled_by_simplify(result: Result<bool, ErrorKind>) -> Result<Option<Report>, ErrorKind> {
    match result? {
        true => Ok(None),
        false => Ok(Some(Report::Unsatisfiable)),
    }
}

fn exit_code(report: Report) -> i32 {
    match report {
        Report::Satisfiable => 10,
        Report::Unsatisfiable => 20,
        Report::Unknown => 0,
    }
}

fn display_input(input: &Option<PathBuf>) -> String {
    match input {
        Some(path) => path.display().to_string(),
        None => "<stdin>".to_string(),
    }
}
