use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use otter_red::{config::Config, types::err::ConfigError};

pub fn cli() -> Command {
    Command::new("otter_red")
        .about("Determines whether a formula is satisfiable or unsatisfiable, with a reducer thread shortening learnt clauses")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("input")
            .required(false)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file to parse, read from standard input if absent."))

        .arg(Arg::new("result")
            .required(false)
            .value_parser(value_parser!(PathBuf))
            .help("A file to write the result to, as SAT with a model, UNSAT, or INDET."))

        .arg(Arg::new("verb")
            .long("verb")
            .value_parser(value_parser!(u8))
            .num_args(1)
            .help("Verbosity level (0=silent, 1=some, 2=more).")
            .default_value("1"))

        .arg(Arg::new("vv")
            .long("vv")
            .value_parser(value_parser!(u32))
            .num_args(1)
            .help("Verbosity every vv conflicts.")
            .default_value("10000"))

        .arg(Arg::new("cpu_lim")
            .long("cpu-lim")
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .num_args(1)
            .help("Limit on wall-clock time allowed in seconds.")
            .long_help("Limit on wall-clock time allowed in seconds.

Time is measured from the start of a solve, not as process CPU time.
The limit is checked between steps of the search, after which the result is unknown."))

        .arg(Arg::new("mem_lim")
            .long("mem-lim")
            .value_name("MB")
            .value_parser(value_parser!(u64))
            .num_args(1)
            .help("Limit on memory usage in megabytes.")
            .long_help("Limit on memory usage in megabytes.

The limit is noted only.
If a reservation of memory for a learnt clause fails, the result is unknown."))

        .arg(Arg::new("no_reducer")
            .long("no-reducer")
            .action(ArgAction::SetTrue)
            .help("Solve without the reducer thread."))

        .arg(Arg::new("workset")
            .long("workset")
            .value_name("CAPACITY")
            .value_parser(value_parser!(usize))
            .num_args(1)
            .help("The capacity of the workset of clauses waiting for the reducer.")
            .long_help("The capacity of the workset of clauses waiting for the reducer.

When the workset is full, the oldest waiting clause is dropped."))
}

/// Options of the binary which are not part of the configuration of a context.
pub struct Options {
    pub input: Option<PathBuf>,
    pub result: Option<PathBuf>,
    pub mem_lim: Option<u64>,
}

pub fn options_from_args(args: &ArgMatches) -> Options {
    Options {
        input: args.get_one::<PathBuf>("input").cloned(),
        result: args.get_one::<PathBuf>("result").cloned(),
        mem_lim: args.get_one::<u64>("mem_lim").copied(),
    }
}

pub fn config_from_args(args: &ArgMatches) -> Result<Config, ConfigError> {
    let mut the_config = Config::default();

    if let Some(verb) = args.get_one::<u8>("verb") {
        the_config.verbosity.set(*verb)?;
    }

    if let Some(interval) = args.get_one::<u32>("vv") {
        the_config.verbosity_interval.set(*interval)?;
    }

    if let Some(secs) = args.get_one::<u64>("cpu_lim") {
        the_config
            .time_limit
            .set(Some(std::time::Duration::from_secs(*secs)))?;
    }

    if args.get_flag("no_reducer") {
        the_config.reducer.enabled.set(false)?;
    }

    if let Some(capacity) = args.get_one::<usize>("workset") {
        the_config.reducer.workset_capacity.set(*capacity)?;
    }

    Ok(the_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_reach_the_config() {
        let args = cli().get_matches_from([
            "otter_red",
            "--verb",
            "0",
            "--no-reducer",
            "--workset",
            "16",
            "--cpu-lim",
            "5",
            "in.cnf",
        ]);
        let config = config_from_args(&args).unwrap();
        assert_eq!(config.verbosity.value, 0);
        assert!(!config.reducer.enabled.value);
        assert_eq!(config.reducer.workset_capacity.value, 16);
        assert_eq!(
            config.time_limit.value,
            Some(std::time::Duration::from_secs(5))
        );

        let options = options_from_args(&args);
        assert_eq!(options.input, Some(PathBuf::from("in.cnf")));
        assert!(options.result.is_none());
    }

    #[test]
    fn workset_out_of_range() {
        let args = cli().get_matches_from(["otter_red", "--workset", "0"]);
        assert!(config_from_args(&args).is_err());
    }
}
