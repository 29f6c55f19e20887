use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};
use log::{error, LevelFilter};
use std::process;

use scansplit::commands::{CommandFactory, ScansplitCommandFactory};
use scansplit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("scansplit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Split a flatbed scan of several photos into one file per photo")
        .arg(
            Arg::new("input")
                .help("Scan to split (JPEG or PNG), or a run directory with --list")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Where to write the parsed photos (defaults to the system temp dir)")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Batch of scanned photos, used in output names")
                .value_name("ID")
                .required_unless_present("list"),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .help("How many photos to expect in the scan")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding the default tuning")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("namespace")
                .long("namespace")
                .help("Directory between the output dir and the batch id")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Log file")
                .value_name("FILE")
                .default_value("scansplit.log"),
        )
        .arg(
            Arg::new("record-file")
                .long("record-file")
                .help("File receiving one line per written photo")
                .value_name("FILE")
                .default_value("scansplit-runs.log"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("List photo files of a run directory in rank order")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };
    let log_file = matches.get_one::<String>("log-file").map(String::as_str).unwrap_or("scansplit.log");
    if let Err(e) = Logger::init_global_logger(log_file, level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let record_file = matches.get_one::<String>("record-file")
        .map(String::as_str)
        .unwrap_or("scansplit-runs.log");
    let logger = match Logger::new(record_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing run record: {}", e);
            process::exit(1);
        }
    };

    let factory = ScansplitCommandFactory::new();

    let command = match factory.create_command(&matches, &logger) {
        Ok(command) => command,
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = command.execute() {
        error!("Command execution error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
