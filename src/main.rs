use std::{
    fs,
    io::{self, Read},
    process,
};

use anyhow::{Context, Result};
use clap::{App, Arg};
use log::{debug, error, LevelFilter};

use epsilon_helper::Grammar;

const OUTPUTS: [&str; 3] = ["prod", "nullable", "ee"];

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Plain,
    LaTeX,
    JSON,
}

macro_rules! render {
    ($t:expr, $format:expr) => {
        match $format {
            OutputFormat::Plain => $t.to_plaintext(),
            OutputFormat::LaTeX => $t.to_latex(),
            OutputFormat::JSON => $t.to_json(),
        }
    };
}

fn read_input(source: Option<&str>) -> Result<String> {
    match source {
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {}", path)),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read standard input")?;
            Ok(input)
        }
    }
}

fn process_grammar(source: Option<&str>, outputs: &[&str], format: OutputFormat) -> Result<()> {
    let name = source.unwrap_or("<stdin>");
    let input = read_input(source)?;
    let g = Grammar::parse(&input).with_context(|| format!("invalid grammar in {}", name))?;
    debug!("{}: {} productions", name, g.num_productions());

    let nullable = g.nullable_set();
    for output in outputs {
        match *output {
            "prod" => println!("{}", render!(g.to_production_output_vec(), format)),
            "nullable" => println!("{}", render!(g.to_nullable_output(&nullable), format)),
            "ee" => {
                let eliminated = g.eliminate_epsilon(&nullable);
                println!("{}", render!(eliminated.to_production_output_vec(), format));
            }
            _ => unreachable!("clap restricts the output values"),
        }
    }
    Ok(())
}

fn main() {
    let matches = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("OUTPUT")
                .help("What to print: productions, nullable set, epsilon-free grammar")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .possible_values(&OUTPUTS),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .value_name("FORMAT")
                .takes_value(true)
                .possible_values(&["plain", "latex", "json"])
                .default_value("plain"),
        )
        .arg(
            Arg::with_name("verbosity")
                .short("v")
                .multiple(true)
                .help("Increase message verbosity"),
        )
        .arg(
            Arg::with_name("GRAMMAR")
                .help("Grammar files to transform, standard input if omitted")
                .multiple(true),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbosity") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    let outputs: Vec<&str> = matches
        .values_of("output")
        .map(|v| v.collect())
        .unwrap_or_else(|| OUTPUTS.to_vec());
    let format = match matches.value_of("format") {
        Some("latex") => OutputFormat::LaTeX,
        Some("json") => OutputFormat::JSON,
        _ => OutputFormat::Plain,
    };

    let sources: Vec<Option<&str>> = match matches.values_of("GRAMMAR") {
        Some(files) => files.map(Some).collect(),
        None => vec![None],
    };

    let mut failed = 0;
    for source in sources {
        if let Err(e) = process_grammar(source, &outputs, format) {
            error!("{:#}", e);
            failed += 1;
        }
    }
    if failed > 0 {
        process::exit(1);
    }
}
