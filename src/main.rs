
extern crate clap;
#[macro_use] extern crate log;
#[macro_use] extern crate lazy_static;
extern crate fern;
extern crate chrono;
extern crate regex;
extern crate thiserror;

pub mod parser;

use clap::{App, Arg, ArgMatches};

use std::fs::File;
use std::io::{self, BufReader, Read, Write};

use parser::assemble::Assembler;
use parser::error::ParseError;

fn main() {
    let args = process_arguments();
    initialize_logging(args.occurrences_of("verbose"));

    debug!("Arguments:\n\tVerbosity: {}\n\tInput: {}",
        match args.occurrences_of("verbose") {
            0 => log::LevelFilter::Error.to_string(),
            1 => log::LevelFilter::Warn.to_string(),
            2 => log::LevelFilter::Info.to_string(),
            3 | _ => log::LevelFilter::Debug.to_string(),
        },
        args.value_of("input").unwrap_or("<stdin>")
    );

    // Read the named source, or standard input when none is given.
    let source: Box<dyn Read> = match args.value_of("input") {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(file),
            Err(err) => {
                error!("unable to open input file `{}`: {}", path, err);
                std::process::exit(99);
            }
        },
        None => Box::new(io::stdin()),
    };

    let program = match Assembler::new().run(BufReader::new(source)) {
        Ok(program) => program,
        Err(err) => fail(err),
    };

    let document = match parser::xml::serialize(&program) {
        Ok(document) => document,
        Err(err) => fail(err),
    };

    if let Err(err) = io::stdout().write_all(document.as_bytes()) {
        error!("unable to write output: {}", err);
        std::process::exit(99);
    }
}

fn fail(err: ParseError) -> ! {
    error!("{}", err);
    std::process::exit(err.exit_code());
}

fn process_arguments() -> ArgMatches<'static> {
    App::new(option_env!("CARGO_PKG_NAME").unwrap())
        .version(option_env!("CARGO_PKG_VERSION").unwrap())
        .about(option_env!("CARGO_PKG_DESCRIPTION").unwrap())
        .arg(Arg::with_name("input")
            .long("input")
            .short("i")
            .takes_value(true)
            .value_name("FILE")
            .help("Read IPPcode24 source from a file instead of standard input"))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .takes_value(false)
            .help("Sets the level of verbosity"))
        .get_matches()
}

fn initialize_logging(verbosity: u64) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(match verbosity {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            3 | _ => log::LevelFilter::Debug,
        })
        // Stdout carries the XML document; diagnostics go to stderr.
        .chain(std::io::stderr())
        .apply().ok();
}
