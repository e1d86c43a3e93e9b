//! Parsing Options.
//! All flags are optional. `--config {file}` or `-c` reads a TOML file;
//! `--id`/`-i` and `--name`/`-n` override what the background tasks write.

use clap::{Arg, Command, value_parser};
use std::error::Error;

fn make_options_parser() -> clap::Command {
    let parser = Command::new("vehicle")
        .no_binary_name(true)
        .version("v0.1.0")
        .about("Mutates two vehicles on background threads, joins them, prints the results")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML file holding the id and name to write"),
        )
        .arg(
            Arg::new("id")
                .short('i')
                .long("id")
                .value_name("N")
                .help("Identifier written to the first vehicle")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .value_name("TEXT")
                .help("Name written to the second vehicle"),
        );
    parser
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    pub config: Option<String>,
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let config = matches.get_one::<String>("config").cloned();
        let id = matches.get_one::<i64>("id").copied();
        let name = matches.get_one::<String>("name").cloned();

        Ok(Options { config, id, name })
    }
}
