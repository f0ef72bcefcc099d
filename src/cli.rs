use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

pub const FILE_ENV: &str = "DUKE_FILE";

#[derive(Debug)]
pub struct Options {
    /// `None` means fall back to the default location under `$HOME`.
    pub file: Option<PathBuf>,
    pub verbosity: u8,
    pub no_color: bool,
}

pub fn build_cli() -> Command {
    Command::new("duke")
        .about("A small interactive task tracker")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .env(FILE_ENV)
                .help("Task file to read at startup and rewrite after every change")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more to stderr (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable coloured output")
                .action(ArgAction::SetTrue),
        )
}

fn options_from(matches: &clap::ArgMatches) -> Options {
    Options {
        file: matches.get_one::<PathBuf>("file").cloned(),
        verbosity: matches.get_count("verbose"),
        no_color: matches.get_flag("no-color"),
    }
}

pub fn parse_options() -> Options {
    options_from(&build_cli().get_matches())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_read() {
        let matches = build_cli()
            .try_get_matches_from(["duke", "--file", "/tmp/t.txt", "-vv", "--no-color"])
            .unwrap();
        let opts = options_from(&matches);
        assert_eq!(opts.file, Some(PathBuf::from("/tmp/t.txt")));
        assert_eq!(opts.verbosity, 2);
        assert!(opts.no_color);
    }

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }
}
