use duke::storage::default_store_path;
use duke::{CommandRouter, FileStore, Session, cli, logging};
use log::info;
use std::io;

fn main() -> io::Result<()> {
    let options = cli::parse_options();
    logging::init(options.verbosity);

    if options.no_color {
        colored::control::set_override(false);
    }

    let path = match options.file {
        Some(path) => path,
        None => match default_store_path() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Failed to locate task file: {}", e);
                return Err(io::Error::other(e.to_string()));
            }
        },
    };
    info!("using task file {}", path.display());

    let mut session = Session::open(FileStore::new(path));
    let router = CommandRouter::with_default_commands();

    let stdin = io::stdin();
    let stdout = io::stdout();
    duke::run(&mut session, &router, stdin.lock(), &mut stdout.lock())
}
