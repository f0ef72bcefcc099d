use env_logger::{Builder, Env};
use log::LevelFilter;

/// Sends logs to stderr. `RUST_LOG` wins over `verbosity` when set.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let mut builder = Builder::new();
    builder.filter_level(level);
    builder.parse_env(Env::default());
    builder.format_timestamp(None);

    // A second init (tests, embedding) is harmless.
    let _ = builder.try_init();
}
