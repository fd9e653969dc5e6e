use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt::Layer,
    prelude::*,
    util::TryInitError,
};

/// Maps a `-v` count to a level filter.
///
/// ## Example
/// ```
/// use calcdescent::util::logging::level_for_verbosity;
/// use tracing_subscriber::filter::LevelFilter;
///
/// assert_eq!(level_for_verbosity(0), LevelFilter::WARN);
/// assert_eq!(level_for_verbosity(2), LevelFilter::DEBUG);
/// assert_eq!(level_for_verbosity(9), LevelFilter::TRACE);
/// ```
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs a global `tracing` subscriber writing to stderr.
///
/// Records from this crate pass at the level chosen by `verbosity`; other
/// crates only report warnings.
///
/// ## Errors
/// Fails if a global subscriber has already been installed.
pub fn init(verbosity: u8) -> Result<(), TryInitError> {
    let filter = Targets::new().with_default(LevelFilter::WARN)
                               .with_target(env!("CARGO_CRATE_NAME"), level_for_verbosity(verbosity));

    tracing_subscriber::registry().with(Layer::new().with_ansi(false)
                                                    .with_writer(std::io::stderr)
                                                    .with_filter(filter))
                                  .try_init()
}
