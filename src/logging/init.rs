use log::LevelFilter;

pub fn init_logging(verbose: bool, debug: bool, quiet: bool) {
    let log_level = if quiet {
        LevelFilter::Error
    } else if debug {
        LevelFilter::Trace
    } else if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .init();
}
