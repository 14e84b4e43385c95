use anyhow::Error;

/// Status for any fatal error: unreadable input, missing data directory,
/// failed write or bad config.
pub const EXIT_FAILURE: u8 = 1;

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}
