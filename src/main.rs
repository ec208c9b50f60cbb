// main.rs
//
// Reports the precision the physics core was built at, and optionally checks it
// against the one named on the command line:
//
//   cyclone           print the active configuration
//   cyclone double    same, then exit with status 1 unless built with `f64`

use cyclone::{EPSILON, PRECISION, Precision, R_PI, REAL_MAX};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging(if cfg!(debug_assertions) {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    });

    println!(
        "precision: {PRECISION} ({} bits, feature `{}`)",
        PRECISION.bits(),
        PRECISION.feature_name()
    );
    println!("REAL_MAX:  {REAL_MAX:e}");
    println!("R_PI:      {R_PI}");
    println!("EPSILON:   {EPSILON:e}");

    let Some(requested) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    match requested.parse::<Precision>().and_then(Precision::expect_active) {
        Ok(()) => {
            log::info!("build matches requested {PRECISION} precision");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs from this crate at `log_level` unless `RUST_LOG` says otherwise.
fn init_logging(log_level: log::LevelFilter) {
    let filter = format!(
        "{}={}",
        env!("CARGO_CRATE_NAME"),
        log_level.as_str().to_ascii_lowercase()
    );
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
