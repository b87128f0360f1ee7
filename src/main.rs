//! Reads two square matrices from stdin and prints their product.
//!
//! Input is a flat list of `2 * n * n` whitespace-separated numbers: the
//! left operand row by row, then the right one. The product goes to stdout
//! as tab-separated rows.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use log::debug;
use matmul::config::Config;
use matmul::input::{read_values, square_operands};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_config = ConfigBuilder::new()
        .set_time_level(log::LevelFilter::Off)
        .build();
    TermLogger::init(
        config.log_level,
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> matmul::Result<()> {
    let values = read_values(io::stdin().lock())?;
    debug!("read {} values", values.len());

    let (lhs, rhs) = square_operands(values)?;
    let multiplier = config.multiplier();
    debug!(
        "multiplying {}x{} by {}x{} on {} threads",
        lhs.height(),
        lhs.width(),
        rhs.height(),
        rhs.width(),
        multiplier.threads()
    );

    let start = Instant::now();
    let product = multiplier.multiply(&lhs, &rhs)?;
    debug!("multiply took {:.3} ms", start.elapsed().as_secs_f64() * 1000.0);

    let mut out = io::stdout().lock();
    write!(out, "{}", product)?;
    out.flush()?;
    Ok(())
}
