use argh::{EarlyExit, FromArgs};
use grep_context::{Options, Summary, run};
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const NAME: &str = "grep";

/// Exit status for usage and runtime errors; 1 is kept for "no match".
const ERROR_STATUS: u8 = 2;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let options = match Options::from_args(&[NAME], &args) {
        Ok(options) => options,
        Err(exit) => {
            if exit.status.is_err() {
                eprintln!("{}", exit.output);
            } else {
                println!("{}", exit.output);
            }
            return ExitCode::from(early_exit_status(&exit));
        }
    };

    init_logging(options.verbose);

    let result = try_main(&options);
    if let Err(e) = &result {
        eprintln!("{}: {:#}", NAME, e);
    }
    ExitCode::from(exit_status(&result))
}

fn try_main(options: &Options) -> anyhow::Result<Summary> {
    let mut stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    let summary = run(&mut stdin, &mut stdout, options)?;
    tracing::debug!(?summary, "done");
    Ok(summary)
}

/// 0 for `--help`, [`ERROR_STATUS`] for a malformed command line.
fn early_exit_status(exit: &EarlyExit) -> u8 {
    match exit.status {
        Ok(()) => 0,
        Err(()) => ERROR_STATUS,
    }
}

/// 0 when any line matched, 1 when none did, [`ERROR_STATUS`] on failure.
fn exit_status(result: &anyhow::Result<Summary>) -> u8 {
    match result {
        Ok(summary) if summary.matched > 0 => 0,
        Ok(_) => 1,
        Err(_) => ERROR_STATUS,
    }
}

/// Logs go to stderr so they never mix with matched lines.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}
