//! Command-file runner for the leaderboard.
//!
//! Usage: `leaderboard <commands_file>`. Results go to stdout, logs to
//! stderr (filtered by `LEADERBOARD_LOG`).
mod config;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use config::{CliConfig, DEFAULT_LOG_FILTER};
use leaderboard_core::{process_commands, RunSummary};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "USAGE: leaderboard <commands_file>";

/// Exit status for misuse or an unreadable commands file.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let config = CliConfig::from_env();
    setup_logging(&config);

    let args: Vec<String> = std::env::args().collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ExitCode::from(run(&args, &mut out))
}

fn setup_logging(config: &CliConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run the program with `args` (program name first) and return the exit
/// status. Any failure prints the usage line.
fn run<W: Write>(args: &[String], out: &mut W) -> u8 {
    match process_file(args, out) {
        Ok(summary) => {
            tracing::info!(
                lines = summary.lines,
                executed = summary.executed,
                errors = summary.errors,
                quit = summary.quit,
                "session finished"
            );
            0
        }
        Err(err) => {
            tracing::error!("{:#}", err);
            if let Err(write_err) = writeln!(out, "{}", USAGE) {
                tracing::warn!(error = %write_err, "failed to write usage line");
            }
            EXIT_USAGE
        }
    }
}

fn process_file<W: Write>(args: &[String], out: &mut W) -> Result<RunSummary> {
    let [_, path] = args else {
        bail!(
            "expected exactly one argument, got {}",
            args.len().saturating_sub(1)
        );
    };

    let file = File::open(path).with_context(|| format!("failed to open {}", path))?;
    tracing::info!(path = %path, "processing commands");

    process_commands(BufReader::new(file), &mut *out)
        .with_context(|| format!("failed while processing {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn script_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    fn run_with(args: &[String]) -> (u8, String) {
        let mut out = Vec::new();
        let status = run(args, &mut out);
        (status, String::from_utf8(out).unwrap())
    }

    fn args_for(file: &NamedTempFile) -> Vec<String> {
        vec![
            "leaderboard".to_string(),
            file.path().to_string_lossy().into_owned(),
        ]
    }

    #[test]
    fn wrong_argument_count_prints_usage() {
        let (status, output) = run_with(&["leaderboard".to_string()]);
        assert_eq!(status, EXIT_USAGE);
        assert_eq!(output, format!("{}\n", USAGE));

        let (status, _) = run_with(&[
            "leaderboard".to_string(),
            "a".to_string(),
            "b".to_string(),
        ]);
        assert_eq!(status, EXIT_USAGE);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn usage_write_failure_still_reports_misuse() {
        let status = run(&["leaderboard".to_string()], &mut BrokenPipe);
        assert_eq!(status, EXIT_USAGE);
    }

    #[test]
    fn missing_file_prints_usage() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let (status, output) = run_with(&[
            "leaderboard".to_string(),
            missing.to_string_lossy().into_owned(),
        ]);
        assert_eq!(status, EXIT_USAGE);
        assert_eq!(output, format!("{}\n", USAGE));
    }

    #[test]
    fn runs_commands_from_file() {
        let file = script_file(b"ADD_PLAYER alice\nADD_SCORE alice 3\nTOP_K 5\nLEN\n");
        let (status, output) = run_with(&args_for(&file));
        assert_eq!(status, 0);
        assert_eq!(output, "-> 1. alice | best=3\n1\n");
    }

    #[test]
    fn quit_exits_cleanly() {
        let file = script_file(b"LEN\nQUIT\nLEN\n");
        let (status, output) = run_with(&args_for(&file));
        assert_eq!(status, 0);
        assert_eq!(output, "0\n");
    }

    #[test]
    fn unreadable_content_prints_usage_after_partial_output() {
        let file = script_file(b"LEN\n\xff\xfe\n");
        let (status, output) = run_with(&args_for(&file));
        assert_eq!(status, EXIT_USAGE);
        assert_eq!(output, format!("0\n{}\n", USAGE));
    }
}
