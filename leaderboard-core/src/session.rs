//! Line-by-line dispatcher driving one leaderboard session.

use std::io::{self, BufRead, Write};

use crate::board::Leaderboard;
use crate::command::Command;
use crate::error::CommandError;
use crate::tokenizer::{contains_quote, is_blank_or_comment, tokenize};

/// Whether the session should keep reading input after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Counters describing a finished [`Session::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines consumed from the input, including skipped ones.
    pub lines: usize,
    /// Commands that ran to completion.
    pub executed: usize,
    /// Lines that produced an error report.
    pub errors: usize,
    /// `true` if input stopped at a `QUIT` command.
    pub quit: bool,
}

/// Owns the leaderboard for one run and writes every result line to `out`.
pub struct Session<W: Write> {
    board: Leaderboard,
    out: W,
    summary: RunSummary,
}

impl<W: Write> Session<W> {
    /// Start a session with an empty leaderboard.
    pub fn new(out: W) -> Self {
        Self {
            board: Leaderboard::new(),
            out,
            summary: RunSummary::default(),
        }
    }

    /// The leaderboard as mutated so far.
    pub fn board(&self) -> &Leaderboard {
        &self.board
    }

    /// Counters accumulated so far.
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Give back the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Feed every line of `input` through [`Session::execute_line`] until
    /// the input ends or a `QUIT` is seen.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<RunSummary> {
        'input: for raw in input.lines() {
            let raw = raw?;
            let body = raw.strip_suffix('\r').unwrap_or(&raw);
            for line in body.split('\r') {
                self.summary.lines += 1;
                if self.execute_line(line)? == Flow::Quit {
                    self.summary.quit = true;
                    break 'input;
                }
            }
        }
        self.out.flush()?;
        Ok(self.summary)
    }

    /// Handle one input line. Command failures are written as report
    /// lines; only I/O errors on the output are returned.
    pub fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        if is_blank_or_comment(line) {
            tracing::trace!(line, "skipping blank or comment line");
            return Ok(Flow::Continue);
        }

        if contains_quote(line) {
            return self.report(CommandError::QuotesUnsupported);
        }

        let command = match Command::parse(tokenize(line)) {
            Ok(Some(Command::Quit)) => {
                tracing::debug!("quit requested");
                return Ok(Flow::Quit);
            }
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => return self.report(err),
        };

        tracing::debug!(?command, "dispatching command");
        match command.execute(&mut self.board) {
            Ok(lines) => {
                self.summary.executed += 1;
                for line in lines {
                    writeln!(self.out, "{}", line)?;
                }
                Ok(Flow::Continue)
            }
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: CommandError) -> io::Result<Flow> {
        tracing::debug!(error = %err, "command failed");
        self.summary.errors += 1;
        writeln!(self.out, "{}", err.report())?;
        Ok(Flow::Continue)
    }
}

/// Run `input` through a fresh session, writing results to `out`.
pub fn process_commands<R: BufRead, W: Write>(input: R, out: W) -> io::Result<RunSummary> {
    Session::new(out).run(input)
}
