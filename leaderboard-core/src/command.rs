//! Command parsing and execution against a [`Leaderboard`].

use crate::board::{Leaderboard, ScoreText, Scope};
use crate::error::{CommandError, Result};

/// A validated command. Numeric arguments are kept as text because a
/// missing player is reported before a malformed number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddPlayer { name: String },
    AddScore { name: String, score: String },
    Current { name: String },
    Best { name: String },
    History { name: String, k: String },
    TopK { k: String },
    PrintAll,
    RemovePlayer { name: String },
    Len,
    Clear,
    Quit,
}

impl Command {
    /// Build a command from a tokenized line.
    ///
    /// The keyword is matched case-insensitively; every other token is
    /// passed through untouched. Returns `Ok(None)` for an empty line.
    pub fn parse(tokens: Vec<String>) -> Result<Option<Self>> {
        let mut tokens = tokens.into_iter();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<String> = tokens.collect();

        let command = match keyword.to_uppercase().as_str() {
            "QUIT" => Self::Quit,
            "ADD_PLAYER" => {
                let [name] = expect_args::<1>(args, "ADD_PLAYER <name>")?;
                Self::AddPlayer { name }
            }
            "ADD_SCORE" => {
                let [name, score] = expect_args::<2>(args, "ADD_SCORE <name> <score>")?;
                Self::AddScore { name, score }
            }
            "CURRENT" => {
                let [name] = expect_args::<1>(args, "CURRENT <name>")?;
                Self::Current { name }
            }
            "BEST" => {
                let [name] = expect_args::<1>(args, "BEST <name>")?;
                Self::Best { name }
            }
            "HISTORY" => {
                let [name, k] = expect_args::<2>(args, "HISTORY <name> <k>")?;
                Self::History { name, k }
            }
            "TOP_K" => {
                let [k] = expect_args::<1>(args, "TOP_K <k>")?;
                Self::TopK { k }
            }
            "PRINT_ALL" => {
                expect_args::<0>(args, "PRINT_ALL takes no arguments")?;
                Self::PrintAll
            }
            "REMOVE_PLAYER" => {
                let [name] = expect_args::<1>(args, "REMOVE_PLAYER <name>")?;
                Self::RemovePlayer { name }
            }
            "LEN" => {
                expect_args::<0>(args, "LEN takes no arguments")?;
                Self::Len
            }
            "CLEAR" => {
                expect_args::<0>(args, "CLEAR takes no arguments")?;
                Self::Clear
            }
            _ => return Err(CommandError::UnknownCommand(keyword)),
        };
        Ok(Some(command))
    }

    /// Apply the command and return the lines it prints.
    ///
    /// [`Command::Quit`] has no effect here; ending the session is the
    /// dispatcher's job.
    pub fn execute(self, board: &mut Leaderboard) -> Result<Vec<String>> {
        let lines = match self {
            Self::AddPlayer { name } => {
                board.add_player(&name)?;
                Vec::new()
            }
            Self::AddScore { name, score } => {
                if !board.contains(&name) {
                    return Err(CommandError::NotFound);
                }
                let score = score
                    .parse::<i64>()
                    .map_err(|_| CommandError::InvalidScore)?;
                board.add_score(&name, score)?;
                Vec::new()
            }
            Self::Current { name } => {
                let player = board.player(&name)?;
                vec![format!(
                    "-> {} | current={} | best={}",
                    player.name(),
                    ScoreText(player.history().most_recent()),
                    ScoreText(player.best())
                )]
            }
            Self::Best { name } => {
                let player = board.player(&name)?;
                vec![format!(
                    "-> {} | best={}",
                    player.name(),
                    ScoreText(player.best())
                )]
            }
            Self::History { name, k } => {
                board.player(&name)?;
                let limit = parse_history_limit(&k)?;
                let scores = board.history(&name, limit)?;
                or_empty(scores.into_iter().map(|score| format!("-> {}", score)).collect())
            }
            Self::TopK { k } => {
                let k = parse_top_k(&k)?;
                let standings = board.standings(Scope::Scored)?;
                or_empty(
                    standings
                        .into_iter()
                        .take(k)
                        .map(|standing| standing.to_string())
                        .collect(),
                )
            }
            Self::PrintAll => or_empty(
                board
                    .standings(Scope::All)?
                    .into_iter()
                    .map(|standing| standing.to_string())
                    .collect(),
            ),
            Self::RemovePlayer { name } => {
                board.remove_player(&name)?;
                Vec::new()
            }
            Self::Len => vec![board.len().to_string()],
            Self::Clear => {
                board.clear();
                Vec::new()
            }
            Self::Quit => Vec::new(),
        };
        Ok(lines)
    }
}

fn expect_args<const N: usize>(args: Vec<String>, usage: &'static str) -> Result<[String; N]> {
    args.try_into().map_err(|_| CommandError::Usage(usage))
}

fn parse_history_limit(raw: &str) -> Result<usize> {
    parse_count(raw).ok_or(CommandError::InvalidHistoryLimit)
}

fn parse_top_k(raw: &str) -> Result<usize> {
    match parse_count(raw) {
        Some(k) if k >= 1 => Ok(k),
        _ => Err(CommandError::InvalidTopK),
    }
}

/// Parse a non-negative integer of any size, saturating at `usize::MAX`.
/// A `-` sign is only accepted on zero.
fn parse_count(raw: &str) -> Option<usize> {
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value = digits.parse::<usize>().unwrap_or(usize::MAX);
    if negative && value != 0 {
        None
    } else {
        Some(value)
    }
}

fn or_empty(lines: Vec<String>) -> Vec<String> {
    if lines.is_empty() {
        vec!["EMPTY".to_string()]
    } else {
        lines
    }
}
