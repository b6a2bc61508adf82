//! In-memory leaderboard driven by a line-oriented command language.
//!
//! A [`Session`] reads command lines, applies them to a [`Leaderboard`]
//! and writes one result line per command (or one per listed item).

pub mod array;
pub mod board;
pub mod command;
pub mod error;
pub mod history;
pub mod ranking;
pub mod registry;
pub mod session;
pub mod tokenizer;

pub use array::{ArrayError, DynamicArray};
pub use board::{Leaderboard, ScoreText, Scope, Standing};
pub use command::Command;
pub use error::CommandError;
pub use history::ScoreHistory;
pub use ranking::{better, heap_sort, rank_order};
pub use registry::{Player, PlayerRegistry};
pub use session::{process_commands, Flow, RunSummary, Session};
