use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::unicode::first_grapheme;

/// Title substituted when the user leaves the title blank
pub const DEFAULT_TITLE: &str = "Untitled Task";

/// Emoji used when none is picked
pub const DEFAULT_EMOJI: &str = "\u{1F4CC}";

/// Emoji offered by the picker, in display order
pub const EMOJI_PALETTE: [&str; 24] = [
    "\u{1F600}",
    "\u{1F680}",
    "\u{1F4BB}",
    "\u{1F4DD}",
    "\u{1F3A8}",
    "\u{1F4C5}",
    "\u{1F525}",
    "\u{2728}",
    "\u{1F4A1}",
    "\u{23F0}",
    "\u{1F389}",
    "\u{1F6D2}",
    "\u{1F34E}",
    "\u{1F3CB}\u{FE0F}",
    "\u{1F4A4}",
    "\u{1F48A}",
    "\u{1F9F8}",
    "\u{1F388}",
    "\u{1F380}",
    "\u{1F33B}",
    "\u{1F344}",
    "\u{1F355}",
    "\u{1F369}",
    "\u{1F36A}",
];

/// Which container a task lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Todo,
    Done,
}

impl Status {
    /// The other status
    pub fn flipped(self) -> Status {
        match self {
            Status::Todo => Status::Done,
            Status::Done => Status::Todo,
        }
    }

    /// Lowercase key used in config and logs
    pub fn key(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::Done => "done",
        }
    }

    /// Heading shown above the container
    pub fn container_label(self) -> &'static str {
        match self {
            Status::Todo => "Waiting Area",
            Status::Done => "Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Opaque task identifier, unique for the lifetime of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn from_seq(seq: u64) -> Self {
        TaskId(seq)
    }

    /// Creation sequence number; later ids compare greater
    pub fn seq(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T-{:03}", self.0)
    }
}

/// A single task bubble
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Never empty; see [`normalize_title`]
    pub title: String,
    /// Stored verbatim, markup included
    pub description: String,
    pub emoji: String,
    pub status: Status,
    /// Milliseconds since the Unix epoch at creation
    pub created_at: i64,
}

/// Trim the title and substitute [`DEFAULT_TITLE`] when nothing is left
pub fn normalize_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Keep the first glyph of the input, falling back to [`DEFAULT_EMOJI`]
pub fn normalize_emoji(emoji: &str) -> String {
    match first_grapheme(emoji.trim()) {
        Some(g) => g.to_string(),
        None => DEFAULT_EMOJI.to_string(),
    }
}
