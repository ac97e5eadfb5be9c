//! Vote ledger state machine
//!
//! A user holds at most one vote per report. The stored state is one of
//! three values, and every request names a direction:
//!
//! | current | requested | next | delta |
//! |---------|-----------|------|-------|
//! | none    | up        | up   | upvote +1 |
//! | none    | down      | down | downvote +1 |
//! | up      | up        | none | upvote -1 |
//! | up      | down      | down | upvote -1, downvote +1 |
//! | down    | down      | none | downvote -1 |
//! | down    | up        | up   | downvote -1, upvote +1 |
//!
//! Requesting the direction already held clears the vote.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Direction carried by a vote request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current vote of one user on one report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteState {
    /// No vote row exists
    #[default]
    None,
    Up,
    Down,
}

impl VoteState {
    /// Compute the next state and the counter delta for a vote request.
    pub const fn apply(self, requested: VoteDirection) -> VoteTransition {
        let next = match (self, requested) {
            (Self::Up, VoteDirection::Up) | (Self::Down, VoteDirection::Down) => Self::None,
            (_, VoteDirection::Up) => Self::Up,
            (_, VoteDirection::Down) => Self::Down,
        };

        VoteTransition {
            previous: self,
            next,
            delta: StatsDelta::between(self, next),
        }
    }

    /// Decode the stored `(is_upvoted, is_downvoted)` pair.
    ///
    /// Both flags set is not a state this ledger can produce, so reading one
    /// back means the row was written by something else.
    pub fn from_flags(is_upvoted: bool, is_downvoted: bool) -> Result<Self, DomainError> {
        match (is_upvoted, is_downvoted) {
            (false, false) => Ok(Self::None),
            (true, false) => Ok(Self::Up),
            (false, true) => Ok(Self::Down),
            (true, true) => Err(DomainError::IntegrityViolation(
                "vote is marked both upvoted and downvoted".to_string(),
            )),
        }
    }

    /// Encode as the stored `(is_upvoted, is_downvoted)` pair
    pub const fn flags(self) -> (bool, bool) {
        (self.upvotes() == 1, self.downvotes() == 1)
    }

    pub const fn direction(self) -> Option<VoteDirection> {
        match self {
            Self::None => None,
            Self::Up => Some(VoteDirection::Up),
            Self::Down => Some(VoteDirection::Down),
        }
    }

    /// Contribution of this state to `upvote_count`
    #[inline]
    pub const fn upvotes(self) -> i64 {
        if matches!(self, Self::Up) {
            1
        } else {
            0
        }
    }

    /// Contribution of this state to `downvote_count`
    #[inline]
    pub const fn downvotes(self) -> i64 {
        if matches!(self, Self::Down) {
            1
        } else {
            0
        }
    }
}

impl From<VoteDirection> for VoteState {
    fn from(direction: VoteDirection) -> Self {
        match direction {
            VoteDirection::Up => Self::Up,
            VoteDirection::Down => Self::Down,
        }
    }
}

impl fmt::Display for VoteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
        }
    }
}

/// Change to apply to a report's vote counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsDelta {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl StatsDelta {
    pub const fn new(upvotes: i64, downvotes: i64) -> Self {
        Self { upvotes, downvotes }
    }

    /// Counter change caused by moving a single vote from `from` to `to`
    pub const fn between(from: VoteState, to: VoteState) -> Self {
        Self {
            upvotes: to.upvotes() - from.upvotes(),
            downvotes: to.downvotes() - from.downvotes(),
        }
    }
}

/// Result of applying a vote request to the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTransition {
    pub previous: VoteState,
    pub next: VoteState,
    pub delta: StatsDelta,
}
