//! Tri-state vote value shared by question and answer votes

use crate::errors::AppError;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user's vote on a question or answer
///
/// Stored as a small integer: `1` like, `-1` dislike, `0` no vote (or a
/// retracted one). The symbolic action names (`"like"`, `"dislike"`,
/// `"no_like"`) are what callers use to look the codes up.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    #[sea_orm(num_value = 1)]
    Like,
    #[sea_orm(num_value = -1)]
    Dislike,
    #[sea_orm(num_value = 0)]
    NoLike,
}

impl Vote {
    /// Action name to vote mapping
    pub const ACTIONS: [(&'static str, Vote); 3] = [
        ("like", Vote::Like),
        ("dislike", Vote::Dislike),
        ("no_like", Vote::NoLike),
    ];

    /// Look up a vote by its action name
    pub fn from_action(action: &str) -> Option<Self> {
        Self::ACTIONS
            .iter()
            .find(|(name, _)| *name == action)
            .map(|(_, vote)| *vote)
    }

    pub fn action(&self) -> &'static str {
        match self {
            Vote::Like => "like",
            Vote::Dislike => "dislike",
            Vote::NoLike => "no_like",
        }
    }

    /// Signed value contributed to the target's rating
    pub fn code(&self) -> i16 {
        match self {
            Vote::Like => 1,
            Vote::Dislike => -1,
            Vote::NoLike => 0,
        }
    }

    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Vote::Like),
            -1 => Some(Vote::Dislike),
            0 => Some(Vote::NoLike),
            _ => None,
        }
    }
}

impl Default for Vote {
    fn default() -> Self {
        Vote::NoLike
    }
}

impl FromStr for Vote {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vote::from_action(s)
            .ok_or_else(|| AppError::validation("is_liked", format!("unknown vote action: {}", s)))
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    #[test]
    fn test_action_codes() {
        assert_eq!(Vote::from_action("like").map(|v| v.code()), Some(1));
        assert_eq!(Vote::from_action("dislike").map(|v| v.code()), Some(-1));
        assert_eq!(Vote::from_action("no_like").map(|v| v.code()), Some(0));
        assert_eq!(Vote::from_action("love"), None);
    }

    #[test]
    fn test_codes_match_active_enum_values() {
        for vote in Vote::iter() {
            assert_eq!(vote.to_value(), vote.code());
            assert_eq!(Vote::from_code(vote.code()), Some(vote));
        }
        assert_eq!(Vote::from_code(2), None);
    }

    #[test]
    fn test_parse_and_display() {
        let vote: Vote = "dislike".parse().unwrap();
        assert_eq!(vote, Vote::Dislike);
        assert_eq!(vote.to_string(), "dislike");
        assert!("meh".parse::<Vote>().is_err());
        assert_eq!(Vote::default(), Vote::NoLike);
    }

    #[test]
    fn test_serde_uses_action_names() {
        let json = serde_json::to_string(&Vote::NoLike).unwrap();
        assert_eq!(json, "\"no_like\"");
        let vote: Vote = serde_json::from_str("\"like\"").unwrap();
        assert_eq!(vote, Vote::Like);
    }
}
