use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod payload;
pub mod response;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown {kind} value: {value:?}")]
    UnknownValue { kind: &'static str, value: String },
    #[error("region code out of range: {0}")]
    RegionCode(i32),
}

impl ParseError {
    fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            kind,
            value: value.to_string(),
        }
    }
}

/// Leaderboard region. The remote service identifies regions by their
/// numeric code, in declaration order starting at 0.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Region {
    Europe,
    MiddleEast,
    Asia,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Africa,
    Global,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::Europe,
        Region::MiddleEast,
        Region::Asia,
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::Oceania,
        Region::Africa,
        Region::Global,
    ];

    pub fn code(self) -> i32 {
        match self {
            Region::Europe => 0,
            Region::MiddleEast => 1,
            Region::Asia => 2,
            Region::NorthAmerica => 3,
            Region::SouthAmerica => 4,
            Region::Oceania => 5,
            Region::Africa => 6,
            Region::Global => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Europe => "europe",
            Region::MiddleEast => "middleeast",
            Region::Asia => "asia",
            Region::NorthAmerica => "northamerica",
            Region::SouthAmerica => "southamerica",
            Region::Oceania => "oceania",
            Region::Africa => "africa",
            Region::Global => "global",
        }
    }
}

impl TryFrom<i32> for Region {
    type Error = ParseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Region::ALL
            .into_iter()
            .find(|region| region.code() == value)
            .ok_or(ParseError::RegionCode(value))
    }
}

impl FromStr for Region {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| ParseError::unknown("region", s))
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Versus {
    Players,
    Ai,
}

impl Versus {
    pub fn as_str(self) -> &'static str {
        match self {
            Versus::Players => "players",
            Versus::Ai => "ai",
        }
    }
}

impl FromStr for Versus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "players" => Ok(Versus::Players),
            "ai" => Ok(Versus::Ai),
            other => Err(ParseError::unknown("versus", other)),
        }
    }
}

impl Display for Versus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum MatchType {
    Unranked,
    Custom,
    EasyAi,
    MediumAi,
    HardAi,
    ExpertAi,
}

impl MatchType {
    pub const ALL: [MatchType; 6] = [
        MatchType::Unranked,
        MatchType::Custom,
        MatchType::EasyAi,
        MatchType::MediumAi,
        MatchType::HardAi,
        MatchType::ExpertAi,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Unranked => "unranked",
            MatchType::Custom => "custom",
            MatchType::EasyAi => "aieasy",
            MatchType::MediumAi => "aimedium",
            MatchType::HardAi => "aihard",
            MatchType::ExpertAi => "aiexpert",
        }
    }

    /// Whether this mode is played against the computer rather than other players.
    pub fn is_ai(self) -> bool {
        matches!(
            self,
            MatchType::EasyAi | MatchType::MediumAi | MatchType::HardAi | MatchType::ExpertAi
        )
    }

    /// The only versus value this mode can be queried with.
    pub fn versus(self) -> Versus {
        if self.is_ai() {
            Versus::Ai
        } else {
            Versus::Players
        }
    }
}

impl FromStr for MatchType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchType::ALL
            .into_iter()
            .find(|mt| mt.as_str() == s)
            .ok_or_else(|| ParseError::unknown("match type", s))
    }
}

impl Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum TeamSize {
    OneVOne,
    TwoVTwo,
    ThreeVThree,
    FourVFour,
}

impl TeamSize {
    pub fn as_str(self) -> &'static str {
        match self {
            TeamSize::OneVOne => "1v1",
            TeamSize::TwoVTwo => "2v2",
            TeamSize::ThreeVThree => "3v3",
            TeamSize::FourVFour => "4v4",
        }
    }
}

impl FromStr for TeamSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1v1" => Ok(TeamSize::OneVOne),
            "2v2" => Ok(TeamSize::TwoVTwo),
            "3v3" => Ok(TeamSize::ThreeVThree),
            "4v4" => Ok(TeamSize::FourVFour),
            other => Err(ParseError::unknown("team size", other)),
        }
    }
}

impl Display for TeamSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rating bucket reported by the aggregate lookup: one per team size plus
/// custom games, which have no team size.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "1v1")]
    OneVOne,
    #[serde(rename = "2v2")]
    TwoVTwo,
    #[serde(rename = "3v3")]
    ThreeVThree,
    #[serde(rename = "4v4")]
    FourVFour,
    #[serde(rename = "custom")]
    Custom,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::OneVOne,
        Category::TwoVTwo,
        Category::ThreeVThree,
        Category::FourVFour,
        Category::Custom,
    ];

    /// Team size queried for this category, `None` for custom games.
    pub fn team_size(self) -> Option<TeamSize> {
        match self {
            Category::OneVOne => Some(TeamSize::OneVOne),
            Category::TwoVTwo => Some(TeamSize::TwoVTwo),
            Category::ThreeVThree => Some(TeamSize::ThreeVThree),
            Category::FourVFour => Some(TeamSize::FourVFour),
            Category::Custom => None,
        }
    }

    pub fn match_type(self) -> MatchType {
        match self {
            Category::Custom => MatchType::Custom,
            _ => MatchType::Unranked,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self.team_size() {
            Some(team_size) => team_size.as_str(),
            None => MatchType::Custom.as_str(),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
