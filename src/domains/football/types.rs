//! Typed views of API-Football payloads.
//!
//! Only the fields the server reads are modelled; everything else in the
//! provider's response is ignored on decode.

use serde::{Deserialize, Serialize};

/// Body of `GET /fixtures`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixturesResponse {
    /// Number of results the provider reports for the query.
    #[serde(default)]
    pub results: u32,

    #[serde(default)]
    pub response: Vec<FixtureRecord>,
}

/// One scheduled or played match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureRecord {
    pub fixture: FixtureInfo,
    pub teams: FixtureTeams,
    pub goals: FixtureGoals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureInfo {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureTeams {
    pub home: TeamRef,
    pub away: TeamRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
}

/// Goal counts; both are `null` until the fixture has been played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureGoals {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

impl FixtureRecord {
    pub fn home_id(&self) -> u32 {
        self.teams.home.id
    }

    pub fn away_id(&self) -> u32 {
        self.teams.away.id
    }
}
