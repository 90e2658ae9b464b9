//! Supported leagues and their API-Football identifiers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A league or competition accepted by the tools.
///
/// The set is closed: tool inputs naming any other league fail to
/// deserialize before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum League {
    /// Major League Soccer.
    #[serde(rename = "MLS")]
    Mls,

    /// FIFA Club World Cup.
    #[serde(rename = "Club World Cup")]
    ClubWorldCup,
}

impl League {
    /// Every supported league, in display order.
    pub const ALL: [League; 2] = [League::Mls, League::ClubWorldCup];

    /// The provider's numeric league id.
    pub const fn provider_id(self) -> u32 {
        match self {
            Self::Mls => 253,
            Self::ClubWorldCup => 15,
        }
    }

    /// The human-readable name used in tool inputs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mls => "MLS",
            Self::ClubWorldCup => "Club World Cup",
        }
    }
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_ids() {
        assert_eq!(League::Mls.provider_id(), 253);
        assert_eq!(League::ClubWorldCup.provider_id(), 15);
    }

    #[test]
    fn test_deserialize_by_display_name() {
        let league: League = serde_json::from_str(r#""Club World Cup""#).unwrap();
        assert_eq!(league, League::ClubWorldCup);
        assert_eq!(league.to_string(), "Club World Cup");
    }

    #[test]
    fn test_unknown_league_rejected() {
        assert!(serde_json::from_str::<League>(r#""Premier League""#).is_err());
        assert!(serde_json::from_str::<League>(r#""mls""#).is_err());
    }

    #[test]
    fn test_names_match_serde() {
        for league in League::ALL {
            let json = serde_json::to_value(league).unwrap();
            assert_eq!(json, league.name());
        }
    }
}
