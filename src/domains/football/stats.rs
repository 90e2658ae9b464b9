//! Goal statistics derived from a team's fixtures.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::types::FixtureRecord;

/// Errors from [`aggregate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The provider reported zero results, so no averages can be computed.
    #[error("No fixtures found for team {team_id}")]
    NoData { team_id: u32 },
}

/// Goal totals for one team over a set of fixtures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamGoalStats {
    pub team_id: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub clean_sheets: u32,
    /// Played fixtures in which the team appeared.
    pub games_counted: u32,
    /// Result count reported by the provider; the denominator of every ratio.
    pub results: u32,
}

impl TeamGoalStats {
    pub fn average_scored(&self) -> f64 {
        f64::from(self.goals_scored) / f64::from(self.results)
    }

    pub fn average_conceded(&self) -> f64 {
        f64::from(self.goals_conceded) / f64::from(self.results)
    }

    /// Share of games without conceding, between 0 and 1.
    pub fn clean_sheet_rate(&self) -> f64 {
        f64::from(self.clean_sheets) / f64::from(self.results)
    }

    /// One-sentence summary with ratios rounded to two decimals.
    pub fn summary(&self) -> String {
        format!(
            "The team has scored {} goals and conceded {} goals in {} games. \
             Their average goals scored per game is {:.2} and their average goals \
             conceded per game is {:.2}. Their clean sheet rate is {:.2}.",
            self.goals_scored,
            self.goals_conceded,
            self.results,
            self.average_scored(),
            self.average_conceded(),
            self.clean_sheet_rate(),
        )
    }
}

/// Fold `fixtures` into goal statistics for `team_id`.
///
/// Averages are taken over `reported_results`, the count the provider
/// returned with the fixture list, not over the fixtures matched here.
/// Fixtures where the team is on neither side are skipped. Unplayed fixtures
/// (no goals yet) add nothing.
pub fn aggregate(
    fixtures: &[FixtureRecord],
    reported_results: u32,
    team_id: u32,
) -> Result<TeamGoalStats, StatsError> {
    if reported_results == 0 {
        return Err(StatsError::NoData { team_id });
    }

    let mut stats = TeamGoalStats {
        team_id,
        goals_scored: 0,
        goals_conceded: 0,
        clean_sheets: 0,
        games_counted: 0,
        results: reported_results,
    };

    for fixture in fixtures {
        let (scored, conceded) = if fixture.home_id() == team_id {
            (fixture.goals.home, fixture.goals.away)
        } else if fixture.away_id() == team_id {
            (fixture.goals.away, fixture.goals.home)
        } else {
            debug!(
                "Skipping fixture {}: team {} is neither home nor away",
                fixture.fixture.id, team_id
            );
            continue;
        };

        let (Some(scored), Some(conceded)) = (scored, conceded) else {
            continue;
        };

        stats.goals_scored += scored;
        stats.goals_conceded += conceded;
        stats.games_counted += 1;
        if conceded == 0 {
            stats.clean_sheets += 1;
        }
    }

    if stats.games_counted != reported_results {
        warn!(
            "Team {}: {} played fixtures counted but provider reported {} results",
            team_id, stats.games_counted, reported_results
        );
    }

    Ok(stats)
}
