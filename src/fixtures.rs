use std::collections::HashMap;

use crate::error::SimError;

/// Tolerance when checking that an outcome triple sums to 1.
pub const PROB_SUM_TOLERANCE: f64 = 1e-6;

/// Outcome probabilities for one fixture, home perspective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prob3 {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl Prob3 {
    pub fn uniform() -> Self {
        Self {
            home: 1.0 / 3.0,
            draw: 1.0 / 3.0,
            away: 1.0 / 3.0,
        }
    }

    pub fn sum(&self) -> f64 {
        self.home + self.draw + self.away
    }

    pub fn is_valid(&self) -> bool {
        self.home >= 0.0
            && self.draw >= 0.0
            && self.away >= 0.0
            && (self.sum() - 1.0).abs() <= PROB_SUM_TOLERANCE
    }
}

/// One fixture of a season. The position in the season's fixture list
/// is the row index used by every per-trial matrix.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub probs: Prob3,
}

/// Check every fixture's outcome triple. Runs at pipeline entry,
/// before any entropy is consumed.
pub fn validate_fixtures(fixtures: &[Fixture]) -> Result<(), SimError> {
    for (ix, fixture) in fixtures.iter().enumerate() {
        if !fixture.probs.is_valid() {
            return Err(SimError::InvalidProbability {
                fixture_ix: ix,
                home: fixture.probs.home,
                draw: fixture.probs.draw,
                away: fixture.probs.away,
            });
        }
    }
    Ok(())
}

/// Per-team fixture membership: the fixture row indices where the team
/// plays home and where it plays away. Built once per season, so the
/// aggregation stage never re-scans the fixture list per team.
#[derive(Debug, Clone, Default)]
pub struct TeamSchedule {
    pub home_rows: Vec<usize>,
    pub away_rows: Vec<usize>,
}

/// Build schedules for every team in the universe.
///
/// A fixture referencing an id outside the universe is an error; a
/// universe team with no fixtures keeps an empty schedule and will end
/// the season on zero points.
pub fn build_schedules(
    fixtures: &[Fixture],
    team_ids: &[u32],
) -> Result<HashMap<u32, TeamSchedule>, SimError> {
    let mut schedules: HashMap<u32, TeamSchedule> = team_ids
        .iter()
        .map(|id| (*id, TeamSchedule::default()))
        .collect();

    for (ix, fixture) in fixtures.iter().enumerate() {
        match schedules.get_mut(&fixture.home_team_id) {
            Some(schedule) => schedule.home_rows.push(ix),
            None => {
                return Err(SimError::UnknownTeam {
                    team_id: fixture.home_team_id,
                    fixture_ix: ix,
                });
            }
        }
        match schedules.get_mut(&fixture.away_team_id) {
            Some(schedule) => schedule.away_rows.push(ix),
            None => {
                return Err(SimError::UnknownTeam {
                    team_id: fixture.away_team_id,
                    fixture_ix: ix,
                });
            }
        }
    }

    Ok(schedules)
}
