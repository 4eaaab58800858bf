use thiserror::Error;

/// Failures surfaced by the simulation core.
///
/// Validation runs once per season at pipeline entry; nothing here is
/// retryable, and one season's failure leaves other seasons untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A fixture's outcome probabilities are negative or do not sum
    /// to 1 within tolerance.
    #[error(
        "fixture {fixture_ix}: invalid outcome probabilities ({home}, {draw}, {away})"
    )]
    InvalidProbability {
        fixture_ix: usize,
        home: f64,
        draw: f64,
        away: f64,
    },

    /// A home-points value outside {0, 1, 3} reached the away-points
    /// translation. Indicates a corrupted points matrix.
    #[error("unknown home points value {0}")]
    UnknownPointsValue(u32),

    /// A fixture references a team id missing from the team universe.
    #[error("fixture {fixture_ix}: team {team_id} not in team universe")]
    UnknownTeam { team_id: u32, fixture_ix: usize },

    /// The requested trial count cannot produce a distribution.
    #[error("trial count must be positive")]
    NoTrials,
}
