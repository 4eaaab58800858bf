use crate::error::SimError;
use crate::matrix::Matrix;

/// Result of one simulated fixture, home perspective.
///
/// Point values live on the variant so the home→away mapping is a
/// total function over this enum; no lookup table can go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl MatchOutcome {
    /// Sampling order: home win, draw, away win.
    pub const ALL: [MatchOutcome; 3] =
        [MatchOutcome::HomeWin, MatchOutcome::Draw, MatchOutcome::AwayWin];

    pub fn home_points(self) -> u32 {
        match self {
            MatchOutcome::HomeWin => 3,
            MatchOutcome::Draw => 1,
            MatchOutcome::AwayWin => 0,
        }
    }

    pub fn away_points(self) -> u32 {
        match self {
            MatchOutcome::HomeWin => 0,
            MatchOutcome::Draw => 1,
            MatchOutcome::AwayWin => 3,
        }
    }

    /// Inverse of `home_points`. A draw is the only value the home→away
    /// translation maps to itself.
    pub fn from_home_points(points: u32) -> Result<Self, SimError> {
        match points {
            3 => Ok(MatchOutcome::HomeWin),
            1 => Ok(MatchOutcome::Draw),
            0 => Ok(MatchOutcome::AwayWin),
            other => Err(SimError::UnknownPointsValue(other)),
        }
    }
}

/// Element-wise home→away translation of a points matrix, preserving
/// shape: {3→0, 1→1, 0→3}. Any other value means the sampling stage
/// produced garbage, which is fatal for the season.
pub fn away_points_matrix(home_points: &Matrix) -> Result<Matrix, SimError> {
    let mut away = Matrix::zeros(home_points.rows(), home_points.cols());
    for r in 0..home_points.rows() {
        let src = home_points.row(r);
        let dst = away.row_mut(r);
        for (cell, &home) in dst.iter_mut().zip(src) {
            *cell = MatchOutcome::from_home_points(home)?.away_points();
        }
    }
    Ok(away)
}
