use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::aggregate::season_points;
use crate::distribution::{PositionRow, position_distribution};
use crate::error::SimError;
use crate::fixtures::{Fixture, build_schedules};
use crate::matrix::Matrix;
use crate::points::away_points_matrix;
use crate::rank::rank_teams;
use crate::sampler::sample_home_points;

/// Knobs for one season simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimOptions {
    /// Number of synthetic season realizations to draw.
    pub n_sims: usize,
    /// Finishing positions past this rank are reported as 0.
    pub position_cutoff: u32,
    /// Base seed for reproducible runs; `None` draws fresh entropy.
    pub seed: Option<u64>,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            n_sims: 10_000,
            position_cutoff: 20,
            seed: None,
        }
    }
}

/// One raw trial observation, flattened for downstream export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationRow {
    pub team_id: u32,
    pub simulation_id: usize,
    pub position: u32,
}

/// Everything one season simulation produces.
#[derive(Debug, Clone)]
pub struct SeasonOutcome {
    pub positions: Vec<PositionRow>,
    pub raw: Vec<SimulationRow>,
}

/// Outcome sampling and tie-breaking run on separate ChaCha streams of
/// the same base seed, so reseeding or reordering one never shifts the
/// other. The season id spreads concurrent seasons over disjoint
/// streams, keeping a multi-season batch reproducible regardless of
/// which season runs first.
fn season_rngs(seed: Option<u64>, season_id: u16) -> (ChaCha8Rng, ChaCha8Rng) {
    match seed {
        Some(seed) => {
            let mut outcomes = ChaCha8Rng::seed_from_u64(seed);
            outcomes.set_stream(u64::from(season_id) * 2);
            let mut tiebreaks = ChaCha8Rng::seed_from_u64(seed);
            tiebreaks.set_stream(u64::from(season_id) * 2 + 1);
            (outcomes, tiebreaks)
        }
        None => (ChaCha8Rng::from_entropy(), ChaCha8Rng::from_entropy()),
    }
}

/// Run one season end to end: sample outcomes, translate away points,
/// total per team, rank per trial, estimate the position distribution.
///
/// Pure aside from RNG consumption: every matrix is created fresh for
/// this call and nothing survives it, so seasons can run concurrently
/// without sharing state. Validation happens up front; an invalid
/// season fails here without touching any other season in a batch.
pub fn simulate_season(
    fixtures: &[Fixture],
    team_ids: &[u32],
    season_id: u16,
    options: &SimOptions,
) -> Result<SeasonOutcome, SimError> {
    let schedules = build_schedules(fixtures, team_ids)?;
    let (mut outcome_rng, mut tiebreak_rng) = season_rngs(options.seed, season_id);

    let home_points = sample_home_points(fixtures, options.n_sims, &mut outcome_rng)?;
    let away_points = away_points_matrix(&home_points)?;
    let totals = season_points(&home_points, &away_points, &schedules);
    let positions = rank_teams(
        &totals,
        team_ids,
        options.position_cutoff,
        &mut tiebreak_rng,
    );

    Ok(SeasonOutcome {
        positions: position_distribution(&positions, team_ids, options.position_cutoff),
        raw: flatten_positions(&positions, team_ids),
    })
}

fn flatten_positions(positions: &Matrix, team_ids: &[u32]) -> Vec<SimulationRow> {
    let mut raw = Vec::with_capacity(team_ids.len() * positions.cols());
    for &team_id in team_ids {
        for (simulation_id, &position) in
            positions.row(team_id as usize).iter().enumerate()
        {
            raw.push(SimulationRow {
                team_id,
                simulation_id,
                position,
            });
        }
    }
    raw
}
