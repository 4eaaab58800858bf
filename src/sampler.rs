use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use crate::error::SimError;
use crate::fixtures::{Fixture, validate_fixtures};
use crate::matrix::Matrix;
use crate::points::MatchOutcome;

/// Draw `n_sims` independent outcomes for every fixture and record the
/// home points, fixtures × trials.
///
/// All fixture triples are validated before the first draw, so an
/// invalid season consumes no entropy. Draw order is fixed for
/// reproducibility under a seeded generator: fixtures in row order,
/// trials left to right within a fixture.
pub fn sample_home_points<R: Rng>(
    fixtures: &[Fixture],
    n_sims: usize,
    rng: &mut R,
) -> Result<Matrix, SimError> {
    if n_sims == 0 {
        return Err(SimError::NoTrials);
    }
    validate_fixtures(fixtures)?;

    let mut home_points = Matrix::zeros(fixtures.len(), n_sims);
    for (ix, fixture) in fixtures.iter().enumerate() {
        let weights = [fixture.probs.home, fixture.probs.draw, fixture.probs.away];
        // Already validated; WeightedIndex only re-checks non-negativity
        // and a positive total.
        let dist =
            WeightedIndex::new(weights).map_err(|_| SimError::InvalidProbability {
                fixture_ix: ix,
                home: fixture.probs.home,
                draw: fixture.probs.draw,
                away: fixture.probs.away,
            })?;

        for cell in home_points.row_mut(ix) {
            *cell = MatchOutcome::ALL[dist.sample(rng)].home_points();
        }
    }

    Ok(home_points)
}
