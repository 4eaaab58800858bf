use std::cmp::Ordering;

use rand::Rng;

use crate::matrix::Matrix;

/// Turn season point totals into finishing positions, teams × trials.
///
/// Per trial, teams are ordered by descending points; equal-points ties
/// fall back to a fresh uniform tie-break value per team per trial, so
/// the nonzero ranks within one trial always form a strict order.
/// Ranks past `cutoff` are rewritten to 0 ("outside tracked
/// positions"). Only ids in `team_ids` are ranked; gap rows left by
/// sparse ids stay at 0 and never displace a real team.
///
/// Tie-break values are drawn team-major (universe order), trials left
/// to right, from a generator the caller keeps separate from outcome
/// sampling.
pub fn rank_teams<R: Rng>(
    season_points: &Matrix,
    team_ids: &[u32],
    cutoff: u32,
    rng: &mut R,
) -> Matrix {
    let n_sims = season_points.cols();
    let mut positions = Matrix::zeros(season_points.rows(), n_sims);

    let mut tiebreak = vec![0.0f64; team_ids.len() * n_sims];
    for value in tiebreak.iter_mut() {
        *value = rng.gen_range(0.0..1.0);
    }

    let mut order: Vec<usize> = (0..team_ids.len()).collect();
    for trial in 0..n_sims {
        order.sort_by(|&a, &b| {
            let points_a = season_points.get(team_ids[a] as usize, trial);
            let points_b = season_points.get(team_ids[b] as usize, trial);
            points_b.cmp(&points_a).then_with(|| {
                let tb_a = tiebreak[a * n_sims + trial];
                let tb_b = tiebreak[b * n_sims + trial];
                tb_b.partial_cmp(&tb_a).unwrap_or(Ordering::Equal)
            })
        });

        for (slot, &team_ix) in order.iter().enumerate() {
            let rank = slot as u32 + 1;
            let value = if rank > cutoff { 0 } else { rank };
            positions.set(team_ids[team_ix] as usize, trial, value);
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn points_matrix(rows: &[&[u32]]) -> Matrix {
        let mut m = Matrix::zeros(rows.len(), rows[0].len());
        for (r, row) in rows.iter().enumerate() {
            m.row_mut(r).copy_from_slice(row);
        }
        m
    }

    #[test]
    fn clear_points_order_ranks_without_luck() {
        let totals = points_matrix(&[&[9], &[3], &[6]]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let positions = rank_teams(&totals, &[0, 1, 2], 20, &mut rng);
        assert_eq!(positions.get(0, 0), 1);
        assert_eq!(positions.get(2, 0), 2);
        assert_eq!(positions.get(1, 0), 3);
    }

    #[test]
    fn nonzero_ranks_are_unique_within_each_trial() {
        // Everyone on equal points: only the tie-break decides.
        let totals = points_matrix(&[&[5; 64], &[5; 64], &[5; 64], &[5; 64]]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let positions = rank_teams(&totals, &[0, 1, 2, 3], 20, &mut rng);

        for trial in 0..64 {
            let mut ranks: Vec<u32> =
                (0..4).map(|team| positions.get(team, trial)).collect();
            ranks.sort_unstable();
            assert_eq!(ranks, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn tie_break_luck_varies_across_trials() {
        let totals = points_matrix(&[&[5; 64], &[5; 64]]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let positions = rank_teams(&totals, &[0, 1], 20, &mut rng);

        let firsts = (0..64).filter(|&t| positions.get(0, t) == 1).count();
        // With 64 fair coin flips, all-heads or all-tails means the
        // tie-break is not independent across trials.
        assert!(firsts > 0 && firsts < 64);
    }

    #[test]
    fn ranks_past_the_cutoff_collapse_to_zero() {
        let totals = points_matrix(&[&[9], &[6], &[3], &[0]]);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let positions = rank_teams(&totals, &[0, 1, 2, 3], 2, &mut rng);

        assert_eq!(positions.get(0, 0), 1);
        assert_eq!(positions.get(1, 0), 2);
        assert_eq!(positions.get(2, 0), 0);
        assert_eq!(positions.get(3, 0), 0);
    }

    #[test]
    fn gap_rows_are_never_ranked() {
        // Ids 0 and 3 exist; rows 1 and 2 are id gaps.
        let totals = points_matrix(&[&[0], &[0], &[0], &[6]]);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let positions = rank_teams(&totals, &[0, 3], 20, &mut rng);

        assert_eq!(positions.get(3, 0), 1);
        assert_eq!(positions.get(0, 0), 2);
        assert_eq!(positions.get(1, 0), 0);
        assert_eq!(positions.get(2, 0), 0);
    }
}
