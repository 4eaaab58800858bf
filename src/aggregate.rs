use std::collections::HashMap;

use crate::fixtures::TeamSchedule;
use crate::matrix::Matrix;

/// Sum fixture points into per-team season totals, teams × trials.
///
/// For each team: its home-fixture rows of the home matrix plus its
/// away-fixture rows of the away matrix, added column-wise so every
/// trial stays independent. The team axis spans 0..=max team id; ids
/// without a schedule keep all-zero rows, trading memory for not
/// having to remap sparse ids.
pub fn season_points(
    home_points: &Matrix,
    away_points: &Matrix,
    schedules: &HashMap<u32, TeamSchedule>,
) -> Matrix {
    let max_id = schedules.keys().copied().max().unwrap_or(0) as usize;
    let n_sims = home_points.cols();
    let mut totals = Matrix::zeros(max_id + 1, n_sims);

    for (&team_id, schedule) in schedules {
        let row = totals.row_mut(team_id as usize);
        for &ix in &schedule.home_rows {
            for (cell, &p) in row.iter_mut().zip(home_points.row(ix)) {
                *cell += p;
            }
        }
        for &ix in &schedule.away_rows {
            for (cell, &p) in row.iter_mut().zip(away_points.row(ix)) {
                *cell += p;
            }
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{Fixture, Prob3, build_schedules};
    use crate::points::away_points_matrix;

    fn fixture(home: u32, away: u32) -> Fixture {
        Fixture {
            home_team_id: home,
            away_team_id: away,
            probs: Prob3::uniform(),
        }
    }

    #[test]
    fn totals_follow_the_schedule_per_trial() {
        // Two fixtures, two trials, hand-written results:
        // trial 0: team 1 beats team 2 at home, then draws away at 2.
        // trial 1: team 1 loses at home, then wins away.
        let fixtures = vec![fixture(1, 2), fixture(2, 1)];
        let schedules = build_schedules(&fixtures, &[1, 2]).unwrap();

        let mut home = Matrix::zeros(2, 2);
        home.row_mut(0).copy_from_slice(&[3, 0]);
        home.row_mut(1).copy_from_slice(&[1, 0]);
        let away = away_points_matrix(&home).unwrap();

        let totals = season_points(&home, &away, &schedules);
        assert_eq!(totals.row(1), &[4, 3]); // 3+1, 0+3
        assert_eq!(totals.row(2), &[1, 3]); // 0+1, 3+0
    }

    #[test]
    fn team_without_fixtures_totals_zero() {
        let fixtures = vec![fixture(1, 2)];
        let schedules = build_schedules(&fixtures, &[1, 2, 5]).unwrap();

        let mut home = Matrix::zeros(1, 3);
        home.row_mut(0).copy_from_slice(&[3, 1, 0]);
        let away = away_points_matrix(&home).unwrap();

        let totals = season_points(&home, &away, &schedules);
        assert_eq!(totals.row(5), &[0, 0, 0]);
    }

    #[test]
    fn sparse_ids_leave_zero_gap_rows() {
        let fixtures = vec![fixture(2, 7)];
        let schedules = build_schedules(&fixtures, &[2, 7]).unwrap();

        let mut home = Matrix::zeros(1, 1);
        home.set(0, 0, 3);
        let away = away_points_matrix(&home).unwrap();

        let totals = season_points(&home, &away, &schedules);
        assert_eq!(totals.rows(), 8);
        assert_eq!(totals.row(2), &[3]);
        assert_eq!(totals.row(7), &[0]);
        for gap in [0, 1, 3, 4, 5, 6] {
            assert_eq!(totals.row(gap), &[0]);
        }
    }

    #[test]
    fn points_are_conserved_across_every_trial() {
        // Each decisive fixture hands out 3 points, each draw 2, so a
        // trial's total is 3 × fixtures − draws in that trial.
        let fixtures = vec![fixture(1, 2), fixture(2, 3), fixture(3, 1)];
        let schedules = build_schedules(&fixtures, &[1, 2, 3]).unwrap();

        let mut home = Matrix::zeros(3, 4);
        home.row_mut(0).copy_from_slice(&[3, 1, 0, 3]);
        home.row_mut(1).copy_from_slice(&[0, 0, 1, 1]);
        home.row_mut(2).copy_from_slice(&[1, 3, 3, 0]);
        let away = away_points_matrix(&home).unwrap();

        let totals = season_points(&home, &away, &schedules);
        for trial in 0..4 {
            let draws = (0..home.rows()).filter(|&r| home.get(r, trial) == 1).count();
            let handed_out: u32 = (0..totals.rows()).map(|r| totals.get(r, trial)).sum();
            assert_eq!(handed_out, 3 * fixtures.len() as u32 - draws as u32);
        }
    }
}
