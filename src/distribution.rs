use crate::matrix::Matrix;

/// Share of trials in which one team finished in one position.
/// Position 0 means "outside the tracked cutoff".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRow {
    pub team_id: u32,
    pub position: u32,
    pub percent: f64,
}

/// Collapse a positions matrix into per-team probabilities over
/// 0..=cutoff. Each team's probabilities sum to 1 (up to float
/// rounding); positions a team never reached carry zero mass.
pub fn position_distribution(
    positions: &Matrix,
    team_ids: &[u32],
    cutoff: u32,
) -> Vec<PositionRow> {
    let n_sims = positions.cols();
    let mut rows = Vec::with_capacity(team_ids.len() * (cutoff as usize + 1));

    for &team_id in team_ids {
        let mut counts = vec![0usize; cutoff as usize + 1];
        for &position in positions.row(team_id as usize) {
            counts[position as usize] += 1;
        }
        for (position, &count) in counts.iter().enumerate() {
            rows.push(PositionRow {
                team_id,
                position: position as u32,
                percent: count as f64 / n_sims as f64,
            });
        }
    }

    rows
}
