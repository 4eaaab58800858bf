use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::pipeline::SeasonOutcome;

/// Season label in "2004/05" form.
pub fn season_label(season: u16) -> String {
    format!("{}/{:02}", season, (season + 1) % 100)
}

#[derive(Debug, Serialize)]
struct PositionCsvRow<'a> {
    team_id: u32,
    team_name: &'a str,
    season_id: u16,
    season: &'a str,
    position: u32,
    percent: f64,
}

#[derive(Debug, Serialize)]
struct SimulationCsvRow<'a> {
    team_id: u32,
    team_name: &'a str,
    season_id: u16,
    season: &'a str,
    simulation_id: usize,
    position: u32,
}

fn team_name<'a>(names: &'a HashMap<u32, String>, team_id: u32) -> &'a str {
    names.get(&team_id).map(String::as_str).unwrap_or("")
}

/// Write the per-team position probabilities for all seasons,
/// decorated with season labels and team names.
pub fn write_positions(
    path: &Path,
    results: &[(u16, SeasonOutcome)],
    names: &HashMap<u32, String>,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create {}", path.display()))?;
    let mut writer = csv::Writer::from_writer(file);

    for (season, outcome) in results {
        let label = season_label(*season);
        for row in &outcome.positions {
            writer
                .serialize(PositionCsvRow {
                    team_id: row.team_id,
                    team_name: team_name(names, row.team_id),
                    season_id: *season,
                    season: &label,
                    position: row.position,
                    percent: row.percent,
                })
                .context("write positions row")?;
        }
    }

    writer.flush().context("flush positions csv")?;
    Ok(())
}

/// Write the raw per-trial finishing positions for all seasons.
pub fn write_simulations(
    path: &Path,
    results: &[(u16, SeasonOutcome)],
    names: &HashMap<u32, String>,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create {}", path.display()))?;
    let mut writer = csv::Writer::from_writer(file);

    for (season, outcome) in results {
        let label = season_label(*season);
        for row in &outcome.raw {
            writer
                .serialize(SimulationCsvRow {
                    team_id: row.team_id,
                    team_name: team_name(names, row.team_id),
                    season_id: *season,
                    season: &label,
                    simulation_id: row.simulation_id,
                    position: row.position,
                })
                .context("write simulations row")?;
        }
    }

    writer.flush().context("flush simulations csv")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_label_keeps_two_digit_suffix() {
        assert_eq!(season_label(2004), "2004/05");
        assert_eq!(season_label(2015), "2015/16");
        assert_eq!(season_label(1999), "1999/00");
        assert_eq!(season_label(2009), "2009/10");
    }

    #[test]
    fn missing_team_name_falls_back_to_empty() {
        let mut names = HashMap::new();
        names.insert(1, "Arsenal".to_string());
        assert_eq!(team_name(&names, 1), "Arsenal");
        assert_eq!(team_name(&names, 2), "");
    }
}
