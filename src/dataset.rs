use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::fixtures::{Fixture, Prob3};

/// One row of a season's match-probability file. Row order in the file
/// defines the fixture row index used throughout the simulation.
#[derive(Debug, Clone, Deserialize)]
struct FixtureRecord {
    home_team_id: u32,
    away_team_id: u32,
    home_win_prob: f64,
    draw_prob: f64,
    away_win_prob: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct TeamRecord {
    team_id: u32,
    team_name: String,
}

pub fn season_file(dir: &Path, season: u16) -> PathBuf {
    dir.join("match_probabilities").join(format!("{season}.csv"))
}

/// Read one season's fixtures with their outcome probabilities.
/// Probability validation is the pipeline's job, not the loader's.
pub fn load_season(dir: &Path, season: u16) -> Result<Vec<Fixture>> {
    let path = season_file(dir, season);
    let file = File::open(&path)
        .with_context(|| format!("open season file {}", path.display()))?;

    let mut fixtures = Vec::new();
    let mut reader = csv::Reader::from_reader(file);
    for (ix, record) in reader.deserialize::<FixtureRecord>().enumerate() {
        let record = record
            .with_context(|| format!("parse row {ix} of {}", path.display()))?;
        fixtures.push(Fixture {
            home_team_id: record.home_team_id,
            away_team_id: record.away_team_id,
            probs: Prob3 {
                home: record.home_win_prob,
                draw: record.draw_prob,
                away: record.away_win_prob,
            },
        });
    }
    Ok(fixtures)
}

/// Read the team display names, keyed by team id.
pub fn load_team_names(dir: &Path) -> Result<HashMap<u32, String>> {
    let path = dir.join("teams.csv");
    let file = File::open(&path)
        .with_context(|| format!("open teams file {}", path.display()))?;

    let mut names = HashMap::new();
    let mut reader = csv::Reader::from_reader(file);
    for record in reader.deserialize::<TeamRecord>() {
        let record = record.with_context(|| format!("parse {}", path.display()))?;
        names.insert(record.team_id, record.team_name);
    }
    Ok(names)
}

/// Universe of team ids across the loaded seasons: the union of home
/// and away ids, sorted so ranking and export order are stable.
pub fn team_id_universe(seasons: &[(u16, Vec<Fixture>)]) -> Vec<u32> {
    let mut ids = BTreeSet::new();
    for (_, fixtures) in seasons {
        for fixture in fixtures {
            ids.insert(fixture.home_team_id);
            ids.insert(fixture.away_team_id);
        }
    }
    ids.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_is_a_sorted_union_across_seasons() {
        let fixture = |home, away| Fixture {
            home_team_id: home,
            away_team_id: away,
            probs: Prob3::uniform(),
        };
        let seasons = vec![
            (2004u16, vec![fixture(3, 1)]),
            (2005u16, vec![fixture(1, 7), fixture(7, 3)]),
        ];
        assert_eq!(team_id_universe(&seasons), vec![1, 3, 7]);
    }

    #[test]
    fn season_file_layout_matches_the_data_directory() {
        let path = season_file(Path::new("data"), 2004);
        assert_eq!(
            path,
            Path::new("data").join("match_probabilities").join("2004.csv")
        );
    }
}
