use std::fs;

use anyhow::{Context, Result};
use rayon::prelude::*;

use position_sim::config::RunConfig;
use position_sim::dataset;
use position_sim::export;
use position_sim::fixtures::Fixture;
use position_sim::pipeline::{self, SeasonOutcome};

fn main() -> Result<()> {
    env_logger::init();

    let config = RunConfig::from_args(std::env::args().skip(1))?;
    log::info!(
        "simulating seasons {}-{} with {} trials (cutoff {}, seed {:?})",
        config.first_season,
        config.last_season,
        config.options.n_sims,
        config.options.position_cutoff,
        config.options.seed,
    );

    // A season whose file is missing or malformed is skipped; the rest
    // of the batch still runs.
    let mut seasons: Vec<(u16, Vec<Fixture>)> = Vec::new();
    for season in config.seasons() {
        match dataset::load_season(&config.input_dir, season) {
            Ok(fixtures) => seasons.push((season, fixtures)),
            Err(err) => log::warn!("season {season}: {err:#}; skipping"),
        }
    }
    if seasons.is_empty() {
        anyhow::bail!(
            "no loadable seasons under {}",
            config.input_dir.display()
        );
    }

    let team_ids = dataset::team_id_universe(&seasons);
    let names = dataset::load_team_names(&config.input_dir)?;
    log::info!(
        "{} seasons loaded, {} teams in the universe",
        seasons.len(),
        team_ids.len()
    );

    // Seasons share nothing, so scheduling order is irrelevant and the
    // per-season seed streams keep parallel output identical to serial.
    let mut results: Vec<(u16, SeasonOutcome)> = seasons
        .par_iter()
        .filter_map(|(season, fixtures)| {
            match pipeline::simulate_season(fixtures, &team_ids, *season, &config.options) {
                Ok(outcome) => Some((*season, outcome)),
                Err(err) => {
                    log::warn!("season {season}: {err}; skipping");
                    None
                }
            }
        })
        .collect();
    results.sort_by_key(|(season, _)| *season);

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("create output dir {}", config.output_dir.display())
    })?;
    let positions_path = config.output_dir.join("positions.csv");
    let simulations_path = config.output_dir.join("simulations.csv");
    export::write_positions(&positions_path, &results, &names)?;
    export::write_simulations(&simulations_path, &results, &names)?;

    log::info!(
        "wrote {} and {}",
        positions_path.display(),
        simulations_path.display()
    );
    Ok(())
}
