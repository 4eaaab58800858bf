use std::env;
use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::pipeline::SimOptions;

/// Batch-runner configuration. Everything the original tooling kept as
/// embedded constants (data directory, season range, trial count,
/// ranking cutoff) is a flag here, with environment-variable fallbacks
/// for the common knobs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub first_season: u16,
    pub last_season: u16,
    pub options: SimOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        let input_dir = env::var("SIM_INPUT_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));
        let output_dir = env::var("SIM_OUTPUT_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| input_dir.clone());
        let n_sims = env::var("SIM_TRIALS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(10_000);
        let seed = env::var("SIM_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());

        Self {
            input_dir,
            output_dir,
            first_season: 2004,
            last_season: 2015,
            options: SimOptions {
                n_sims,
                seed,
                ..SimOptions::default()
            },
        }
    }
}

impl RunConfig {
    pub fn from_args(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = Self::default();
        let mut args = args;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--input-dir" => {
                    config.input_dir = PathBuf::from(take_value(&mut args, &arg)?);
                }
                "--output-dir" => {
                    config.output_dir = PathBuf::from(take_value(&mut args, &arg)?);
                }
                "--first-season" => {
                    config.first_season = parse_value(&mut args, &arg)?;
                }
                "--last-season" => {
                    config.last_season = parse_value(&mut args, &arg)?;
                }
                "--sims" => {
                    config.options.n_sims = parse_value(&mut args, &arg)?;
                }
                "--cutoff" => {
                    config.options.position_cutoff = parse_value(&mut args, &arg)?;
                }
                "--seed" => {
                    config.options.seed = Some(parse_value(&mut args, &arg)?);
                }
                other => bail!("unknown argument {other}"),
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.first_season > self.last_season {
            bail!(
                "season range {}-{} is reversed",
                self.first_season,
                self.last_season
            );
        }
        if self.options.n_sims == 0 {
            bail!("--sims must be positive");
        }
        Ok(())
    }

    pub fn seasons(&self) -> impl Iterator<Item = u16> {
        self.first_season..=self.last_season
    }
}

fn take_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    match args.next() {
        Some(value) => Ok(value),
        None => bail!("{flag} needs a value"),
    }
}

fn parse_value<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<T> {
    let raw = take_value(args, flag)?;
    match raw.parse::<T>() {
        Ok(value) => Ok(value),
        Err(_) => bail!("{flag}: cannot parse {raw:?}"),
    }
}
