//! Command-line runner for the Game of Life engine.

mod runner;
mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use life_core::RunConfig;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "life-runner")]
#[command(about = "Run Conway's Game of Life on a bounded or toroidal grid", long_about = None)]
struct Args {
    /// JSON run configuration; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid file to start from (.gol ascii, .bgol binary)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Named pattern placed at the centre: glider, r-pentomino, lwss
    #[arg(short, long)]
    pattern: Option<String>,

    /// World width
    #[arg(long)]
    width: Option<u32>,

    /// World height
    #[arg(long)]
    height: Option<u32>,

    /// Seed for the random soup
    #[arg(short, long)]
    seed: Option<u64>,

    /// Probability of a cell starting alive in the random soup
    #[arg(short, long)]
    density: Option<f32>,

    /// Number of generations to advance
    #[arg(short, long)]
    generations: Option<u64>,

    /// Log progress every N generations (0 = off)
    #[arg(long)]
    report_interval: Option<u64>,

    /// Wrap the grid edges
    #[arg(short, long)]
    toroidal: bool,

    /// Write the final state here (.gol ascii, .bgol binary)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the final state to stdout
    #[arg(long)]
    print: bool,

    /// Print the run summary as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Defaults, then the config file, then explicit flags
    fn to_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_json_file(path)
                .with_context(|| format!("failed to read config {}", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input = Some(input.clone());
        }
        if let Some(pattern) = &self.pattern {
            config.pattern = Some(pattern.clone());
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if let Some(width) = self.width {
            config.world.width = width;
        }
        if let Some(height) = self.height {
            config.world.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed.seed = seed;
        }
        if let Some(density) = self.density {
            config.seed.density = density;
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if let Some(interval) = self.report_interval {
            config.report_interval = interval;
        }
        if self.toroidal {
            config.world.toroidal = true;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    telemetry::init_telemetry(args.verbose)?;

    let config = args.to_config()?;
    info!("Starting Game of Life runner");

    let runner = runner::Runner::new(config)?;
    let (state, summary) = runner.run()?;

    if args.print {
        print!("{}", state);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        runner::emit_summary(&summary);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "life-runner",
            "--pattern",
            "glider",
            "--width",
            "20",
            "-g",
            "7",
            "--toroidal",
        ]);
        let config = args.to_config().unwrap();

        assert_eq!(config.pattern.as_deref(), Some("glider"));
        assert_eq!(config.world.width, 20);
        assert_eq!(config.world.height, 64);
        assert_eq!(config.generations, 7);
        assert!(config.world.toroidal);
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("life-runner-args-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "generations": 50, "seed": { "seed": 3, "density": 0.1 } }"#)
            .unwrap();

        let args = Args::parse_from([
            "life-runner",
            "--config",
            path.to_str().unwrap(),
            "--density",
            "0.6",
        ]);
        let config = args.to_config().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.generations, 50);
        assert_eq!(config.seed.seed, 3);
        assert_eq!(config.seed.density, 0.6);
    }

    #[test]
    fn test_missing_config_file() {
        let args = Args::parse_from(["life-runner", "--config", "/nonexistent/run.json"]);
        assert!(args.to_config().is_err());
    }
}
