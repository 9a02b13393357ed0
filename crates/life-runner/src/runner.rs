//! Run orchestration: pick the initial state, advance, persist, summarise.

use anyhow::{Context, Result};
use life_core::RunConfig;
use life_world::{codec, zoo, Grid, Pattern, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, instrument};

/// Where the initial state came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitialSource {
    File { path: PathBuf },
    Pattern { name: String },
    Random { seed: u64, density: f32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub source: InitialSource,
    pub width: u32,
    pub height: u32,
    pub toroidal: bool,
    pub generations: u64,
    pub initial_alive: usize,
    pub final_alive: usize,
    pub final_dead: usize,
    pub bounding_box: Option<(u32, u32, u32, u32)>,
    pub elapsed_ms: u64,
}

pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Result<Self> {
        config.validate().context("invalid run configuration")?;
        Ok(Self { config })
    }

    /// Input file first, then a named pattern, then a random soup
    pub fn initial_state(&self) -> Result<(Grid, InitialSource)> {
        let world = &self.config.world;

        if let Some(path) = &self.config.input {
            let grid = codec::load(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            return Ok((grid, InitialSource::File { path: path.clone() }));
        }

        if let Some(name) = &self.config.pattern {
            let pattern: Pattern = name.parse()?;
            let grid = zoo::place_centered(&pattern.grid()?, world.width, world.height)
                .with_context(|| {
                    format!(
                        "{} does not fit in a {}x{} world",
                        pattern, world.width, world.height
                    )
                })?;
            return Ok((
                grid,
                InitialSource::Pattern {
                    name: pattern.name().to_string(),
                },
            ));
        }

        let seed = &self.config.seed;
        let mut rng = ChaCha8Rng::seed_from_u64(seed.seed);
        let grid = Grid::random(world.width, world.height, seed.density, &mut rng);
        Ok((
            grid,
            InitialSource::Random {
                seed: seed.seed,
                density: seed.density,
            },
        ))
    }

    /// Run the configured number of generations and return the final state
    #[instrument(skip(self), fields(generations = self.config.generations))]
    pub fn run(&self) -> Result<(Grid, RunSummary)> {
        let started = Instant::now();
        let (initial, source) = self.initial_state()?;
        let toroidal = self.config.world.toroidal;

        if toroidal && initial.total_cells() == 0 {
            anyhow::bail!(
                "toroidal world needs non-zero dimensions, got {}x{}",
                initial.width(),
                initial.height()
            );
        }

        info!(
            width = initial.width(),
            height = initial.height(),
            alive = initial.count_alive(),
            toroidal,
            "Starting run for {} generations",
            self.config.generations
        );

        let initial_alive = initial.count_alive();
        let mut world = World::from_grid(initial).with_report_interval(self.config.report_interval);
        world.advance(self.config.generations, toroidal);
        let state = world.into_state();

        if let Some(path) = &self.config.output {
            codec::save(path, &state)
                .with_context(|| format!("failed to save {}", path.display()))?;
            info!("Final state written to {}", path.display());
        }

        let summary = RunSummary {
            source,
            width: state.width(),
            height: state.height(),
            toroidal,
            generations: self.config.generations,
            initial_alive,
            final_alive: state.count_alive(),
            final_dead: state.count_dead(),
            bounding_box: state.bounding_box(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        };

        Ok((state, summary))
    }
}

pub fn emit_summary(summary: &RunSummary) {
    info!(
        event = "run_summary",
        generations = summary.generations,
        width = summary.width,
        height = summary.height,
        toroidal = summary.toroidal,
        initial_alive = summary.initial_alive,
        final_alive = summary.final_alive,
        final_dead = summary.final_dead,
        bounding_box = ?summary.bounding_box,
        elapsed_ms = summary.elapsed_ms,
        "Run complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::{SeedConfig, WorldConfig};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("life-runner-{}-{}", std::process::id(), name))
    }

    fn config(width: u32, height: u32, generations: u64, toroidal: bool) -> RunConfig {
        RunConfig {
            generations,
            report_interval: 0,
            world: WorldConfig {
                width,
                height,
                toroidal,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_pattern_run() {
        let mut config = config(8, 8, 24, true);
        config.pattern = Some("glider".to_string());

        let runner = Runner::new(config).unwrap();
        let (initial, source) = runner.initial_state().unwrap();
        assert_eq!(source, InitialSource::Pattern { name: "glider".to_string() });

        // 8x8 torus: the glider returns home after 32 generations, so after
        // 24 it has moved 6 cells diagonally
        let (state, summary) = runner.run().unwrap();
        assert_eq!(summary.initial_alive, 5);
        assert_eq!(summary.final_alive, 5);
        assert_eq!(state.trimmed(), initial.trimmed());
    }

    #[test]
    fn test_random_run_is_reproducible() {
        let mut config = config(24, 24, 10, false);
        config.seed = SeedConfig {
            seed: 99,
            density: 0.3,
        };

        let (a, _) = Runner::new(config.clone()).unwrap().run().unwrap();
        let (b, summary) = Runner::new(config).unwrap().run().unwrap();
        assert_eq!(a, b);
        assert_eq!(summary.source, InitialSource::Random { seed: 99, density: 0.3 });
    }

    #[test]
    fn test_file_round_trip() {
        let input = temp_path("input.gol");
        let output = temp_path("output.bgol");
        codec::save(&input, &zoo::place_centered(&zoo::glider().unwrap(), 10, 10).unwrap()).unwrap();

        let mut config = config(0, 0, 4, false);
        config.input = Some(input.clone());
        config.output = Some(output.clone());

        let (state, summary) = Runner::new(config).unwrap().run().unwrap();
        let saved = codec::load(&output).unwrap();
        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&output).unwrap();

        assert_eq!(saved, state);
        assert_eq!((summary.width, summary.height), (10, 10));
        assert_eq!(summary.final_alive, 5);
    }

    #[test]
    fn test_errors() {
        let mut bad_density = config(8, 8, 1, false);
        bad_density.seed.density = -0.5;
        assert!(Runner::new(bad_density).is_err());

        let mut unknown = config(8, 8, 1, false);
        unknown.pattern = Some("unicorn".to_string());
        assert!(Runner::new(unknown).unwrap().run().is_err());

        let mut too_small = config(2, 2, 1, false);
        too_small.pattern = Some("lwss".to_string());
        assert!(Runner::new(too_small).unwrap().run().is_err());

        let mut missing = config(8, 8, 1, false);
        missing.input = Some(temp_path("does-not-exist.gol"));
        assert!(Runner::new(missing).unwrap().run().is_err());
    }

    #[test]
    fn test_summary_serializes() {
        let (_, summary) = Runner::new(config(4, 4, 1, false)).unwrap().run().unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["source"]["kind"], "random");
        assert_eq!(json["generations"], 1);
    }
}
