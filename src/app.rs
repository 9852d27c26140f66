use std::{io::Write, sync::mpsc};

use anyhow::Context;

use crate::{
    config::{Config, OutputMode},
    generators::{GenerationStats, MazeGenerator},
    renderer::{self, Replayer},
};

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generates one maze and renders it to `out` in the configured mode.
    pub fn run<W: Write>(&self, out: &mut W) -> anyhow::Result<GenerationStats> {
        let Config {
            width,
            height,
            seed,
            mode,
            ..
        } = self.config;
        let mut generator = MazeGenerator::new(width, height, seed)?;
        tracing::info!(
            "[app] Generating {}x{} maze (seed: {:?}, mode: {:?})",
            width,
            height,
            seed,
            mode
        );

        let stats = match mode {
            OutputMode::Plain => {
                let stats = generator.generate_maze();
                renderer::render_plain(generator.maze(), out).context("failed to print maze")?;
                stats
            }
            OutputMode::Color => {
                let stats = generator.generate_maze();
                renderer::render_styled(generator.maze(), out).context("failed to print maze")?;
                stats
            }
            OutputMode::Animate => self.run_animated(&mut generator, out)?,
        };

        tracing::info!(
            "[app] Carved {} passages ({} frontier pushes, {} stale, {} rejected)",
            stats.conversions,
            stats.pushed,
            stats.stale,
            stats.rejected
        );
        Ok(stats)
    }

    fn run_animated<W: Write>(
        &self,
        generator: &mut MazeGenerator,
        out: &mut W,
    ) -> anyhow::Result<GenerationStats> {
        let (width, height) = (self.config.width, self.config.height);
        if !renderer::fits_terminal(width, height).unwrap_or(false) {
            tracing::warn!(
                "[app] Terminal cannot fit a {}x{} maze, printing it without animation",
                width,
                height
            );
            let stats = generator.generate_maze();
            renderer::render_styled(generator.maze(), out).context("failed to print maze")?;
            return Ok(stats);
        }

        let (grid_event_tx, grid_event_rx) = mpsc::channel();
        generator.set_event_sender(Some(grid_event_tx));
        let stats = generator.generate_maze();
        generator.set_event_sender(None);

        let mut replayer = Replayer::new(&mut *out, self.config.animation_delay);
        replayer
            .replay(&grid_event_rx)
            .context("failed to animate maze")?;
        replayer.finish().context("failed to animate maze")?;
        Ok(stats)
    }
}
