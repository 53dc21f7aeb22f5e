//! Pattern driver orchestrating full generation runs
//!
//! A run seeds the random source exactly once, computes the active palette,
//! fills the background, then launches the configured number of independent
//! placement chains from random seed points. The random draws happen in a
//! fixed order (palette pick, draw-color sample, then per-loop per-shape
//! draws), so a run is fully determined by its configuration.

use crate::algorithm::palette::{ActivePalette, select_palette};
use crate::algorithm::placement::{ShapeSpec, place_recursive};
use crate::io::configuration::{MAX_INITIAL_SIZE, MIN_INITIAL_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::render::canvas::{Canvas, Color};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parameters for one generation run, supplied by the invoking collaborator
#[derive(Clone, Copy, Debug)]
pub struct GenerationConfig {
    /// Seed for the run's random source; any sign
    pub seed: i64,
    /// Number of drawing colors to sample from the catalogue
    pub color_count: usize,
    /// Number of independent placement chains
    pub loop_count: usize,
    /// Depth budget for each placement chain
    pub max_depth: u32,
    /// Stroke width for line shapes; purely cosmetic
    pub line_thickness: f64,
}

impl GenerationConfig {
    /// Validate every field against the given catalogue
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the offending field if the color
    /// count cannot leave a disjoint background, the loop count is zero, or
    /// the line thickness is not a positive finite number.
    pub fn validate(&self, catalogue: &[Color]) -> Result<()> {
        if self.color_count < 1 {
            return Err(invalid_parameter(
                "color_count",
                &self.color_count,
                &"must be at least 1",
            ));
        }
        if self.color_count >= catalogue.len() {
            return Err(invalid_parameter(
                "color_count",
                &self.color_count,
                &format!(
                    "must be less than the catalogue size ({})",
                    catalogue.len()
                ),
            ));
        }
        if self.loop_count < 1 {
            return Err(invalid_parameter(
                "loop_count",
                &self.loop_count,
                &"must be at least 1",
            ));
        }
        if !self.line_thickness.is_finite() || self.line_thickness <= 0.0 {
            return Err(invalid_parameter(
                "line_thickness",
                &self.line_thickness,
                &"must be a positive finite number",
            ));
        }
        Ok(())
    }
}

/// Owns the drawing surface and runs complete generation passes
///
/// Exactly one run is in flight at a time; the surface and the random
/// source cursor are both scoped to the current run. Repeating a run with
/// the same configuration reproduces the output byte for byte.
#[derive(Debug)]
pub struct PatternGenerator {
    canvas: Canvas,
    catalogue: Vec<Color>,
    config: GenerationConfig,
}

impl PatternGenerator {
    /// Create a generator with a validated configuration and a fresh canvas
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any configuration field or canvas
    /// dimension is out of range.
    pub fn new(
        config: GenerationConfig,
        catalogue: Vec<Color>,
        width: i32,
        height: i32,
    ) -> Result<Self> {
        config.validate(&catalogue)?;
        let canvas = Canvas::new(width, height)?;
        Ok(Self {
            canvas,
            catalogue,
            config,
        })
    }

    /// The configuration this generator runs with
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Borrow the rendered canvas, for export
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Borrow the canvas mutably, for teardown or external clearing
    pub const fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Wipe the drawn content, keeping dimensions and background
    ///
    /// # Errors
    ///
    /// Returns `SurfaceUnavailable` if the canvas has been torn down.
    pub fn clear(&mut self) -> Result<()> {
        self.canvas.clear()
    }

    /// Run one complete generation pass
    ///
    /// Reseeds the random source from the configured seed, selects the
    /// active palette, fills the background, and renders `loop_count`
    /// placement chains. Returns the ordered trace of primary shape
    /// renders. Calling this again repeats the identical run.
    ///
    /// # Errors
    ///
    /// Returns `SurfaceUnavailable` if the canvas is torn down mid-run.
    pub fn generate(&mut self) -> Result<Vec<ShapeSpec>> {
        let mut rng = StdRng::seed_from_u64(self.config.seed as u64);
        let palette = select_palette(&self.catalogue, self.config.color_count, &mut rng)?;
        self.canvas.set_background(palette.background)?;

        let (width, height) = self.canvas.dimensions();
        let half_width = width / 2;
        let half_height = height / 2;

        let mut trace = Vec::with_capacity(self.config.loop_count * self.config.max_depth as usize);
        for _ in 0..self.config.loop_count {
            let x = rng.random_range(-half_width..=half_width);
            let y = rng.random_range(-half_height..=half_height);
            let size = f64::from(rng.random_range(MIN_INITIAL_SIZE..=MAX_INITIAL_SIZE));
            let color = palette.pick_draw_color(&mut rng);

            trace.extend(place_recursive(
                &mut self.canvas,
                [x, y],
                size,
                color,
                self.config.max_depth,
                &palette,
                self.config.line_thickness,
                &mut rng,
            )?);
        }

        Ok(trace)
    }

    /// Recompute the palette this generator's next run will use
    ///
    /// Consumes a fresh random source seeded like `generate`, so the result
    /// matches the palette of the next run without touching the canvas.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configured color count no longer
    /// fits the catalogue.
    pub fn peek_palette(&self) -> Result<ActivePalette> {
        let mut rng = StdRng::seed_from_u64(self.config.seed as u64);
        select_palette(&self.catalogue, self.config.color_count, &mut rng)
    }
}
