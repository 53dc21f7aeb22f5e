//! Command-line interface for the camouflage pattern generator
//!
//! Assembles a validated generation configuration from the command line,
//! runs the engine once, and exports the finished canvas as a PNG.

use crate::algorithm::executor::{GenerationConfig, PatternGenerator};
use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_COLOR_COUNT, DEFAULT_LINE_THICKNESS,
    DEFAULT_LOOP_COUNT, DEFAULT_RECURSION_DEPTH, DEFAULT_SEED, NEON_PALETTE, URBAN_PALETTE,
};
use crate::io::error::Result;
use crate::io::image::export_canvas_as_png;
use crate::render::canvas::Color;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Selectable color catalogues
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PaletteChoice {
    /// Greys, blues, greens, and beiges resembling urban environments
    Urban,
    /// Neon-inspired high-saturation colors
    Neon,
}

impl PaletteChoice {
    /// The ten-color catalogue behind this choice
    pub const fn catalogue(self) -> [Color; 10] {
        match self {
            Self::Urban => URBAN_PALETTE,
            Self::Neon => NEON_PALETTE,
        }
    }
}

#[derive(Parser)]
#[command(name = "camogen")]
#[command(
    author,
    version,
    about = "Generate camouflage-style patterns from recursive random shapes"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Output PNG path
    #[arg(value_name = "OUTPUT", default_value = "pattern.png")]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED, allow_hyphen_values = true)]
    pub seed: i64,

    /// Number of drawing colors sampled from the catalogue
    #[arg(short, long, default_value_t = DEFAULT_COLOR_COUNT)]
    pub colors: usize,

    /// Number of independent placement chains
    #[arg(short, long, default_value_t = DEFAULT_LOOP_COUNT)]
    pub loops: usize,

    /// Recursion depth budget per chain
    #[arg(short, long, default_value_t = DEFAULT_RECURSION_DEPTH)]
    pub depth: u32,

    /// Stroke width for line shapes
    #[arg(short, long, default_value_t = DEFAULT_LINE_THICKNESS)]
    pub thickness: f64,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: i32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: i32,

    /// Color catalogue to draw from
    #[arg(short, long, value_enum, default_value_t = PaletteChoice::Neon)]
    pub palette: PaletteChoice,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Assemble the engine configuration from the parsed arguments
    pub const fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            seed: self.seed,
            color_count: self.colors,
            loop_count: self.loops,
            max_depth: self.depth,
            line_thickness: self.thickness,
        }
    }

    /// Generate one pattern and export it to the output path
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, generation, or export fails
    // Allow print for the user-facing summary line
    #[allow(clippy::print_stderr)]
    pub fn execute(&self) -> Result<()> {
        let mut generator = PatternGenerator::new(
            self.generation_config(),
            self.palette.catalogue().to_vec(),
            self.width,
            self.height,
        )?;

        let trace = generator.generate()?;
        export_canvas_as_png(generator.canvas(), &self.output)?;

        if !self.quiet {
            eprintln!(
                "Rendered {} shapes over {} loops to {}",
                trace.len(),
                self.loops,
                self.output.display()
            );
        }

        Ok(())
    }
}
