//! Drawing surface with centered logical coordinates
//!
//! The canvas spans [-W/2, W/2] x [-H/2, H/2] with the y axis pointing up,
//! backed by an RGBA raster buffer. The buffer can be torn down externally
//! mid-run; every draw or read path reports that as `SurfaceUnavailable`
//! rather than panicking.

use crate::io::error::{Result, surface_unavailable};
use image::{Rgba, RgbaImage};

/// RGB color triple
pub type Color = [u8; 3];

/// Background color of a freshly created canvas
pub const INITIAL_BACKGROUND: Color = [0xff, 0xff, 0xff];

/// Convert an RGB triple to an opaque raster pixel
pub const fn to_rgba(color: Color) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 0xff])
}

/// Fixed-size drawing surface owned by one generation run at a time
///
/// Mutated by shape draw calls, read by the export path. Clearing re-fills
/// with the current background; the background itself is re-chosen by the
/// driver at the start of every run.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: Option<RgbaImage>,
    width: i32,
    height: i32,
    background: Color,
}

impl Canvas {
    /// Create a canvas of the given logical dimensions, filled white
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 {
            return Err(crate::io::error::invalid_parameter(
                "width",
                &width,
                &"canvas width must be positive",
            ));
        }
        if height <= 0 {
            return Err(crate::io::error::invalid_parameter(
                "height",
                &height,
                &"canvas height must be positive",
            ));
        }

        let image = RgbaImage::from_pixel(
            width as u32,
            height as u32,
            to_rgba(INITIAL_BACKGROUND),
        );

        Ok(Self {
            image: Some(image),
            width,
            height,
            background: INITIAL_BACKGROUND,
        })
    }

    /// Logical dimensions (width, height)
    pub const fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Current background color
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Whether the backing buffer has been torn down
    pub const fn is_closed(&self) -> bool {
        self.image.is_none()
    }

    /// Set the background color and re-fill the whole surface with it
    ///
    /// # Errors
    ///
    /// Returns `SurfaceUnavailable` if the buffer has been torn down.
    pub fn set_background(&mut self, color: Color) -> Result<()> {
        self.background = color;
        let pixel = to_rgba(color);
        let image = self
            .image
            .as_mut()
            .ok_or(surface_unavailable("set background"))?;
        for raster in image.pixels_mut() {
            *raster = pixel;
        }
        Ok(())
    }

    /// Wipe all drawn content, keeping dimensions and background color
    ///
    /// # Errors
    ///
    /// Returns `SurfaceUnavailable` if the buffer has been torn down.
    pub fn clear(&mut self) -> Result<()> {
        self.set_background(self.background)
    }

    /// Tear down the backing buffer
    ///
    /// Subsequent draw and read calls fail with `SurfaceUnavailable`.
    pub fn close(&mut self) {
        self.image = None;
    }

    /// Borrow the raster buffer for export
    ///
    /// # Errors
    ///
    /// Returns `SurfaceUnavailable` if the buffer has been torn down.
    pub fn image(&self) -> Result<&RgbaImage> {
        self.image.as_ref().ok_or(surface_unavailable("read surface"))
    }

    /// Borrow the raster buffer mutably for drawing
    ///
    /// # Errors
    ///
    /// Returns `SurfaceUnavailable` if the buffer has been torn down.
    pub fn image_mut(&mut self) -> Result<&mut RgbaImage> {
        self.image.as_mut().ok_or(surface_unavailable("render shape"))
    }

    /// Map a logical point to raster pixel coordinates
    ///
    /// Logical coordinates are centered with y up; raster coordinates have
    /// the origin at the top-left with y down.
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x + f64::from(self.width) / 2.0,
            f64::from(self.height) / 2.0 - y,
        )
    }
}
