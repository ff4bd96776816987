//! Dense RGB pixel grid with bounds-checked access and pure pixel algebra
//!
//! A [`Canvas`] knows nothing about files, codecs, or displays; it is the
//! in-memory surface the rest of the pipeline reads regions from and
//! overlays tiles onto. All mutators validate before writing, so a failed
//! operation never leaves a partially written canvas behind.

use ndarray::Array2;

use crate::canvas::filter::Filter;
use crate::io::error::{MosaicError, Result, invalid_request};
use crate::math::interpolation::{blend_bilinear, sample_point};

/// One pixel as `[red, green, blue]` channel values
pub type Rgb = [u8; 3];

/// A rectangular pixel region inside a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Upper-left x coordinate
    pub x: usize,
    /// Upper-left y coordinate
    pub y: usize,
    /// Region width in pixels
    pub width: usize,
    /// Region height in pixels
    pub height: usize,
}

impl Region {
    /// Create a region from its upper-left corner and size
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered by the region
    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Fixed-size grid of RGB values with a display label
///
/// Dimensions are immutable after construction; `scale`, `extract`, and
/// `copy` produce new canvases instead of resizing in place. The label is
/// carried along for display and catalog bookkeeping and has no effect on
/// pixel operations.
#[derive(Debug, Clone)]
pub struct Canvas {
    label: String,
    pixels: Array2<Rgb>,
}

impl Canvas {
    /// Create a black canvas of the given size
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if either dimension is zero.
    pub fn new(label: impl Into<String>, width: usize, height: usize) -> Result<Self> {
        Self::from_fn(label, width, height, |_, _| [0, 0, 0])
    }

    /// Create a canvas by evaluating `pixel_at(x, y)` for every coordinate
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if either dimension is zero.
    pub fn from_fn(
        label: impl Into<String>,
        width: usize,
        height: usize,
        mut pixel_at: impl FnMut(usize, usize) -> Rgb,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_request(
                "canvas dimensions",
                &format!("{width}x{height}"),
                &"width and height must both be positive",
            ));
        }
        Ok(Self {
            label: label.into(),
            pixels: Array2::from_shape_fn((height, width), |(y, x)| pixel_at(x, y)),
        })
    }

    /// Display label of this canvas
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the display label
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// The region covering the whole canvas
    pub fn full_region(&self) -> Region {
        Region::new(0, 0, self.width(), self.height())
    }

    /// Read the pixel at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate lies outside the canvas.
    pub fn get(&self, x: usize, y: usize) -> Result<Rgb> {
        self.pixels
            .get((y, x))
            .copied()
            .ok_or(MosaicError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
    }

    /// Write the pixel at `(x, y)`
    ///
    /// Channel values are validated before the coordinate, matching the
    /// order callers observe errors in.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChannel` if any channel is outside `[0, 255]`, or
    /// `OutOfBounds` if the coordinate lies outside the canvas.
    pub fn set(&mut self, x: usize, y: usize, red: i32, green: i32, blue: i32) -> Result<()> {
        let channel_range = 0..=255;
        if !channel_range.contains(&red)
            || !channel_range.contains(&green)
            || !channel_range.contains(&blue)
        {
            return Err(MosaicError::InvalidChannel { red, green, blue });
        }
        let (width, height) = (self.width(), self.height());
        let pixel = self
            .pixels
            .get_mut((y, x))
            .ok_or(MosaicError::OutOfBounds {
                x,
                y,
                width,
                height,
            })?;
        *pixel = [red as u8, green as u8, blue as u8];
        Ok(())
    }

    /// Deep copy with a new label; the copy shares no storage
    pub fn copy(&self, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pixels: self.pixels.clone(),
        }
    }

    /// Validate that a region lies fully inside this canvas
    ///
    /// # Errors
    ///
    /// Returns `RegionOutOfBounds` otherwise.
    pub fn check_region(&self, region: Region) -> Result<()> {
        let fits = region.x.checked_add(region.width).is_some_and(|right| {
            region
                .y
                .checked_add(region.height)
                .is_some_and(|bottom| right <= self.width() && bottom <= self.height())
        });
        if fits {
            Ok(())
        } else {
            Err(MosaicError::RegionOutOfBounds {
                x: region.x,
                y: region.y,
                region_width: region.width,
                region_height: region.height,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Write every pixel of `src` into this canvas starting at `(x0, y0)`
    ///
    /// The destination region is validated up front; on failure nothing is
    /// written.
    ///
    /// # Errors
    ///
    /// Returns `RegionOutOfBounds` if `src` would extend past an edge.
    pub fn overlay(&mut self, x0: usize, y0: usize, src: &Self) -> Result<()> {
        self.check_region(Region::new(x0, y0, src.width(), src.height()))?;
        for ((y, x), pixel) in src.pixels.indexed_iter() {
            if let Some(dest) = self.pixels.get_mut((y0 + y, x0 + x)) {
                *dest = *pixel;
            }
        }
        Ok(())
    }

    /// Extract a sub-region as a new canvas; the inverse of `overlay`
    ///
    /// # Errors
    ///
    /// Returns `RegionOutOfBounds` if the region does not lie fully inside
    /// this canvas, or `InvalidRequest` for a zero-sized region.
    pub fn extract(
        &self,
        label: impl Into<String>,
        x0: usize,
        y0: usize,
        width: usize,
        height: usize,
    ) -> Result<Self> {
        self.check_region(Region::new(x0, y0, width, height))?;
        Self::from_fn(label, width, height, |x, y| {
            self.pixels
                .get((y0 + y, x0 + x))
                .copied()
                .unwrap_or([0, 0, 0])
        })
    }

    /// Resample this canvas to a new size using bilinear interpolation
    ///
    /// Scaling to the current size returns an exact copy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if either target dimension is zero.
    pub fn scale(&self, new_width: usize, new_height: usize) -> Result<Self> {
        if new_width == self.width() && new_height == self.height() {
            return Ok(self.copy(self.label.clone()));
        }
        Self::from_fn(self.label.clone(), new_width, new_height, |x, y| {
            let horizontal = sample_point(x, new_width, self.width());
            let vertical = sample_point(y, new_height, self.height());

            let corner = |sx: usize, sy: usize| {
                self.pixels.get((sy, sx)).copied().unwrap_or([0, 0, 0])
            };
            let tl = corner(horizontal.lower, vertical.lower);
            let tr = corner(horizontal.upper, vertical.lower);
            let bl = corner(horizontal.lower, vertical.upper);
            let br = corner(horizontal.upper, vertical.upper);

            let mut pixel = [0u8; 3];
            for (channel, value) in pixel.iter_mut().enumerate() {
                *value = blend_bilinear(
                    f64::from(tl[channel]),
                    f64::from(tr[channel]),
                    f64::from(bl[channel]),
                    f64::from(br[channel]),
                    horizontal.fraction,
                    vertical.fraction,
                );
            }
            pixel
        })
    }

    /// Shift every pixel's channels by the given deltas, clamped to `[0, 255]`
    pub fn shift(&mut self, dr: i32, dg: i32, db: i32) {
        for pixel in &mut self.pixels {
            let [r, g, b] = *pixel;
            *pixel = [
                (i32::from(r) + dr).clamp(0, 255) as u8,
                (i32::from(g) + dg).clamp(0, 255) as u8,
                (i32::from(b) + db).clamp(0, 255) as u8,
            ];
        }
    }

    /// Replace every pixel with the filter's output for that coordinate
    ///
    /// The filter observes a frozen pre-filter snapshot while results are
    /// written back to this canvas, so neighborhood-reading filters never
    /// see their own partial output.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the filter.
    pub fn apply_filter(&mut self, filter: &Filter) -> Result<()> {
        let snapshot = self.copy(self.label.clone());
        for y in 0..self.height() {
            for x in 0..self.width() {
                let [r, g, b] = filter.filtered(&snapshot, x, y)?;
                if let Some(pixel) = self.pixels.get_mut((y, x)) {
                    *pixel = [r, g, b];
                }
            }
        }
        Ok(())
    }
}
