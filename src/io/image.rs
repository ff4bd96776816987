//! Decoding and encoding at the filesystem boundary
//!
//! The only place the `image` crate appears: files become [`Canvas`]
//! values on the way in and canvases become PNG files on the way out. The
//! core never sees a codec.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};

use crate::canvas::filter::Filter;
use crate::canvas::grid::Canvas;
use crate::catalog::Catalog;
use crate::io::configuration::TILE_EXTENSIONS;
use crate::io::error::{MosaicError, Result, invalid_request};
use crate::metric::kind::MetricKind;

fn decode(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

fn canvas_from_rgb(label: impl Into<String>, rgb: &RgbImage) -> Result<Canvas> {
    Canvas::from_fn(
        label,
        rgb.width() as usize,
        rgb.height() as usize,
        |x, y| rgb.get_pixel(x as u32, y as u32).0,
    )
}

/// Decode an image file at its natural size
///
/// The canvas label is the file path.
///
/// # Errors
///
/// Returns `ImageLoad` on decode failure or `InvalidRequest` for an image
/// with a zero dimension.
pub fn load_canvas(path: &Path) -> Result<Canvas> {
    let rgb = decode(path)?.into_rgb8();
    canvas_from_rgb(path.to_string_lossy(), &rgb)
}

/// Decode an image file and scale it to exactly `width x height`
///
/// Used by the catalog loader so every tile shares the catalog size.
///
/// # Errors
///
/// Returns `ImageLoad` on decode failure or `InvalidRequest` for zero
/// target dimensions.
pub fn load_canvas_scaled(path: &Path, width: u32, height: u32) -> Result<Canvas> {
    if width == 0 || height == 0 {
        return Err(invalid_request(
            "tile dimensions",
            &format!("{width}x{height}"),
            &"width and height must both be positive",
        ));
    }
    let rgb = decode(path)?
        .resize_exact(width, height, FilterType::Triangle)
        .into_rgb8();
    canvas_from_rgb(path.to_string_lossy(), &rgb)
}

/// Encode a canvas and save it at `path`, creating parent directories
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory cannot be created or
/// `ImageExport` if encoding fails.
pub fn save_canvas(canvas: &Canvas, path: &Path) -> Result<()> {
    let mut rgb = RgbImage::new(canvas.width() as u32, canvas.height() as u32);
    for (x, y, pixel) in rgb.enumerate_pixels_mut() {
        pixel.0 = canvas.get(x as usize, y as usize).unwrap_or([0, 0, 0]);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
    }

    rgb.save(path).map_err(|source| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the render target, optionally filtered, at its natural size
///
/// # Errors
///
/// Propagates decode and filter errors.
pub fn load_target(path: &Path, filter: Option<&Filter>) -> Result<Canvas> {
    let mut canvas = load_canvas(path)?;
    if let Some(filter) = filter {
        canvas.apply_filter(filter)?;
    }
    Ok(canvas)
}

/// Build a catalog from every recognized image file under `dir`
///
/// Files are visited in sorted order, each scaled to the common tile size,
/// optionally filtered, summarized with `kind`, and appended: exactly one
/// entry per successfully loaded file.
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be read, `InvalidRequest`
/// if it holds no recognized image files, and propagates per-file load,
/// filter, and summarization errors.
pub fn load_catalog(
    dir: &Path,
    tile_width: u32,
    tile_height: u32,
    kind: MetricKind,
    filter: Option<&Filter>,
) -> Result<Catalog> {
    let reader = std::fs::read_dir(dir).map_err(|source| MosaicError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source,
    })?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in reader {
        let path = entry
            .map_err(|source| MosaicError::FileSystem {
                path: dir.to_path_buf(),
                operation: "read directory entry",
                source,
            })?
            .path();
        let recognized = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                TILE_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            });
        if recognized {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(invalid_request(
            "tile directory",
            &dir.display(),
            &"holds no png/jpg/jpeg/gif files",
        ));
    }

    let mut catalog = Catalog::new(kind);
    for path in &files {
        let mut canvas = load_canvas_scaled(path, tile_width, tile_height)?;
        if let Some(filter) = filter {
            canvas.apply_filter(filter)?;
        }
        catalog.add(canvas)?;
    }
    Ok(catalog)
}
