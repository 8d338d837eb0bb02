// Screenshot functionality
//
// Captures the presentation surface (the scaled, on-screen image) and saves
// it as a PNG file.

use super::color::to_rgb_bytes;
use super::surface::PresentationSurface;
use crate::error::ScreenshotError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Save a screenshot of the surface into `dir`
///
/// The file is named `screenshot_<timestamp>.png`; the directory is created
/// if needed.
///
/// # Returns
/// Path to the saved screenshot
pub fn save_screenshot(
    surface: &PresentationSurface,
    dir: &Path,
) -> Result<PathBuf, ScreenshotError> {
    fs::create_dir_all(dir)?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let file_path = dir.join(format!("screenshot_{}.png", timestamp));

    let rgb_data = to_rgb_bytes(surface.as_slice());
    save_png(&file_path, &rgb_data, surface.width(), surface.height())?;

    log::info!("Screenshot saved to {}", file_path.display());
    Ok(file_path)
}

/// Save RGB data as a PNG file
///
/// # Arguments
/// * `path` - Path to save the PNG file
/// * `data` - RGB data (width × height × 3 bytes)
/// * `width` - Image width
/// * `height` - Image height
fn save_png(path: &Path, data: &[u8], width: u32, height: u32) -> Result<(), ScreenshotError> {
    let file = fs::File::create(path)?;
    let w = io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(data)?;

    Ok(())
}
