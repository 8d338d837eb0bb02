// Color helpers - Packing and unpacking of 32-bit pixel values
//
// Pixels are stored as 0x00RRGGBB. On a little-endian host that is the same
// byte layout as a blue-green-red-unused bitmap, which is what most native
// 32-bit surfaces expect. The top byte is ignored.

/// Black (all channels zero)
pub const BLACK: u32 = 0x000000;

/// White (all channels full)
pub const WHITE: u32 = 0xFFFFFF;

/// Pure red
pub const RED: u32 = 0xFF0000;

/// Pure green
pub const GREEN: u32 = 0x00FF00;

/// Pure blue
pub const BLUE: u32 = 0x0000FF;

/// Pack red, green and blue channels into a pixel value
///
/// # Arguments
/// * `r` - Red channel
/// * `g` - Green channel
/// * `b` - Blue channel
///
/// # Returns
/// 32-bit pixel value (0x00RRGGBB)
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Split a pixel value into its red, green and blue channels
#[inline]
pub const fn channels(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

/// Convert a pixel value to the RGBA byte order expected by the pixels crate
///
/// # Arguments
/// * `color` - 32-bit pixel value (0x00RRGGBB, top byte ignored)
///
/// # Returns
/// Array of [R, G, B, A] bytes, alpha always fully opaque
#[inline]
pub fn rgb_to_rgba(color: u32) -> [u8; 4] {
    let (r, g, b) = channels(color);
    [r, g, b, 0xFF]
}

/// Convert a run of pixel values into RGBA bytes
///
/// # Arguments
/// * `src` - Pixel values
/// * `dst` - Output bytes, at least `src.len() * 4` long
///
/// # Panics
/// Panics if the output buffer is too small
pub fn write_rgba(src: &[u32], dst: &mut [u8]) {
    assert!(
        dst.len() >= src.len() * 4,
        "Output buffer too small for RGBA conversion"
    );

    for (&color, out) in src.iter().zip(dst.chunks_exact_mut(4)) {
        out.copy_from_slice(&rgb_to_rgba(color));
    }
}

/// Convert a run of pixel values into packed RGB bytes (3 per pixel)
pub fn to_rgb_bytes(src: &[u32]) -> Vec<u8> {
    let mut rgb_data = Vec::with_capacity(src.len() * 3);

    for &color in src {
        let (r, g, b) = channels(color);
        rgb_data.extend_from_slice(&[r, g, b]);
    }

    rgb_data
}
