// Pixel Buffer - The caller-visible grid of 32-bit pixels
//
// The buffer is width×height pixels, row-major, origin at the top-left.
// Each pixel is a 0x00RRGGBB value (see `color`). The size is fixed when
// the buffer is created.

use super::color::rgb;

/// Pixel buffer for caller-written frame data
///
/// Stores one `u32` per logical pixel. Zero-initialized (black).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    /// Pixel data, `width * height` entries
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a new pixel buffer initialized to black
    ///
    /// # Arguments
    /// * `width` - Width in logical pixels
    /// * `height` - Height in logical pixels
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Width in logical pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in logical pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the buffer
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the buffer holds no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width, "X coordinate {} out of bounds", x);
        assert!(y < self.height, "Y coordinate {} out of bounds", y);

        y as usize * self.width as usize + x as usize
    }

    /// Set a pixel at the given coordinates
    ///
    /// # Arguments
    /// * `x` - X coordinate (0..width)
    /// * `y` - Y coordinate (0..height)
    /// * `color` - Pixel value (0x00RRGGBB)
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: u32) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Get a pixel at the given coordinates
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[self.index(x, y)]
    }

    /// Fill the whole buffer with one color
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Get the raw pixel data, row-major
    pub fn as_slice(&self) -> &[u32] {
        &self.pixels
    }

    /// Get mutable access to the raw pixel data, row-major
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Get one row of pixels
    ///
    /// # Panics
    /// Panics if `y` is out of bounds
    pub fn row(&self, y: u32) -> &[u32] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// Fill the buffer with a colored checker pattern
    ///
    /// Cells are 16×16 logical pixels; `phase` shifts the pattern so it can
    /// be animated.
    pub fn test_pattern(&mut self, phase: u32) {
        let width = self.width;
        for (y, row) in self.pixels.chunks_exact_mut(width.max(1) as usize).enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                let cell = (x as u32 / 16 + y as u32 / 16 + phase) % 8;
                *pixel = rgb(
                    if cell & 1 != 0 { 0xFF } else { 0x20 },
                    if cell & 2 != 0 { 0xFF } else { 0x20 },
                    if cell & 4 != 0 { 0xFF } else { 0x20 },
                );
            }
        }
    }

    /// Fill the buffer with a horizontal grey gradient
    pub fn gradient_pattern(&mut self) {
        let width = self.width.max(1);
        for row in self.pixels.chunks_exact_mut(width as usize) {
            for (x, pixel) in row.iter_mut().enumerate() {
                let level = (x as u32 * 256 / width) as u8;
                *pixel = rgb(level, level, level);
            }
        }
    }
}
