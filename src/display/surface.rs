// Presentation surface - Scaled copy of the pixel buffer
//
// The surface is the on-screen image: width*scale × height*scale pixels.
// Every blit is a full nearest-neighbor stretch of the pixel buffer; there
// is no dirty-rect tracking.

use super::color::write_rgba;
use super::framebuffer::PixelBuffer;
use crate::config::ScaleFactor;

/// On-screen surface holding the scaled image
#[derive(Debug, Clone)]
pub struct PresentationSurface {
    /// Logical size the surface was created for
    logical: (u32, u32),
    scale: ScaleFactor,
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PresentationSurface {
    /// Create a black surface for a logical size and scale
    ///
    /// Callers validate the geometry first; the scaled size must fit `u32`.
    pub fn new(logical_width: u32, logical_height: u32, scale: ScaleFactor) -> Self {
        let width = logical_width * scale.get();
        let height = logical_height * scale.get();

        Self {
            logical: (logical_width, logical_height),
            scale,
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Scaled width in physical pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Scaled height in physical pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Scaled size (width, height)
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// Scaled pixel data, row-major
    pub fn as_slice(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel on the scaled surface
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    pub fn get_pixel(&self, x: u32, y: u32) -> u32 {
        assert!(x < self.width && y < self.height, "({}, {}) off surface", x, y);
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Stretch-copy the pixel buffer onto the surface
    ///
    /// Each logical row is widened once, then repeated `scale` times.
    ///
    /// # Panics
    /// Panics if the buffer size differs from the surface's logical size
    pub fn blit(&mut self, buffer: &PixelBuffer) {
        assert_eq!(
            (buffer.width(), buffer.height()),
            self.logical,
            "Pixel buffer does not match surface"
        );

        let scale = self.scale.get() as usize;
        let row_len = self.width as usize;

        if scale == 1 {
            self.pixels.copy_from_slice(buffer.as_slice());
            return;
        }

        for (src_row, dst_block) in buffer
            .rows()
            .zip(self.pixels.chunks_exact_mut(row_len * scale))
        {
            let (first, rest) = dst_block.split_at_mut(row_len);
            for (&color, dst) in src_row.iter().zip(first.chunks_exact_mut(scale)) {
                dst.fill(color);
            }
            for dst_row in rest.chunks_exact_mut(row_len) {
                dst_row.copy_from_slice(first);
            }
        }
    }

    /// Write the surface as RGBA bytes into a host frame
    ///
    /// # Panics
    /// Panics if `frame` is smaller than `width * height * 4` bytes
    pub fn write_rgba(&self, frame: &mut [u8]) {
        write_rgba(&self.pixels, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::color::{BLACK, RED, WHITE};

    #[test]
    fn test_surface_size() {
        for scale in [
            ScaleFactor::X1,
            ScaleFactor::X2,
            ScaleFactor::X4,
            ScaleFactor::X8,
            ScaleFactor::X16,
        ] {
            let surface = PresentationSurface::new(7, 3, scale);
            assert_eq!(surface.size(), (7 * scale.get(), 3 * scale.get()));
            assert_eq!(surface.as_slice().len(), (7 * 3 * scale.get() * scale.get()) as usize);
        }
    }

    #[test]
    fn test_blit_unscaled() {
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.clear(RED);
        let mut surface = PresentationSurface::new(4, 4, ScaleFactor::X1);
        surface.blit(&buffer);
        assert!(surface.as_slice().iter().all(|&p| p == RED));
    }

    #[test]
    fn test_blit_nearest_neighbor_blocks() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.set_pixel(1, 0, WHITE);
        buffer.set_pixel(2, 1, RED);

        let mut surface = PresentationSurface::new(3, 2, ScaleFactor::X2);
        surface.blit(&buffer);

        for y in 0..surface.height() {
            for x in 0..surface.width() {
                assert_eq!(surface.get_pixel(x, y), buffer.get_pixel(x / 2, y / 2));
            }
        }
        assert_eq!(surface.get_pixel(3, 1), WHITE);
        assert_eq!(surface.get_pixel(5, 3), RED);
        assert_eq!(surface.get_pixel(0, 0), BLACK);
    }

    #[test]
    fn test_blit_overwrites_previous_frame() {
        let mut buffer = PixelBuffer::new(2, 2);
        let mut surface = PresentationSurface::new(2, 2, ScaleFactor::X4);

        buffer.clear(WHITE);
        surface.blit(&buffer);
        buffer.clear(BLACK);
        surface.blit(&buffer);
        assert!(surface.as_slice().iter().all(|&p| p == BLACK));
    }

    #[test]
    fn test_write_rgba() {
        let mut buffer = PixelBuffer::new(1, 1);
        buffer.set_pixel(0, 0, 0x102030);
        let mut surface = PresentationSurface::new(1, 1, ScaleFactor::X2);
        surface.blit(&buffer);

        let mut frame = vec![0u8; 2 * 2 * 4];
        surface.write_rgba(&mut frame);
        assert_eq!(&frame[..4], &[0x10, 0x20, 0x30, 0xFF]);
        assert_eq!(&frame[12..], &[0x10, 0x20, 0x30, 0xFF]);
    }

    #[test]
    #[should_panic]
    fn test_blit_size_mismatch() {
        let buffer = PixelBuffer::new(2, 2);
        let mut surface = PresentationSurface::new(3, 2, ScaleFactor::X1);
        surface.blit(&buffer);
    }
}
