//! RGB texture images and nearest-texel lookups by texture coordinate.

use std::path::Path;

use cgmath::Vector2;
use image::{Rgb, RgbImage};

use crate::error::Result;

/// Result of looking up a texture coordinate in a texture.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Texel {
    /// The texture coordinate mapped to a pixel inside the raster.
    Color([u8; 3]),
    /// The texture coordinate mapped to a pixel outside the raster.
    /// Coordinates are in pixels with the origin at the top left.
    OutOfBounds { x: i64, y: i64 }
}

/// Decoded RGB raster, addressed by column and row with the origin at the
/// top left corner.
pub struct Texture {
    image: RgbImage
}

impl Texture {
    /// Decodes the image at the given path, converting it to 8-bit RGB.
    pub fn load_from_file<P: AsRef<Path>>(image_path: P) -> Result<Texture> {
        let image = image::open(image_path)?.to_rgb8();
        Ok(Texture { image })
    }

    pub fn from_image(image: RgbImage) -> Texture {
        Texture { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.width() as i64 &&
            y >= 0 && y < self.height() as i64
    }

    /// Gets the color at the given pixel.
    ///
    /// Panics if the pixel is not in bounds, check with `is_in_bounds` first.
    pub fn texel(&self, x: u32, y: u32) -> [u8; 3] {
        let Rgb(channels) = *self.image.get_pixel(x, y);
        channels
    }

    /// Converts texture coordinates into pixel coordinates.
    ///
    /// Texture coordinates have their origin at the bottom left while the raster
    /// starts at the top left, hence v is flipped. Rounds to the nearest pixel
    /// by adding one half and truncating.
    pub fn pixel_at(&self, texcoords: Vector2<f32>) -> (i64, i64) {
        let x = texcoords.x * self.width() as f32;
        let y = (1.0 - texcoords.y) * self.height() as f32;

        ((x + 0.5) as i64, (y + 0.5) as i64)
    }

    /// Looks up the texel nearest to the given texture coordinates.
    pub fn sample(&self, texcoords: Vector2<f32>) -> Texel {
        let (x, y) = self.pixel_at(texcoords);

        if self.is_in_bounds(x, y) {
            Texel::Color(self.texel(x as u32, y as u32))
        } else {
            Texel::OutOfBounds { x, y }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// 4x2 texture, top row red, bottom row blue, except for a green texel
    /// at the top left.
    fn two_row_texture() -> Texture {
        let mut image = RgbImage::from_fn(4, 2, |_, y| {
            if y == 0 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) }
        });
        image.put_pixel(0, 0, Rgb([0, 255, 0]));

        Texture::from_image(image)
    }

    #[test]
    fn v_axis_is_flipped() {
        let texture = two_row_texture();

        assert_eq!((0, 0), texture.pixel_at(Vector2::new(0.0, 1.0)));
        assert_eq!((0, 2), texture.pixel_at(Vector2::new(0.0, 0.0)));
        assert_eq!(Texel::Color([0, 255, 0]), texture.sample(Vector2::new(0.0, 1.0)));
        assert_eq!(Texel::Color([0, 0, 255]), texture.sample(Vector2::new(0.5, 0.3)));
    }

    #[test]
    fn bottom_edge_is_out_of_bounds() {
        let texture = two_row_texture();

        assert_eq!(Texel::OutOfBounds { x: 0, y: 2 }, texture.sample(Vector2::new(0.0, 0.0)));
        assert_eq!(Texel::OutOfBounds { x: 4, y: 0 }, texture.sample(Vector2::new(1.0, 1.0)));
    }

    #[test]
    fn rounds_to_nearest_pixel() {
        let texture = two_row_texture();

        // 0.3 * 4 = 1.2 and 0.4 * 4 = 1.6
        assert_eq!(1, texture.pixel_at(Vector2::new(0.3, 1.0)).0);
        assert_eq!(2, texture.pixel_at(Vector2::new(0.4, 1.0)).0);
    }

    #[test]
    fn bounds_check() {
        let texture = two_row_texture();

        assert!(texture.is_in_bounds(3, 1));
        assert!(!texture.is_in_bounds(-1, 0));
        assert!(!texture.is_in_bounds(0, -1));
        assert!(!texture.is_in_bounds(4, 0));
        assert!(!texture.is_in_bounds(0, 2));
    }
}
