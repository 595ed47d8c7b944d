use image::RgbImage;
use image::imageops;

use crate::mesh_pipeline::common::{PipelineError, Result};

/// Crops a fixed border off all four sides of the image.
///
/// The depth network produces artifacts near its receptive-field edges, so
/// the matching depth map gets the same treatment in
/// [`DepthMap::crop_border`](crate::mesh_pipeline::depth::DepthMap::crop_border).
pub fn crop_border(image: &RgbImage, border: u32) -> Result<RgbImage> {
    let (width, height) = image.dimensions();
    if width <= 2 * border || height <= 2 * border {
        return Err(PipelineError::ImageTooSmallToCrop {
            width,
            height,
            border,
        });
    }

    let cropped = imageops::crop_imm(
        image,
        border,
        border,
        width - 2 * border,
        height - 2 * border,
    );
    Ok(cropped.to_image())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_dimensions() {
        let image = RgbImage::new(160, 96);
        let cropped = crop_border(&image, 16).unwrap();
        assert_eq!(cropped.dimensions(), (128, 64));
    }

    #[test]
    fn test_crop_keeps_interior_pixels() {
        let mut image = RgbImage::new(64, 64);
        image.put_pixel(16, 16, image::Rgb([9, 9, 9]));
        let cropped = crop_border(&image, 16).unwrap();
        assert_eq!(cropped.get_pixel(0, 0).0, [9, 9, 9]);
    }

    #[test]
    fn test_crop_rejects_images_at_threshold() {
        let image = RgbImage::new(32, 96);
        let result = crop_border(&image, 16);
        assert!(matches!(
            result,
            Err(PipelineError::ImageTooSmallToCrop { width: 32, .. })
        ));
    }
}
