use crate::mesh_pipeline::common::{PipelineError, Result};

/// Per-pixel depth aligned 1:1 with a color image, row-major.
///
/// Invariant: every value is finite and non-negative (zero marks an invalid
/// pixel). The constructor enforces this so downstream stages never see NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthMap {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl DepthMap {
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(PipelineError::InvalidDepthData(format!(
                "expected {} values for {}x{}, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }
        if data.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err(PipelineError::InvalidDepthData(
                "depth values must be finite and non-negative".to_string(),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, u: u32, v: u32) -> f32 {
        self.data[v as usize * self.width as usize + u as usize]
    }

    pub fn values(&self) -> &[f32] {
        &self.data
    }

    pub fn max(&self) -> f32 {
        self.data.iter().copied().fold(0.0, f32::max)
    }

    /// Crops a fixed border off all four sides, mirroring the image-side crop.
    pub fn crop_border(&self, border: u32) -> Result<Self> {
        if self.width <= 2 * border || self.height <= 2 * border {
            return Err(PipelineError::ImageTooSmallToCrop {
                width: self.width,
                height: self.height,
                border,
            });
        }

        let new_width = self.width - 2 * border;
        let new_height = self.height - 2 * border;
        let mut data = Vec::with_capacity(new_width as usize * new_height as usize);
        for v in border..self.height - border {
            let row = v as usize * self.width as usize;
            data.extend_from_slice(
                &self.data[row + border as usize..row + (self.width - border) as usize],
            );
        }

        Ok(Self {
            width: new_width,
            height: new_height,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_length() {
        let result = DepthMap::new(4, 4, vec![0.0; 15]);
        assert!(matches!(result, Err(PipelineError::InvalidDepthData(_))));
    }

    #[test]
    fn test_new_rejects_nan_and_negative() {
        assert!(DepthMap::new(2, 1, vec![1.0, f32::NAN]).is_err());
        assert!(DepthMap::new(2, 1, vec![1.0, -0.5]).is_err());
        assert!(DepthMap::new(2, 1, vec![1.0, 0.0]).is_ok());
    }

    #[test]
    fn test_get_is_row_major() {
        let depth = DepthMap::new(3, 2, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(depth.get(0, 0), 0.0);
        assert_eq!(depth.get(2, 0), 2.0);
        assert_eq!(depth.get(0, 1), 3.0);
        assert_eq!(depth.get(2, 1), 5.0);
    }

    #[test]
    fn test_max() {
        let depth = DepthMap::new(2, 2, vec![0.0, 7.5, 3.0, 1.0]).unwrap();
        assert_eq!(depth.max(), 7.5);
    }

    #[test]
    fn test_crop_border() {
        let data: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let depth = DepthMap::new(4, 4, data).unwrap();
        let cropped = depth.crop_border(1).unwrap();
        assert_eq!(cropped.width(), 2);
        assert_eq!(cropped.height(), 2);
        assert_eq!(cropped.values(), &[5.0, 6.0, 9.0, 10.0]);
    }

    #[test]
    fn test_crop_border_rejects_small_maps() {
        let depth = DepthMap::new(2, 2, vec![0.0; 4]).unwrap();
        assert!(matches!(
            depth.crop_border(1),
            Err(PipelineError::ImageTooSmallToCrop { .. })
        ));
    }
}
