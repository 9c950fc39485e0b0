use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use catvnoncat_ml::{Params, flatten_images};
use image::{DynamicImage, imageops::FilterType};
use ndarray::{Array2, Array4};
use serde::Serialize;

/// What the trained model thinks of a single picture.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub image: PathBuf,
    pub label: usize,
    pub class: String,
}

/// Turns a picture into a single `(num_px * num_px * 3, 1)` feature column, prepared exactly like
/// the training examples. The picture is resized only if it isn't already `num_px` square.
pub fn to_column(img: &DynamicImage, num_px: u32) -> Result<Array2<f32>> {
    let rgb = if img.width() == num_px && img.height() == num_px {
        img.to_rgb8()
    } else {
        img.resize_exact(num_px, num_px, FilterType::Triangle)
            .to_rgb8()
    };

    let side = num_px as usize;
    let images = Array4::from_shape_vec((1, side, side, 3), rgb.into_raw())?;

    Ok(flatten_images(images.view())?)
}

/// Decodes the picture at `path` and classifies it with the trained parameters.
pub fn classify(path: &Path, params: &Params, num_px: usize, classes: &[String]) -> Result<Verdict> {
    let num_px = u32::try_from(num_px).context("image side does not fit in 32 bits")?;
    let img = image::open(path)
        .with_context(|| format!("cannot decode image '{}'", path.display()))?;

    let x = to_column(&img, num_px)?;
    let y_pred = params.predict(x.view())?;

    let label = y_pred[[0, 0]] as usize;
    let class = classes
        .get(label)
        .with_context(|| format!("no class name for label {label}"))?
        .clone();

    Ok(Verdict {
        image: path.to_path_buf(),
        label,
        class,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn same_size_is_not_resampled() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 1, Rgb([0, 0, 255]));

        let x = to_column(&DynamicImage::ImageRgb8(img), 2).unwrap();

        assert_eq!(x.dim(), (12, 1));
        assert_eq!(x.column(0).to_vec()[..3], [1., 0., 0.]);
        assert_eq!(x.column(0).to_vec()[9..], [0., 0., 1.]);
    }

    #[test]
    fn other_sizes_are_resized() {
        let img = RgbImage::from_pixel(17, 9, Rgb([10, 20, 30]));

        let x = to_column(&DynamicImage::ImageRgb8(img), 4).unwrap();

        assert_eq!(x.dim(), (4 * 4 * 3, 1));
        assert!(x.iter().all(|&p| (0. ..=1.).contains(&p)));
    }

    #[test]
    fn grayscale_is_expanded_to_rgb() {
        let img = DynamicImage::new_luma8(3, 3);
        let x = to_column(&img, 3).unwrap();

        assert_eq!(x.dim(), (27, 1));
    }
}
