use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use catvnoncat_ml::{LabeledSet, flatten_images};
use image::ImageFormat;
use ndarray::{Array2, Array4};

/// The images of one split, as decoded from disk.
#[derive(Debug, Clone)]
pub struct RawSplit {
    /// `(m, num_px, num_px, 3)` RGB pixels.
    pub images: Array4<u8>,
    /// `(1, m)` labels, each one the index of a class.
    pub labels: Array2<f32>,
}

impl RawSplit {
    pub fn len(&self) -> usize {
        self.images.dim().0
    }

    /// The side of every (square) image.
    pub fn num_px(&self) -> usize {
        self.images.dim().1
    }

    /// Flattens and normalizes the images into a set the model can train on.
    pub fn to_labeled(&self) -> Result<LabeledSet> {
        let x = flatten_images(self.images.view())?;
        Ok(LabeledSet::new(x, self.labels.clone())?)
    }
}

/// Loads every image under `dir/<class>/`, labeling it with the index of `<class>` in `classes`.
///
/// Images are read in path order. All of them must be square and of the same size.
pub fn load_split(dir: &Path, classes: &[String]) -> Result<RawSplit> {
    let mut pixels = Vec::new();
    let mut labels = Vec::new();
    let mut side: Option<u32> = None;

    for (label, class) in classes.iter().enumerate() {
        for path in image_paths(&dir.join(class))? {
            let img = image::open(&path)
                .with_context(|| format!("cannot decode image '{}'", path.display()))?
                .to_rgb8();

            let (width, height) = img.dimensions();
            if width != height {
                bail!(
                    "'{}' is {width}x{height}, images must be square",
                    path.display()
                );
            }

            let expected = *side.get_or_insert(width);
            if width != expected {
                bail!(
                    "'{}' is {width}x{width}, expected {expected}x{expected} like the rest of the set",
                    path.display()
                );
            }

            pixels.extend_from_slice(img.as_raw());
            labels.push(label as f32);
        }
    }

    let Some(side) = side else {
        bail!("no images found under '{}'", dir.display());
    };

    let m = labels.len();
    let side = side as usize;
    let images = Array4::from_shape_vec((m, side, side, 3), pixels)?;
    let labels = Array2::from_shape_vec((1, m), labels)?;

    Ok(RawSplit { images, labels })
}

/// Lists the files in `dir` with an image extension, sorted.
fn image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("cannot read directory '{}'", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && ImageFormat::from_path(&path).is_ok() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}
