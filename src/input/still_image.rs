//! Still image input

use std::path::{Path, PathBuf};

use super::{Input, InputError};

/// Input showing a single fixed-size image
#[derive(Debug, Clone, PartialEq)]
pub struct StillImage {
    path: Option<PathBuf>,
    width: u32,
    height: u32,
}

impl StillImage {
    /// Image of the given dimensions with no backing file
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            path: None,
            width,
            height,
        }
    }

    /// Read the dimensions from the header of an image file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        let (width, height) = image::image_dimensions(path)?;
        log::info!("Opened still image {} ({}x{})", path.display(), width, height);
        Ok(Self {
            path: Some(path.to_path_buf()),
            width,
            height,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Input for StillImage {
    fn type_name(&self) -> &'static str {
        "StillImage"
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn is_ready(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
