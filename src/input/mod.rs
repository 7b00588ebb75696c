//! Video inputs as seen by the viewport
//!
//! The viewport never owns an input. Callers hold an [`InputHandle`] and hand
//! out weak references to consumers such as the input preview.

pub mod still_image;

use std::rc::Rc;

pub use still_image::StillImage;

/// Shared handle to an input, owned by the caller
pub type InputHandle = Rc<dyn Input>;

/// Errors from opening inputs
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read image: {0}")]
    Image(#[from] image::ImageError),
}

/// A video input that can be previewed
pub trait Input {
    /// Unique type identifier
    fn type_name(&self) -> &'static str;

    /// Frame width in pixels
    fn width(&self) -> u32;

    /// Frame height in pixels
    fn height(&self) -> u32;

    /// Whether the input currently delivers frames
    fn is_ready(&self) -> bool;

    /// Width over height, 1.0 for an empty frame
    fn aspect_ratio(&self) -> f32 {
        if self.width() == 0 || self.height() == 0 {
            1.0
        } else {
            self.width() as f32 / self.height() as f32
        }
    }
}
