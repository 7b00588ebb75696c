//! Viewport-facing UI components

pub mod input_preview;

pub use input_preview::{
    InputPreview, PreviewBackend, PreviewError, PreviewFrame, PreviewState, Rect, MAX_BORDER,
};
