//! Input preview
//!
//! Shows a video input inside a fixed-aspect view rectangle with a relative
//! border, and maps widget positions to normalized input coordinates.
//!
//! The preview holds only a weak reference to its input. It never keeps the
//! input alive and never modifies it.

use glam::Vec2;
use std::rc::{Rc, Weak};

use crate::input::{Input, InputHandle};

/// Largest accepted relative border. At 0.5 the interior collapses.
pub const MAX_BORDER: f32 = 0.49;

/// Rectangle in widget pixels, y pointing down
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.min() + self.size() * 0.5
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Shrink by `dx` on the left and right, `dy` on the top and bottom
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.x + dx,
            self.y + dy,
            self.width - 2.0 * dx,
            self.height - 2.0 * dy,
        )
    }
}

/// Preview lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    /// GPU resources not set up, nothing is drawn
    Uninitialized,
    /// Initialized with a live input that has frames
    Ready,
    /// Initialized but the input is unset, dropped or not ready
    NoInput,
}

/// Errors reported by a preview backend
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("Preview backend failed: {0}")]
    Backend(String),
}

/// Geometry of one preview frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewFrame {
    /// Widget size in pixels
    pub widget_size: Vec2,
    /// Fixed-aspect rectangle the input is drawn into
    pub view: Rect,
    /// `view` without the border
    pub interior: Rect,
    pub border: f32,
}

/// Rendering backend of the preview. Must be called with its context current.
pub trait PreviewBackend {
    /// One-time resource setup
    fn initialize(&mut self) -> Result<(), PreviewError>;

    /// Draw `input` for the given frame geometry
    fn draw_input(&mut self, input: &dyn Input, frame: &PreviewFrame);
}

type InputChangedListener = Box<dyn FnMut()>;

/// Preview of a single input with a relative border
pub struct InputPreview {
    /// Relative border, in `[0, MAX_BORDER]`
    border: f32,
    input: Option<Weak<dyn Input>>,
    widget_size: Vec2,
    initialized: bool,
    listeners: Vec<InputChangedListener>,
}

impl InputPreview {
    pub fn new() -> Self {
        Self {
            border: 0.0,
            input: None,
            widget_size: Vec2::ZERO,
            initialized: false,
            listeners: Vec::new(),
        }
    }

    pub fn with_input(input: &InputHandle) -> Self {
        let mut preview = Self::new();
        preview.input = Some(Rc::downgrade(input));
        preview
    }

    /// Relative border value
    pub fn border(&self) -> f32 {
        self.border
    }

    /// Set relative border distance, clamped into `[0, MAX_BORDER]`
    pub fn set_border(&mut self, border: f32) {
        let clamped = if border.is_nan() {
            0.0
        } else {
            border.clamp(0.0, MAX_BORDER)
        };
        if clamped != border {
            log::warn!("Preview border {} clamped to {}", border, clamped);
        }
        self.border = clamped;
    }

    /// The current input, if one is set and still alive
    pub fn input(&self) -> Option<InputHandle> {
        self.input.as_ref().and_then(Weak::upgrade)
    }

    /// Replace the input and notify every listener once
    pub fn set_input(&mut self, input: Option<&InputHandle>) {
        self.input = input.map(Rc::downgrade);
        log::debug!(
            "Preview input changed to {}",
            input.map_or("none", |i| i.type_name())
        );
        for listener in &mut self.listeners {
            listener();
        }
    }

    /// Register a callback fired after every [`InputPreview::set_input`]
    pub fn on_input_changed(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Set widget size in pixels
    pub fn resize(&mut self, width: f32, height: f32) {
        self.widget_size = Vec2::new(width, height);
    }

    pub fn widget_size(&self) -> Vec2 {
        self.widget_size
    }

    pub fn state(&self) -> PreviewState {
        if !self.initialized {
            PreviewState::Uninitialized
        } else if self.ready_input().is_some() {
            PreviewState::Ready
        } else {
            PreviewState::NoInput
        }
    }

    /// Largest rectangle with the input's aspect ratio centered in the widget.
    /// Square when there is no input.
    pub fn view_rect(&self) -> Rect {
        let (w, h) = (self.widget_size.x, self.widget_size.y);
        if w <= 0.0 || h <= 0.0 {
            return Rect::default();
        }

        let aspect = self.input().map_or(1.0, |input| input.aspect_ratio());
        if w / h > aspect {
            // Widget is wider - fit to height
            let width = h * aspect;
            Rect::new((w - width) * 0.5, 0.0, width, h)
        } else {
            // Widget is taller - fit to width
            let height = w / aspect;
            Rect::new(0.0, (h - height) * 0.5, w, height)
        }
    }

    /// View rectangle minus the border on each side
    pub fn interior_rect(&self) -> Rect {
        let view = self.view_rect();
        view.inset(view.width * self.border, view.height * self.border)
    }

    /// Map a widget position to normalized input coordinates.
    ///
    /// The top-left interior corner is `(0, 0)`, the bottom-right `(1, 1)`.
    /// Positions outside the interior map outside that range.
    pub fn screen_pos(&self, pos: Vec2) -> Vec2 {
        let interior = self.interior_rect();
        if interior.is_empty() {
            return Vec2::ZERO;
        }
        (pos - interior.min()) / interior.size()
    }

    /// Set up backend resources. Returns false and stays uninitialized on failure.
    pub fn initialize(&mut self, backend: &mut dyn PreviewBackend) -> bool {
        if self.initialized {
            return true;
        }
        match backend.initialize() {
            Ok(()) => {
                self.initialized = true;
                true
            }
            Err(e) => {
                log::warn!("Input preview disabled: {}", e);
                false
            }
        }
    }

    /// The input, if it is still alive and has frames to show
    fn ready_input(&self) -> Option<InputHandle> {
        self.input().filter(|input| input.is_ready())
    }

    /// Render one frame. Returns whether the input was drawn.
    pub fn paint_gl(&mut self, backend: &mut dyn PreviewBackend) -> bool {
        if !self.initialized {
            return false;
        }
        let Some(input) = self.ready_input() else {
            return false;
        };

        let frame = PreviewFrame {
            widget_size: self.widget_size,
            view: self.view_rect(),
            interior: self.interior_rect(),
            border: self.border,
        };
        backend.draw_input(&*input, &frame);
        true
    }
}

impl Default for InputPreview {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InputPreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputPreview")
            .field("border", &self.border)
            .field("state", &self.state())
            .field("widget_size", &self.widget_size)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::StillImage;
    use std::cell::Cell;

    #[derive(Default)]
    struct TestBackend {
        fail_init: bool,
        frames: Vec<PreviewFrame>,
    }

    impl PreviewBackend for TestBackend {
        fn initialize(&mut self) -> Result<(), PreviewError> {
            if self.fail_init {
                Err(PreviewError::Backend("no context".to_string()))
            } else {
                Ok(())
            }
        }

        fn draw_input(&mut self, _input: &dyn Input, frame: &PreviewFrame) {
            self.frames.push(*frame);
        }
    }

    fn assert_vec_eq(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-5, "{:?} != {:?}", a, b);
    }

    fn handle(width: u32, height: u32) -> InputHandle {
        Rc::new(StillImage::new(width, height))
    }

    #[test]
    fn test_square_view_rect_without_input() {
        let mut preview = InputPreview::new();
        preview.resize(400.0, 200.0);
        assert_eq!(preview.view_rect(), Rect::new(100.0, 0.0, 200.0, 200.0));
        preview.resize(200.0, 300.0);
        assert_eq!(preview.view_rect(), Rect::new(0.0, 50.0, 200.0, 200.0));
    }

    #[test]
    fn test_view_rect_follows_input_aspect() {
        let input = handle(1920, 1080);
        let mut preview = InputPreview::with_input(&input);
        preview.resize(1600.0, 1600.0);
        let view = preview.view_rect();
        assert_eq!(view.width, 1600.0);
        assert!((view.height - 900.0).abs() < 1e-3);
        assert!((view.y - 350.0).abs() < 1e-3);
    }

    #[test]
    fn test_screen_pos_without_border_is_linear() {
        let mut preview = InputPreview::new();
        preview.resize(400.0, 200.0);
        assert_vec_eq(preview.screen_pos(Vec2::new(100.0, 0.0)), Vec2::ZERO);
        assert_vec_eq(preview.screen_pos(Vec2::new(300.0, 200.0)), Vec2::ONE);
        assert_vec_eq(preview.screen_pos(Vec2::new(150.0, 100.0)), Vec2::new(0.25, 0.5));
    }

    #[test]
    fn test_screen_pos_with_border() {
        let mut preview = InputPreview::new();
        preview.resize(200.0, 200.0);
        preview.set_border(0.25);
        let interior = preview.interior_rect();
        assert_eq!(interior, Rect::new(50.0, 50.0, 100.0, 100.0));
        assert_vec_eq(preview.screen_pos(interior.center()), Vec2::splat(0.5));
        assert_vec_eq(preview.screen_pos(interior.min()), Vec2::ZERO);
        // Outside the interior is not clamped
        assert_vec_eq(preview.screen_pos(Vec2::ZERO), Vec2::splat(-0.5));
    }

    #[test]
    fn test_screen_pos_wide_input_in_non_square_widget() {
        let input = handle(1920, 1080);
        let mut preview = InputPreview::with_input(&input);
        preview.resize(1200.0, 900.0);
        preview.set_border(0.1);

        let view = preview.view_rect();
        assert!((view.x - 0.0).abs() < 1e-2);
        assert!((view.y - 112.5).abs() < 1e-2);
        assert!((view.width - 1200.0).abs() < 1e-2);
        assert!((view.height - 675.0).abs() < 1e-2);

        let interior = preview.interior_rect();
        assert!((interior.x - 120.0).abs() < 1e-2);
        assert!((interior.y - 180.0).abs() < 1e-2);
        assert!((interior.width - 960.0).abs() < 1e-2);
        assert!((interior.height - 540.0).abs() < 1e-2);

        let near = |a: Vec2, b: Vec2| (a - b).length() < 1e-4;
        assert!(near(preview.screen_pos(Vec2::new(120.0, 180.0)), Vec2::ZERO));
        assert!(near(preview.screen_pos(Vec2::new(600.0, 450.0)), Vec2::splat(0.5)));
        assert!(near(preview.screen_pos(Vec2::new(1080.0, 720.0)), Vec2::ONE));
    }

    #[test]
    fn test_border_clamping() {
        let mut preview = InputPreview::new();
        preview.set_border(0.75);
        assert_eq!(preview.border(), MAX_BORDER);
        preview.set_border(-1.0);
        assert_eq!(preview.border(), 0.0);
        preview.set_border(f32::NAN);
        assert_eq!(preview.border(), 0.0);
        preview.set_border(0.1);
        assert_eq!(preview.border(), 0.1);
    }

    #[test]
    fn test_empty_widget_maps_to_origin() {
        let preview = InputPreview::new();
        assert!(preview.view_rect().is_empty());
        assert_eq!(preview.screen_pos(Vec2::new(10.0, 10.0)), Vec2::ZERO);
    }

    #[test]
    fn test_input_changed_fires_once_per_set() {
        let count = Rc::new(Cell::new(0));
        let mut preview = InputPreview::new();
        let counter = count.clone();
        preview.on_input_changed(move || counter.set(counter.get() + 1));

        let a = handle(640, 480);
        let b = handle(1280, 720);
        preview.set_input(Some(&a));
        assert_eq!(count.get(), 1);
        preview.set_input(Some(&b));
        assert_eq!(count.get(), 2);
        preview.set_input(None);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_preview_does_not_own_input() {
        let input = handle(640, 480);
        let mut preview = InputPreview::new();
        preview.set_input(Some(&input));
        assert_eq!(Rc::strong_count(&input), 1);

        drop(preview);
        assert_eq!(input.width(), 640);

        let mut preview = InputPreview::with_input(&input);
        assert!(preview.initialize(&mut TestBackend::default()));
        assert_eq!(preview.state(), PreviewState::Ready);
        drop(input);
        assert_eq!(preview.state(), PreviewState::NoInput);
    }

    #[test]
    fn test_state_machine() {
        let input = handle(200, 100);
        let mut backend = TestBackend::default();
        let mut preview = InputPreview::new();
        preview.resize(400.0, 100.0);
        assert_eq!(preview.state(), PreviewState::Uninitialized);

        preview.set_input(Some(&input));
        assert!(!preview.paint_gl(&mut backend));
        assert!(preview.initialize(&mut backend));
        assert_eq!(preview.state(), PreviewState::Ready);
        assert!(preview.paint_gl(&mut backend));
        assert_eq!(backend.frames.len(), 1);
        assert_eq!(backend.frames[0].view, Rect::new(100.0, 0.0, 200.0, 100.0));

        preview.set_input(None);
        assert_eq!(preview.state(), PreviewState::NoInput);
        assert!(!preview.paint_gl(&mut backend));
        assert_eq!(backend.frames.len(), 1);
    }

    #[test]
    fn test_input_without_frames_is_not_painted() {
        let input = handle(0, 0);
        let mut backend = TestBackend::default();
        let mut preview = InputPreview::with_input(&input);
        preview.resize(320.0, 240.0);
        assert!(preview.initialize(&mut backend));
        assert!(preview.input().is_some());
        assert_eq!(preview.state(), PreviewState::NoInput);
        assert!(!preview.paint_gl(&mut backend));
        assert!(backend.frames.is_empty());
    }

    #[test]
    fn test_failed_initialize_stays_uninitialized() {
        let input = handle(640, 480);
        let mut backend = TestBackend {
            fail_init: true,
            ..Default::default()
        };
        let mut preview = InputPreview::with_input(&input);
        assert!(!preview.initialize(&mut backend));
        assert_eq!(preview.state(), PreviewState::Uninitialized);
        assert!(!preview.paint_gl(&mut backend));
        assert!(backend.frames.is_empty());
    }
}
