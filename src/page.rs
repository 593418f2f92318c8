//! The capability surface the widget needs from its host.
//!
//! The core never draws anything itself. It marks the host through [`Page`]
//! and learns where things ended up on screen through [`Layout`], which the
//! renderer reports back once per frame. Both directions are plain data, so
//! the interaction logic runs headless in tests.

use eframe::egui::{Rect, Vec2};

/// Handle for an image living on the host page.
pub type ImageId = usize;

/// Mutations the widget may apply to its host.
///
/// Borrowed per operation (`&mut dyn Page`); the widget never owns the host.
pub trait Page {
    /// Apply or remove the dark marker on the document root.
    fn set_root_dark(&mut self, dark: bool);

    /// All images currently on the page, including the widget's own.
    fn images(&self) -> Vec<ImageId>;

    /// Apply or remove the dark marker on a single image.
    fn set_image_dark(&mut self, id: ImageId, dark: bool);

    /// Register the toggler's own image with the page and return its handle.
    ///
    /// The handle lets the widget keep its icon out of the dark-image
    /// treatment while every other image receives it.
    fn register_widget_image(&mut self) -> ImageId;
}

/// Where the renderer put things last frame.
///
/// Rects stay `None` until the corresponding node has been drawn once;
/// hit tests against an absent rect are simply false.
#[derive(Debug, Clone, Copy, Default)]
pub struct Layout {
    /// Screen rect of the whole toggler.
    pub toggler: Option<Rect>,
    /// Screen rect of the toggler's icon image.
    pub image: Option<Rect>,
    /// Screen rect of the context menu, when visible.
    pub menu: Option<Rect>,
    /// Size percent offsets resolve against.
    pub extent: Vec2,
}
