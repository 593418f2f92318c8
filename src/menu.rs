//! The toggler's right-click context menu.
//!
//! A single-checkbox popup: checked pins the toggler to the viewport,
//! unchecked leaves it scroll-relative. The menu opens at the toggler's
//! stored offsets and mirrors its position mode, so pinning moves both
//! nodes together.

use eframe::egui::{Pos2, Rect};
use tracing::debug;

use crate::length::Length;
use crate::settings::{PositionMode, SettingsStore};
use crate::switcher::{DEFAULT_LEFT, DEFAULT_TOP};

pub struct ContextMenu {
    visible: bool,
    checked: bool,
    top: Length,
    left: Length,
    position: PositionMode,
}

impl ContextMenu {
    /// Build the menu hidden. `checked` is sampled from the persisted
    /// position mode once, at construction.
    pub fn new(checked: bool) -> Self {
        Self {
            visible: false,
            checked,
            top: DEFAULT_TOP,
            left: DEFAULT_LEFT,
            position: PositionMode::default(),
        }
    }

    /// Make the menu visible at the toggler's stored offsets, in the
    /// toggler's current position mode.
    pub fn show(&mut self, store: &SettingsStore, position: PositionMode) {
        self.top = store
            .top()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TOP);
        self.left = store
            .left()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_LEFT);
        self.position = position;
        self.visible = true;
        debug!("context menu shown");
    }

    pub fn hide(&mut self) {
        if self.visible {
            debug!("context menu hidden");
        }
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the point falls inside the menu's last rendered rect.
    /// False when the menu has not been rendered yet.
    pub fn contains(&self, point: Pos2, rect: Option<Rect>) -> bool {
        rect.is_some_and(|r| r.contains(point))
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn top(&self) -> Length {
        self.top
    }

    pub fn left(&self) -> Length {
        self.left
    }

    pub fn position(&self) -> PositionMode {
        self.position
    }
}
