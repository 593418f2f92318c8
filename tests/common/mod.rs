//! Shared fixtures: a headless page and canned layouts.
#![allow(dead_code)]

use eframe::egui::{pos2, vec2, Rect};

use theme_toggler::page::{ImageId, Layout, Page};
use theme_toggler::settings::{MemoryStore, SettingsStore};
use theme_toggler::switcher::{Config, ThemeSwitcher};

/// In-memory [`Page`] recording every marker mutation.
#[derive(Default)]
pub struct FakePage {
    pub root_dark: bool,
    /// Dark flag per image id; the widget's own image is one of these.
    pub images: Vec<bool>,
    pub widget_image: Option<ImageId>,
}

impl FakePage {
    pub fn with_images(count: usize) -> Self {
        Self {
            root_dark: false,
            images: vec![false; count],
            widget_image: None,
        }
    }
}

impl Page for FakePage {
    fn set_root_dark(&mut self, dark: bool) {
        self.root_dark = dark;
    }

    fn images(&self) -> Vec<ImageId> {
        (0..self.images.len()).collect()
    }

    fn set_image_dark(&mut self, id: ImageId, dark: bool) {
        if let Some(flag) = self.images.get_mut(id) {
            *flag = dark;
        }
    }

    fn register_widget_image(&mut self) -> ImageId {
        self.images.push(false);
        let id = self.images.len() - 1;
        self.widget_image = Some(id);
        id
    }
}

/// Widget over a fresh in-memory store.
pub fn fresh_switcher(page: &mut FakePage) -> ThemeSwitcher {
    ThemeSwitcher::new(Box::new(MemoryStore::new()), page, Config::default())
}

/// Widget over a store preloaded by `seed`.
pub fn seeded_switcher(
    page: &mut FakePage,
    seed: impl FnOnce(&mut MemoryStore),
) -> ThemeSwitcher {
    let mut store = MemoryStore::new();
    seed(&mut store);
    ThemeSwitcher::new(Box::new(store), page, Config::default())
}

/// Persisted values a scenario cares about, for whole-state comparisons.
pub fn store_snapshot(store: &SettingsStore) -> [Option<String>; 4] {
    [
        store.get(theme_toggler::settings::MODE_KEY),
        store.get(theme_toggler::settings::POSITION_KEY),
        store.get(theme_toggler::settings::TOP_KEY),
        store.get(theme_toggler::settings::LEFT_KEY),
    ]
}

/// Layout with the toggler rendered at (540, 120) in a 600x600 surface,
/// matching the default 90%/20% offsets, and the menu just below it.
pub fn default_layout() -> Layout {
    let toggler = Rect::from_min_size(pos2(540.0, 120.0), vec2(48.0, 48.0));
    Layout {
        toggler: Some(toggler),
        image: Some(toggler.shrink(6.0)),
        menu: Some(Rect::from_min_size(pos2(540.0, 180.0), vec2(140.0, 32.0))),
        extent: vec2(600.0, 600.0),
    }
}
