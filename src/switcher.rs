//! The theme switcher: toggler model, interaction policy, orchestration.
//!
//! [`ThemeSwitcher`] is the handle an embedder holds. It owns the typed
//! store, the toggler model, the context menu and the drag machine, and is
//! driven from outside through two channels: [`InputEvent`]s forwarded from
//! the host surface, and the per-frame [`Layout`] the renderer reports.
//! Host mutations go through a borrowed [`Page`].

use eframe::egui::{Pos2, Vec2};
use tracing::debug;

use crate::drag::DragController;
use crate::length::Length;
use crate::menu::ContextMenu;
use crate::page::{ImageId, Layout, Page};
use crate::settings::{PositionMode, SettingsStore, StoragePort, ThemeMode};
use crate::theme::Icon;

/// Top offset used when nothing is persisted yet.
pub const DEFAULT_TOP: Length = Length::Percent(20.0);
/// Left offset used when nothing is persisted yet.
pub const DEFAULT_LEFT: Length = Length::Percent(90.0);

/// Construction options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Render a decorative glow halo around the toggler.
    pub glow: bool,
}

/// The draggable toggler node.
pub struct Toggler {
    top: Length,
    left: Length,
    position: PositionMode,
    icon: Icon,
    glow: bool,
    image: ImageId,
}

impl Toggler {
    pub fn top(&self) -> Length {
        self.top
    }

    pub fn left(&self) -> Length {
        self.left
    }

    pub fn position(&self) -> PositionMode {
        self.position
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }

    pub fn glow(&self) -> bool {
        self.glow
    }

    /// Handle of the toggler's own image on the host page.
    pub fn image_id(&self) -> ImageId {
        self.image
    }

    /// Current offsets resolved to pixels against `extent`.
    pub fn resolved_pos(&self, extent: Vec2) -> Pos2 {
        Pos2::new(self.left.resolve(extent.x), self.top.resolve(extent.y))
    }
}

/// Raw input forwarded from the host surface.
///
/// Only primary clicks arrive as [`Click`](InputEvent::Click); the menu's
/// outside-click dismissal is left-click-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(Pos2),
    PointerMove(Pos2),
    PointerUp,
    Click(Pos2),
    ContextMenu(Pos2),
}

pub struct ThemeSwitcher {
    store: SettingsStore,
    toggler: Toggler,
    menu: ContextMenu,
    drag: DragController,
    layout: Layout,
}

impl ThemeSwitcher {
    /// Build the widget and apply the persisted theme to `page`.
    ///
    /// Construction order is fixed: context menu, then toggler, then theme
    /// application; the drag machine starts Idle and the embedder hooks up
    /// event forwarding afterwards.
    pub fn new(storage: Box<dyn StoragePort>, page: &mut dyn Page, config: Config) -> Self {
        let store = SettingsStore::new(storage);

        let menu = ContextMenu::new(store.position_mode().is_pinned());

        let top = store
            .top()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TOP);
        let left = store
            .left()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_LEFT);
        let toggler = Toggler {
            top,
            left,
            position: store.position_mode(),
            icon: Icon::for_mode(store.display_mode()),
            glow: config.glow,
            image: page.register_widget_image(),
        };

        let mut switcher = Self {
            store,
            toggler,
            menu,
            drag: DragController::new(),
            layout: Layout::default(),
        };
        switcher.apply_on_load(page);
        switcher
    }

    /// Clear the dark markers everywhere and persist Light.
    pub fn activate_light(&mut self, page: &mut dyn Page) {
        page.set_root_dark(false);
        for id in page.images() {
            page.set_image_dark(id, false);
        }
        self.store.set_display_mode(ThemeMode::Light);
        self.toggler.icon = Icon::Moon;
        debug!("light theme activated");
    }

    /// Mark the root and every host image dark, except the toggler's own
    /// icon, and persist Dark.
    pub fn activate_dark(&mut self, page: &mut dyn Page) {
        page.set_root_dark(true);
        for id in page.images() {
            if id != self.toggler.image {
                page.set_image_dark(id, true);
            }
        }
        self.store.set_display_mode(ThemeMode::Dark);
        self.toggler.icon = Icon::Sun;
        debug!("dark theme activated");
    }

    /// Flip to the other theme. Driven by clicks on the toggler image only.
    pub fn toggle(&mut self, page: &mut dyn Page) {
        if self.store.display_mode().is_dark() {
            self.activate_light(page);
        } else {
            self.activate_dark(page);
        }
    }

    /// Re-assert the persisted theme without flipping it. Idempotent.
    pub fn apply_on_load(&mut self, page: &mut dyn Page) {
        if self.store.display_mode().is_dark() {
            self.activate_dark(page);
        } else {
            self.activate_light(page);
        }
    }

    /// Feed one input event. Returns true when the event was consumed and
    /// the embedder should suppress its native reaction (text selection,
    /// the native context menu).
    pub fn handle_event(&mut self, event: InputEvent, page: &mut dyn Page) -> bool {
        match event {
            InputEvent::PointerDown(pos) => {
                let hit = self.layout.toggler.is_some_and(|r| r.contains(pos));
                if hit {
                    let origin = self.toggler.resolved_pos(self.layout.extent);
                    self.drag.begin(pos, origin);
                }
                hit
            }
            InputEvent::PointerMove(pos) => match self.drag.update(pos) {
                Some(moved) => {
                    self.move_toggler(moved);
                    true
                }
                None => false,
            },
            InputEvent::PointerUp => self.drag.finish(),
            InputEvent::Click(pos) => {
                let on_image = self.layout.image.is_some_and(|r| r.contains(pos));
                if on_image {
                    self.toggle(page);
                }
                if self.menu.is_visible() && !self.menu.contains(pos, self.layout.menu) {
                    self.menu.hide();
                }
                on_image
            }
            InputEvent::ContextMenu(pos) => {
                let mut consumed = false;
                if self.layout.toggler.is_some_and(|r| r.contains(pos)) {
                    self.menu.show(&self.store, self.toggler.position);
                    consumed = true;
                }
                // Repeated right-clicks while visible stay suppressed so the
                // native menu cannot flicker over the popup.
                if self.menu.is_visible() {
                    consumed = true;
                }
                consumed
            }
        }
    }

    /// Checkbox change from the context menu: hides the popup and applies
    /// the new position mode to the toggler and the store.
    pub fn set_pinned(&mut self, pinned: bool) {
        self.menu.hide();
        self.menu.set_checked(pinned);
        let mode = if pinned {
            PositionMode::Pinned
        } else {
            PositionMode::ScrollRelative
        };
        self.toggler.position = mode;
        self.store.set_position_mode(mode);
        debug!(mode = mode.as_token(), "position mode changed");
    }

    /// Renderer feedback: where things were drawn and how large the host
    /// surface is. Stale for one frame after a move, which is fine for
    /// hit-testing.
    pub fn update_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    pub fn mode(&self) -> ThemeMode {
        self.store.display_mode()
    }

    pub fn toggler(&self) -> &Toggler {
        &self.toggler
    }

    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    fn move_toggler(&mut self, pos: Pos2) {
        self.toggler.top = Length::Px(pos.y);
        self.toggler.left = Length::Px(pos.x);
        // Persisted on every move so a mid-drag exit loses nothing.
        self.store.set_top(&self.toggler.top.to_string());
        self.store.set_left(&self.toggler.left.to_string());
    }
}
