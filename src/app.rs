//! Demo host: a scrollable sample page with the widget embedded.
//!
//! This is the production binding of the ports: [`DemoPage`] implements
//! [`Page`] over plain flags, egui raw input is translated into
//! [`InputEvent`]s, and the per-frame [`Layout`] is fed back so the core
//! can hit-test the next frame's events.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Vec2, vec2};
use eframe::CreationContext;

use crate::page::{ImageId, Layout, Page};
use crate::settings::{PositionMode, StoragePort, ThemeMode};
use crate::switcher::{Config, InputEvent, ThemeSwitcher};
use crate::theme;

/// Edge length of the toggler bubble.
const TOGGLER_SIZE: f32 = 48.0;
/// Padding between the bubble edge and the icon image.
const ICON_PADDING: f32 = 6.0;

struct DemoImage {
    dark: bool,
    widget: bool,
}

/// A minimal host page: a root-dark flag and a handful of images.
pub struct DemoPage {
    root_dark: bool,
    images: Vec<DemoImage>,
}

impl DemoPage {
    /// Page with three sample images, none of them marked.
    pub fn new() -> Self {
        let images = (0..3)
            .map(|_| DemoImage {
                dark: false,
                widget: false,
            })
            .collect();
        Self {
            root_dark: false,
            images,
        }
    }

    pub fn root_dark(&self) -> bool {
        self.root_dark
    }

    /// Dark flags of the sample images, excluding the widget's own icon.
    pub fn sample_marks(&self) -> Vec<bool> {
        self.images
            .iter()
            .filter(|img| !img.widget)
            .map(|img| img.dark)
            .collect()
    }
}

impl Default for DemoPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for DemoPage {
    fn set_root_dark(&mut self, dark: bool) {
        self.root_dark = dark;
    }

    fn images(&self) -> Vec<ImageId> {
        (0..self.images.len()).collect()
    }

    fn set_image_dark(&mut self, id: ImageId, dark: bool) {
        if let Some(image) = self.images.get_mut(id) {
            image.dark = dark;
        }
    }

    fn register_widget_image(&mut self) -> ImageId {
        self.images.push(DemoImage {
            dark: false,
            widget: true,
        });
        self.images.len() - 1
    }
}

pub struct TogglerApp {
    page: DemoPage,
    switcher: ThemeSwitcher,
    scroll_offset: Vec2,
}

impl TogglerApp {
    pub fn new(cc: &CreationContext<'_>, storage: Box<dyn StoragePort>, config: Config) -> Self {
        let mut page = DemoPage::new();
        let switcher = ThemeSwitcher::new(storage, &mut page, config);
        theme::apply_theme(&cc.egui_ctx, switcher.mode());
        Self {
            page,
            switcher,
            scroll_offset: Vec2::ZERO,
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        for event in collect_events(ctx) {
            // The return value asks the embedder to suppress its native
            // reaction; egui has none to suppress.
            let _ = self.switcher.handle_event(event, &mut self.page);
        }

        let mode = if self.page.root_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        theme::apply_theme(ctx, mode);

        self.draw_sample_page(ctx);

        let extent = ctx.screen_rect().size();
        let (toggler_rect, image_rect) = self.draw_toggler(ctx, extent);
        let menu_rect = self.draw_menu(ctx, extent);

        self.switcher.update_layout(Layout {
            toggler: Some(toggler_rect),
            image: Some(image_rect),
            menu: menu_rect,
            extent,
        });
    }

    fn draw_sample_page(&mut self, ctx: &egui::Context) {
        let marks = self.page.sample_marks();
        egui::CentralPanel::default().show(ctx, |ui| {
            let output = egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("A sample page");
                ui.label(
                    "Click the floating bubble to switch between light and \
                     dark themes. Drag it anywhere; right-click it to pin it \
                     to the window instead of the content.",
                );
                ui.separator();
                ui.horizontal(|ui| {
                    for dark in &marks {
                        draw_sample_image(ui, *dark);
                    }
                });
                for i in 0..12 {
                    ui.separator();
                    ui.label(format!("Paragraph {} of scrollable filler text.", i + 1));
                }
            });
            self.scroll_offset = output.state.offset;
        });
    }

    fn draw_toggler(&mut self, ctx: &egui::Context, extent: Vec2) -> (Rect, Rect) {
        let toggler = self.switcher.toggler();
        let pos = self.place(toggler.resolved_pos(extent), toggler.position());
        let icon = toggler.icon();
        let glow = toggler.glow();

        let response = egui::Area::new(egui::Id::new("bin-theme-toggler"))
            .order(egui::Order::Foreground)
            .fixed_pos(pos)
            .show(ctx, |ui| {
                let (rect, _) =
                    ui.allocate_exact_size(Vec2::splat(TOGGLER_SIZE), Sense::hover());
                let painter = ui.painter();
                if glow {
                    painter.circle_filled(
                        rect.center(),
                        TOGGLER_SIZE * 0.72,
                        Color32::from_rgba_unmultiplied(255, 220, 90, 40),
                    );
                }
                painter.circle_filled(
                    rect.center(),
                    TOGGLER_SIZE / 2.0,
                    ui.visuals().widgets.inactive.bg_fill,
                );
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    icon.glyph(),
                    FontId::proportional(22.0),
                    ui.visuals().strong_text_color(),
                );
                rect
            });

        let toggler_rect = response.inner;
        (toggler_rect, toggler_rect.shrink(ICON_PADDING))
    }

    fn draw_menu(&mut self, ctx: &egui::Context, extent: Vec2) -> Option<Rect> {
        if !self.switcher.menu().is_visible() {
            return None;
        }

        let (top, left, position, mut checked) = {
            let menu = self.switcher.menu();
            (menu.top(), menu.left(), menu.position(), menu.checked())
        };
        let resolved = Pos2::new(left.resolve(extent.x), top.resolve(extent.y));
        let pos = self.place(resolved, position);

        let response = egui::Area::new(egui::Id::new("bin-theme-context-menu"))
            .order(egui::Order::Foreground)
            .fixed_pos(pos)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.checkbox(&mut checked, "Fixed Position");
                });
            });

        if checked != self.switcher.menu().checked() {
            self.switcher.set_pinned(checked);
        }
        Some(response.response.rect)
    }

    /// Map a resolved position to screen space for the given mode.
    fn place(&self, resolved: Pos2, position: PositionMode) -> Pos2 {
        match position {
            PositionMode::Pinned => resolved,
            PositionMode::ScrollRelative => resolved - self.scroll_offset,
        }
    }
}

impl eframe::App for TogglerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

/// Translate egui raw input into the widget's event port.
fn collect_events(ctx: &egui::Context) -> Vec<InputEvent> {
    ctx.input(|i| {
        let mut events = Vec::new();
        let pos = i.pointer.interact_pos();
        if i.pointer.primary_pressed() {
            if let Some(pos) = pos {
                events.push(InputEvent::PointerDown(pos));
            }
        }
        if i.pointer.delta() != Vec2::ZERO {
            if let Some(pos) = i.pointer.latest_pos() {
                events.push(InputEvent::PointerMove(pos));
            }
        }
        if i.pointer.primary_released() {
            events.push(InputEvent::PointerUp);
        }
        if i.pointer.primary_clicked() {
            if let Some(pos) = pos {
                events.push(InputEvent::Click(pos));
            }
        }
        if i.pointer.secondary_clicked() {
            if let Some(pos) = pos {
                events.push(InputEvent::ContextMenu(pos));
            }
        }
        events
    })
}

fn draw_sample_image(ui: &mut egui::Ui, dark: bool) {
    let (rect, _) = ui.allocate_exact_size(vec2(120.0, 80.0), Sense::hover());
    let fill = if dark {
        Color32::from_gray(45)
    } else {
        Color32::from_rgb(140, 180, 220)
    };
    ui.painter().rect_filled(rect, 4.0, fill);
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        "photo",
        FontId::proportional(14.0),
        if dark {
            Color32::from_gray(120)
        } else {
            Color32::from_gray(30)
        },
    );
}
