//! Menu Component
//!
//! A vertical list of selectable labels, each leading to a destination.
//! Supports keyboard navigation (saturating, no wraparound) and pre-baked
//! label textures so rendering never rasterizes text.

use crate::error::RenderError;
use crate::input_system::{InputEvent, Key};
use crate::render::{FontStyle, RenderContext};
use crate::scene::Scene;
use crate::text::{bake_label, LabelColors};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Default gap between two labels in pixels
pub const DEFAULT_LABEL_SPACING: u32 = 20;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Gap between labels in pixels
    pub label_spacing: u32,

    /// Frame and label background
    pub background_color: Color,

    /// Normal item text color
    pub item_color: Color,

    /// Selected item text color
    pub selected_item_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            label_spacing: DEFAULT_LABEL_SPACING,
            background_color: Color::RGB(30, 30, 30),
            item_color: Color::RGB(120, 120, 120),
            selected_item_color: Color::RGB(255, 255, 255),
        }
    }
}

impl MenuStyle {
    fn label_colors(&self) -> LabelColors {
        LabelColors {
            background: self.background_color,
            normal: self.item_color,
            highlighted: self.selected_item_color,
        }
    }
}

/// A menu item: what is shown and where it leads
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    /// Scene identifier, or the exit sentinel
    pub destination: String,
}

/// The menu scene
///
/// # Lifecycle
///
/// ```text
/// new() -> add()* -> init() -> { handle_event() / update() / render() }* -> destroy()
/// ```
///
/// `init()` bakes one texture per item. If it fails partway, the textures
/// baked so far stay owned by the menu and `destroy()` still releases them.
pub struct Menu<T> {
    items: Vec<MenuItem>,
    labels: Vec<T>,
    selected_index: usize,
    pending: Option<String>,
    style: MenuStyle,
    label_height: u32,
    /// Space above the first label; negative when the menu is taller than the screen
    margin: i32,
    screen_width: u32,
}

impl<T> Menu<T> {
    /// Creates an empty menu with default styling
    pub fn new() -> Self {
        Self::with_style(MenuStyle::default())
    }

    pub fn with_style(style: MenuStyle) -> Self {
        Menu {
            items: Vec::new(),
            labels: Vec::new(),
            selected_index: 0,
            pending: None,
            style,
            label_height: 0,
            margin: 0,
            screen_width: 0,
        }
    }

    /// Appends an item; order is display and navigation order
    pub fn add(&mut self, label: impl Into<String>, destination: impl Into<String>) {
        self.items.push(MenuItem {
            label: label.into(),
            destination: destination.into(),
        });
    }

    #[cfg(test)]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Number of baked label textures currently held
    #[cfg(test)]
    pub fn baked_labels(&self) -> usize {
        self.labels.len()
    }

    /// Move selection down, stopping at the last item
    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
        }
    }

    /// Move selection up, stopping at the first item
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Commits the selected item's destination as the pending transition
    pub fn confirm(&mut self) {
        match self.items.get(self.selected_index) {
            Some(item) => {
                log::debug!("Menu item {:?} selected", item.label);
                self.pending = Some(item.destination.clone());
            }
            None => log::warn!("Confirm pressed on an empty menu, ignoring"),
        }
    }

    fn layout(&mut self, screen_width: u32, screen_height: u32, label_height: u32) {
        let count = self.items.len() as i64;
        let spacing = i64::from(self.style.label_spacing);
        let content = i64::from(label_height) * count + spacing * (count - 1).max(0);

        self.screen_width = screen_width;
        self.label_height = label_height;
        self.margin = saturate((i64::from(screen_height) - content) / 2);
    }

    /// Source and destination rectangles of every label for the current selection
    fn label_rects(&self, sizes: impl Iterator<Item = (u32, u32)>) -> Vec<(Rect, Rect)> {
        let label_height = self.label_height;
        let step = i64::from(label_height) + i64::from(self.style.label_spacing);

        sizes
            .enumerate()
            .map(|(i, (width, height))| {
                let src_y = if i == self.selected_index {
                    (height / 2) as i32
                } else {
                    0
                };
                let x = (self.screen_width as i32 - width as i32) / 2;
                let y = saturate(i64::from(self.margin) + i as i64 * step);
                (
                    Rect::new(0, src_y, width, label_height),
                    Rect::new(x, y, width, label_height),
                )
            })
            .collect()
    }
}

/// Screen coordinates far off either edge collapse to the `i32` range
fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl<T> Default for Menu<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RenderContext> Scene<R> for Menu<R::Texture> {
    fn init(&mut self, ctx: &mut R) -> Result<(), RenderError> {
        let (screen_width, screen_height) = ctx.output_size();
        let label_height = ctx.line_height(FontStyle::Menu);
        self.layout(screen_width, screen_height, label_height);

        log::debug!(
            "Menu layout: screen {}x{}, label {}, spacing {}, margin {}",
            screen_width,
            screen_height,
            label_height,
            self.style.label_spacing,
            self.margin
        );

        let colors = self.style.label_colors();
        for item in &self.items {
            let baked = bake_label(ctx, &item.label, colors, label_height)?;
            self.labels.push(baked);
        }

        Ok(())
    }

    fn render(&mut self, ctx: &mut R) -> Result<(), RenderError> {
        ctx.clear(self.style.background_color)?;

        let sizes: Vec<(u32, u32)> = self.labels.iter().map(|t| ctx.texture_size(t)).collect();
        let rects = self.label_rects(sizes.into_iter());

        for (texture, (src, dst)) in self.labels.iter().zip(rects) {
            ctx.draw(texture, Some(src), dst)?;
        }

        Ok(())
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Down) => self.select_next(),
            InputEvent::KeyDown(Key::Up) => self.select_previous(),
            InputEvent::KeyDown(Key::Confirm) => self.confirm(),
            _ => {}
        }
    }

    fn update(&mut self) -> Option<String> {
        self.pending.take()
    }

    fn destroy(&mut self, ctx: &mut R) {
        for texture in self.labels.drain(..) {
            ctx.release(texture);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{FakeRenderer, FakeTexture};

    const DOWN: InputEvent = InputEvent::KeyDown(Key::Down);
    const UP: InputEvent = InputEvent::KeyDown(Key::Up);
    const CONFIRM: InputEvent = InputEvent::KeyDown(Key::Confirm);

    fn menu(items: &[(&str, &str)]) -> Menu<FakeTexture> {
        let mut menu = Menu::new();
        for (label, destination) in items {
            menu.add(*label, *destination);
        }
        menu
    }

    fn press(menu: &mut Menu<FakeTexture>, event: InputEvent, times: usize) {
        for _ in 0..times {
            Scene::<FakeRenderer>::handle_event(menu, &event);
        }
    }

    fn update(menu: &mut Menu<FakeTexture>) -> Option<String> {
        Scene::<FakeRenderer>::update(menu)
    }

    #[test]
    fn test_down_saturates_at_last_item() {
        let mut menu = menu(&[("Play", "game"), ("Options", "menu"), ("Quit", "exit")]);

        for presses in 0..10 {
            press(&mut menu, DOWN, 1);
            assert!(menu.selected_index() <= 2, "overflow after {} presses", presses + 1);
        }
        assert_eq!(menu.selected_index(), 2);
    }

    #[test]
    fn test_up_saturates_at_first_item() {
        let mut menu = menu(&[("Play", "game"), ("Quit", "exit")]);

        press(&mut menu, UP, 5);
        assert_eq!(menu.selected_index(), 0);

        press(&mut menu, DOWN, 1);
        press(&mut menu, UP, 3);
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_play_quit_scenario() {
        let mut menu = menu(&[("Play", "game"), ("Quit", "exit")]);

        press(&mut menu, DOWN, 1);
        assert_eq!(menu.selected_index(), 1);

        press(&mut menu, CONFIRM, 1);
        assert_eq!(update(&mut menu), Some("exit".to_string()));
    }

    #[test]
    fn test_single_item_never_moves() {
        let mut menu = menu(&[("Only", "x")]);

        for _ in 0..4 {
            press(&mut menu, UP, 1);
            press(&mut menu, DOWN, 1);
            assert_eq!(menu.selected_index(), 0);
        }

        press(&mut menu, CONFIRM, 1);
        assert_eq!(update(&mut menu), Some("x".to_string()));
    }

    #[test]
    fn test_confirm_delivered_once() {
        let mut menu = menu(&[("Play", "game"), ("Quit", "exit")]);

        assert_eq!(update(&mut menu), None);
        press(&mut menu, CONFIRM, 1);
        assert_eq!(update(&mut menu), Some("game".to_string()));
        assert_eq!(update(&mut menu), None);
        assert_eq!(update(&mut menu), None);

        press(&mut menu, CONFIRM, 1);
        assert_eq!(update(&mut menu), Some("game".to_string()));
    }

    #[test]
    fn test_empty_menu_is_inert() {
        let mut menu = menu(&[]);

        press(&mut menu, DOWN, 2);
        press(&mut menu, UP, 2);
        press(&mut menu, CONFIRM, 1);

        assert_eq!(menu.selected_index(), 0);
        assert_eq!(update(&mut menu), None);
    }

    #[test]
    fn test_destroy_releases_every_label() {
        let mut ctx = FakeRenderer::new(200, 100);
        let mut menu = menu(&[("Play", "game"), ("Options", "menu"), ("Quit", "exit")]);

        menu.init(&mut ctx).unwrap();
        assert_eq!(menu.baked_labels(), 3);
        assert_eq!(ctx.live_textures(), 3);

        menu.destroy(&mut ctx);
        assert_eq!(menu.baked_labels(), 0);
        assert_eq!(ctx.live_textures(), 0);

        // second destroy has nothing left to release
        let released = ctx.released.len();
        menu.destroy(&mut ctx);
        assert_eq!(ctx.released.len(), released);
    }

    #[test]
    fn test_partial_init_failure_is_released_by_destroy() {
        let mut ctx = FakeRenderer::new(200, 100);
        // Two rasterizations per item: the second item fails on its highlighted variant
        ctx.fail_text_after = Some(3);
        let mut menu = menu(&[("Play", "game"), ("Options", "menu"), ("Quit", "exit")]);

        let result = menu.init(&mut ctx);
        assert!(matches!(result, Err(RenderError::Text { .. })));
        assert_eq!(menu.baked_labels(), 1);

        menu.destroy(&mut ctx);
        assert_eq!(ctx.live_textures(), 0);
    }

    #[test]
    fn test_render_highlights_only_selected_item() {
        let mut ctx = FakeRenderer::new(200, 100);
        let mut menu = menu(&[("Play", "game"), ("Quit", "exit")]);
        menu.init(&mut ctx).unwrap();

        press(&mut menu, DOWN, 1);
        menu.render(&mut ctx).unwrap();

        assert_eq!(ctx.clears, vec![Color::RGB(30, 30, 30)]);
        assert_eq!(ctx.draws.len(), 2);

        // label height 10, spacing 20: content 40, margin (100 - 40) / 2
        let first = &ctx.draws[0];
        assert_eq!(first.src, Some(Rect::new(0, 0, 32, 10)));
        assert_eq!(first.dst, Rect::new((200 - 32) / 2, 30, 32, 10));

        let second = &ctx.draws[1];
        assert_eq!(second.src, Some(Rect::new(0, 10, 32, 10)));
        assert_eq!(second.dst, Rect::new((200 - 32) / 2, 60, 32, 10));
    }

    #[test]
    fn test_tall_menu_margin_is_not_clamped() {
        let mut ctx = FakeRenderer::new(200, 30);
        let mut menu = menu(&[("A", "game"), ("B", "game"), ("C", "exit")]);
        menu.init(&mut ctx).unwrap();
        menu.render(&mut ctx).unwrap();

        // content = 3 * 10 + 2 * 20 = 70, margin = (30 - 70) / 2
        assert_eq!(ctx.draws[0].dst.y(), -20);
    }

    #[test]
    fn test_huge_spacing_pushes_labels_off_screen() {
        let mut ctx = FakeRenderer::new(200, 100);
        let mut menu: Menu<FakeTexture> = Menu::with_style(MenuStyle {
            label_spacing: u32::MAX,
            ..MenuStyle::default()
        });
        menu.add("Play", "game");
        menu.add("Quit", "exit");

        menu.init(&mut ctx).unwrap();
        menu.render(&mut ctx).unwrap();

        assert_eq!(ctx.draws.len(), 2);
        assert!(ctx.draws[0].dst.y() < 0);
        assert!(ctx.draws[1].dst.y() > 100);
    }
}
