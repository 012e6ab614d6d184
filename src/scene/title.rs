//! Title screen
//!
//! Shows the game name stretched across the middle of the screen. Space
//! re-rolls the color scheme, Return continues to the menu.

use super::{Scene, SceneId};
use crate::error::RenderError;
use crate::input_system::{InputEvent, Key};
use crate::render::{FontStyle, RenderContext};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::time::{SystemTime, UNIX_EPOCH};

pub const TITLE_TEXT: &str = "Tank & Gun";

/// Background color and the text color drawn on it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitlePalette {
    pub background: Color,
    pub text: Color,
}

impl TitlePalette {
    /// Scrambles `seed` into a background color; the text is its complement
    pub fn from_seed(seed: u32) -> Self {
        let mixed = seed.wrapping_mul(0x9E37_79B1).rotate_left(13) ^ seed;
        let [r, g, b, _] = mixed.to_le_bytes();
        TitlePalette {
            background: Color::RGB(r, g, b),
            text: Color::RGB(255 - r, 255 - g, 255 - b),
        }
    }
}

pub struct TitleScene<T> {
    title: Option<T>,
    /// Old title texture waiting to be released on the next render
    stale: Option<T>,
    seed: u32,
    palette: TitlePalette,
    pending: Option<String>,
}

impl<T> TitleScene<T> {
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u32) -> Self {
        TitleScene {
            title: None,
            stale: None,
            seed,
            palette: TitlePalette::from_seed(seed),
            pending: None,
        }
    }

    #[cfg(test)]
    pub fn palette(&self) -> TitlePalette {
        self.palette
    }

    fn reroll(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        self.palette = TitlePalette::from_seed(self.seed);
        // Can't release without a render context; render() picks it up
        if let Some(title) = self.title.take() {
            self.stale = Some(title);
        }
    }
}

impl<T> Default for TitleScene<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RenderContext> Scene<R> for TitleScene<R::Texture> {
    fn init(&mut self, _ctx: &mut R) -> Result<(), RenderError> {
        Ok(())
    }

    fn render(&mut self, ctx: &mut R) -> Result<(), RenderError> {
        if let Some(stale) = self.stale.take() {
            ctx.release(stale);
        }

        let title = match self.title.take() {
            Some(title) => title,
            None => ctx.text_texture(TITLE_TEXT, self.palette.text, FontStyle::Title)?,
        };

        let (width, height) = ctx.output_size();
        let result = ctx.clear(self.palette.background).and_then(|_| {
            ctx.draw(
                &title,
                None,
                Rect::new(
                    10,
                    (height / 4) as i32,
                    width.saturating_sub(20),
                    height / 2,
                ),
            )
        });

        self.title = Some(title);
        result
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Space) => self.reroll(),
            InputEvent::KeyDown(Key::Confirm) => {
                self.pending = Some(SceneId::Menu.to_string());
            }
            _ => {}
        }
    }

    fn update(&mut self) -> Option<String> {
        self.pending.take()
    }

    fn destroy(&mut self, ctx: &mut R) {
        if let Some(stale) = self.stale.take() {
            ctx.release(stale);
        }
        if let Some(title) = self.title.take() {
            ctx.release(title);
        }
    }
}
