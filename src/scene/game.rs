//! Placeholder game scene
//!
//! No gameplay yet: a background strip scrolls sideways and, after a fixed
//! delay, the scene sends the player back to the menu.

use super::{Scene, SceneId};
use crate::error::RenderError;
use crate::input_system::InputEvent;
use crate::render::RenderContext;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

const SKY_COLOR: Color = Color::RGB(40, 60, 40);
const TILE_COLORS: [Color; 2] = [Color::RGB(90, 120, 60), Color::RGB(70, 100, 45)];

/// One-shot timer that fires a scene transition from a background thread
///
/// The thread sends exactly one message and exits. If the receiving scene
/// is gone by then, the send fails and is dropped.
pub struct ReturnTimer {
    receiver: Option<Receiver<SceneId>>,
}

impl ReturnTimer {
    pub fn start(delay: Duration, destination: SceneId) -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            thread::sleep(delay);
            if sender.send(destination).is_err() {
                log::debug!("Return timer fired after its scene was dropped");
            }
        });

        ReturnTimer {
            receiver: Some(receiver),
        }
    }

    /// Non-blocking; yields the destination once, then `None` forever
    pub fn poll(&mut self) -> Option<SceneId> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(destination) => {
                self.receiver = None;
                Some(destination)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::warn!("Return timer thread exited without firing");
                self.receiver = None;
                None
            }
        }
    }
}

/// Horizontal scroll offset that wraps after one full span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scroller {
    offset: u32,
    speed: u32,
    span: u32,
}

impl Scroller {
    pub fn new(speed: u32) -> Self {
        Scroller {
            offset: 0,
            speed,
            span: 0,
        }
    }

    /// Sets the width after which the offset wraps back to zero
    pub fn set_span(&mut self, span: u32) {
        self.span = span;
        self.offset = if span == 0 { 0 } else { self.offset % span };
    }

    pub fn advance(&mut self) {
        if self.span > 0 {
            let next = (u64::from(self.offset) + u64::from(self.speed)) % u64::from(self.span);
            self.offset = next as u32;
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }
}

pub struct GameScene<T> {
    timer: ReturnTimer,
    scroller: Scroller,
    tile_size: u32,
    background_path: Option<PathBuf>,
    background: Option<T>,
    screen: (u32, u32),
}

impl<T> GameScene<T> {
    /// Starts the return timer immediately
    pub fn new(
        return_delay: Duration,
        scroll_speed: u32,
        tile_size: u32,
        background_path: Option<PathBuf>,
    ) -> Self {
        GameScene {
            timer: ReturnTimer::start(return_delay, SceneId::Menu),
            scroller: Scroller::new(scroll_speed),
            tile_size: tile_size.max(1),
            background_path,
            background: None,
            screen: (0, 0),
        }
    }

    /// Procedural strip: alternating tiles along the bottom third
    fn tile_rects(&self) -> Vec<(Color, Rect)> {
        let (width, height) = self.screen;
        let strip_top = (height - height / 3) as i32;
        let tile = self.tile_size as i32;
        let offset = self.scroller.offset() as i32;

        let mut rects = Vec::new();
        let mut x = -(offset % (tile * 2));
        let mut index = 0;
        while x < width as i32 {
            rects.push((
                TILE_COLORS[index % 2],
                Rect::new(x, strip_top, self.tile_size, height / 3),
            ));
            x += tile;
            index += 1;
        }
        rects
    }
}

impl<R: RenderContext> Scene<R> for GameScene<R::Texture> {
    fn init(&mut self, ctx: &mut R) -> Result<(), RenderError> {
        self.screen = ctx.output_size();
        self.scroller.set_span(self.screen.0);

        if let Some(path) = &self.background_path {
            log::info!("Loading game background {}", path.display());
            self.background = Some(ctx.load_texture(path)?);
        }

        Ok(())
    }

    fn render(&mut self, ctx: &mut R) -> Result<(), RenderError> {
        let (width, height) = self.screen;
        let offset = self.scroller.offset() as i32;

        match &self.background {
            Some(texture) => {
                ctx.clear(Color::BLACK)?;
                ctx.draw(texture, None, Rect::new(-offset, 0, width, height))?;
                ctx.draw(texture, None, Rect::new(width as i32 - offset, 0, width, height))?;
            }
            None => {
                ctx.clear(SKY_COLOR)?;
                for (color, rect) in self.tile_rects() {
                    ctx.fill_rect(color, Some(rect))?;
                }
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, _event: &InputEvent) {}

    fn update(&mut self) -> Option<String> {
        self.scroller.advance();
        self.timer.poll().map(|id| id.to_string())
    }

    fn destroy(&mut self, ctx: &mut R) {
        if let Some(texture) = self.background.take() {
            ctx.release(texture);
        }
    }
}
