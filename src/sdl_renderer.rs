//! SDL2 implementation of the rendering context
//!
//! Wraps the window canvas, the texture creator every texture borrows from,
//! and the two TrueType fonts the shell uses.

use crate::error::RenderError;
use crate::render::{FontStyle, RenderContext};
use sdl2::image::LoadTexture;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};
use std::path::Path;

pub struct SdlRenderer<'tc, 'ttf> {
    canvas: Canvas<Window>,
    texture_creator: &'tc TextureCreator<WindowContext>,
    menu_font: Font<'ttf, 'static>,
    title_font: Font<'ttf, 'static>,
}

impl<'tc, 'ttf> SdlRenderer<'tc, 'ttf> {
    pub fn new(
        canvas: Canvas<Window>,
        texture_creator: &'tc TextureCreator<WindowContext>,
        menu_font: Font<'ttf, 'static>,
        title_font: Font<'ttf, 'static>,
    ) -> Self {
        SdlRenderer {
            canvas,
            texture_creator,
            menu_font,
            title_font,
        }
    }

    fn font(&self, font: FontStyle) -> &Font<'ttf, 'static> {
        match font {
            FontStyle::Menu => &self.menu_font,
            FontStyle::Title => &self.title_font,
        }
    }
}

impl<'tc, 'ttf> RenderContext for SdlRenderer<'tc, 'ttf> {
    type Texture = Texture<'tc>;

    fn output_size(&self) -> (u32, u32) {
        // Falls back to the window size if the renderer can't be queried
        self.canvas
            .output_size()
            .unwrap_or_else(|_| self.canvas.window().size())
    }

    fn line_height(&self, font: FontStyle) -> u32 {
        self.font(font).height().max(0) as u32
    }

    fn texture_size(&self, texture: &Texture<'tc>) -> (u32, u32) {
        let query = texture.query();
        (query.width, query.height)
    }

    fn text_texture(
        &mut self,
        text: &str,
        color: Color,
        font: FontStyle,
    ) -> Result<Texture<'tc>, RenderError> {
        // Surface is freed on drop, once it has been uploaded
        let surface = self
            .font(font)
            .render(text)
            .blended(color)
            .map_err(|e| RenderError::Text {
                text: text.to_string(),
                message: e.to_string(),
            })?;

        self.texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| RenderError::Texture(e.to_string()))
    }

    fn target_texture(&mut self, width: u32, height: u32) -> Result<Texture<'tc>, RenderError> {
        self.texture_creator
            .create_texture_target(PixelFormatEnum::RGBA8888, width, height)
            .map_err(|e| RenderError::Texture(e.to_string()))
    }

    fn compose(
        &mut self,
        target: &mut Texture<'tc>,
        background: Color,
        layers: &[(&Texture<'tc>, Rect)],
    ) -> Result<(), RenderError> {
        let mut copy_result = Ok(());

        // with_texture_canvas restores the window as the render target on return
        self.canvas
            .with_texture_canvas(target, |texture_canvas| {
                texture_canvas.set_draw_color(background);
                texture_canvas.clear();
                for (layer, dst) in layers {
                    if let Err(e) = texture_canvas.copy(layer, None, *dst) {
                        copy_result = Err(RenderError::Draw(e));
                        return;
                    }
                }
            })
            .map_err(|e| RenderError::Target(e.to_string()))?;

        copy_result
    }

    fn load_texture(&mut self, path: &Path) -> Result<Texture<'tc>, RenderError> {
        self.texture_creator
            .load_texture(path)
            .map_err(|e| RenderError::Load {
                path: path.to_path_buf(),
                message: e,
            })
    }

    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, color: Color, rect: Option<Rect>) -> Result<(), RenderError> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect).map_err(RenderError::Draw)
    }

    fn draw(
        &mut self,
        texture: &Texture<'tc>,
        src: Option<Rect>,
        dst: Rect,
    ) -> Result<(), RenderError> {
        self.canvas
            .copy(texture, src, dst)
            .map_err(RenderError::Draw)
    }

    fn present(&mut self) {
        self.canvas.present();
    }

    fn release(&mut self, texture: Texture<'tc>) {
        // Texture<'tc> destroys the SDL texture on drop
        drop(texture);
    }
}
