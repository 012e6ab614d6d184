//! Label Baking
//!
//! A menu label is shown in one of two colors depending on whether it is
//! selected. Instead of rasterizing text every frame, both variants are baked
//! once into a single texture:
//!
//! ```text
//! +-----------------+  y = 0
//! |  Play (normal)  |
//! +-----------------+  y = label_height
//! |  Play (bright)  |
//! +-----------------+  y = 2 * label_height
//! ```
//!
//! Rendering then selects a half with a source rectangle.

use crate::error::RenderError;
use crate::render::{FontStyle, RenderContext};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Colors used when baking a label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelColors {
    pub background: Color,
    pub normal: Color,
    pub highlighted: Color,
}

/// Bakes `text` into a two-row texture (normal above highlighted).
///
/// The baked texture is as wide as the rasterized label and exactly
/// `2 * label_height` tall. The intermediate single-color textures are
/// released on every path; the baked texture is only returned on success.
pub fn bake_label<R: RenderContext>(
    ctx: &mut R,
    text: &str,
    colors: LabelColors,
    label_height: u32,
) -> Result<R::Texture, RenderError> {
    let normal = ctx.text_texture(text, colors.normal, FontStyle::Menu)?;
    let highlighted = match ctx.text_texture(text, colors.highlighted, FontStyle::Menu) {
        Ok(texture) => texture,
        Err(e) => {
            ctx.release(normal);
            return Err(e);
        }
    };

    let result = compose_rows(ctx, &normal, &highlighted, colors.background, label_height);

    ctx.release(highlighted);
    ctx.release(normal);
    result
}

fn compose_rows<R: RenderContext>(
    ctx: &mut R,
    normal: &R::Texture,
    highlighted: &R::Texture,
    background: Color,
    label_height: u32,
) -> Result<R::Texture, RenderError> {
    let (normal_w, normal_h) = ctx.texture_size(normal);
    let (highlighted_w, highlighted_h) = ctx.texture_size(highlighted);
    let width = normal_w.max(highlighted_w).max(1);

    let mut baked = ctx.target_texture(width, label_height.max(1) * 2)?;

    let layers = [
        (normal, Rect::new(0, 0, normal_w, normal_h)),
        (
            highlighted,
            Rect::new(0, label_height as i32, highlighted_w, highlighted_h),
        ),
    ];

    match ctx.compose(&mut baked, background, &layers) {
        Ok(()) => Ok(baked),
        Err(e) => {
            ctx.release(baked);
            Err(e)
        }
    }
}
