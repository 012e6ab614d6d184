use sdl2::ttf::Font;
use std::path::Path;

mod config;
mod error;
mod gui;
mod input_system;
mod render;
mod scene;
mod sdl_renderer;
mod text;

use config::{FontConfig, ShellConfig};
use error::ShellError;
use scene::{SceneDirector, SceneHost};
use sdl_renderer::SdlRenderer;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ShellError> {
    let config = ShellConfig::load()?;
    let start_scene = config.start_scene_id()?;

    let sdl_context = sdl2::init().map_err(ShellError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(ShellError::Sdl)?;
    let ttf_context = sdl2::ttf::init().map_err(|e| ShellError::Sdl(e.to_string()))?;

    let window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .build()
        .map_err(|e| ShellError::Sdl(e.to_string()))?;

    let mut canvas_builder = window.into_canvas().accelerated();
    if config.window.vsync {
        canvas_builder = canvas_builder.present_vsync();
    }
    let canvas = canvas_builder
        .build()
        .map_err(|e| ShellError::Sdl(e.to_string()))?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump().map_err(ShellError::Sdl)?;

    let menu_font = open_font(&ttf_context, &config.fonts.menu)?;
    let title_font = open_font(&ttf_context, &config.fonts.title)?;

    log::info!(
        "Window {}x{} ready, starting scene host",
        config.window.width,
        config.window.height
    );

    let mut renderer = SdlRenderer::new(canvas, &texture_creator, menu_font, title_font);
    let mut host = SceneHost::new(SceneDirector::new(config), start_scene);
    host.run(&mut renderer, &mut event_pump)
}

fn open_font<'ttf>(
    ttf_context: &'ttf sdl2::ttf::Sdl2TtfContext,
    font: &FontConfig,
) -> Result<Font<'ttf, 'static>, ShellError> {
    let path: &Path = &font.path;
    ttf_context
        .load_font(path, font.size)
        .map_err(|message| ShellError::Font {
            path: path.to_path_buf(),
            message,
        })
}
