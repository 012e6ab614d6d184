//! Scenes
//!
//! A scene is one screen of the game (title, menu, game) with its own
//! lifecycle. The `SceneHost` owns exactly one active scene at a time and
//! swaps it when the scene asks for a transition.
//!
//! # Architecture
//!
//! - `Scene` trait: the five operations every scene provides
//! - `AnyScene` enum: the concrete scenes behind one type, dispatched by `match`
//! - `SceneDirector`: builds a scene from its identifier and the shell config
//! - `SceneHost` (in `host`): the main-loop state machine

pub mod game;
pub mod host;
pub mod title;

pub use game::GameScene;
pub use host::SceneHost;
pub use title::TitleScene;

use crate::config::ShellConfig;
use crate::error::{RenderError, ShellError};
use crate::gui::{Menu, MenuStyle};
use crate::input_system::InputEvent;
use crate::render::RenderContext;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// The five operations the host drives a scene through.
///
/// `update` runs every frame, with or without input, and must be cheap when
/// nothing changed.
pub trait Scene<R: RenderContext> {
    /// Acquires the scene's resources. Called once, before any render.
    fn init(&mut self, ctx: &mut R) -> Result<(), RenderError>;

    /// Draws one frame. Does not present.
    fn render(&mut self, ctx: &mut R) -> Result<(), RenderError>;

    fn handle_event(&mut self, event: &InputEvent);

    /// Returns the destination to switch to, if any. Each request is returned once.
    fn update(&mut self) -> Option<String>;

    /// Releases everything `init` acquired, including after a failed `init`.
    fn destroy(&mut self, ctx: &mut R);
}

/// Identifier of a buildable scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Title,
    Menu,
    Game,
}

impl SceneId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneId::Title => "title",
            SceneId::Menu => "menu",
            SceneId::Game => "game",
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a transition request leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Scene(SceneId),
    Exit,
}

impl Destination {
    /// Sentinel destination that ends the program
    pub const EXIT: &'static str = "exit";
}

impl FromStr for Destination {
    type Err = ShellError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "title" => Ok(Destination::Scene(SceneId::Title)),
            "menu" => Ok(Destination::Scene(SceneId::Menu)),
            "game" => Ok(Destination::Scene(SceneId::Game)),
            Destination::EXIT => Ok(Destination::Exit),
            unknown => Err(ShellError::UnknownScene(unknown.to_string())),
        }
    }
}

/// Builds scenes by identifier
pub trait SceneFactory<R: RenderContext> {
    type Scene: Scene<R>;

    fn build(&mut self, id: SceneId) -> Self::Scene;
}

/// Every concrete scene behind one type
///
/// An enum keeps the set of scenes closed: adding a variant makes every
/// `match` below fail to compile until it is handled.
pub enum AnyScene<T> {
    Title(TitleScene<T>),
    Menu(Menu<T>),
    Game(GameScene<T>),
}

impl<R: RenderContext> Scene<R> for AnyScene<R::Texture> {
    fn init(&mut self, ctx: &mut R) -> Result<(), RenderError> {
        match self {
            AnyScene::Title(scene) => scene.init(ctx),
            AnyScene::Menu(scene) => scene.init(ctx),
            AnyScene::Game(scene) => scene.init(ctx),
        }
    }

    fn render(&mut self, ctx: &mut R) -> Result<(), RenderError> {
        match self {
            AnyScene::Title(scene) => scene.render(ctx),
            AnyScene::Menu(scene) => scene.render(ctx),
            AnyScene::Game(scene) => scene.render(ctx),
        }
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match self {
            AnyScene::Title(scene) => Scene::<R>::handle_event(scene, event),
            AnyScene::Menu(scene) => Scene::<R>::handle_event(scene, event),
            AnyScene::Game(scene) => Scene::<R>::handle_event(scene, event),
        }
    }

    fn update(&mut self) -> Option<String> {
        match self {
            AnyScene::Title(scene) => Scene::<R>::update(scene),
            AnyScene::Menu(scene) => Scene::<R>::update(scene),
            AnyScene::Game(scene) => Scene::<R>::update(scene),
        }
    }

    fn destroy(&mut self, ctx: &mut R) {
        match self {
            AnyScene::Title(scene) => scene.destroy(ctx),
            AnyScene::Menu(scene) => scene.destroy(ctx),
            AnyScene::Game(scene) => scene.destroy(ctx),
        }
    }
}

/// Builds the game's scenes from the shell configuration
pub struct SceneDirector {
    config: ShellConfig,
}

impl SceneDirector {
    pub fn new(config: ShellConfig) -> Self {
        SceneDirector { config }
    }
}

impl<R: RenderContext> SceneFactory<R> for SceneDirector {
    type Scene = AnyScene<R::Texture>;

    fn build(&mut self, id: SceneId) -> AnyScene<R::Texture> {
        match id {
            SceneId::Title => AnyScene::Title(TitleScene::new()),
            SceneId::Menu => {
                let style = MenuStyle {
                    label_spacing: self.config.menu.label_spacing,
                    ..MenuStyle::default()
                };
                let mut menu = Menu::with_style(style);
                for item in &self.config.menu.items {
                    menu.add(item.label.as_str(), item.destination.as_str());
                }
                AnyScene::Menu(menu)
            }
            SceneId::Game => {
                let game = &self.config.game;
                AnyScene::Game(GameScene::new(
                    Duration::from_millis(game.return_delay_ms),
                    game.scroll_speed,
                    game.tile_size,
                    game.background_image.clone(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::FakeRenderer;

    #[test]
    fn test_destination_parsing() {
        assert_eq!("menu".parse::<Destination>().unwrap(), Destination::Scene(SceneId::Menu));
        assert_eq!("game".parse::<Destination>().unwrap(), Destination::Scene(SceneId::Game));
        assert_eq!("title".parse::<Destination>().unwrap(), Destination::Scene(SceneId::Title));
        assert_eq!("exit".parse::<Destination>().unwrap(), Destination::Exit);
    }

    #[test]
    fn test_unknown_destination() {
        let err = "scores".parse::<Destination>().unwrap_err();
        assert!(matches!(err, ShellError::UnknownScene(name) if name == "scores"));
        assert!("".parse::<Destination>().is_err());
        assert!("Menu".parse::<Destination>().is_err());
    }

    #[test]
    fn test_scene_id_round_trips_through_display() {
        for id in [SceneId::Title, SceneId::Menu, SceneId::Game] {
            assert_eq!(id.to_string().parse::<Destination>().unwrap(), Destination::Scene(id));
        }
    }

    #[test]
    fn test_director_builds_menu_from_config() {
        let mut director = SceneDirector::new(ShellConfig::default());
        let scene = SceneFactory::<FakeRenderer>::build(&mut director, SceneId::Menu);

        match scene {
            AnyScene::Menu(menu) => {
                let labels: Vec<&str> = menu.items().iter().map(|i| i.label.as_str()).collect();
                assert_eq!(labels, vec!["Play", "Quit"]);
            }
            _ => panic!("expected a menu scene"),
        }
    }
}
