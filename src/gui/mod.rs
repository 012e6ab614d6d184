//! Screen-Space GUI
//!
//! UI components drawn at fixed screen positions. Each one is also a scene,
//! so the scene host can show it full-screen.
//!
//! # Available Components
//!
//! - [`Menu`] - vertical list of labels with keyboard selection
//!
//! # Example Usage
//!
//! ```ignore
//! let mut menu = Menu::new();
//! menu.add("Play", "game");
//! menu.add("Quit", "exit");
//!
//! menu.init(&mut ctx)?;
//! menu.handle_event(&InputEvent::KeyDown(Key::Down));
//! menu.handle_event(&InputEvent::KeyDown(Key::Confirm));
//! assert_eq!(menu.update(), Some("exit".to_string()));
//! menu.destroy(&mut ctx);
//! ```

pub mod menu;

pub use menu::{Menu, MenuStyle};
