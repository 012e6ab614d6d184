use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Keys the shell reacts to
///
/// Everything else on the keyboard collapses into `Other` so scenes only
/// ever match on a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    /// Return or keypad Enter
    Confirm,
    Space,
    Escape,
    /// `Q`, leaves the game from any scene
    QuitKey,
    Other,
}

impl Key {
    fn from_keycode(keycode: Keycode) -> Self {
        match keycode {
            Keycode::Up => Key::Up,
            Keycode::Down => Key::Down,
            Keycode::Return | Keycode::KpEnter => Key::Confirm,
            Keycode::Space => Key::Space,
            Keycode::Escape => Key::Escape,
            Keycode::Q => Key::QuitKey,
            _ => Key::Other,
        }
    }
}

/// Input events consumed by the scene host and scenes
///
/// This decouples scenes from raw SDL2 events: a scene can be driven in a
/// test by handing it `InputEvent`s directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close button or OS quit request
    Quit,
    KeyDown(Key),
}

impl InputEvent {
    /// Translates an SDL2 event, dropping the ones the shell ignores
    pub fn from_sdl(event: &Event) -> Option<Self> {
        match event {
            Event::Quit { .. } => Some(InputEvent::Quit),
            Event::KeyDown {
                keycode: Some(keycode),
                ..
            } => Some(InputEvent::KeyDown(Key::from_keycode(*keycode))),
            _ => None,
        }
    }

    /// True for events that end the program regardless of the active scene
    pub fn is_quit_request(&self) -> bool {
        matches!(
            self,
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) | InputEvent::KeyDown(Key::QuitKey)
        )
    }
}

/// Non-blocking source of input events
///
/// `poll()` returns at most one event and never waits; `None` means nothing
/// usable was pending this frame.
pub trait EventSource {
    fn poll(&mut self) -> Option<InputEvent>;
}

impl EventSource for EventPump {
    fn poll(&mut self) -> Option<InputEvent> {
        self.poll_event().and_then(|event| InputEvent::from_sdl(&event))
    }
}
