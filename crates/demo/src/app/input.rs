//! Keyboard bindings.
//!
//! | Key | Action                |
//! |-----|-----------------------|
//! | W/S | camera +Z / -Z        |
//! | A/D | camera -X / +X        |
//! | Q/E | camera -Y / +Y        |
//! | I   | toggle rain           |
//! | Esc | quit                  |

use super::camera::CameraMove;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    I,
    Escape,
    Other,
}

/// What a key press asks the scheduler to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    MoveCamera(CameraMove),
    ToggleRain,
    Quit,
}

impl Key {
    /// Case-insensitive letter lookup.
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'w' => Key::W,
            'a' => Key::A,
            's' => Key::S,
            'd' => Key::D,
            'q' => Key::Q,
            'e' => Key::E,
            'i' => Key::I,
            '\u{1b}' => Key::Escape,
            _ => Key::Other,
        }
    }

    pub fn action(self) -> Option<Action> {
        match self {
            Key::W => Some(Action::MoveCamera(CameraMove::Forward)),
            Key::S => Some(Action::MoveCamera(CameraMove::Back)),
            Key::A => Some(Action::MoveCamera(CameraMove::Left)),
            Key::D => Some(Action::MoveCamera(CameraMove::Right)),
            Key::Q => Some(Action::MoveCamera(CameraMove::Down)),
            Key::E => Some(Action::MoveCamera(CameraMove::Up)),
            Key::I => Some(Action::ToggleRain),
            Key::Escape => Some(Action::Quit),
            Key::Other => None,
        }
    }
}
