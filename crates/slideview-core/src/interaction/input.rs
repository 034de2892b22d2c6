use serde::{Deserialize, Serialize};

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

/// Pointer buttons held while an event occurs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Buttons {
    pub primary: bool,
    pub middle: bool,
    pub secondary: bool,
}

impl Buttons {
    pub const NONE: Self = Self {
        primary: false,
        middle: false,
        secondary: false,
    };
    pub const PRIMARY: Self = Self {
        primary: true,
        ..Self::NONE
    };
    pub const MIDDLE: Self = Self {
        middle: true,
        ..Self::NONE
    };
    pub const SECONDARY: Self = Self {
        secondary: true,
        ..Self::NONE
    };

    pub fn contains(&self, button: Button) -> bool {
        match button {
            Button::Primary => self.primary,
            Button::Middle => self.middle,
            Button::Secondary => self.secondary,
        }
    }

    pub fn with(mut self, button: Button) -> Self {
        match button {
            Button::Primary => self.primary = true,
            Button::Middle => self.middle = true,
            Button::Secondary => self.secondary = true,
        }
        self
    }
}

impl FromIterator<Button> for Buttons {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        iter.into_iter().fold(Buttons::NONE, Buttons::with)
    }
}

/// Keyboard modifier state. Only an exact shift chord selects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifiers {
    #[default]
    None,
    Shift,
}

/// Press, move or release of the pointer at a canvas position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub position: Point,
    pub buttons: Buttons,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(position: Point, buttons: Buttons, modifiers: Modifiers) -> Self {
        Self {
            position,
            buttons,
            modifiers,
        }
    }

    pub fn shift(&self) -> bool {
        self.modifiers == Modifiers::Shift
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WheelEvent {
    pub position: Point,
    pub delta: i32,
}
