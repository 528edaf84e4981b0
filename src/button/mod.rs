use serde::{Deserialize, Serialize};

pub const NUM_BUTTONS: usize = 4;

/// A single selectable, colorable light on the display surface.
///
/// Identity is positional: a button is known by its index in the owning store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub x: i32,
    pub y: i32,
    pub color: String,
}

impl Button {
    pub fn new(x: i32, y: i32, color: &str) -> Button {
        Button {
            x,
            y,
            color: color.to_string(),
        }
    }
}

/// The layout every new session starts with, one light per corner.
pub fn default_layout() -> Vec<Button> {
    vec![
        Button::new(-10, 10, "red"),
        Button::new(10, 10, "green"),
        Button::new(10, -10, "blue"),
        Button::new(-10, -10, "yellow"),
    ]
}
