//! Type definitions for the menu and its screens.
//!
//! This module defines the events the controller reacts to, the screens it
//! can show and the styled lines rendering produces.

/// Which of the two screens is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Output,
}

/// A keyboard input the controller understands.
///
/// `Quit` exits the program on the menu screen but only dismisses the output
/// screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Quit,
    Up,
    Down,
    Select,
}

/// Direction to move the cursor in the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Whether the event loop should keep going after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Visual state of a rendered line, mapped to colors by the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Item,
    SelectedItem,
    Description,
    Plain,
}

/// One rendered row of the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    #[must_use]
    pub fn blank() -> Self {
        Self::new(String::new(), LineStyle::Plain)
    }
}
