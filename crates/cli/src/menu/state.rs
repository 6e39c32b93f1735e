use quickrun_core::execution::ExecutionResult;

use super::types::MoveDirection;

/// Tracks which action is highlighted and the first action drawn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    cursor: usize,
    offset: usize,
}

impl MenuState {
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves the cursor one row, clamped to `[0, count - 1]`.
    ///
    /// Does nothing when there are no actions.
    pub fn move_cursor(&mut self, direction: MoveDirection, count: usize) {
        if count == 0 {
            return;
        }

        self.cursor = match direction {
            MoveDirection::Up => self.cursor.saturating_sub(1),
            MoveDirection::Down => (self.cursor + 1).min(count - 1),
        };
    }

    /// Scrolls as little as possible so the cursor is among the `visible`
    /// actions drawn from `offset`.
    ///
    /// When the window grows, actions above the cursor fill it instead of
    /// empty rows below the last action.
    pub fn scroll_to_cursor(&mut self, visible: usize, count: usize) {
        let visible = visible.max(1);

        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + visible {
            self.offset = self.cursor + 1 - visible;
        }

        self.offset = self.offset.min(count.saturating_sub(visible));
    }
}

/// Holds the most recent execution for the output screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputState {
    last_result: Option<ExecutionResult>,
}

impl OutputState {
    #[must_use]
    pub fn last_result(&self) -> Option<&ExecutionResult> {
        self.last_result.as_ref()
    }

    /// Replaces the previous result.
    pub fn store(&mut self, result: ExecutionResult) {
        self.last_result = Some(result);
    }
}
