//! Pure rendering of the two screens into styled lines.

use std::str::Chars;

use quickrun_core::catalog::ActionCatalog;
use quickrun_core::execution::ExecutionResult;

use super::state::MenuState;
use super::types::{Line, LineStyle};

pub const MENU_TITLE: &str = "Command Menu";
pub const MENU_FOOTER: &str = "Press q to quit, enter to execute";
pub const OUTPUT_FOOTER: &str = "Press q to go back to menu";

// Title and blank line above the body, blank line and footer below it
const CHROME_ROWS: usize = 4;
const ROWS_PER_ACTION: usize = 3;

fn title(text: &str) -> Line {
    Line::new(format!(" {text} "), LineStyle::Title)
}

// CSI sequences end at the first character in `@..=~`, OSC ones at BEL or ESC.
fn skip_escape_sequence(chars: &mut Chars<'_>) {
    match chars.next() {
        Some('[') => {
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        }
        Some(']') => {
            while let Some(c) = chars.next() {
                if c == '\u{7}' {
                    break;
                }
                if c == '\u{1b}' {
                    chars.next();
                    break;
                }
            }
        }
        _ => {}
    }
}

/// Makes one line of captured output safe to print in raw mode.
///
/// Escape sequences and control characters are dropped and tabs become
/// spaces. After a carriage return only the last non-empty segment is kept,
/// which is what a terminal would have left on screen.
fn printable(line: &str) -> String {
    let line = line
        .rsplit('\r')
        .find(|segment| !segment.is_empty())
        .unwrap_or_default();

    let mut printable = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\u{1b}' => skip_escape_sequence(&mut chars),
            '\t' => printable.push_str("    "),
            c if c.is_control() => {}
            c => printable.push(c),
        }
    }
    printable
}

fn text_lines(text: &str) -> impl Iterator<Item = Line> + '_ {
    text.lines()
        .map(|line| Line::new(printable(line), LineStyle::Plain))
}

/// How many actions a menu drawn `height` rows tall has room for. Never zero.
#[must_use]
pub fn visible_actions(height: usize) -> usize {
    (height.saturating_sub(CHROME_ROWS) / ROWS_PER_ACTION).max(1)
}

/// Renders the menu: a title banner, two rows per action and a footer hint.
///
/// Only the `visible` actions starting at the menu's scroll offset are drawn.
#[must_use]
pub fn render_menu(catalog: &ActionCatalog, menu: &MenuState, visible: usize) -> Vec<Line> {
    let mut lines = vec![title(MENU_TITLE), Line::blank()];

    let shown = catalog
        .iter()
        .enumerate()
        .skip(menu.offset())
        .take(visible);
    for (index, action) in shown {
        let (marker, style) = if index == menu.cursor() {
            (">", LineStyle::SelectedItem)
        } else {
            (" ", LineStyle::Item)
        };

        lines.push(Line::new(format!("  {marker} {}  ", action.name), style));
        lines.push(Line::new(
            format!("   {}", action.description),
            LineStyle::Description,
        ));
        lines.push(Line::blank());
    }

    lines.push(Line::blank());
    lines.push(Line::new(MENU_FOOTER, LineStyle::Plain));
    lines
}

/// Renders the output screen for the most recent execution.
///
/// On failure the error line comes first and any captured output follows it.
/// With a `height`, output that does not fit ends in a line counting the
/// rows left out.
#[must_use]
pub fn render_output(result: Option<&ExecutionResult>, height: Option<usize>) -> Vec<Line> {
    let mut body = Vec::new();
    if let Some(result) = result {
        body.extend(text_lines(&result.text));
        if result.failed && !result.output.is_empty() {
            body.push(Line::blank());
            body.extend(text_lines(&result.output));
        }
    }

    if let Some(height) = height {
        let room = height.saturating_sub(CHROME_ROWS);
        if body.len() > room {
            let kept = room.saturating_sub(1);
            let hidden = body.len() - kept;
            body.truncate(kept);
            let noun = if hidden == 1 { "line" } else { "lines" };
            body.push(Line::new(
                format!("… {hidden} more {noun}"),
                LineStyle::Description,
            ));
        }
    }

    let mut lines = vec![title(result.map_or("", |result| result.title.as_str())), Line::blank()];
    lines.extend(body);
    lines.push(Line::blank());
    lines.push(Line::new(OUTPUT_FOOTER, LineStyle::Plain));
    lines
}

/// Cuts `lines` down to `height` rows, always keeping the last one (the footer).
#[must_use]
pub fn fit_to_height(lines: &[Line], height: usize) -> Vec<Line> {
    if lines.len() <= height {
        return lines.to_vec();
    }

    match height {
        0 => Vec::new(),
        1 => lines[lines.len() - 1..].to_vec(),
        _ => {
            let mut fitted = lines[..height - 1].to_vec();
            fitted.push(lines[lines.len() - 1].clone());
            fitted
        }
    }
}
