use std::io::{stdout, Stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, DisableLineWrap, EnableLineWrap,
    EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use log::debug;
use quickrun_core::error::Result;
use quickrun_core::execution::Executor;

use super::controller::InteractionController;
use super::input::map_key_event;
use super::theme::{Paint, Theme};
use super::types::{Flow, Line};
use super::view::fit_to_height;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Restore the terminal on every exit path
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(EnableLineWrap);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

fn write_line(stdout: &mut Stdout, line: &Line, paint: &Paint) -> Result<()> {
    if paint.bold {
        queue!(stdout, SetAttribute(Attribute::Bold))?;
    }

    queue!(
        stdout,
        SetForegroundColor(paint.foreground.unwrap_or(Color::Reset)),
        SetBackgroundColor(paint.background.unwrap_or(Color::Reset)),
        Print(&line.text),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Color::Reset),
        SetForegroundColor(Color::Reset),
    )?;

    Ok(())
}

fn redraw_ui(lines: &[Line], theme: &Theme) -> Result<()> {
    let mut stdout = stdout();
    let (_, height) = terminal::size()?;

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    for (row, line) in fit_to_height(lines, height as usize).iter().enumerate() {
        queue!(stdout, MoveTo(0, row as u16))?;
        write_line(&mut stdout, line, theme.paint_for(line.style))?;
    }

    stdout.flush()?;
    Ok(())
}

/// Runs the menu until the user quits from the menu screen.
///
/// Takes over the terminal (alternate screen, raw mode) for the duration and
/// restores it when returning, including on error.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, read from or drawn to.
pub fn run_menu<E: Executor>(
    controller: &mut InteractionController<E>,
    theme: &Theme,
) -> Result<()> {
    let mut stdout = stdout();

    stdout.execute(EnterAlternateScreen)?;
    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, the terminal is restored
    enable_raw_mode()?;
    stdout.execute(cursor::Hide)?;
    stdout.execute(DisableLineWrap)?;

    let (_, height) = terminal::size()?;
    controller.resize(height as usize);

    loop {
        redraw_ui(&controller.render(), theme)?;

        match event::read()? {
            Event::Key(key_event) => {
                let Some(menu_event) = map_key_event(&key_event) else {
                    continue;
                };

                if controller.handle(menu_event) == Flow::Exit {
                    return Ok(());
                }
            }
            Event::Resize(width, height) => {
                debug!("Terminal resized to {width}x{height}");
                controller.resize(height as usize);
            }
            _ => {}
        }
    }
}
