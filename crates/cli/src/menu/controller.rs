//! The menu/output state machine.
//!
//! [`InteractionController`] owns the catalog, the executor and all UI state.
//! Events are applied one at a time; selecting an action runs it to
//! completion before the next event is looked at.

use log::{debug, info};
use quickrun_core::catalog::ActionCatalog;
use quickrun_core::execution::{ExecutionResult, Executor};

use super::state::{MenuState, OutputState};
use super::types::{MoveDirection, Flow, Line, MenuEvent, Screen};
use super::view;

pub struct InteractionController<E: Executor> {
    catalog: ActionCatalog,
    executor: E,
    screen: Screen,
    menu: MenuState,
    output: OutputState,
    height: Option<usize>,
}

impl<E: Executor> InteractionController<E> {
    /// Starts on the menu screen with the cursor on the first action.
    pub fn new(catalog: ActionCatalog, executor: E) -> Self {
        Self {
            catalog,
            executor,
            screen: Screen::Menu,
            menu: MenuState::default(),
            output: OutputState::default(),
            height: None,
        }
    }

    /// Fits rendering to a terminal `height` rows tall and scrolls the menu
    /// so the cursor stays in view.
    ///
    /// Until this is called everything is rendered.
    pub fn resize(&mut self, height: usize) {
        self.height = Some(height);
        self.scroll_to_cursor();
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.menu.cursor()
    }

    #[must_use]
    pub fn executor(&self) -> &E {
        &self.executor
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&ExecutionResult> {
        self.output.last_result()
    }

    /// Applies one event.
    ///
    /// `Quit` ends the program from the menu but only dismisses the output
    /// screen. Anything other than `Quit` is ignored on the output screen.
    pub fn handle(&mut self, event: MenuEvent) -> Flow {
        match (self.screen, event) {
            (Screen::Menu, MenuEvent::Quit) => {
                info!("Quit from menu");
                return Flow::Exit;
            }
            (Screen::Menu, MenuEvent::Up) => {
                self.menu.move_cursor(MoveDirection::Up, self.catalog.count());
                self.scroll_to_cursor();
            }
            (Screen::Menu, MenuEvent::Down) => {
                self.menu
                    .move_cursor(MoveDirection::Down, self.catalog.count());
                self.scroll_to_cursor();
            }
            (Screen::Menu, MenuEvent::Select) => self.run_selected(),
            (Screen::Output, MenuEvent::Quit) => {
                debug!("Dismissing output screen");
                self.screen = Screen::Menu;
            }
            (Screen::Output, _) => {}
        }

        Flow::Continue
    }

    fn scroll_to_cursor(&mut self) {
        if let Some(height) = self.height {
            self.menu
                .scroll_to_cursor(view::visible_actions(height), self.catalog.count());
        }
    }

    fn run_selected(&mut self) {
        let Ok(action) = self.catalog.get(self.menu.cursor()) else {
            debug!("Nothing to run, the catalog is empty");
            return;
        };

        let result = self.executor.run(action);
        self.output.store(result);
        self.screen = Screen::Output;
    }

    /// Renders the active screen.
    #[must_use]
    pub fn render(&self) -> Vec<Line> {
        match self.screen {
            Screen::Menu => view::render_menu(
                &self.catalog,
                &self.menu,
                self.height.map_or(usize::MAX, view::visible_actions),
            ),
            Screen::Output => view::render_output(self.output.last_result(), self.height),
        }
    }
}
