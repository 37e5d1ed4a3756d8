//! Defines the core state of the explorer session.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::components::status_bar::StatusMessage;
use crate::definitions::{ControlKind, ControlRegistry};
use crate::event::Event;
use crate::preferences::Preferences;

/// The main application state.
///
/// Language and theme live only in `preferences`; everything drawn on screen
/// is derived from them at render time.
pub struct App {
    /// Flag to indicate if the application should keep running.
    pub running: bool,
    /// Session language and theme stores.
    pub preferences: Preferences,
    /// Clickable regions registered by the last frame.
    pub controls: ControlRegistry,
    /// Size of the last drawn frame.
    pub viewport: Rect,
    /// Explicit sidebar choice. `None` follows the terminal width.
    pub sidebar_override: Option<bool>,
    /// Sidebar entry picked last, highlighted until a new query starts.
    pub selection: Option<ControlKind>,
    /// The message currently displayed in the status line.
    pub status: StatusMessage,
    /// Year printed in the footer.
    pub year: i32,

    pub(crate) sidebar_min_width: u16,
    pub(crate) status_timeout: Duration,
    pub(crate) tick_rate: Duration,
    pub(crate) status_set_at: Option<Instant>,
    pub(crate) needs_redraw: Rc<Cell<bool>>,
}

impl App {
    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_override
            .unwrap_or(self.viewport.width >= self.sidebar_min_width)
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    /// Returns whether a redraw is pending and clears the request.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    pub(crate) fn set_status(&mut self, status: StatusMessage) {
        self.status = status;
        self.status_set_at = Some(Instant::now());
        self.request_redraw();
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Tick => self.on_tick(),
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(..) => self.request_redraw(),
        }
    }
}
