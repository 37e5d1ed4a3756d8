use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use log::debug;

use super::{App, CommandAction};

// Implementation block for mouse event handling in the App.
impl App {
    /// Routes left clicks to the control registered under the pointer by the last frame.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(control) = self.controls.hit_test(event.column, event.row) {
            debug!("Click on {:?} at {}:{}", control, event.column, event.row);
            self.execute_action(CommandAction::from(control));
        }
    }
}
