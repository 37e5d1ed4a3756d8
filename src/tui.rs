//! Terminal setup for the interactive session.

use std::io::{self, Stdout, Write, stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enters the alternate screen with mouse capture and raw mode.
///
/// When a step fails, the steps already taken are undone before the error is
/// returned, so the shell is never left in raw mode.
pub fn init() -> io::Result<Tui> {
    let terminal = enter().and_then(|()| Terminal::new(CrosstermBackend::new(stdout())));
    match terminal {
        Ok(terminal) => {
            install_panic_hook();
            Ok(terminal)
        }
        Err(err) => {
            let _ = restore();
            Err(err)
        }
    }
}

fn enter() -> io::Result<()> {
    let mut out = stdout();
    out.execute(EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    enable_raw_mode()
}

/// Leaves raw mode and the alternate screen. Every step is attempted; the
/// first failure is reported.
pub fn restore() -> io::Result<()> {
    let raw = disable_raw_mode();
    raw.and(leave(&mut stdout()))
}

fn leave<W: Write>(out: &mut W) -> io::Result<()> {
    let mouse = out.execute(DisableMouseCapture).map(drop);
    let screen = out.execute(LeaveAlternateScreen).map(drop);
    mouse.and(screen)
}

// Leave the alternate screen before the panic message is printed.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous(info);
    }));
}
