use std::env;

use anyhow::{Context, Result};
use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures_util::StreamExt;
use log::{error, info};

use danstat::app::App;
use danstat::cli::{CliOptions, USAGE};
use danstat::config::Settings;
use danstat::event::Event;
use danstat::{logging, tui, ui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let options = CliOptions::parse(env::args().skip(1))?;
    if options.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut settings = Settings::load(&options.config_path())?;
    options.apply(&mut settings);

    if let Some((width, height)) = options.snapshot {
        logging::init_stderr_logging(&settings.logging.level)?;
        let mut app = App::new(settings);
        let frame = ui::snapshot(&mut app, width, height).context("failed to render snapshot")?;
        println!("{}", frame);
        return Ok(());
    }

    logging::init_file_logging(&settings.logging)?;
    info!("Starting Danish Statistics Explorer");
    let mut app = App::new(settings);

    let mut terminal = tui::init().context("failed to initialize terminal")?;
    let result = run(&mut terminal, &mut app).await;
    tui::restore().context("failed to restore terminal")?;

    if let Err(err) = &result {
        error!("Session ended with an error: {:#}", err);
    } else {
        info!("Session ended");
    }
    result
}

async fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    let mut stream = EventStream::new();
    let mut interval = tokio::time::interval(app.tick_rate());

    while app.running {
        // Frames are only drawn when a store notified or the screen changed.
        if app.take_redraw() {
            terminal.draw(|frame| ui::render(frame, app))?;
        }

        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => Event::Mouse(mouse),
                    Some(Ok(CrosstermEvent::Resize(width, height))) => Event::Resize(width, height),
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => return Err(err).context("failed to read terminal event"),
                    None => break,
                }
            }
        };

        app.handle_event(event);
    }
    Ok(())
}
