//! Raw-mode terminal front end for the wizard

use super::input;
use crate::driver::App;
use crate::materialize::Materializer;
use crate::wizard::{render, Event, Outcome, WizardState};
use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, MoveToNextLine, Show},
    event, execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, Write};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the wizard against the terminal until it exits.
///
/// Input polling blocks, so the loop lives on the blocking pool while
/// scaffolding tasks run on the runtime. Returns the outcome together with
/// the final state so the caller can print the summary or error once the
/// alternate screen is gone.
pub async fn run_interactive<M: Materializer>(mut app: App<M>) -> Result<(Outcome, WizardState)> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
        restore_terminal();
        return Err(e).context("Failed to enter the alternate screen");
    }

    let joined = tokio::task::spawn_blocking(move || {
        let mut stdout = io::stdout();
        let result = event_loop(&mut app, &mut stdout);
        (result, app)
    })
    .await;

    restore_terminal();

    let (result, app) = joined.context("Terminal event loop panicked")?;
    result.map(|outcome| (outcome, app.into_state()))
}

fn event_loop<M: Materializer>(app: &mut App<M>, out: &mut impl Write) -> Result<Outcome> {
    let mut screen = Screen::default();

    loop {
        screen.draw(out, app.state())?;

        // Scaffolding results arrive between keystrokes
        while let Some(completion) = app.try_completion() {
            if let Some(outcome) = app.dispatch(completion) {
                return Ok(outcome);
            }
            screen.draw(out, app.state())?;
        }

        if event::poll(POLL_INTERVAL)? {
            let raw = event::read()?;
            if let Some(ev) = input::translate(app.state(), &raw) {
                if matches!(ev, Event::Resize { .. }) {
                    screen.invalidate();
                }
                if let Some(outcome) = app.dispatch(ev) {
                    return Ok(outcome);
                }
            }
        }
    }
}

/// Last frame written to the terminal
#[derive(Debug, Default)]
struct Screen {
    last_frame: Option<String>,
}

impl Screen {
    /// Write the frame for `state` unless it is already on screen.
    /// Returns whether anything was written.
    fn draw(&mut self, out: &mut impl Write, state: &WizardState) -> Result<bool> {
        let frame = render(state);
        if self.last_frame.as_deref() == Some(frame.as_str()) {
            return Ok(false);
        }

        queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
        for line in frame.lines() {
            queue!(out, Print(line), MoveToNextLine(1))?;
        }
        out.flush()?;

        self.last_frame = Some(frame);
        Ok(true)
    }

    /// Force the next `draw` to repaint
    fn invalidate(&mut self) {
        self.last_frame = None;
    }
}

/// Leave raw mode and the alternate screen. Safe to call more than once.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}
