//! Interactive TUI for generating, locking and saving palettes.
//!
//! Key presses become [`Command`](crate::state::Command)s applied to a
//! [`Session`]; the session pushes results into a [`View`], which is all the
//! drawing code reads.

mod input;
mod ui;
mod view;
mod widgets;

use std::io::stdout;

use color_eyre::eyre::{Result, WrapErr};
use ratatui::{
    Terminal,
    backend::Backend,
    crossterm::ExecutableCommand,
    crossterm::event::{self, Event, KeyEventKind},
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    prelude::CrosstermBackend,
};
use rand::Rng;
use tracing::info;

use crate::clipboard::{ArboardClipboard, Clipboard};
use crate::config::AppConfig;
use crate::state::{PaletteState, Session};
use crate::store::{FileStorage, PaletteStore, Storage};

pub use input::{Action, InputState};
pub use view::View;

/// Run the interactive TUI.
pub fn run(config: &AppConfig, store: PaletteStore<FileStorage>) -> Result<()> {
    info!(path = %store.storage().path().display(), "Starting TUI");

    enable_raw_mode()?;
    let result = stdout()
        .execute(EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(stdout())))
        .wrap_err("Failed to set up terminal")
        .and_then(|mut terminal| {
            let state = PaletteState::new(config.palette.mode, config.palette.format);
            let mut session = Session::new(
                state,
                store,
                ArboardClipboard::new(),
                View::default(),
                rand::rng(),
            );
            session.start();
            event_loop(&mut terminal, &mut session)
        });

    // Restore on every path once raw mode is on
    restore_terminal()?;
    result
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn event_loop<B, S, C, G>(
    terminal: &mut Terminal<B>,
    session: &mut Session<S, C, View, G>,
) -> Result<()>
where
    B: Backend,
    S: Storage,
    C: Clipboard,
    G: Rng,
{
    let mut input = InputState::default();

    loop {
        terminal.draw(|frame| ui::draw(frame, session.render(), &input))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Messages last until the next key press
        session.render_mut().message = None;

        match input.handle(key, session.render()) {
            Action::Apply(command) => session.apply(command),
            Action::Message(message) => session.render_mut().message = Some(message),
            Action::Quit => break,
            Action::None => {}
        }
    }

    info!("Leaving TUI");
    Ok(())
}
