//! Application main loop
//!
//! Each iteration: render the current model, drain any backend results
//! that arrived through the channel, then poll the terminal for input
//! (100 ms timeout) and feed the resulting message to the update layer.
//!
//! Backend results re-enter the loop as ordinary messages, so all state
//! mutation happens on this single thread.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::QuoteService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the application main loop
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    service: &QuoteService,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. Render the UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. Check whether we should quit
        if app.should_quit {
            break;
        }

        // 3. Drain backend results that resolved since the last pass
        while let Ok(msg) = rx.try_recv() {
            update::update(app, service, msg);
        }

        // 4. Poll for input (100 ms timeout)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. Translate the event and update the model
            let msg = event::handle_event(event, app);
            update::update(app, service, msg);
        }
    }

    Ok(())
}
