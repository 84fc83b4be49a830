//! Terminal setup and the main event loop

use crate::config::Config;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Action, Component, EventHandler, EventType};
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the TUI until the user quits, restoring the terminal afterwards
pub async fn run_app(config: Config) -> Result<()> {
    let mouse_enabled = config.ui.mouse_enabled;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(config);
    let mut event_handler = EventHandler::new();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Event loop failed: {:#}", e);
    }
    result
}

/// Draw, read one event, apply it; repeat until the app asks to quit
pub async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    terminal.draw(|f| {
        let area = f.area();
        app.render(f, area)
    })?;
    event_handler.mark_rendered();
    let mut needs_render = false;

    loop {
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area)
            })?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        let redraw = !matches!(event, EventType::Tick | EventType::Other);

        if app.handle_event(event) == Action::Quit || app.should_quit() {
            break;
        }

        // Frames held back by the cap stay pending across ticks
        needs_render |= redraw;
    }

    Ok(())
}
