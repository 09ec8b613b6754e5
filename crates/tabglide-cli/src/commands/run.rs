use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tabglide_core::AppConfig;
use tabglide_tui::{AppEvent, EventHandler};

use crate::app::{App, Screen};

pub fn run(config: AppConfig, screen: Screen) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Tabglide")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.motion.animation_fps);

    let mut app = App::new(config, screen);

    // Track if we need high frame rate for glide animations
    // This is checked at the END of each iteration to determine NEXT iteration's tick rate
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Advance page strip and bar animations
        app.tick();

        // Draw UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events (use faster tick rate while something is gliding)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => app.handle_key(key),
                AppEvent::Mouse(mouse) => app.handle_mouse(&mouse),
                AppEvent::Resize(_, _) => {
                    // Widgets re-anchor from the new area on the next draw
                }
                AppEvent::Tick => {}
            }
        }

        // Update fast update flag for next iteration
        // This ensures we keep animating at full rate right after input
        needs_fast_update = app.needs_motion_update();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
