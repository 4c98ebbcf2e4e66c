use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::{mpsc, watch};
use tracing::{error, info, warn};

use carousel_core::{AppConfig, ChannelHost, Error, PageController, PageLayout, ScrollSyncBridge};
use carousel_tui::{
    app::{demo_slides, App},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    scroll::TerminalScrollView,
    widgets::{CarouselWidget, IndicatorWidget, StatusBarWidget},
};

/// Fold command-line flags into the loaded configuration
pub fn apply_overrides(
    mut config: AppConfig,
    items: Option<usize>,
    looping: bool,
    autoplay: bool,
) -> AppConfig {
    if let Some(items) = items {
        config.ui.item_count = items;
    }
    if looping {
        config.carousel.loop_enabled = true;
    }
    if autoplay {
        config.carousel.auto_play = true;
        if !config.carousel.loop_enabled {
            warn!("--autoplay needs looping, enabling --loop");
            config.carousel.loop_enabled = true;
        }
    }
    config
}

/// Turn looping off when the padding does not fit the dataset
pub fn fit_loop_padding(mut config: AppConfig, item_count: usize) -> AppConfig {
    if let Err(e @ Error::InvalidPadding { .. }) = PageLayout::build(&config.carousel, item_count) {
        error!("{}, looping disabled", e);
        config.carousel.loop_enabled = false;
    }
    config
}

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);
    let slides = demo_slides(config.ui.item_count);
    let config = Arc::new(fit_loop_padding((*config).clone(), slides.len()));

    // Page engine on its own task, terminal host on this one
    let (host, host_rx) = ChannelHost::new();
    let mut controller = PageController::new(
        config.carousel.clone(),
        config.timing.clone(),
        slides.len(),
        host,
    )?;
    let (page_tx, page_rx) = mpsc::unbounded_channel();
    controller.set_on_page_change(Box::new(move |page| {
        info!(page, "Page changed");
        let _ = page_tx.send(page);
    }));
    let layout = controller.layout();
    let (bridge, sender, handle) = ScrollSyncBridge::new(controller);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let bridge_task = tokio::spawn(bridge.run(shutdown_rx));

    let view = TerminalScrollView::new(host_rx, sender, config.scroll.clone(), layout);
    let mut app = App::new(Arc::clone(&config), slides, handle, view, page_rx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Carousel"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &keymap, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let _ = shutdown_tx.send(true);
    bridge_task.await?;
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    keymap: &Keymap,
    config: &AppConfig,
) -> Result<()> {
    let event_handler = EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.scroll.animation_fps);
    let mut needs_fast_update = false;

    loop {
        app.tick();

        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(5),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(frame.area());

            CarouselWidget::render(frame, chunks[0], app);
            IndicatorWidget::render(frame, chunks[1], app);
            StatusBarWidget::render(frame, chunks[2], app);
        })?;

        // Faster polling while the content or the indicator is moving
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, keymap);
                    app.handle_action(action)?;
                }
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        // Autoplay and jumps arrive from the bridge without a key press
        needs_fast_update = app.needs_fast_update() || app.autoplay;

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autoplay_flag_enables_loop() {
        let config = apply_overrides(AppConfig::default(), Some(7), false, true);
        assert_eq!(config.ui.item_count, 7);
        assert!(config.carousel.loop_enabled);
        assert!(config.carousel.autoplay_enabled());
    }

    #[test]
    fn test_oversized_padding_disables_loop() {
        let config = apply_overrides(AppConfig::default(), Some(3), true, false);
        let config = fit_loop_padding(config, 3);
        assert!(!config.carousel.loop_enabled);

        let config = apply_overrides(AppConfig::default(), Some(5), true, false);
        assert!(fit_loop_padding(config, 5).carousel.loop_enabled);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let config = apply_overrides(AppConfig::default(), None, false, false);
        assert_eq!(config.ui.item_count, 5);
        assert!(!config.carousel.loop_enabled);
    }
}
