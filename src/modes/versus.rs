use anyhow::{Context, Result};
use crossterm::{
    event::{
        Event, EventStream, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info};

use crate::game::GameConfig;
use crate::input::{InputHandler, KeyAction, KeyboardState};
use crate::metrics::MatchMetrics;
use crate::render::{StatusLine, TerminalVideo};
use crate::script::Director;

type Video = TerminalVideo<CrosstermBackend<Stderr>>;

/// Two players sharing one keyboard in the terminal
pub struct VersusMode {
    config: GameConfig,
    director: Director,
    metrics: MatchMetrics,
    keyboard: KeyboardState,
    input_handler: InputHandler,
    should_quit: bool,
}

impl VersusMode {
    pub fn new(config: GameConfig) -> Self {
        let director = Director::new(&config);

        Self {
            config,
            director,
            metrics: MatchMetrics::new(),
            keyboard: KeyboardState::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        // Release events let a held key keep steering across frames
        let enhanced = supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                stderr,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("Failed to enable key release events")?;
            self.keyboard = KeyboardState::with_release_events();
        }
        debug!(enhanced, "terminal ready");

        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        let mut video = TerminalVideo::new(terminal, &self.config);

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut video).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut video, enhanced)?;

        result
    }

    async fn run_game_loop(&mut self, video: &mut Video) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = Duration::from_millis(1000 / u64::from(self.config.frame_rate.max(1)));
        let mut tick_timer = interval(tick_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // One frame: input, movement, collisions, draw
                _ = tick_timer.tick() => {
                    self.update_game(video)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        match self.input_handler.handle_key_event(key) {
            KeyAction::Key(c) => self.keyboard.record(c, key.kind),
            // Shell commands fire on press only
            _ if key.kind == KeyEventKind::Release => {}
            KeyAction::Restart => self.reset_game(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self, video: &mut Video) -> Result<()> {
        self.metrics.update();
        video.set_status(self.status_line());

        self.director.tick(&self.keyboard, video)?;
        self.keyboard.end_frame();

        if let Some(winner) = self.director.state().winner() {
            self.metrics.on_round_over(winner);
        }

        Ok(())
    }

    fn status_line(&self) -> StatusLine {
        StatusLine {
            round_time: self.metrics.format_time(),
            rounds_played: self.metrics.rounds_played,
            wins: self.metrics.wins,
            game_over: self.director.state().is_game_over(),
        }
    }

    fn reset_game(&mut self) {
        self.director = Director::new(&self.config);
        self.metrics.on_round_start();
        self.keyboard.end_frame();
        info!(rounds_played = self.metrics.rounds_played, "round restarted");
    }

    fn cleanup_terminal(&mut self, video: &mut Video, enhanced: bool) -> Result<()> {
        let terminal = video.terminal_mut();
        if enhanced {
            execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
                .context("Failed to restore keyboard mode")?;
        }
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        debug!("terminal restored");
        Ok(())
    }
}
