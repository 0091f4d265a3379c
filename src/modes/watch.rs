//! Terminal mode for watching the snake play itself
//!
//! The board advances on a fixed-rate tick and is redrawn at 30 FPS. The
//! simulation itself never looks at the clock, so pausing or changing speed
//! only changes when ticks happen, never what they do.
//!
//! # Controls
//!
//! - Space: Pause/unpause
//! - R: Restart
//! - 1-4: Speed control (1=slow, 2=configured rate, 3=fast, 4=very fast)
//! - Q/Esc: Quit

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Interval, interval};
use tracing::info;

use crate::game::{Environment, GameConfig, GameSummary};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{PlaybackView, Renderer};

/// Playback speed settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackSpeed {
    /// 2 Hz
    Slow,
    /// The configured tick rate
    Normal,
    /// 20 Hz
    Fast,
    /// 60 Hz
    VeryFast,
}

impl PlaybackSpeed {
    /// Get the tick interval for this speed
    pub fn tick_interval(&self, base_rate_hz: u32) -> Duration {
        match self {
            Self::Slow => Duration::from_millis(500),
            Self::Normal => Duration::from_millis(1000 / u64::from(base_rate_hz.max(1))),
            Self::Fast => Duration::from_millis(50),
            Self::VeryFast => Duration::from_millis(16),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
            Self::VeryFast => "Very Fast",
        }
    }
}

pub struct WatchMode {
    env: Environment,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    paused: bool,
    speed: PlaybackSpeed,
}

impl WatchMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let env = Environment::new(config).context("Failed to create environment")?;

        Ok(Self {
            env,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            paused: false,
            speed: PlaybackSpeed::Normal,
        })
    }

    /// Run until the user quits and return the summary of the last game
    pub async fn run(&mut self) -> Result<GameSummary> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result.map(|()| self.env.summary())
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_interval());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut tick_timer)?;
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if !self.paused && self.env.is_running() {
                        self.update_game();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    if self.env.is_running() {
                        self.metrics.update();
                    }
                    let view = PlaybackView { paused: self.paused, speed: self.speed };
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.env, &self.metrics, view);
                    }).context("Failed to draw frame")?;
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

    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::TogglePause => {
                    self.paused = !self.paused;
                }
                KeyAction::SetSpeed(speed) => {
                    self.speed = speed;
                    tick_timer.reset_after(self.tick_interval());
                }
                KeyAction::Restart => {
                    self.reset_game()?;
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn update_game(&mut self) {
        let outcome = self.env.tick();

        // Track game over
        if outcome.terminal {
            self.metrics.on_game_over(self.env.summary());
        }
    }

    fn reset_game(&mut self) -> Result<()> {
        // A game abandoned mid-run still counts toward the session
        if self.env.is_running() && self.env.moves() > 0 {
            self.metrics.on_game_over(self.env.summary());
        }
        self.env.reset().context("Failed to restart game")?;
        self.metrics.on_game_start();
        info!(games_played = self.metrics.games_played, "Game restarted");
        Ok(())
    }

    fn tick_interval(&self) -> Duration {
        self.speed.tick_interval(self.env.config().tick_rate_hz)
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_speed() {
        assert_eq!(PlaybackSpeed::Slow.tick_interval(10), Duration::from_millis(500));
        assert_eq!(PlaybackSpeed::Normal.tick_interval(10), Duration::from_millis(100));
        assert_eq!(PlaybackSpeed::Normal.tick_interval(8), Duration::from_millis(125));
        assert_eq!(PlaybackSpeed::Fast.tick_interval(10), Duration::from_millis(50));
        assert_eq!(PlaybackSpeed::VeryFast.tick_interval(10), Duration::from_millis(16));
    }

    #[test]
    fn test_watch_initialization() {
        let mode = WatchMode::new(GameConfig::default().with_seed(1)).unwrap();
        assert!(mode.env.is_running());
        assert_eq!(mode.env.score(), 0);
        assert!(!mode.paused);
        assert_eq!(mode.speed, PlaybackSpeed::Normal);
    }

    #[test]
    fn test_game_reset() {
        let mut mode = WatchMode::new(GameConfig::small().with_seed(2)).unwrap();
        for _ in 0..5 {
            mode.update_game();
        }

        mode.reset_game().unwrap();

        assert!(mode.env.is_running());
        assert_eq!(mode.env.score(), 0);
        assert_eq!(mode.env.moves(), 0);
        assert_eq!(mode.metrics.games_played, 1);
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(WatchMode::new(GameConfig::new(1)).is_err());
    }
}
