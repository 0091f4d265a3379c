use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, Environment, GameOverReason, Status};
use crate::metrics::GameMetrics;
use crate::modes::PlaybackSpeed;

/// Driver state shown alongside the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackView {
    pub paused: bool,
    pub speed: PlaybackSpeed,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        env: &Environment,
        metrics: &GameMetrics,
        view: PlaybackView,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(env, metrics, view);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match env.status() {
            Status::Running => frame.render_widget(self.render_grid(env), game_area),
            Status::GameOver(reason) => {
                frame.render_widget(self.render_game_over(env, reason), game_area)
            }
        }

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, env: &Environment) -> Paragraph<'_> {
        let size = env.config().grid_size as i32;
        let head = env.agent().position();
        let mut lines = Vec::with_capacity(env.config().grid_size);

        for row in 0..size {
            let mut spans = Vec::with_capacity(env.config().grid_size);

            for col in 0..size {
                let cell = Cell::new(row, col);

                let span = if cell == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if env.body().contains(cell) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if cell == env.food() {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" A* Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        env: &Environment,
        metrics: &GameMetrics,
        view: PlaybackView,
    ) -> Paragraph<'_> {
        let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Yellow));
        let value = |text: String| Span::styled(text, Style::default().fg(Color::White));

        let playback = if view.paused {
            Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            value(view.speed.as_str().to_string())
        };

        let text = vec![
            Line::from(vec![
                label("Score: "),
                Span::styled(
                    env.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                label("Moves: "),
                value(env.moves().to_string()),
                Span::raw("    "),
                label("Food: "),
                value(env.food_collected().to_string()),
            ]),
            Line::from(vec![
                label("Best: "),
                value(metrics.format_best_score()),
                Span::raw("    "),
                label("Games: "),
                value(metrics.games_played.to_string()),
                Span::raw("    "),
                label("Time: "),
                value(metrics.format_time()),
                Span::raw("    "),
                label("Speed: "),
                playback,
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, env: &Environment, reason: GameOverReason) -> Paragraph<'_> {
        let headline = match reason {
            GameOverReason::NoMove => "GAME OVER",
            GameOverReason::BoardFull => "BOARD FULL",
        };
        let summary = env.summary();
        let stat = |name: &'static str, figure: String| {
            Line::from(vec![
                Span::styled(name, Style::default().fg(Color::Yellow)),
                Span::styled(
                    figure,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                headline,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            stat("Final Score: ", summary.score.to_string()),
            stat("Food collected: ", summary.food_collected.to_string()),
            stat("Moves made: ", summary.moves.to_string()),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" pause | "),
            Span::styled("1-4", Style::default().fg(Color::Cyan)),
            Span::raw(" speed | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
