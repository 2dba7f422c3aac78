use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::metrics::PlacementMetrics;
use crate::puzzle::{Position, Puzzle};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        puzzle: &Puzzle,
        seed: u64,
        show_solution: bool,
        metrics: &PlacementMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Puzzle area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], puzzle, seed, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the grid horizontally
        let grid_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let grid = self.render_grid(grid_area, puzzle, show_solution);
        frame.render_widget(grid, grid_area);

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, puzzle: &Puzzle, show_solution: bool) -> Paragraph<'_> {
        let noise = puzzle.random_fill_set();
        let mut lines = Vec::new();

        for y in 0..puzzle.grid.height() as i32 {
            let mut spans = Vec::new();

            for x in 0..puzzle.grid.width() as i32 {
                let pos = Position::new(x, y);
                let letter = puzzle.grid.get(pos).unwrap_or(' ');
                let text = format!("{letter} ");

                let cell = if !show_solution {
                    Span::styled(text, Style::default().fg(Color::White))
                } else if noise.contains(&pos) {
                    // Noise letter
                    Span::styled(text, Style::default().fg(Color::DarkGray))
                } else {
                    // Part of a placed word
                    Span::styled(
                        text,
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snakeword "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        puzzle: &Puzzle,
        seed: u64,
        metrics: &PlacementMetrics,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Words: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(
                    "{}/{}",
                    puzzle.emplaced.len(),
                    puzzle.emplaced.len() + puzzle.dropped.len()
                ),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Fill: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{:.1}%", 100.0 * puzzle.fill_fraction()),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Seed: ", Style::default().fg(Color::Yellow)),
            Span::styled(seed.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("S", Style::default().fg(Color::Green)),
            Span::raw(" solution | "),
            Span::styled("R", Style::default().fg(Color::Cyan)),
            Span::raw(" regenerate | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
