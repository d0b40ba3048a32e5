use anyhow::{Context, Result};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::VideoService;
use crate::game::{self, Actor, GameConfig, Player};

/// Everything shown around the arena that is not an actor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub round_time: String,
    pub rounds_played: u32,
    pub wins: [u32; 2],
    pub game_over: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    glyph: char,
    color: game::Color,
}

/// [`VideoService`] backed by a ratatui terminal.
///
/// Draw calls fill an off-screen grid of cells; `flush_buffer` paints it in one `Terminal::draw`.
pub struct TerminalVideo<B: Backend> {
    terminal: Terminal<B>,
    columns: usize,
    rows: usize,
    cell_size: i32,
    cells: Vec<Option<Cell>>,
    status: StatusLine,
    /// Steering labels per player, built from the configured keys
    controls: [String; 2],
}

impl<B: Backend> TerminalVideo<B> {
    pub fn new(terminal: Terminal<B>, config: &GameConfig) -> Self {
        Self {
            terminal,
            columns: config.grid_width,
            rows: config.grid_height,
            cell_size: config.cell_size.max(1),
            cells: vec![None; config.grid_width * config.grid_height],
            status: StatusLine::default(),
            controls: [config.red_keys.label(), config.green_keys.label()],
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn set_status(&mut self, status: StatusLine) {
        self.status = status;
    }

    /// Glyph buffered at a grid cell, if anything was drawn there
    pub fn glyph_at(&self, column: usize, row: usize) -> Option<char> {
        self.cell(column, row).map(|cell| cell.glyph)
    }

    fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells[row * self.columns + column]
    }

    fn put_text(&mut self, actor: &Actor, centered: bool) {
        let text = actor.text();
        let width = text.chars().count() as i32;
        let row = actor.position.y / self.cell_size;
        let mut column = actor.position.x / self.cell_size;
        if centered {
            column -= width / 2;
        }
        if row < 0 || row as usize >= self.rows {
            return;
        }

        for (offset, glyph) in text.chars().enumerate() {
            let x = column + offset as i32;
            if x < 0 || x as usize >= self.columns {
                continue;
            }
            self.cells[row as usize * self.columns + x as usize] = Some(Cell {
                glyph,
                color: actor.color,
            });
        }
    }

    fn render(
        frame: &mut Frame,
        arena: Paragraph<'_>,
        status: &StatusLine,
        controls: &[String; 2],
        arena_width: u16,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Arena
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(render_stats(status), chunks[0]);

        let arena_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(arena_width),
                Constraint::Min(0),
            ])
            .split(chunks[1])[1];
        frame.render_widget(arena, arena_area);

        frame.render_widget(render_controls(status, controls), chunks[2]);
    }

    fn arena(&self) -> Paragraph<'static> {
        let lines: Vec<Line<'static>> = (0..self.rows)
            .map(|row| {
                let spans: Vec<Span<'static>> = (0..self.columns)
                    .map(|column| match self.cell(column, row) {
                        Some(cell) => Span::styled(
                            cell.glyph.to_string(),
                            Style::default()
                                .fg(to_terminal_color(cell.color))
                                .add_modifier(Modifier::BOLD),
                        ),
                        None => Span::styled(".", Style::default().fg(Color::DarkGray)),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Cycles "),
        )
    }
}

impl<B: Backend> VideoService for TerminalVideo<B> {
    fn clear_buffer(&mut self) {
        self.cells.fill(None);
    }

    fn draw_actor(&mut self, actor: &Actor) {
        self.put_text(actor, false);
    }

    fn draw_actors(&mut self, actors: &[Actor], centered: bool) {
        for actor in actors {
            self.put_text(actor, centered);
        }
    }

    fn flush_buffer(&mut self) -> Result<()> {
        let arena = self.arena();
        let arena_width = self.columns as u16 + 2;
        let status = &self.status;
        let controls = &self.controls;
        self.terminal
            .draw(|frame| Self::render(frame, arena, status, controls, arena_width))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

fn to_terminal_color(color: game::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

fn render_stats(status: &StatusLine) -> Paragraph<'static> {
    let text = vec![Line::from(vec![
        Span::styled("Round: ", Style::default().fg(Color::Yellow)),
        Span::styled(status.round_time.clone(), Style::default().fg(Color::White)),
        Span::raw("    "),
        Span::styled("Rounds: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            status.rounds_played.to_string(),
            Style::default().fg(Color::White),
        ),
        Span::raw("    "),
        Span::styled(
            format!("{} wins: ", Player::Red.name()),
            Style::default().fg(to_terminal_color(Player::Red.color())),
        ),
        Span::styled(
            status.wins[Player::Red.index()].to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("{} wins: ", Player::Green.name()),
            Style::default().fg(to_terminal_color(Player::Green.color())),
        ),
        Span::styled(
            status.wins[Player::Green.index()].to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    Paragraph::new(text).alignment(Alignment::Center)
}

fn render_controls(status: &StatusLine, controls: &[String; 2]) -> Paragraph<'static> {
    let mut spans = vec![
        Span::styled(
            controls[Player::Red.index()].clone(),
            Style::default().fg(to_terminal_color(Player::Red.color())),
        ),
        Span::raw(" / "),
        Span::styled(
            controls[Player::Green.index()].clone(),
            Style::default().fg(to_terminal_color(Player::Green.color())),
        ),
        Span::raw(" to steer | "),
    ];
    if status.game_over {
        spans.push(Span::styled(
            "R",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" to restart | "));
    }
    spans.push(Span::styled("Q", Style::default().fg(Color::Red)));
    spans.push(Span::raw(" to quit"));

    Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
}
