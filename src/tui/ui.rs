//! UI rendering for the terminal abacus.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
    style::{Color, Style, Modifier},
};
use crate::abacus::{BeadSide, RodForm, RodState};
use super::app::AbacusApp;

/// Columns per rod.
const ROD_WIDTH: usize = 6;

/// Rods are grouped in threes, counted from the right.
const GROUP: usize = 3;

const BEAD: &str = "◆";
const WIRE: &str = "│";

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &AbacusApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    draw_rods(frame, chunks[0], app);
    draw_total(frame, chunks[1], app);
    draw_notation(frame, chunks[2], app);
    draw_status(frame, chunks[3], app);
    draw_help(frame, chunks[4]);
}

/// Draw the rods, most significant on the left.
fn draw_rods(frame: &mut Frame, area: Rect, app: &AbacusApp) {
    let count = app.abacus().rod_count();
    let order: Vec<usize> = (0..count).rev().collect();

    let mut weights = Vec::with_capacity(order.len());
    let mut top_far = Vec::with_capacity(order.len());
    let mut top_near = Vec::with_capacity(order.len());
    let mut bar = Vec::with_capacity(order.len());
    let mut bottom_near = Vec::with_capacity(order.len());
    let mut bottom_far = Vec::with_capacity(order.len());
    let mut powers = Vec::with_capacity(order.len());
    let mut cursor = Vec::with_capacity(order.len());

    for &i in &order {
        let rod = app.abacus().rod(i).unwrap_or_default();
        let selected = i == app.selected;
        let label_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        // separator before each group of three, except at the left edge
        let gap = if i + 1 < count && (i + 1) % GROUP == 0 { " " } else { "" };

        let weight = app
            .abacus()
            .weight(i)
            .map(|w| w.to_string())
            .ok()
            .filter(|w| w.len() < ROD_WIDTH)
            .unwrap_or_default();
        weights.push(Span::raw(gap));
        weights.push(Span::styled(center(&weight), label_style));

        for (row, side, near) in [
            (&mut top_far, BeadSide::Top, false),
            (&mut top_near, BeadSide::Top, true),
            (&mut bottom_near, BeadSide::Bottom, true),
            (&mut bottom_far, BeadSide::Bottom, false),
        ] {
            row.push(Span::raw(gap));
            // an engaged bead slides against the bar
            if rod.engaged(side) == near {
                row.push(Span::styled(center(BEAD), bead_style(rod, side)));
            } else {
                row.push(Span::styled(center(WIRE), Style::default().fg(Color::DarkGray)));
            }
        }

        bar.push(Span::raw(gap));
        bar.push(Span::styled("━".repeat(ROD_WIDTH), Style::default().fg(Color::Gray)));

        powers.push(Span::raw(gap));
        powers.push(Span::styled(center(&format!("3^{}", i)), label_style));

        cursor.push(Span::raw(gap));
        cursor.push(Span::styled(
            center(if selected { "▲" } else { "" }),
            Style::default().fg(Color::Yellow),
        ));
    }

    let content: Vec<Line> = [weights, top_far, top_near, bar, bottom_near, bottom_far, powers, cursor]
        .into_iter()
        .map(Line::from)
        .collect();

    let rods = Paragraph::new(content)
        .block(Block::default()
            .title(" Abacus ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    frame.render_widget(rods, area);
}

/// Draw the decimal total.
fn draw_total(frame: &mut Frame, area: Rect, app: &AbacusApp) {
    let total = Paragraph::new(Line::from(vec![
        Span::raw("Total: "),
        Span::styled(
            app.evaluation.total.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default()
        .title(" Total Value ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green)));

    frame.render_widget(total, area);
}

/// Draw the symbolic notation.
fn draw_notation(frame: &mut Frame, area: Rect, app: &AbacusApp) {
    let notation = Paragraph::new(app.notation_text())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(Block::default()
            .title(format!(" Notation ({:?}) ", app.notation))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)));

    frame.render_widget(notation, area);
}

/// Draw status bar.
fn draw_status(frame: &mut Frame, area: Rect, app: &AbacusApp) {
    let status = Paragraph::new(app.status.clone())
        .style(Style::default().fg(Color::White))
        .block(Block::default()
            .title(" Status ")
            .borders(Borders::ALL));

    frame.render_widget(status, area);
}

/// Draw help panel.
fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(vec![
        Line::from("←→: Select rod  ↑/t: Top bead (+1)  ↓/b: Bottom bead (-1)"),
        Line::from("c: Clear  n: Notation  q: Quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default()
        .title(" Help ")
        .borders(Borders::ALL));

    frame.render_widget(help, area);
}

/// Bead colour: idle green, top blue, bottom red, white when balanced.
fn bead_style(rod: RodState, side: BeadSide) -> Style {
    let color = match (rod.form(), rod.engaged(side), side) {
        (RodForm::Balanced, _, _) => Color::White,
        (_, true, BeadSide::Top) => Color::Blue,
        (_, true, BeadSide::Bottom) => Color::Red,
        _ => Color::Green,
    };
    Style::default().fg(color)
}

fn center(text: &str) -> String {
    format!("{:^width$}", text, width = ROD_WIDTH)
}
