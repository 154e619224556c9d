use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{hex_to_color, rgb_to_color};
use super::theme::Theme;
use crate::app::{App, RANGE_MAX, RANGE_MIN};

const SWATCH_BLOCK: &str = "        ";

pub fn build_board_text(app: &App) -> Text<'_> {
    let board = &app.board;
    let mut lines = Vec::new();

    section(&mut lines, "RGB");
    swatch_row(
        &mut lines,
        "any        ",
        board.rgb_any.css(),
        rgb_to_color(board.rgb_any),
    );
    swatch_row(
        &mut lines,
        &format!("{RANGE_MIN}-{RANGE_MAX}     "),
        board.rgb_range.css(),
        rgb_to_color(board.rgb_range),
    );
    lines.push(Line::from(""));

    section(&mut lines, "Hex");
    if let Some(color) = hex_to_color(&board.hex_any) {
        swatch_row(&mut lines, "any        ", board.hex_any.clone(), color);
    }
    if let Some(color) = hex_to_color(&board.hex_range) {
        swatch_row(&mut lines, "from range ", board.hex_range.clone(), color);
    }
    lines.push(Line::from(""));

    section(&mut lines, "Flag");
    if let Some(color) = hex_to_color(&board.flag) {
        swatch_row(&mut lines, "session    ", board.flag.clone(), color);
    }

    Text::from(lines)
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "  ─────────────",
        Style::default().fg(Theme::dim()),
    )));
}

fn swatch_row(lines: &mut Vec<Line<'_>>, label: &str, value: String, color: Color) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {label}"), Style::default().fg(Theme::dim())),
        Span::styled(SWATCH_BLOCK, Style::default().bg(color)),
        Span::raw("  "),
        Span::styled(
            value,
            Style::default()
                .fg(Theme::text())
                .add_modifier(Modifier::BOLD),
        ),
    ]));
}
