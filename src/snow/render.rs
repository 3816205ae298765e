//! Snow Clicker rendering: snow globe, counter, upgrade buttons, snowfall overlay.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions;
use super::logic::format_number;
use super::particles::Snowflake;
use super::state::SnowState;
use super::{NoticeKind, SnowGame};

/// Idle globe, two frames alternating slowly.
const GLOBE_ART: &[&[&str]] = &[
    &["╭───────╮", "│ · ❄ · │", "╰───────╯"],
    &["╭───────╮", "│ · ❅ · │", "╰───────╯"],
];

/// Globe while a click is being acknowledged.
const GLOBE_PRESSED_ART: &[&str] = &["╭━━━━━━━╮", "┃ ❄ ❄ ❄ ┃", "╰━━━━━━━╯"];

/// Borders plus the six rows of the upgrade panel.
const PANEL_HEIGHT: u16 = 8;

pub fn render(game: &SnowGame, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    render_title(f, chunks[0]);

    let (globe_area, panel_area) = if is_narrow_layout(area.width) {
        let c = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(PANEL_HEIGHT)])
            .split(chunks[1]);
        (c[0], c[1])
    } else {
        let c = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        (c[0], c[1])
    };

    render_globe(game, f, globe_area, click_state);
    render_upgrades(game, f, panel_area, click_state);
    render_help(f, chunks[2]);

    // Drawn last, only into empty cells, so text stays readable.
    render_snowfall(&game.field.flakes, f, globe_area);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "❄ Snow Clicker ❄",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

/// The click region: globe art, balance and rates.
fn render_globe(
    game: &SnowGame,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let state = &game.state;
    let pressed = game.click_flash > 0;
    let art = if pressed {
        GLOBE_PRESSED_ART
    } else {
        GLOBE_ART[(game.anim_frame / 10) as usize % GLOBE_ART.len()]
    };
    let art_style = if pressed {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    for row in art {
        lines.push(Line::from(Span::styled(*row, art_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("❄ {}", format_number(state.snowflakes)),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "snowflakes",
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(vec![
        Span::styled(
            format!("+{} per click", format_number(state.per_click())),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("+{}/s", format_number(state.per_second())),
            Style::default().fg(Color::Green),
        ),
    ]));

    let border_color = if pressed { Color::White } else { Color::Cyan };
    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(" tap to make it snow "),
        )
        .alignment(Alignment::Center);
    f.render_widget(widget, area);

    click_state
        .borrow_mut()
        .add_click_target(area, actions::CLICK_SNOW);
}

/// Label of the auto-snow button: level and next price.
pub fn auto_snow_label(state: &SnowState) -> String {
    format!(
        "Auto-snow ({}) - {} ❄",
        state.auto_snow,
        format_number(state.auto_snow_cost)
    )
}

/// Label of the multiplier button: current factor and next price.
pub fn multiplier_label(state: &SnowState) -> String {
    format!(
        "×{} points - {} ❄",
        state.multiplier,
        format_number(state.multiplier_cost)
    )
}

fn button_style(affordable: bool, color: Color) -> Style {
    if affordable {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_upgrades(
    game: &SnowGame,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let state = &game.state;
    let mut cl = ClickableList::new();

    let auto_line = format!(" [1] {}", auto_snow_label(state));
    let auto_style = button_style(state.can_afford_auto_snow(), Color::Green);
    cl.push_clickable(Line::from(Span::styled(auto_line, auto_style)), actions::BUY_AUTO_SNOW);

    let mult_line = format!(" [2] {}", multiplier_label(state));
    let mult_style = button_style(state.can_afford_multiplier(), Color::Magenta);
    cl.push_clickable(Line::from(Span::styled(mult_line, mult_style)), actions::BUY_MULTIPLIER);

    cl.push(Line::from(""));
    let export_style = Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD);
    cl.push_clickable(Line::from(Span::styled(" [S] 💾 Save & send", export_style)), actions::EXPORT_TO_HOST);

    if let Some(notice) = &game.notice {
        let color = match notice.kind {
            NoticeKind::Success => Color::Green,
            NoticeKind::Info => Color::Cyan,
            NoticeKind::Error => Color::Red,
        };
        cl.push(Line::from(""));
        cl.push_clickable(
            Line::from(Span::styled(format!(" {}", notice.text), Style::default().fg(color))),
            actions::DISMISS_NOTICE,
        );
    }

    cl.register_targets(area, &mut click_state.borrow_mut(), 1, 1);

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Upgrades "),
    );
    f.render_widget(widget, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        "C / Space: snow   1 / 2: upgrades   S: send",
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(help, area);
}

/// Brighter for more opaque flakes.
fn flake_style(flake: &Snowflake) -> Style {
    let color = if flake.opacity >= 0.9 {
        Color::White
    } else if flake.opacity >= 0.8 {
        Color::Gray
    } else {
        Color::DarkGray
    };
    let style = Style::default().fg(color);
    if flake.size >= 28.0 {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Screen cell of a flake inside `area`, or `None` when the area is empty.
pub fn flake_cell(flake: &Snowflake, area: Rect) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let col = ((flake.x * area.width as f32) as u16).min(area.width - 1);
    let row = ((flake.progress() * (area.height - 1) as f32) as u16).min(area.height - 1);
    Some((area.x + col, area.y + row))
}

fn render_snowfall(flakes: &[Snowflake], f: &mut Frame, area: Rect) {
    let buf = f.buffer_mut();
    for flake in flakes {
        let Some(pos) = flake_cell(flake, area) else {
            continue;
        };
        if let Some(cell) = buf.cell_mut(pos) {
            if cell.symbol() == " " {
                cell.set_char(flake.glyph()).set_style(flake_style(flake));
            }
        }
    }
}
