//! Drawing. Everything here reads game state; nothing mutates it.

use std::fmt::Write as _;

use dk_simulation::systems::InventoryView;
use dk_simulation::{Game, Mode};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::TuiApp;
use crate::camera::Camera;
use crate::input::HELP;
use crate::markup;

/// Newest messages shown under the map.
const MESSAGE_LINES: usize = 5;
const SIDEBAR_WIDTH: u16 = 28;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut TuiApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                           // Map / screens
            Constraint::Length(MESSAGE_LINES as u16 + 2), // Message log
        ])
        .split(frame.area());

    match app.game.mode() {
        Mode::Menu => draw_inventory(frame, &app.game, rows[0]),
        Mode::InformationSubscreen => draw_item_info(frame, &app.game, rows[0]),
        Mode::Normal | Mode::Examining => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(10), Constraint::Length(SIDEBAR_WIDTH)])
                .split(rows[0]);
            draw_map(frame, app, cols[0]);
            draw_sidebar(frame, &app.game, cols[1]);
        }
    }
    draw_messages(frame, &app.game, rows[1]);

    if app.show_help {
        draw_help(frame);
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
}

fn draw_map(frame: &mut Frame, app: &mut TuiApp, area: Rect) {
    let block = panel(" Delvekeep ");
    let inner = block.inner(area);
    app.follow(i32::from(inner.width), i32::from(inner.height));
    let lines = map_lines(&app.game, &app.camera);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One styled line per camera row. Visible tiles are white, remembered
/// ones dark gray; entities only show on visible tiles.
pub fn map_lines(game: &Game, camera: &Camera) -> Vec<Line<'static>> {
    let map = game.map();
    let (width, height) = (camera.width.max(0) as usize, camera.height.max(0) as usize);
    let mut cells = vec![vec![(' ', Color::Reset); width]; height];

    for (cy, row) in cells.iter_mut().enumerate() {
        for (cx, cell) in row.iter_mut().enumerate() {
            let Some(tile) = map.tile(camera.x + cx as i32, camera.y + cy as i32) else {
                continue;
            };
            let glyph = if tile.is_wall() { '#' } else { '.' };
            if tile.visible {
                *cell = (glyph, Color::White);
            } else if tile.explored {
                *cell = (glyph, Color::DarkGray);
            }
        }
    }

    let mut put = |x: i32, y: i32, glyph: char, color: Color| {
        if let Some((cx, cy)) = camera.to_camera_coordinates(x, y) {
            cells[cy as usize][cx as usize] = (glyph, color);
        }
    };
    for r in game.renderables() {
        if map.is_visible(r.x, r.y) {
            put(r.x, r.y, r.glyph, markup::color_named(&r.color));
        }
    }
    if let (Mode::Examining, Some(cursor)) = (game.mode(), game.examine_cursor()) {
        put(cursor.x, cursor.y, cursor.glyph, Color::Yellow);
    }

    cells
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(glyph, color)| {
                        Span::styled(glyph.to_string(), Style::default().fg(color))
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

/// `"HP: (hp/max) [color=red]====------[/color]"`, ten pips.
pub fn hp_bar(hp: i32, max_hp: i32) -> String {
    let fraction = if max_hp > 0 {
        f64::from(hp) / f64::from(max_hp)
    } else {
        0.0
    };
    let pips = ((fraction * 10.0 + 0.5).floor() as i32).clamp(0, 10);
    let numbers = if hp < 10 {
        format!("( {hp}/{max_hp})")
    } else {
        format!("({hp}/{max_hp})")
    };
    let bar: String = (0..10).map(|i| if i < pips { '=' } else { '-' }).collect();
    format!("HP: {numbers} [color=red]{bar}[/color]")
}

fn draw_sidebar(frame: &mut Frame, game: &Game, area: Rect) {
    let mut lines = Vec::new();
    if let Some(stats) = game.player_stats() {
        lines.push(Line::from(stats.name));
        lines.push(Line::from("Unremarkable Human"));
        lines.push(Line::default());
        lines.push(markup::to_line(&hp_bar(stats.hp, stats.max_hp), Style::default()));
    }
    lines.push(Line::default());
    lines.push(Line::from(format!("Turn {}", game.turns())));
    if !game.is_player_alive() {
        lines.push(Line::default());
        lines.push(markup::to_line(
            "[color=dark red]You have died.[/color]",
            Style::default(),
        ));
    }
    frame.render_widget(Paragraph::new(lines).block(panel(" Character ")), area);
}

fn draw_messages(frame: &mut Frame, game: &Game, area: Rect) {
    let lines: Vec<Line> = match game.examine_text() {
        Some(text) => vec![markup::to_line(&text, Style::default())],
        None => game
            .messages()
            .recent(MESSAGE_LINES)
            .into_iter()
            .map(|m| markup::to_line(m, Style::default()))
            .collect(),
    };
    let paragraph = Paragraph::new(lines)
        .block(panel(" Messages "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Header plus one markup line per inventory group.
pub fn inventory_lines(view: &InventoryView) -> Vec<String> {
    let mut lines = vec![
        format!("Inventory ({}/{})", view.used, view.capacity),
        "-".repeat(20),
    ];
    lines.extend(view.lines.iter().map(|line| {
        format!(
            "{} - [color={}]{}[/color] x{}",
            line.key, line.color, line.name, line.count
        )
    }));
    lines
}

fn draw_inventory(frame: &mut Frame, game: &Game, area: Rect) {
    let mut lines: Vec<Line> = game
        .inventory_view()
        .map(|view| inventory_lines(&view))
        .unwrap_or_default()
        .iter()
        .map(|l| markup::to_line(l, Style::default()))
        .collect();
    lines.push(Line::default());
    lines.push(Line::styled(
        "a-z: details  Esc: close",
        Style::default().fg(Color::LightBlue),
    ));
    frame.render_widget(Paragraph::new(lines).block(panel(" Inventory ")), area);
}

fn draw_item_info(frame: &mut Frame, game: &Game, area: Rect) {
    let Some(info) = game.selected_item_info() else {
        return;
    };
    let mut lines = vec![
        markup::to_line(&info.title, Style::default()),
        Line::default(),
        Line::from(info.short),
    ];
    if !info.long.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(info.long));
    }
    lines.push(Line::default());
    lines.push(Line::from(format!("You have {} of these.", info.count)));
    lines.push(Line::default());
    lines.push(markup::to_line(
        "[color=light blue]Actions available:[/color] Esc: back",
        Style::default(),
    ));
    let paragraph = Paragraph::new(lines)
        .block(panel(" Item "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_help(frame: &mut Frame) {
    let area = frame.area();
    let width = 46.min(area.width);
    let height = (HELP.len() as u16 + 2).min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    let lines: Vec<Line> = HELP
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("{keys:<20}"), Style::default().fg(Color::Yellow)),
                Span::raw(*what),
            ])
        })
        .collect();
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(panel(" Keys ")), popup);
}

/// The whole map as text: `#` wall, `.` floor, entity glyphs on top.
pub fn ascii_map(game: &Game) -> String {
    let map = game.map();
    let (width, height) = (map.width(), map.height());
    let mut grid: Vec<Vec<char>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| if map.is_wall(x, y) { '#' } else { '.' })
                .collect()
        })
        .collect();
    for r in game.renderables() {
        if map.in_bounds(r.x, r.y) {
            grid[r.y as usize][r.x as usize] = r.glyph;
        }
    }

    let mut out = String::with_capacity(((width + 1) * height) as usize);
    for row in grid {
        let _ = writeln!(out, "{}", row.into_iter().collect::<String>());
    }
    out
}
