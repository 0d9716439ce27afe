//! Inline `[color=NAME]...[/color]` markup used by game messages.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const OPEN: &str = "[color=";
const CLOSE: &str = "[/color]";

/// A run of text with an optional color name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Color name from the tag, `None` for plain text.
    pub color: Option<&'a str>,
    /// The text itself.
    pub text: &'a str,
}

/// Split `text` into colored and plain runs. Malformed tags are kept as
/// plain text.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(start) = rest.find(OPEN) else {
            out.push(Segment { color: None, text: rest });
            break;
        };
        let after = &rest[start + OPEN.len()..];
        let Some(name_end) = after.find(']') else {
            out.push(Segment { color: None, text: rest });
            break;
        };
        let body = &after[name_end + 1..];
        let Some(close) = body.find(CLOSE) else {
            out.push(Segment { color: None, text: rest });
            break;
        };

        if start > 0 {
            out.push(Segment {
                color: None,
                text: &rest[..start],
            });
        }
        out.push(Segment {
            color: Some(&after[..name_end]),
            text: &body[..close],
        });
        rest = &body[close + CLOSE.len()..];
    }
    out
}

/// Markup stripped down to its text.
pub fn plain(text: &str) -> String {
    segments(text).iter().map(|s| s.text).collect()
}

/// Render markup as a styled line on top of `base`.
pub fn to_line(text: &str, base: Style) -> Line<'static> {
    let spans: Vec<Span<'static>> = segments(text)
        .into_iter()
        .map(|seg| {
            let style = match seg.color {
                Some(name) => base.fg(color_named(name)),
                None => base,
            };
            Span::styled(seg.text.to_string(), style)
        })
        .collect();
    Line::from(spans)
}

/// Terminal color for a game color name. Unknown names fall back to white.
pub fn color_named(name: &str) -> Color {
    match name {
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "red" => Color::LightRed,
        "dark red" => Color::Rgb(170, 0, 0),
        "green" => Color::Rgb(0, 200, 0),
        "dark green" => Color::Rgb(0, 140, 0),
        "darker green" => Color::Rgb(0, 100, 0),
        "light green" => Color::LightGreen,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "light blue" => Color::LightBlue,
        _ => Color::White,
    }
}
