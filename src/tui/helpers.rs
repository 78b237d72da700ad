use crate::domain::{Item, ItemKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Glyph shown in front of an entry name
pub fn glyph(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Directory => "📁",
        ItemKind::File => "📄",
        ItemKind::Other => "❔",
    }
}

/// One-line label for an entry, e.g. `📁 src`
pub fn item_label(item: &Item) -> String {
    format!("{} {}", glyph(item.kind), item.name)
}

/// Keeps a cursor inside a list of `len` entries
pub fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
