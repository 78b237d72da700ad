// TUI module for rendering the terminal interface
pub mod colors;
pub mod helpers;
pub mod input;

// Re-exports
pub use colors::*;
pub use helpers::{clamp_cursor, glyph, item_label};
pub use input::{handle_key_event, KeyAction};

use crate::domain::{Filter, Item, NavigationState};
use helpers::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// UI view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Main directory browsing view
    Browsing,
    /// Help overlay visible
    Help,
}

/// Which panel receives cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Listing,
    Shortcuts,
}

/// Presentation-only state: cursors, focus and overlays
#[derive(Debug, Clone)]
pub struct BrowserView {
    pub view_state: ViewState,
    pub focus: Focus,
    pub cursor: usize,
    pub shortcut_cursor: usize,
}

impl Default for BrowserView {
    fn default() -> Self {
        Self {
            view_state: ViewState::Browsing,
            focus: Focus::Listing,
            cursor: 0,
            shortcut_cursor: 0,
        }
    }
}

impl BrowserView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        match self.focus {
            Focus::Listing => self.cursor = self.cursor.saturating_sub(1),
            Focus::Shortcuts => self.shortcut_cursor = self.shortcut_cursor.saturating_sub(1),
        }
    }

    pub fn move_down(&mut self, listing_len: usize, shortcuts_len: usize) {
        match self.focus {
            Focus::Listing => self.cursor = clamp_cursor(self.cursor + 1, listing_len),
            Focus::Shortcuts => {
                self.shortcut_cursor = clamp_cursor(self.shortcut_cursor + 1, shortcuts_len)
            }
        }
    }

    /// Switches panels; stays on the listing when there are no shortcuts.
    pub fn toggle_focus(&mut self, has_shortcuts: bool) {
        self.focus = match self.focus {
            Focus::Listing if has_shortcuts => Focus::Shortcuts,
            _ => Focus::Listing,
        };
    }

    /// Called after a directory change: back to the top of the listing.
    pub fn entered_directory(&mut self) {
        self.focus = Focus::Listing;
        self.cursor = 0;
    }

    /// Keeps cursors valid after the listing changed size.
    pub fn clamp(&mut self, listing_len: usize, shortcuts_len: usize) {
        self.cursor = clamp_cursor(self.cursor, listing_len);
        self.shortcut_cursor = clamp_cursor(self.shortcut_cursor, shortcuts_len);
    }

    /// Entry under the listing cursor
    pub fn selected<'a>(&self, state: &'a NavigationState) -> Option<&'a Item> {
        state.items().get(self.cursor)
    }
}

/// Renders the whole browser
pub fn render(frame: &mut Frame, state: &NavigationState, shortcuts: &[Item], view: &BrowserView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header with path and filters
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state);

    if shortcuts.is_empty() {
        render_listing(frame, chunks[1], state, view);
    } else {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(0)])
            .split(chunks[1]);
        render_shortcuts(frame, body[0], shortcuts, view);
        render_listing(frame, body[1], state, view);
    }

    render_footer(frame, chunks[2]);

    if view.view_state == ViewState::Help {
        render_help_overlay(frame);
    }
}

/// Path on the first line, filter tabs on the second
fn render_header(frame: &mut Frame, area: Rect, state: &NavigationState) {
    let path_line = Line::from(vec![
        Span::styled(
            " File Explorer ",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            state.current_path().display().to_string(),
            Style::default().fg(TEXT_PRIMARY),
        ),
    ]);

    let mut tabs = vec![Span::raw(" ")];
    for filter in Filter::VARIANTS {
        let style = if filter == state.active_filter() {
            Style::default()
                .fg(BG_DARK)
                .bg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_SECONDARY)
        };
        tabs.push(Span::styled(format!(" {} ", filter.label()), style));
        tabs.push(Span::raw(" "));
    }

    let header = Paragraph::new(vec![path_line, Line::from(tabs)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER_COLOR)),
    );

    frame.render_widget(header, area);
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { BORDER_FOCUSED } else { BORDER_COLOR };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

fn render_shortcuts(frame: &mut Frame, area: Rect, shortcuts: &[Item], view: &BrowserView) {
    let focused = view.focus == Focus::Shortcuts;
    let items: Vec<ListItem> = shortcuts
        .iter()
        .map(|item| {
            ListItem::new(Line::from(Span::styled(
                item_label(item),
                Style::default().fg(ACCENT_DIRECTORY),
            )))
        })
        .collect();

    let list = List::new(items)
        .block(panel_block(" Places ", focused))
        .highlight_style(Style::default().bg(ACCENT_SELECTED_BG))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(view.shortcut_cursor));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_listing(frame: &mut Frame, area: Rect, state: &NavigationState, view: &BrowserView) {
    let focused = view.focus == Focus::Listing;
    let title = format!(" {} entries ", state.items().len());

    if state.is_loading() {
        let loading = Paragraph::new(Line::from(Span::styled(
            "Loading...",
            Style::default()
                .fg(TEXT_SECONDARY)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(panel_block(" Listing ", focused))
        .alignment(Alignment::Center);
        frame.render_widget(loading, area);
        return;
    }

    if state.items().is_empty() {
        frame.render_widget(render_empty_state_widget(focused), area);
        return;
    }

    let items: Vec<ListItem> = state
        .items()
        .iter()
        .map(|item| {
            let style = if item.hidden {
                Style::default().fg(TEXT_HIDDEN)
            } else if item.is_dir() {
                Style::default().fg(ACCENT_DIRECTORY)
            } else {
                Style::default().fg(TEXT_PRIMARY)
            };
            ListItem::new(Line::from(Span::styled(item_label(item), style)))
        })
        .collect();

    let list = List::new(items)
        .block(panel_block(&title, focused))
        .highlight_style(
            Style::default()
                .bg(ACCENT_SELECTED_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(view.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Shown when the directory is empty, missing, or nothing passes the filter
fn render_empty_state_widget(focused: bool) -> Paragraph<'static> {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Nothing to show",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The directory is empty, missing, or nothing matches the filter.",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let border = if focused { BORDER_FOCUSED } else { BORDER_COLOR };
    Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Listing ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        )
        .alignment(Alignment::Center)
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(ACCENT_HIGHLIGHT));
    let text = |t: &'static str| Span::styled(t, Style::default().fg(TEXT_SECONDARY));

    let controls = Line::from(vec![
        key("↵ "),
        text("Open"),
        Span::raw("  │  "),
        key("⌫ "),
        text("Up"),
        Span::raw("  │  "),
        key("a d f . "),
        text("Filter"),
        Span::raw("  │  "),
        key("Tab "),
        text("Places"),
        Span::raw("  │  "),
        key("? "),
        text("Help"),
        Span::raw("  │  "),
        key("q "),
        text("Quit"),
    ]);

    let footer = Paragraph::new(controls)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// Renders the help overlay
pub fn render_help_overlay(frame: &mut Frame) {
    let help_area = centered_rect(50, 70, frame.area());

    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let row = |keys: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("{:<14}", keys), Style::default().fg(ACCENT_HIGHLIGHT)),
            Span::raw(what),
        ])
    };

    let help_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        row("↑ ↓ / k j", "Move"),
        row("Enter / l", "Open directory"),
        row("Bksp / h", "Parent directory"),
        row("~", "Home"),
        row("Tab", "Switch to places"),
        Line::from(""),
        row("a", "Show all"),
        row("d", "Directories only"),
        row("f", "Files only"),
        row(".", "Hidden only"),
        Line::from(""),
        row("r", "Refresh"),
        row("q / Esc", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(help_lines)
        .alignment(Alignment::Left)
        .style(Style::default().fg(TEXT_PRIMARY));

    frame.render_widget(paragraph, inner);
}
