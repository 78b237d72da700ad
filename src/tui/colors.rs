// Color palette shared by all widgets
use ratatui::style::Color;

pub const BG_DARK: Color = Color::Rgb(24, 24, 32);
pub const BORDER_COLOR: Color = Color::Rgb(88, 91, 112);
pub const BORDER_FOCUSED: Color = Color::Rgb(137, 180, 250);

pub const TEXT_PRIMARY: Color = Color::Rgb(205, 214, 244);
pub const TEXT_SECONDARY: Color = Color::Rgb(147, 153, 178);
pub const TEXT_HIDDEN: Color = Color::Rgb(108, 112, 134);

pub const ACCENT_HIGHLIGHT: Color = Color::Rgb(249, 226, 175);
pub const ACCENT_DIRECTORY: Color = Color::Rgb(137, 180, 250);
pub const ACCENT_SELECTED_BG: Color = Color::Rgb(49, 50, 68);
