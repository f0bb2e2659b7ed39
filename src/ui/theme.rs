use ratatui::style::Color;

pub const ACCENT: Color = Color::Magenta;
pub const DIM: Color = Color::DarkGray;
pub const ERROR: Color = Color::Red;
pub const OK: Color = Color::Green;
