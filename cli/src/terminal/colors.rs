use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const SLOT: Color = Color::BrightYellow;
pub const MONEY: Color = Color::Green;
pub const WARNING: Color = Color::Red;
