use colored::Color;

pub const SEPARATOR: Color = Color::BrightBlack;
pub const ACCENT: Color = Color::BrightGreen;
pub const IPV4_ADDR: Color = Color::BrightCyan;
pub const IPV6_ADDR: Color = Color::BrightMagenta;
pub const ERROR: Color = Color::Red;

pub const LOG_TRACE: Color = Color::BrightBlack;
pub const LOG_DEBUG: Color = Color::Blue;
pub const LOG_INFO: Color = Color::Green;
pub const LOG_WARN: Color = Color::Yellow;
pub const LOG_ERROR: Color = Color::Red;
