//! Color constants for the terminal user interface.

use ratatui::style::Color;

// Column accents mirror the web dashboard's card tints
// (grey to-do, yellow in-progress, green done).

/// To Do column accent.
pub const COLUMN_TODO: Color = Color::Gray;
/// In Progress column accent.
pub const COLUMN_IN_PROGRESS: Color = Color::Rgb(255, 215, 0);
/// Done column accent.
pub const COLUMN_DONE: Color = Color::Rgb(0, 128, 0);

/// High-urgency tasks.
pub const URGENCY_HIGH: Color = Color::Rgb(200, 40, 40);
/// Medium-urgency tasks.
pub const URGENCY_MEDIUM: Color = Color::Rgb(255, 165, 0);
/// Low-urgency tasks.
pub const URGENCY_LOW: Color = Color::Rgb(0, 128, 0);
