//! Color Constants
//!
//! Light theme palette: iOS-style blue accents over light grays.

use eframe::egui::Color32;

/// Primary accent - iOS blue
pub const PRIMARY: Color32 = Color32::from_rgb(0x00, 0x7A, 0xFF);

/// Secondary accent - Purple
pub const SECONDARY: Color32 = Color32::from_rgb(0x58, 0x56, 0xD6);

pub const WHITE: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

pub const BLACK: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);

/// App background - Light gray
pub const GRAY_LIGHT: Color32 = Color32::from_rgb(0xF2, 0xF2, 0xF7);

/// Card borders - Medium gray
pub const GRAY_MEDIUM: Color32 = Color32::from_rgb(0xE5, 0xE5, 0xEA);

/// Secondary text - Dark gray
pub const GRAY_DARK: Color32 = Color32::from_rgb(0x8E, 0x8E, 0x93);

/// Errors and destructive actions - Red
pub const DANGER: Color32 = Color32::from_rgb(0xFF, 0x3B, 0x30);

/// Success notices - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x34, 0xC7, 0x59);

/// Top bar background
pub const TOP_BAR_BG: Color32 = PRIMARY;
