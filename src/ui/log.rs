//! Unified logging system

use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::PALETTE_SIZE;

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Terminal palette for cluster colour slots
const PALETTE: [(u8, u8, u8); PALETTE_SIZE] = [
	(0xF4, 0x43, 0x36),
	(0x21, 0x96, 0xF3),
	(0x4C, 0xAF, 0x50),
	(0xFF, 0xC1, 0x07),
	(0x9C, 0x27, 0xB0),
	(0xE9, 0x1E, 0x63),
	(0x00, 0xBC, 0xD4),
	(0xFF, 0x98, 0x00),
];

/// Unclustered tiles
const NEUTRAL: (u8, u8, u8) = (0xA0, 0xAE, 0xC0);

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

// Diagnostics go to stderr so exported JSON on stdout stays clean

pub fn info(msg: &str) {
	eprintln!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	eprintln!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	eprintln!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		eprintln!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}

/// Coloured block for a cluster palette slot (`None` = unclustered)
pub fn swatch(color_index: Option<usize>) -> String {
	let (r, g, b) = color_index.map_or(NEUTRAL, |idx| PALETTE[idx % PALETTE_SIZE]);
	"██".truecolor(r, g, b).to_string()
}

/// Similarity score as a dimmed percentage
pub fn score(score: f32) -> String {
	format!("{:.0}%", score * 100.0).dimmed().to_string()
}
