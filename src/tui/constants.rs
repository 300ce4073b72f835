//! TUI constants: colors and timing.

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent: soft cyan (#7EC8E3).
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// How long to wait for the key after Esc when it may start an Option+key sequence.
pub(crate) const ESC_SEQUENCE_DRAIN_MS: u64 = 150;

/// Scroll amount for arrow keys and mouse wheel.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Input box height including borders.
pub(crate) const INPUT_HEIGHT: u16 = 3;

/// Max width for the model label in the header; longer labels are truncated with "…".
pub(crate) const MODEL_HEADER_WIDTH: u16 = 28;
