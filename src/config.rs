//! Application-level configuration constants.

// Hero slideshow
pub const AUTOPLAY_PERIOD_MS: u32 = 6_000;

// Navigation
pub const NAV_SCROLL_OFFSET_PX: i32 = 70;
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

// Typing headline
pub const TYPE_TICK_MS: u32 = 100;
pub const PARAGRAPH_REVEAL_DELAY_MS: u32 = 500;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Stat counters
pub const COUNT_DURATION_MS: u32 = 2_000;
pub const COUNT_TICK_MS: u32 = 16;

// Alert banners
pub const ALERT_LINGER_MS: u32 = 4_000;
pub const ALERT_FADE_MS: u32 = 800;
