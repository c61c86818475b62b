//! Transition timings shared by the stylesheet and the presence timer.
//! The stylesheet reads them through the custom properties from [`css_vars`].

pub const BACKDROP_FADE_MS: u32 = 220;
pub const PANEL_SLIDE_MS: u32 = 280;
pub const SUBMENU_FADE_MS: u32 = 250;
pub const NAV_STAGGER_MS: u32 = 70;
pub const SOCIAL_STAGGER_MS: u32 = 50;

/// The overlay stays mounted until its slowest layer has finished.
pub const OVERLAY_TRANSITION_MS: u32 = if PANEL_SLIDE_MS > BACKDROP_FADE_MS {
    PANEL_SLIDE_MS
} else {
    BACKDROP_FADE_MS
};

/// Inline `style` value declaring the transition durations as CSS custom properties.
pub fn css_vars() -> String {
    format!(
        "--backdrop-fade: {BACKDROP_FADE_MS}ms; --panel-slide: {PANEL_SLIDE_MS}ms; --submenu-fade: {SUBMENU_FADE_MS}ms;"
    )
}

/// Delay before row `index` starts its entry animation.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .ok()
        .and_then(|i| i.checked_mul(step_ms))
        .unwrap_or(u32::MAX)
}
