//! Inline SVG icons

/// Hexagon outline used by the settings button
pub fn hex_icon() -> &'static str {
    r#"<svg viewBox="0 0 24 24" width="100%" height="100%" aria-hidden="true"><path d="M12 2l8.66 5v10L12 22l-8.66-5V7L12 2zm0 2.3L5.34 7.5v9L12 19.7l6.66-3.2v-9L12 4.3z" fill="currentColor"/></svg>"#
}
