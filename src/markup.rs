//! Markup fragments shared by every screen

use crate::icon::hex_icon;
use crate::progress::width_style;
use crate::state::AppState;

/// Escape text for insertion into element content or a quoted attribute
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Settings button (no handler yet)
pub fn settings_button() -> String {
    format!(
        r#"<button class="settings" type="button" aria-label="Settings" title="Settings">{}</button>"#,
        hex_icon()
    )
}

/// "Level N / biome" header with the progress bar
pub fn level_row(state: &AppState) -> String {
    format!(
        r#"<div class="level-row"><span>Level {}</span><span class="level-sub">{}</span><div class="progress"><span style="{}"></span></div></div>"#,
        state.level,
        escape(&state.biome),
        width_style(state.progress)
    )
}

pub fn hills() -> &'static str {
    r#"<div class="hills" aria-hidden="true"><div class="hill left"></div><div class="hill right"></div></div>"#
}

/// Wrap screen content in the common `<section>` with settings and hills
pub fn screen(body: &str) -> String {
    format!(
        r#"<section class="screen">{}{}{}</section>"#,
        settings_button(),
        body,
        hills()
    )
}
