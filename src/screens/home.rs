//! Home screen: the lights-off prompt

use super::{Action, Binding};
use crate::consts::XP_LABEL_ID;
use crate::markup;
use crate::state::AppState;

pub const BINDINGS: &[Binding] = &[
    Binding::new("yesBtn", Action::Yes),
    Binding::new("noBtn", Action::No),
];

pub fn render(state: &AppState) -> String {
    let body = format!(
        r#"<div class="leaf" aria-hidden="true">🍃</div><div style="margin:60px 8px 12px;"><div class="prompt"><h3>{lights} LIGHTS are on in the house, would you like me to TURN THEM OFF?</h3><div class="actions"><button class="btn yes" id="yesBtn">YES</button><button class="btn no" id="noBtn">NO</button><span class="xp" id="{xp_label}" aria-live="polite"></span></div></div></div>{level_row}"#,
        lights = state.lights_on,
        xp_label = XP_LABEL_ID,
        level_row = markup::level_row(state),
    );
    markup::screen(&body)
}

/// Feedback label text after accepting
pub fn reward_text(reward: u32) -> String {
    format!("+{} XP", reward)
}
