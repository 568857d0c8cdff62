//! Leaderboard screen: weekly XP ranking

use super::{Action, Binding};
use crate::markup::{self, escape};
use crate::state::{AppState, LeaderboardEntry};

pub const BINDINGS: &[Binding] = &[
    Binding::new("addPerson", Action::AddPerson),
    Binding::new("morePeople", Action::MorePeople),
];

/// Signed delta label. Non-negative deltas (zero included) get a `+`.
pub fn delta_text(delta: i64) -> String {
    if delta >= 0 {
        format!("+{} XP", delta)
    } else {
        format!("{} XP", delta)
    }
}

/// CSS color for a delta (zero shares the positive accent)
pub fn delta_color(delta: i64) -> &'static str {
    if delta >= 0 { "var(--accent)" } else { "var(--no)" }
}

fn entry_row(entry: &LeaderboardEntry) -> String {
    format!(
        r#"<div class="lb-row"><div style="display:flex; align-items:center; gap:10px;"><span aria-hidden="true" style="background:#fff; border:2px solid #ccc; width:22px; height:22px; border-radius:6px; display:inline-block;"></span><span>{name}</span></div><div style="font-weight:700; color:{color}">{delta}</div></div>"#,
        name = escape(&entry.name),
        color = delta_color(entry.delta),
        delta = delta_text(entry.delta),
    )
}

pub fn render(state: &AppState) -> String {
    let rows: String = state.leaderboard.iter().map(entry_row).collect();
    let body = format!(
        r#"{level_row}<div class="card" role="region" aria-label="Weekly Leaderboard"><div class="row" style="justify-content:space-between; align-items:center;"><strong>Weekly Leaderboard</strong><button class="link-btn" id="addPerson">+</button></div>{rows}<div class="row" style="justify-content:center;"><button class="link-btn" id="morePeople">More People</button></div></div>"#,
        level_row = markup::level_row(state),
        rows = rows,
    );
    markup::screen(&body)
}
