//! Hearth Quest - A gamified smart-home dashboard
//!
//! Core modules:
//! - `state`: The single mutable game/device state and its update operations
//! - `route`: Hash fragment routing between the three screens
//! - `screens`: Pure markup renderers and their click bindings
//! - `app`: Dashboard controller tying routing, rendering and actions together
//! - `dialog`: Prompt/alert capability (browser or scripted)
//! - `progress`: Progress bar clamping and DOM update

pub mod app;
pub mod dialog;
pub mod icon;
pub mod markup;
pub mod progress;
pub mod route;
pub mod screens;
pub mod state;

pub use app::{Dashboard, Effect, Screen};
pub use dialog::Dialogs;
pub use route::Route;
pub use screens::{Action, Binding};
pub use state::{AppState, Devices, LeaderboardEntry, Thermostat};

/// Dashboard configuration constants
pub mod consts {
    /// XP granted for accepting the lights-off prompt
    pub const LIGHTS_OFF_REWARD: u32 = 115;
    /// Level progress gained for accepting the lights-off prompt
    pub const LIGHTS_OFF_PROGRESS: f64 = 0.08;

    /// Root element every screen is rendered into
    pub const ROOT_ELEMENT_ID: &str = "app";
    /// Persistent navigation buttons (carry a `data-route` attribute)
    pub const NAV_SELECTOR: &str = ".nav-btn";
    /// Progress bar fill, relative to the rendered screen
    pub const PROGRESS_FILL_SELECTOR: &str = ".progress > span";
    /// Feedback label on the home screen
    pub const XP_LABEL_ID: &str = "xpGained";

    /// Dialog texts
    pub const ADD_PERSON_PROMPT: &str = "Add person name:";
    pub const GOOGLE_HOME_STUB: &str = "Stub: open Google Home";
    pub const MY_CREATED_STUB: &str = "Stub: open My Created";
    pub const MORE_PEOPLE_STUB: &str = "Stub: show more people";
    pub const NO_CHANGE_TEXT: &str = "No change";
}
