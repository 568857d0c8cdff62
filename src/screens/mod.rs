//! Screen renderers
//!
//! Each screen is a pure function of state producing its full markup, plus a
//! static list of element ids whose clicks dispatch an [`Action`].

pub mod actions;
pub mod home;
pub mod leaderboard;

use crate::route::Route;
use crate::state::AppState;

/// A user interaction a screen can wire up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Home: accept turning the lights off
    Yes,
    /// Home: decline
    No,
    ToggleTheatre,
    ToggleOven,
    /// Actions: Google Home stub link
    GoogleHome,
    /// Actions: My Created stub link
    MyCreated,
    AddPerson,
    /// Leaderboard: stub for paging more entries
    MorePeople,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Yes => "yes",
            Action::No => "no",
            Action::ToggleTheatre => "theatre",
            Action::ToggleOven => "oven",
            Action::GoogleHome => "google-home",
            Action::MyCreated => "my-created",
            Action::AddPerson => "add-person",
            Action::MorePeople => "more-people",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "yes" => Some(Action::Yes),
            "no" => Some(Action::No),
            "theatre" | "theater" => Some(Action::ToggleTheatre),
            "oven" => Some(Action::ToggleOven),
            "google-home" => Some(Action::GoogleHome),
            "my-created" => Some(Action::MyCreated),
            "add-person" | "add" => Some(Action::AddPerson),
            "more-people" | "more" => Some(Action::MorePeople),
            _ => None,
        }
    }
}

/// Element id whose click dispatches an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub element_id: &'static str,
    pub action: Action,
}

impl Binding {
    pub const fn new(element_id: &'static str, action: Action) -> Self {
        Self { element_id, action }
    }
}

/// Render a route's markup
pub fn render(route: Route, state: &AppState) -> String {
    match route {
        Route::Home => home::render(state),
        Route::Actions => actions::render(state),
        Route::Leaderboard => leaderboard::render(state),
    }
}

/// Click bindings for a route
pub fn bindings(route: Route) -> &'static [Binding] {
    match route {
        Route::Home => home::BINDINGS,
        Route::Actions => actions::BINDINGS,
        Route::Leaderboard => leaderboard::BINDINGS,
    }
}

/// Action bound to `element_id` on a route's screen, if any
pub fn action_for(route: Route, element_id: &str) -> Option<Action> {
    bindings(route)
        .iter()
        .find(|b| b.element_id == element_id)
        .map(|b| b.action)
}
