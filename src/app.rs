//! Dashboard controller
//!
//! Owns the state and the active route. The DOM layer asks it for a
//! [`Screen`] to insert, and forwards clicks as [`Action`]s, applying the
//! returned [`Effect`].

use crate::consts::{
    ADD_PERSON_PROMPT, GOOGLE_HOME_STUB, MORE_PEOPLE_STUB, MY_CREATED_STUB, NO_CHANGE_TEXT,
};
use crate::dialog::Dialogs;
use crate::route::Route;
use crate::screens::{self, Action, Binding, home};
use crate::state::AppState;

/// A rendered screen ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub route: Route,
    pub html: String,
    pub bindings: &'static [Binding],
    /// Active flag per entry of [`Route::ALL`]
    pub nav_active: [bool; 3],
    /// Level progress to apply to the bar once inserted
    pub progress: f64,
}

/// What the DOM layer must do after an action
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing visible changes
    None,
    /// Patch the feedback label and progress bar in place
    Feedback { text: String, progress: f64 },
    /// Rebuild the current screen
    Rerender,
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    state: AppState,
    route: Route,
}

impl Dashboard {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            route: Route::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Currently displayed route
    pub fn current_route(&self) -> Route {
        self.route
    }

    /// Resolve a location hash and render its screen
    pub fn route(&mut self, fragment: &str) -> Screen {
        let route = Route::from_fragment(fragment);
        if route.path() != crate::route::fragment_path(fragment) {
            log::debug!("Unknown route {:?}, showing home", fragment);
        }
        self.route = route;
        log::info!("Navigated to {}", route.path());
        self.render()
    }

    /// Render the current route from current state
    pub fn render(&self) -> Screen {
        Screen {
            route: self.route,
            html: screens::render(self.route, &self.state),
            bindings: screens::bindings(self.route),
            nav_active: self.route.nav_active(),
            progress: self.state.progress,
        }
    }

    /// Apply a click
    pub fn dispatch(&mut self, action: Action, dialogs: &mut impl Dialogs) -> Effect {
        log::debug!("Dispatch {:?} on {}", action, self.route.path());
        let effect = match action {
            Action::Yes => {
                let reward = self.state.accept_lights_off();
                Effect::Feedback {
                    text: home::reward_text(reward),
                    progress: self.state.progress,
                }
            }
            Action::No => Effect::Feedback {
                text: NO_CHANGE_TEXT.to_string(),
                progress: self.state.progress,
            },
            Action::ToggleTheatre => {
                self.state.toggle_theatre_lights();
                Effect::Rerender
            }
            Action::ToggleOven => {
                self.state.toggle_oven();
                Effect::Rerender
            }
            Action::GoogleHome => {
                dialogs.show_message(GOOGLE_HOME_STUB);
                Effect::None
            }
            Action::MyCreated => {
                dialogs.show_message(MY_CREATED_STUB);
                Effect::None
            }
            Action::AddPerson => {
                let added = dialogs
                    .request_text(ADD_PERSON_PROMPT)
                    .is_some_and(|name| self.state.add_person(&name));
                if added {
                    Effect::Rerender
                } else {
                    Effect::None
                }
            }
            Action::MorePeople => {
                dialogs.show_message(MORE_PEOPLE_STUB);
                Effect::None
            }
        };
        if effect != Effect::None {
            log::debug!("State: {}", self.state.snapshot());
        }
        effect
    }
}
