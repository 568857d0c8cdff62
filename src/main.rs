//! Hearth Quest entry point
//!
//! On the web this mounts the dashboard into `#app` and wires navigation.
//! Natively it renders a screen to stdout for a quick look at the markup.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HashChangeEvent, MouseEvent};

    use hearth_quest::consts::*;
    use hearth_quest::dialog::BrowserDialogs;
    use hearth_quest::progress::set_progress;
    use hearth_quest::route::{changes_fragment, seed_fragment};
    use hearth_quest::screens::action_for;
    use hearth_quest::{AppState, Dashboard, Effect, Route, Screen};

    type SharedDashboard = Rc<RefCell<Dashboard>>;

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn current_fragment() -> String {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    /// Route from the current location hash and mount the screen
    fn route(dashboard: &SharedDashboard) {
        let fragment = current_fragment();
        let screen = dashboard.borrow_mut().route(&fragment);
        mount(&screen);
    }

    /// Rebuild the current screen in place
    fn rerender(dashboard: &SharedDashboard) {
        let screen = dashboard.borrow().render();
        mount(&screen);
    }

    /// Replace `#app` with the screen. Clicks reach the dashboard through the
    /// single delegated listener, so nothing is wired per render.
    fn mount(screen: &Screen) {
        let Some(document) = document() else {
            return;
        };

        set_active_nav(&document, screen.route);

        let Some(root) = document.get_element_by_id(ROOT_ELEMENT_ID) else {
            log::warn!("#{} not found, nothing rendered", ROOT_ELEMENT_ID);
            return;
        };
        root.set_inner_html(&screen.html);
        set_progress(&root, screen.progress);
    }

    /// One delegated click listener for every screen's bindings.
    /// Registered on the document so it works before `#app` is parsed.
    fn setup_screen_clicks(document: &Document, dashboard: &SharedDashboard) -> Result<(), JsValue> {
        let dashboard = dashboard.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("[id]").ok().flatten())
            else {
                return;
            };
            let route = dashboard.borrow().current_route();
            let Some(action) = action_for(route, &target.id()) else {
                return;
            };
            // Borrow ends before the effect re-enters rendering
            let effect = dashboard.borrow_mut().dispatch(action, &mut BrowserDialogs);
            apply(&dashboard, effect);
        });
        document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn apply(dashboard: &SharedDashboard, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Feedback { text, progress } => {
                let Some(document) = document() else {
                    return;
                };
                if let Some(label) = document.get_element_by_id(XP_LABEL_ID) {
                    label.set_text_content(Some(&text));
                }
                if let Some(root) = document.get_element_by_id(ROOT_ELEMENT_ID) {
                    set_progress(&root, progress);
                }
            }
            Effect::Rerender => rerender(dashboard),
        }
    }

    /// Toggle `.active` on nav buttons whose `data-route` matches exactly
    fn set_active_nav(document: &Document, active: Route) {
        let Ok(buttons) = document.query_selector_all(NAV_SELECTOR) else {
            return;
        };
        for i in 0..buttons.length() {
            let Some(btn) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let is_active = btn
                .get_attribute("data-route")
                .is_some_and(|path| path == active.path());
            let _ = btn.class_list().toggle_with_force("active", is_active);
        }
    }

    fn setup_nav(document: &Document, dashboard: &SharedDashboard) -> Result<(), JsValue> {
        let buttons = document.query_selector_all(NAV_SELECTOR)?;
        for i in 0..buttons.length() {
            let Some(btn) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let Some(target) = btn
                .get_attribute("data-route")
                .and_then(|path| Route::from_path(&path))
            else {
                log::warn!("Nav button without a known data-route, skipped");
                continue;
            };

            let dashboard = dashboard.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let location = window.location();
                let current = location.hash().unwrap_or_default();
                if changes_fragment(&current, target) {
                    // hashchange does the routing
                    let _ = location.set_hash(target.path());
                } else {
                    route(&dashboard);
                }
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    /// Seed `#/home` when there is no fragment, then route
    fn start(dashboard: &SharedDashboard) {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Some(seed) = seed_fragment(&location.hash().unwrap_or_default()) {
                let _ = location.set_hash(seed);
            }
        }
        route(dashboard);
    }

    fn setup(dashboard: &SharedDashboard) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        setup_nav(&document, dashboard)?;
        setup_screen_clicks(&document, dashboard)?;

        // External navigation (back/forward, typed URL, nav clicks)
        {
            let dashboard = dashboard.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: HashChangeEvent| {
                route(&dashboard);
            });
            window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        if document.ready_state() == "loading" {
            let dashboard = dashboard.clone();
            let closure = Closure::once(move |_event: web_sys::Event| {
                start(&dashboard);
            });
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        } else {
            start(dashboard);
        }

        Ok(())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Hearth Quest starting...");

        let dashboard = Rc::new(RefCell::new(Dashboard::new(AppState::default())));
        if let Err(e) = setup(&dashboard) {
            log::warn!("Startup incomplete: {:?}", e);
            return;
        }

        log::info!("Hearth Quest running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

/// Native preview: `hearth-quest [#/route] [action[=answer]]...`
///
/// Actions are replayed in order against a fresh dashboard before the final
/// screen is printed. `add-person=Sam` answers the name prompt with "Sam".
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hearth_quest::dialog::ScriptedDialogs;
    use hearth_quest::{Action, AppState, Dashboard, Effect, Route, progress};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let fragment = args.next().unwrap_or_default();

    let mut dashboard = Dashboard::new(AppState::default());
    let mut screen = dashboard.route(&fragment);
    let mut feedback = None;

    for arg in args {
        let (name, answer) = match arg.split_once('=') {
            Some((name, answer)) => (name.to_string(), Some(answer.to_string())),
            None => (arg.clone(), None),
        };
        let Some(action) = Action::from_str(&name) else {
            log::warn!("Unknown action {:?}, skipped", name);
            continue;
        };
        if !screen.bindings.iter().any(|b| b.action == action) {
            log::warn!("{} is not on {}, skipped", action.as_str(), screen.route.path());
            continue;
        }

        let mut dialogs = ScriptedDialogs::new(vec![answer]);
        match dashboard.dispatch(action, &mut dialogs) {
            Effect::None => {}
            Effect::Feedback { text, .. } => feedback = Some(text),
            Effect::Rerender => {
                screen = dashboard.render();
                feedback = None;
            }
        }
        for message in &dialogs.messages {
            println!("[alert] {}", message);
        }
    }

    // Feedback patches the live DOM only; re-read progress for the bar
    screen.progress = dashboard.state().progress;

    let nav: Vec<String> = Route::ALL
        .iter()
        .zip(screen.nav_active)
        .map(|(route, active)| {
            if active {
                format!("[{}]", route.path())
            } else {
                route.path().to_string()
            }
        })
        .collect();

    println!("nav: {}", nav.join(" "));
    println!("progress: {}%", progress::percent(screen.progress));
    if let Some(text) = feedback {
        println!("feedback: {}", text);
    }
    println!("{}", screen.html);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
