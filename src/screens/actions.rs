//! Actions screen: device toggles and stub links

use super::{Action, Binding};
use crate::markup;
use crate::state::AppState;

pub const BINDINGS: &[Binding] = &[
    Binding::new("theatreSwitch", Action::ToggleTheatre),
    Binding::new("ovenSwitch", Action::ToggleOven),
    Binding::new("googleHomeBtn", Action::GoogleHome),
    Binding::new("myCreatedBtn", Action::MyCreated),
];

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

/// ON/OFF label plus the clickable switch
fn toggle(id: &str, on: bool) -> String {
    format!(
        r#"<div class="toggle"><span>{label}</span><span class="switch{class}" id="{id}" role="switch" aria-checked="{on}"></span></div>"#,
        label = on_off(on),
        class = if on { " on" } else { "" },
        id = id,
        on = on,
    )
}

fn device_row(kind: &str, name: &str, control: &str) -> String {
    format!(
        r#"<div class="row"><div class="kv"><span class="k">{}:</span><span>{}</span></div>{}</div>"#,
        kind, name, control
    )
}

pub fn render(state: &AppState) -> String {
    let devices = &state.devices;
    let thermostat = format!(
        r#"<div class="kv" aria-label="Thermostat adjustment"><span>{}°C</span><span>→</span><span>{}°C</span></div>"#,
        devices.thermostat.from, devices.thermostat.to
    );

    let body = format!(
        r#"{level_row}<div class="card" role="region" aria-label="Devices">{theatre}{thermostat}{oven}</div><div class="footer-links"><button class="link-btn" id="googleHomeBtn">Google Home</button><button class="link-btn" id="myCreatedBtn">My Created</button></div>"#,
        level_row = markup::level_row(state),
        theatre = device_row(
            "Lights",
            "Theatre",
            &toggle("theatreSwitch", devices.theatre_lights)
        ),
        thermostat = device_row("Thermostat", "Central", &thermostat),
        oven = device_row("Kitchen", "Oven", &toggle("ovenSwitch", devices.oven)),
    );
    markup::screen(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switches_reflect_devices() {
        let html = render(&AppState::default());
        assert!(html.contains(
            r#"<span>ON</span><span class="switch on" id="theatreSwitch" role="switch" aria-checked="true"></span>"#
        ));
        assert!(html.contains(r#"class="switch on" id="ovenSwitch""#));

        let mut state = AppState::default();
        state.toggle_theatre_lights();
        let html = render(&state);
        assert!(html.contains(
            r#"<span>OFF</span><span class="switch" id="theatreSwitch" role="switch" aria-checked="false"></span>"#
        ));
        assert!(html.contains(r#"class="switch on" id="ovenSwitch""#));
    }

    #[test]
    fn test_thermostat_is_read_only() {
        let html = render(&AppState::default());
        assert!(html.contains("<span>30°C</span><span>→</span><span>26°C</span>"));
        assert!(!BINDINGS.iter().any(|b| b.element_id.contains("thermo")));
    }

    #[test]
    fn test_fractional_thermostat() {
        let mut state = AppState::default();
        state.devices.thermostat.to = 21.5;
        assert!(render(&state).contains("<span>21.5°C</span>"));
    }
}
