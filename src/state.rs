//! Dashboard state and its update operations
//!
//! Everything a screen shows lives here. Screens only read it; mutation goes
//! through the named operations below so each action stays testable.

use serde::{Deserialize, Serialize};

use crate::consts::{LIGHTS_OFF_PROGRESS, LIGHTS_OFF_REWARD};

/// Central thermostat schedule (°C)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thermostat {
    pub from: f64,
    pub to: f64,
}

/// Mock smart-home devices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Devices {
    pub theatre_lights: bool,
    pub oven: bool,
    pub thermostat: Thermostat,
}

impl Default for Devices {
    fn default() -> Self {
        Self {
            theatre_lights: true,
            oven: true,
            thermostat: Thermostat { from: 30.0, to: 26.0 },
        }
    }
}

/// A weekly leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    /// Signed XP change this week
    pub delta: i64,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, delta: i64) -> Self {
        Self {
            name: name.into(),
            delta,
        }
    }
}

/// Gamification + device state for one page session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub level: u32,
    /// Theme label for the current level
    pub biome: String,
    /// Fraction of level complete (0..1)
    pub progress: f64,
    pub xp: u64,
    pub lights_on: u32,
    pub devices: Devices,
    /// Display order is insertion order
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            level: 2,
            biome: "Bushes".to_string(),
            progress: 0.35,
            xp: 0,
            lights_on: 3,
            devices: Devices::default(),
            leaderboard: vec![
                LeaderboardEntry::new("You", 50),
                LeaderboardEntry::new("Dad", 10),
                LeaderboardEntry::new("Josh", -150),
            ],
        }
    }
}

impl AppState {
    /// Accept the "turn the lights off" prompt.
    /// Returns the XP reward granted.
    pub fn accept_lights_off(&mut self) -> u32 {
        let reward = LIGHTS_OFF_REWARD;
        self.xp += u64::from(reward);
        self.lights_on = 0;
        self.devices.theatre_lights = false;
        self.progress = (self.progress + LIGHTS_OFF_PROGRESS).min(1.0);
        reward
    }

    /// Flip the theatre lights. The light count follows the switch alone
    /// (1 or 0), overwriting whatever the home prompt counted.
    pub fn toggle_theatre_lights(&mut self) -> bool {
        self.devices.theatre_lights = !self.devices.theatre_lights;
        self.lights_on = u32::from(self.devices.theatre_lights);
        self.devices.theatre_lights
    }

    pub fn toggle_oven(&mut self) -> bool {
        self.devices.oven = !self.devices.oven;
        self.devices.oven
    }

    /// Append a new person with a zero delta.
    /// Returns false (and changes nothing) for an empty name.
    pub fn add_person(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.leaderboard.push(LeaderboardEntry::new(name, 0));
        true
    }

    /// JSON snapshot for debug logging
    pub fn snapshot(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.level, 2);
        assert_eq!(state.biome, "Bushes");
        assert_eq!(state.lights_on, 3);
        assert_eq!(state.xp, 0);
        assert!(state.devices.theatre_lights);
        assert!(state.devices.oven);
        assert_eq!(state.devices.thermostat, Thermostat { from: 30.0, to: 26.0 });
        let names: Vec<_> = state.leaderboard.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["You", "Dad", "Josh"]);
    }

    #[test]
    fn test_accept_lights_off() {
        let mut state = AppState::default();
        let reward = state.accept_lights_off();
        assert_eq!(reward, 115);
        assert_eq!(state.xp, 115);
        assert_eq!(state.lights_on, 0);
        assert!(!state.devices.theatre_lights);
        assert!((state.progress - 0.43).abs() < 1e-9);
    }

    #[test]
    fn test_accept_lights_off_caps_progress() {
        let mut state = AppState {
            progress: 0.97,
            ..Default::default()
        };
        state.accept_lights_off();
        assert_eq!(state.progress, 1.0);

        // Repeated acceptance keeps accumulating XP but never overflows progress
        state.accept_lights_off();
        assert_eq!(state.progress, 1.0);
        assert_eq!(state.xp, 230);
    }

    #[test]
    fn test_toggle_theatre_overwrites_light_count() {
        let mut state = AppState::default();
        assert_eq!(state.lights_on, 3);

        assert!(!state.toggle_theatre_lights());
        assert_eq!(state.lights_on, 0);

        assert!(state.toggle_theatre_lights());
        assert_eq!(state.lights_on, 1);
    }

    #[test]
    fn test_toggle_oven() {
        let mut state = AppState::default();
        assert!(!state.toggle_oven());
        assert!(state.toggle_oven());
        assert_eq!(state.lights_on, 3);
    }

    #[test]
    fn test_add_person() {
        let mut state = AppState::default();
        assert!(!state.add_person(""));
        assert_eq!(state.leaderboard.len(), 3);

        assert!(state.add_person("Sam"));
        assert!(state.add_person("Sam"));
        assert_eq!(state.leaderboard.len(), 5);
        assert_eq!(state.leaderboard[3], LeaderboardEntry::new("Sam", 0));
    }

    #[test]
    fn test_snapshot_roundtrips() {
        let mut state = AppState::default();
        state.accept_lights_off();
        let restored: AppState = serde_json::from_str(&state.snapshot()).unwrap();
        assert_eq!(restored, state);
    }
}
