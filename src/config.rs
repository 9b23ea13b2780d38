//! Tunable game constants.

use serde::{Deserialize, Serialize};

pub const HOUR_MS: u64 = 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// localStorage key holding the serialized `GameState`.
    pub storage_key: String,
    pub energy_cap: u32,
    /// Energy consumed by one click.
    pub click_cost: u32,
    /// Currency earned by one click, in tenths of a Shekltk.
    pub click_reward_tenths: u64,
    pub hour_unit_ms: u64,
    pub hour_award: u32,
    pub ten_hour_unit_ms: u64,
    pub ten_hour_award: u32,
    /// Cadence of the regeneration tick.
    pub tick_interval_ms: u32,
    pub pulse_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            storage_key: "clickerGame".to_string(),
            energy_cap: 1000,
            click_cost: 1,
            click_reward_tenths: 1,
            hour_unit_ms: HOUR_MS,
            hour_award: 100,
            ten_hour_unit_ms: 10 * HOUR_MS,
            ten_hour_award: 1000,
            tick_interval_ms: 60_000,
            pulse_ms: 200,
        }
    }
}

impl GameConfig {
    /// Percentage of the energy bar to fill for `energy`.
    pub fn energy_percent(&self, energy: u32) -> f64 {
        if self.energy_cap == 0 {
            return 0.0;
        }
        (energy.min(self.energy_cap) as f64 / self.energy_cap as f64) * 100.0
    }
}
