use serde::Deserialize;

use crate::turbine::turbinedisplay::AnimationState;
use crate::turbine::windspeed::WindSpeed;

/// The fixed factors of the two turbine formulas.
///
/// Both are stated approximations rather than a calibrated physical model:
/// `tip_speed_factor` stands in for a tip-speed-ratio correction when mapping
/// wind speed to rotor timing, and `power_coefficient_kw` linearly
/// approximates generator output. They stay configurable instead of being
/// hard-coded into the formulas.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TurbineConfig {
    pub tip_speed_factor: f64,
    pub power_coefficient_kw: f64,
}

impl Default for TurbineConfig {
    fn default() -> Self {
        Self {
            tip_speed_factor: 3.0,
            power_coefficient_kw: 23.0,
        }
    }
}

impl TurbineConfig {
    pub fn new() -> Result<Self, serde_json::Error> {
        let json_data = std::include_str!("./default-turbine.json");

        serde_json::from_str::<Self>(json_data)
    }

    /// Maps `speed` to the rotor animation.
    ///
    /// Calm air pauses the rotor; any positive speed turns it with one
    /// revolution every `60 / (speed * tip_speed_factor)` seconds. The
    /// duration grows without bound as the speed approaches zero and is
    /// passed on unclamped.
    pub fn animation_for(&self, speed: WindSpeed) -> AnimationState {
        if speed.is_calm() {
            AnimationState::Paused
        } else {
            AnimationState::Running {
                secs_per_revolution: 60.0 / (speed.kmh() * self.tip_speed_factor),
            }
        }
    }

    /// Estimates generator output as `speed * power_coefficient_kw`.
    pub fn power_for(&self, speed: WindSpeed) -> PowerEstimate {
        PowerEstimate {
            kilowatts: speed.kmh() * self.power_coefficient_kw,
        }
    }
}

/// Estimated generator output, derived from the wind speed on every update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerEstimate {
    kilowatts: f64,
}

impl PowerEstimate {
    /// The raw estimate in kW.
    pub fn kilowatts(&self) -> f64 {
        self.kilowatts
    }

    /// The estimate rounded to the nearest whole kW, as the readout shows it.
    pub fn display_kilowatts(&self) -> f64 {
        self.kilowatts.round()
    }
}

#[test]
fn test_embedded_config_matches_defaults() {
    let config = TurbineConfig::new().unwrap();

    assert_eq!(config, TurbineConfig::default());
    assert_eq!(config.tip_speed_factor, 3.0);
    assert_eq!(config.power_coefficient_kw, 23.0);
}

#[test]
fn test_formulas_follow_the_config() {
    let config = TurbineConfig {
        tip_speed_factor: 6.0,
        power_coefficient_kw: 10.0,
    };
    let speed = WindSpeed::from_kmh(5.0).unwrap();

    assert_eq!(
        config.animation_for(speed),
        AnimationState::Running {
            secs_per_revolution: 2.0
        }
    );
    assert_eq!(config.power_for(speed).kilowatts(), 50.0);
}

#[test]
fn test_power_rounds_to_nearest() {
    let config = TurbineConfig::default();

    // 12.5 km/h * 23 = 287.5 kW, which rounds up, not down.
    let power = config.power_for(WindSpeed::from_kmh(12.5).unwrap());
    assert_eq!(power.kilowatts(), 287.5);
    assert_eq!(power.display_kilowatts(), 288.0);
}
