use std::sync::{Arc, Mutex};

use crate::turbine::turbineconfig::TurbineConfig;
use crate::turbine::turbinedisplay::TurbineDisplayPointer;
use crate::turbine::windspeed::{InvalidSpeedInput, WindSpeed};

/// The controller driving the three turbine display surfaces.
///
/// It validates incoming wind speeds and, for each accepted value, rewrites
/// the speed readout, the rotor animation and the power readout in one go.
/// Rejected input leaves every surface exactly as it was.
pub struct WindSpeedController {
    display: TurbineDisplayPointer,
    config: TurbineConfig,
}

// The controller is shared between the UI callbacks and the initialization
// hook, so we wrap it in an Arc<Mutex>.
pub type WindSpeedControllerSharedPointer = Arc<Mutex<WindSpeedController>>;

impl WindSpeedController {
    pub fn new(display: TurbineDisplayPointer, config: TurbineConfig) -> Self {
        Self { display, config }
    }

    /// Sets the wind speed and updates all three display surfaces.
    ///
    /// `input` is anything convertible into a validated [`WindSpeed`]: a
    /// number, or the raw text of a UI control. Invalid input (not a number,
    /// or negative) is logged and the previously displayed values stay as
    /// they are.
    pub fn set_wind_speed<I>(&mut self, input: I)
    where
        I: TryInto<WindSpeed, Error = InvalidSpeedInput>,
    {
        let speed = match input.try_into() {
            Ok(speed) => speed,
            Err(err) => {
                log::error!("Ignoring wind speed update: {err}");
                return;
            }
        };

        log::debug!("Wind speed set to {speed} km/h");

        self.display.set_speed_text(&speed.to_string());
        self.display.set_animation(self.config.animation_for(speed));
        self.display
            .set_power_text(&self.config.power_for(speed).display_kilowatts().to_string());
    }
}

#[cfg(test)]
fn controller_with_display() -> (WindSpeedController, crate::turbine::DummyTurbineDisplay) {
    let display = crate::turbine::DummyTurbineDisplay::new();
    let controller =
        WindSpeedController::new(Box::new(display.clone()), TurbineConfig::default());

    (controller, display)
}

#[test]
fn test_valid_speed_updates_all_surfaces() {
    use crate::turbine::AnimationState;

    let (mut controller, display) = controller_with_display();

    controller.set_wind_speed(30.0);

    assert_eq!(display.speed_text().as_deref(), Some("30"));
    assert_eq!(
        display.animation(),
        Some(AnimationState::Running {
            secs_per_revolution: 60.0 / 90.0
        })
    );
    assert_eq!(display.power_text().as_deref(), Some("690"));
}

#[test]
fn test_zero_speed_pauses_the_rotor() {
    use crate::turbine::AnimationState;

    let (mut controller, display) = controller_with_display();

    controller.set_wind_speed(0.0);

    assert_eq!(display.speed_text().as_deref(), Some("0"));
    assert_eq!(display.animation(), Some(AnimationState::Paused));
    assert_eq!(display.power_text().as_deref(), Some("0"));
}

#[test]
fn test_invalid_input_touches_no_surface() {
    let (mut controller, display) = controller_with_display();

    controller.set_wind_speed(-5.0);
    controller.set_wind_speed("abc");
    controller.set_wind_speed(f64::NAN);

    assert_eq!(display.speed_text(), None);
    assert_eq!(display.animation(), None);
    assert_eq!(display.power_text(), None);
}

#[test]
fn test_invalid_input_keeps_prior_values() {
    let (mut controller, display) = controller_with_display();

    controller.set_wind_speed(30.0);
    let before = (display.speed_text(), display.animation(), display.power_text());

    controller.set_wind_speed(-5.0);
    controller.set_wind_speed("abc");

    let after = (display.speed_text(), display.animation(), display.power_text());
    assert_eq!(before, after);
}

#[test]
fn test_repeated_updates_are_idempotent() {
    let (mut controller, display) = controller_with_display();

    controller.set_wind_speed(12.5);
    let first = (display.speed_text(), display.animation(), display.power_text());

    controller.set_wind_speed(12.5);
    let second = (display.speed_text(), display.animation(), display.power_text());

    assert_eq!(first, second);
    assert_eq!(first.0.as_deref(), Some("12.5"));
    assert_eq!(first.2.as_deref(), Some("288"));
}

#[test]
fn test_text_input_follows_the_same_pipeline() {
    let (mut controller, display) = controller_with_display();

    controller.set_wind_speed(" 45 ");

    assert_eq!(display.speed_text().as_deref(), Some("45"));
    assert_eq!(display.power_text().as_deref(), Some("1035"));
    assert!(display.animation().unwrap().is_running());
}
