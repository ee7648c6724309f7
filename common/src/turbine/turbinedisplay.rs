// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// The play state and cycle timing of the rotor animation.
///
/// Recomputed from the wind speed on every update. A paused rotor carries no
/// timing, so stopping never requires a duration to be made up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AnimationState {
    /// The rotor stands still.
    #[default]
    Paused,
    /// The rotor turns one full revolution every `secs_per_revolution` seconds.
    Running { secs_per_revolution: f64 },
}

impl AnimationState {
    pub fn is_running(&self) -> bool {
        matches!(self, AnimationState::Running { .. })
    }
}

/// The three display surfaces the wind speed controller writes to.
///
/// Implemented by the UI frontends, and by `DummyTurbineDisplay` for running
/// the controller without a window.
pub trait TurbineDisplay {
    /// Writes the unrounded wind speed to the speed readout.
    fn set_speed_text(&mut self, text: &str);

    /// Applies play state and cycle duration to the rotor animation.
    fn set_animation(&mut self, state: AnimationState);

    /// Writes the rounded power estimate to the power readout.
    fn set_power_text(&mut self, text: &str);
}

pub type TurbineDisplayPointer = Box<dyn TurbineDisplay + Send>;
