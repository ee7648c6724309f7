// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod turbinedisplay;
mod windspeed;
mod windspeedcontroller;
mod turbineconfig;
mod dummyturbinedisplay;

pub use turbinedisplay::AnimationState;
pub use turbinedisplay::TurbineDisplay;
pub use turbinedisplay::TurbineDisplayPointer;

pub use windspeed::InvalidSpeedInput;
pub use windspeed::WindSpeed;

pub use windspeedcontroller::WindSpeedController;
pub use windspeedcontroller::WindSpeedControllerSharedPointer;

pub use turbineconfig::PowerEstimate;
pub use turbineconfig::TurbineConfig;

pub use dummyturbinedisplay::DummyTurbineDisplay;
