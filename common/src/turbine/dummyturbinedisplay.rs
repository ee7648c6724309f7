// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::turbine::turbinedisplay::{AnimationState, TurbineDisplay};
use crate::SurfaceCell;

/// A headless display recording the last value written to each surface.
///
/// Clones share the underlying cells: hand one clone to the controller and
/// keep another for reading the surfaces back, without a window anywhere.
#[derive(Clone, Default)]
pub struct DummyTurbineDisplay {
    speed_text: SurfaceCell<String>,
    animation: SurfaceCell<AnimationState>,
    power_text: SurfaceCell<String>,
}

impl DummyTurbineDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last written speed text, `None` before the first write.
    pub fn speed_text(&self) -> Option<String> {
        self.speed_text.get()
    }

    /// The last applied animation state, `None` before the first write.
    pub fn animation(&self) -> Option<AnimationState> {
        self.animation.get()
    }

    /// The last written power text, `None` before the first write.
    pub fn power_text(&self) -> Option<String> {
        self.power_text.get()
    }
}

impl TurbineDisplay for DummyTurbineDisplay {
    fn set_speed_text(&mut self, text: &str) {
        self.speed_text.set(text.to_string());
    }

    fn set_animation(&mut self, state: AnimationState) {
        self.animation.set(state);
    }

    fn set_power_text(&mut self, text: &str) {
        self.power_text.set(text.to_string());
    }
}

#[test]
fn test_dummy_turbine_display() {
    let display = DummyTurbineDisplay::new();
    let mut sink = display.clone();

    assert_eq!(display.speed_text(), None);
    assert_eq!(display.animation(), None);
    assert_eq!(display.power_text(), None);

    sink.set_speed_text("30");
    sink.set_animation(AnimationState::Paused);
    sink.set_power_text("690");

    assert_eq!(display.speed_text().as_deref(), Some("30"));
    assert_eq!(display.animation(), Some(AnimationState::Paused));
    assert_eq!(display.power_text().as_deref(), Some("690"));
}
