// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

use turbine_dashboard_common::turbine::{
    AnimationState, TurbineConfig, TurbineDisplay, WindSpeedController,
    WindSpeedControllerSharedPointer,
};

/// Display adapter that writes the controller's three surfaces into the
/// ViewModel global of the Slint UI.
///
/// It holds a weak handle to the window; writes are dropped silently once
/// the window is gone.
struct SlintTurbineDisplay {
    ui: slint::Weak<AppWindow>,
}

impl SlintTurbineDisplay {
    fn new(ui: slint::Weak<AppWindow>) -> Self {
        Self { ui }
    }
}

impl TurbineDisplay for SlintTurbineDisplay {
    fn set_speed_text(&mut self, text: &str) {
        if let Some(ui) = self.ui.upgrade() {
            ui.global::<ViewModel>().set_speed_text(text.into());
        }
    }

    fn set_animation(&mut self, state: AnimationState) {
        if let Some(ui) = self.ui.upgrade() {
            let model = ui.global::<ViewModel>();

            match state {
                AnimationState::Paused => model.set_rotor_running(false),
                AnimationState::Running {
                    secs_per_revolution,
                } => {
                    model.set_rotor_secs_per_rev(secs_per_revolution as f32);
                    model.set_rotor_running(true);
                }
            }
        }
    }

    fn set_power_text(&mut self, text: &str) {
        if let Some(ui) = self.ui.upgrade() {
            ui.global::<ViewModel>().set_power_text(text.into());
        }
    }
}

/// Our App struct that holds the UI and the wind speed controller.
///
/// The App struct is responsible for initializing the UI and the controller.
/// It wires the slider and the text entry to the controller, so every change
/// of either control triggers exactly one controller invocation.
///
/// On startup the controller is invoked once with the slider's default
/// value, so the readouts and the rotor match the control from the start.
struct App {
    ui: AppWindow,
    controller: WindSpeedControllerSharedPointer,
}

impl App {
    /// Create a new App struct.
    ///
    /// The App struct initializes the UI and the wind speed controller.
    fn new() -> anyhow::Result<Self> {
        // Make a new AppWindow
        let ui = AppWindow::new()?;

        // Create the controller with the Slint display adapter and the
        // embedded formula constants.
        use std::sync::{Arc, Mutex};
        let display = Box::new(SlintTurbineDisplay::new(ui.as_weak()));
        let config = TurbineConfig::new()?;

        // The controller is shared between the UI callbacks and the
        // initialization in run(), so we wrap it in an Arc<Mutex>.
        let controller: WindSpeedControllerSharedPointer =
            Arc::new(Mutex::new(WindSpeedController::new(display, config)));

        let model = ui.global::<ViewModel>();

        // Every slider change is forwarded to the controller as a number.
        let slider_controller = controller.clone();
        model.on_wind_speed_edited(move |kmh| {
            slider_controller.lock().unwrap().set_wind_speed(kmh as f64);
        });

        // Typed input arrives as raw text and goes through the same
        // validation pipeline; bad input only produces a log message.
        let entry_controller = controller.clone();
        model.on_wind_speed_entered(move |text| {
            entry_controller.lock().unwrap().set_wind_speed(text.as_str());
        });

        // Return the App struct
        Ok(Self { ui, controller })
    }

    /// Run the App.
    ///
    /// Seeds the displays from the slider's default value, then runs the UI.
    fn run(&mut self) -> anyhow::Result<()> {
        let initial = self.ui.global::<ViewModel>().get_wind_speed();
        self.controller.lock().unwrap().set_wind_speed(initial as f64);

        // Run the UI (and map an error to an anyhow::Error).
        self.ui.run().map_err(|e| e.into())
    }
}

/// A minimal main function that initializes the App and runs it.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = App::new()?;

    app.run()
}
