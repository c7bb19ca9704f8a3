use colored::Colorize;
use sdlpad_gamepad::{
    shutdown_gamepad, startup_gamepad, AxisBuffer, GameAxis, GamepadBackend,
    JoystickRegistry, Result, StartupOptions,
};
use sdlpad_workspace::Settings;

use crate::{print_debug, print_info};

/// One device as shown by `list`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DeviceSummary {
    pub id: String,
    pub name: String,
    pub sensitivity: f32,
    pub axes: Vec<AxisSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AxisSummary {
    pub name: String,
    pub map: Option<GameAxis>,
    pub dead_zone: f32,
    pub scale: f32,
}

/// Host side of the controller backend: owns the registry and the settings
/// that get applied to every device.
pub(crate) struct Session {
    registry: JoystickRegistry,
    settings: Settings,
    last: AxisBuffer,
}

impl Session {
    pub fn start<B, F>(settings: Settings, no_joy: bool, init: F) -> Self
    where
        B: GamepadBackend + 'static,
        F: FnOnce() -> Result<B>,
    {
        let mut registry = JoystickRegistry::new();
        let options = StartupOptions {
            use_joystick: settings.use_joystick,
            no_joy,
        };
        if startup_gamepad(&mut registry, options, init, || {}) {
            let devices = registry.enumerate_all();
            print_info!("{} game controller(s) active", devices.len());
            for device in devices {
                settings.apply(device);
            }
        } else {
            print_info!("game controller backend is not running");
        }

        Self {
            registry,
            settings,
            last: AxisBuffer::default(),
        }
    }

    /// Runs one input tick. Returns the combined axes when they differ from
    /// the previous tick.
    pub fn tick(&mut self) -> Option<AxisBuffer> {
        self.registry.poll_all();
        let mut axes = AxisBuffer::default();
        self.registry.accumulate_all(&mut axes);
        if axes == self.last {
            return None;
        }
        self.last = axes;
        Some(axes)
    }

    pub fn devices(&mut self) -> Vec<DeviceSummary> {
        self.registry
            .enumerate_all()
            .into_iter()
            .map(|device| DeviceSummary {
                id: device.identifier(),
                name: device.name(),
                sensitivity: device.sensitivity(),
                axes: (0..device.num_axes())
                    .map(|axis| AxisSummary {
                        name: device.axis_name(axis),
                        map: device.axis_map(axis),
                        dead_zone: device.axis_dead_zone(axis),
                        scale: device.axis_scale(axis),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Records every active device into the settings and returns them.
    pub fn capture(&mut self) -> &Settings {
        for device in self.registry.enumerate_all() {
            self.settings.record(device);
        }
        &self.settings
    }

    pub fn shutdown(mut self) {
        shutdown_gamepad(&mut self.registry);
        print_debug!("session closed");
    }
}

pub(crate) fn format_axes(axes: &AxisBuffer) -> String {
    GameAxis::ALL
        .iter()
        .map(|axis| format!("{}={:+.3}", axis.name(), axes[axis.index()]))
        .collect::<Vec<_>>()
        .join(" ")
}
