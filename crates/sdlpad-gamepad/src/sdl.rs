use log::warn;
use sdl2::controller::{Axis as SdlAxis, GameController};
use sdl2::{GameControllerSubsystem, Sdl};

use crate::backend::{GamepadBackend, GamepadDevice};
use crate::error::{Error, Result};
use crate::types::{Axis, DeviceIndex};

/// SDL2 game controller backend.
///
/// The subsystem is shut down once the last clone of the backend (and every
/// controller opened from it) is dropped.
#[derive(Clone)]
pub struct SdlBackend {
    subsystem: GameControllerSubsystem,
    _sdl: Sdl,
}

impl SdlBackend {
    /// Initializes SDL and its game controller subsystem.
    pub fn init() -> Result<Self> {
        let sdl = sdl2::init().map_err(Error::BackendInit)?;
        let subsystem = sdl.game_controller().map_err(Error::BackendInit)?;
        Ok(Self {
            subsystem,
            _sdl: sdl,
        })
    }
}

impl GamepadBackend for SdlBackend {
    type Device = SdlDevice;

    fn num_devices(&self) -> DeviceIndex {
        match self.subsystem.num_joysticks() {
            Ok(n) => n,
            Err(e) => {
                warn!("failed to count joysticks: {e}");
                0
            }
        }
    }

    fn is_game_controller(&self, index: DeviceIndex) -> bool {
        self.subsystem.is_game_controller(index)
    }

    fn open(&self, index: DeviceIndex) -> Result<SdlDevice> {
        self.subsystem
            .open(index)
            .map(SdlDevice)
            .map_err(|e| Error::Open {
                index,
                reason: e.to_string(),
            })
    }

    // Needed when nobody pumps SDL events.
    fn update(&self) {
        self.subsystem.update();
    }

    fn axis_name(&self, axis: Axis) -> String {
        to_sdl_axis(axis).string()
    }
}

/// An open SDL game controller.
pub struct SdlDevice(GameController);

impl GamepadDevice for SdlDevice {
    fn name(&self) -> String {
        self.0.name()
    }

    fn axis(&self, axis: Axis) -> i16 {
        self.0.axis(to_sdl_axis(axis))
    }
}

fn to_sdl_axis(axis: Axis) -> SdlAxis {
    match axis {
        Axis::LeftX => SdlAxis::LeftX,
        Axis::LeftY => SdlAxis::LeftY,
        Axis::RightX => SdlAxis::RightX,
        Axis::RightY => SdlAxis::RightY,
        Axis::TriggerLeft => SdlAxis::TriggerLeft,
        Axis::TriggerRight => SdlAxis::TriggerRight,
    }
}
