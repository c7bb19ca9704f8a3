use std::fmt;
use std::str::FromStr;

/// Index of a native joystick slot. Stable for the lifetime of the process.
pub type DeviceIndex = u32;

/// Number of physical axes exposed by a game controller.
pub const NUM_AXES: usize = 6;

/// Number of logical axes the engine accumulates input into.
pub const NUM_GAME_AXES: usize = 5;

/// Combined per-tick output, one slot per [`GameAxis`].
pub type AxisBuffer = [f32; NUM_GAME_AXES];

/// Physical controller axes, in native order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    LeftX,
    LeftY,
    RightX,
    RightY,
    TriggerLeft,
    TriggerRight,
}

impl Axis {
    pub const ALL: [Axis; NUM_AXES] = [
        Axis::LeftX,
        Axis::LeftY,
        Axis::RightX,
        Axis::RightY,
        Axis::TriggerLeft,
        Axis::TriggerRight,
    ];

    pub fn from_index(index: usize) -> Option<Axis> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Name used by controller mapping strings.
    pub fn name(self) -> &'static str {
        match self {
            Axis::LeftX => "leftx",
            Axis::LeftY => "lefty",
            Axis::RightX => "rightx",
            Axis::RightY => "righty",
            Axis::TriggerLeft => "lefttrigger",
            Axis::TriggerRight => "righttrigger",
        }
    }
}

/// Logical axes a physical axis can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAxis {
    Yaw,
    Pitch,
    Forward,
    Side,
    Up,
}

impl GameAxis {
    pub const ALL: [GameAxis; NUM_GAME_AXES] = [
        GameAxis::Yaw,
        GameAxis::Pitch,
        GameAxis::Forward,
        GameAxis::Side,
        GameAxis::Up,
    ];

    /// Converts an engine axis number. Anything outside the known range is
    /// treated as "no mapping".
    pub fn from_index(index: i32) -> Option<GameAxis> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            GameAxis::Yaw => "yaw",
            GameAxis::Pitch => "pitch",
            GameAxis::Forward => "forward",
            GameAxis::Side => "side",
            GameAxis::Up => "up",
        }
    }
}

impl fmt::Display for GameAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameAxis {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "yaw" => GameAxis::Yaw,
            "pitch" => GameAxis::Pitch,
            "forward" | "move" => GameAxis::Forward,
            "side" | "strafe" => GameAxis::Side,
            "up" => GameAxis::Up,
            _ => return Err(crate::Error::UnknownGameAxis(s.to_string())),
        })
    }
}
