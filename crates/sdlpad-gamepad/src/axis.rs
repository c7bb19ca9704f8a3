use crate::types::GameAxis;

/// Per-axis configuration and the last sampled reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    dead_zone: f32,
    pub game_axis: Option<GameAxis>,
    pub multiplier: f32,
    pub value: f32,
    pub button_value: i32,
}

impl AxisConfig {
    pub const DEFAULT_DEAD_ZONE: f32 = 0.0;
    pub const DEFAULT_MULTIPLIER: f32 = 1.0;

    pub fn dead_zone(&self) -> f32 {
        self.dead_zone
    }

    /// Stores the dead zone, clamped into `[0, 1]`. NaN falls back to the
    /// default.
    pub fn set_dead_zone(&mut self, dead_zone: f32) {
        self.dead_zone = if dead_zone.is_nan() {
            Self::DEFAULT_DEAD_ZONE
        } else {
            dead_zone.clamp(0.0, 1.0)
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Contribution of this axis to its mapped logical axis.
    #[inline]
    pub fn contribution(&self, sensitivity: f32) -> Option<(GameAxis, f32)> {
        self.game_axis
            .map(|axis| (axis, self.value * sensitivity * self.multiplier))
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            dead_zone: Self::DEFAULT_DEAD_ZONE,
            game_axis: None,
            multiplier: Self::DEFAULT_MULTIPLIER,
            value: 0.0,
            button_value: 0,
        }
    }
}
