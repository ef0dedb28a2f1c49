use serde::{Deserialize, Serialize};

/// XP earned inside the current level and XP the level takes in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpProgress {
    /// Always `< required`
    pub current: u64,
    pub required: u64,
}

impl XpProgress {
    /// Fraction of the current level completed, in `[0, 1)`.
    pub fn ratio(&self) -> f64 {
        if self.required == 0 {
            0.0
        } else {
            self.current as f64 / self.required as f64
        }
    }
}

/// Level derived from a profile's cumulative experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelState {
    /// Starts at 1
    pub level: u32,
    pub experience: u64,
    pub progress: XpProgress,
}
