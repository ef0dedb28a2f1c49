use crate::models::level::{LevelState, XpProgress};

/// XP a level takes per level number: level L needs `L * XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u64 = 100;

/// Maps a cumulative experience counter to a level.
///
/// Level 1 needs 100 XP, level 2 needs 200, level L needs L × 100, so the
/// cumulative XP to *reach* level L is the triangular number
/// `(L − 1) × L × 50`.
pub struct LevelService;

impl LevelService {
    pub fn new() -> Self {
        Self
    }

    /// Highest level whose cumulative threshold `experience` has reached.
    /// Exactly filling a level moves to the next one (100 XP → level 2).
    ///
    /// Level L is reached when `(L − 1) × L × 50 ≤ experience`, so with
    /// `k = L − 1` this is the largest `k` with `k(k + 1) ≤ experience / 50`,
    /// i.e. `k = (⌊√(4n + 1)⌋ − 1) / 2`. Runs in constant time for any `u64`.
    pub fn level_of(&self, experience: u64) -> u32 {
        let n = experience / (XP_PER_LEVEL / 2);
        // n ≤ u64::MAX / 50, so 4n + 1 cannot overflow
        let k = ((4 * n + 1).isqrt() - 1) / 2;
        // k ≤ ~6.1e8 for any u64 input
        k as u32 + 1
    }

    /// Cumulative XP at which `level` starts. Saturates at `u64::MAX`.
    pub fn experience_for_level(&self, level: u32) -> u64 {
        let level = u128::from(level.max(1));
        let threshold = (level - 1) * level * u128::from(XP_PER_LEVEL / 2);
        u64::try_from(threshold).unwrap_or(u64::MAX)
    }

    /// XP into the current level and the size of that level.
    pub fn xp_progress(&self, experience: u64) -> XpProgress {
        let level = self.level_of(experience);
        XpProgress {
            current: experience - self.experience_for_level(level),
            required: u64::from(level) * XP_PER_LEVEL,
        }
    }

    /// Level and progress together.
    pub fn level_state(&self, experience: u64) -> LevelState {
        LevelState {
            level: self.level_of(experience),
            experience,
            progress: self.xp_progress(experience),
        }
    }
}

impl Default for LevelService {
    fn default() -> Self {
        Self::new()
    }
}
