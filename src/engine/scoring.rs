/// Correct answers needed per level.
pub const ANSWERS_PER_LEVEL: u32 = 3;

pub fn level_from_right(total_right: u32) -> u32 {
    total_right / ANSWERS_PER_LEVEL + 1
}

/// Fill of the level bar. A completed level shows as full rather than empty,
/// so the bar reads 100% on the answer that triggers a level-up.
pub fn level_progress(total_right: u32) -> f64 {
    if total_right == 0 {
        return 0.0;
    }
    match total_right % ANSWERS_PER_LEVEL {
        0 => 1.0,
        rem => rem as f64 / ANSWERS_PER_LEVEL as f64,
    }
}

pub fn accuracy(right: u32, wrong: u32) -> f64 {
    let total = right + wrong;
    if total == 0 {
        return 100.0;
    }
    right as f64 / total as f64 * 100.0
}
