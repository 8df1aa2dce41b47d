use crate::error::AppError;
use crate::models::leaderboard::Run;

pub fn rank_index(count: usize, percentile: f64) -> usize {
    if count == 0 {
        return 0;
    }
    let percentile = if percentile.is_nan() {
        0.0
    } else {
        percentile.clamp(0.0, 1.0)
    };
    let index = ((count - 1) as f64 * percentile).floor() as usize;
    index.min(count - 1)
}

/// Picks the run sitting at `percentile` (0 = fastest, 1 = slowest) of a rank-ordered list.
pub fn select_by_percentile(runs: &[Run], percentile: f64) -> Result<&Run, AppError> {
    if runs.is_empty() {
        return Err(AppError::EmptyLeaderboard);
    }
    Ok(&runs[rank_index(runs.len(), percentile)])
}

/// Renders seconds as `<H>h <MM>m <SS>s`.
///
/// Leftover fractions round up so a run never reads faster than it was.
/// Ceiling the whole duration is the same as ceiling the seconds field and
/// carrying a 60 into the minutes.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.ceil() as u64
    } else {
        0
    };
    let h = total / 3600;
    let m = (total / 60) % 60;
    let s = total % 60;
    format!("{}h {:02}m {:02}s", h, m, s)
}
