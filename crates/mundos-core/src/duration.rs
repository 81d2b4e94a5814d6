//! Duration formatting helpers.
//!
//! Two independent flavors:
//! - [`format_time`]: verbose Spanish labels (`"1 min 5 seg"`), used for
//!   exercise lengths and time totals
//! - [`format_duration`]: compact `MM:SS`, used for video lengths

/// Format whole seconds as `"<m> min <s> seg"`, `"<m> min"` or `"<s> seg"`.
///
/// ```
/// use mundos_core::duration::format_time;
/// assert_eq!(format_time(0), "0 seg");
/// assert_eq!(format_time(65), "1 min 5 seg");
/// assert_eq!(format_time(120), "2 min");
/// ```
pub fn format_time(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    match (minutes, seconds) {
        (0, s) => format!("{} seg", s),
        (m, 0) => format!("{} min", m),
        (m, s) => format!("{} min {} seg", m, s),
    }
}

/// [`format_time`] for signed inputs. Negative values clamp to zero.
pub fn format_time_signed(total_seconds: i64) -> String {
    format_time(total_seconds.max(0) as u64)
}

/// Format seconds as zero-padded `MM:SS`.
///
/// Returns an empty string for non-finite or non-positive input. Minutes are
/// never folded into hours.
///
/// ```
/// use mundos_core::duration::format_duration;
/// assert_eq!(format_duration(75.0), "01:15");
/// assert_eq!(format_duration(3661.0), "61:01");
/// assert_eq!(format_duration(f64::NAN), "");
/// ```
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return String::new();
    }

    let total = seconds.round() as u64;
    let minutes = total / 60;
    let secs = total % 60;

    format!("{:02}:{:02}", minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_seconds_only() {
        assert_eq!(format_time(0), "0 seg");
        assert_eq!(format_time(1), "1 seg");
        assert_eq!(format_time(59), "59 seg");
    }

    #[test]
    fn format_time_minutes_and_seconds() {
        assert_eq!(format_time(65), "1 min 5 seg");
        assert_eq!(format_time(61), "1 min 1 seg");
        assert_eq!(format_time(3599), "59 min 59 seg");
    }

    #[test]
    fn format_time_whole_minutes() {
        assert_eq!(format_time(60), "1 min");
        assert_eq!(format_time(120), "2 min");
    }

    #[test]
    fn format_time_has_no_hour_unit() {
        assert_eq!(format_time(3600), "60 min");
        assert_eq!(format_time(7265), "121 min 5 seg");
    }

    #[test]
    fn format_time_signed_clamps_negatives() {
        assert_eq!(format_time_signed(-5), "0 seg");
        assert_eq!(format_time_signed(i64::MIN), "0 seg");
        assert_eq!(format_time_signed(65), "1 min 5 seg");
    }

    #[test]
    fn format_duration_rejects_non_positive_and_non_finite() {
        assert_eq!(format_duration(-5.0), "");
        assert_eq!(format_duration(0.0), "");
        assert_eq!(format_duration(f64::NAN), "");
        assert_eq!(format_duration(f64::INFINITY), "");
        assert_eq!(format_duration(f64::NEG_INFINITY), "");
    }

    #[test]
    fn format_duration_pads_both_parts() {
        assert_eq!(format_duration(75.0), "01:15");
        assert_eq!(format_duration(600.0), "10:00");
        assert_eq!(format_duration(5.0), "00:05");
    }

    #[test]
    fn format_duration_minutes_unbounded() {
        assert_eq!(format_duration(3661.0), "61:01");
        assert_eq!(format_duration(6000.0), "100:00");
    }

    #[test]
    fn format_duration_rounds_to_nearest_second() {
        assert_eq!(format_duration(59.5), "01:00");
        assert_eq!(format_duration(59.4), "00:59");
        // Small positive values still render
        assert_eq!(format_duration(0.2), "00:00");
    }
}
