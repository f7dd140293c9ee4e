use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;

/// Renders an elapsed time as `HH:MM:SS.mmm`.
///
/// Hours, minutes and seconds are zero-padded to two digits and milliseconds to three. Hours are
/// not clamped, so 100 hours renders as `100:00:00.000`. Anything below a millisecond is dropped.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use lapwatch::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_millis(3_725_025)), "01:02:05.025");
/// ```
#[must_use]
#[expect(
    clippy::integer_division,
    reason = "the remainder of each division is carried into the next smaller unit"
)]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();

    let hours = total_secs / SECS_PER_HOUR;
    let minutes = (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total_secs % SECS_PER_MINUTE;
    let millis = elapsed.subsec_millis();

    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00:00.000");
    }

    #[test]
    fn every_unit_is_padded() {
        assert_eq!(format_elapsed(Duration::from_millis(3_725_025)), "01:02:05.025");
        assert_eq!(format_elapsed(Duration::from_millis(7)), "00:00:00.007");
        assert_eq!(format_elapsed(Duration::from_millis(61_100)), "00:01:01.100");
    }

    #[test]
    fn two_digit_minutes_are_minutes() {
        // 2h 45m 30s 500ms
        assert_eq!(
            format_elapsed(Duration::from_millis(9_930_500)),
            "02:45:30.500"
        );
        assert_eq!(format_elapsed(Duration::from_secs(59 * 60 + 59)), "00:59:59.000");
    }

    #[test]
    fn hours_are_not_clamped() {
        assert_eq!(format_elapsed(Duration::from_secs(100 * 3600)), "100:00:00.000");
        assert_eq!(format_elapsed(Duration::from_secs(12 * 3600)), "12:00:00.000");
    }

    #[test]
    fn sub_millisecond_precision_is_dropped() {
        assert_eq!(format_elapsed(Duration::from_micros(1_999)), "00:00:00.001");
    }
}
