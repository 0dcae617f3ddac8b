/// `m:ss`, minutes unbounded.
#[must_use]
pub fn format_clock(seconds: u64) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}

#[must_use]
pub fn format_one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

#[must_use]
pub fn format_two_decimals(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_seconds() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(75), "1:15");
        assert_eq!(format_clock(3_600), "60:00");
    }

    #[test]
    fn decimals_round() {
        assert_eq!(format_one_decimal(0.0), "0.0");
        assert_eq!(format_one_decimal(1.04), "1.0");
        assert_eq!(format_one_decimal(7.0 / 3.0), "2.3");
        assert_eq!(format_two_decimals(600.0 / 7.0), "85.71");
        assert_eq!(format_two_decimals(100.0), "100.00");
    }
}
