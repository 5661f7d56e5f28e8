use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places shown in tooltips.
pub const TOOLTIP_DECIMAL_PLACES: u32 = 2;

/// Formats a sample for display, rounded to two decimals without trailing zeros.
///
/// Values outside the decimal range fall back to plain float formatting.
#[must_use]
pub fn format_sample_value(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(decimal) => decimal
            .round_dp_with_strategy(TOOLTIP_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        None => format!("{value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::format_sample_value;

    #[test]
    fn rounds_to_two_decimals_and_trims_zeros() {
        assert_eq!(format_sample_value(3.14159), "3.14");
        assert_eq!(format_sample_value(2.5), "2.5");
        assert_eq!(format_sample_value(30.0), "30");
        assert_eq!(format_sample_value(-7.456), "-7.46");
    }
}
