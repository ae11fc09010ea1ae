use std::time::Duration;

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Three digit counter display, clamped to `0..=999`.
pub(crate) fn format_for_counter(value: u64) -> String {
    format!("{:03}", value.min(999))
}

/// Timer delay in whole milliseconds, rounded up so a timer never fires before `delay` elapsed.
pub(crate) fn timeout_millis(delay: Duration) -> u32 {
    delay
        .as_micros()
        .div_ceil(1000)
        .try_into()
        .unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_zero_padded_and_clamped() {
        assert_eq!(format_for_counter(0), "000");
        assert_eq!(format_for_counter(42), "042");
        assert_eq!(format_for_counter(5_000), "999");
    }

    #[test]
    fn timeout_rounds_partial_millis_up() {
        assert_eq!(timeout_millis(Duration::from_millis(300)), 300);
        assert_eq!(timeout_millis(Duration::from_micros(1)), 1);
        assert_eq!(timeout_millis(Duration::from_micros(899_001)), 900);
        assert_eq!(timeout_millis(Duration::ZERO), 0);
    }
}
