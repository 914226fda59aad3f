/// Drop everything past the second decimal, e.g. 1.3571 -> 1.35.
pub fn truncate_hundredths(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}

/// Whitespace-separated fields of an input line.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_instead_of_rounding() {
        assert_eq!(truncate_hundredths(1.359), 1.35);
        assert_eq!(truncate_hundredths(0.999), 0.99);
        assert_eq!(truncate_hundredths(2.0), 2.0);
    }

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(split_fields("  pkg1 50\t30  OFR001 "), ["pkg1", "50", "30", "OFR001"]);
        assert!(split_fields("   ").is_empty());
    }
}
