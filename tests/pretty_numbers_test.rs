use pretty_numbers::{MagnitudeTier, Order, PrettyNumbers};

#[test]
fn test_hundreds_and_thousands_are_unaltered() {
    let pn = PrettyNumbers::new();

    for n in [2_i64, 25, 253, 2534, 25345, 253450, 999_999] {
        assert_eq!(pn.pretty(n).unwrap(), n.to_string());
        assert_eq!(pn.pretty(-n).unwrap(), (-n).to_string());
    }
    assert_eq!(pn.pretty(0).unwrap(), "0");
}

#[test]
fn test_base_numbers() {
    let pn = PrettyNumbers::new();

    assert_eq!(pn.pretty(1_000_000_i64).unwrap(), "1M");
    assert_eq!(pn.pretty(1_000_000_000_i64).unwrap(), "1B");
    assert_eq!(pn.pretty(1_000_000_000_000_i64).unwrap(), "1T");

    assert_eq!(pn.pretty(99_000_000_i64).unwrap(), "99M");
    assert_eq!(pn.pretty(99_000_000_000_i64).unwrap(), "99B");
    assert_eq!(pn.pretty(99_000_000_000_000_i64).unwrap(), "99T");
}

#[test]
fn test_negative_numbers() {
    let pn = PrettyNumbers::new();

    assert_eq!(pn.pretty(-1_000_000_i64).unwrap(), "-1M");
    assert_eq!(pn.pretty(-1_000_000_000_i64).unwrap(), "-1B");
    assert_eq!(pn.pretty(-1_000_000_000_000_i64).unwrap(), "-1T");

    assert_eq!(pn.pretty(-99_000_000_i64).unwrap(), "-99M");
    assert_eq!(pn.pretty(-99_000_000_000_i64).unwrap(), "-99B");
    assert_eq!(pn.pretty(-99_000_000_000_000_i64).unwrap(), "-99T");
}

#[test]
fn test_rounding_down_drops_zero_decimal() {
    let pn = PrettyNumbers::new();

    assert_eq!(pn.pretty(1_020_000_i64).unwrap(), "1M");
    assert_eq!(pn.pretty(1_020_000_000_i64).unwrap(), "1B");
    assert_eq!(pn.pretty(1_020_000_000_000_i64).unwrap(), "1T");

    assert_eq!(pn.pretty(75_020_000_i64).unwrap(), "75M");
    assert_eq!(pn.pretty(203_020_000_000_i64).unwrap(), "203B");
    assert_eq!(pn.pretty(64_020_000_000_000_i64).unwrap(), "64T");
}

#[test]
fn test_rounding_down_to_single_decimal() {
    let pn = PrettyNumbers::new();

    assert_eq!(pn.pretty(1_320_000_i64).unwrap(), "1.3M");
    assert_eq!(pn.pretty(1_320_000_000_i64).unwrap(), "1.3B");
    assert_eq!(pn.pretty(1_320_000_000_000_i64).unwrap(), "1.3T");

    assert_eq!(pn.pretty(75_820_000_i64).unwrap(), "75.8M");
    assert_eq!(pn.pretty(203_820_000_000_i64).unwrap(), "203.8B");
    assert_eq!(pn.pretty(64_820_000_000_000_i64).unwrap(), "64.8T");
}

#[test]
fn test_rounding_up_to_single_decimal() {
    let pn = PrettyNumbers::new();

    assert_eq!(pn.pretty(1_350_000_i64).unwrap(), "1.4M");
    assert_eq!(pn.pretty(1_360_000_000_i64).unwrap(), "1.4B");
    assert_eq!(pn.pretty(1_370_000_000_000_i64).unwrap(), "1.4T");

    assert_eq!(pn.pretty(75_880_000_i64).unwrap(), "75.9M");
    assert_eq!(pn.pretty(203_870_000_000_i64).unwrap(), "203.9B");
    assert_eq!(pn.pretty(64_850_000_000_000_i64).unwrap(), "64.9T");
}

#[test]
fn test_ties_round_away_from_zero() {
    let pn = PrettyNumbers::new();

    // 1.15, 2.45 and 0.35 have no exact binary form.
    assert_eq!(pn.pretty(1_150_000_i64).unwrap(), "1.2M");
    assert_eq!(pn.pretty(-1_150_000_i64).unwrap(), "-1.2M");
    assert_eq!(pn.pretty(2_450_000_000_i64).unwrap(), "2.5B");
    assert_eq!(pn.pretty(1_005_000_000_000_i64).unwrap(), "1T");
    assert_eq!(pn.pretty(1_050_000_000_000_i64).unwrap(), "1.1T");
    assert_eq!(pn.pretty(1_149_999_i64).unwrap(), "1.1M");
}

#[test]
fn test_numeric_strings() {
    let pn = PrettyNumbers::new();

    assert_eq!(pn.pretty("1350000").unwrap(), "1.4M");
    assert_eq!(pn.pretty("1360000000").unwrap(), "1.4B");
    assert_eq!(pn.pretty("1370000000000").unwrap(), "1.4T");

    assert_eq!(pn.pretty("75880000").unwrap(), "75.9M");
    assert_eq!(pn.pretty("203870000000").unwrap(), "203.9B");
    assert_eq!(pn.pretty("64850000000000").unwrap(), "64.9T");

    assert_eq!(pn.pretty("-99000000000").unwrap(), "-99B");
    assert_eq!(pn.pretty("2534").unwrap(), "2534");
}

#[test]
fn test_strings_and_numbers_agree() {
    let pn = PrettyNumbers::new();

    for n in [2534_i64, 1_350_000, -75_880_000, 203_870_000_000, 64_850_000_000_000] {
        assert_eq!(pn.pretty(n).unwrap(), pn.pretty(n.to_string().as_str()).unwrap());
        assert_eq!(pn.pretty(n).unwrap(), pn.pretty(n as f64).unwrap());
    }
}

#[test]
fn test_sign_only_changes_the_rendered_sign() {
    let pn = PrettyNumbers::new();

    for n in [1_i64, 999_999, 1_000_000, 1_350_000, 999_999_999, 5_550_000_000, 12_345_678_901_234] {
        let positive = pn.pretty(n).unwrap();
        assert_eq!(pn.pretty(-n).unwrap(), format!("-{positive}"));
    }
}

#[test]
fn test_rejects_malformed_strings() {
    let pn = PrettyNumbers::new();

    for bad in ["ABCD", "1 * 6", "25,000", "12abc", "1.2.3", "-", "", " 1000000"] {
        let err = pn.pretty(bad).unwrap_err();
        assert!(err.is_invalid_argument(), "{bad:?} should be rejected");
        assert!(err.to_string().contains("expected a number or valid numeric string"));
    }
}

#[test]
fn test_rejects_nan() {
    let pn = PrettyNumbers::new();

    assert!(pn.pretty(f64::NAN).unwrap_err().is_invalid_argument());
    assert!(pn.pretty(f64::INFINITY).unwrap_err().is_invalid_argument());
}

#[test]
fn test_tiers_can_be_used_directly() {
    let millions = MagnitudeTier::new(Order::Millions);

    assert!(millions.is_in_range(-5_000_000.0).unwrap());
    assert_eq!(millions.round(-5_000_000.0).unwrap(), "-5M");
    assert!(millions.round(5_000.0).unwrap_err().is_invalid_argument());
    assert!(!millions.is_in_range(999_999_999.5).unwrap());
    assert!(millions.round(999_999_999.5).unwrap_err().is_invalid_argument());
    assert!(millions.round(f64::NAN).unwrap_err().is_invalid_argument());
}
