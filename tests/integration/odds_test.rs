//! Odds conversion integration tests

use odds_hedge::odds::{
    american_to_decimal, american_to_fractional, decimal_to_american, fractional_to_american,
    implied_probability, vig, vig_on_moneyline_split, Fraction, Odds, OddsType,
};

#[test]
fn test_reference_vectors() {
    assert_eq!(american_to_decimal(400.0).unwrap(), 5.0);
    assert_eq!(american_to_decimal(-100.0).unwrap(), 2.0);
    assert_eq!(american_to_decimal(-400.0).unwrap(), 1.25);

    assert_eq!(decimal_to_american(1.25).unwrap(), -400);
    assert_eq!(decimal_to_american(2.0).unwrap(), 100);
    assert_eq!(decimal_to_american(14.0).unwrap(), 1300);

    assert_eq!(american_to_fractional(400.0).unwrap(), Fraction::new(4, 1));
    assert_eq!(american_to_fractional(-400.0).unwrap(), Fraction::new(1, 4));
}

#[test]
fn test_implied_probability_vectors() {
    let p = implied_probability(Odds::American(310.0)).unwrap();
    assert!((p - 0.2439).abs() < 5e-5);

    let p = implied_probability(Odds::American(-280.0)).unwrap();
    assert!((p - 0.7368).abs() < 5e-5);
}

#[test]
fn test_vig_matches_implied_probabilities() {
    let market = [310.0, 2000.0, 110.0, 210.0];
    let total: f64 = market
        .iter()
        .map(|&a| implied_probability(Odds::American(a)).unwrap())
        .sum();
    assert!((vig(&market).unwrap() - (total - 1.0)).abs() < 1e-12);
}

#[test]
fn test_moneyline_vig_is_positive_for_juiced_line() {
    assert!(vig_on_moneyline_split(-280.0, 230.0).unwrap() > 0.0);
    // Arbitrage line: combined implied probability below 1
    assert!(vig_on_moneyline_split(-280.0, 380.0).unwrap() < 0.0);
}

#[test]
fn test_round_trip_through_every_format() {
    for american in [-800.0, -400.0, -200.0, 100.0, 150.0, 300.0, 1300.0] {
        let odds = Odds::American(american);
        let decimal = odds.to_decimal().unwrap();
        let fraction = odds.to_fractional().unwrap();

        assert_eq!(decimal_to_american(decimal).unwrap() as f64, american);
        assert_eq!(fractional_to_american(fraction).unwrap() as f64, american);
    }
}

#[test]
fn test_parsed_quotes_agree() {
    let american = Odds::parse("-400", OddsType::American).unwrap();
    let decimal = Odds::parse("1.25", OddsType::Decimal).unwrap();
    let fractional = Odds::parse("1/4", OddsType::Fractional).unwrap();

    let p = american.implied_probability().unwrap();
    assert!((p - decimal.implied_probability().unwrap()).abs() < 1e-9);
    assert!((p - fractional.implied_probability().unwrap()).abs() < 1e-9);
}
