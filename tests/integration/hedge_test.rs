//! Hedge sizing integration tests

use nalgebra::DVector;
use odds_hedge::hedge::{
    calculate_hedged_bets, calculate_risk_free_bets, is_infeasible, make_payoff_matrix,
    HedgeError, PayoffMatrix,
};

#[test]
fn test_risk_free_bets_return_unit_profit() {
    let m = make_payoff_matrix(&[-280.0, 380.0]).unwrap();
    let bets = calculate_risk_free_bets(&m).unwrap();

    let profits = &m * &bets;
    assert_eq!(profits.len(), 2);
    for profit in profits.iter() {
        assert!((profit - 1.0).abs() < 1e-6);
    }
}

#[test]
fn test_three_way_arbitrage() {
    // Sum of implied probabilities is below 1, so every stake is positive
    let payoff = PayoffMatrix::from_american(&[300.0, 300.0, 300.0]).unwrap();
    let bets = calculate_risk_free_bets(payoff.as_matrix()).unwrap();

    assert!(bets.iter().all(|&stake| stake > 0.0));
    for profit in payoff.outcome_profits(&bets).unwrap().iter() {
        assert!((profit - 1.0).abs() < 1e-9);
    }
    // 3x - x - x = 1 on each outcome
    for stake in bets.iter() {
        assert!((stake - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_singular_market_fails_hard() {
    let m = make_payoff_matrix(&[100.0, 100.0]).unwrap();
    assert_eq!(
        calculate_risk_free_bets(&m).unwrap_err(),
        HedgeError::SingularMatrix
    );
}

#[test]
fn test_infeasible_hedge_poisons_every_stake() {
    let m = make_payoff_matrix(&[-280.0, 380.0]).unwrap();
    let bets = calculate_hedged_bets(&m, &DVector::from_vec(vec![1.0, -5.0])).unwrap();

    assert_eq!(bets.len(), 2);
    assert!(is_infeasible(&bets));
}

#[test]
fn test_hedge_toward_single_outcome() {
    // Profit 10 if the underdog wins, break even otherwise
    let m = make_payoff_matrix(&[-280.0, 380.0]).unwrap();
    let target = DVector::from_vec(vec![0.0, 10.0]);
    let bets = calculate_hedged_bets(&m, &target).unwrap();

    assert!(!is_infeasible(&bets));
    let reached = &m * &bets;
    assert!(reached[0].abs() < 1e-9);
    assert!((reached[1] - 10.0).abs() < 1e-9);
}

#[test]
fn test_payoff_builder_is_pure() {
    let odds = [-280.0, 380.0];
    let first = make_payoff_matrix(&odds).unwrap();
    let second = make_payoff_matrix(&odds).unwrap();

    assert_eq!(odds, [-280.0, 380.0]);
    assert!(first
        .iter()
        .zip(second.iter())
        .all(|(a, b)| a.to_bits() == b.to_bits()));
}
