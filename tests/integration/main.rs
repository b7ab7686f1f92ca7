//! Integration tests across the public API

mod config_test;
mod hedge_test;
mod odds_test;
