//! Odds module
//!
//! Conversion between American, decimal and fractional odds, implied
//! probability and bookmaker vig

mod convert;
mod types;
mod vig;

pub use convert::{
    american_to_decimal, american_to_fractional, decimal_to_american, decimal_to_fractional,
    fraction, fractional_to_american, fractional_to_decimal, implied_probability,
    implied_probability_of,
};
pub use types::{Fraction, Odds, OddsError, OddsType};
pub use vig::{vig, vig_on_moneyline_split, vig_surface};

pub(crate) use convert::{american_implied_probability, ensure_finite};
