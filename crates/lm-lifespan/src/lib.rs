//! # lm-lifespan
//!
//! Remaining-lifespan estimation for lifemeter.
//!
//! Given an age, a gender and a nationality, the estimator looks up an
//! average lifespan in a static table, subtracts the age and converts the
//! remaining years into the selected time unit.
//!
//! ## Key components
//!
//! - [`LifespanTable`] — the embedded nationality → gender → years table
//! - [`estimate`] — pure estimation from a fully populated [`EstimationInput`]
//! - [`convert`] / [`glyph_count`] — derived display values
//! - [`LifespanEstimator`] — the form state: raw inputs, the selected unit,
//!   and the last result, kept consistent on every unit change

pub mod error;
pub mod estimator;
pub mod table;
pub mod units;

pub use error::{Field, LifespanError, ParseError};
pub use estimator::{estimate, parse_age, EstimationInput, EstimationResult, LifespanEstimator};
pub use table::{AverageLifespan, LifespanTable};
pub use units::{convert, glyph_count, DisplayStyle, Gender, TimeUnit, MAX_GLYPHS};
