// units.rs — Closed enumerations for the estimator inputs and outputs.
//
// Gender and nationality select a table cell; TimeUnit drives the
// conversion of remaining years; DisplayStyle picks the glyph used by the
// visualization. All of them parse from their lowercase names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Upper bound on rendered glyphs, whatever the remaining time.
pub const MAX_GLYPHS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(ParseError {
                kind: "gender",
                value: s.to_string(),
                expected: "male, female, other",
            }),
        }
    }
}

/// The unit remaining time is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Weeks,
    #[default]
    Months,
    Years,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Weeks, TimeUnit::Months, TimeUnit::Years];

    /// How many of this unit make up one year.
    pub fn per_year(&self) -> i64 {
        match self {
            TimeUnit::Weeks => 52,
            TimeUnit::Months => 12,
            TimeUnit::Years => 1,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Weeks => write!(f, "weeks"),
            TimeUnit::Months => write!(f, "months"),
            TimeUnit::Years => write!(f, "years"),
        }
    }
}

impl FromStr for TimeUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weeks" => Ok(TimeUnit::Weeks),
            "months" => Ok(TimeUnit::Months),
            "years" => Ok(TimeUnit::Years),
            _ => Err(ParseError {
                kind: "time unit",
                value: s.to_string(),
                expected: "weeks, months, years",
            }),
        }
    }
}

/// Glyph set used to draw the remaining-time visualization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    #[default]
    Default,
    Cats,
    Eggplants,
}

impl DisplayStyle {
    pub const ALL: [DisplayStyle; 3] = [
        DisplayStyle::Default,
        DisplayStyle::Cats,
        DisplayStyle::Eggplants,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            DisplayStyle::Default => "▪️",
            DisplayStyle::Cats => "🐱",
            DisplayStyle::Eggplants => "🍆",
        }
    }
}

impl fmt::Display for DisplayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayStyle::Default => write!(f, "default"),
            DisplayStyle::Cats => write!(f, "cats"),
            DisplayStyle::Eggplants => write!(f, "eggplants"),
        }
    }
}

impl FromStr for DisplayStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(DisplayStyle::Default),
            "cats" => Ok(DisplayStyle::Cats),
            "eggplants" => Ok(DisplayStyle::Eggplants),
            _ => Err(ParseError {
                kind: "display style",
                value: s.to_string(),
                expected: "default, cats, eggplants",
            }),
        }
    }
}

/// Convert whole remaining years into `unit`.
///
/// Every factor is a whole number, so the product is already integral and
/// rounding (half away from zero) never changes it. Saturates instead of
/// overflowing.
pub fn convert(years: i64, unit: TimeUnit) -> i64 {
    years.saturating_mul(unit.per_year())
}

/// Number of glyphs to draw for `remaining_time`: capped at [`MAX_GLYPHS`],
/// zero when nothing remains.
pub fn glyph_count(remaining_time: i64) -> usize {
    if remaining_time <= 0 {
        return 0;
    }
    usize::try_from(remaining_time).map_or(MAX_GLYPHS, |t| t.min(MAX_GLYPHS))
}
