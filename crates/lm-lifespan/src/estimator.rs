// estimator.rs — Remaining-lifespan estimation.
//
// `estimate` is the pure operation: validate the inputs, look up the
// average lifespan, subtract the age, convert into the chosen unit.
//
// `LifespanEstimator` holds the form state around it. It keeps two derived
// values, `remaining_years` (set only by a successful calculate) and
// `remaining_time` (recomputed from `remaining_years` on every unit change),
// so that `remaining_time == convert(remaining_years, time_unit)` holds
// after every transition.

use serde::{Deserialize, Serialize};

use crate::error::{Field, LifespanError};
use crate::table::LifespanTable;
use crate::units::{convert, glyph_count, Gender, TimeUnit};

/// Raw form inputs. Any of them may be absent until the user fills them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EstimationInput {
    /// Age exactly as typed.
    pub age: Option<String>,
    pub gender: Option<Gender>,
    pub nationality: Option<String>,
}

impl EstimationInput {
    pub fn new(age: impl Into<String>, gender: Gender, nationality: impl Into<String>) -> Self {
        Self {
            age: Some(age.into()),
            gender: Some(gender),
            nationality: Some(nationality.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Average lifespan minus age. Negative once the average is outlived.
    pub remaining_years: i64,
    pub time_unit: TimeUnit,
    pub remaining_time: i64,
}

impl EstimationResult {
    pub fn new(remaining_years: i64, time_unit: TimeUnit) -> Self {
        Self {
            remaining_years,
            time_unit,
            remaining_time: convert(remaining_years, time_unit),
        }
    }

    /// The same estimate expressed in another unit.
    pub fn in_unit(&self, time_unit: TimeUnit) -> Self {
        Self::new(self.remaining_years, time_unit)
    }

    pub fn glyph_count(&self) -> usize {
        glyph_count(self.remaining_time)
    }
}

/// Parse an age the way an integer-prefix parser reads form text: skip
/// leading whitespace, allow a `+`, then take the run of ASCII digits.
/// "30.7" is 30, "42 years" is 42; text without leading digits is `None`.
pub fn parse_age(text: &str) -> Option<u32> {
    let rest = text.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    rest[..end].parse().ok()
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Estimate remaining time for a fully populated input.
pub fn estimate(
    table: &LifespanTable,
    input: &EstimationInput,
    time_unit: TimeUnit,
) -> Result<EstimationResult, LifespanError> {
    let age = present(&input.age).and_then(parse_age);
    let nationality = present(&input.nationality);

    let mut missing = Vec::new();
    if age.is_none() {
        missing.push(Field::Age);
    }
    if input.gender.is_none() {
        missing.push(Field::Gender);
    }
    if nationality.is_none() {
        missing.push(Field::Nationality);
    }

    let (Some(age), Some(gender), Some(nationality)) = (age, input.gender, nationality) else {
        return Err(LifespanError::missing(missing));
    };

    let average = table.lookup(nationality, gender)?;
    let remaining_years = i64::from(average) - i64::from(age);
    tracing::debug!(
        nationality,
        %gender,
        age,
        average,
        remaining_years,
        "estimated remaining lifespan"
    );
    Ok(EstimationResult::new(remaining_years, time_unit))
}

/// Form state for the calculator.
#[derive(Debug, Clone)]
pub struct LifespanEstimator {
    table: LifespanTable,
    input: EstimationInput,
    time_unit: TimeUnit,
    remaining_years: Option<i64>,
    remaining_time: Option<i64>,
}

impl LifespanEstimator {
    pub fn new(table: LifespanTable) -> Self {
        Self {
            table,
            input: EstimationInput::default(),
            time_unit: TimeUnit::default(),
            remaining_years: None,
            remaining_time: None,
        }
    }

    /// Start with a unit other than the default.
    pub fn with_time_unit(mut self, time_unit: TimeUnit) -> Self {
        self.time_unit = time_unit;
        self
    }

    pub fn table(&self) -> &LifespanTable {
        &self.table
    }

    pub fn input(&self) -> &EstimationInput {
        &self.input
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.input.age = Some(age.into());
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.input.gender = Some(gender);
    }

    pub fn set_nationality(&mut self, nationality: impl Into<String>) {
        self.input.nationality = Some(nationality.into());
    }

    pub fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    /// Change the unit. An existing estimate is re-expressed in the new unit
    /// without reading the inputs again.
    pub fn set_time_unit(&mut self, time_unit: TimeUnit) {
        self.time_unit = time_unit;
        self.recompute_remaining_time();
    }

    /// Run the estimate on the current inputs. On error nothing changes.
    pub fn calculate(&mut self) -> Result<EstimationResult, LifespanError> {
        let result = estimate(&self.table, &self.input, self.time_unit)?;
        self.remaining_years = Some(result.remaining_years);
        self.recompute_remaining_time();
        Ok(result)
    }

    /// Derive `remaining_time` from `remaining_years` and the current unit.
    pub fn recompute_remaining_time(&mut self) {
        if let Some(years) = self.remaining_years {
            let time = convert(years, self.time_unit);
            tracing::debug!(years, unit = %self.time_unit, time, "recomputed remaining time");
            self.remaining_time = Some(time);
        }
    }

    pub fn remaining_years(&self) -> Option<i64> {
        self.remaining_years
    }

    pub fn remaining_time(&self) -> Option<i64> {
        self.remaining_time
    }

    /// The current estimate, if one has been calculated.
    pub fn result(&self) -> Option<EstimationResult> {
        match (self.remaining_years, self.remaining_time) {
            (Some(remaining_years), Some(remaining_time)) => Some(EstimationResult {
                remaining_years,
                time_unit: self.time_unit,
                remaining_time,
            }),
            _ => None,
        }
    }

    pub fn glyph_count(&self) -> usize {
        self.remaining_time.map_or(0, glyph_count)
    }
}

impl Default for LifespanEstimator {
    fn default() -> Self {
        Self::new(LifespanTable::builtin())
    }
}
