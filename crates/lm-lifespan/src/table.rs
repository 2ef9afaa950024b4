// table.rs — The static average-lifespan table.
//
// The table is embedded data: read-only, fixed at compile time, listed in a
// stable order. Lookups are explicit and validated; an unknown nationality
// is reported instead of defaulting.

use serde::Serialize;

use crate::error::LifespanError;
use crate::units::Gender;

/// Average lifespan in whole years, per gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AverageLifespan {
    pub male: u32,
    pub female: u32,
    pub other: u32,
}

impl AverageLifespan {
    const fn new(male: u32, female: u32, other: u32) -> Self {
        Self {
            male,
            female,
            other,
        }
    }

    pub fn for_gender(&self, gender: Gender) -> u32 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
            Gender::Other => self.other,
        }
    }
}

const ENTRIES: &[(&str, AverageLifespan)] = &[
    ("United States", AverageLifespan::new(76, 81, 78)),
    ("Canada", AverageLifespan::new(80, 84, 82)),
    ("United Kingdom", AverageLifespan::new(79, 83, 81)),
    ("Germany", AverageLifespan::new(79, 84, 81)),
    ("France", AverageLifespan::new(80, 85, 82)),
    ("Italy", AverageLifespan::new(81, 85, 83)),
    ("Spain", AverageLifespan::new(80, 86, 83)),
    ("Sweden", AverageLifespan::new(81, 84, 82)),
    ("Norway", AverageLifespan::new(81, 84, 82)),
    ("Finland", AverageLifespan::new(79, 84, 81)),
    ("Denmark", AverageLifespan::new(79, 83, 81)),
    ("Netherlands", AverageLifespan::new(80, 83, 81)),
    ("Belgium", AverageLifespan::new(79, 84, 81)),
    ("Switzerland", AverageLifespan::new(82, 85, 83)),
    ("Austria", AverageLifespan::new(79, 84, 81)),
    ("Poland", AverageLifespan::new(74, 82, 78)),
    ("Russia", AverageLifespan::new(68, 78, 73)),
    ("Ukraine", AverageLifespan::new(67, 77, 72)),
    ("Greece", AverageLifespan::new(79, 84, 81)),
    ("Portugal", AverageLifespan::new(78, 84, 81)),
    ("Ireland", AverageLifespan::new(80, 84, 82)),
    ("Israel", AverageLifespan::new(81, 84, 82)),
    ("China", AverageLifespan::new(75, 78, 76)),
    ("Japan", AverageLifespan::new(81, 87, 84)),
    ("South Korea", AverageLifespan::new(80, 86, 83)),
    ("India", AverageLifespan::new(69, 72, 70)),
    ("Nigeria", AverageLifespan::new(54, 56, 55)),
    ("South Africa", AverageLifespan::new(62, 68, 65)),
    ("Kenya", AverageLifespan::new(65, 70, 67)),
    ("Egypt", AverageLifespan::new(70, 74, 72)),
];

/// Nationality → gender → average lifespan.
#[derive(Debug, Clone, Copy)]
pub struct LifespanTable {
    entries: &'static [(&'static str, AverageLifespan)],
}

impl LifespanTable {
    /// The embedded table.
    pub fn builtin() -> Self {
        Self { entries: ENTRIES }
    }

    /// Nationalities in table order.
    pub fn nationalities(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// All rows in table order.
    pub fn entries(&self) -> &'static [(&'static str, AverageLifespan)] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve user text to the canonical key, ignoring case and
    /// surrounding whitespace.
    pub fn resolve(&self, nationality: &str) -> Option<&'static str> {
        let wanted = nationality.trim();
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|(name, _)| *name)
    }

    pub fn get(&self, nationality: &str) -> Option<&AverageLifespan> {
        let key = self.resolve(nationality)?;
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, lifespan)| lifespan)
    }

    /// Average lifespan for a nationality/gender pair.
    pub fn lookup(&self, nationality: &str, gender: Gender) -> Result<u32, LifespanError> {
        self.get(nationality)
            .map(|lifespan| lifespan.for_gender(gender))
            .ok_or_else(|| {
                tracing::warn!(nationality, %gender, "nationality not in lifespan table");
                LifespanError::UndefinedLookup {
                    nationality: nationality.to_string(),
                    gender,
                }
            })
    }
}

impl Default for LifespanTable {
    fn default() -> Self {
        Self::builtin()
    }
}
