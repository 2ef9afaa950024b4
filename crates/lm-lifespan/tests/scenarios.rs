// scenarios.rs — End-to-end estimator scenarios.

use lm_lifespan::{
    convert, glyph_count, DisplayStyle, Gender, LifespanEstimator, LifespanTable, TimeUnit,
};

#[test]
fn thirty_year_old_man_in_japan() {
    let mut est = LifespanEstimator::default();
    est.set_age("30");
    est.set_gender(Gender::Male);
    est.set_nationality("Japan");
    est.set_time_unit(TimeUnit::Months);

    let result = est.calculate().unwrap();
    assert_eq!(result.remaining_years, 51);
    assert_eq!(result.remaining_time, 612);
    assert_eq!(result.glyph_count(), 100);
}

#[test]
fn ninety_year_old_woman_in_nigeria() {
    let mut est = LifespanEstimator::default();
    est.set_age("90");
    est.set_gender(Gender::Female);
    est.set_nationality("Nigeria");

    let result = est.calculate().unwrap();
    assert_eq!(result.remaining_years, -34);

    for unit in TimeUnit::ALL {
        est.set_time_unit(unit);
        assert!(est.remaining_time().unwrap() < 0);
        assert_eq!(est.glyph_count(), 0);
    }
}

#[test]
fn every_table_cell_is_reachable() {
    let table = LifespanTable::builtin();
    for (nationality, lifespan) in table.entries() {
        for gender in Gender::ALL {
            let mut est = LifespanEstimator::new(table).with_time_unit(TimeUnit::Years);
            est.set_age("20");
            est.set_gender(gender);
            est.set_nationality(*nationality);
            let result = est.calculate().unwrap();
            assert_eq!(
                result.remaining_years,
                i64::from(lifespan.for_gender(gender)) - 20
            );
        }
    }
}

#[test]
fn repeated_unit_selection_is_idempotent() {
    let mut est = LifespanEstimator::default();
    est.set_age("40");
    est.set_gender(Gender::Other);
    est.set_nationality("Canada");
    est.calculate().unwrap();

    for _ in 0..3 {
        est.set_time_unit(TimeUnit::Weeks);
        assert_eq!(est.remaining_time(), Some(convert(42, TimeUnit::Weeks)));
    }
    assert_eq!(glyph_count(est.remaining_time().unwrap()), 100);
    assert_eq!(DisplayStyle::default().glyph(), "▪️");
}
