// render.rs — Plain-text rendering of estimates, goals and the table.

use lm_goal::LifeGoal;
use lm_lifespan::{DisplayStyle, EstimationResult, LifespanError, LifespanTable};

/// "You have approximately N <unit> left." followed by the glyph rows, or
/// `None` when no time remains.
pub fn remaining_summary(
    result: &EstimationResult,
    style: DisplayStyle,
    per_row: usize,
) -> Option<String> {
    if result.remaining_time <= 0 {
        return None;
    }
    let mut out = format!(
        "You have approximately {} {} left.\n",
        result.remaining_time, result.time_unit
    );
    out.push_str(&glyph_rows(result.glyph_count(), style, per_row));
    Some(out)
}

/// `count` glyphs, wrapped every `per_row` (0 means no wrapping).
pub fn glyph_rows(count: usize, style: DisplayStyle, per_row: usize) -> String {
    if count == 0 {
        return String::new();
    }
    let per_row = if per_row == 0 { count } else { per_row };
    let glyphs = vec![style.glyph(); count];
    let mut out = String::new();
    for row in glyphs.chunks(per_row) {
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

pub fn goal_list(goals: &[LifeGoal]) -> String {
    if goals.is_empty() {
        return "No life goals yet. Add one with `goal <text>`.\n".to_string();
    }
    let mut out = String::new();
    for (i, goal) in goals.iter().enumerate() {
        let mark = if goal.completed { "x" } else { " " };
        out.push_str(&format!("{:>3}. [{}] {}\n", i + 1, mark, goal.text));
    }
    out
}

/// User-facing text for an estimation failure.
pub fn estimate_error(err: &LifespanError) -> String {
    match err {
        LifespanError::MissingField { .. } => format!(
            "Please fill in all fields: age, gender, and nationality. ({})",
            err
        ),
        LifespanError::UndefinedLookup { .. } => format!("Could not estimate: {}", err),
    }
}

pub fn countries_table(table: &LifespanTable) -> String {
    let mut out = format!(
        "{:<16} {:>6} {:>7} {:>6}\n",
        "NATIONALITY", "MALE", "FEMALE", "OTHER"
    );
    out.push_str(&"-".repeat(38));
    out.push('\n');
    for (name, lifespan) in table.entries() {
        out.push_str(&format!(
            "{:<16} {:>6} {:>7} {:>6}\n",
            name, lifespan.male, lifespan.female, lifespan.other
        ));
    }
    out.push_str(&format!("\n{} nationalities.\n", table.len()));
    out
}
