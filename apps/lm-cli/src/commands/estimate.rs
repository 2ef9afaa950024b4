// estimate.rs — One-shot estimate from command-line flags.

use std::io::Write;

use anyhow::Context;
use lm_lifespan::{
    DisplayStyle, EstimationResult, Gender, LifespanEstimator, LifespanTable, TimeUnit,
};
use serde::Serialize;

use crate::config::LifemeterConfig;
use crate::render;

pub struct EstimateArgs {
    pub age: String,
    pub gender: Gender,
    pub nationality: String,
    pub unit: Option<TimeUnit>,
    pub style: Option<DisplayStyle>,
    pub json: bool,
}

#[derive(Serialize)]
struct EstimateReport<'a> {
    nationality: &'a str,
    gender: Gender,
    #[serde(flatten)]
    result: EstimationResult,
    glyph_count: usize,
}

pub fn execute(config: &LifemeterConfig, args: &EstimateArgs) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    write_estimate(config, args, &mut stdout)
}

fn write_estimate(
    config: &LifemeterConfig,
    args: &EstimateArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let table = LifespanTable::builtin();
    let nationality = table
        .resolve(&args.nationality)
        .unwrap_or(args.nationality.as_str());

    let mut estimator = LifespanEstimator::new(table)
        .with_time_unit(args.unit.unwrap_or(config.display.time_unit));
    estimator.set_age(args.age.as_str());
    estimator.set_gender(args.gender);
    estimator.set_nationality(nationality);

    let result = estimator
        .calculate()
        .map_err(|e| anyhow::anyhow!(render::estimate_error(&e)))?;

    if args.json {
        let report = EstimateReport {
            nationality,
            gender: args.gender,
            result,
            glyph_count: result.glyph_count(),
        };
        let json = serde_json::to_string_pretty(&report).context("failed to encode estimate")?;
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    writeln!(
        out,
        "Estimated remaining years: {} ({}, {})",
        result.remaining_years, nationality, args.gender
    )?;
    let style = args.style.unwrap_or(config.display.style);
    if let Some(summary) = render::remaining_summary(&result, style, config.display.glyphs_per_row)
    {
        write!(out, "{}", summary)?;
    }
    Ok(())
}
