//! Plan command: the service computation run locally over a record export.

use std::path::Path;

use anyhow::{ensure, Context, Result};

use campusnav_lib::{load_record_file, plan_route, CoordinateLayout, PlanOptions};

use crate::commands::StrategyArg;
use crate::output::{render_plan, OutputFormat};

/// Arguments for the plan command.
#[derive(Debug, Clone)]
pub struct PlanCommandArgs<'a> {
    pub records: &'a Path,
    pub from: &'a str,
    pub to: &'a str,
    pub layout: CoordinateLayout,
    pub walking_speed: f64,
    pub strategy: StrategyArg,
    pub format: OutputFormat,
}

pub fn handle_plan(args: &PlanCommandArgs<'_>) -> Result<String> {
    ensure!(
        args.walking_speed.is_finite() && args.walking_speed > 0.0,
        "--walking-speed must be a positive number"
    );
    let records = load_record_file(args.records)
        .with_context(|| format!("failed to load records from {}", args.records.display()))?;

    let request = records.into_request(args.from, args.to);
    let options = PlanOptions {
        layout: args.layout,
        walking_speed: args.walking_speed,
        strategy: args.strategy.into(),
    };
    let plan = plan_route(&request, &options)
        .with_context(|| format!("could not plan a route from {} to {}", args.from, args.to))?;

    render_plan(&plan, args.format)
}
