//! Application entry point and dispatch.

use anyhow::Result;

use scalecalc_chart::{AxisBounds, ChartSeries, ComparisonChart, SeriesStyle};
use scalecalc_cli::completion::generate_completion;
use scalecalc_cli::output::{write_text, CurveExport, Export, LawExport};
use scalecalc_cli::presenter::{color_enabled, TablePresenter};
use scalecalc_core::range::{doublings, linspace};
use scalecalc_core::scenario::{scenarios_from_fractions, Scenario};
use scalecalc_core::{AmdahlModel, ScalingError, ScalingLaw};

use crate::config::AppConfig;

/// Fallback terminal width when auto-detection fails.
const FALLBACK_WIDTH: u16 = 100;
/// Default chart height in rows.
const DEFAULT_HEIGHT: u16 = 30;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let laws = ScalingLaw::select(&config.law)?;
    let scenarios = scenarios_from_fractions(&config.parallel_fractions()?);
    validate_range(config)?;

    tracing::debug!(
        law = %config.law,
        scenarios = scenarios.len(),
        total_time = config.total_time,
        "Configured"
    );

    if config.json {
        run_json(config, &laws, &scenarios)
    } else if config.table {
        run_table(config, &laws, &scenarios)
    } else {
        run_chart(config, &laws, &scenarios)
    }
}

/// Compose one law's comparison chart: a curve per scenario, plus the
/// dotted Amdahl asymptote for each non-ideal scenario when requested.
fn build_comparison(
    law: ScalingLaw,
    scenarios: &[Scenario],
    total_time: f64,
    grid: &[f64],
    with_limits: bool,
) -> Result<ComparisonChart> {
    let mut chart = ComparisonChart::new(law.title(), grid_bounds(grid));
    let model = law.model();
    let mut palette_index = 0;
    for scenario in scenarios {
        let input = scenario.input(total_time, grid);
        let curve = model.speedup(&input)?;
        let style = if scenario.is_ideal() {
            SeriesStyle::ideal()
        } else {
            let style = SeriesStyle::for_scenario(palette_index);
            palette_index += 1;
            style
        };
        chart.push_series(ChartSeries::new(scenario.label.clone(), style, &curve));
        if law == ScalingLaw::Amdahl && with_limits && !scenario.is_ideal() {
            let limit = AmdahlModel::new().limit(&input)?;
            chart.push_limit(&scenario.label, style.to_dotted(), &limit);
        }
    }
    Ok(chart)
}

fn run_chart(config: &AppConfig, laws: &[ScalingLaw], scenarios: &[Scenario]) -> Result<()> {
    let grid = sample_grid(config)?;
    let (width, height) = chart_dimensions(config);
    let colored = config.output.is_none() && color_enabled();

    let mut artifact = String::new();
    for &law in laws {
        let chart = build_comparison(law, scenarios, config.total_time, &grid, !config.no_limits)?;
        tracing::debug!(law = %law, series = chart.series_count(), "Rendering comparison chart");
        if colored {
            artifact.push_str(&chart.to_ansi(width, height));
        } else {
            artifact.push_str(&chart.to_text(width, height));
        }
    }
    emit(config, &artifact)
}

fn run_table(config: &AppConfig, laws: &[ScalingLaw], scenarios: &[Scenario]) -> Result<()> {
    let grid = doublings(config.min_procs, config.max_procs);
    let colored = config.output.is_none() && color_enabled();
    let presenter = TablePresenter::new(colored);

    let mut artifact = String::new();
    for (index, &law) in laws.iter().enumerate() {
        let model = law.model();
        let mut curves = Vec::new();
        for scenario in scenarios {
            let curve = model.speedup(&scenario.input(config.total_time, &grid))?;
            curves.push((scenario.label.clone(), curve));
        }
        if index > 0 {
            artifact.push('\n');
        }
        artifact.push_str(&presenter.render(law.title(), &curves));
    }
    emit(config, &artifact)
}

fn run_json(config: &AppConfig, laws: &[ScalingLaw], scenarios: &[Scenario]) -> Result<()> {
    let grid = sample_grid(config)?;
    let mut export = Export { laws: Vec::new() };
    for &law in laws {
        let model = law.model();
        let mut series = Vec::new();
        for scenario in scenarios {
            let curve = model.speedup(&scenario.input(config.total_time, &grid))?;
            series.push(CurveExport::new(scenario.label.clone(), &curve));
        }
        export.laws.push(LawExport {
            law: law.to_string(),
            title: law.title().to_string(),
            series,
        });
    }
    let json = export.to_json()?;
    emit(config, &format!("{json}\n"))
}

/// Send the artifact to the configured destination.
fn emit(config: &AppConfig, artifact: &str) -> Result<()> {
    if let Some(ref path) = config.output {
        write_text(path, artifact)?;
        tracing::info!(path = %path, "Wrote artifact");
    } else {
        print!("{artifact}");
    }
    Ok(())
}

/// The evenly sampled processor grid used by chart and JSON output.
fn sample_grid(config: &AppConfig) -> Result<Vec<f64>, ScalingError> {
    if config.points < 2 {
        return Err(ScalingError::InvalidArgument(format!(
            "points must be at least 2, got {}",
            config.points
        )));
    }
    Ok(linspace(config.min_procs, config.max_procs, config.points))
}

fn validate_range(config: &AppConfig) -> Result<(), ScalingError> {
    if !config.min_procs.is_finite() || config.min_procs <= 0.0 {
        return Err(ScalingError::InvalidArgument(format!(
            "min-procs must be positive, got {}",
            config.min_procs
        )));
    }
    if !config.max_procs.is_finite() || config.max_procs <= config.min_procs {
        return Err(ScalingError::InvalidArgument(format!(
            "max-procs must exceed min-procs, got {} and {}",
            config.max_procs, config.min_procs
        )));
    }
    Ok(())
}

fn grid_bounds(grid: &[f64]) -> AxisBounds {
    let min = grid.iter().copied().fold(f64::INFINITY, f64::min);
    let max = grid.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    AxisBounds::new(min, max)
}

fn chart_dimensions(config: &AppConfig) -> (u16, u16) {
    let width = if config.width > 0 {
        config.width
    } else {
        crossterm::terminal::size()
            .map(|(width, _)| width)
            .unwrap_or(FALLBACK_WIDTH)
            .clamp(40, 120)
    };
    let height = if config.height > 0 {
        config.height
    } else {
        DEFAULT_HEIGHT
    };
    (width, height)
}
