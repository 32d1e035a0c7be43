use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::error::{Error, Result};
use crate::perf::Sample;
use crate::perf_curve::ScalingCurve;

const FONT: &str = "sans-serif";
const POINT_SIZE: u32 = 3;

#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub title: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Chart output is SVG only.
pub fn check_output_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("svg") => Ok(()),
        _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Y range around `values` with a 10% margin, clamped at zero.
pub fn axis_range(values: &[f64]) -> Range<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }

    let mut margin = (max - min) / 10.0;
    if margin <= 0.0 {
        margin = if max != 0.0 { max.abs() / 10.0 } else { 1.0 };
    }

    (min - margin).max(0.0)..max + margin
}

/// X range covering every thread count.
pub fn thread_range(samples: &[Sample]) -> Range<u32> {
    let x_min = samples.iter().map(|s| s.thread_count).min().unwrap_or(1);
    let x_max = samples.iter().map(|s| s.thread_count).max().unwrap_or(1);

    if x_min == x_max {
        match x_max.checked_add(1) {
            Some(end) => x_min.saturating_sub(1)..end,
            None => x_min - 2..x_max,
        }
    } else {
        x_min..x_max
    }
}

struct Panel<'a> {
    caption: String,
    y_label: &'a str,
    legend: &'a str,
    color: RGBColor,
    y_format: fn(&f64) -> String,
}

/// Keeps the legend clear of a rising curve.
fn legend_position(values: &[f64]) -> SeriesLabelPosition {
    match (values.first(), values.last()) {
        (Some(first), Some(last)) if last > first => SeriesLabelPosition::UpperLeft,
        _ => SeriesLabelPosition::UpperRight,
    }
}

pub fn render(curve: &ScalingCurve, config: &PlotConfig) -> Result<()> {
    check_output_path(&config.path)?;

    let root = SVGBackend::new(&config.path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let areas = root.split_evenly((3, 1));
    let x_range = thread_range(curve.samples());

    let times: Vec<_> = curve.times().collect();
    let time_panel = Panel {
        caption: format!("{} vs Threads", config.title),
        y_label: "Time (ms)",
        legend: "Time (ms)",
        color: BLUE,
        y_format: |v| format!("{:.0}", v),
    };
    draw_panel(&areas[0], &time_panel, x_range.clone(), &times)?;

    let speedup: Vec<_> = curve.speedup_points().collect();
    let speedup_panel = Panel {
        caption: "Speedup vs Threads".to_string(),
        y_label: "Speedup (T1/Tn)",
        legend: "Speedup (T1/Tn)",
        color: RED,
        y_format: |v| format!("{:.1}", v),
    };
    draw_panel(&areas[1], &speedup_panel, x_range.clone(), &speedup)?;

    let efficiency: Vec<_> = curve.efficiency_points().collect();
    let efficiency_panel = Panel {
        caption: "Efficiency vs Threads".to_string(),
        y_label: "Efficiency (S/N)",
        legend: "Efficiency (S/N)",
        color: GREEN,
        y_format: |v| format!("{:.2}", v),
    };
    draw_panel(&areas[2], &efficiency_panel, x_range, &efficiency)?;

    root.present()?;

    info!(path = %config.path.display(), "wrote chart");
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<SVGBackend, Shift>,
    panel: &Panel,
    x_range: Range<u32>,
    points: &[(u32, f64)],
) -> Result<()> {
    let values: Vec<f64> = points.iter().map(|&(_, y)| y).collect();
    let color = panel.color;

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .caption(&panel.caption, (FONT, 18))
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_range, axis_range(&values))?;

    chart
        .configure_mesh()
        .x_label_formatter(&|v| format!("{}", v))
        .y_label_formatter(&panel.y_format)
        .x_labels(20)
        .y_labels(8)
        .y_desc(panel.y_label)
        .x_desc("Threads (N)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), color))?
        .label(panel.legend)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

    chart.draw_series(
        points
            .iter()
            .map(|&point| Circle::new(point, POINT_SIZE, color.filled())),
    )?;

    chart
        .configure_series_labels()
        .position(legend_position(&values))
        .label_font((FONT, 13))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perf_data::PERF_DATA_OPTIMIZED;

    #[test]
    fn axis_range_pads_both_ends() {
        let range = axis_range(&[1000.0, 2000.0]);
        assert_eq!(range, 900.0..2100.0);
    }

    #[test]
    fn axis_range_clamps_at_zero() {
        let range = axis_range(&[0.3, 1.0]);
        assert!((range.start - 0.23).abs() < 1e-9);
        assert!(axis_range(&[0.01, 100.0]).start == 0.0);
    }

    #[test]
    fn flat_series_still_has_width() {
        let range = axis_range(&[1.0]);
        assert!(range.start < 1.0 && range.end > 1.0);

        let zero = axis_range(&[0.0, 0.0]);
        assert_eq!(zero, 0.0..1.0);
    }

    #[test]
    fn thread_range_spans_samples() {
        assert_eq!(thread_range(&PERF_DATA_OPTIMIZED), 1..16);
        assert_eq!(thread_range(&[Sample::new(1, 10.0)]), 0..2);
        assert_eq!(thread_range(&[Sample::new(u32::MAX, 10.0)]), u32::MAX - 2..u32::MAX);
    }

    #[test]
    fn legend_moves_left_for_rising_curves() {
        let curve = ScalingCurve::new(PERF_DATA_OPTIMIZED.clone()).unwrap();
        let times: Vec<f64> = curve.times().map(|(_, t)| t).collect();

        assert_eq!(legend_position(curve.speedup()), SeriesLabelPosition::UpperLeft);
        assert_eq!(legend_position(curve.efficiency()), SeriesLabelPosition::UpperRight);
        assert_eq!(legend_position(&times), SeriesLabelPosition::UpperRight);
        assert_eq!(legend_position(&[]), SeriesLabelPosition::UpperRight);
    }

    #[test]
    fn only_svg_output_is_accepted() {
        assert!(check_output_path(Path::new("out/scaling.svg")).is_ok());
        assert!(check_output_path(Path::new("SCALING.SVG")).is_ok());
        assert!(matches!(
            check_output_path(Path::new("scaling.png")),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(check_output_path(Path::new("scaling")).is_err());
    }

    #[test]
    fn renders_three_panels_to_svg() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlotConfig {
            title: "Compile time".to_string(),
            path: dir.path().join("scaling.svg"),
            width: 800,
            height: 900,
        };
        let curve = ScalingCurve::new(PERF_DATA_OPTIMIZED.clone()).unwrap();

        render(&curve, &config).unwrap();

        let svg = std::fs::read_to_string(&config.path).unwrap();
        assert!(svg.contains("Compile time vs Threads"));
        assert!(svg.contains("Speedup vs Threads"));
        assert!(svg.contains("Efficiency vs Threads"));
    }

    #[test]
    fn renders_single_sample_at_max_thread_count() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlotConfig {
            title: "Compile time".to_string(),
            path: dir.path().join("big.svg"),
            width: 400,
            height: 600,
        };
        let curve = ScalingCurve::new(vec![Sample::new(u32::MAX, 10.0)]).unwrap();

        render(&curve, &config).unwrap();
        assert!(config.path.exists());
    }
}
