use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use er_study_shared::config::HISTOGRAM_BINS;
use er_study_shared::result::ConfigurationResult;

use crate::histogram::Histogram;

pub const TITLE: &str = "Degree Distribution for Different Configurations";
const SIZE: (u32, u32) = (1000, 600);

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("nothing to plot")]
    Empty,
    #[error("unsupported output format '{0}' (expected .svg)")]
    UnsupportedFormat(String),
    #[error("rendering failed: {0}")]
    Render(String),
}

fn render_error<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

pub fn legend_label(result: &ConfigurationResult) -> String {
    format!(
        "Config {} (n={}, p={:?})",
        result.index,
        result.config.n(),
        result.config.p()
    )
}

/// Overlay one density histogram per configuration, each with a dashed
/// marker at its mean average degree. Only `.svg` paths are accepted.
pub fn render_degree_distributions(
    results: &[ConfigurationResult],
    path: &Path,
) -> Result<(), PlotError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "svg" => draw(SVGBackend::new(path, SIZE).into_drawing_area(), results),
        _ => Err(PlotError::UnsupportedFormat(extension)),
    }
}

pub fn render_svg_string(results: &[ConfigurationResult]) -> Result<String, PlotError> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, SIZE).into_drawing_area();
        draw(root, results)?;
    }
    Ok(buffer)
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    results: &[ConfigurationResult],
) -> Result<(), PlotError> {
    let histograms: Vec<(&ConfigurationResult, Histogram)> = results
        .iter()
        .filter_map(|r| Histogram::density(&r.degree_distribution, HISTOGRAM_BINS).map(|h| (r, h)))
        .collect();
    if histograms.is_empty() {
        return Err(PlotError::Empty);
    }

    let x_min = histograms
        .iter()
        .filter_map(|(_, h)| h.edges().first().copied())
        .fold(f64::INFINITY, f64::min);
    let x_max = histograms
        .iter()
        .filter_map(|(_, h)| h.edges().last().copied())
        .fold(f64::NEG_INFINITY, f64::max);
    let y_max = histograms
        .iter()
        .map(|(_, h)| h.max_density())
        .fold(0.0, f64::max)
        * 1.1;
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };

    root.fill(&WHITE).map_err(render_error)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc("Degree")
        .y_desc("Density")
        .draw()
        .map_err(render_error)?;

    for (i, (result, histogram)) in histograms.iter().enumerate() {
        let color = Palette99::pick(i).mix(0.5);
        chart
            .draw_series(
                histogram
                    .bars()
                    .map(|(left, right, density)| {
                        Rectangle::new([(left, 0.0), (right, density)], color.filled())
                    }),
            )
            .map_err(render_error)?
            .label(legend_label(result))
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));

        let mean = result.mean_average_degree;
        chart
            .draw_series(DashedLineSeries::new(
                vec![(mean, 0.0), (mean, y_max)],
                6,
                4,
                BLACK.mix(0.5).stroke_width(1),
            ))
            .map_err(render_error)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}
