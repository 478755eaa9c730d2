//! Line chart construction and SVG rendering.
//!
//! A `LinePlot` holds one series per sample. Series longer than
//! `smooth_points` are binned down before rendering so large histograms
//! stay readable.

use crate::parser::schema::SampleHistograms;
use crate::utils::error::PlotError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt::Write as FmtWrite;

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 160.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;
const TICKS: usize = 5;

const PALETTE: &[&str] = &[
    "#7cb5ec", "#434348", "#90ed7d", "#f7a35c", "#8085e9",
    "#f15c80", "#e4d354", "#2b908f", "#f45b5b", "#91e8e1",
];

/// Line chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGraphConfig {
    pub id: String,
    pub title: String,
    pub ylab: String,
    pub xlab: String,

    /// Maximum number of points drawn per series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth_points: Option<usize>,

    /// Upper bound of the x axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xmax: Option<u64>,

    #[serde(rename = "xDecimals")]
    pub x_decimals: bool,

    /// Tooltip template with `{point.x}` and `{point.y}` placeholders
    pub tt_label: String,
}

impl Default for LineGraphConfig {
    fn default() -> Self {
        Self {
            id: "linegraph".to_string(),
            title: String::new(),
            ylab: String::new(),
            xlab: String::new(),
            smooth_points: None,
            xmax: None,
            x_decimals: true,
            tt_label: "{point.x}: {point.y}".to_string(),
        }
    }
}

impl LineGraphConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_labels(mut self, xlab: impl Into<String>, ylab: impl Into<String>) -> Self {
        self.xlab = xlab.into();
        self.ylab = ylab.into();
        self
    }

    pub fn with_smooth_points(mut self, smooth_points: usize) -> Self {
        self.smooth_points = Some(smooth_points);
        self
    }

    pub fn with_xmax(mut self, xmax: u64) -> Self {
        self.xmax = Some(xmax);
        self
    }

    pub fn with_x_decimals(mut self, x_decimals: bool) -> Self {
        self.x_decimals = x_decimals;
        self
    }

    pub fn with_tt_label(mut self, tt_label: impl Into<String>) -> Self {
        self.tt_label = tt_label.into();
        self
    }

    /// Fill the tooltip template for one point
    pub fn tooltip(&self, x: u64, y: u64) -> String {
        self.tt_label
            .replace("{point.x}", &x.to_string())
            .replace("{point.y}", &y.to_string())
    }
}

/// One named line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<(u64, u64)>,
}

/// A line chart ready to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePlot {
    pub config: LineGraphConfig,
    pub series: Vec<Series>,
}

/// Build a line plot from per-sample histograms
///
/// **Public** - main entry point for plot construction
///
/// Series are ordered by sample name, points by x. When the config sets
/// `smooth_points`, longer series are binned down to at most that many points.
pub fn plot(data: &SampleHistograms, config: LineGraphConfig) -> LinePlot {
    let series = data
        .iter()
        .map(|(name, histogram)| {
            let points: Vec<(u64, u64)> = histogram.iter().map(|(x, y)| (*x, *y)).collect();
            let points = match config.smooth_points {
                Some(n) => smooth_points(&points, n),
                None => points,
            };
            Series {
                name: name.clone(),
                points,
            }
        })
        .collect::<Vec<_>>();

    debug!("Built line plot '{}' with {} series", config.id, series.len());
    LinePlot { config, series }
}

/// Bin sorted points down to at most `max_points`
///
/// Each bin of consecutive points is replaced by a single point at the
/// bin's last x carrying the sum of the bin's counts.
pub fn smooth_points(points: &[(u64, u64)], max_points: usize) -> Vec<(u64, u64)> {
    if max_points == 0 || points.len() <= max_points {
        return points.to_vec();
    }

    let bin_size = points.len().div_ceil(max_points);
    points
        .chunks(bin_size)
        .filter_map(|bin| {
            let (last_x, _) = *bin.last()?;
            let sum = bin.iter().map(|(_, y)| *y).fold(0u64, u64::saturating_add);
            Some((last_x, sum))
        })
        .collect()
}

impl LinePlot {
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }

    /// Upper bound of the x axis
    fn x_limit(&self) -> u64 {
        let data_max = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|(x, _)| *x))
            .max()
            .unwrap_or(0);
        self.config.xmax.unwrap_or(data_max).max(1)
    }

    /// Upper bound of the y axis, over points inside the x range
    fn y_limit(&self, x_limit: u64) -> u64 {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .filter(|(x, _)| *x <= x_limit)
            .map(|(_, y)| *y)
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// Render the chart as a standalone SVG document
    pub fn render_svg(&self) -> Result<String, PlotError> {
        if self.is_empty() {
            return Err(PlotError::EmptyData);
        }
        if self.config.smooth_points == Some(0) {
            return Err(PlotError::InvalidConfig("smooth_points must be positive".to_string()));
        }

        let x_limit = self.x_limit();
        let y_limit = self.y_limit(x_limit);
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let sx = |x: u64| MARGIN_LEFT + (x as f64 / x_limit as f64) * plot_w;
        let sy = |y: u64| MARGIN_TOP + plot_h - (y as f64 / y_limit as f64) * plot_h;

        let mut svg = String::new();
        // Writing into a String cannot fail
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            escape(&self.config.id),
            WIDTH,
            HEIGHT,
            WIDTH,
            HEIGHT
        );
        svg.push_str(r#"<style>.axis { font: 11px sans-serif; } .point:hover { r: 4; }</style>"#);
        let _ = write!(
            svg,
            r#"<text x="{}" y="20" font-size="15" text-anchor="middle" font-weight="bold">{}</text>"#,
            WIDTH / 2.0,
            escape(&self.config.title)
        );

        // Axes
        let _ = write!(
            svg,
            r#"<line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="black"/><line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="black"/>"#,
            l = MARGIN_LEFT,
            r = MARGIN_LEFT + plot_w,
            t = MARGIN_TOP,
            b = MARGIN_TOP + plot_h
        );

        for i in 0..=TICKS {
            let x_val = x_limit as f64 * i as f64 / TICKS as f64;
            let x_label = if self.config.x_decimals {
                format!("{:.1}", x_val)
            } else {
                format!("{}", x_val.round() as u64)
            };
            let x_pos = MARGIN_LEFT + plot_w * i as f64 / TICKS as f64;
            let _ = write!(
                svg,
                r#"<text class="axis" x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
                x_pos,
                MARGIN_TOP + plot_h + 16.0,
                x_label
            );

            let y_val = (y_limit as f64 * i as f64 / TICKS as f64).round() as u64;
            let y_pos = MARGIN_TOP + plot_h - plot_h * i as f64 / TICKS as f64;
            let _ = write!(
                svg,
                r#"<text class="axis" x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"#,
                MARGIN_LEFT - 6.0,
                y_pos + 4.0,
                y_val
            );
        }

        let _ = write!(
            svg,
            r#"<text class="axis" x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
            MARGIN_LEFT + plot_w / 2.0,
            HEIGHT - 12.0,
            escape(&self.config.xlab)
        );
        let _ = write!(
            svg,
            r#"<text class="axis" x="16" y="{:.2}" text-anchor="middle" transform="rotate(-90 16 {:.2})">{}</text>"#,
            MARGIN_TOP + plot_h / 2.0,
            MARGIN_TOP + plot_h / 2.0,
            escape(&self.config.ylab)
        );

        // Series
        for (i, series) in self.series.iter().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            let visible: Vec<(u64, u64)> = series
                .points
                .iter()
                .copied()
                .filter(|(x, _)| *x <= x_limit)
                .collect();

            let coords: Vec<String> = visible
                .iter()
                .map(|(x, y)| format!("{:.2},{:.2}", sx(*x), sy(*y)))
                .collect();
            let _ = write!(
                svg,
                r#"<polyline fill="none" stroke="{}" stroke-width="1.5" points="{}"><title>{}</title></polyline>"#,
                color,
                coords.join(" "),
                escape(&series.name)
            );

            for (x, y) in &visible {
                let _ = write!(
                    svg,
                    r#"<circle class="point" cx="{:.2}" cy="{:.2}" r="2" fill="{}"><title>{}: {}</title></circle>"#,
                    sx(*x),
                    sy(*y),
                    color,
                    escape(&series.name),
                    escape(&strip_tags(&self.config.tooltip(*x, *y)))
                );
            }

            // Legend
            let legend_y = MARGIN_TOP + 14.0 * i as f64;
            let legend_x = WIDTH - MARGIN_RIGHT + 12.0;
            let _ = write!(
                svg,
                r#"<rect x="{:.2}" y="{:.2}" width="10" height="10" fill="{}"/><text class="axis" x="{:.2}" y="{:.2}">{}</text>"#,
                legend_x,
                legend_y,
                color,
                legend_x + 14.0,
                legend_y + 9.0,
                escape(&series.name)
            );
        }

        svg.push_str("</svg>");

        info!("Line plot '{}' rendered ({} bytes)", self.config.id, svg.len());
        Ok(svg)
    }
}

/// Drop `<...>` markup, SVG `<title>` tooltips are plain text
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Escape text for inclusion in SVG/HTML
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
