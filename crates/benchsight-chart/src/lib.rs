// Dweve Benchsight - Benchmark Statistics Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! SVG scalability chart rendering.
//!
//! Consumes the per-implementation sample series exposed by
//! `benchsight-core::series` and renders a 2×2 grid of log-log throughput
//! panels, one panel per workload kind, one polyline per implementation.
//! The visual output is a convenience artifact; nothing downstream depends
//! on its exact pixels.

use benchsight_core::series::{scalability_series, ScalabilitySeries};
use benchsight_core::{BenchmarkData, WorkloadKind};
use std::fmt::Write;

/// Matplotlib-style categorical palette, cycled per implementation.
const PALETTE: [&str; 6] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
];

/// Chart geometry.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Total image width in pixels.
    pub width: u32,
    /// Total image height in pixels.
    pub height: u32,
    /// Overall chart title.
    pub title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1200,
            title: "Benchmark Scalability Analysis".to_string(),
        }
    }
}

/// Render the full 2×2 scalability grid for a dataset.
pub fn render_svg(data: &BenchmarkData, config: &ChartConfig) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    );
    let _ = writeln!(
        svg,
        r#"<rect width="{}" height="{}" fill="white"/>"#,
        config.width, config.height
    );
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="30" text-anchor="middle" font-family="sans-serif" font-size="22" font-weight="bold">{}</text>"#,
        config.width / 2,
        escape_text(&config.title)
    );

    let panel_width = config.width as f64 / 2.0;
    let panel_height = (config.height as f64 - 50.0) / 2.0;

    for (idx, kind) in WorkloadKind::ALL.into_iter().enumerate() {
        let x0 = (idx % 2) as f64 * panel_width;
        let y0 = 50.0 + (idx / 2) as f64 * panel_height;
        let series = scalability_series(data, kind);
        render_panel(&mut svg, kind, &series, x0, y0, panel_width, panel_height);
    }

    svg.push_str("</svg>\n");
    svg
}

/// Plot area insets within a panel: left, top, right, bottom.
const MARGIN: (f64, f64, f64, f64) = (70.0, 40.0, 20.0, 50.0);

fn render_panel(
    svg: &mut String,
    kind: WorkloadKind,
    series: &[ScalabilitySeries],
    x0: f64,
    y0: f64,
    width: f64,
    height: f64,
) {
    let (left, top, right, bottom) = MARGIN;
    let plot_x = x0 + left;
    let plot_y = y0 + top;
    let plot_w = width - left - right;
    let plot_h = height - top - bottom;

    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="sans-serif" font-size="16" font-weight="bold">{}</text>"#,
        x0 + width / 2.0,
        y0 + 25.0,
        kind
    );
    let _ = writeln!(
        svg,
        r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="#999" stroke-width="1"/>"##,
        plot_x, plot_y, plot_w, plot_h
    );

    if series.is_empty() {
        let _ = writeln!(
            svg,
            r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="sans-serif" font-size="14" fill="#666">No data available</text>"##,
            plot_x + plot_w / 2.0,
            plot_y + plot_h / 2.0
        );
        return;
    }

    let Some(bounds) = LogBounds::from_series(series) else {
        return;
    };

    for (i, s) in series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        render_series(svg, s, color, &bounds, plot_x, plot_y, plot_w, plot_h);

        // Legend entry in the panel's upper-right corner.
        let legend_y = plot_y + 16.0 + 18.0 * i as f64;
        let _ = writeln!(
            svg,
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="2"/>"#,
            plot_x + plot_w - 130.0,
            legend_y,
            plot_x + plot_w - 110.0,
            legend_y,
            color
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="12">{}</text>"#,
            plot_x + plot_w - 104.0,
            legend_y + 4.0,
            escape_text(&s.implementation)
        );
    }

    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="sans-serif" font-size="13">Node Count (log)</text>"#,
        plot_x + plot_w / 2.0,
        y0 + height - 12.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="sans-serif" font-size="13" transform="rotate(-90 {:.1} {:.1})">Operations/sec (log)</text>"#,
        x0 + 18.0,
        plot_y + plot_h / 2.0,
        x0 + 18.0,
        plot_y + plot_h / 2.0
    );
}

#[allow(clippy::too_many_arguments)]
fn render_series(
    svg: &mut String,
    series: &ScalabilitySeries,
    color: &str,
    bounds: &LogBounds,
    plot_x: f64,
    plot_y: f64,
    plot_w: f64,
    plot_h: f64,
) {
    let mut points = String::new();
    let mut markers = String::new();

    for (node_count, ops_per_sec) in &series.points {
        let fx = bounds.x_fraction((*node_count).max(1) as f64);
        let fy = bounds.y_fraction(*ops_per_sec);
        let px = plot_x + fx * plot_w;
        // SVG y axis grows downward.
        let py = plot_y + (1.0 - fy) * plot_h;
        let _ = write!(points, "{:.1},{:.1} ", px, py);
        let _ = writeln!(
            markers,
            r#"<circle cx="{:.1}" cy="{:.1}" r="3" fill="{}"/>"#,
            px, py, color
        );
    }

    let _ = writeln!(
        svg,
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2" opacity="0.8"/>"#,
        points.trim_end(),
        color
    );
    svg.push_str(&markers);
}

/// Log-space bounds shared by all series in one panel.
struct LogBounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl LogBounds {
    fn from_series(series: &[ScalabilitySeries]) -> Option<Self> {
        let mut bounds: Option<LogBounds> = None;
        for s in series {
            for (node_count, ops_per_sec) in &s.points {
                let x = ((*node_count).max(1) as f64).log10();
                let y = ops_per_sec.log10();
                bounds = Some(match bounds {
                    None => LogBounds {
                        x_min: x,
                        x_max: x,
                        y_min: y,
                        y_max: y,
                    },
                    Some(b) => LogBounds {
                        x_min: b.x_min.min(x),
                        x_max: b.x_max.max(x),
                        y_min: b.y_min.min(y),
                        y_max: b.y_max.max(y),
                    },
                });
            }
        }
        // Degenerate ranges (single point, or identical values) get padded
        // so the fraction math below stays finite.
        bounds.map(|mut b| {
            if b.x_max - b.x_min < 1e-9 {
                b.x_min -= 0.5;
                b.x_max += 0.5;
            }
            if b.y_max - b.y_min < 1e-9 {
                b.y_min -= 0.5;
                b.y_max += 0.5;
            }
            b
        })
    }

    fn x_fraction(&self, value: f64) -> f64 {
        (value.log10() - self.x_min) / (self.x_max - self.x_min)
    }

    fn y_fraction(&self, value: f64) -> f64 {
        (value.log10() - self.y_min) / (self.y_max - self.y_min)
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
