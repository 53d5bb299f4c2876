// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inline SVG stacked bar charts for the history page.

use crate::render::escape_html;

const WIDTH: f64 = 760.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 48.0;
const GRID_STEPS: u32 = 4;
const BAR_FILL_RATIO: f64 = 0.7;
const LEGEND_SPACING: f64 = 170.0;

/// One stacked layer of a chart.
pub struct Segment<'a> {
    pub label: &'a str,
    pub color: &'a str,
    pub values: &'a [f64],
}

impl Segment<'_> {
    /// Value at `index`; missing and negative values stack as zero.
    fn value_at(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0).max(0.0)
    }
}

/// A stacked bar chart with one bar per label.
pub struct StackedBarChart<'a> {
    pub title: &'a str,
    pub labels: &'a [String],
    pub segments: Vec<Segment<'a>>,
    pub format_value: fn(f64) -> String,
}

fn count_as_f64(count: usize) -> f64 {
    u32::try_from(count).map_or(f64::from(u32::MAX), f64::from)
}

impl StackedBarChart<'_> {
    fn stack_total(&self, index: usize) -> f64 {
        self.segments.iter().map(|s| s.value_at(index)).sum()
    }

    fn scale_max(&self) -> f64 {
        let max: f64 = (0..self.labels.len())
            .map(|i| self.stack_total(i))
            .fold(0.0, f64::max);
        if max > 0.0 { max } else { 1.0 }
    }

    /// Renders the chart as an `<svg>` element.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg: String = format!(
            "<svg class=\"chart\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" role=\"img\" aria-label=\"{}\">",
            escape_html(self.title)
        );
        let scale_max: f64 = self.scale_max();
        svg.push_str(&self.render_grid(scale_max));
        svg.push_str(&self.render_legend());
        svg.push_str(&self.render_bars(scale_max));
        svg.push_str("</svg>");
        svg
    }

    fn render_grid(&self, scale_max: f64) -> String {
        let plot_height: f64 = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline: f64 = MARGIN_TOP + plot_height;
        let mut grid: String = String::new();

        for step in 0..=GRID_STEPS {
            let fraction: f64 = f64::from(step) / f64::from(GRID_STEPS);
            let offset: f64 = plot_height * fraction;
            let y: f64 = baseline - offset;
            let label: String = (self.format_value)(scale_max * fraction);
            grid.push_str(&format!(
                "<line class=\"grid\" x1=\"{MARGIN_LEFT}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"#ddd\"/>",
                WIDTH - MARGIN_RIGHT
            ));
            grid.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{y:.1}\" text-anchor=\"end\" dominant-baseline=\"middle\" font-size=\"11\">{}</text>",
                MARGIN_LEFT - 6.0,
                escape_html(&label)
            ));
        }
        grid
    }

    fn render_legend(&self) -> String {
        let mut legend: String = String::new();
        let mut x: f64 = MARGIN_LEFT;

        for segment in &self.segments {
            legend.push_str(&format!(
                "<rect x=\"{x:.1}\" y=\"12\" width=\"12\" height=\"12\" fill=\"{}\"/>\
                 <text x=\"{:.1}\" y=\"22\" font-size=\"12\">{}</text>",
                segment.color,
                x + 18.0,
                escape_html(segment.label)
            ));
            x += LEGEND_SPACING;
        }
        legend
    }

    fn render_bars(&self, scale_max: f64) -> String {
        let plot_width: f64 = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height: f64 = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline: f64 = MARGIN_TOP + plot_height;
        let slot: f64 = plot_width / count_as_f64(self.labels.len().max(1));
        let bar_width: f64 = slot * BAR_FILL_RATIO;
        let mut bars: String = String::new();
        let mut x: f64 = MARGIN_LEFT + (slot - bar_width) / 2.0;

        for (index, label) in self.labels.iter().enumerate() {
            let mut top: f64 = baseline;
            for segment in &self.segments {
                let value: f64 = segment.value_at(index);
                let height: f64 = plot_height * value / scale_max;
                if height <= 0.0 {
                    continue;
                }
                top -= height;
                bars.push_str(&format!(
                    "<rect x=\"{x:.1}\" y=\"{top:.1}\" width=\"{bar_width:.1}\" height=\"{height:.1}\" fill=\"{}\">\
                     <title>{}: {} {}</title></rect>",
                    segment.color,
                    escape_html(label),
                    escape_html(segment.label),
                    escape_html(&(self.format_value)(value))
                ));
            }
            bars.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"10\">{}</text>",
                x + bar_width / 2.0,
                baseline + 16.0,
                escape_html(label)
            ));
            x += slot;
        }
        bars
    }
}
