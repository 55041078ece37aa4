//! Bar chart layout for monthly rainfall.
//!
//! Maps a sequence of monthly records onto pixel coordinates for a canvas of
//! a given size. Nothing here draws: the output is plain geometry that a
//! renderer turns into axes, labels and bars. Text placement is reduced to an
//! anchor point per label.

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::models::AggregateRecord;
use crate::station::{self, Station};
use serde::Serialize;

/// Fill group for a bar; alternates with the record's year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColorGroup {
    EvenYear,
    OddYear,
}

impl ColorGroup {
    pub fn for_year(year: i32) -> Self {
        if year % 2 == 0 {
            ColorGroup::EvenYear
        } else {
            ColorGroup::OddYear
        }
    }
}

/// Y axis tick: label value and its vertical position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub label: i64,
    pub pixel_y: f64,
}

/// X axis label anchored at the left edge of its bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub label: String,
    pub pixel_x: f64,
}

/// One bar, top-left corner plus size
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub width: f64,
    pub height: f64,
    pub color_group: ColorGroup,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    /// Pixels per unit of rainfall
    pub scale_factor: f64,
    /// Vertical position of the x axis
    pub x_axis_y: f64,
    /// Length of the y axis in pixels
    pub y_axis_height: f64,
    pub y_axis_ticks: Vec<AxisTick>,
    pub x_axis_labels: Vec<AxisLabel>,
    pub bars: Vec<Bar>,
}

/// Stateless chart layout with configurable offsets
#[derive(Debug, Clone, Default)]
pub struct ChartLayoutEngine {
    config: ChartConfig,
}

impl ChartLayoutEngine {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn layout_station(
        &self,
        station: &Station,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Result<ChartGeometry, ChartError> {
        self.layout(station.records(), canvas_width, canvas_height)
    }

    /// Compute bar chart geometry for `records` in their given order
    pub fn layout(
        &self,
        records: &[AggregateRecord],
        canvas_width: f64,
        canvas_height: f64,
    ) -> Result<ChartGeometry, ChartError> {
        if records.is_empty() {
            return Err(ChartError::EmptyStation);
        }

        let config = &self.config;
        let x_axis_y = canvas_height - config.x_axis_bottom_offset;
        let y_axis_height = x_axis_y - config.y_axis_top_offset;
        let plot_width = canvas_width - config.right_margin - config.left_margin;
        if y_axis_height <= 0.0 || plot_width <= 0.0 {
            return Err(ChartError::CanvasTooSmall {
                width: canvas_width,
                height: canvas_height,
            });
        }

        let max_total = station::max_total(records);
        let scale_factor = if max_total > 0.0 {
            y_axis_height / max_total
        } else {
            0.0
        };

        let y_axis_ticks = self.y_axis_ticks(max_total, x_axis_y, y_axis_height);

        let bar_width = plot_width / records.len() as f64;
        let mut bars = Vec::with_capacity(records.len());
        let mut x_axis_labels = Vec::new();
        let mut last_labelled_year: Option<i32> = None;

        for (index, record) in records.iter().enumerate() {
            let pixel_x = config.left_margin + bar_width * index as f64;

            if record.month() == 1
                && last_labelled_year
                    .is_none_or(|last| record.year() - last >= config.year_label_interval)
            {
                x_axis_labels.push(AxisLabel {
                    label: record.year().to_string(),
                    pixel_x,
                });
                last_labelled_year = Some(record.year());
            }

            let height = record.total() * scale_factor;
            bars.push(Bar {
                pixel_x,
                pixel_y: x_axis_y - height,
                width: bar_width,
                height,
                color_group: ColorGroup::for_year(record.year()),
            });
        }

        Ok(ChartGeometry {
            scale_factor,
            x_axis_y,
            y_axis_height,
            y_axis_ticks,
            x_axis_labels,
            bars,
        })
    }

    /// Ticks are evenly spaced in pixels; their values are multiples of the
    /// floored max / intervals, so the top tick may sit below `max_total`.
    fn y_axis_ticks(&self, max_total: f64, x_axis_y: f64, y_axis_height: f64) -> Vec<AxisTick> {
        let intervals = self.config.y_tick_intervals.max(1);
        let step_value = (max_total / intervals as f64).floor() as i64;
        let step_pixels = y_axis_height / intervals as f64;

        (0..=intervals)
            .map(|i| AxisTick {
                label: step_value * i as i64,
                pixel_y: x_axis_y - step_pixels * i as f64,
            })
            .collect()
    }
}

/// Compute chart geometry with the default layout
pub fn compute_chart_geometry(
    station: &Station,
    canvas_width: f64,
    canvas_height: f64,
) -> Result<ChartGeometry, ChartError> {
    ChartLayoutEngine::default().layout_station(station, canvas_width, canvas_height)
}
