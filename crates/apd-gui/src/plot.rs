//! Chart geometry independent of any painter.

use apd_charts::Chart;
use apd_common::format_decimal;

/// Value range mapped onto a chart's value axis. Always contains zero so
/// bars grow from a visible baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxis {
    pub min: f64,
    pub max: f64,
}

impl ValueAxis {
    pub fn for_chart(chart: &Chart) -> Self {
        let (lo, hi) = chart.value_range().unwrap_or((0.0, 1.0));
        let min = lo.min(0.0);
        let mut max = hi.max(0.0);
        if max - min <= f64::EPSILON {
            max = min + 1.0;
        }
        Self { min, max }
    }

    /// Position of `value` along the axis, in `0.0..=1.0`.
    pub fn fraction(&self, value: f64) -> f32 {
        (((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)) as f32
    }

    pub fn zero(&self) -> f32 {
        self.fraction(0.0)
    }

    /// Evenly spaced tick values from `min` to `max` inclusive.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.min];
        }
        let step = (self.max - self.min) / (count - 1) as f64;
        (0..count).map(|i| self.min + step * i as f64).collect()
    }
}

/// Row of a horizontal bar chart counted from the top, for the category at
/// `index` of `count`. The first category sits on the bottom row.
pub fn row_from_top(index: usize, count: usize) -> usize {
    count.saturating_sub(index + 1)
}

/// Axis label text for a value: at most two decimals, trailing zeros removed.
pub fn tick_label(value: f64) -> String {
    format_decimal(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use apd_charts::{ChartId, ChartKind};

    fn chart(values: Vec<Option<f64>>) -> Chart {
        let categories = (0..values.len()).map(|i| i.to_string()).collect();
        Chart::new(ChartId::BurnoutCorrelation, ChartKind::HorizontalBar, "t")
            .with_categories(categories)
            .with_series("r", values)
    }

    #[test]
    fn axis_includes_zero_for_positive_values() {
        let axis = ValueAxis::for_chart(&chart(vec![Some(40.0), Some(80.0)]));
        assert_eq!(axis, ValueAxis { min: 0.0, max: 80.0 });
        assert_eq!(axis.fraction(40.0), 0.5);
    }

    #[test]
    fn negative_values_move_the_baseline() {
        let axis = ValueAxis::for_chart(&chart(vec![Some(-0.5), None, Some(0.5)]));
        assert_eq!(axis.zero(), 0.5);
        assert_eq!(axis.fraction(-0.5), 0.0);
    }

    #[test]
    fn empty_chart_has_unit_axis() {
        let axis = ValueAxis::for_chart(&chart(vec![None, None]));
        assert_eq!(axis, ValueAxis { min: 0.0, max: 1.0 });
        assert_eq!(axis.ticks(3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn tick_labels_are_short() {
        assert_eq!(tick_label(62.0), "62");
        assert_eq!(tick_label(0.126), "0.13");
        assert_eq!(tick_label(100.0), "100");
        assert_eq!(tick_label(-0.001), "0");
    }

    #[test]
    fn horizontal_rows_stack_from_the_bottom() {
        let rows: Vec<usize> = (0..4).map(|index| row_from_top(index, 4)).collect();
        assert_eq!(rows, vec![3, 2, 1, 0]);
        assert_eq!(row_from_top(0, 1), 0);
    }
}
