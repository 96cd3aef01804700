//! Painter-based chart widget.

use apd_charts::{Chart, ChartKind};
use apd_common::format_numeric;
use apd_gui::plot::{ValueAxis, row_from_top, tick_label};
use apd_gui::theme::{ThemeColors, series_color, spacing};
use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Stroke, Ui, pos2, vec2};
use egui_extras::{Column, TableBuilder};

const TICKS: usize = 5;
const LABEL_FONT: f32 = 11.0;

/// Draws `chart` at the full available width and `height` points tall.
pub fn show_chart(ui: &mut Ui, chart: &Chart, height: f32, theme: &ThemeColors) {
    ui.label(egui::RichText::new(&chart.title).strong().color(theme.text_primary));
    let size = vec2(ui.available_width(), height);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, CornerRadius::same(6), theme.bg_secondary);

    let axis = ValueAxis::for_chart(chart);
    match chart.kind {
        ChartKind::Bar | ChartKind::Line => paint_vertical(&painter, rect, chart, axis, theme),
        ChartKind::HorizontalBar | ChartKind::GroupedHorizontalBar => {
            paint_horizontal(&painter, rect, chart, axis, theme)
        }
    }

    if chart.series.len() > 1 {
        paint_legend(&painter, rect, chart, theme);
    }
    if chart.dropped > 0 {
        ui.label(
            egui::RichText::new(format!("{} rows outside every range", chart.dropped))
                .small()
                .color(theme.text_muted),
        );
    }
    data_table(ui, chart);
}

fn paint_vertical(
    painter: &Painter,
    rect: Rect,
    chart: &Chart,
    axis: ValueAxis,
    theme: &ThemeColors,
) {
    let plot = Rect::from_min_max(
        pos2(rect.left() + 44.0, rect.top() + 24.0),
        pos2(rect.right() - spacing::SM, rect.bottom() - 28.0),
    );
    let y_of = |value: f64| plot.bottom() - axis.fraction(value) * plot.height();

    for tick in axis.ticks(TICKS) {
        let y = y_of(tick);
        painter.line_segment(
            [pos2(plot.left(), y), pos2(plot.right(), y)],
            Stroke::new(0.5, theme.grid),
        );
        painter.text(
            pos2(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            tick_label(tick),
            FontId::proportional(LABEL_FONT),
            theme.text_muted,
        );
    }
    axis_title(painter, pos2(rect.left() + spacing::SM, rect.top() + 4.0), &chart.y_label, theme);

    let count = chart.categories.len().max(1);
    let slot = plot.width() / count as f32;
    let values = chart.primary_values();
    let color = series_color(0);
    let mut previous: Option<Pos2> = None;
    for (index, category) in chart.categories.iter().enumerate() {
        let center_x = plot.left() + slot * (index as f32 + 0.5);
        painter.text(
            pos2(center_x, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            category,
            FontId::proportional(LABEL_FONT),
            theme.text_primary,
        );
        let Some(value) = values.get(index).copied().flatten() else {
            missing_marker(painter, pos2(center_x, plot.bottom() - 10.0), theme);
            previous = None;
            continue;
        };
        let top = pos2(center_x, y_of(value));
        match chart.kind {
            ChartKind::Line => {
                if let Some(from) = previous {
                    painter.line_segment([from, top], Stroke::new(2.0, color));
                }
                painter.circle_filled(top, 3.5, color);
                previous = Some(top);
            }
            _ => {
                let half = slot * 0.3;
                let bar = Rect::from_two_pos(
                    pos2(center_x - half, y_of(0.0)),
                    pos2(center_x + half, top.y),
                );
                painter.rect_filled(bar, CornerRadius::same(2), color);
            }
        }
        painter.text(
            top - vec2(0.0, 4.0),
            Align2::CENTER_BOTTOM,
            format_numeric(value),
            FontId::proportional(LABEL_FONT),
            theme.text_primary,
        );
    }
}

fn paint_horizontal(
    painter: &Painter,
    rect: Rect,
    chart: &Chart,
    axis: ValueAxis,
    theme: &ThemeColors,
) {
    let label_width = (rect.width() * 0.4).min(180.0);
    let plot = Rect::from_min_max(
        pos2(rect.left() + label_width, rect.top() + 24.0),
        pos2(rect.right() - 40.0, rect.bottom() - 24.0),
    );
    let x_of = |value: f64| plot.left() + axis.fraction(value) * plot.width();

    for tick in axis.ticks(TICKS) {
        let x = x_of(tick);
        painter.line_segment(
            [pos2(x, plot.top()), pos2(x, plot.bottom())],
            Stroke::new(0.5, theme.grid),
        );
        painter.text(
            pos2(x, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            tick_label(tick),
            FontId::proportional(LABEL_FONT),
            theme.text_muted,
        );
    }
    axis_title(painter, pos2(rect.left() + spacing::SM, rect.top() + 4.0), &chart.x_label, theme);

    let count = chart.categories.len().max(1);
    let slot = plot.height() / count as f32;
    let series_count = chart.series.len().max(1);
    let thickness = slot * 0.7 / series_count as f32;
    let zero = x_of(0.0);
    for (index, category) in chart.categories.iter().enumerate() {
        let slot_top = plot.top() + slot * row_from_top(index, count) as f32;
        painter.text(
            pos2(plot.left() - 6.0, slot_top + slot / 2.0),
            Align2::RIGHT_CENTER,
            category,
            FontId::proportional(LABEL_FONT),
            theme.text_primary,
        );
        for (series_index, series) in chart.series.iter().enumerate() {
            let top = slot_top + slot * 0.15 + thickness * series_index as f32;
            let Some(value) = series.values.get(index).copied().flatten() else {
                missing_marker(painter, pos2(zero + 12.0, top + thickness / 2.0), theme);
                continue;
            };
            let color = bar_color(chart, series_index, value);
            let end = x_of(value);
            let bar = Rect::from_two_pos(pos2(zero, top), pos2(end, top + thickness));
            painter.rect_filled(bar, CornerRadius::same(2), color);
            let (anchor, offset) = if value < 0.0 {
                (Align2::RIGHT_CENTER, -4.0)
            } else {
                (Align2::LEFT_CENTER, 4.0)
            };
            painter.text(
                pos2(end + offset, top + thickness / 2.0),
                anchor,
                format_numeric(value),
                FontId::proportional(LABEL_FONT),
                theme.text_primary,
            );
        }
    }
}

/// Single-series horizontal charts shade negative bars differently.
fn bar_color(chart: &Chart, series_index: usize, value: f64) -> Color32 {
    if chart.kind == ChartKind::HorizontalBar && value < 0.0 {
        series_color(1)
    } else {
        series_color(series_index)
    }
}

fn paint_legend(painter: &Painter, rect: Rect, chart: &Chart, theme: &ThemeColors) {
    let mut x = rect.right() - spacing::SM;
    for (index, series) in chart.series.iter().enumerate().rev() {
        let text_rect = painter.text(
            pos2(x, rect.top() + 10.0),
            Align2::RIGHT_CENTER,
            &series.name,
            FontId::proportional(LABEL_FONT),
            theme.text_primary,
        );
        let swatch = Rect::from_center_size(
            pos2(text_rect.left() - 8.0, text_rect.center().y),
            vec2(8.0, 8.0),
        );
        painter.rect_filled(swatch, CornerRadius::same(2), series_color(index));
        x = swatch.left() - spacing::MD;
    }
}

fn axis_title(painter: &Painter, pos: Pos2, text: &str, theme: &ThemeColors) {
    painter.text(
        pos,
        Align2::LEFT_TOP,
        text,
        FontId::proportional(LABEL_FONT),
        theme.text_muted,
    );
}

fn missing_marker(painter: &Painter, pos: Pos2, theme: &ThemeColors) {
    painter.text(
        pos,
        Align2::CENTER_CENTER,
        "n/a",
        FontId::proportional(LABEL_FONT - 1.0),
        theme.text_muted,
    );
}

/// Collapsible table of the values behind the chart.
fn data_table(ui: &mut Ui, chart: &Chart) {
    egui::CollapsingHeader::new("Data")
        .id_salt(chart.id.slug())
        .default_open(false)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt(chart.id.slug())
                .striped(true)
                .column(Column::auto().at_least(120.0));
            for _ in &chart.series {
                table = table.column(Column::auto().at_least(80.0));
            }
            table
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong(if chart.x_label.is_empty() {
                            "Category"
                        } else {
                            chart.x_label.as_str()
                        });
                    });
                    for series in &chart.series {
                        header.col(|ui| {
                            ui.strong(&series.name);
                        });
                    }
                })
                .body(|mut body| {
                    for (index, category) in chart.categories.iter().enumerate() {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.label(category);
                            });
                            for series in &chart.series {
                                let text = series
                                    .values
                                    .get(index)
                                    .copied()
                                    .flatten()
                                    .map_or_else(|| "-".to_string(), format_numeric);
                                row.col(|ui| {
                                    ui.label(text);
                                });
                            }
                        });
                    }
                });
        });
}
