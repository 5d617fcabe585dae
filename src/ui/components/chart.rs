use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType,
    },
};

use crate::records::series::{ChartKind, TrainingHistory};

/// One color per series, in series order.
pub const SERIES_COLORS: [Color; 3] = [Color::Cyan, Color::Yellow, Color::Magenta];

/// Bars are drawn from values scaled to hundredths.
const BAR_SCALE: f64 = 100.0;

pub fn render_history(f: &mut Frame<'_>, area: Rect, history: &TrainingHistory, kind: ChartKind) {
    match kind {
        ChartKind::Line => render_line(f, area, history),
        ChartKind::Bar => render_bars(f, area, history),
        ChartKind::Area => render_area(f, area, history),
    }
}

fn legend(history: &TrainingHistory) -> Line<'static> {
    let mut spans = Vec::new();
    for (series, color) in history.series.iter().zip(SERIES_COLORS) {
        spans.push(Span::styled("■ ", Style::default().fg(color)));
        spans.push(Span::raw(format!("{}  ", series.name)));
    }
    Line::from(spans)
}

fn epoch_labels(history: &TrainingHistory) -> Vec<Span<'static>> {
    let last = history.epochs();
    vec![
        Span::raw("1"),
        Span::raw(format!("{}", (last + 1) / 2)),
        Span::raw(format!("{last}")),
    ]
}

fn upper_bound(history: &TrainingHistory) -> f64 {
    let (_, max) = history.value_bounds();
    (max * 10.0).ceil() / 10.0
}

fn render_line(f: &mut Frame<'_>, area: Rect, history: &TrainingHistory) {
    let points: Vec<Vec<(f64, f64)>> = history.series.iter().map(|s| s.points()).collect();
    let datasets = history
        .series
        .iter()
        .zip(&points)
        .zip(SERIES_COLORS)
        .map(|((series, data), color)| {
            Dataset::default()
                .name(series.name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(data)
        })
        .collect::<Vec<_>>();

    let top = upper_bound(history);
    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title("Line Chart"))
        .x_axis(
            Axis::default()
                .title("epoch")
                .style(Style::default().fg(Color::Gray))
                .bounds([1.0, history.epochs() as f64])
                .labels(epoch_labels(history)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, top])
                .labels(vec![
                    Span::raw("0.0"),
                    Span::raw(format!("{:.1}", top / 2.0)),
                    Span::raw(format!("{top:.1}")),
                ]),
        );
    f.render_widget(chart, area);
}

fn render_bars(f: &mut Frame<'_>, area: Rect, history: &TrainingHistory) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from("Bar Chart"))
        .title_bottom(legend(history));

    let groups = bar_groups(history);
    let inner_width = block.inner(area).width as usize;
    let epochs = history.epochs().max(1);
    let series = history.series.len();
    // Fit every group: series bars plus one gap per epoch.
    let bar_width = ((inner_width / epochs).saturating_sub(1) / series).max(1) as u16;

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(1);
    for group in groups {
        chart = chart.data(group);
    }
    f.render_widget(chart, area);
}

/// One bar group per epoch, one bar per series.
pub fn bar_groups(history: &TrainingHistory) -> Vec<BarGroup<'static>> {
    (0..history.epochs())
        .map(|epoch| {
            let bars: Vec<Bar<'static>> = history
                .series
                .iter()
                .zip(SERIES_COLORS)
                .map(|(series, color)| {
                    Bar::default()
                        .value((series.values[epoch] * BAR_SCALE).round() as u64)
                        .text_value(String::new())
                        .style(Style::default().fg(color))
                })
                .collect();
            BarGroup::default()
                .label(Line::from(format!("{}", epoch + 1)))
                .bars(&bars)
        })
        .collect()
}

fn render_area(f: &mut Frame<'_>, area: Rect, history: &TrainingHistory) {
    let top = upper_bound(history);
    let last_epoch = history.epochs() as f64;
    let samples = (area.width.max(2) as usize) * 2;

    // Larger series first so the smaller ones stay visible on top.
    let mut order: Vec<usize> = (0..history.series.len()).collect();
    order.sort_by(|&a, &b| {
        let sum_a: f64 = history.series[a].values.iter().sum();
        let sum_b: f64 = history.series[b].values.iter().sum();
        sum_b.partial_cmp(&sum_a).unwrap_or(std::cmp::Ordering::Equal)
    });

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from("Area Chart"))
                .title_bottom(legend(history)),
        )
        .marker(Marker::HalfBlock)
        .x_bounds([1.0, last_epoch])
        .y_bounds([0.0, top])
        .paint(move |ctx| {
            for &idx in &order {
                let series = &history.series[idx];
                let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
                for step in 0..=samples {
                    let x = 1.0 + (last_epoch - 1.0) * step as f64 / samples as f64;
                    ctx.draw(&CanvasLine {
                        x1: x,
                        y1: 0.0,
                        x2: x,
                        y2: interpolate(&series.values, x),
                        color,
                    });
                }
                ctx.layer();
            }
        });
    f.render_widget(canvas, area);
}

/// Linear interpolation of `values` at fractional epoch `x` (1-based).
pub fn interpolate(values: &[f64], x: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let position = (x - 1.0).clamp(0.0, (values.len() - 1) as f64);
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    values[lower] + (values[upper] - values[lower]) * fraction
}
