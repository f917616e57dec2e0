use dioxus::prelude::*;

/// Plot area of every line chart, in SVG user units.
const VIEW_WIDTH: f64 = 300.0;
const VIEW_HEIGHT: f64 = 120.0;
const PADDING: f64 = 8.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Scales every series into the plot area. All series share one y range so
/// they stay comparable. A flat range is centred.
pub fn polyline_points(series: &[Series]) -> Vec<String> {
    let (min, max) = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let span = max - min;
    let plot_w = VIEW_WIDTH - 2.0 * PADDING;
    let plot_h = VIEW_HEIGHT - 2.0 * PADDING;

    series
        .iter()
        .map(|s| {
            let steps = s.values.len().saturating_sub(1).max(1) as f64;
            s.values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let x = PADDING + plot_w * (i as f64 / steps);
                    let y = if span > 0.0 {
                        PADDING + plot_h * (max - v) / span
                    } else {
                        VIEW_HEIGHT / 2.0
                    };
                    format!("{:.1},{:.1}", x, y)
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub label: &'static str,
    pub color: &'static str,
    pub value: f64,
}

/// `conic-gradient` stops for a donut of the given segments.
pub fn donut_gradient(segments: &[Segment]) -> String {
    let total: f64 = segments.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return "conic-gradient(#e2e8f0 0% 100%)".to_string();
    }

    let mut start = 0.0;
    let stops: Vec<String> = segments
        .iter()
        .map(|s| {
            let end = start + s.value.max(0.0) / total * 100.0;
            let stop = format!("{} {:.1}% {:.1}%", s.color, start, end);
            start = end;
            stop
        })
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}

pub fn percent_of(value: f64, segments: &[Segment]) -> f64 {
    let total: f64 = segments.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 { 0.0 } else { value / total * 100.0 }
}

#[component]
pub fn LineChart(title: &'static str, labels: Vec<&'static str>, series: Vec<Series>) -> Element {
    let lines = polyline_points(&series);
    let view_box = format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT);

    rsx! {
        div { class: "chart",
            div { class: "chart-header",
                h3 { class: "chart-title", "{title}" }
                div { class: "chart-legend",
                    for s in series.iter() {
                        span { class: "legend-item",
                            span { class: "legend-dot", style: "background: {s.color};" }
                            "{s.label}"
                        }
                    }
                }
            }
            svg {
                class: "chart-plot",
                view_box: "{view_box}",
                preserve_aspect_ratio: "none",
                for (points, s) in lines.iter().zip(series.iter()) {
                    polyline {
                        points: "{points}",
                        fill: "none",
                        stroke: "{s.color}",
                        stroke_width: "2.5",
                        stroke_linejoin: "round",
                        stroke_linecap: "round",
                    }
                }
            }
            div { class: "chart-axis",
                for label in labels.iter() {
                    span { "{label}" }
                }
            }
        }
    }
}

#[component]
pub fn DonutChart(segments: Vec<Segment>) -> Element {
    let gradient = donut_gradient(&segments);
    let rows: Vec<(Segment, String)> = segments
        .iter()
        .map(|s| (s.clone(), format!("{:.0} kg ({:.0}%)", s.value, percent_of(s.value, &segments))))
        .collect();

    rsx! {
        div { class: "donut-wrap",
            div { class: "donut", style: "background: {gradient};",
                div { class: "donut-hole" }
            }
            ul { class: "donut-legend",
                for (s, amount) in rows.iter() {
                    li {
                        span { class: "legend-dot", style: "background: {s.color};" }
                        span { class: "legend-label", "{s.label}" }
                        span { class: "legend-value", "{amount}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Series {
        Series { label: "s", color: "#000", values: values.to_vec() }
    }

    #[test]
    fn test_polyline_spans_plot_area() {
        let lines = polyline_points(&[series(&[0.0, 50.0, 100.0])]);
        assert_eq!(lines, vec!["8.0,112.0 150.0,60.0 292.0,8.0".to_string()]);
    }

    #[test]
    fn test_polyline_shared_range() {
        let lines = polyline_points(&[series(&[100.0, 100.0]), series(&[0.0, 0.0])]);
        assert_eq!(lines[0], "8.0,8.0 292.0,8.0");
        assert_eq!(lines[1], "8.0,112.0 292.0,112.0");
    }

    #[test]
    fn test_polyline_flat_and_single_point() {
        let lines = polyline_points(&[series(&[5.0, 5.0]), series(&[5.0])]);
        assert_eq!(lines[0], "8.0,60.0 292.0,60.0");
        assert_eq!(lines[1], "8.0,60.0");
    }

    #[test]
    fn test_donut_gradient_stops() {
        let segments = vec![
            Segment { label: "a", color: "#111", value: 1.0 },
            Segment { label: "b", color: "#222", value: 3.0 },
        ];
        assert_eq!(
            donut_gradient(&segments),
            "conic-gradient(#111 0.0% 25.0%, #222 25.0% 100.0%)"
        );
        assert_eq!(percent_of(3.0, &segments), 75.0);
    }

    #[test]
    fn test_donut_gradient_empty() {
        assert_eq!(donut_gradient(&[]), "conic-gradient(#e2e8f0 0% 100%)");
        assert_eq!(percent_of(1.0, &[]), 0.0);
    }
}
