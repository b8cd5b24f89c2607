//! SVG geometry for the admin dashboard charts.

use crate::types::ChartPoint;

/// Drawing area of a chart in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 200.0,
            padding: 10.0,
        }
    }
}

impl ChartFrame {
    fn plot_height(&self) -> f64 {
        self.height - self.padding * 2.0
    }

    fn y_for(&self, value: f64, max: f64) -> f64 {
        let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
        self.height - self.padding - ratio * self.plot_height()
    }

    fn x_for(&self, idx: usize, len: usize) -> f64 {
        if len <= 1 {
            return self.width / 2.0;
        }
        idx as f64 / (len - 1) as f64 * self.width
    }
}

/// Round `value` up to the next half-decade step (210 → 250, 61 → 65).
pub fn nice_max(value: f64) -> f64 {
    if value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    let step = (magnitude / 2.0).max(1.0);
    (value / step).ceil() * step
}

fn scale_max(points: &[ChartPoint]) -> f64 {
    nice_max(points.iter().map(|p| p.value).fold(0.0_f64, f64::max))
}

fn vertices(points: &[ChartPoint], frame: ChartFrame) -> Vec<String> {
    let max = scale_max(points);
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = frame.x_for(i, points.len());
            let y = frame.y_for(point.value, max);
            format!("{:.1},{:.1}", x, y)
        })
        .collect()
}

/// Polyline through every point.
pub fn line_path(points: &[ChartPoint], frame: ChartFrame) -> String {
    let vertices = vertices(points, frame);
    match vertices.split_first() {
        None => String::new(),
        Some((first, [])) => format!("M {first}"),
        Some((first, rest)) => format!("M {} L {}", first, rest.join(" L ")),
    }
}

/// Line path closed down to the baseline, for the gradient fill.
pub fn area_path(points: &[ChartPoint], frame: ChartFrame) -> String {
    if points.is_empty() {
        return String::new();
    }
    let first_x = frame.x_for(0, points.len());
    let last_x = frame.x_for(points.len() - 1, points.len());

    format!(
        "{} L {:.1},{:.1} L {:.1},{:.1} Z",
        line_path(points, frame),
        last_x,
        frame.height,
        first_x,
        frame.height
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One bar per point, each centred in an equal slot. `fill` is the share of
/// the slot the bar takes.
pub fn bars(points: &[ChartPoint], frame: ChartFrame, fill: f64) -> Vec<BarRect> {
    if points.is_empty() {
        return Vec::new();
    }
    let max = scale_max(points);
    let slot = frame.width / points.len() as f64;
    let width = slot * fill.clamp(0.05, 1.0);
    let baseline = frame.height - frame.padding;

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let y = frame.y_for(point.value, max);
            BarRect {
                label: point.label.clone(),
                x: i as f64 * slot + (slot - width) / 2.0,
                y,
                width,
                height: baseline - y,
            }
        })
        .collect()
}

/// Evenly spaced y-axis labels from the scale max down to zero.
pub fn axis_ticks(points: &[ChartPoint], count: usize) -> Vec<f64> {
    let max = scale_max(points);
    let count = count.max(2);
    (0..count)
        .map(|i| max - max * i as f64 / (count - 1) as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{revenue_series, visit_series};

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(210.0), 250.0);
        assert_eq!(nice_max(61.0), 65.0);
        assert_eq!(nice_max(250.0), 250.0);
        assert_eq!(nice_max(7.0), 7.0);
        assert_eq!(nice_max(0.0), 1.0);
    }

    #[test]
    fn test_line_has_one_vertex_per_point() {
        let path = line_path(&revenue_series(), ChartFrame::default());
        assert!(path.starts_with("M 0.0,"));
        assert_eq!(path.matches(" L ").count(), 5);
        assert!(line_path(&[], ChartFrame::default()).is_empty());
    }

    #[test]
    fn test_area_closes_to_baseline() {
        let frame = ChartFrame::default();
        let path = area_path(&revenue_series(), frame);
        assert!(path.ends_with("L 400.0,200.0 L 0.0,200.0 Z"));
        assert_eq!(path.matches(" L ").count(), 7);
    }

    #[test]
    fn test_highest_point_stays_inside_frame() {
        let frame = ChartFrame::default();
        for bar in bars(&visit_series(), frame, 0.6) {
            assert!(bar.y >= frame.padding);
            assert!(bar.height >= 0.0);
            assert!(bar.x + bar.width <= frame.width + 1e-9);
        }
    }

    #[test]
    fn test_bars_scale_with_value() {
        let bars = bars(&visit_series(), ChartFrame::default(), 0.6);
        assert_eq!(bars.len(), 6);
        let thu = bars.iter().find(|b| b.label == "Thu").unwrap();
        let sat = bars.iter().find(|b| b.label == "Sat").unwrap();
        assert!(thu.height > sat.height);
    }

    #[test]
    fn test_axis_ticks() {
        assert_eq!(axis_ticks(&revenue_series(), 6), vec![250.0, 200.0, 150.0, 100.0, 50.0, 0.0]);
    }
}
