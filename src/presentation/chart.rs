use super::*;
use crate::dataset::Trend;

pub const CHART_WIDTH: f64 = 960.0;
pub const CHART_HEIGHT: f64 = 350.0;
const MARGIN: f64 = 40.0;

/// Area chart of engagement against posting hour, as inline SVG.
///
/// Static for a given dataset: user input never changes it.
pub struct Chart<'a>(&'a Trend);

impl<'a> From<&'a Trend> for Chart<'a> {
    fn from(trend: &'a Trend) -> Self {
        Self(trend)
    }
}

impl Chart<'_> {
    fn x(hour: u32) -> f64 {
        MARGIN + (CHART_WIDTH - 2.0 * MARGIN) * hour as f64 / 23.0
    }
    fn y(&self, engagement: f64) -> f64 {
        let top = self.0.range().map(|(_, hi)| hi).unwrap_or(1.0).max(f64::EPSILON);
        CHART_HEIGHT - MARGIN - (CHART_HEIGHT - 2.0 * MARGIN) * (engagement / top).clamp(0.0, 1.0)
    }

    /// Vertices of the filled area, closed along the baseline.
    pub fn polygon(&self) -> Vec<(f64, f64)> {
        let points = self.0.points();
        match (points.first(), points.last()) {
            (Some(first), Some(last)) => std::iter::once((Self::x(first.hour), self.y(0.0)))
                .chain(points.iter().map(|p| (Self::x(p.hour), self.y(p.engagement))))
                .chain(std::iter::once((Self::x(last.hour), self.y(0.0))))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn svg(&self) -> String {
        let mut svg = format!(
            r#"<svg viewBox="0 0 {w} {h}" width="100%" height="{h}" style="background:{bg};border-radius:14px">"#,
            w = CHART_WIDTH,
            h = CHART_HEIGHT,
            bg = SURFACE
        );
        if self.0.is_empty() {
            svg.push_str(&format!(
                r#"<text x="{}" y="{}" fill="{}" text-anchor="middle">no data</text>"#,
                CHART_WIDTH / 2.0,
                CHART_HEIGHT / 2.0,
                MUTED
            ));
        } else {
            let coords = |pts: &[(f64, f64)]| {
                pts.iter()
                    .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            let polygon = self.polygon();
            svg.push_str(&format!(
                r#"<polygon points="{}" fill="{}" fill-opacity="0.35"/>"#,
                coords(&polygon),
                ACCENT
            ));
            svg.push_str(&format!(
                r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
                coords(&polygon[1..polygon.len() - 1]),
                ACCENT
            ));
        }
        for hour in (0..24).step_by(3) {
            svg.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" fill="{}" font-size="11" text-anchor="middle">{}</text>"#,
                Self::x(hour),
                CHART_HEIGHT - MARGIN / 3.0,
                MUTED,
                hour
            ));
        }
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" fill="{}" font-size="11">normalized_engagement by post_hour</text>"#,
            MARGIN,
            MARGIN / 2.0,
            MUTED
        ));
        svg.push_str("</svg>");
        svg
    }
}
