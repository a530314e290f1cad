//! SVG path-data serialization.
//!
//! Every coordinate is printed with exactly three decimals. Cubic segments
//! are written as a single `Q` instruction carrying both control points and
//! the endpoint (`Q c1x,c1y, c2x,c2y, ex,ey`); downstream consumers of this
//! output parse that form, so it must not be "corrected" to `C`.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::geometry::{Geometry, Polygon, Ring};
use crate::segment::{Point, Segment};

/// Ordered `key="value"` attributes for a `<path>` element.
///
/// Insertion order is rendering order. Setting an existing key replaces its
/// value where it stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SvgAttributes {
    entries: Vec<(String, String)>,
}

impl Default for SvgAttributes {
    /// A thin red stroke with no fill.
    fn default() -> Self {
        Self::empty()
            .with("stroke", "red")
            .with("stroke-width", "2")
            .with("fill", "none")
    }
}

impl SvgAttributes {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `key="value"` pairs separated by single spaces.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, escape_attribute(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// CSS declarations for a `style` attribute: `key:value;` pairs
    /// separated by single spaces.
    pub fn render_style(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}:{};", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for SvgAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::empty();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn push_point(out: &mut String, p: &Point) {
    let _ = write!(out, "{:.3},{:.3}", p.x, p.y);
}

/// One path-data instruction.
pub fn segment_data(segment: &Segment) -> String {
    let mut out = String::new();
    match segment {
        Segment::MoveTo(p) => {
            out.push_str("M ");
            push_point(&mut out, p);
        }
        Segment::LineTo(p) => {
            out.push_str("L ");
            push_point(&mut out, p);
        }
        Segment::QuadTo { ctrl, to } => {
            out.push_str("Q ");
            push_point(&mut out, ctrl);
            out.push(' ');
            push_point(&mut out, to);
        }
        Segment::CubicTo { ctrl1, ctrl2, to } => {
            out.push_str("Q ");
            push_point(&mut out, ctrl1);
            out.push_str(", ");
            push_point(&mut out, ctrl2);
            out.push_str(", ");
            push_point(&mut out, to);
        }
        Segment::ClosePoly => out.push('Z'),
    }
    out
}

/// Path data for a segment stream, instructions joined by single spaces.
pub fn path_data(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(segment_data)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wraps path data in a self-closing `<path>` element.
pub fn path_element(attributes: &SvgAttributes, data: &str) -> String {
    if attributes.is_empty() {
        format!("<path d=\"{}\" />", data)
    } else {
        format!("<path {} d=\"{}\" />", attributes.render(), data)
    }
}

fn ring_data(ring: &Ring) -> Option<String> {
    let (first, rest) = ring.points().split_first()?;
    let mut out = String::from("M ");
    push_point(&mut out, first);
    for p in rest {
        out.push_str(" L ");
        push_point(&mut out, p);
    }
    out.push_str(" Z");
    Some(out)
}

fn polygon_svg(polygon: &Polygon, style: &SvgAttributes) -> String {
    let data = polygon
        .rings()
        .filter_map(ring_data)
        .collect::<Vec<_>>()
        .join(" ");
    if data.is_empty() {
        return String::new();
    }
    let mut attrs = SvgAttributes::empty();
    if !style.is_empty() {
        attrs.set("style", style.render_style());
    }
    path_element(&attrs, &data)
}

impl Geometry {
    /// Renders the geometry as SVG with the given CSS declarations in a
    /// `style` attribute.
    ///
    /// A polygon becomes one `<path>` holding all of its rings. A
    /// multi-polygon becomes a `<g>` of such paths separated by `"\n\t"`.
    /// Empty geometry renders as an empty string.
    pub fn to_svg(&self, style: &SvgAttributes) -> String {
        match self {
            Geometry::Empty => String::new(),
            Geometry::Polygon(p) => polygon_svg(p, style),
            Geometry::MultiPolygon(ps) => {
                let members = ps
                    .iter()
                    .map(|p| polygon_svg(p, style))
                    .collect::<Vec<_>>()
                    .join("\n\t");
                format!("<g>{}</g>", members)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_segment_formats() {
        assert_eq!(segment_data(&Segment::MoveTo(p(1.0, -2.5))), "M 1.000,-2.500");
        assert_eq!(segment_data(&Segment::LineTo(p(0.1234, 9.8766))), "L 0.123,9.877");
        assert_eq!(
            segment_data(&Segment::QuadTo {
                ctrl: p(1.0, 2.0),
                to: p(3.0, 4.0)
            }),
            "Q 1.000,2.000 3.000,4.000"
        );
        assert_eq!(
            segment_data(&Segment::CubicTo {
                ctrl1: p(1.0, 2.0),
                ctrl2: p(3.0, 4.0),
                to: p(5.0, 6.0)
            }),
            "Q 1.000,2.000, 3.000,4.000, 5.000,6.000"
        );
        assert_eq!(segment_data(&Segment::ClosePoly), "Z");
    }

    #[test]
    fn test_default_attributes_order() {
        let attrs = SvgAttributes::default();
        assert_eq!(attrs.render(), r#"stroke="red" stroke-width="2" fill="none""#);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = SvgAttributes::default();
        attrs.set("stroke", "blue");
        attrs.set("opacity", 0.5);
        assert_eq!(
            attrs.render(),
            r#"stroke="blue" stroke-width="2" fill="none" opacity="0.5""#
        );
        assert_eq!(attrs.remove("stroke-width").as_deref(), Some("2"));
        assert_eq!(attrs.get("stroke-width"), None);
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let attrs = SvgAttributes::empty().with("data-label", "a<b & \"c\"");
        assert_eq!(attrs.render(), r#"data-label="a&lt;b &amp; &quot;c&quot;""#);
    }

    #[test]
    fn test_path_element_without_attributes() {
        assert_eq!(
            path_element(&SvgAttributes::empty(), "M 0.000,0.000 Z"),
            r#"<path d="M 0.000,0.000 Z" />"#
        );
    }

    #[test]
    fn test_style_rendering() {
        let style: SvgAttributes = [("fill", "red"), ("stroke", "none")].into_iter().collect();
        assert_eq!(style.render_style(), "fill:red; stroke:none;");
    }

    #[test]
    fn test_geometry_svg() {
        let square = |x: f64| {
            Polygon::new(Ring::from_coords(&[
                (x, 0.0),
                (x + 1.0, 0.0),
                (x + 1.0, 1.0),
            ]))
        };
        let style = SvgAttributes::empty().with("fill", "blue");

        let single = Geometry::Polygon(square(0.0)).to_svg(&style);
        assert_eq!(
            single,
            r#"<path style="fill:blue;" d="M 0.000,0.000 L 1.000,0.000 L 1.000,1.000 Z" />"#
        );

        let multi = Geometry::MultiPolygon(vec![square(0.0), square(5.0)]).to_svg(&style);
        assert!(multi.starts_with("<g><path "));
        assert!(multi.ends_with(" /></g>"));
        assert_eq!(multi.matches("\n\t").count(), 1);

        assert_eq!(Geometry::Empty.to_svg(&style), "");
    }
}
