//! Geometric primitives for layout reconstruction.
//!
//! Coordinates are kept in the units of the source layout tree (PDF user
//! space, origin bottom-left). Bounding boxes arrive as comma separated
//! strings (`"x0,y0,x1,y1"`) and baseline origins as `"x,y"`; anything that
//! does not parse is fatal for the current document.

use crate::error::{Error, Result};
use std::str::FromStr;

/// A 2D point in document space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_tei::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding box given by two corners, as the layout tree reports it.
///
/// `(x0, y0)` is the lower-left and `(x1, y1)` the upper-right corner for
/// well-formed input, but nothing here relies on that ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    /// Left edge
    pub x0: f64,
    /// Bottom edge
    pub y0: f64,
    /// Right edge
    pub x1: f64,
    /// Top edge
    pub y1: f64,
}

impl BBox {
    /// Create a bounding box from its four coordinates.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Smallest box containing both boxes.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_tei::geometry::BBox;
    ///
    /// let a = BBox::new(0.0, 0.0, 10.0, 10.0);
    /// let b = BBox::new(5.0, -2.0, 20.0, 8.0);
    /// assert_eq!(a.union(&b), BBox::new(0.0, -2.0, 20.0, 10.0));
    /// ```
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(self.x1).min(other.x0.min(other.x1)),
            y0: self.y0.min(self.y1).min(other.y0.min(other.y1)),
            x1: self.x0.max(self.x1).max(other.x0.max(other.x1)),
            y1: self.y0.max(self.y1).max(other.y0.max(other.y1)),
        }
    }

    /// Union of all boxes, `None` for an empty iterator.
    pub fn union_all<'a>(boxes: impl IntoIterator<Item = &'a BBox>) -> Option<BBox> {
        boxes.into_iter().fold(None, |acc, b| match acc {
            None => Some(BBox::new(
                b.x0.min(b.x1),
                b.y0.min(b.y1),
                b.x0.max(b.x1),
                b.y0.max(b.y1),
            )),
            Some(acc) => Some(acc.union(b)),
        })
    }

    /// Lower of the two y values, used as baseline when only a box is known.
    pub fn base(&self) -> f64 {
        self.y0.min(self.y1)
    }

    /// Facsimile zone coordinates for this box, formatted with [`fmt_coord`].
    pub fn zone(&self) -> ZoneCoords {
        ZoneCoords {
            ulx: fmt_coord(self.x0),
            uly: fmt_coord(self.y1),
            lrx: fmt_coord(self.x1),
            lry: fmt_coord(self.y0),
        }
    }
}

impl FromStr for BBox {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let values = parse_numbers(s)?;
        match values.as_slice() {
            [x0, y0, x1, y1] => Ok(BBox::new(*x0, *y0, *x1, *y1)),
            _ => Err(Error::geometry(s, format!("expected 4 values, found {}", values.len()))),
        }
    }
}

/// Upper-left/lower-right coordinates of a facsimile zone, as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneCoords {
    /// Upper-left x
    pub ulx: String,
    /// Upper-left y
    pub uly: String,
    /// Lower-right x
    pub lrx: String,
    /// Lower-right y
    pub lry: String,
}

/// Parse a bounding box and keep its coordinates as given.
///
/// Boxes read from the layout tree end up in the facsimile zones with the
/// precision the extractor wrote them in.
///
/// # Examples
///
/// ```
/// use pdf_tei::geometry::{parse_bbox, BBox};
///
/// let (bbox, coords) = parse_bbox("0.000,0.000,595.000,842.000").unwrap();
/// assert_eq!(bbox, BBox::new(0.0, 0.0, 595.0, 842.0));
/// assert_eq!(coords.uly, "842.000");
/// assert_eq!(coords.lry, "0.000");
/// ```
pub fn parse_bbox(s: &str) -> Result<(BBox, ZoneCoords)> {
    let bbox: BBox = s.parse()?;
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [x0, y0, x1, y1] => Ok((
            bbox,
            ZoneCoords {
                ulx: x0.to_string(),
                uly: y1.to_string(),
                lrx: x1.to_string(),
                lry: y0.to_string(),
            },
        )),
        _ => Err(Error::geometry(s, "expected 4 values")),
    }
}

/// Parse a baseline origin.
///
/// Accepts either a point (`"x,y"`, the y value is the base) or a full box
/// (`"x0,y0,x1,y1"`, the lower y value is the base). Any other arity is an
/// error.
///
/// # Examples
///
/// ```
/// use pdf_tei::geometry::parse_origin;
///
/// assert_eq!(parse_origin("12.5,300.0").unwrap().y, 300.0);
/// assert_eq!(parse_origin("1,310,9,302").unwrap().y, 302.0);
/// assert!(parse_origin("1,2,3").is_err());
/// ```
pub fn parse_origin(s: &str) -> Result<Point> {
    let values = parse_numbers(s)?;
    match values.as_slice() {
        [x, y] => Ok(Point::new(*x, *y)),
        [x0, y0, x1, y1] => Ok(Point::new(x0.min(*x1), y0.min(*y1))),
        _ => Err(Error::geometry(s, "cannot determine base")),
    }
}

fn parse_numbers(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| Error::geometry(s, e.to_string()))
        })
        .collect()
}

/// Render a coordinate the way the facsimile records have always shown it:
/// integral values keep one decimal (`"87.0"`), others use the shortest
/// round-tripping form.
pub fn fmt_coord(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn test_bbox_parse() {
        let b: BBox = "87.874,309.602,92.673,317.911".parse().unwrap();
        assert_eq!(b.x0, 87.874);
        assert_eq!(b.y1, 317.911);
    }

    #[test]
    fn test_bbox_parse_tolerates_spaces() {
        let b: BBox = " 1, 2 ,3,4 ".parse().unwrap();
        assert_eq!(b, BBox::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_bbox_parse_rejects_wrong_arity() {
        assert!("1,2,3".parse::<BBox>().is_err());
        assert!("".parse::<BBox>().is_err());
    }

    #[test]
    fn test_bbox_parse_rejects_garbage() {
        let err = "1,2,three,4".parse::<BBox>().unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry { .. }));
    }

    #[test]
    fn test_union_all() {
        let boxes = [BBox::new(1.0, 1.0, 2.0, 2.0), BBox::new(3.0, 0.5, 4.0, 1.5)];
        assert_eq!(BBox::union_all(&boxes), Some(BBox::new(1.0, 0.5, 4.0, 2.0)));
        assert_eq!(BBox::union_all(&[]), None);
    }

    #[test]
    fn test_zone_flips_y() {
        let z = BBox::new(10.0, 20.0, 30.0, 40.0).zone();
        assert_eq!(
            (z.ulx.as_str(), z.uly.as_str(), z.lrx.as_str(), z.lry.as_str()),
            ("10.0", "40.0", "30.0", "20.0")
        );
    }

    #[test]
    fn test_parse_bbox_keeps_source_text() {
        let (bbox, z) = parse_bbox("56.700, 690.000,120.000,712.000").unwrap();
        assert_eq!(bbox.y0, 690.0);
        assert_eq!(
            (z.ulx.as_str(), z.uly.as_str(), z.lrx.as_str(), z.lry.as_str()),
            ("56.700", "712.000", "120.000", "690.000")
        );
    }

    #[test]
    fn test_parse_bbox_rejects_wrong_arity() {
        assert!(matches!(parse_bbox("1,2,3"), Err(Error::InvalidGeometry { .. })));
    }

    #[test]
    fn test_fmt_coord_matches_double_repr() {
        // word boxes are unions of parsed doubles
        assert_eq!(fmt_coord(309.602), "309.602");
        assert_eq!(fmt_coord(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_parse_origin_box_uses_lower_y() {
        assert_eq!(parse_origin("0,12,5,8").unwrap().y, 8.0);
    }

    #[test]
    fn test_fmt_coord() {
        assert_eq!(fmt_coord(87.0), "87.0");
        assert_eq!(fmt_coord(87.874), "87.874");
        assert_eq!(fmt_coord(-3.5), "-3.5");
    }
}
