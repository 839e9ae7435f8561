//! Grid geometry: points, paths and rectangles in cell units.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A grid cell coordinate. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rotate 90° clockwise around the origin (screen coordinates).
    ///
    /// ```
    /// use tui_arcade_types::Point;
    ///
    /// assert_eq!(Point::new(1, 0).rotate_clockwise(), Point::new(0, 1));
    /// assert_eq!(Point::new(0, -1).rotate_clockwise(), Point::new(1, 0));
    /// ```
    pub const fn rotate_clockwise(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Point::ZERO
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

/// Ordered cells of a shape at a given placement.
///
/// Order only matters for display; occupancy questions treat the path as a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Offset every point by `delta`.
    pub fn translate(&self, delta: Point) -> Path {
        self.points.iter().map(|&p| p + delta).collect()
    }

    /// Apply [`Point::rotate_clockwise`] to every point.
    pub fn rotate_clockwise(&self) -> Path {
        self.points.iter().map(|p| p.rotate_clockwise()).collect()
    }

    pub fn min_x(&self) -> Option<i32> {
        self.points.iter().map(|p| p.x).min()
    }

    pub fn max_x(&self) -> Option<i32> {
        self.points.iter().map(|p| p.x).max()
    }

    pub fn min_y(&self) -> Option<i32> {
        self.points.iter().map(|p| p.y).min()
    }

    pub fn max_y(&self) -> Option<i32> {
        self.points.iter().map(|p| p.y).max()
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Axis-aligned rectangle in cell units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning `[-extent, extent)` on both axes.
    pub const fn centered(extent: i32) -> Self {
        Self::new(-extent, -extent, extent, extent)
    }
}
