//! integer geometry value types shared by the view core and backends

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Point { Point { x, y } }

    #[inline]
    pub fn translated(self, dx: i32, dy: i32) -> Point { Point::new(self.x + dx, self.y + dy) }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0, height: 0 };

    #[inline]
    pub const fn new(width: i32, height: i32) -> Size { Size { width, height } }

    /// True if either axis is non-positive.
    pub fn is_empty(self) -> bool { self.width <= 0 || self.height <= 0 }

    /// Component-wise minimum of `self` and `other`.
    pub fn bounded_to(self, other: Size) -> Size {
        Size::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Component-wise maximum of `self` and `other`.
    pub fn expanded_to(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect { origin: Point::ZERO, size: Size::ZERO };

    #[inline]
    pub const fn new(origin: Point, size: Size) -> Rect { Rect { origin, size } }

    #[inline]
    pub fn top_left(self) -> Point { self.origin }

    #[inline]
    pub fn x(self) -> i32 { self.origin.x }

    #[inline]
    pub fn y(self) -> i32 { self.origin.y }

    #[inline]
    pub fn width(self) -> i32 { self.size.width }

    #[inline]
    pub fn height(self) -> i32 { self.size.height }

    pub fn is_empty(self) -> bool { self.size.is_empty() }

    /// Same extent, repositioned so its top-left corner is `top_left`.
    pub fn moved_to(self, top_left: Point) -> Rect { Rect::new(top_left, self.size) }

    pub fn translated(self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.origin.translated(dx, dy), self.size)
    }

    pub fn contains(self, point: Point) -> bool {
        (self.x()..self.x() + self.width()).contains(&point.x)
            && (self.y()..self.y() + self.height()).contains(&point.y)
    }
}
