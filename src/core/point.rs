/// A plain pair of signed 32-bit coordinates.
///
/// Passed by value across the C ABI; carries no ownership.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn layout_is_two_packed_i32() {
        assert_eq!(std::mem::size_of::<Point>(), 8);
        assert_eq!(std::mem::align_of::<Point>(), 4);
        assert_eq!(std::mem::offset_of!(Point, x), 0);
        assert_eq!(std::mem::offset_of!(Point, y), 4);
    }

    #[test]
    fn extremes_are_preserved() {
        let p = Point::new(i32::MIN, i32::MAX);
        assert_eq!(p.x, i32::MIN);
        assert_eq!(p.y, i32::MAX);
        assert_eq!(Point::from((i32::MIN, i32::MAX)), p);
    }

    #[test]
    fn display_formats_as_pair() {
        assert_eq!(Point::new(-3, 7).to_string(), "(-3, 7)");
    }
}
