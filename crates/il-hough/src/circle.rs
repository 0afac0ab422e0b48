use core::fmt;

/// Integer circle, `x` = column, `y` = row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub r: i32,
}

impl Circle {
    pub const fn new(x: i32, y: i32, r: i32) -> Self {
        Self { x, y, r }
    }

    /// Multiplies all three components by `mult`, truncating toward zero.
    pub fn scaled(self, mult: f64) -> Self {
        Self {
            x: (self.x as f64 * mult) as i32,
            y: (self.y as f64 * mult) as i32,
            r: (self.r as f64 * mult) as i32,
        }
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.r)
    }
}

/// A circle and the number of edge samples supporting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CircleMatch {
    pub circle: Circle,
    pub votes: u32,
}

#[cfg(test)]
mod tests {
    use super::Circle;

    #[test]
    fn display_form() {
        assert_eq!(Circle::new(12, -3, 40).to_string(), "(12,-3,40)");
        assert_eq!(Circle::default().to_string(), "(0,0,0)");
    }

    #[test]
    fn scaling_truncates() {
        let c = Circle::new(30, 29, 6).scaled(200.0 / 60.0);
        assert_eq!(c, Circle::new(100, 96, 20));
        assert_eq!(Circle::new(7, 7, 7).scaled(1.0), Circle::new(7, 7, 7));
    }
}
