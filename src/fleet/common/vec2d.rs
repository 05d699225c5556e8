use num::{Float, Num, NumCast};
use std::fmt::{self, Display};
use std::ops::{Add, Div, Mul, Sub};

/// A 2D vector generic over any numeric type.
///
/// Represents a point or displacement on the simulation grid and provides the
/// small set of vector operations the movement model needs.
///
/// # Type Parameters
/// * `T` - The available operations depend on the traits implemented by `T`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Vec2D<T> {
    /// The x-component of the vector.
    x: T,
    /// The y-component of the vector.
    y: T,
}

impl<T: Copy> Vec2D<T> {
    /// Creates a new vector with the given x and y components.
    pub const fn new(x: T, y: T) -> Self { Self { x, y } }

    /// Returns the x-component of the vector.
    pub const fn x(&self) -> T { self.x }

    /// Returns the y-component of the vector.
    pub const fn y(&self) -> T { self.y }
}

impl<T: Num + NumCast + Copy> Vec2D<T> {
    /// Creates a zero vector (x = 0, y = 0).
    pub fn zero() -> Self { Self::new(T::zero(), T::zero()) }

    /// Converts the component type, e.g. grid coordinates (`i32`) into
    /// continuous positions (`f64`).
    pub fn cast<D: NumCast>(self) -> Vec2D<D> {
        Vec2D {
            x: D::from(self.x).unwrap(),
            y: D::from(self.y).unwrap(),
        }
    }
}

impl<T: Float + NumCast> Vec2D<T> {
    /// Computes the magnitude (absolute value) of the vector.
    pub fn abs(&self) -> T { (self.x.powi(2) + self.y.powi(2)).sqrt() }

    /// Creates a vector pointing from the current vector (`self`) to another
    /// vector (`other`).
    pub fn to(&self, other: &Vec2D<T>) -> Vec2D<T> {
        Vec2D::new(other.x - self.x, other.y - self.y)
    }

    /// Computes the Euclidean distance between the current vector and another
    /// vector.
    pub fn euclid_distance(&self, other: &Self) -> T {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl<T: Num> Add for Vec2D<T> {
    type Output = Vec2D<T>;

    fn add(self, rhs: Vec2D<T>) -> Self::Output {
        Self::Output {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Num> Sub for Vec2D<T> {
    type Output = Vec2D<T>;

    fn sub(self, rhs: Vec2D<T>) -> Self::Output {
        Self::Output {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Num + Copy> Mul<T> for Vec2D<T> {
    type Output = Vec2D<T>;

    /// Scales the vector by a scalar of the same component type.
    fn mul(self, rhs: T) -> Self::Output {
        Self::Output {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T: Num + Copy> Div<T> for Vec2D<T> {
    type Output = Vec2D<T>;

    /// Divides the vector by a scalar of the same component type.
    fn div(self, rhs: T) -> Self::Output {
        Self::Output {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl<T: Num> From<(T, T)> for Vec2D<T> {
    fn from(tuple: (T, T)) -> Self {
        Vec2D {
            x: tuple.0,
            y: tuple.1,
        }
    }
}

impl<T: Display> Display for Vec2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
