//! A planar vector value type.

use core::fmt;
use core::ops::{Add, Mul};

#[cfg(feature = "std")]
fn hypot(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn hypot(x: f64, y: f64) -> f64 {
    libm::hypot(x, y)
}

/// A 2-component planar vector.
///
/// Every operation returns a new value; the type has no identity beyond
/// its components. Addition and scaling are also available through the
/// `+` and `*` operators. Only `Vector * f64` is provided; the reflected
/// `f64 * Vector` is intentionally absent.
///
/// # Example
///
/// ```
/// use deckplane::Vector;
///
/// let v = Vector::new(4.0, 3.0) + Vector::new(3.0, 1.0);
/// assert_eq!(v, Vector::new(7.0, 4.0));
/// assert_eq!(v.to_string(), "Vector(7, 4)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector {
    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the vector scaled componentwise by `scalar`.
    #[must_use]
    pub const fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Returns the Euclidean norm of the vector, always non-negative.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        hypot(self.x, self.y)
    }

    /// Returns whether the vector differs from the zero vector.
    #[must_use]
    pub fn is_nonzero(self) -> bool {
        self.magnitude() > 0.0
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}
