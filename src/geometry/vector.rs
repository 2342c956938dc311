use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};

use float_cmp::{ApproxEq, F64Margin};
use log::debug;

use super::{round2, Point};
use crate::vector_error::{VectorError, VectorErrorKind};

/// 2d vector, from origin to (x, y)
///
/// Both components are rounded to two decimal places when the vector is
/// built, and every operation returning a vector builds it through
/// [`Vector::new`], so all vectors carry the same quantization.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Point"))]
pub struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    /// reference axis of [`Vector::angle`]
    pub const UNIT_Y: Vector = Vector { x: 0.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vector {
            x: round2(x),
            y: round2(y),
        }
    }

    /// vector pointing from `start` to `end`
    pub fn from_two_points<S, E>(start: S, end: E) -> Self
    where
        S: Into<Point>,
        E: Into<Point>,
    {
        end.into() - start.into()
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn scale(&self, k: f64) -> Vector {
        Vector::new(self.x * k, self.y * k)
    }

    /// euclidean norm
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// unit vector with the same direction
    ///
    /// A zero vector has no direction and yields
    /// [`VectorErrorKind::ZeroLength`].
    pub fn normalized(&self) -> Result<Vector, VectorError> {
        let len = self.length();
        if len == 0.0 {
            debug!("refuse to normalize zero length vector {}", self);
            return Err(vector_err!(
                VectorErrorKind::ZeroLength,
                "can not normalize a zero length vector"
            ));
        }
        Ok(Vector::new(self.x / len, self.y / len))
    }

    /// unsigned angle to `other` in whole degrees, range [0, 180]
    ///
    /// Halfway values round to the even degree.
    pub fn angle_between(&self, other: &Vector) -> Result<u32, VectorError> {
        let lengths = self.length() * other.length();
        if lengths == 0.0 {
            debug!("refuse angle between {} and {}, zero length", self, other);
            return Err(vector_err!(
                VectorErrorKind::ZeroLength,
                format!("angle between {} and {} is undefined", self, other)
            ));
        }

        let ratio = self.dot(other) / lengths;
        let cos = ratio.clamp(-1.0, 1.0);
        if cos != ratio {
            debug!("cosine {} of {} and {} clamped to {}", ratio, self, other, cos);
        }
        Ok(cos.acos().to_degrees().round_ties_even() as u32)
    }

    /// angle to the positive y axis in whole degrees
    pub fn angle(&self) -> Result<u32, VectorError> {
        self.angle_between(&Vector::UNIT_Y)
    }

    /// rotate counterclockwise by `degrees`
    pub fn rotate(&self, degrees: f64) -> Vector {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vector::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
        )
    }
}

impl From<(f64, f64)> for Vector {
    fn from(value: (f64, f64)) -> Self {
        Vector::new(value.0, value.1)
    }
}

impl From<Point> for Vector {
    fn from(value: Point) -> Self {
        Vector::new(value.x, value.y)
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Self::Output {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector::new(-self.x, -self.y)
    }
}

/// vector * vector is the dot product
impl Mul<Vector> for Vector {
    type Output = f64;

    fn mul(self, rhs: Vector) -> Self::Output {
        self.dot(&rhs)
    }
}

/// vector * scalar scales the vector
impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl ApproxEq for Vector {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}
