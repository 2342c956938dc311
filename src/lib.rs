//! 2D vector value type
//!
//! A [`Vector`](geometry::Vector) holds x and y rounded to two decimal places.
//! Every operation returns a new vector built the same way, so the
//! quantization compounds through arithmetic and rotation.
//!
//! Multiplying two vectors gives the dot product, multiplying by a scalar
//! scales the vector:
//!
//! ```
//! use vector2d::Vector;
//!
//! let dot: f64 = Vector::new(1.0, 2.0) * Vector::new(3.0, 4.0);
//! assert_eq!(dot, 11.0);
//! assert_eq!(Vector::new(2.0, 3.0) * 2.0, Vector::new(4.0, 6.0));
//! assert_eq!(Vector::new(0.0, 1.0).rotate(90.0), Vector::new(-1.0, 0.0));
//! ```

#[macro_use]
pub mod vector_error;
pub mod geometry;

pub use geometry::{Point, Vector};
pub use vector_error::{VectorError, VectorErrorKind};
