mod point;
mod rounding;
mod vector;

pub use self::point::*;
pub(crate) use self::rounding::*;
pub use self::vector::*;

#[cfg(test)]
mod test_geometry {
    use super::*;
    use float_cmp::ApproxEq;

    #[test]
    fn test_derived_vectors_stay_rounded() {
        let a = Vector::new(1.111, -2.222);
        let b = Vector::from_two_points((0.123, 0.456), (9.876, 5.432));
        let derived = [
            a + b,
            a - b,
            -a,
            a * 1.2345,
            b.scale(-0.7),
            a.rotate(17.0),
            b.normalized().unwrap(),
        ];
        for v in derived {
            assert_eq!(round2(v.x()), v.x());
            assert_eq!(round2(v.y()), v.y());
        }
    }

    #[test]
    fn test_walk_polygon_edges() {
        // closed square: edges sum to zero, turn by 90 degrees at each corner
        let corners = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
        let edges: Vec<Vector> = (0..corners.len())
            .map(|i| Vector::from_two_points(corners[i], corners[(i + 1) % corners.len()]))
            .collect();

        let sum = edges.iter().fold(Vector::ZERO, |acc, e| acc + *e);
        assert_eq!(sum, Vector::ZERO);
        for pair in edges.windows(2) {
            assert_eq!(pair[0].angle_between(&pair[1]), Ok(90));
            assert!(pair[0].rotate(90.0).approx_eq(pair[1], (0.001, 2)));
            assert_eq!(pair[0] * pair[1], 0.0);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_vector() {
        let v = Vector::new(1.0, 2.5);
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"x":1.0,"y":2.5}"#);

        // deserialized components are rounded like any other vector
        let v: Vector = serde_json::from_str(r#"{"x":1.234,"y":-0.005}"#).unwrap();
        assert_eq!(v, Vector::new(1.23, -0.01));

        let p: Point = serde_json::from_str(r#"{"x":1.234,"y":2.0}"#).unwrap();
        assert_eq!(p, Point::new(1.234, 2.0));
    }
}
