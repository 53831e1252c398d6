use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn slope(lhs_pt: &Point2D, rhs_pt: &Point2D) -> f64 {
        (rhs_pt.y - lhs_pt.y) / (rhs_pt.x - lhs_pt.x)
    }
}


/// Points of a curve in ascending x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledCurve {
    points: Vec<Point2D>
}

impl SampledCurve {
    pub fn new(points: Vec<Point2D>) -> SampledCurve {
        SampledCurve { points }
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn min_x(&self) -> f64 {
        self.points.first().map_or(0.0, |pt| pt.x)
    }

    pub fn max_x(&self) -> f64 {
        self.points.last().map_or(0.0, |pt| pt.x)
    }

    /// Rescales y to percent of `full` and caps it at 100.
    pub fn as_percent_of(&self, full: f64) -> SampledCurve {
        let points = self.points
            .iter()
            .map(|pt| Point2D::new(pt.x, (pt.y / full * 100.0).min(100.0)))
            .collect();
        SampledCurve { points }
    }

    pub fn is_non_decreasing(&self) -> bool {
        self.points
            .windows(2)
            .all(|pair| Point2D::slope(&pair[0], &pair[1]) >= 0.0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::curve::curve::Curve;

    struct Line;

    impl Curve for Line {
        fn value(&self, x: f64) -> f64 {
            3.0 * x + 1.0
        }

        fn derivative(&self, _x: f64) -> f64 {
            3.0
        }
    }

    #[test]
    fn sample_hits_both_ends() {
        let sampled = Line.sample(0.0, 2.0, 5);
        assert_eq!(sampled.points().len(), 5);
        assert_eq!(sampled.min_x(), 0.0);
        assert_eq!(sampled.max_x(), 2.0);
        assert_eq!(sampled.points()[2], Point2D::new(1.0, 4.0));
        assert!(sampled.is_non_decreasing());
        assert_eq!(Line.sample(0.0, 1.0, 0).points().len(), 2);
    }

    #[test]
    fn percent_is_capped() {
        let percent = Line.sample(0.0, 3.0, 4).as_percent_of(4.0);
        let ys: Vec<f64> = percent.points().iter().map(|pt| pt.y()).collect();
        assert_eq!(ys, vec![25.0, 100.0, 100.0, 100.0]);
    }
}
