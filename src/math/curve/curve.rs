use super::sampledcurve::{
    Point2D,
    SampledCurve
};

pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;

    /// `count` evenly spaced points over `[min_x, max_x]`, both ends included.
    /// Fewer than two points are widened to two.
    fn sample(&self, min_x: f64, max_x: f64, count: usize) -> SampledCurve {
        let count = count.max(2);
        let step = (max_x - min_x) / (count - 1) as f64;
        let points = (0..count)
            .map(|i| {
                let x = if i == count - 1 { max_x } else { min_x + step * i as f64 };
                Point2D::new(x, self.value(x))
            })
            .collect();
        SampledCurve::new(points)
    }
}
