//! Trail points and simulation parameters.

use rand::Rng;

/// Tuning parameters for the trail simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailParams {
    /// Maximum number of live points; the oldest are evicted first.
    pub capacity: usize,
    /// Lower bound of the per-point lifetime, in frames.
    pub min_life: f64,
    /// Upper bound (exclusive) of the per-point lifetime, in frames.
    pub max_life: f64,
    /// Drift bound; velocity components are sampled from `[-drift, drift)`.
    pub drift: f64,
    /// Maximum distance at which two points are visually connected.
    pub link_distance: f64,
    /// Radius of a rendered point.
    pub point_radius: f64,
    /// Alpha factor applied to point fills.
    pub point_alpha: f64,
    /// Alpha factor applied to connecting segments.
    pub link_alpha: f64,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            capacity: 200,
            min_life: 100.0,
            max_life: 200.0,
            drift: 1.0,
            link_distance: 100.0,
            point_radius: 2.0,
            point_alpha: 0.7,
            link_alpha: 0.2,
        }
    }
}

/// A single ephemeral trail particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    /// Position.
    pub x: f64,
    pub y: f64,
    /// Per-frame drift velocity.
    pub dx: f64,
    pub dy: f64,
    /// Frames lived so far. Monotonically non-decreasing until removal.
    pub age: u32,
    /// Lifetime in frames. Fractional, so the last surviving frame keeps a
    /// sliver of opacity before the point expires.
    pub max_age: f64,
}

impl TrailPoint {
    /// Create a point at the pointer position with randomized drift and
    /// lifetime.
    pub fn spawn<R: Rng + ?Sized>(x: f64, y: f64, params: &TrailParams, rng: &mut R) -> Self {
        Self {
            x,
            y,
            dx: rng.random_range(-params.drift..params.drift),
            dy: rng.random_range(-params.drift..params.drift),
            age: 0,
            max_age: rng.random_range(params.min_life..params.max_life),
        }
    }

    /// Remaining opacity, fading linearly from 1 at spawn to 0 at `max_age`.
    pub fn opacity(&self) -> f64 {
        (1.0 - f64::from(self.age) / self.max_age).max(0.0)
    }

    /// Whether this point has outlived its lifetime.
    pub fn expired(&self) -> bool {
        f64::from(self.age) > self.max_age
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &TrailPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_spawn_samples_within_bounds() {
        let params = TrailParams::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let point = TrailPoint::spawn(3.0, 4.0, &params, &mut rng);
            assert_eq!((point.x, point.y), (3.0, 4.0));
            assert_eq!(point.age, 0);
            assert!((-1.0..1.0).contains(&point.dx));
            assert!((-1.0..1.0).contains(&point.dy));
            assert!((100.0..200.0).contains(&point.max_age));
        }
    }

    #[test]
    fn test_opacity_fades_linearly() {
        let mut point = TrailPoint {
            x: 0.0,
            y: 0.0,
            dx: 0.0,
            dy: 0.0,
            age: 0,
            max_age: 100.0,
        };
        assert_eq!(point.opacity(), 1.0);
        point.age = 50;
        assert_eq!(point.opacity(), 0.5);
        point.age = 100;
        assert_eq!(point.opacity(), 0.0);
        point.age = 150;
        assert_eq!(point.opacity(), 0.0);
    }

    #[test]
    fn test_expiry_boundary() {
        let mut point = TrailPoint {
            x: 0.0,
            y: 0.0,
            dx: 0.0,
            dy: 0.0,
            age: 150,
            max_age: 150.5,
        };
        // Final surviving frame still has a sliver of opacity.
        assert!(!point.expired());
        assert!(point.opacity() > 0.0);
        point.age = 151;
        assert!(point.expired());
    }

    #[test]
    fn test_distance() {
        let a = TrailPoint {
            x: 0.0,
            y: 0.0,
            dx: 0.0,
            dy: 0.0,
            age: 0,
            max_age: 100.0,
        };
        let b = TrailPoint { x: 3.0, y: 4.0, ..a };
        assert_eq!(a.distance(&b), 5.0);
    }
}
