//! Trail simulation state and step functions.

use std::collections::VecDeque;

use rand::Rng;

use crate::point::{TrailParams, TrailPoint};

/// Ordered set of live trail points, oldest first, plus the last known
/// pointer position.
///
/// Pointer events only append; [`TrailState::advance`] runs once per frame
/// and is the only mutation of existing points.
#[derive(Debug, Clone, Default)]
pub struct TrailState {
    points: VecDeque<TrailPoint>,
    pointer: Option<(f64, f64)>,
}

impl TrailState {
    /// Create an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move: remember the position and spawn a point there.
    pub fn pointer_moved<R: Rng + ?Sized>(
        &mut self,
        x: f64,
        y: f64,
        params: &TrailParams,
        rng: &mut R,
    ) {
        self.pointer = Some((x, y));
        self.spawn(TrailPoint::spawn(x, y, params, rng), params);
    }

    /// Append a point, evicting the oldest while the list is over capacity.
    pub fn spawn(&mut self, point: TrailPoint, params: &TrailParams) {
        self.points.push_back(point);
        while self.points.len() > params.capacity {
            self.points.pop_front();
        }
    }

    /// Step every point one frame: drift by velocity, age by one, then
    /// prune. Pruning is a separate pass over the whole list so removal
    /// never skips a neighbor mid-iteration.
    pub fn advance(&mut self) {
        for point in &mut self.points {
            point.x += point.dx;
            point.y += point.dy;
            point.age += 1;
        }
        self.points.retain(|point| !point.expired());
    }

    /// Live points, oldest first.
    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    /// Number of live points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trail has no live points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last pointer position fed into the simulation.
    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    /// Unordered pairs of live points within `params.link_distance`, each
    /// as (earlier, later) in spawn order.
    pub fn links(&self, params: &TrailParams) -> Vec<(&TrailPoint, &TrailPoint)> {
        let mut pairs = Vec::new();
        for i in 0..self.points.len() {
            for j in (i + 1)..self.points.len() {
                let a = &self.points[i];
                let b = &self.points[j];
                if a.distance(b) < params.link_distance {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }
}
