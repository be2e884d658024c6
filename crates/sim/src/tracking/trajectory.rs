use serde::{Deserialize, Serialize};

/// One frequency observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub generation: usize,
    pub frequency: f64,
}

impl TrajectoryPoint {
    pub fn new(generation: usize, frequency: f64) -> Self {
        Self {
            generation,
            frequency,
        }
    }
}

impl From<(usize, f64)> for TrajectoryPoint {
    fn from((generation, frequency): (usize, f64)) -> Self {
        Self::new(generation, frequency)
    }
}

/// Frequency history of one mutation, in recording order.
///
/// Points are kept exactly as appended; nothing here sorts or deduplicates
/// generations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    /// Create an empty trajectory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trajectory from existing points.
    pub fn from_points(points: Vec<TrajectoryPoint>) -> Self {
        Self { points }
    }

    /// Append an observation.
    pub fn push(&mut self, generation: usize, frequency: f64) {
        self.points.push(TrajectoryPoint::new(generation, frequency));
    }

    /// Append every point of `other` after the existing points.
    pub fn extend_from(&mut self, other: &Trajectory) {
        self.points.extend_from_slice(&other.points);
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Number of recorded points (the sojourn length).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&TrajectoryPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    /// Point of maximum frequency.
    ///
    /// Ties resolve to the latest point in recording order, so a plateau at
    /// the maximum reports its final generation.
    pub fn peak(&self) -> Option<&TrajectoryPoint> {
        let mut points = self.points.iter();
        let mut best = points.next()?;
        for point in points {
            if best.frequency <= point.frequency {
                best = point;
            }
        }
        Some(best)
    }

    /// Return `true` if the last recorded frequency is exactly 1.0.
    pub fn ends_fixed(&self) -> bool {
        self.last().is_some_and(|p| p.frequency == 1.0)
    }
}

impl FromIterator<TrajectoryPoint> for Trajectory {
    fn from_iter<I: IntoIterator<Item = TrajectoryPoint>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory(points: &[(usize, f64)]) -> Trajectory {
        points.iter().copied().map(TrajectoryPoint::from).collect()
    }

    #[test]
    fn test_peak_prefers_last_tie() {
        let t = trajectory(&[(0, 0.5), (1, 0.8), (2, 0.8)]);
        assert_eq!(t.peak(), Some(&TrajectoryPoint::new(2, 0.8)));
    }

    #[test]
    fn test_peak_single_maximum() {
        let t = trajectory(&[(0, 0.1), (1, 0.9), (2, 0.3)]);
        assert_eq!(t.peak().map(|p| p.generation), Some(1));
    }

    #[test]
    fn test_peak_empty() {
        assert!(Trajectory::new().peak().is_none());
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut a = trajectory(&[(5, 0.2)]);
        a.extend_from(&trajectory(&[(1, 0.1), (5, 0.3)]));
        let generations: Vec<usize> = a.points().iter().map(|p| p.generation).collect();
        assert_eq!(generations, vec![5, 1, 5]);
    }

    #[test]
    fn test_ends_fixed() {
        assert!(trajectory(&[(0, 0.4), (1, 1.0)]).ends_fixed());
        assert!(!trajectory(&[(0, 1.0), (1, 0.99)]).ends_fixed());
        assert!(!Trajectory::new().ends_fixed());
    }
}
