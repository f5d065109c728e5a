//! Dense precomputed travel matrix over a fixed set of points.

use fxhash::FxHashMap;

use crate::error::OracleError;
use crate::models::Location;

use super::{Leg, LocationKey, RoutingOracle};

/// Oracle backed by dense n×n distance and time matrices in row-major order.
///
/// Suitable when a routing backend has already produced a full matrix for
/// the depot and all requests. Entries that are negative or not finite mean
/// "unreachable" and yield [`OracleError::NoPath`], as do points outside the
/// matrix.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Location;
/// use u_dispatch::oracle::{MatrixOracle, RoutingOracle};
///
/// let a = Location::new(50.0, 30.0);
/// let b = Location::new(50.1, 30.1);
/// let oracle = MatrixOracle::from_data(
///     vec![a, b],
///     vec![0.0, 1200.0, 1300.0, 0.0],
///     vec![0.0, 120.0, 130.0, 0.0],
/// )
/// .unwrap();
/// assert_eq!(oracle.shortest_path(b, a).unwrap().distance, 1300.0);
/// ```
#[derive(Debug, Clone)]
pub struct MatrixOracle {
    points: Vec<Location>,
    index: FxHashMap<LocationKey, usize>,
    distances: Vec<f64>,
    times: Vec<f64>,
}

impl MatrixOracle {
    /// Creates a matrix over `points` with every entry unreachable except
    /// the zero diagonal.
    pub fn new(points: Vec<Location>) -> Self {
        let n = points.len();
        let mut distances = vec![f64::INFINITY; n * n];
        let mut times = vec![f64::INFINITY; n * n];
        for i in 0..n {
            distances[i * n + i] = 0.0;
            times[i * n + i] = 0.0;
        }
        let index = index_points(&points);
        Self {
            points,
            index,
            distances,
            times,
        }
    }

    /// Creates a matrix from explicit row-major data.
    ///
    /// Returns `None` if either grid's length doesn't match the number of
    /// points squared.
    pub fn from_data(points: Vec<Location>, distances: Vec<f64>, times: Vec<f64>) -> Option<Self> {
        let n = points.len();
        if distances.len() != n * n || times.len() != n * n {
            return None;
        }
        let index = index_points(&points);
        Some(Self {
            points,
            index,
            distances,
            times,
        })
    }

    /// Sets the distance and time from point `from` to point `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, from: usize, to: usize, distance: f64, travel_time: f64) {
        let n = self.points.len();
        self.distances[from * n + to] = distance;
        self.times[from * n + to] = travel_time;
    }

    /// Sets both directions between two points.
    pub fn set_symmetric(&mut self, a: usize, b: usize, distance: f64, travel_time: f64) {
        self.set(a, b, distance, travel_time);
        self.set(b, a, distance, travel_time);
    }

    /// Number of points in this matrix.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Points covered by this matrix, in index order.
    pub fn points(&self) -> &[Location] {
        &self.points
    }
}

fn index_points(points: &[Location]) -> FxHashMap<LocationKey, usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| (LocationKey::from(p), i))
        .collect()
}

impl RoutingOracle for MatrixOracle {
    fn shortest_path(&self, origin: Location, destination: Location) -> Result<Leg, OracleError> {
        let no_path = || OracleError::NoPath {
            origin,
            destination,
        };
        let from = *self.index.get(&origin.into()).ok_or_else(no_path)?;
        let to = *self.index.get(&destination.into()).ok_or_else(no_path)?;
        let cell = from * self.points.len() + to;
        let (distance, travel_time) = (self.distances[cell], self.times[cell]);
        if !distance.is_finite() || distance < 0.0 || !travel_time.is_finite() || travel_time < 0.0
        {
            return Err(no_path());
        }
        Ok(Leg {
            distance,
            travel_time,
            geometry: vec![self.points[from], self.points[to]],
        })
    }
}
