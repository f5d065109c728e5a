//! Per-run leg cache.

use std::collections::hash_map::Entry;

use fxhash::FxHashMap;
use tracing::trace;

use crate::error::OracleError;
use crate::models::Location;

use super::{Leg, RoutingOracle};

const KEY_SCALE: f64 = 1e7;

/// Canonical cache key for a location.
///
/// Coordinates are rounded to 1e-7 degrees (about a centimeter) so that the
/// same logical point always maps to the same key, whatever float noise the
/// caller's conversions introduced.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Location;
/// use u_dispatch::oracle::LocationKey;
///
/// let a = LocationKey::from(Location::new(50.1 + 0.2, 30.0));
/// let b = LocationKey::from(Location::new(50.3, 30.0));
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationKey {
    lat: i64,
    lon: i64,
}

impl From<Location> for LocationKey {
    fn from(loc: Location) -> Self {
        Self {
            lat: (loc.lat * KEY_SCALE).round() as i64,
            lon: (loc.lon * KEY_SCALE).round() as i64,
        }
    }
}

/// Lazily populated memo of oracle legs, owned by one optimization run.
///
/// Never shared between runs, so it needs no locking.
#[derive(Debug, Default)]
pub struct DistanceCache {
    legs: FxHashMap<(LocationKey, LocationKey), Leg>,
    hits: usize,
    misses: usize,
}

impl DistanceCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the leg from `from` to `to`, querying `oracle` on a miss.
    ///
    /// Failed queries are not cached.
    pub fn leg<O: RoutingOracle + ?Sized>(
        &mut self,
        oracle: &O,
        from: Location,
        to: Location,
    ) -> Result<&Leg, OracleError> {
        match self.legs.entry((from.into(), to.into())) {
            Entry::Occupied(e) => {
                self.hits += 1;
                Ok(e.into_mut())
            }
            Entry::Vacant(e) => {
                trace!(%from, %to, "querying routing oracle");
                let leg = oracle.shortest_path(from, to)?;
                self.misses += 1;
                Ok(e.insert(leg))
            }
        }
    }

    /// Number of cached legs.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that went to the oracle.
    pub fn misses(&self) -> usize {
        self.misses
    }
}
