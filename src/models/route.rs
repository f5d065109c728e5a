//! Materialized route and visit types.

use serde::{Deserialize, Serialize};

use super::{Location, RequestId, VehicleProfile};

/// A single stop within a materialized route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    /// Request served at this stop.
    pub request_id: RequestId,
    /// External reference of the request.
    pub external_ref: String,
    /// Elapsed time on arrival.
    pub arrival_time: f64,
    /// Elapsed time when service begins (after waiting for the window).
    pub service_start: f64,
    /// Service began after the window closed.
    pub late: bool,
}

/// A vehicle's route, fully computed for rendering.
///
/// Built once by [`CostEvaluator::materialize`](crate::evaluation::CostEvaluator::materialize)
/// and never mutated afterwards. `geometry` holds one polyline per leg,
/// depot legs included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    vehicle: VehicleProfile,
    visits: Vec<Visit>,
    distance: f64,
    travel_time: f64,
    elapsed_time: f64,
    geometry: Vec<Vec<Location>>,
}

impl Route {
    /// Assembles a materialized route.
    pub fn new(
        vehicle: VehicleProfile,
        visits: Vec<Visit>,
        distance: f64,
        travel_time: f64,
        geometry: Vec<Vec<Location>>,
    ) -> Self {
        Self {
            vehicle,
            visits,
            distance,
            travel_time,
            elapsed_time: travel_time,
            geometry,
        }
    }

    /// Sets the elapsed time when it differs from the driving time.
    pub fn with_elapsed_time(mut self, elapsed_time: f64) -> Self {
        self.elapsed_time = elapsed_time;
        self
    }

    /// Vehicle driving this route.
    pub fn vehicle(&self) -> &VehicleProfile {
        &self.vehicle
    }

    /// Stops in visiting order (depot excluded).
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Request IDs in visiting order.
    pub fn stop_ids(&self) -> Vec<RequestId> {
        self.visits.iter().map(|v| v.request_id).collect()
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Returns `true` if the vehicle serves no request.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Travel distance, depot to depot, in oracle units (meters).
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Sum of leg travel times, depot to depot, in oracle units (seconds).
    pub fn travel_time(&self) -> f64 {
        self.travel_time
    }

    /// Time back at the depot, waiting for windows included.
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// One polyline per leg.
    pub fn geometry(&self) -> &[Vec<Location>] {
        &self.geometry
    }

    /// Distance in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.distance / 1000.0
    }

    /// Travel time in minutes.
    pub fn travel_time_min(&self) -> f64 {
        self.travel_time / 60.0
    }

    /// Number of stops served after their window closed.
    pub fn num_late(&self) -> usize {
        self.visits.iter().filter(|v| v.late).count()
    }
}
