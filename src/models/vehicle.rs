//! Vehicle profile with capacity.

use serde::{Deserialize, Serialize};

/// Identifier of a vehicle.
pub type VehicleId = u64;

/// A vehicle available for one optimization run.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::VehicleProfile;
///
/// let v = VehicleProfile::new(0, "Van 1", 200.0);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.name(), "Van 1");
/// assert_eq!(v.capacity(), 200.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    id: VehicleId,
    name: String,
    capacity: f64,
}

impl VehicleProfile {
    /// Creates a vehicle profile.
    pub fn new(id: VehicleId, name: impl Into<String>, capacity: f64) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
        }
    }

    /// Vehicle ID.
    pub fn id(&self) -> VehicleId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum load volume.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}
