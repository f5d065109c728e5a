//! Vehicle set selection.

use tracing::{debug, warn};

use crate::models::VehicleProfile;

/// Picks the vehicles for a run.
///
/// With `force_all`, returns every vehicle in input order. Otherwise takes
/// vehicles in descending capacity order until their combined capacity
/// covers `total_demand`. This minimizes the vehicle count, not the spare
/// capacity. If the whole fleet falls short, the whole fleet is returned
/// and the run proceeds with some requests left unrouted.
///
/// # Examples
///
/// ```
/// use u_dispatch::fleet::select_vehicle_set;
/// use u_dispatch::models::VehicleProfile;
///
/// let fleet = vec![
///     VehicleProfile::new(1, "small", 3.0),
///     VehicleProfile::new(2, "medium", 5.0),
///     VehicleProfile::new(3, "large", 8.0),
/// ];
/// let chosen = select_vehicle_set(&fleet, 6.0, false);
/// assert_eq!(chosen.len(), 1);
/// assert_eq!(chosen[0].id(), 3);
///
/// assert_eq!(select_vehicle_set(&fleet, 6.0, true).len(), 3);
/// ```
pub fn select_vehicle_set(
    vehicles: &[VehicleProfile],
    total_demand: f64,
    force_all: bool,
) -> Vec<VehicleProfile> {
    if force_all {
        return vehicles.to_vec();
    }

    let mut by_capacity: Vec<&VehicleProfile> = vehicles.iter().collect();
    by_capacity.sort_by(|a, b| b.capacity().total_cmp(&a.capacity()));

    let mut chosen = Vec::new();
    let mut capacity = 0.0;
    for vehicle in by_capacity {
        chosen.push(vehicle.clone());
        capacity += vehicle.capacity();
        if capacity >= total_demand {
            break;
        }
    }

    if capacity < total_demand {
        warn!(
            capacity,
            total_demand, "fleet capacity below demand; using every vehicle"
        );
    }
    debug!(selected = chosen.len(), capacity, total_demand, "vehicle set selected");
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet(capacities: &[f64]) -> Vec<VehicleProfile> {
        capacities
            .iter()
            .enumerate()
            .map(|(i, &c)| VehicleProfile::new(i as u64, format!("V{i}"), c))
            .collect()
    }

    fn capacities(vehicles: &[VehicleProfile]) -> Vec<f64> {
        vehicles.iter().map(VehicleProfile::capacity).collect()
    }

    #[test]
    fn test_largest_first_cover() {
        let chosen = select_vehicle_set(&fleet(&[3.0, 5.0, 8.0]), 6.0, false);
        assert_eq!(capacities(&chosen), vec![8.0]);
    }

    #[test]
    fn test_force_all_keeps_order() {
        let chosen = select_vehicle_set(&fleet(&[3.0, 5.0, 8.0]), 6.0, true);
        assert_eq!(capacities(&chosen), vec![3.0, 5.0, 8.0]);
    }

    #[test]
    fn test_needs_several() {
        let chosen = select_vehicle_set(&fleet(&[3.0, 5.0, 8.0]), 12.0, false);
        assert_eq!(capacities(&chosen), vec![8.0, 5.0]);
    }

    #[test]
    fn test_exact_cover_stops() {
        let chosen = select_vehicle_set(&fleet(&[4.0, 4.0, 4.0]), 8.0, false);
        assert_eq!(chosen.len(), 2);
    }

    #[test]
    fn test_insufficient_fleet_returns_all() {
        let chosen = select_vehicle_set(&fleet(&[3.0, 5.0, 8.0]), 100.0, false);
        assert_eq!(capacities(&chosen), vec![8.0, 5.0, 3.0]);
    }

    #[test]
    fn test_equal_capacities_keep_input_order() {
        let chosen = select_vehicle_set(&fleet(&[5.0, 5.0, 5.0]), 9.0, false);
        let ids: Vec<u64> = chosen.iter().map(VehicleProfile::id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_empty_fleet() {
        assert!(select_vehicle_set(&[], 5.0, false).is_empty());
    }
}
