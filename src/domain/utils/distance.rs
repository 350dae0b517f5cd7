use crate::domain::model::coordinates::Coordinates;
use crate::domain::model::disaster::Disaster;

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers (haversine formula).
///
/// Non-finite inputs propagate into a non-finite result.
pub fn haversine_distance(a: &Coordinates, b: &Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Returns up to `top_n` disasters ordered by distance to `origin`.
///
/// Disasters without coordinates cannot be ranked and are left out. Equidistant
/// disasters keep their input order.
pub fn nearest_disasters(origin: &Coordinates, disasters: &[Disaster], top_n: usize) -> Vec<Disaster> {
    let mut ranked: Vec<(f64, &Disaster)> = disasters
        .iter()
        .filter_map(|disaster| disaster.disaster_coordinates.map(|coords| (haversine_distance(origin, &coords), disaster)))
        .collect();

    ranked.sort_by(|(d1, _), (d2, _)| d1.total_cmp(d2));
    ranked.into_iter().take(top_n).map(|(_, disaster)| disaster.clone()).collect()
}
