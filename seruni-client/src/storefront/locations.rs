// seruni-client/src/storefront/locations.rs
// Distance ordering for the location list

use shared::models::Location;

/// Mean earth radius in km
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two `(lat, lng)` points, in km
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// `(200m from you)` under 1 km, `(1.2km from you)` otherwise
pub fn distance_label(km: f64) -> String {
    if km < 1.0 {
        format!("({}m from you)", (km * 1000.0).round() as i64)
    } else {
        format!("({km:.1}km from you)")
    }
}

/// Location paired with its distance from the visitor
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyLocation {
    pub location: Location,
    /// `None` when the location has no coordinates
    pub distance_km: Option<f64>,
}

impl NearbyLocation {
    pub fn label(&self) -> Option<String> {
        self.distance_km.map(distance_label)
    }

    /// Picker entry with the distance appended when known
    pub fn picker_entry(&self) -> String {
        let label = self.location.picker_label();
        match self.label() {
            Some(distance) => format!("{label} {distance}"),
            None => label,
        }
    }
}

/// Order locations nearest first; locations without coordinates go last
pub fn sort_by_distance(locations: Vec<Location>, origin: (f64, f64)) -> Vec<NearbyLocation> {
    let mut nearby: Vec<NearbyLocation> = locations
        .into_iter()
        .map(|location| {
            let distance_km = location.coordinates().map(|to| haversine_km(origin, to));
            NearbyLocation {
                location,
                distance_km,
            }
        })
        .collect();

    nearby.sort_by(|a, b| {
        let a = a.distance_km.unwrap_or(f64::INFINITY);
        let b = b.distance_km.unwrap_or(f64::INFINITY);
        a.total_cmp(&b)
    });
    nearby
}
