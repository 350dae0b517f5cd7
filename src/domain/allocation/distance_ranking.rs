use std::cmp::Ordering;

use crate::domain::model::coordinates::Coordinates;
use crate::domain::model::resource::Resource;
use crate::domain::model::volunteer::Volunteer;
use crate::domain::utils::distance::haversine_distance;

/// Anything that can be ranked by its distance to a disaster.
pub trait Located {
    fn location(&self) -> &Coordinates;

    /// Short label for log lines.
    fn label(&self) -> String;
}

impl Located for Resource {
    fn location(&self) -> &Coordinates {
        &self.location
    }

    fn label(&self) -> String {
        format!("{} from donor {}", self.resource_type, self.donor_id)
    }
}

impl Located for Volunteer {
    fn location(&self) -> &Coordinates {
        &self.location
    }

    fn label(&self) -> String {
        format!("volunteer {}", self.id)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Ranked<'c, T> {
    pub candidate: &'c T,
    pub distance_km: f64,
}

/// Orders candidates by great-circle distance to a fixed origin.
pub struct DistanceRanking {
    origin: Coordinates,
}

impl DistanceRanking {
    pub fn new(origin: Coordinates) -> Self {
        Self { origin }
    }

    pub fn distance_to(&self, location: &Coordinates) -> f64 {
        haversine_distance(&self.origin, location)
    }

    /// Returns `Ordering::Less` if `a` is closer to the origin than `b`.
    ///
    /// Equal distances compare `Equal`, so a stable sort keeps the fetch order.
    pub fn compare<T>(&self, a: &Ranked<'_, T>, b: &Ranked<'_, T>) -> Ordering {
        a.distance_km.total_cmp(&b.distance_km)
    }

    /// Ranks candidates nearest first. Candidates with a malformed location are
    /// logged and left out.
    pub fn rank<'c, T, I>(&self, candidates: I) -> Vec<Ranked<'c, T>>
    where
        T: Located + 'c,
        I: IntoIterator<Item = &'c T>,
    {
        let mut ranked: Vec<Ranked<'c, T>> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let location = candidate.location();
                if !location.is_valid() {
                    tracing::warn!(
                        latitude = location.latitude,
                        longitude = location.longitude,
                        "Skipping {} with malformed location.",
                        candidate.label()
                    );
                    return None;
                }
                Some(Ranked { candidate, distance_km: self.distance_to(location) })
            })
            .collect();

        ranked.sort_by(|a, b| self.compare(a, b));
        ranked
    }
}
