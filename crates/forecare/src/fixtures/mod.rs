//! Static fixture datasets standing in for a real backend.
//!
//! Every collection here is authored by hand and built fresh on each call;
//! nothing in the crate mutates, creates, or destroys entries. Lookups
//! return `Option`: referential integrity between collections (devices
//! name residents, reports reference resident ids) is not guaranteed, and
//! callers are expected to supply a fallback.

mod alerts;
mod devices;
mod reports;
mod residents;
mod trends;

pub use alerts::alerts;
pub use devices::devices;
pub use reports::reports;
pub use residents::residents;
pub use trends::{
    default_trends, facility_trends, interventions, resident_trends, FacilityTrends,
    ResidentTrends,
};

use crate::model::{Resident, ResidentId};

/// Look up a resident by id.
#[must_use]
pub fn resident_by_id(id: &ResidentId) -> Option<Resident> {
    residents().into_iter().find(|r| &r.id == id)
}

/// Look up a resident by display name, case-insensitively.
///
/// Devices reference residents by name rather than id, so this is the
/// join used when following that edge.
#[must_use]
pub fn resident_by_name(name: &str) -> Option<Resident> {
    residents()
        .into_iter()
        .find(|r| r.name.eq_ignore_ascii_case(name))
}

/// The documented fallback resident.
///
/// Detail views entered with an id that matches no fixture entry render
/// this record instead of erroring or going blank. It is always the first
/// resident in the roster.
///
/// # Panics
///
/// Panics if the fixture roster is empty, which would be a bug in the
/// fixture data itself.
#[must_use]
pub fn default_resident() -> Resident {
    residents()
        .into_iter()
        .next()
        .expect("fixture roster is never empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resident_by_id_found() {
        let resident = resident_by_id(&ResidentId::new("4")).unwrap();
        assert_eq!(resident.name, "Klaus Bauer");
    }

    #[test]
    fn test_resident_by_id_missing() {
        assert!(resident_by_id(&ResidentId::new("999")).is_none());
    }

    #[test]
    fn test_resident_by_name_case_insensitive() {
        let resident = resident_by_name("maria schmidt").unwrap();
        assert_eq!(resident.id, ResidentId::new("1"));
    }

    #[test]
    fn test_resident_by_name_missing() {
        assert!(resident_by_name("Nobody Home").is_none());
    }

    #[test]
    fn test_default_resident_is_first_in_roster() {
        let fallback = default_resident();
        assert_eq!(fallback.id, residents()[0].id);
    }

    #[test]
    fn test_resident_ids_are_unique() {
        let all = residents();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate resident id {}", a.id);
            }
        }
    }

    #[test]
    fn test_collections_are_rebuilt_not_shared() {
        // Two calls must yield equal but independent collections.
        let first = residents();
        let second = residents();
        assert_eq!(first, second);
    }
}
