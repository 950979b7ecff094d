//! Record lookup within a fetched snapshot.
//!
//! The read policy projects a snapshot to one value in two steps: locate
//! the record for a key, then run the caller's mapping over its raw
//! value. Absence at either step is a normal outcome, distinct from a
//! fetch failure.

use crate::state::types::{FeatureKey, FeatureStateRecord};

/// First record in the snapshot matching the key, if any.
pub fn find_record<'a>(
    records: &'a [FeatureStateRecord],
    key: &FeatureKey,
) -> Option<&'a FeatureStateRecord> {
    records.iter().find(|record| record.matches(key))
}
