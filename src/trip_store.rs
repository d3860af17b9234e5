use crate::models::{TimeFilter, TripRecord};

/// The full trip log, loaded once and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct TripStore {
    trips: Vec<TripRecord>,
}

impl TripStore {
    #[must_use]
    pub fn new(trips: Vec<TripRecord>) -> Self {
        Self { trips }
    }

    #[must_use]
    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Trips that fall inside the given time filter, in load order
    pub fn filtered(&self, filter: TimeFilter) -> impl Iterator<Item = &TripRecord> {
        self.trips.iter().filter(move |trip| filter.matches(trip))
    }
}

impl FromIterator<TripRecord> for TripStore {
    fn from_iter<I: IntoIterator<Item = TripRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
