/// Index of caller supplied event markers keyed by ISO date
use crate::date_utils::{format_date, parse_iso_date};
use crate::models::EventMarker;
use chrono::NaiveDate;
use log::warn;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    by_date: HashMap<String, Vec<EventMarker>>,
}

impl EventIndex {
    pub fn from_markers(markers: &[EventMarker]) -> Self {
        let mut index = Self::default();
        index.rebuild(markers);
        index
    }

    /// Replace the whole index. Markers whose date is not a valid ISO date
    /// are dropped with a warning.
    pub fn rebuild(&mut self, markers: &[EventMarker]) {
        let mut by_date: HashMap<String, Vec<EventMarker>> = HashMap::new();
        for marker in markers {
            match parse_iso_date(&marker.date) {
                Ok(date) => by_date
                    .entry(format_date(date))
                    .or_default()
                    .push(marker.clone()),
                Err(e) => warn!("Ignoring event marker: {}", e),
            }
        }
        self.by_date = by_date;
    }

    pub fn events_for(&self, date: NaiveDate) -> &[EventMarker] {
        self.by_date
            .get(&format_date(date))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_markers_by_day() {
        let markers = vec![
            EventMarker::new("2024-01-15").tooltip("standup"),
            EventMarker::new("2024-01-15").tooltip("review"),
            EventMarker::new("2024-01-20"),
        ];
        let index = EventIndex::from_markers(&markers);
        let day = parse_iso_date("2024-01-15").unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.events_for(day).len(), 2);
        assert_eq!(index.events_for(day)[1].tooltip.as_deref(), Some("review"));
        assert!(index
            .events_for(parse_iso_date("2024-01-16").unwrap())
            .is_empty());
    }

    #[test]
    fn test_rebuild_replaces_previous_markers() {
        let mut index = EventIndex::from_markers(&[EventMarker::new("2024-01-15")]);
        index.rebuild(&[EventMarker::new("2024-02-01"), EventMarker::new("not a date")]);
        assert_eq!(index.len(), 1);
        assert!(index
            .events_for(parse_iso_date("2024-01-15").unwrap())
            .is_empty());
    }
}
