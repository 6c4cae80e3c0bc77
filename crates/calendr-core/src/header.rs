/// Header view model for one pane: month/year selector labels and prev/next controls.
/// It carries no selection state, only turns control activations into intents.
use crate::locale::Locale;
use crate::models::{Constraints, MonthYear, PickerKind, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderIntent {
    Navigate { direction: i32, side: Side },
    OpenPicker { kind: PickerKind, pane_index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub pane_index: usize,
    pub side: Side,
    pub pane: MonthYear,
    pub month_label: &'static str,
    pub year_label: String,
    pub prev_label: &'static str,
    pub next_label: &'static str,
    pub show_prev: bool,
    pub show_next: bool,
    /// the previous month lies entirely before `min_date`
    pub prev_disabled: bool,
    /// the next month lies entirely after `max_date`
    pub next_disabled: bool,
}

impl HeaderView {
    pub fn new(
        pane: MonthYear,
        pane_index: usize,
        side: Side,
        locale: &Locale,
        constraints: &Constraints,
    ) -> Self {
        // In dual mode the outer edges carry the controls
        let (show_prev, show_next) = match side {
            Side::Single => (true, true),
            Side::Left => (true, false),
            Side::Right => (false, true),
        };
        let prev_disabled = match (constraints.min_date, pane.first_day()) {
            (Some(min), Some(first)) => min >= first,
            _ => false,
        };
        let next_disabled = match (constraints.max_date, pane.add_months(1).first_day()) {
            (Some(max), Some(next_first)) => max < next_first,
            _ => false,
        };
        Self {
            pane_index,
            side,
            pane,
            month_label: locale.month_name(pane.month),
            year_label: pane.year.to_string(),
            prev_label: locale.prev_month,
            next_label: locale.next_month,
            show_prev,
            show_next,
            prev_disabled,
            next_disabled,
        }
    }

    pub fn prev(&self) -> Option<HeaderIntent> {
        (self.show_prev && !self.prev_disabled).then_some(HeaderIntent::Navigate {
            direction: -1,
            side: self.side,
        })
    }

    pub fn next(&self) -> Option<HeaderIntent> {
        (self.show_next && !self.next_disabled).then_some(HeaderIntent::Navigate {
            direction: 1,
            side: self.side,
        })
    }

    pub fn open_month_picker(&self) -> HeaderIntent {
        HeaderIntent::OpenPicker {
            kind: PickerKind::Month,
            pane_index: self.pane_index,
        }
    }

    pub fn open_year_picker(&self) -> HeaderIntent {
        HeaderIntent::OpenPicker {
            kind: PickerKind::Year,
            pane_index: self.pane_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_utils::parse_iso_date;
    use crate::locale::lookup;

    #[test]
    fn test_dual_panes_split_controls() {
        let constraints = Constraints::default();
        let left = HeaderView::new(MonthYear::new(0, 2024), 0, Side::Left, lookup("en"), &constraints);
        let right = HeaderView::new(MonthYear::new(1, 2024), 1, Side::Right, lookup("en"), &constraints);
        assert_eq!(
            left.prev(),
            Some(HeaderIntent::Navigate {
                direction: -1,
                side: Side::Left
            })
        );
        assert_eq!(left.next(), None);
        assert_eq!(right.prev(), None);
        assert_eq!(
            right.next(),
            Some(HeaderIntent::Navigate {
                direction: 1,
                side: Side::Right
            })
        );
        assert_eq!(right.month_label, "February");
        assert_eq!(
            right.open_year_picker(),
            HeaderIntent::OpenPicker {
                kind: PickerKind::Year,
                pane_index: 1
            }
        );
    }

    #[test]
    fn test_bounds_disable_navigation() {
        let constraints = Constraints {
            min_date: Some(parse_iso_date("2024-03-01").unwrap()),
            max_date: Some(parse_iso_date("2024-03-31").unwrap()),
            ..Default::default()
        };
        let header = HeaderView::new(MonthYear::new(2, 2024), 0, Side::Single, lookup("de"), &constraints);
        assert!(header.prev_disabled);
        assert!(header.next_disabled);
        assert_eq!(header.prev(), None);
        assert_eq!(header.next(), None);
        assert_eq!(header.month_label, "März");
    }
}
