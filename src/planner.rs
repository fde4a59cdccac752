//! Planner Helpers
//!
//! Grid lookups, week labels and drag-move feedback for the planner page.

use chrono::{Days, NaiveDate};

use crate::error::ApiError;
use crate::models::{Cell, Day, MenuEntry};
use crate::notify::NotificationKind;

const MOVE_FAILED: &str = "Could not move the menu";

/// Menu occupying `cell`, if any
pub fn occupant_at(entries: &[MenuEntry], cell: Cell) -> Option<&MenuEntry> {
    entries.iter().find(|e| e.cell() == cell)
}

/// Outcome of a drag move as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveFeedback {
    pub kind: NotificationKind,
    pub message: String,
    /// Reload the grid after the configured delay
    pub reload: bool,
}

pub fn move_feedback(result: &Result<(), ApiError>) -> MoveFeedback {
    match result {
        Ok(()) => MoveFeedback {
            kind: NotificationKind::Success,
            message: "Menu moved".to_string(),
            reload: true,
        },
        Err(e) => MoveFeedback {
            kind: NotificationKind::Error,
            message: e.user_message(MOVE_FAILED),
            reload: false,
        },
    }
}

fn parse_week(week_start: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(week_start, "%Y-%m-%d").ok()
}

/// Column header, e.g. "Tuesday 13/10"
pub fn day_header(week_start: &str, day: Day) -> String {
    match parse_week(week_start).and_then(|monday| monday.checked_add_days(Days::new(day.offset().into()))) {
        Some(date) => format!("{} {}", day.label(), date.format("%d/%m")),
        None => day.label().to_string(),
    }
}

/// Week caption, e.g. "Week of 12 Oct 2026"
pub fn week_caption(week_start: &str) -> String {
    match parse_week(week_start) {
        Some(monday) => format!("Week of {}", monday.format("%-d %b %Y")),
        None => "This week".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slot;

    fn entry(id: u32, day: Day, slot: Slot) -> MenuEntry {
        MenuEntry {
            id,
            day,
            slot,
            recipe_id: None,
            recipe_name: None,
            description: Some("Soup".to_string()),
        }
    }

    #[test]
    fn test_occupant_at() {
        let entries = vec![entry(12, Day::Mon, Slot::Lunch), entry(13, Day::Tue, Slot::Dinner)];
        let cell = Cell { day: Day::Tue, slot: Slot::Dinner };
        assert_eq!(occupant_at(&entries, cell).map(|e| e.id), Some(13));
        assert!(occupant_at(&entries, Cell { day: Day::Fri, slot: Slot::Lunch }).is_none());
    }

    #[test]
    fn test_move_feedback() {
        let ok = move_feedback(&Ok(()));
        assert_eq!(ok.kind, NotificationKind::Success);
        assert!(ok.reload);

        let rejected = move_feedback(&Err(ApiError::Rejected(Some("Cell already taken".into()))));
        assert_eq!(rejected.kind, NotificationKind::Error);
        assert_eq!(rejected.message, "Cell already taken");
        assert!(!rejected.reload);

        let offline = move_feedback(&Err(ApiError::Transport("Failed to fetch".into())));
        assert_eq!(offline.message, MOVE_FAILED);
        assert!(!offline.reload);
    }

    #[test]
    fn test_day_header() {
        assert_eq!(day_header("2026-10-12", Day::Mon), "Monday 12/10");
        assert_eq!(day_header("2026-10-12", Day::Fri), "Friday 16/10");
        assert_eq!(day_header("", Day::Wed), "Wednesday");
    }

    #[test]
    fn test_week_caption() {
        assert_eq!(week_caption("2026-10-12"), "Week of 12 Oct 2026");
        assert_eq!(week_caption("garbage"), "This week");
    }
}
