//! Menu planner routes

use std::collections::HashMap;

use serde::Serialize;

use super::{get_json, request, send, Method};
use crate::error::ApiError;
use crate::models::{BalanceAnalysis, BalanceReport, Cell, Day, Slot, WeekMenus};

/// Create or replace the menu of one cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveMenuArgs {
    pub day: Day,
    pub slot: Slot,
    /// Monday of the week, `YYYY-MM-DD`
    pub week: String,
    pub description: Option<String>,
    pub recipe_id: Option<u32>,
}

/// Body of the move route: the destination cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoveMenuArgs {
    pub day: Day,
    pub slot: Slot,
}

impl From<Cell> for MoveMenuArgs {
    fn from(cell: Cell) -> Self {
        Self { day: cell.day, slot: cell.slot }
    }
}

#[derive(Serialize)]
struct BalanceArgs<'a> {
    menu_ids: &'a [u32],
}

pub fn move_path(menu_id: u32) -> String {
    format!("/menu/{}/move", menu_id)
}

/// `week_offset` counts weeks from the current one
pub async fn list_week(week_offset: i32) -> Result<WeekMenus, ApiError> {
    get_json(&format!("/menus?week={}", week_offset)).await
}

pub async fn save_menu(args: &SaveMenuArgs) -> Result<(), ApiError> {
    send(Method::Post, "/menu", Some(args)).await
}

pub async fn delete_menu(id: u32) -> Result<(), ApiError> {
    send::<()>(Method::Delete, &format!("/menu/{}", id), None).await
}

pub async fn move_menu(menu_id: u32, to: Cell) -> Result<(), ApiError> {
    send(Method::Put, &move_path(menu_id), Some(&MoveMenuArgs::from(to))).await
}

/// Balance analysis of each menu, keyed by menu id
pub async fn load_balance(menu_ids: &[u32]) -> Result<HashMap<u32, BalanceAnalysis>, ApiError> {
    let report: BalanceReport = request(Method::Post, "/menus/balance", Some(&BalanceArgs { menu_ids })).await?;
    if !report.success {
        return Err(ApiError::Rejected(report.message));
    }
    Ok(report
        .analyses
        .into_iter()
        .filter_map(|(id, analysis)| id.parse().ok().map(|id| (id, analysis)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_move_request_shape() {
        let to = Cell { day: Day::Tue, slot: Slot::Dinner };
        assert_eq!(move_path(12), "/menu/12/move");
        assert_eq!(
            serde_json::to_value(MoveMenuArgs::from(to)).unwrap(),
            json!({"day": "Tue", "slot": "dinner"})
        );
    }

    #[test]
    fn test_save_menu_body() {
        let args = SaveMenuArgs {
            day: Day::Mon,
            slot: Slot::Lunch,
            week: "2026-10-12".into(),
            description: None,
            recipe_id: Some(3),
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({"day": "Mon", "slot": "lunch", "week": "2026-10-12", "description": null, "recipe_id": 3})
        );
    }
}
