//! Leptos DragDrop Utilities
//!
//! Drag-and-drop of occupants between the fixed cells of a grid, using the
//! HTML5 drag events (`dragstart`, `dragover`, `dragleave`, `drop`, `dragend`).
//!
//! The gesture logic lives in [`DragController`], a plain state machine that
//! knows nothing about the DOM. [`GridDnd`] keeps one controller in a signal
//! and hands out event handlers for the cells of a grid.

mod controller;

pub use controller::{DragController, DragPhase, DragSession, DropDecision, MoveRequest};

use leptos::prelude::*;
use web_sys::DragEvent;

/// DnD state shared by every cell of one grid
pub struct GridDnd<C: Send + Sync + 'static> {
    pub state: RwSignal<DragController<C>>,
}

impl<C: Send + Sync + 'static> Clone for GridDnd<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Send + Sync + 'static> Copy for GridDnd<C> {}

impl<C> GridDnd<C>
where
    C: Copy + Eq + Send + Sync + 'static,
{
    /// Is `cell` the source of the drag in progress?
    pub fn is_source(&self, cell: C) -> bool {
        self.state.with(|c| c.is_source(cell))
    }

    /// Is `cell` currently marked as a drop candidate?
    pub fn is_over(&self, cell: C) -> bool {
        self.state.with(|c| c.is_over(cell))
    }

    /// Is a move request waiting for the backend?
    pub fn is_committing(&self) -> bool {
        self.state.with(|c| c.is_committing())
    }

    /// Close the committing phase once the move request has resolved,
    /// whatever its outcome.
    pub fn settle(&self) {
        self.state.update(|c| c.settle());
    }
}

pub fn create_grid_dnd<C>() -> GridDnd<C>
where
    C: Copy + Eq + Send + Sync + 'static,
{
    GridDnd {
        state: RwSignal::new(DragController::new()),
    }
}

/// Create dragstart handler for a cell.
/// Cells without an occupant cancel the native drag.
pub fn make_on_dragstart<C>(dnd: GridDnd<C>, cell: C, occupant: Option<u32>) -> impl Fn(DragEvent) + Clone + 'static
where
    C: Copy + Eq + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        let started = dnd.state.try_update(|c| c.drag_start(cell, occupant)).unwrap_or(false);
        if !started {
            ev.prevent_default();
            return;
        }
        // Firefox refuses to start a drag without payload
        if let (Some(dt), Some(id)) = (ev.data_transfer(), occupant) {
            dt.set_effect_allowed("move");
            let _ = dt.set_data("text/plain", &id.to_string());
        }
    }
}

/// Create dragover handler: marks the cell and allows the drop
pub fn make_on_dragover<C>(dnd: GridDnd<C>, cell: C) -> impl Fn(DragEvent) + Clone + 'static
where
    C: Copy + Eq + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        if !dnd.state.with_untracked(|c| c.is_dragging()) {
            return;
        }
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        if !dnd.state.with_untracked(|c| c.is_over(cell)) {
            dnd.state.update(|c| c.drag_over(cell));
        }
    }
}

/// Create dragleave handler: clears the cell marker
pub fn make_on_dragleave<C>(dnd: GridDnd<C>, cell: C) -> impl Fn(DragEvent) + Clone + 'static
where
    C: Copy + Eq + Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        if dnd.state.with_untracked(|c| c.is_over(cell)) {
            dnd.state.update(|c| c.drag_leave(cell));
        }
    }
}

/// Create drop handler. `on_move` only runs when the drop produced a move
/// request, never for drops on the source cell.
pub fn make_on_drop<C, F>(dnd: GridDnd<C>, cell: C, on_move: F) -> impl Fn(DragEvent) + Clone + 'static
where
    C: Copy + Eq + Send + Sync + 'static,
    F: Fn(MoveRequest<C>) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let decision = dnd.state.try_update(|c| c.drop_on(cell));
        if let Some(DropDecision::Move(request)) = decision {
            on_move(request);
        }
    }
}

/// Create dragend handler: always clears markers and the session
pub fn make_on_dragend<C>(dnd: GridDnd<C>) -> impl Fn(DragEvent) + Clone + 'static
where
    C: Copy + Eq + Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        dnd.state.update(|c| c.drag_end());
    }
}
