//! Drag gesture state machine
//!
//! Idle -> Dragging -> (drop on another cell) Committing -> Idle.
//! Dragging falls back to Idle on drag-end or on a drop on the source cell.

/// Live drag gesture: where it started and what is being carried
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession<C> {
    pub source: C,
    pub occupant: u32,
}

/// Move to hand to the backend after a successful drop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest<C> {
    pub occupant: u32,
    pub from: C,
    pub to: C,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase<C> {
    Idle,
    Dragging(DragSession<C>),
    /// Move request in flight, waiting for `settle`
    Committing(MoveRequest<C>),
}

/// Result of a drop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropDecision<C> {
    Move(MoveRequest<C>),
    /// Dropped on the source cell, equivalent to cancelling
    Cancelled,
    /// No drag in progress
    Ignored,
}

#[derive(Clone, Debug)]
pub struct DragController<C> {
    phase: DragPhase<C>,
    over: Vec<C>,
}

impl<C> Default for DragController<C> {
    fn default() -> Self {
        Self {
            phase: DragPhase::Idle,
            over: Vec::new(),
        }
    }
}

impl<C: Copy + Eq> DragController<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase<C> {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    pub fn is_committing(&self) -> bool {
        matches!(self.phase, DragPhase::Committing(_))
    }

    pub fn is_source(&self, cell: C) -> bool {
        matches!(self.phase, DragPhase::Dragging(s) if s.source == cell)
    }

    pub fn is_over(&self, cell: C) -> bool {
        self.over.contains(&cell)
    }

    /// Start a gesture. Returns false (and changes nothing) when the cell is
    /// empty or another gesture or move is still running.
    pub fn drag_start(&mut self, cell: C, occupant: Option<u32>) -> bool {
        let Some(occupant) = occupant else {
            return false;
        };
        if !matches!(self.phase, DragPhase::Idle) {
            return false;
        }
        self.over.clear();
        self.phase = DragPhase::Dragging(DragSession { source: cell, occupant });
        true
    }

    pub fn drag_over(&mut self, cell: C) {
        if self.is_dragging() && !self.over.contains(&cell) {
            self.over.push(cell);
        }
    }

    pub fn drag_leave(&mut self, cell: C) {
        self.over.retain(|c| *c != cell);
    }

    pub fn drop_on(&mut self, cell: C) -> DropDecision<C> {
        self.over.clear();
        let DragPhase::Dragging(session) = self.phase else {
            return DropDecision::Ignored;
        };
        if session.source == cell {
            self.phase = DragPhase::Idle;
            return DropDecision::Cancelled;
        }
        let request = MoveRequest {
            occupant: session.occupant,
            from: session.source,
            to: cell,
        };
        self.phase = DragPhase::Committing(request);
        DropDecision::Move(request)
    }

    /// Drag-end fires after every gesture, dropped or not. A committing move
    /// keeps running; everything else is discarded.
    pub fn drag_end(&mut self) {
        self.over.clear();
        if self.is_dragging() {
            self.phase = DragPhase::Idle;
        }
    }

    pub fn settle(&mut self) {
        self.over.clear();
        if self.is_committing() {
            self.phase = DragPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Cell = (u8, u8);

    const MON_LUNCH: Cell = (0, 0);
    const TUE_DINNER: Cell = (1, 1);
    const WED_LUNCH: Cell = (2, 0);

    #[test]
    fn test_empty_cell_never_starts_a_session() {
        let mut dnd = DragController::<Cell>::new();
        assert!(!dnd.drag_start(MON_LUNCH, None));
        assert_eq!(dnd.phase(), DragPhase::Idle);
        assert_eq!(dnd.drop_on(TUE_DINNER), DropDecision::Ignored);
    }

    #[test]
    fn test_drop_on_other_cell_requests_move() {
        let mut dnd = DragController::new();
        assert!(dnd.drag_start(MON_LUNCH, Some(12)));
        assert!(dnd.is_source(MON_LUNCH));

        dnd.drag_over(TUE_DINNER);
        assert!(dnd.is_over(TUE_DINNER));

        let decision = dnd.drop_on(TUE_DINNER);
        assert_eq!(
            decision,
            DropDecision::Move(MoveRequest { occupant: 12, from: MON_LUNCH, to: TUE_DINNER })
        );
        assert!(dnd.is_committing());
        assert!(!dnd.is_source(MON_LUNCH));
        assert!(!dnd.is_over(TUE_DINNER));

        // A second drop during the same gesture does nothing
        assert_eq!(dnd.drop_on(WED_LUNCH), DropDecision::Ignored);
    }

    #[test]
    fn test_drop_on_source_is_cancellation() {
        let mut dnd = DragController::new();
        dnd.drag_start(MON_LUNCH, Some(3));
        dnd.drag_over(MON_LUNCH);
        assert_eq!(dnd.drop_on(MON_LUNCH), DropDecision::Cancelled);
        assert_eq!(dnd.phase(), DragPhase::Idle);
        assert!(!dnd.is_over(MON_LUNCH));
    }

    #[test]
    fn test_drag_leave_clears_only_that_cell() {
        let mut dnd = DragController::new();
        dnd.drag_start(MON_LUNCH, Some(3));
        dnd.drag_over(TUE_DINNER);
        dnd.drag_over(WED_LUNCH);
        dnd.drag_leave(TUE_DINNER);
        assert!(!dnd.is_over(TUE_DINNER));
        assert!(dnd.is_over(WED_LUNCH));
    }

    #[test]
    fn test_drag_over_ignored_when_idle() {
        let mut dnd = DragController::new();
        dnd.drag_over(TUE_DINNER);
        assert!(!dnd.is_over(TUE_DINNER));
    }

    #[test]
    fn test_drag_end_without_drop_resets_everything() {
        let mut dnd = DragController::new();
        dnd.drag_start(MON_LUNCH, Some(3));
        dnd.drag_over(TUE_DINNER);
        dnd.drag_end();
        assert_eq!(dnd.phase(), DragPhase::Idle);
        assert!(!dnd.is_source(MON_LUNCH));
        assert!(!dnd.is_over(TUE_DINNER));
    }

    #[test]
    fn test_drag_end_keeps_committing_move_until_settled() {
        let mut dnd = DragController::new();
        dnd.drag_start(MON_LUNCH, Some(12));
        dnd.drop_on(TUE_DINNER);
        dnd.drag_end();
        assert!(dnd.is_committing());

        // No new gesture while the move is in flight
        assert!(!dnd.drag_start(WED_LUNCH, Some(4)));

        dnd.settle();
        assert_eq!(dnd.phase(), DragPhase::Idle);
        assert!(dnd.drag_start(WED_LUNCH, Some(4)));
    }

    #[test]
    fn test_settle_clears_markers_after_failed_move() {
        let mut dnd = DragController::new();
        dnd.drag_start(MON_LUNCH, Some(12));
        dnd.drag_over(TUE_DINNER);
        dnd.drop_on(TUE_DINNER);
        dnd.settle();
        assert!(!dnd.is_source(MON_LUNCH));
        assert!(!dnd.is_over(TUE_DINNER));
        assert_eq!(dnd.phase(), DragPhase::Idle);
    }
}
