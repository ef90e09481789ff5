//! Drag-reorder engine.
//!
//! Each category section runs a two-state machine: `Idle`, or `Dragging` a
//! card by id. Dropping onto a different card of the same section splices the
//! dragged card out and back in at the target's index, then reports the new
//! section order as a [`ReorderEvent`]. Moving a card between categories is
//! a separate editor operation, never a drag.

use std::collections::HashMap;

use crate::service::Service;

/// Drag state of one category section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(String),
}

/// A successful reorder of one category's visible cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderEvent {
    pub category: String,
    pub services: Vec<Service>,
}

/// Move `source_id` to the index `target_id` occupies in `list`.
///
/// The source is removed first and then inserted at the target's original
/// index, so dragging forward lands the card just after the target and
/// dragging backward lands it just before. Returns `None` (order unchanged)
/// when the ids are equal or either is absent.
pub fn reorder(list: &[Service], source_id: &str, target_id: &str) -> Option<Vec<Service>> {
    if source_id == target_id {
        return None;
    }
    let source = list.iter().position(|s| s.id == source_id)?;
    let target = list.iter().position(|s| s.id == target_id)?;
    let mut reordered = list.to_vec();
    let moved = reordered.remove(source);
    reordered.insert(target, moved);
    Some(reordered)
}

/// Write a section's new order back into the global service list.
///
/// The slots currently held by the reordered services are refilled in the
/// new order; every other slot, including other categories and cards hidden
/// by a search, keeps its record. Records are taken from `all`, not from
/// `ordered`, so only positions change.
pub fn apply_order(all: &mut [Service], ordered: &[Service]) {
    let mut by_id: HashMap<&str, usize> = HashMap::new();
    for (i, svc) in all.iter().enumerate() {
        by_id.insert(svc.id.as_str(), i);
    }
    let order: Vec<usize> = ordered
        .iter()
        .filter_map(|svc| by_id.get(svc.id.as_str()).copied())
        .collect();
    let mut slots = order.clone();
    slots.sort_unstable();
    let records: Vec<Service> = order.iter().map(|&i| all[i].clone()).collect();
    for (slot, record) in slots.into_iter().zip(records) {
        all[slot] = record;
    }
}

/// Per-section drag state machine.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Id of the card being dragged, if any.
    pub fn dragging(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging(id) => Some(id),
            DragState::Idle => None,
        }
    }

    /// Begin dragging `id`. Only allowed while the layout is being edited;
    /// returns whether the drag started.
    pub fn start(&mut self, id: &str, editing: bool) -> bool {
        if !editing {
            return false;
        }
        self.state = DragState::Dragging(id.to_string());
        true
    }

    /// Drop the dragged card onto `target_id` within `category`'s `visible`
    /// list. Always returns to `Idle`; yields an event only when the order
    /// actually changed.
    pub fn drop_on(
        &mut self,
        category: &str,
        target_id: &str,
        visible: &[Service],
    ) -> Option<ReorderEvent> {
        let DragState::Dragging(source) = std::mem::take(&mut self.state) else {
            return None;
        };
        let services = reorder(visible, &source, target_id)?;
        Some(ReorderEvent {
            category: category.to_string(),
            services,
        })
    }

    /// Drag ended without a drop.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }
}
