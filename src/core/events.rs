//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. The inventory systems
//! send InventoryChanged events, and the HUD receives them to refresh
//! slot icons and highlights. This keeps systems independent and testable.

use bevy::prelude::*;

/// What a single inventory slot looks like from the outside.
///
/// The UI only needs an icon label per slot - it never reaches into the
/// item entity itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    /// Icon label of the occupant, or None for an empty slot.
    pub icon: Option<String>,
}

/// Sent whenever slot occupancy or the selection cursor changes.
///
/// Carries the full slot array so the HUD can redraw without querying
/// inventory internals.
#[derive(Event, Debug, Clone)]
pub struct InventoryChanged {
    /// One view per slot, in slot order.
    pub slots: Vec<SlotView>,
    /// Currently selected slot index.
    pub selected: usize,
}

/// Sent when the player picks up an item.
#[derive(Event)]
pub struct ItemPickedUp {
    /// The item entity that was equipped
    pub item: Entity,
    /// Slot it landed in
    pub slot: usize,
}

/// Sent when an item leaves the inventory and returns to the world.
#[derive(Event)]
pub struct ItemDropped {
    /// The item entity that was dropped
    pub item: Entity,
    /// Slot it was dropped from
    pub slot: usize,
}

/// Diagnostic event for actions that degraded to a no-op this tick.
///
/// None of these are fatal; the host can surface them (UI flash, log)
/// or ignore them.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryNoOp {
    /// Interact pressed with nothing under the crosshair.
    NoTarget,
    /// Drop pressed on an already-empty slot.
    DropOnEmptySlot,
}
