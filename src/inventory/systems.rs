//! Inventory systems - translate protocol outcomes into world commands.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::core::{InventoryChanged, InventoryNoOp, ItemDropped, ItemPickedUp, SlotView};
use crate::input::InputSnapshot;
use crate::interaction::InteractionTarget;
use crate::player::{HoldAnchor, LocallyControlled, Player, PlayerCamera};

/// Handle the interact key: pick up whatever the scanner reports.
///
/// With a full inventory the selected occupant is dropped first, then
/// the new item takes its slot - eviction is the defined path, not a
/// failure.
pub fn handle_pickup(
    snapshot: Res<InputSnapshot>,
    target: Res<InteractionTarget>,
    mut commands: Commands,
    mut player_query: Query<&mut Inventory, (With<Player>, With<LocallyControlled>)>,
    anchor_query: Query<Entity, With<HoldAnchor>>,
    camera_query: Query<&GlobalTransform, With<PlayerCamera>>,
    icon_query: Query<&ItemIcon>,
    config: Res<InventoryConfig>,
    mut changed: EventWriter<InventoryChanged>,
    mut picked_up: EventWriter<ItemPickedUp>,
    mut dropped: EventWriter<ItemDropped>,
    mut noop: EventWriter<InventoryNoOp>,
) {
    if !snapshot.interact_pressed {
        return;
    }
    let Ok(mut inventory) = player_query.get_single_mut() else {
        return;
    };

    let Some(item) = target.entity else {
        noop.send(InventoryNoOp::NoTarget);
        return;
    };

    // Missing rig references degrade to a no-op tick, never a panic
    let Ok(anchor) = anchor_query.get_single() else {
        warn!("No hold anchor in the scene; cannot equip items");
        return;
    };
    let Ok(camera_transform) = camera_query.get_single() else {
        warn!("No player camera; cannot equip items");
        return;
    };

    let outcome = inventory.pickup(item);
    if let PickupOutcome::Evicted {
        slot,
        dropped: evicted,
    } = outcome
    {
        release_item(&mut commands, evicted, camera_transform, &config);
        dropped.send(ItemDropped {
            item: evicted,
            slot,
        });
        info!("Replaced the item in slot {} with {:?}", slot + 1, item);
    }

    let slot = outcome.slot();
    let active = inventory.active_item() == Some(item);
    attach_item(&mut commands, item, anchor, active);
    picked_up.send(ItemPickedUp { item, slot });
    info!("Equipped {:?} in slot {}", item, slot + 1);

    changed.send(slot_views(&inventory, &icon_query));
}

/// Handle slot selection: digit keys for absolute, scroll for relative.
///
/// Any cursor move re-runs activation sync so exactly one occupied
/// slot's item is visible.
pub fn handle_selection(
    snapshot: Res<InputSnapshot>,
    mut commands: Commands,
    mut player_query: Query<&mut Inventory, (With<Player>, With<LocallyControlled>)>,
    icon_query: Query<&ItemIcon>,
    mut changed: EventWriter<InventoryChanged>,
) {
    let Ok(mut inventory) = player_query.get_single_mut() else {
        return;
    };

    let moved = inventory.apply_selection(snapshot.select_slot, snapshot.scroll_step());

    if moved {
        sync_activation(&mut commands, &inventory);
        changed.send(slot_views(&inventory, &icon_query));
    }
}

/// Handle the drop key: release the selected slot's occupant back into
/// the world. Dropping from an empty slot is reported, never fatal.
pub fn handle_drop(
    snapshot: Res<InputSnapshot>,
    mut commands: Commands,
    mut player_query: Query<&mut Inventory, (With<Player>, With<LocallyControlled>)>,
    camera_query: Query<&GlobalTransform, With<PlayerCamera>>,
    icon_query: Query<&ItemIcon>,
    config: Res<InventoryConfig>,
    mut changed: EventWriter<InventoryChanged>,
    mut dropped: EventWriter<ItemDropped>,
    mut noop: EventWriter<InventoryNoOp>,
) {
    if !snapshot.drop_pressed {
        return;
    }
    let Ok(mut inventory) = player_query.get_single_mut() else {
        return;
    };
    let Ok(camera_transform) = camera_query.get_single() else {
        warn!("No player camera; cannot drop items");
        return;
    };

    let slot = inventory.selected();
    match inventory.take_selected() {
        Some(item) => {
            release_item(&mut commands, item, camera_transform, &config);
            dropped.send(ItemDropped { item, slot });
            info!("Dropped {:?} from slot {}", item, slot + 1);
            changed.send(slot_views(&inventory, &icon_query));
        }
        None => {
            noop.send(InventoryNoOp::DropOnEmptySlot);
        }
    }
}

/// Equip commands: reparent under the hold anchor at identity, freeze
/// physics, and show the item only if its slot is the selected one.
fn attach_item(commands: &mut Commands, item: Entity, anchor: Entity, active: bool) {
    commands
        .entity(item)
        .set_parent(anchor)
        .insert(Transform::default())
        .insert(RigidBodyDisabled)
        .insert(ColliderDisabled)
        .insert(if active {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
}

/// Drop commands: detach, rewake physics, reposition a fixed distance
/// in front of the camera, and push along the look vector.
fn release_item(
    commands: &mut Commands,
    item: Entity,
    camera_transform: &GlobalTransform,
    config: &InventoryConfig,
) {
    let forward = camera_transform.forward();
    let position = camera_transform.translation() + *forward * config.drop_distance;

    commands
        .entity(item)
        .remove_parent()
        .remove::<RigidBodyDisabled>()
        .remove::<ColliderDisabled>()
        .insert(Visibility::Inherited)
        .insert(Transform::from_translation(position))
        .insert(ExternalImpulse {
            impulse: *forward * config.drop_impulse,
            torque_impulse: Vec3::ZERO,
        });
}

/// Make exactly the selected slot's occupant visible; every other held
/// item stays attached but hidden.
fn sync_activation(commands: &mut Commands, inventory: &Inventory) {
    for (index, occupant) in inventory.slots().iter().enumerate() {
        if let Some(item) = occupant {
            commands.entity(*item).insert(if index == inventory.selected() {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            });
        }
    }
}

/// Snapshot the slot array for the UI.
fn slot_views(inventory: &Inventory, icon_query: &Query<&ItemIcon>) -> InventoryChanged {
    let slots = inventory
        .slots()
        .iter()
        .map(|occupant| SlotView {
            icon: occupant.map(|item| {
                icon_query
                    .get(item)
                    .map(|icon| icon.0.clone())
                    .unwrap_or_else(|_| "item".to_string())
            }),
        })
        .collect();
    InventoryChanged {
        slots,
        selected: inventory.selected(),
    }
}
