//! In-game HUD - crosshair, inventory slot bar, and interaction prompt.
//!
//! The HUD is a pure consumer: slot widgets refresh only when an
//! InventoryChanged event arrives, and the pickup prompt mirrors the
//! scanner's target for the current tick. Nothing here reaches into
//! inventory internals.

use bevy::prelude::*;

use crate::core::{GameState, InventoryChanged};
use crate::interaction::InteractionTarget;
use crate::inventory::InventoryConfig;

/// Marker for HUD root entities.
#[derive(Component)]
pub struct HudRoot;

/// Marker for a slot widget's frame, tagged with its slot index.
#[derive(Component)]
pub struct SlotWidget(pub usize);

/// Marker for a slot widget's icon label.
#[derive(Component)]
pub struct SlotLabel(pub usize);

/// Marker for the "Press E to pick up" prompt.
#[derive(Component)]
pub struct InteractPrompt;

const SELECTED_COLOR: Color = Color::srgb(0.9, 0.8, 0.2);
const UNSELECTED_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
const EMPTY_SLOT_LABEL: &str = "-";

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (update_slot_bar, update_interact_prompt).run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands, config: Res<InventoryConfig>) {
    // Crosshair (center of screen)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Px(4.0),
                    height: Val::Px(4.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.5)),
            ));
        });

    // Interaction prompt (just below center)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(60.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::End,
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Press E to pick up"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Visibility::Hidden,
                InteractPrompt,
            ));
        });

    // Slot bar (bottom-center row)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::End,
                padding: UiRect::bottom(Val::Px(20.0)),
                column_gap: Val::Px(8.0),
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            for index in 0..config.slot_count {
                spawn_slot_widget(parent, index);
            }
        });
}

/// Helper to spawn one slot widget.
fn spawn_slot_widget(parent: &mut ChildBuilder, index: usize) {
    parent
        .spawn((
            Node {
                width: Val::Px(56.0),
                height: Val::Px(56.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.7)),
            BorderColor(if index == 0 {
                SELECTED_COLOR
            } else {
                UNSELECTED_COLOR
            }),
            SlotWidget(index),
        ))
        .with_children(|slot| {
            slot.spawn((
                Text::new(EMPTY_SLOT_LABEL),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(UNSELECTED_COLOR),
                SlotLabel(index),
            ));
        });
}

/// Refresh slot frames and labels from inventory change events.
fn update_slot_bar(
    mut events: EventReader<InventoryChanged>,
    mut frame_query: Query<(&SlotWidget, &mut BorderColor)>,
    mut label_query: Query<(&SlotLabel, &mut Text, &mut TextColor)>,
) {
    // Only the latest state matters if several changes landed this tick
    let Some(change) = events.read().last() else {
        return;
    };

    for (widget, mut border) in frame_query.iter_mut() {
        border.0 = if widget.0 == change.selected {
            SELECTED_COLOR
        } else {
            UNSELECTED_COLOR
        };
    }

    for (label, mut text, mut color) in label_query.iter_mut() {
        let Some(view) = change.slots.get(label.0) else {
            continue;
        };
        match &view.icon {
            Some(icon) => {
                text.0 = icon.clone();
                color.0 = if label.0 == change.selected {
                    SELECTED_COLOR
                } else {
                    UNSELECTED_COLOR
                };
            }
            None => {
                text.0 = EMPTY_SLOT_LABEL.to_string();
                color.0 = UNSELECTED_COLOR;
            }
        }
    }
}

/// Show the pickup prompt exactly while the crosshair is on a target.
fn update_interact_prompt(
    target: Res<InteractionTarget>,
    mut prompt_query: Query<&mut Visibility, With<InteractPrompt>>,
) {
    let Ok(mut visibility) = prompt_query.get_single_mut() else {
        return;
    };
    *visibility = if target.entity.is_some() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
}

/// Clean up HUD entities.
pub fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
