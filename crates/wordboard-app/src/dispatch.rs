//! Dispatch policies: which subscribers actually receive an event
//!
//! Every event name is bound to one policy. Pointer events go to the
//! topmost collided subscribers, hover events to the topmost of the
//! emitter-computed set, keyboard events to every subscriber.

use std::collections::HashSet;

use tracing::trace;
use wordboard_core::{Action, ComponentId};

use crate::component::UiComponent;
use crate::events::Event;
use crate::store::ComponentStore;

/// Delivery strategies for a dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Hit-test subscribers against the pointer position, deliver only to
    /// those at the highest z-index among the hits.
    Pointer,
    /// Deliver to the highest-z components of the event's own component
    /// set, filtered down to actual subscribers.
    Hover,
    /// Deliver to every subscriber.
    Keyboard,
}

impl DispatchPolicy {
    pub fn dispatch(
        self,
        event: &Event,
        subscribers: &HashSet<ComponentId>,
        store: &mut ComponentStore,
    ) -> Vec<Action> {
        let targets = match self {
            DispatchPolicy::Pointer => {
                let (x, y) = match event {
                    Event::Click { x, y } => (*x, *y),
                    _ => return Vec::new(),
                };
                let collided: Vec<ComponentId> = subscribers
                    .iter()
                    .filter(|id| {
                        store
                            .get(id)
                            .map_or(false, |component| component.contains_point(x, y))
                    })
                    .cloned()
                    .collect();
                highest_level_components(&collided, store)
            }
            DispatchPolicy::Hover => {
                let carried = match event {
                    Event::MouseEnter { components } | Event::MouseLeave { components } => {
                        components
                    }
                    _ => return Vec::new(),
                };
                let candidates: Vec<ComponentId> = carried.iter().cloned().collect();
                highest_level_components(&candidates, store)
                    .into_iter()
                    .filter(|id| subscribers.contains(id))
                    .collect()
            }
            DispatchPolicy::Keyboard => subscribers.iter().cloned().collect(),
        };

        trace!(event = %event.name(), targets = targets.len(), "delivering event");
        deliver(event, &targets, store)
    }
}

/// The subset of `candidates` sitting at the maximum z-index.
///
/// Invisible components and ids with no z-index entry never win and never
/// participate in the maximum.
pub fn highest_level_components(
    candidates: &[ComponentId],
    store: &ComponentStore,
) -> Vec<ComponentId> {
    let mut max_z: Option<u8> = None;
    let mut winners: Vec<ComponentId> = Vec::new();

    for id in candidates {
        let Some(component) = store.get(id) else {
            continue;
        };
        if !component.is_visible() {
            continue;
        }
        let Some(z) = store.z_index(id) else {
            continue;
        };
        match max_z {
            Some(current) if z < current => {}
            Some(current) if z == current => winners.push(id.clone()),
            _ => {
                max_z = Some(z);
                winners.clear();
                winners.push(id.clone());
            }
        }
    }

    winners
}

fn deliver(event: &Event, targets: &[ComponentId], store: &mut ComponentStore) -> Vec<Action> {
    let mut actions = Vec::new();
    for id in targets {
        if let Some(component) = store.get_mut(id) {
            if let Some(action) = component.event_fired(event) {
                actions.push(action);
            }
        }
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrow::ArrowComponent;
    use crate::component::{Bounds, Layer};
    use crate::store::Component;
    use crate::tile::TileComponent;
    use wordboard_core::Cell;

    fn store_with_tile_and_arrow() -> (ComponentStore, ComponentId, ComponentId) {
        let mut store = ComponentStore::new();
        // tile and arrow overlap at (1, 1); arrow is on a higher layer
        let tile = store.register_ui_component(
            Component::Tile(TileComponent::new(&Cell::new(0, 0), Bounds::new(0, 0, 4, 2))),
            Layer::Tiles,
        );
        let arrow = store.register_ui_component(
            Component::Arrow(ArrowComponent::new(Bounds::new(0, 0, 4, 2), 0.0)),
            Layer::Overlay,
        );
        (store, tile, arrow)
    }

    #[test]
    fn test_pointer_delivers_only_to_topmost_hit() {
        let (mut store, tile, arrow) = store_with_tile_and_arrow();
        let subscribers: HashSet<ComponentId> = [tile, arrow.clone()].into_iter().collect();

        let actions = DispatchPolicy::Pointer.dispatch(
            &Event::Click { x: 1, y: 1 },
            &subscribers,
            &mut store,
        );

        assert_eq!(actions, vec![Action::Select(arrow)]);
    }

    #[test]
    fn test_pointer_miss_delivers_nothing() {
        let (mut store, tile, arrow) = store_with_tile_and_arrow();
        let subscribers: HashSet<ComponentId> = [tile, arrow].into_iter().collect();

        let actions = DispatchPolicy::Pointer.dispatch(
            &Event::Click { x: 30, y: 30 },
            &subscribers,
            &mut store,
        );

        assert!(actions.is_empty());
    }

    #[test]
    fn test_pointer_ties_deliver_to_all_winners() {
        let mut store = ComponentStore::new();
        // two tiles at the same layer, both under the point
        let a = store.register_ui_component(
            Component::Tile(TileComponent::new(&Cell::new(0, 0), Bounds::new(0, 0, 4, 2))),
            Layer::Tiles,
        );
        let b = store.register_ui_component(
            Component::Tile(TileComponent::new(&Cell::new(0, 1), Bounds::new(0, 0, 4, 2))),
            Layer::Tiles,
        );
        let subscribers: HashSet<ComponentId> = [a, b].into_iter().collect();

        let actions = DispatchPolicy::Pointer.dispatch(
            &Event::Click { x: 1, y: 1 },
            &subscribers,
            &mut store,
        );

        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn test_hover_intersects_subscribers() {
        let (mut store, tile, _arrow) = store_with_tile_and_arrow();
        // only the tile subscribes to enter; the carried set names both
        let subscribers: HashSet<ComponentId> = [tile.clone()].into_iter().collect();
        let carried: HashSet<ComponentId> = [tile.clone()].into_iter().collect();

        DispatchPolicy::Hover.dispatch(
            &Event::MouseEnter {
                components: carried,
            },
            &subscribers,
            &mut store,
        );

        let highlighted = store
            .get(&tile)
            .and_then(Component::as_tile)
            .map(TileComponent::is_highlighted);
        assert_eq!(highlighted, Some(true));
    }

    #[test]
    fn test_keyboard_broadcasts_to_all_subscribers() {
        let (mut store, tile, arrow) = store_with_tile_and_arrow();
        let subscribers: HashSet<ComponentId> = [tile, arrow].into_iter().collect();

        // tiles and arrows ignore key events; delivery must still visit all
        let actions = DispatchPolicy::Keyboard.dispatch(
            &Event::KeyDown(crate::input_key::InputKey::Char('a')),
            &subscribers,
            &mut store,
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn test_highest_level_skips_missing_and_tracks_global_max() {
        let (store, tile, arrow) = store_with_tile_and_arrow();
        let ghost = ComponentId::new("gone");

        let winners =
            highest_level_components(&[tile.clone(), ghost, arrow.clone()], &store);
        assert_eq!(winners, vec![arrow.clone()]);

        // order of candidates must not matter
        let winners = highest_level_components(&[arrow.clone(), tile], &store);
        assert_eq!(winners, vec![arrow]);
    }

    #[test]
    fn test_highest_level_empty_input() {
        let store = ComponentStore::new();
        assert!(highest_level_components(&[], &store).is_empty());
    }
}
