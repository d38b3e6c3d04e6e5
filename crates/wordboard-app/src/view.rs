//! Board view: wires the registry, component store, and geometry together

use std::collections::HashMap;

use wordboard_core::{BoardModel, CellId, ComponentId, Result};

use crate::arrow::ArrowComponent;
use crate::component::Layer;
use crate::controller::Controller;
use crate::dispatch::DispatchPolicy;
use crate::events::{Event, EventName};
use crate::frame::BoardFrameComponent;
use crate::geometry::BoardGeometry;
use crate::registry::EventRegistry;
use crate::store::{Component, ComponentStore};
use crate::tile::TileComponent;

/// Everything the frontend needs to drive one board: the component store,
/// the event registry, the geometry, and the cell-to-tile index.
pub struct BoardView {
    store: ComponentStore,
    registry: EventRegistry,
    geometry: BoardGeometry,
    tiles: HashMap<CellId, ComponentId>,
}

/// Build a fully wired view for a board: dispatchers bound, the frame
/// registered, and one tile per cell subscribed to the pointer events.
///
/// Fails only if the geometry cannot place a tile for some cell, which
/// means board model and geometry disagree about the board size.
pub fn build_board_view(board: &BoardModel, geometry: BoardGeometry) -> Result<BoardView> {
    let mut registry = EventRegistry::new();
    registry.bind_dispatcher(EventName::Click, DispatchPolicy::Pointer);
    registry.bind_dispatcher(EventName::MouseEnter, DispatchPolicy::Hover);
    registry.bind_dispatcher(EventName::MouseLeave, DispatchPolicy::Hover);
    registry.bind_dispatcher(EventName::KeyDown, DispatchPolicy::Keyboard);

    let mut store = ComponentStore::new();
    store.register_ui_component(
        Component::Frame(BoardFrameComponent::new(geometry)),
        Layer::BoardFrame,
    );

    let mut tiles = HashMap::new();
    for row in 0..board.size() {
        for column in 0..board.size() {
            let Some(cell) = board.cell_at(row, column) else {
                continue;
            };
            let bounds = geometry.tile_bounds(row, column)?;
            let tile = TileComponent::new(cell, bounds);
            let id = store.register_ui_component(Component::Tile(tile), Layer::Tiles);
            registry.register_component(EventName::Click, id.clone());
            registry.register_component(EventName::MouseEnter, id.clone());
            registry.register_component(EventName::MouseLeave, id.clone());
            tiles.insert(cell.id, id);
        }
    }

    Ok(BoardView {
        store,
        registry,
        geometry,
        tiles,
    })
}

impl BoardView {
    pub fn store(&self) -> &ComponentStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ComponentStore {
        &mut self.store
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut EventRegistry {
        &mut self.registry
    }

    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    pub fn tile_id_for_cell(&self, cell: CellId) -> Option<ComponentId> {
        self.tiles.get(&cell).cloned()
    }

    pub fn tile(&self, id: &ComponentId) -> Option<&TileComponent> {
        self.store.get(id).and_then(Component::as_tile)
    }

    pub fn tile_mut(&mut self, id: &ComponentId) -> Option<&mut TileComponent> {
        self.store.get_mut(id).and_then(Component::as_tile_mut)
    }

    pub fn tile_for_cell_mut(&mut self, cell: CellId) -> Option<&mut TileComponent> {
        let id = self.tiles.get(&cell)?.clone();
        self.tile_mut(&id)
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut TileComponent> {
        self.store.tiles_mut()
    }

    pub fn arrow(&self, id: &ComponentId) -> Option<&ArrowComponent> {
        self.store.get(id).and_then(Component::as_arrow)
    }

    /// Register a transient overlay arrow, clickable above the tiles.
    pub fn add_arrow(&mut self, arrow: ArrowComponent) -> ComponentId {
        let id = self
            .store
            .register_ui_component(Component::Arrow(arrow), Layer::Overlay);
        self.registry.register_component(EventName::Click, id.clone());
        id
    }

    /// Remove a component from the store and drop its subscriptions.
    pub fn remove_component(&mut self, id: &ComponentId) {
        self.store.remove_component(id);
        self.registry.remove_component(id);
    }
}

/// Drain emitted events and run each through dispatch, then route the
/// resulting actions (and raw key events) to the controller.
///
/// The controller is not a registered component; key events reach it
/// directly here, in addition to whatever keyboard subscribers exist.
pub fn pump_events(view: &mut BoardView, controller: &mut Controller) {
    let events = view.registry.drain_emitted();
    for event in events {
        let actions = {
            let BoardView {
                registry, store, ..
            } = view;
            registry.dispatch_event(&event, store)
        };
        if let Event::KeyDown(key) = &event {
            controller.key_pressed(*key, view);
        }
        for action in actions {
            controller.process_action(action, view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordboard_core::TileState;

    fn fixture() -> (BoardModel, BoardView) {
        let board = BoardModel::new(3);
        let view = build_board_view(&board, BoardGeometry::new(0, 0, 4, 2, 3)).unwrap();
        (board, view)
    }

    #[test]
    fn test_build_registers_one_tile_per_cell_plus_frame() {
        let (_board, view) = fixture();
        assert_eq!(view.store().len(), 3 * 3 + 1);
        assert_eq!(view.tiles.len(), 9);
    }

    #[test]
    fn test_tiles_start_selectable_and_subscribed() {
        let (_board, view) = fixture();
        let id = view.tile_id_for_cell(CellId::of(1, 1)).unwrap();
        let tile = view.tile(&id).unwrap();
        assert_eq!(tile.state(), TileState::Selectable);
        for name in [EventName::Click, EventName::MouseEnter, EventName::MouseLeave] {
            assert!(view.registry().subscriptions().is_subscribed(name, &id));
        }
    }

    #[test]
    fn test_build_fails_on_geometry_board_mismatch() {
        let board = BoardModel::new(4);
        // geometry only has room for a 3x3 board
        assert!(build_board_view(&board, BoardGeometry::new(0, 0, 4, 2, 3)).is_err());
    }

    #[test]
    fn test_add_and_remove_arrow() {
        let (_board, mut view) = fixture();
        let bounds = view.geometry().tile_bounds(0, 1).unwrap();
        let id = view.add_arrow(ArrowComponent::new(bounds, 0.0));

        assert!(view.arrow(&id).is_some());
        assert!(view
            .registry()
            .subscriptions()
            .is_subscribed(EventName::Click, &id));

        view.remove_component(&id);
        assert!(view.arrow(&id).is_none());
        assert!(!view
            .registry()
            .subscriptions()
            .is_subscribed(EventName::Click, &id));
    }
}
