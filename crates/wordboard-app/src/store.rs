//! Component storage and the z-index map

use std::collections::HashMap;

use wordboard_core::{Action, BoardModel, ComponentId};

use crate::arrow::ArrowComponent;
use crate::component::{DrawSurface, Layer, UiComponent};
use crate::events::Event;
use crate::frame::BoardFrameComponent;
use crate::tile::TileComponent;

/// Closed set of component kinds. Dispatch and drawing go through the
/// [`UiComponent`] impl; controller states match on the variant when they
/// need kind-specific access.
#[derive(Debug, Clone)]
pub enum Component {
    Tile(TileComponent),
    Arrow(ArrowComponent),
    Frame(BoardFrameComponent),
}

impl Component {
    pub fn as_tile(&self) -> Option<&TileComponent> {
        match self {
            Component::Tile(tile) => Some(tile),
            _ => None,
        }
    }

    pub fn as_tile_mut(&mut self) -> Option<&mut TileComponent> {
        match self {
            Component::Tile(tile) => Some(tile),
            _ => None,
        }
    }

    pub fn as_arrow(&self) -> Option<&ArrowComponent> {
        match self {
            Component::Arrow(arrow) => Some(arrow),
            _ => None,
        }
    }
}

impl UiComponent for Component {
    fn id(&self) -> &ComponentId {
        match self {
            Component::Tile(c) => c.id(),
            Component::Arrow(c) => c.id(),
            Component::Frame(c) => c.id(),
        }
    }

    fn draw(&self, board: &BoardModel, surface: &mut dyn DrawSurface) {
        match self {
            Component::Tile(c) => c.draw(board, surface),
            Component::Arrow(c) => c.draw(board, surface),
            Component::Frame(c) => c.draw(board, surface),
        }
    }

    fn step(&mut self, delta_millis: u64) {
        match self {
            Component::Tile(c) => c.step(delta_millis),
            Component::Arrow(c) => c.step(delta_millis),
            Component::Frame(c) => c.step(delta_millis),
        }
    }

    fn event_fired(&mut self, event: &Event) -> Option<Action> {
        match self {
            Component::Tile(c) => c.event_fired(event),
            Component::Arrow(c) => c.event_fired(event),
            Component::Frame(c) => c.event_fired(event),
        }
    }

    fn contains_point(&self, x: u16, y: u16) -> bool {
        match self {
            Component::Tile(c) => c.contains_point(x, y),
            Component::Arrow(c) => c.contains_point(x, y),
            Component::Frame(c) => c.contains_point(x, y),
        }
    }

    fn is_visible(&self) -> bool {
        match self {
            Component::Tile(c) => c.is_visible(),
            Component::Arrow(c) => c.is_visible(),
            Component::Frame(c) => c.is_visible(),
        }
    }
}

/// Owns every registered component and the component-id -> z-index map.
///
/// Registration and removal are the only mutation paths for the z-index
/// map; the dispatch layer and controller states only read it.
#[derive(Debug, Default)]
pub struct ComponentStore {
    components: HashMap<ComponentId, Component>,
    z_index: HashMap<ComponentId, u8>,
}

impl ComponentStore {
    pub fn new() -> Self {
        ComponentStore::default()
    }

    /// Register a component at a rendering layer, returning its id.
    /// Re-registering the same id replaces the previous component.
    pub fn register_ui_component(&mut self, component: Component, layer: Layer) -> ComponentId {
        let id = component.id().clone();
        self.z_index.insert(id.clone(), layer.z_index());
        self.components.insert(id.clone(), component);
        id
    }

    /// Remove a component and its z-index entry. No-op when unknown.
    pub fn remove_component(&mut self, id: &ComponentId) -> Option<Component> {
        self.z_index.remove(id);
        self.components.remove(id)
    }

    pub fn get(&self, id: &ComponentId) -> Option<&Component> {
        self.components.get(id)
    }

    pub fn get_mut(&mut self, id: &ComponentId) -> Option<&mut Component> {
        self.components.get_mut(id)
    }

    pub fn z_index(&self, id: &ComponentId) -> Option<u8> {
        self.z_index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut TileComponent> {
        self.components.values_mut().filter_map(Component::as_tile_mut)
    }

    pub fn components_mut(&mut self) -> impl Iterator<Item = &mut Component> {
        self.components.values_mut()
    }

    /// Ids sorted by ascending z-index, for the render pass.
    pub fn draw_order(&self) -> Vec<ComponentId> {
        let mut ids: Vec<ComponentId> = self.components.keys().cloned().collect();
        ids.sort_by_key(|id| (self.z_index(id).unwrap_or(0), id.clone()));
        ids
    }
}
