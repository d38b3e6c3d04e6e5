//! # wordboard-app - Interaction Engine
//!
//! Event registry, dispatch policies, emitters, UI components, and the board
//! controller state machine. This crate is terminal-library independent: the
//! frontend feeds it raw pointer/key samples and implements [`DrawSurface`]
//! for rendering.
//!
//! ## Control flow
//!
//! ```text
//! platform input -> Emitter -> EventPipe -> EventRegistry::dispatch_event
//!     -> DispatchPolicy (z-index / hover / broadcast)
//!     -> Component::event_fired -> Action
//!     -> Controller::process_action -> tile/board mutation + state transition
//! ```
//!
//! All of this is single-threaded and synchronous: every handler runs to
//! completion before the next input sample is processed.

pub mod arrow;
pub mod component;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod emitter;
pub mod events;
pub mod frame;
pub mod geometry;
pub mod input_key;
pub mod registry;
pub mod store;
pub mod tile;
pub mod view;

pub use arrow::ArrowComponent;
pub use component::{Bounds, DrawSurface, Layer, Paint, UiComponent};
pub use config::{load_settings, Settings};
pub use controller::Controller;
pub use dispatch::DispatchPolicy;
pub use emitter::{ClickEmitter, Emitter, HoverEmitter, KeyboardEmitter};
pub use events::{Event, EventName};
pub use frame::BoardFrameComponent;
pub use geometry::BoardGeometry;
pub use input_key::InputKey;
pub use registry::{EventPipe, EventRegistry};
pub use store::{Component, ComponentStore};
pub use tile::TileComponent;
pub use view::{build_board_view, pump_events, BoardView};
