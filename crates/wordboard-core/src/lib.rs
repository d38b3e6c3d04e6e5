//! # wordboard-core - Core Domain Types
//!
//! Foundation crate for wordboard. Provides the board model, cell identity,
//! direction resolution, the controller/tile state enums, the action type,
//! error handling, and the logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Board Model (`board`, `cell`)
//! - [`BoardModel`] - Square grid of cells, keyed by [`CellId`]
//! - [`Cell`] - A board coordinate plus its current letter value
//! - [`CellId`] - Opaque id, a pure function of `(row, column)`
//!
//! ### Interaction Types (`action`, `states`, `direction`)
//! - [`Action`] - Select/Cancel/Submit, produced by components, consumed by
//!   the controller
//! - [`ComponentId`] - Stable string identity for a UI component
//! - [`BoardState`] - Coarse controller mode (square selection, direction
//!   selection, word entry)
//! - [`TileState`] - Per-tile visual/interactive sub-state
//! - [`DirectionTranslation`] - Unit vector chosen during direction selection
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use wordboard_core::prelude::*;
//! ```

pub mod action;
pub mod board;
pub mod cell;
pub mod direction;
pub mod error;
pub mod logging;
pub mod states;

/// Prelude for common imports used throughout all wordboard crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use action::{Action, ComponentId};
pub use board::{BoardModel, DEFAULT_BOARD_SIZE};
pub use cell::{Cell, CellId};
pub use direction::DirectionTranslation;
pub use error::{Error, Result, ResultExt};
pub use states::{BoardState, TileState};
