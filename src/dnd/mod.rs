//! Drag-and-drop rescheduling.
//!
//! [`resolve`] holds the pure drop-target and time-grid math, [`controller`]
//! the stateful gesture handling built on top of it. The render layer exposes
//! its tree through [`tree::DropNode`] and persists moves through
//! [`controller::EventUpdater`].

pub mod controller;
pub mod payload;
pub mod resolve;
pub mod tree;

pub use controller::{DragController, DragState, DropOutcome, EventUpdater, RejectReason};
pub use payload::{DataTransfer, DropEffect, EventUpdate, PointerEvent};
pub use tree::{DropNode, NodeId, NodeRef, SceneNodeSpec, SceneTree};
