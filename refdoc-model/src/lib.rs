//! # refdoc-model
//!
//! The document tree handed to the refdoc structure checker by the upstream
//! markup parser. The checker never builds or mutates these trees; it only
//! traverses them, so the model is deliberately small: a [`Node`] with a kind
//! tag, ordered children, classification marks, and a source [`Range`].
//!
//! Trees cross the parser/checker boundary either in-process or serialized as
//! JSON (every type here derives serde traits for that purpose).

pub mod node;
pub mod range;

pub use node::{kind, Node, API_CLASS_MARK};
pub use range::{Position, Range};
