//! Core UI functionality for the daylist application.
//!
//! This module contains the building blocks the components share: the
//! [`Action`] values components return to their owner, the [`Component`]
//! trait, and the terminal [`EventHandler`].
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** describe state transitions requested by a component
//! 3. **Events** are read one at a time through the [`EventHandler`]
//!
//! A child never mutates its owner's state. It returns an [`Action`] from its
//! event handler and the owner applies it in `update`.

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
