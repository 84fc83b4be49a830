//! Shared building blocks for dialog rendering

pub mod common;
