//! Utility modules for the daylist application.
//!
//! - [`datetime`] - Clock abstraction and date formatting for the header and deadlines
//! - [`color`] - Priority color mapping

pub mod color;
pub mod datetime;
