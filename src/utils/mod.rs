//! Utility modules for Fc1 scoring
//!
//! Contains shared functionality used across multiple metrics:
//! - Confusion: Binary confusion counts and the zero-division policy
//! - Events: Event intervals and extraction from label sequences

pub mod confusion;
pub mod events;

// Re-export commonly used types
pub use confusion::{safe_ratio, BinaryConfusion, ZeroDivision};
pub use events::{events_from_pairs, format_events, labels_to_events, Event};
