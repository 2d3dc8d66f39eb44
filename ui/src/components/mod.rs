//! Shared components used across the page sections.
pub mod icon;
pub mod nav_link;
pub mod primitives;
