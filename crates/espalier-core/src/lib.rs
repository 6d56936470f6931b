//! Espalier Core Types and Definitions
//!
//! This crate provides the foundational types for the Espalier organization
//! chart pipeline. It includes:
//!
//! - **Identifiers**: Efficient string-interned employee ids ([`identifier::Id`])
//! - **Geometry**: Screen-space geometric types ([`geometry`] module)
//! - **Draw**: Drawable path primitives for connector overlays ([`draw`] module)

pub mod draw;
pub mod geometry;
pub mod identifier;
