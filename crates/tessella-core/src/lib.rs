//! Tessella Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Tessella grid
//! layout crates. It includes:
//!
//! - **Geometry**: Points, sizes and bounding boxes ([`geometry`] module)
//! - **Diagram**: The capability traits grid layout is generic over ([`diagram`] module)
//! - **Scene**: A reference implementation of those traits ([`scene::Scene`])
//! - **Colors**: CSS color handling for scene elements ([`color::Color`])

pub mod color;
pub mod diagram;
pub mod geometry;
pub mod scene;
