//! Penstock Core Types and Definitions
//!
//! This crate provides the foundational types for the Penstock pipeline
//! diagram renderer. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Text**: Deterministic text metrics, truncation, and line
//!   classification ([`text`] module)
//! - **Draw**: Drawable primitives for diagram elements ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod text;

pub use draw::DrawError;
