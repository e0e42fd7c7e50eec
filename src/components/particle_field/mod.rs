//! Pointer-reactive particle field component.
//!
//! Renders a decorative field of glowing particles on a fullscreen HTML
//! canvas with:
//! - Pointer attraction with damping and jitter, wrapping at the edges
//! - Radial-gradient glow discs over a translucent trail wash
//! - Viewport-proportional particle counts, retargeted on debounced resize
//! - Optional page-supplied overrides for count, palette, and seed
//!
//! # Example
//!
//! ```ignore
//! use glowfield::{FieldConfig, ParticleFieldCanvas};
//!
//! let config = Signal::derive(|| FieldConfig::default());
//!
//! view! { <ParticleFieldCanvas config=config /> }
//! ```

mod component;
mod field;
mod render;
mod rng;
pub mod theme;
mod types;

pub use component::ParticleFieldCanvas;
pub use field::{Particle, ParticleField};
pub use theme::{FieldTheme, hex_to_rgba};
pub use types::FieldConfig;
