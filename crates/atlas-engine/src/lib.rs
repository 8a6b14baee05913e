//! # atlas-engine: Deterministic Design Token Engine
//!
//! Derives a complete design-token set from a theme and a seed string. The
//! same `(theme, seed)` pair always reproduces the same tokens.
//!
//! # Architecture
//!
//! ```text
//! Theme (builtin catalog or JSON) + seed
//!     │
//!     ├──► palette.rs:    Sequence(seed)           → ColorSet (8 × 11 shades)
//!     ├──► typography.rs: Sequence(seed)           → Typography
//!     └──► spacing.rs:    Sequence(seed-spacing)   → SpacingTokens
//!                │
//!                ▼
//!          components.rs: field lookups + archetype → ComponentTokens
//!                │
//!                ▼
//!          system.rs:     DesignSystem (meta, theme, seed, tokens)
//! ```
//!
//! Each subsystem owns its sequence. `contrast.rs` is called from palette
//! text picks and component composition; it never draws.
//!
//! # Color Space
//!
//! Generation happens in HSL with lightness anchors per shade. Contrast is
//! WCAG 2.1 relative luminance. No I/O happens in this crate.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Small integer-to-float casts (exponents, channel values).
#![allow(clippy::cast_precision_loss)]
// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]
// Component composition is one long table per widget.
#![allow(clippy::too_many_lines)]

pub mod builtin;
pub mod color;
pub mod components;
pub mod contrast;
pub mod palette;
pub mod sequence;
pub mod spacing;
pub mod system;
pub mod theme;
pub mod tokens;
pub mod typography;

pub use builtin::{builtin_theme, recommend_themes, resolve_theme};
pub use color::{Hsl, Rgb};
pub use components::ComponentTokens;
pub use palette::{ColorScale, ColorSet, Shade};
pub use sequence::Sequence;
pub use spacing::SpacingTokens;
pub use system::{DesignSystem, ThemeSource};
pub use theme::{Theme, ThemeError, ThemeResult};
pub use tokens::{TokenMap, TokenValue};
pub use typography::Typography;
