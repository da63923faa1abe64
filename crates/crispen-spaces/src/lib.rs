//! Crispen Spaces — name-keyed sets of color spaces.
//!
//! A [`ColorSpaceSet`] holds a small ordered list of color spaces whose names
//! are unique ignoring ASCII case. Sets own copies of their entries, compare
//! equal by name alone, and combine with [`union`], [`intersection`] and
//! [`difference`] (also available as `|`, `&` and `-` on borrowed sets).

pub mod algebra;
pub mod builtin;
pub mod color_space;
mod error;
pub mod name;
pub mod set;

// Re-exports for convenience.
pub use algebra::{difference, intersection, union};
pub use builtin::ColorSpaceId;
pub use color_space::{ColorSpace, ColorSpaceDesc, Encoding};
pub use error::SpacesError;
pub use set::ColorSpaceSet;
