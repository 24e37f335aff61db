//! Invoice document composition.
//!
//! [`compose`] turns a located record and the resolved font into the block
//! sequence the renderer lays out top to bottom.

mod block;
mod composer;
pub mod style;

pub use block::{BlockKind, LayoutBlock};
pub use composer::{compose, labels};
pub use style::{BlockStyle, Color, TextAlign};
