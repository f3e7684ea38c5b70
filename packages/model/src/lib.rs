//! # Pagesmith Model
//!
//! Data definitions for the block document tree.
//!
//! A page is an ordered sequence of [`Block`]s. Blocks form a recursive
//! tree: the `container` variant owns its own ordered sequence of child
//! blocks, nested to arbitrary depth. All other variants are leaves.
//!
//! The model carries no mutation logic — tree operations live in
//! `pagesmith-editor`, code generation in the compiler crates. What this
//! crate does provide:
//!
//! - the [`Block`] tagged union and its per-variant structs
//! - the optional [`StyleSet`] property bag attached to any block
//! - [`Page`] metadata plus the root block sequence
//! - block [`factory`] templates and full [`template`] page presets
//! - the [`IdGenerator`] every factory draws fresh node ids from
//! - a [`visitor`] for generic recursive traversal of the tree
//!
//! The serde representation is wire-compatible with the page collections
//! the designer persists: blocks are internally tagged on `"type"` with
//! lowercase tags and camelCase fields.

mod block;
mod id;
mod page;
mod style;

pub mod factory;
pub mod template;
pub mod visitor;

pub use block::{
    Alignment, Block, BlockKind, ButtonBlock, ButtonVariant, CardBlock, ContainerBlock,
    ContainerLayout, DividerBlock, DividerStyle, HeadingBlock, ImageBlock, ListBlock, ListType,
    SpacerBlock, TextBlock, VideoBlock,
};
pub use id::IdGenerator;
pub use page::Page;
pub use style::{BorderStyle, FontWeight, StyleSet};
