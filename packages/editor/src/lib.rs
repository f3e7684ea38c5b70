//! # Pagesmith Editor
//!
//! Document editing engine for block pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: block tree + page schema             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session lifecycle + mutations       │
//! │  - Load/save the page collection            │
//! │  - Apply tree mutations at any depth        │
//! │  - Selection-aware add/delete routing       │
//! │  - Debounced autosave                       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compilers: page → HTML / React source       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Array order is source of truth**: `position` is a derived cache,
//!    recomputed after every reorder, never trusted as input.
//! 2. **Mutations are total**: targeting an id that no longer exists is a
//!    silent no-op, not an error. The UI only offers valid targets, so
//!    a stale id means the tree moved underneath it — nothing to do.
//! 3. **Single write path**: all tree changes go through
//!    [`Mutation::apply`], driven by an [`EditSession`].
//! 4. **Coalesced persistence**: rapid edits schedule one debounced save;
//!    an explicit save bypasses the quiet period.
//!
//! ## Usage
//!
//! ```rust
//! use pagesmith_editor::{EditSession, MemoryStore};
//! use pagesmith_model::factory;
//!
//! let mut session = EditSession::new(Box::new(MemoryStore::new()));
//! session.create_page("Home", "home").unwrap();
//!
//! let block = factory::heading(session.ids_mut());
//! session.add_block(block);
//! session.save_page().unwrap();
//! ```

mod autosave;
mod errors;
mod mutations;
mod session;
mod store;

pub use autosave::Autosave;
pub use errors::EditorError;
pub use mutations::{find_block, find_block_mut, BlockPatch, Mutation};
pub use session::EditSession;
pub use store::{FileStore, MemoryStore, PageStore};
