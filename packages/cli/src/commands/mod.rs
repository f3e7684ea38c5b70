pub mod compile;
pub mod export;
pub mod import;
pub mod pages;

pub use compile::CompileArgs;
pub use export::ExportArgs;
pub use pages::NewArgs;

use pagesmith_editor::{EditSession, FileStore};
use std::path::Path;

/// Open an edit session against the store file.
pub fn open_session(store: &Path) -> EditSession {
    EditSession::new(Box::new(FileStore::new(store)))
}
