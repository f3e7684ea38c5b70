//! # Edit Session
//!
//! Owns the page collection, the open page, and the block selection.
//!
//! The session is the single write path for the document: UI layers call
//! its mutation methods, which delegate to [`Mutation`] for the tree
//! transformation, refresh `updatedAt`, and arm the debounced autosave.
//! "Nothing to do" conditions (no open page, stale block id, drop with no
//! destination) are silent no-ops; only malformed imports and page
//! creation validation surface errors.

use crate::autosave::Autosave;
use crate::errors::EditorError;
use crate::mutations::{find_block, BlockPatch, Mutation};
use crate::store::PageStore;
use chrono::Utc;
use pagesmith_model::{template, Block, IdGenerator, Page};
use std::time::Duration;

pub struct EditSession {
    pages: Vec<Page>,
    current_page: Option<Page>,
    selected_block_id: Option<String>,
    ids: IdGenerator,
    store: Box<dyn PageStore>,
    autosave: Autosave,
}

impl EditSession {
    /// Open a session against a store, loading any persisted collection.
    /// Unreadable or unparseable stored data counts as an empty
    /// collection.
    pub fn new(store: Box<dyn PageStore>) -> Self {
        Self::with_autosave(store, Autosave::default())
    }

    /// Session with a custom autosave quiet period.
    pub fn with_autosave_delay(store: Box<dyn PageStore>, delay: Duration) -> Self {
        Self::with_autosave(store, Autosave::new(delay))
    }

    fn with_autosave(store: Box<dyn PageStore>, autosave: Autosave) -> Self {
        let pages: Vec<Page> = store
            .load()
            .and_then(|payload| serde_json::from_str(&payload).ok())
            .unwrap_or_default();

        tracing::debug!(pages = pages.len(), "opened edit session");

        // Salt the id scope with the clock so counters from earlier
        // sessions over the same store can never collide.
        let ids = IdGenerator::new(&format!("session-{}", Utc::now().timestamp_millis()));

        Self {
            pages,
            current_page: None,
            selected_block_id: None,
            ids,
            store,
            autosave,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.current_page.as_ref()
    }

    pub fn selected_block_id(&self) -> Option<&str> {
        self.selected_block_id.as_deref()
    }

    /// Id generator for block factories.
    pub fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    // ---- Page lifecycle -------------------------------------------------

    /// Create a new empty page and make it current. Not persisted until
    /// saved (explicitly or by autosave).
    pub fn create_page(&mut self, title: &str, slug: &str) -> Result<(), EditorError> {
        self.validate_new_page(title, slug)?;
        let page = Page::new(self.ids.new_id(), title, slug);
        self.open(page);
        Ok(())
    }

    /// Instantiate a template, overriding its id/title/slug/timestamps,
    /// and make the result current.
    pub fn create_page_from_template(
        &mut self,
        template_id: &str,
        title: &str,
        slug: &str,
    ) -> Result<(), EditorError> {
        self.validate_new_page(title, slug)?;
        let template = template::find(template_id)
            .ok_or_else(|| EditorError::UnknownTemplate(template_id.to_string()))?;
        let page_id = self.ids.new_id();
        let page = template.instantiate(&mut self.ids, page_id, title, slug);
        self.open(page);
        Ok(())
    }

    /// Open a page from the collection. Unknown ids are a no-op.
    pub fn load_page(&mut self, id: &str) {
        if let Some(page) = self.pages.iter().find(|p| p.id == id) {
            let page = page.clone();
            self.open(page);
        }
    }

    fn open(&mut self, page: Page) {
        self.selected_block_id = None;
        self.current_page = Some(page);
        self.autosave.schedule();
    }

    fn validate_new_page(&self, title: &str, slug: &str) -> Result<(), EditorError> {
        if title.trim().is_empty() {
            return Err(EditorError::MissingField("title"));
        }
        if slug.trim().is_empty() {
            return Err(EditorError::MissingField("slug"));
        }
        if self.pages.iter().any(|p| p.slug == slug) {
            return Err(EditorError::DuplicateSlug(slug.to_string()));
        }
        Ok(())
    }

    // ---- Selection ------------------------------------------------------

    pub fn select_block(&mut self, id: Option<&str>) {
        self.selected_block_id = id.map(str::to_string);
    }

    /// Recursive lookup of the selected block through the whole tree.
    pub fn selected_block(&self) -> Option<&Block> {
        let page = self.current_page.as_ref()?;
        let id = self.selected_block_id.as_deref()?;
        find_block(&page.blocks, id)
    }

    // ---- Block mutations -------------------------------------------------

    /// Add a block to the open page. If the selection is a container
    /// block, the new block goes into that container; otherwise it is
    /// appended to the root sequence.
    pub fn add_block(&mut self, block: Block) {
        match self.selected_container_id() {
            Some(container_id) => {
                self.apply(Mutation::AddToContainer {
                    container_id,
                    block,
                });
            }
            None => {
                self.apply(Mutation::AddBlock { block });
            }
        }
    }

    pub fn add_block_to_container(&mut self, container_id: &str, block: Block) {
        self.apply(Mutation::AddToContainer {
            container_id: container_id.to_string(),
            block,
        });
    }

    pub fn update_block(&mut self, id: &str, patch: BlockPatch) {
        self.apply(Mutation::UpdateBlock {
            id: id.to_string(),
            patch,
        });
    }

    pub fn delete_block(&mut self, id: &str) {
        if self.apply(Mutation::RemoveBlock { id: id.to_string() }) {
            self.clear_selection_of(id);
        }
    }

    pub fn delete_block_from_container(&mut self, container_id: &str, id: &str) {
        let mutation = Mutation::RemoveFromContainer {
            container_id: container_id.to_string(),
            id: id.to_string(),
        };
        if self.apply(mutation) {
            self.clear_selection_of(id);
        }
    }

    pub fn duplicate_block(&mut self, id: &str) {
        self.apply(Mutation::DuplicateBlock { id: id.to_string() });
    }

    pub fn duplicate_block_in_container(&mut self, container_id: &str, id: &str) {
        self.apply(Mutation::DuplicateInContainer {
            container_id: container_id.to_string(),
            id: id.to_string(),
        });
    }

    pub fn reorder_blocks(&mut self, from: usize, to: usize) {
        self.apply(Mutation::Reorder { from, to });
    }

    pub fn reorder_blocks_in_container(&mut self, container_id: &str, from: usize, to: usize) {
        self.apply(Mutation::ReorderInContainer {
            container_id: container_id.to_string(),
            from,
            to,
        });
    }

    /// Apply one mutation to the open page. No page open → no-op.
    fn apply(&mut self, mutation: Mutation) -> bool {
        let Some(page) = self.current_page.as_mut() else {
            return false;
        };

        let changed = mutation.apply(page, &mut self.ids);
        if changed {
            page.touch();
            self.autosave.schedule();
        }
        changed
    }

    fn selected_container_id(&self) -> Option<String> {
        let selected = self.selected_block()?;
        selected
            .is_container()
            .then(|| selected.id().to_string())
    }

    fn clear_selection_of(&mut self, id: &str) {
        if self.selected_block_id.as_deref() == Some(id) {
            self.selected_block_id = None;
        }
    }

    // ---- Persistence -----------------------------------------------------

    /// Merge the open page into the collection (replace-by-id or append)
    /// and persist the whole collection, bypassing the debounce.
    pub fn save_page(&mut self) -> Result<(), EditorError> {
        let Some(current) = self.current_page.clone() else {
            return Ok(());
        };

        match self.pages.iter_mut().find(|p| p.id == current.id) {
            Some(existing) => *existing = current,
            None => self.pages.push(current),
        }

        self.autosave.cancel();
        self.persist()
    }

    /// Remove a page from the collection and persist. Clears the open
    /// page if it was the one deleted.
    pub fn delete_page(&mut self, id: &str) -> Result<(), EditorError> {
        self.pages.retain(|p| p.id != id);
        if self.current_page.as_ref().is_some_and(|p| p.id == id) {
            self.current_page = None;
            self.selected_block_id = None;
            self.autosave.cancel();
        }
        self.persist()
    }

    /// Pretty-printed JSON of the whole collection.
    pub fn export_pages(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(&self.pages)?)
    }

    /// Replace the collection from a JSON payload. The payload must be a
    /// JSON array of pages; anything else fails without touching state.
    pub fn import_pages(&mut self, payload: &str) -> Result<(), EditorError> {
        let imported: Vec<Page> =
            serde_json::from_str(payload).map_err(|_| EditorError::InvalidImport)?;
        self.pages = imported;
        self.persist()
    }

    /// Drive the autosave timer. Call from the host event loop; persists
    /// once per quiet period that has elapsed since the last edit.
    pub fn tick(&mut self) -> Result<(), EditorError> {
        if self.autosave.take_due() {
            tracing::debug!("autosave fired");
            self.save_page()
        } else {
            Ok(())
        }
    }

    /// True when an edit is waiting on the autosave quiet period.
    pub fn autosave_pending(&self) -> bool {
        self.autosave.pending()
    }

    fn persist(&mut self) -> Result<(), EditorError> {
        let payload = serde_json::to_string(&self.pages)?;
        self.store.save(&payload)?;
        tracing::debug!(pages = self.pages.len(), "persisted page collection");
        Ok(())
    }
}
