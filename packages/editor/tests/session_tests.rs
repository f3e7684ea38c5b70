//! End-to-end session behavior: routing, selection, persistence.

use pagesmith_editor::{BlockPatch, EditSession, FileStore, MemoryStore};
use pagesmith_model::{factory, Block};
use std::time::Duration;

fn session() -> (EditSession, MemoryStore) {
    let store = MemoryStore::new();
    let session = EditSession::new(Box::new(store.clone()));
    (session, store)
}

#[test]
fn test_add_block_goes_to_selected_container() {
    let (mut session, _) = session();
    session.create_page("Home", "home").unwrap();

    let container = factory::container(session.ids_mut());
    let container_id = container.id().to_string();
    session.add_block(container);

    session.select_block(Some(&container_id));
    let heading = factory::heading(session.ids_mut());
    let heading_id = heading.id().to_string();
    session.add_block(heading);

    let page = session.current_page().unwrap();
    // Root is unchanged in length; the heading landed inside the container.
    assert_eq!(page.blocks.len(), 1);
    let children = page.blocks[0].children().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].id(), heading_id);
}

#[test]
fn test_add_block_appends_to_root_without_container_selection() {
    let (mut session, _) = session();
    session.create_page("Home", "home").unwrap();

    let first = factory::heading(session.ids_mut());
    session.add_block(first);
    let second = factory::text(session.ids_mut());
    session.add_block(second);

    let page = session.current_page().unwrap();
    assert_eq!(page.blocks.len(), 2);
    assert_eq!(page.blocks[0].position(), 0);
    assert_eq!(page.blocks[1].position(), 1);
}

#[test]
fn test_selecting_non_container_keeps_root_routing() {
    let (mut session, _) = session();
    session.create_page("Home", "home").unwrap();

    let heading = factory::heading(session.ids_mut());
    let heading_id = heading.id().to_string();
    session.add_block(heading);
    session.select_block(Some(&heading_id));

    let text = factory::text(session.ids_mut());
    session.add_block(text);

    assert_eq!(session.current_page().unwrap().blocks.len(), 2);
}

#[test]
fn test_delete_selected_block_clears_selection() {
    let (mut session, _) = session();
    session.create_page("Home", "home").unwrap();

    let block = factory::text(session.ids_mut());
    let id = block.id().to_string();
    session.add_block(block);

    session.select_block(Some(&id));
    assert!(session.selected_block().is_some());

    session.delete_block(&id);
    assert!(session.selected_block_id().is_none());
    assert!(session.current_page().unwrap().blocks.is_empty());
}

#[test]
fn test_delete_other_block_keeps_selection() {
    let (mut session, _) = session();
    session.create_page("Home", "home").unwrap();

    let keep = factory::text(session.ids_mut());
    let keep_id = keep.id().to_string();
    session.add_block(keep);
    let drop = factory::text(session.ids_mut());
    let drop_id = drop.id().to_string();
    session.add_block(drop);

    session.select_block(Some(&keep_id));
    session.delete_block(&drop_id);

    assert_eq!(session.selected_block_id(), Some(keep_id.as_str()));
}

#[test]
fn test_mutations_without_open_page_are_noops() {
    let (mut session, store) = session();

    let block = factory::heading(session.ids_mut());
    session.add_block(block);
    session.delete_block("anything");
    session.reorder_blocks(0, 1);

    assert!(session.current_page().is_none());
    assert!(store.contents().is_none());
}

#[test]
fn test_duplicate_slug_is_rejected() {
    let (mut session, _) = session();
    session.create_page("Home", "home").unwrap();
    session.save_page().unwrap();

    let err = session.create_page("Other", "home").unwrap_err();
    assert!(err.to_string().contains("home"));

    // Empty required fields are rejected before any state change.
    assert!(session.create_page("", "x").is_err());
    assert!(session.create_page("X", " ").is_err());
}

#[test]
fn test_save_merges_by_id_and_persists() {
    let (mut session, store) = session();
    session.create_page("Home", "home").unwrap();
    let block = factory::heading(session.ids_mut());
    session.add_block(block);
    session.save_page().unwrap();
    assert_eq!(session.pages().len(), 1);

    // Saving again replaces, not appends.
    let patch = BlockPatch::content("Edited");
    let id = session.current_page().unwrap().blocks[0].id().to_string();
    session.update_block(&id, patch);
    session.save_page().unwrap();
    assert_eq!(session.pages().len(), 1);

    let payload = store.contents().unwrap();
    assert!(payload.contains("Edited"));
}

#[test]
fn test_collection_survives_session_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pages.json");

    let mut session = EditSession::new(Box::new(FileStore::new(&path)));
    session
        .create_page_from_template("about", "About Us", "about")
        .unwrap();
    session.save_page().unwrap();
    let page_id = session.pages()[0].id.clone();

    let mut reopened = EditSession::new(Box::new(FileStore::new(&path)));
    assert_eq!(reopened.pages().len(), 1);

    reopened.load_page(&page_id);
    let page = reopened.current_page().unwrap();
    assert_eq!(page.slug, "about");
    assert!(!page.blocks.is_empty());
}

#[test]
fn test_corrupt_store_counts_as_empty() {
    let store = MemoryStore::with_contents("{definitely not json");
    let session = EditSession::new(Box::new(store));
    assert!(session.pages().is_empty());
}

#[test]
fn test_malformed_import_leaves_collection_unchanged() {
    let (mut session, store) = session();
    session.create_page("Home", "home").unwrap();
    session.save_page().unwrap();
    let before_payload = store.contents().unwrap();

    assert!(session.import_pages("{\"not\": \"an array\"}").is_err());
    assert!(session.import_pages("not json at all").is_err());

    assert_eq!(session.pages().len(), 1);
    assert_eq!(store.contents().unwrap(), before_payload);
}

#[test]
fn test_export_import_roundtrip() {
    let (mut session, _) = session();
    session
        .create_page_from_template("landing", "Landing", "landing")
        .unwrap();
    session.save_page().unwrap();

    let exported = session.export_pages().unwrap();

    let (mut other, _) = self::session();
    other.import_pages(&exported).unwrap();
    assert_eq!(other.pages().len(), 1);
    assert_eq!(other.pages()[0].slug, "landing");
}

#[test]
fn test_import_accepts_designer_format() {
    // Collection shape written by the designer's persistence layer.
    let payload = r##"[{
        "id": "1700000000000",
        "title": "Home",
        "slug": "home",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z",
        "blocks": [
            {"id": "b1", "type": "heading", "content": "Hi", "level": 1,
             "align": "center", "position": 0},
            {"id": "b2", "type": "text", "content": "World", "align": "left",
             "position": 1,
             "styles": {"textColor": "#4b5563", "fontSize": "1rem"}}
        ]
    }]"##;

    let (mut session, _) = session();
    session.import_pages(payload).unwrap();

    session.load_page("1700000000000");
    let page = session.current_page().unwrap();
    assert_eq!(page.blocks.len(), 2);
    match &page.blocks[1] {
        Block::Text(text) => {
            let styles = text.styles.as_ref().unwrap();
            assert_eq!(styles.text_color.as_deref(), Some("#4b5563"));
        }
        other => panic!("expected text block, got {:?}", other.kind()),
    }
}

#[test]
fn test_autosave_coalesces_rapid_edits() {
    let store = MemoryStore::new();
    let mut session =
        EditSession::with_autosave_delay(Box::new(store.clone()), Duration::from_secs(60));
    session.create_page("Home", "home").unwrap();

    for _ in 0..5 {
        let block = factory::text(session.ids_mut());
        session.add_block(block);
    }

    // Quiet period not elapsed: nothing persisted yet.
    session.tick().unwrap();
    assert!(store.contents().is_none());
    assert!(session.autosave_pending());

    // Explicit save bypasses the debounce and cancels the pending timer.
    session.save_page().unwrap();
    assert!(!session.autosave_pending());
    assert!(store.contents().is_some());
}

#[test]
fn test_autosave_fires_after_quiet_period() {
    let store = MemoryStore::new();
    let mut session = EditSession::with_autosave_delay(Box::new(store.clone()), Duration::ZERO);
    session.create_page("Home", "home").unwrap();
    let block = factory::heading(session.ids_mut());
    session.add_block(block);

    session.tick().unwrap();
    assert!(store.contents().is_some());
    assert!(!session.autosave_pending());
}

#[test]
fn test_delete_page_clears_current_and_persists() {
    let (mut session, store) = session();
    session.create_page("Home", "home").unwrap();
    session.save_page().unwrap();
    let id = session.pages()[0].id.clone();

    session.delete_page(&id).unwrap();
    assert!(session.pages().is_empty());
    assert!(session.current_page().is_none());
    assert_eq!(store.contents().unwrap(), "[]");
}

#[test]
fn test_load_unknown_page_is_noop() {
    let (mut session, _) = session();
    session.load_page("missing");
    assert!(session.current_page().is_none());
}

#[test]
fn test_duplicate_in_container_and_reorder() {
    let (mut session, _) = session();
    session.create_page("Home", "home").unwrap();

    let container = factory::container(session.ids_mut());
    let container_id = container.id().to_string();
    session.add_block(container);

    let child = factory::heading(session.ids_mut());
    let child_id = child.id().to_string();
    session.add_block_to_container(&container_id, child);

    session.update_block(&child_id, BlockPatch::content("Original"));
    session.duplicate_block_in_container(&container_id, &child_id);

    let page = session.current_page().unwrap();
    let children = page.blocks[0].children().unwrap();
    assert_eq!(children.len(), 2);
    assert_ne!(children[0].id(), children[1].id());
    match (&children[0], &children[1]) {
        (Block::Heading(a), Block::Heading(b)) => {
            assert_eq!(a.content, "Original");
            assert_eq!(b.content, "Original");
        }
        _ => panic!("expected two headings"),
    }

    // Move the clone in front of its source.
    session.reorder_blocks_in_container(&container_id, 1, 0);
    let page = session.current_page().unwrap();
    let children = page.blocks[0].children().unwrap();
    assert_eq!(children[1].id(), child_id);
    assert_eq!(children[0].position(), 0);
    assert_eq!(children[1].position(), 1);
}

#[test]
fn test_delete_from_container_clears_selection() {
    let (mut session, _) = session();
    session.create_page("Home", "home").unwrap();

    let container = factory::container(session.ids_mut());
    let container_id = container.id().to_string();
    session.add_block(container);

    let child = factory::card(session.ids_mut());
    let child_id = child.id().to_string();
    session.add_block_to_container(&container_id, child);

    session.select_block(Some(&child_id));
    session.delete_block_from_container(&container_id, &child_id);

    assert!(session.selected_block_id().is_none());
    let page = session.current_page().unwrap();
    assert!(page.blocks[0].children().unwrap().is_empty());
}
