//! # Tree Mutations
//!
//! Semantic operations on the block tree.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation is one semantic edit, not a
//!    diff of the serialized tree
//! 2. **Total**: every operation succeeds on any well-formed tree; a
//!    missing target id leaves the tree unchanged
//! 3. **Depth-blind**: targets are located by id anywhere in the tree,
//!    recursing through container children
//! 4. **Order-preserving**: only reorder touches sibling order;
//!    `position` is recomputed from array index after it runs
//!
//! ## Mutation Semantics
//!
//! ### UpdateBlock
//! - Shallow merge of the patch into the target; fields the patch does
//!   not set survive
//! - A `styles` patch merges key-by-key so partial style edits never
//!   erase unrelated style keys
//!
//! ### RemoveBlock
//! - Filters the node out of whichever sequence holds it
//! - Siblings are not renumbered (renumbering is owned by reorder)
//!
//! ### DuplicateBlock
//! - Deep value copy inserted immediately after its source
//! - Fresh ids are assigned to the clone and its whole subtree, so
//!   duplicating a container cannot introduce duplicate ids
//!
//! ### AddToContainer
//! - Appends to the container's child sequence with `position` reset
//!   to 0, matching the designer's newest-first convention

use pagesmith_model::visitor::{walk_block_mut, VisitorMut};
use pagesmith_model::{
    Alignment, Block, ButtonVariant, ContainerLayout, DividerStyle, IdGenerator, ListType, Page,
    StyleSet,
};
use serde::{Deserialize, Serialize};

/// Partial update for a block.
///
/// All fields are optional; only the ones that are set are merged into
/// the target, and only when they apply to the target's variant. This is
/// the typed rendering of the designer's `Partial<Block>` patches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<ContainerLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Block>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<bool>,
    #[serde(default, rename = "loop", skip_serializing_if = "Option::is_none")]
    pub loop_playback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<DividerStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_type: Option<ListType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleSet>,
}

impl BlockPatch {
    /// Patch that only replaces text content.
    pub fn content(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    /// Patch that only merges styles.
    pub fn styles(styles: StyleSet) -> Self {
        Self {
            styles: Some(styles),
            ..Default::default()
        }
    }

    /// Merge this patch into a block, in place. Fields that do not apply
    /// to the block's variant are ignored.
    pub fn apply_to(&self, block: &mut Block) {
        if let Some(patch_styles) = &self.styles {
            block
                .styles_mut()
                .get_or_insert_with(StyleSet::default)
                .merge(patch_styles);
        }

        match block {
            Block::Heading(b) => {
                if let Some(content) = &self.content {
                    b.content = content.clone();
                }
                if let Some(level) = self.level {
                    b.level = level;
                }
                if let Some(align) = self.align {
                    b.align = align;
                }
            }
            Block::Text(b) => {
                if let Some(content) = &self.content {
                    b.content = content.clone();
                }
                if let Some(align) = self.align {
                    b.align = align;
                }
            }
            Block::Image(b) => {
                if let Some(url) = &self.url {
                    b.url = url.clone();
                }
                if let Some(alt) = &self.alt {
                    b.alt = alt.clone();
                }
                if let Some(width) = &self.width {
                    b.width = width.clone();
                }
            }
            Block::Button(b) => {
                if let Some(text) = &self.text {
                    b.text = text.clone();
                }
                if let Some(url) = &self.url {
                    b.url = url.clone();
                }
                if let Some(variant) = self.variant {
                    b.variant = variant;
                }
                if let Some(align) = self.align {
                    b.align = align;
                }
            }
            Block::Container(b) => {
                if let Some(blocks) = &self.blocks {
                    b.blocks = blocks.clone();
                }
                if let Some(layout) = self.layout {
                    b.layout = layout;
                }
                if let Some(gap) = &self.gap {
                    b.gap = Some(gap.clone());
                }
            }
            Block::Video(b) => {
                if let Some(url) = &self.url {
                    b.url = url.clone();
                }
                if let Some(width) = &self.width {
                    b.width = width.clone();
                }
                if let Some(autoplay) = self.autoplay {
                    b.autoplay = autoplay;
                }
                if let Some(controls) = self.controls {
                    b.controls = controls;
                }
                if let Some(loop_playback) = self.loop_playback {
                    b.loop_playback = loop_playback;
                }
            }
            Block::Divider(b) => {
                if let Some(style) = self.style {
                    b.style = style;
                }
                if let Some(thickness) = &self.thickness {
                    b.thickness = thickness.clone();
                }
                if let Some(color) = &self.color {
                    b.color = color.clone();
                }
            }
            Block::List(b) => {
                if let Some(items) = &self.items {
                    b.items = items.clone();
                }
                if let Some(list_type) = self.list_type {
                    b.list_type = list_type;
                }
            }
            Block::Card(b) => {
                if let Some(title) = &self.title {
                    b.title = title.clone();
                }
                if let Some(content) = &self.content {
                    b.content = content.clone();
                }
                if let Some(image_url) = &self.image_url {
                    b.image_url = Some(image_url.clone());
                }
                if let Some(button_text) = &self.button_text {
                    b.button_text = Some(button_text.clone());
                }
                if let Some(button_url) = &self.button_url {
                    b.button_url = Some(button_url.clone());
                }
            }
            Block::Spacer(b) => {
                if let Some(height) = &self.height {
                    b.height = height.clone();
                }
            }
        }
    }
}

/// Semantic mutations over a page's block tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a block to the root sequence.
    AddBlock { block: Block },

    /// Append a block into a container's child sequence.
    AddToContainer { container_id: String, block: Block },

    /// Merge a partial update into the block with this id, at any depth.
    UpdateBlock { id: String, patch: BlockPatch },

    /// Remove the block with this id from whichever sequence holds it.
    RemoveBlock { id: String },

    /// Remove a direct child of the given container.
    RemoveFromContainer { container_id: String, id: String },

    /// Clone a block (and subtree) next to its source.
    DuplicateBlock { id: String },

    /// Clone a direct child of the given container next to its source.
    DuplicateInContainer { container_id: String, id: String },

    /// Array-move within the root sequence, then renumber positions.
    Reorder { from: usize, to: usize },

    /// Array-move within one container's children, then renumber.
    ReorderInContainer {
        container_id: String,
        from: usize,
        to: usize,
    },
}

impl Mutation {
    /// Apply the mutation to a page.
    ///
    /// Returns `true` iff the tree changed. Mutations that target a
    /// missing id, an out-of-range index, or a non-container parent are
    /// silent no-ops.
    pub fn apply(&self, page: &mut Page, ids: &mut IdGenerator) -> bool {
        match self {
            Mutation::AddBlock { block } => {
                let mut block = block.clone();
                block.set_position(page.blocks.len());
                page.blocks.push(block);
                true
            }

            Mutation::AddToContainer {
                container_id,
                block,
            } => add_to_container(&mut page.blocks, container_id, block),

            Mutation::UpdateBlock { id, patch } => match find_block_mut(&mut page.blocks, id) {
                Some(block) => {
                    patch.apply_to(block);
                    true
                }
                None => false,
            },

            Mutation::RemoveBlock { id } => remove_in(&mut page.blocks, id).is_some(),

            Mutation::RemoveFromContainer { container_id, id } => {
                match container_children(&mut page.blocks, container_id) {
                    Some(children) => match children.iter().position(|b| b.id() == *id) {
                        Some(index) => {
                            children.remove(index);
                            true
                        }
                        None => false,
                    },
                    None => false,
                }
            }

            Mutation::DuplicateBlock { id } => duplicate_in(&mut page.blocks, id, ids),

            Mutation::DuplicateInContainer { container_id, id } => {
                match container_children(&mut page.blocks, container_id) {
                    Some(children) => duplicate_direct(children, id, ids),
                    None => false,
                }
            }

            Mutation::Reorder { from, to } => reorder(&mut page.blocks, *from, *to),

            Mutation::ReorderInContainer {
                container_id,
                from,
                to,
            } => match container_children(&mut page.blocks, container_id) {
                Some(children) => reorder(children, *from, *to),
                None => false,
            },
        }
    }
}

/// Depth-first pre-order search through the tree, containers included.
pub fn find_block<'a>(blocks: &'a [Block], id: &str) -> Option<&'a Block> {
    for block in blocks {
        if block.id() == id {
            return Some(block);
        }
        if let Some(children) = block.children() {
            if let Some(found) = find_block(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Mutable variant of [`find_block`].
pub fn find_block_mut<'a>(blocks: &'a mut [Block], id: &str) -> Option<&'a mut Block> {
    for block in blocks.iter_mut() {
        if block.id() == id {
            return Some(block);
        }
        if let Some(children) = block.children_mut() {
            if let Some(found) = find_block_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Remove the block with this id from whichever sequence holds it,
/// searching recursively, and return it.
fn remove_in(blocks: &mut Vec<Block>, id: &str) -> Option<Block> {
    if let Some(index) = blocks.iter().position(|b| b.id() == id) {
        return Some(blocks.remove(index));
    }

    for block in blocks.iter_mut() {
        if let Some(children) = block.children_mut() {
            if let Some(removed) = remove_in(children, id) {
                return Some(removed);
            }
        }
    }

    None
}

/// Locate the sequence containing `id` at any depth and insert a
/// re-identified clone immediately after the source.
fn duplicate_in(blocks: &mut Vec<Block>, id: &str, ids: &mut IdGenerator) -> bool {
    if duplicate_direct(blocks, id, ids) {
        return true;
    }

    for block in blocks.iter_mut() {
        if let Some(children) = block.children_mut() {
            if duplicate_in(children, id, ids) {
                return true;
            }
        }
    }

    false
}

/// Duplicate within one sequence only (no recursion).
fn duplicate_direct(blocks: &mut Vec<Block>, id: &str, ids: &mut IdGenerator) -> bool {
    let Some(index) = blocks.iter().position(|b| b.id() == id) else {
        return false;
    };

    let mut clone = blocks[index].clone();
    regenerate_ids(&mut clone, ids);
    clone.set_position(blocks.len());
    blocks.insert(index + 1, clone);
    true
}

/// Array-move: remove at `from`, insert at `to` in the shortened array,
/// then renumber every sibling's `position` to its new index.
fn reorder(blocks: &mut Vec<Block>, from: usize, to: usize) -> bool {
    if from >= blocks.len() || to >= blocks.len() {
        return false;
    }

    let moved = blocks.remove(from);
    blocks.insert(to, moved);

    for (index, block) in blocks.iter_mut().enumerate() {
        block.set_position(index);
    }

    true
}

fn add_to_container(blocks: &mut [Block], container_id: &str, block: &Block) -> bool {
    match container_children(blocks, container_id) {
        Some(children) => {
            let mut block = block.clone();
            block.set_position(0);
            children.push(block);
            true
        }
        None => false,
    }
}

/// Child sequence of the container with this id. None when the id is
/// missing or names a non-container.
fn container_children<'a>(
    blocks: &'a mut [Block],
    container_id: &str,
) -> Option<&'a mut Vec<Block>> {
    find_block_mut(blocks, container_id).and_then(|block| block.children_mut())
}

/// Assign fresh ids to a block and every descendant.
fn regenerate_ids(block: &mut Block, ids: &mut IdGenerator) {
    struct Reidentify<'a> {
        ids: &'a mut IdGenerator,
    }

    impl VisitorMut for Reidentify<'_> {
        fn visit_block_mut(&mut self, block: &mut Block) {
            block.set_id(self.ids.new_id());
            walk_block_mut(self, block);
        }
    }

    Reidentify { ids }.visit_block_mut(block);
}
