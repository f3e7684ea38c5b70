//! Visitor pattern for traversing the block tree.
//!
//! The walk functions recurse depth-first, pre-order, into container
//! children. Override `visit_block` to act on each node; call the walk
//! function from the override to keep descending.

use crate::block::Block;

/// Immutable traversal.
pub trait Visitor: Sized {
    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }
}

/// Mutable traversal, for in-place tree transformations.
pub trait VisitorMut: Sized {
    fn visit_block_mut(&mut self, block: &mut Block) {
        walk_block_mut(self, block);
    }
}

pub fn walk_blocks<V: Visitor>(visitor: &mut V, blocks: &[Block]) {
    for block in blocks {
        visitor.visit_block(block);
    }
}

pub fn walk_block<V: Visitor>(visitor: &mut V, block: &Block) {
    if let Some(children) = block.children() {
        for child in children {
            visitor.visit_block(child);
        }
    }
}

pub fn walk_blocks_mut<V: VisitorMut>(visitor: &mut V, blocks: &mut [Block]) {
    for block in blocks {
        visitor.visit_block_mut(block);
    }
}

pub fn walk_block_mut<V: VisitorMut>(visitor: &mut V, block: &mut Block) {
    if let Some(children) = block.children_mut() {
        for child in children {
            visitor.visit_block_mut(child);
        }
    }
}

/// Total number of blocks in the tree, containers included.
pub fn block_count(blocks: &[Block]) -> usize {
    struct Counter(usize);

    impl Visitor for Counter {
        fn visit_block(&mut self, block: &Block) {
            self.0 += 1;
            walk_block(self, block);
        }
    }

    let mut counter = Counter(0);
    walk_blocks(&mut counter, blocks);
    counter.0
}

/// Every id in the tree, depth-first pre-order.
pub fn collect_ids(blocks: &[Block]) -> Vec<String> {
    struct Ids(Vec<String>);

    impl Visitor for Ids {
        fn visit_block(&mut self, block: &Block) {
            self.0.push(block.id().to_string());
            walk_block(self, block);
        }
    }

    let mut ids = Ids(Vec::new());
    walk_blocks(&mut ids, blocks);
    ids.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;
    use crate::IdGenerator;

    #[test]
    fn test_count_and_ids_descend_into_containers() {
        let mut ids = IdGenerator::new("visitor-test");
        let mut container = factory::container(&mut ids);
        container
            .children_mut()
            .unwrap()
            .push(factory::heading(&mut ids));
        container
            .children_mut()
            .unwrap()
            .push(factory::text(&mut ids));
        let tree = vec![container, factory::spacer(&mut ids)];

        assert_eq!(block_count(&tree), 4);

        let collected = collect_ids(&tree);
        assert_eq!(collected.len(), 4);
        // Pre-order: container before its children, siblings in order.
        assert_eq!(collected[0], tree[0].id());
    }
}
