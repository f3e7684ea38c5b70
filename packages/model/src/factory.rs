//! Construction templates for each block variant.
//!
//! Every factory draws a fresh id and initializes `position` to 0; the
//! caller (the edit session) corrects `position` on insert. Defaults
//! mirror the designer's palette.

use crate::block::*;
use crate::id::IdGenerator;

pub fn heading(ids: &mut IdGenerator) -> Block {
    Block::Heading(HeadingBlock {
        id: ids.new_id(),
        position: 0,
        styles: None,
        content: "New Heading".to_string(),
        level: 1,
        align: Alignment::Left,
    })
}

pub fn text(ids: &mut IdGenerator) -> Block {
    Block::Text(TextBlock {
        id: ids.new_id(),
        position: 0,
        styles: None,
        content: "New text block".to_string(),
        align: Alignment::Left,
    })
}

pub fn image(ids: &mut IdGenerator) -> Block {
    Block::Image(ImageBlock {
        id: ids.new_id(),
        position: 0,
        styles: None,
        url: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d".to_string(),
        alt: "Image".to_string(),
        width: "100%".to_string(),
    })
}

pub fn button(ids: &mut IdGenerator) -> Block {
    Block::Button(ButtonBlock {
        id: ids.new_id(),
        position: 0,
        styles: None,
        text: "Click me".to_string(),
        url: "#".to_string(),
        variant: ButtonVariant::Primary,
        align: Alignment::Center,
    })
}

pub fn container(ids: &mut IdGenerator) -> Block {
    Block::Container(ContainerBlock {
        id: ids.new_id(),
        position: 0,
        styles: None,
        blocks: Vec::new(),
        layout: ContainerLayout::Vertical,
        gap: Some("1rem".to_string()),
    })
}

pub fn video(ids: &mut IdGenerator) -> Block {
    Block::Video(VideoBlock {
        id: ids.new_id(),
        position: 0,
        styles: None,
        url: String::new(),
        width: "100%".to_string(),
        autoplay: false,
        controls: true,
        loop_playback: false,
    })
}

pub fn divider(ids: &mut IdGenerator) -> Block {
    Block::Divider(DividerBlock {
        id: ids.new_id(),
        position: 0,
        styles: None,
        style: DividerStyle::Solid,
        thickness: "1px".to_string(),
        color: "#e5e7eb".to_string(),
    })
}

pub fn list(ids: &mut IdGenerator) -> Block {
    Block::List(ListBlock {
        id: ids.new_id(),
        position: 0,
        styles: None,
        items: vec!["List item".to_string()],
        list_type: ListType::Unordered,
    })
}

pub fn card(ids: &mut IdGenerator) -> Block {
    Block::Card(CardBlock {
        id: ids.new_id(),
        position: 0,
        styles: None,
        title: "Card Title".to_string(),
        content: "Card content goes here".to_string(),
        image_url: None,
        button_text: None,
        button_url: None,
    })
}

pub fn spacer(ids: &mut IdGenerator) -> Block {
    Block::Spacer(SpacerBlock {
        id: ids.new_id(),
        position: 0,
        styles: None,
        height: "2rem".to_string(),
    })
}

/// Factory dispatch by discriminant, for palette-style callers.
pub fn from_kind(kind: BlockKind, ids: &mut IdGenerator) -> Block {
    match kind {
        BlockKind::Heading => heading(ids),
        BlockKind::Text => text(ids),
        BlockKind::Image => image(ids),
        BlockKind::Button => button(ids),
        BlockKind::Container => container(ids),
        BlockKind::Video => video(ids),
        BlockKind::Divider => divider(ids),
        BlockKind::List => list(ids),
        BlockKind::Card => card(ids),
        BlockKind::Spacer => spacer(ids),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_factory() {
        let mut ids = IdGenerator::new("factory-test");
        for kind in BlockKind::ALL {
            let block = from_kind(kind, &mut ids);
            assert_eq!(block.kind(), kind);
            assert_eq!(block.position(), 0);
            assert!(block.styles().is_none());
        }
    }

    #[test]
    fn test_factories_produce_unique_ids() {
        let mut ids = IdGenerator::new("factory-test");
        let a = heading(&mut ids);
        let b = heading(&mut ids);
        assert_ne!(a.id(), b.id());
    }
}
