//! Page template presets.
//!
//! Each template materializes a complete block tree with fresh ids and
//! current timestamps. The edit session overrides id/title/slug when it
//! instantiates one.

use crate::block::*;
use crate::id::IdGenerator;
use crate::page::Page;
use crate::style::{FontWeight, StyleSet};
use chrono::Utc;

/// One named page preset.
pub struct PageTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    build: fn(&mut IdGenerator) -> Vec<Block>,
}

impl PageTemplate {
    /// Materialize the template into a page owned by the caller.
    pub fn instantiate(&self, ids: &mut IdGenerator, page_id: String, title: &str, slug: &str) -> Page {
        let now = Utc::now();
        Page {
            id: page_id,
            title: title.to_string(),
            slug: slug.to_string(),
            blocks: (self.build)(ids),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Registry of all built-in templates.
pub fn templates() -> &'static [PageTemplate] {
    TEMPLATES
}

static TEMPLATES: &[PageTemplate] = &[
    PageTemplate {
        id: "landing",
        name: "Landing Page",
        description: "Hero section, feature cards, and a call-to-action",
        build: landing_blocks,
    },
    PageTemplate {
        id: "about",
        name: "About Page",
        description: "Company story with team image and values",
        build: about_blocks,
    },
    PageTemplate {
        id: "contact",
        name: "Contact Page",
        description: "Contact channels and business hours",
        build: contact_blocks,
    },
    PageTemplate {
        id: "blog",
        name: "Blog Post",
        description: "Article layout with title, body, and images",
        build: blog_blocks,
    },
    PageTemplate {
        id: "blank",
        name: "Blank Page",
        description: "Start with a clean slate",
        build: blank_blocks,
    },
];

/// Look up a template by id.
pub fn find(id: &str) -> Option<&'static PageTemplate> {
    templates().iter().find(|t| t.id == id)
}

fn page_heading(ids: &mut IdGenerator, content: &str, level: u8, align: Alignment, position: usize, styles: StyleSet) -> Block {
    Block::Heading(HeadingBlock {
        id: ids.new_id(),
        position,
        styles: Some(styles),
        content: content.to_string(),
        level,
        align,
    })
}

fn page_text(ids: &mut IdGenerator, content: &str, align: Alignment, position: usize, styles: StyleSet) -> Block {
    Block::Text(TextBlock {
        id: ids.new_id(),
        position,
        styles: Some(styles),
        content: content.to_string(),
        align,
    })
}

fn feature_card(ids: &mut IdGenerator, title: &str, content: &str, image_url: Option<&str>, button: Option<(&str, &str)>, position: usize) -> Block {
    Block::Card(CardBlock {
        id: ids.new_id(),
        position,
        styles: Some(StyleSet {
            background_color: Some("#ffffff".to_string()),
            border_radius: Some("1rem".to_string()),
            padding: Some("1.5rem".to_string()),
            box_shadow: Some("0 4px 6px -1px rgba(0, 0, 0, 0.1)".to_string()),
            ..Default::default()
        }),
        title: title.to_string(),
        content: content.to_string(),
        image_url: image_url.map(str::to_string),
        button_text: button.map(|(text, _)| text.to_string()),
        button_url: button.map(|(_, url)| url.to_string()),
    })
}

fn landing_blocks(ids: &mut IdGenerator) -> Vec<Block> {
    vec![
        page_heading(
            ids,
            "Welcome to Our Platform",
            1,
            Alignment::Center,
            0,
            StyleSet {
                font_size: Some("clamp(2rem, 5vw, 3.5rem)".to_string()),
                font_weight: Some(FontWeight::Bold),
                margin: Some("3rem 0 1.5rem 0".to_string()),
                text_color: Some("#1a1a1a".to_string()),
                ..Default::default()
            },
        ),
        page_text(
            ids,
            "Build beautiful websites without coding. Professional drag & drop editor with real-time preview and export capabilities.",
            Alignment::Center,
            1,
            StyleSet {
                font_size: Some("clamp(1rem, 2vw, 1.25rem)".to_string()),
                margin: Some("0 0 2.5rem 0".to_string()),
                text_color: Some("#4b5563".to_string()),
                ..Default::default()
            },
        ),
        Block::Button(ButtonBlock {
            id: ids.new_id(),
            position: 2,
            styles: Some(StyleSet {
                margin: Some("0 0 4rem 0".to_string()),
                font_size: Some("1.125rem".to_string()),
                padding: Some("0.75rem 2rem".to_string()),
                ..Default::default()
            }),
            text: "Get Started".to_string(),
            url: "#".to_string(),
            variant: ButtonVariant::Primary,
            align: Alignment::Center,
        }),
        Block::Spacer(SpacerBlock {
            id: ids.new_id(),
            position: 3,
            styles: None,
            height: "4rem".to_string(),
        }),
        page_heading(
            ids,
            "Why Choose Us",
            2,
            Alignment::Center,
            4,
            StyleSet {
                font_size: Some("clamp(1.75rem, 4vw, 2.5rem)".to_string()),
                font_weight: Some(FontWeight::Semibold),
                margin: Some("0 0 3rem 0".to_string()),
                text_color: Some("#1a1a1a".to_string()),
                ..Default::default()
            },
        ),
        Block::Container(ContainerBlock {
            id: ids.new_id(),
            position: 5,
            styles: Some(StyleSet {
                margin: Some("0 0 4rem 0".to_string()),
                padding: Some("0.5rem".to_string()),
                ..Default::default()
            }),
            blocks: vec![
                feature_card(
                    ids,
                    "Lightning Fast",
                    "Create stunning pages in minutes with our intuitive drag & drop interface",
                    Some("https://images.unsplash.com/photo-1551650975-87deedd944c3?w=400"),
                    None,
                    0,
                ),
                feature_card(
                    ids,
                    "Fully Customizable",
                    "Complete control over design with advanced styling options and responsive layouts",
                    Some("https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400"),
                    None,
                    1,
                ),
                feature_card(
                    ids,
                    "Export Ready",
                    "Export your pages as HTML or React components for seamless integration",
                    Some("https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=400"),
                    None,
                    2,
                ),
            ],
            layout: ContainerLayout::Horizontal,
            gap: Some("1.5rem".to_string()),
        }),
    ]
}

fn about_blocks(ids: &mut IdGenerator) -> Vec<Block> {
    vec![
        page_heading(
            ids,
            "About Us",
            1,
            Alignment::Center,
            0,
            StyleSet {
                font_size: Some("clamp(2rem, 5vw, 3.5rem)".to_string()),
                font_weight: Some(FontWeight::Bold),
                margin: Some("3rem 0 2rem 0".to_string()),
                text_color: Some("#1a1a1a".to_string()),
                ..Default::default()
            },
        ),
        Block::Image(ImageBlock {
            id: ids.new_id(),
            position: 1,
            styles: Some(StyleSet {
                border_radius: Some("1rem".to_string()),
                margin: Some("0 0 3rem 0".to_string()),
                box_shadow: Some("0 10px 15px -3px rgba(0, 0, 0, 0.1)".to_string()),
                ..Default::default()
            }),
            url: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=1200".to_string(),
            alt: "Our Team".to_string(),
            width: "100%".to_string(),
        }),
        page_heading(
            ids,
            "Our Story",
            2,
            Alignment::Left,
            2,
            StyleSet {
                font_size: Some("clamp(1.5rem, 3vw, 2rem)".to_string()),
                font_weight: Some(FontWeight::Semibold),
                margin: Some("0 0 1rem 0".to_string()),
                text_color: Some("#1a1a1a".to_string()),
                ..Default::default()
            },
        ),
        page_text(
            ids,
            "We are a team of professionals dedicated to creating innovative solutions for businesses. Our mission is to help companies achieve success through modern technology and creative thinking.",
            Alignment::Left,
            3,
            StyleSet {
                font_size: Some("clamp(1rem, 2vw, 1.125rem)".to_string()),
                margin: Some("0 0 2rem 0".to_string()),
                text_color: Some("#4b5563".to_string()),
                ..Default::default()
            },
        ),
        Block::Divider(DividerBlock {
            id: ids.new_id(),
            position: 4,
            styles: Some(StyleSet {
                margin: Some("3rem 0".to_string()),
                ..Default::default()
            }),
            style: DividerStyle::Solid,
            thickness: "2px".to_string(),
            color: "#e5e7eb".to_string(),
        }),
        page_heading(
            ids,
            "Our Values",
            2,
            Alignment::Left,
            5,
            StyleSet {
                font_size: Some("clamp(1.5rem, 3vw, 2rem)".to_string()),
                font_weight: Some(FontWeight::Semibold),
                margin: Some("0 0 1.5rem 0".to_string()),
                text_color: Some("#1a1a1a".to_string()),
                ..Default::default()
            },
        ),
        Block::List(ListBlock {
            id: ids.new_id(),
            position: 6,
            styles: Some(StyleSet {
                font_size: Some("clamp(1rem, 2vw, 1.125rem)".to_string()),
                margin: Some("0 0 2rem 0".to_string()),
                text_color: Some("#4b5563".to_string()),
                ..Default::default()
            }),
            items: vec![
                "Innovation and Creativity - We push boundaries and explore new possibilities".to_string(),
                "Quality and Reliability - Excellence in every project we deliver".to_string(),
                "Client-Focused - Your success is our priority".to_string(),
                "Team Collaboration - Together we achieve more".to_string(),
            ],
            list_type: ListType::Unordered,
        }),
    ]
}

fn contact_blocks(ids: &mut IdGenerator) -> Vec<Block> {
    vec![
        page_heading(
            ids,
            "Get in Touch",
            1,
            Alignment::Center,
            0,
            StyleSet {
                font_size: Some("clamp(2rem, 5vw, 3.5rem)".to_string()),
                font_weight: Some(FontWeight::Bold),
                margin: Some("3rem 0 1.5rem 0".to_string()),
                text_color: Some("#1a1a1a".to_string()),
                ..Default::default()
            },
        ),
        page_text(
            ids,
            "We're always happy to answer your questions. Reach out to us through any of the following channels.",
            Alignment::Center,
            1,
            StyleSet {
                font_size: Some("clamp(1rem, 2vw, 1.25rem)".to_string()),
                margin: Some("0 0 3rem 0".to_string()),
                text_color: Some("#4b5563".to_string()),
                ..Default::default()
            },
        ),
        Block::Container(ContainerBlock {
            id: ids.new_id(),
            position: 2,
            styles: Some(StyleSet {
                margin: Some("0 0 4rem 0".to_string()),
                padding: Some("0.5rem".to_string()),
                ..Default::default()
            }),
            blocks: vec![
                feature_card(
                    ids,
                    "Email Us",
                    "Send us an email and we'll respond within 24 hours",
                    None,
                    Some(("Send Email", "mailto:info@example.com")),
                    0,
                ),
                feature_card(
                    ids,
                    "Call Us",
                    "Speak directly with our team during business hours",
                    None,
                    Some(("Call Now", "tel:+1234567890")),
                    1,
                ),
                feature_card(
                    ids,
                    "Visit Us",
                    "123 Business Street, Suite 100, City, State 12345",
                    None,
                    None,
                    2,
                ),
            ],
            layout: ContainerLayout::Horizontal,
            gap: Some("1.5rem".to_string()),
        }),
        Block::Spacer(SpacerBlock {
            id: ids.new_id(),
            position: 3,
            styles: None,
            height: "3rem".to_string(),
        }),
        page_heading(
            ids,
            "Business Hours",
            2,
            Alignment::Center,
            4,
            StyleSet {
                font_size: Some("clamp(1.5rem, 3vw, 2rem)".to_string()),
                font_weight: Some(FontWeight::Semibold),
                margin: Some("0 0 2rem 0".to_string()),
                text_color: Some("#1a1a1a".to_string()),
                ..Default::default()
            },
        ),
        Block::List(ListBlock {
            id: ids.new_id(),
            position: 5,
            styles: Some(StyleSet {
                font_size: Some("clamp(1rem, 2vw, 1.125rem)".to_string()),
                margin: Some("0 auto 2rem auto".to_string()),
                text_color: Some("#4b5563".to_string()),
                ..Default::default()
            }),
            items: vec![
                "Monday - Friday: 9:00 AM - 6:00 PM".to_string(),
                "Saturday: 10:00 AM - 4:00 PM".to_string(),
                "Sunday: Closed".to_string(),
            ],
            list_type: ListType::Ordered,
        }),
    ]
}

fn blog_blocks(ids: &mut IdGenerator) -> Vec<Block> {
    let published = format!("Published on {}", Utc::now().format("%B %d, %Y"));
    vec![
        page_heading(
            ids,
            "The Future of Web Development",
            1,
            Alignment::Left,
            0,
            StyleSet {
                font_size: Some("clamp(1.75rem, 4vw, 2.5rem)".to_string()),
                font_weight: Some(FontWeight::Bold),
                margin: Some("2rem 0 0.5rem 0".to_string()),
                text_color: Some("#1a1a1a".to_string()),
                ..Default::default()
            },
        ),
        page_text(
            ids,
            &published,
            Alignment::Left,
            1,
            StyleSet {
                font_size: Some("0.875rem".to_string()),
                text_color: Some("#6b7280".to_string()),
                margin: Some("0 0 2rem 0".to_string()),
                ..Default::default()
            },
        ),
        Block::Image(ImageBlock {
            id: ids.new_id(),
            position: 2,
            styles: Some(StyleSet {
                border_radius: Some("0.75rem".to_string()),
                margin: Some("0 0 2.5rem 0".to_string()),
                box_shadow: Some("0 10px 15px -3px rgba(0, 0, 0, 0.1)".to_string()),
                ..Default::default()
            }),
            url: "https://images.unsplash.com/photo-1499750310107-5fef28a66643?w=1200".to_string(),
            alt: "Blog featured image".to_string(),
            width: "100%".to_string(),
        }),
        page_text(
            ids,
            "This is the introduction to your article. Here you can briefly describe the topic and engage your readers with compelling content.",
            Alignment::Left,
            3,
            StyleSet {
                font_size: Some("clamp(1rem, 2vw, 1.25rem)".to_string()),
                font_weight: Some(FontWeight::Medium),
                margin: Some("0 0 2rem 0".to_string()),
                text_color: Some("#1a1a1a".to_string()),
                ..Default::default()
            },
        ),
        page_heading(
            ids,
            "Main Content Section",
            2,
            Alignment::Left,
            4,
            StyleSet {
                font_size: Some("clamp(1.5rem, 3vw, 2rem)".to_string()),
                font_weight: Some(FontWeight::Semibold),
                margin: Some("2.5rem 0 1rem 0".to_string()),
                text_color: Some("#1a1a1a".to_string()),
                ..Default::default()
            },
        ),
        page_text(
            ids,
            "This is the main body of your article. Elaborate on your topic, share insights, provide examples, and offer valuable information to your readers.",
            Alignment::Left,
            5,
            StyleSet {
                font_size: Some("clamp(1rem, 2vw, 1.125rem)".to_string()),
                margin: Some("0 0 1.5rem 0".to_string()),
                text_color: Some("#4b5563".to_string()),
                ..Default::default()
            },
        ),
        Block::Divider(DividerBlock {
            id: ids.new_id(),
            position: 6,
            styles: Some(StyleSet {
                margin: Some("3rem 0".to_string()),
                ..Default::default()
            }),
            style: DividerStyle::Dashed,
            thickness: "1px".to_string(),
            color: "#e5e7eb".to_string(),
        }),
        page_heading(
            ids,
            "Conclusion",
            2,
            Alignment::Left,
            7,
            StyleSet {
                font_size: Some("clamp(1.5rem, 3vw, 2rem)".to_string()),
                font_weight: Some(FontWeight::Semibold),
                margin: Some("2.5rem 0 1rem 0".to_string()),
                text_color: Some("#1a1a1a".to_string()),
                ..Default::default()
            },
        ),
        page_text(
            ids,
            "Wrap up your article with a strong conclusion that summarizes your main points and gives readers actionable takeaways.",
            Alignment::Left,
            8,
            StyleSet {
                font_size: Some("clamp(1rem, 2vw, 1.125rem)".to_string()),
                margin: Some("0 0 2rem 0".to_string()),
                text_color: Some("#4b5563".to_string()),
                ..Default::default()
            },
        ),
    ]
}

fn blank_blocks(_ids: &mut IdGenerator) -> Vec<Block> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::collect_ids;
    use std::collections::HashSet;

    #[test]
    fn test_registry_contains_blank() {
        assert!(find("blank").is_some());
        assert!(find("landing").is_some());
        assert!(find("missing").is_none());
    }

    #[test]
    fn test_instantiate_overrides_metadata() {
        let mut ids = IdGenerator::new("template-test");
        let template = find("about").unwrap();
        let page = template.instantiate(&mut ids, "p-1".to_string(), "Team", "team");

        assert_eq!(page.id, "p-1");
        assert_eq!(page.title, "Team");
        assert_eq!(page.slug, "team");
        assert!(!page.blocks.is_empty());
    }

    #[test]
    fn test_template_ids_are_unique() {
        let mut ids = IdGenerator::new("template-test");
        for template in templates() {
            let page = template.instantiate(&mut ids, "p".to_string(), "T", "t");
            let all = collect_ids(&page.blocks);
            let unique: HashSet<&String> = all.iter().collect();
            assert_eq!(all.len(), unique.len(), "duplicate ids in {}", template.id);
        }
    }

    #[test]
    fn test_template_positions_match_index() {
        let mut ids = IdGenerator::new("template-test");
        let page = find("landing")
            .unwrap()
            .instantiate(&mut ids, "p".to_string(), "T", "t");
        for (index, block) in page.blocks.iter().enumerate() {
            assert_eq!(block.position(), index);
        }
    }
}
