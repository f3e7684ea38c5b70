use crate::{compile_to_react, component_name, CompileOptions};
use pagesmith_model::*;

fn page_with(slug: &str, blocks: Vec<Block>) -> Page {
    let mut page = Page::new("p-1".to_string(), "Home", slug);
    page.blocks = blocks;
    page
}

fn heading(id: &str, content: &str, level: u8, position: usize) -> Block {
    Block::Heading(HeadingBlock {
        id: id.to_string(),
        position,
        styles: None,
        content: content.to_string(),
        level,
        align: Alignment::Left,
    })
}

#[test]
fn test_component_name_from_slug() {
    assert_eq!(component_name("home"), "Home");
    assert_eq!(component_name("about-us"), "AboutUs");
    assert_eq!(component_name("my-landing-page"), "MyLandingPage");
    // Only hyphens are special-cased.
    assert_eq!(component_name("snake_case"), "Snake_case");
}

#[test]
fn test_compile_exports_component() {
    let page = page_with("about-us", vec![heading("h1", "Hi", 1, 0)]);

    let source = compile_to_react(&page, CompileOptions::default());

    assert!(source.contains("import React from 'react';"));
    assert!(source.contains("export const AboutUsPage = () => {"));
    assert!(source.contains("export default AboutUsPage;"));
    assert!(source.contains("<h1 className=\"text-4xl font-bold text-left\">{\"Hi\"}</h1>"));
}

#[test]
fn test_default_export_can_be_disabled() {
    let page = page_with("home", vec![]);
    let options = CompileOptions {
        include_default_export: false,
    };

    let source = compile_to_react(&page, options);

    assert!(source.contains("export const HomePage"));
    assert!(!source.contains("export default"));
}

#[test]
fn test_blocks_sorted_by_position() {
    let page = page_with(
        "home",
        vec![
            heading("h2", "Second", 2, 1),
            heading("h1", "First", 2, 0),
        ],
    );

    let source = compile_to_react(&page, CompileOptions::default());

    let first = source.find("First").unwrap();
    let second = source.find("Second").unwrap();
    assert!(first < second);
}

#[test]
fn test_string_literal_escaping() {
    let page = page_with(
        "home",
        vec![Block::Text(TextBlock {
            id: "t1".to_string(),
            position: 0,
            styles: None,
            content: "Line \"one\"\nLine\ttwo \\ done".to_string(),
            align: Alignment::Left,
        })],
    );

    let source = compile_to_react(&page, CompileOptions::default());

    assert!(source.contains(r#"{"Line \"one\"\nLine\ttwo \\ done"}"#));
}

#[test]
fn test_styles_render_as_camel_case_object() {
    let page = page_with(
        "home",
        vec![Block::Text(TextBlock {
            id: "t1".to_string(),
            position: 0,
            styles: Some(StyleSet {
                background_color: Some("#ffffff".to_string()),
                border_radius: Some("1rem".to_string()),
                font_weight: Some(FontWeight::Semibold),
                ..Default::default()
            }),
            content: "Styled".to_string(),
            align: Alignment::Center,
        })],
    );

    let source = compile_to_react(&page, CompileOptions::default());

    assert!(source.contains(
        "style={{ backgroundColor: \"#ffffff\", fontWeight: \"600\", borderRadius: \"1rem\" }}"
    ));
}

#[test]
fn test_video_boolean_props_only_when_true() {
    let page = page_with(
        "home",
        vec![Block::Video(VideoBlock {
            id: "v1".to_string(),
            position: 0,
            styles: None,
            url: "https://example.com/clip.mp4".to_string(),
            width: "100%".to_string(),
            autoplay: true,
            controls: false,
            loop_playback: true,
        })],
    );

    let source = compile_to_react(&page, CompileOptions::default());

    assert!(source.contains(" autoPlay"));
    assert!(source.contains(" loop"));
    assert!(!source.contains(" controls"));
}

#[test]
fn test_container_children_nested() {
    let page = page_with(
        "home",
        vec![Block::Container(ContainerBlock {
            id: "c1".to_string(),
            position: 0,
            styles: None,
            blocks: vec![heading("h1", "Inside", 3, 0)],
            layout: ContainerLayout::Horizontal,
            gap: Some("1.5rem".to_string()),
        })],
    );

    let source = compile_to_react(&page, CompileOptions::default());

    assert!(source.contains("<div className=\"flex flex-row flex-wrap\" style={{ gap: \"1.5rem\" }}>"));
    assert!(source.contains("<h3 className=\"text-2xl font-medium text-left\">{\"Inside\"}</h3>"));
}

#[test]
fn test_list_and_divider() {
    let page = page_with(
        "home",
        vec![
            Block::List(ListBlock {
                id: "l1".to_string(),
                position: 0,
                styles: None,
                items: vec!["One".to_string()],
                list_type: ListType::Unordered,
            }),
            Block::Divider(DividerBlock {
                id: "d1".to_string(),
                position: 1,
                styles: None,
                style: DividerStyle::Dotted,
                thickness: "1px".to_string(),
                color: "#ccc".to_string(),
            }),
        ],
    );

    let source = compile_to_react(&page, CompileOptions::default());

    assert!(source.contains("<ul className=\"list-disc list-inside\">"));
    assert!(source.contains("<li>{\"One\"}</li>"));
    assert!(source.contains("<hr style={{ border: \"none\", borderTop: \"1px dotted #ccc\" }} />"));
}

#[test]
fn test_card_button_falls_back_to_hash_url() {
    let page = page_with(
        "home",
        vec![Block::Card(CardBlock {
            id: "c1".to_string(),
            position: 0,
            styles: None,
            title: "Card".to_string(),
            content: "Body".to_string(),
            image_url: None,
            button_text: Some("Go".to_string()),
            button_url: None,
        })],
    );

    let source = compile_to_react(&page, CompileOptions::default());

    assert!(source.contains("<a href={\"#\""));
    assert!(source.contains("{\"Go\"}</a>"));
    assert!(!source.contains("<img"));
}

#[test]
fn test_spacer_and_image() {
    let page = page_with(
        "home",
        vec![
            Block::Spacer(SpacerBlock {
                id: "s1".to_string(),
                position: 0,
                styles: None,
                height: "4rem".to_string(),
            }),
            Block::Image(ImageBlock {
                id: "i1".to_string(),
                position: 1,
                styles: None,
                url: "https://example.com/a.png".to_string(),
                alt: "Photo".to_string(),
                width: "auto".to_string(),
            }),
        ],
    );

    let source = compile_to_react(&page, CompileOptions::default());

    assert!(source.contains("<div style={{ height: \"4rem\" }} />"));
    // width: auto emits no style prop at all.
    assert!(source.contains(
        "<img src={\"https://example.com/a.png\"} alt={\"Photo\"} className=\"rounded-md\" />"
    ));
}
