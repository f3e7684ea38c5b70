use crate::context::{CompileOptions, CompilerContext};
use pagesmith_model::{
    Alignment, Block, ButtonVariant, CardBlock, ContainerBlock, ContainerLayout, ListType, Page,
    StyleSet,
};

/// Compile a page to React component source.
///
/// One exported unit per page: `export const <Name>Page`. Top-level
/// blocks are stable-sorted by `position` first; container children emit
/// in array order. Emission is total over all block variants.
pub fn compile_to_react(page: &Page, options: CompileOptions) -> String {
    let ctx = CompilerContext::new(options);
    let name = format!("{}Page", component_name(&page.slug));

    ctx.add_line("import React from 'react';");
    ctx.blank_line();

    ctx.add_line(&format!("export const {} = () => {{", name));
    ctx.indent();
    ctx.add_line("return (");
    ctx.indent();
    ctx.add_line("<div className=\"min-h-screen bg-background\">");
    ctx.indent();
    ctx.add_line("<main className=\"max-w-4xl mx-auto py-12 px-4\">");
    ctx.indent();
    ctx.add_line(&format!(
        "<h1 className=\"text-4xl font-bold mb-8\">{}</h1>",
        text_expr(&page.title)
    ));
    ctx.add_line("<div className=\"space-y-4\">");
    ctx.indent();

    let mut ordered: Vec<&Block> = page.blocks.iter().collect();
    ordered.sort_by_key(|block| block.position());
    for block in ordered {
        compile_block(block, &ctx);
    }

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</main>");
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line(");");
    ctx.dedent();
    ctx.add_line("};");

    if ctx.options.include_default_export {
        ctx.blank_line();
        ctx.add_line(&format!("export default {};", name));
    }

    ctx.get_output()
}

/// Export identifier derived from a slug: split on hyphens, capitalize
/// each segment. No other separators are special-cased.
pub fn component_name(slug: &str) -> String {
    slug.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn compile_block(block: &Block, ctx: &CompilerContext) {
    match block {
        Block::Heading(b) => {
            let size = match b.level.clamp(1, 3) {
                1 => "text-4xl font-bold",
                2 => "text-3xl font-semibold",
                _ => "text-2xl font-medium",
            };
            ctx.add_line(&format!(
                "<h{} className=\"{} {}\"{}>{}</h{}>",
                b.level.clamp(1, 3),
                size,
                align_class(b.align),
                style_prop(&[], b.styles.as_ref()),
                text_expr(&b.content),
                b.level.clamp(1, 3)
            ));
        }

        Block::Text(b) => {
            ctx.add_line(&format!(
                "<p className=\"text-base {}\"{}>{}</p>",
                align_class(b.align),
                style_prop(&[], b.styles.as_ref()),
                text_expr(&b.content)
            ));
        }

        Block::Image(b) => {
            ctx.add_line("<div className=\"flex justify-center\">");
            ctx.indent();
            ctx.add_line(&format!(
                "<img src={} alt={} className=\"rounded-md\"{} />",
                text_expr(&b.url),
                text_expr(&b.alt),
                style_prop(&width_pairs(&b.width), b.styles.as_ref())
            ));
            ctx.dedent();
            ctx.add_line("</div>");
        }

        Block::Button(b) => {
            ctx.add_line(&format!(
                "<div className=\"flex {}\">",
                justify_class(b.align)
            ));
            ctx.indent();
            ctx.add_line(&format!(
                "<a href={} className=\"{}\"{}>{}</a>",
                text_expr(&b.url),
                button_classes(b.variant),
                style_prop(&[], b.styles.as_ref()),
                text_expr(&b.text)
            ));
            ctx.dedent();
            ctx.add_line("</div>");
        }

        Block::Container(b) => compile_container(b, ctx),

        Block::Video(b) => {
            let mut flags = String::new();
            if b.autoplay {
                flags.push_str(" autoPlay");
            }
            if b.controls {
                flags.push_str(" controls");
            }
            if b.loop_playback {
                flags.push_str(" loop");
            }
            ctx.add_line(&format!(
                "<video src={}{}{} />",
                text_expr(&b.url),
                style_prop(&width_pairs(&b.width), b.styles.as_ref()),
                flags
            ));
        }

        Block::Divider(b) => {
            let rule = vec![
                ("border", "none".to_string()),
                (
                    "borderTop",
                    format!("{} {} {}", b.thickness, b.style.as_css(), b.color),
                ),
            ];
            ctx.add_line(&format!("<hr{} />", style_prop(&rule, b.styles.as_ref())));
        }

        Block::List(b) => {
            let (tag, classes) = match b.list_type {
                ListType::Ordered => ("ol", "list-decimal list-inside"),
                ListType::Unordered => ("ul", "list-disc list-inside"),
            };
            ctx.add_line(&format!(
                "<{} className=\"{}\"{}>",
                tag,
                classes,
                style_prop(&[], b.styles.as_ref())
            ));
            ctx.indent();
            for item in &b.items {
                ctx.add_line(&format!("<li>{}</li>", text_expr(item)));
            }
            ctx.dedent();
            ctx.add_line(&format!("</{}>", tag));
        }

        Block::Card(b) => compile_card(b, ctx),

        Block::Spacer(b) => {
            let height = vec![("height", b.height.clone())];
            ctx.add_line(&format!(
                "<div{} />",
                style_prop(&height, b.styles.as_ref())
            ));
        }
    }
}

fn compile_container(container: &ContainerBlock, ctx: &CompilerContext) {
    let layout = match container.layout {
        ContainerLayout::Vertical => "flex flex-col",
        ContainerLayout::Horizontal => "flex flex-row flex-wrap",
    };
    let mut extra = Vec::new();
    if let Some(gap) = &container.gap {
        extra.push(("gap", gap.clone()));
    }

    ctx.add_line(&format!(
        "<div className=\"{}\"{}>",
        layout,
        style_prop(&extra, container.styles.as_ref())
    ));
    ctx.indent();
    for child in &container.blocks {
        compile_block(child, ctx);
    }
    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_card(card: &CardBlock, ctx: &CompilerContext) {
    ctx.add_line(&format!(
        "<div className=\"rounded-lg border bg-card p-6 shadow-sm\"{}>",
        style_prop(&[], card.styles.as_ref())
    ));
    ctx.indent();

    if let Some(image_url) = &card.image_url {
        ctx.add_line(&format!(
            "<img src={} alt={} className=\"w-full rounded-md mb-3\" />",
            text_expr(image_url),
            text_expr(&card.title)
        ));
    }

    ctx.add_line(&format!(
        "<h3 className=\"text-xl font-semibold mb-2\">{}</h3>",
        text_expr(&card.title)
    ));
    ctx.add_line(&format!(
        "<p className=\"text-muted-foreground\">{}</p>",
        text_expr(&card.content)
    ));

    if let Some(button_text) = &card.button_text {
        let url = card.button_url.as_deref().unwrap_or("#");
        ctx.add_line(&format!(
            "<a href={} className=\"{}\">{}</a>",
            text_expr(url),
            button_classes(ButtonVariant::Primary),
            text_expr(button_text)
        ));
    }

    ctx.dedent();
    ctx.add_line("</div>");
}

fn align_class(align: Alignment) -> &'static str {
    match align {
        Alignment::Left => "text-left",
        Alignment::Center => "text-center",
        Alignment::Right => "text-right",
    }
}

fn justify_class(align: Alignment) -> &'static str {
    match align {
        Alignment::Left => "justify-start",
        Alignment::Center => "justify-center",
        Alignment::Right => "justify-end",
    }
}

fn button_classes(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => {
            "px-4 py-2 rounded-md bg-primary text-primary-foreground hover:bg-primary/90 transition-colors"
        }
        ButtonVariant::Secondary => {
            "px-4 py-2 rounded-md bg-secondary text-secondary-foreground hover:bg-secondary/80 transition-colors"
        }
        ButtonVariant::Outline => {
            "px-4 py-2 rounded-md border border-primary text-primary hover:bg-primary/10 transition-colors"
        }
    }
}

/// `width: auto` means "natural size" and emits nothing.
fn width_pairs(width: &str) -> Vec<(&'static str, String)> {
    if width == "auto" {
        Vec::new()
    } else {
        vec![("width", width.to_string())]
    }
}

/// JSX expression container holding a double-quoted string literal.
fn text_expr(text: &str) -> String {
    format!("{{\"{}\"}}", escape_js_string(text))
}

/// Render a `style={{ ... }}` prop from element-specific pairs plus the
/// block's flattened style set as a camelCase object literal. Empty
/// input renders nothing at all.
fn style_prop(extra: &[(&'static str, String)], styles: Option<&StyleSet>) -> String {
    let mut pairs: Vec<(String, String)> = extra
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();
    if let Some(styles) = styles {
        for (key, value) in styles.css_properties() {
            pairs.push((camel_case(key), value));
        }
    }

    if pairs.is_empty() {
        return String::new();
    }

    let entries: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}: \"{}\"", key, escape_js_string(value)))
        .collect();
    format!(" style={{{{ {} }}}}", entries.join(", "))
}

/// kebab-case CSS property name to camelCase object key.
fn camel_case(kebab: &str) -> String {
    let mut segments = kebab.split('-');
    let mut out = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Escape for embedding inside a double-quoted JS string literal. This
/// is not HTML escaping: the two target grammars overlap but are not the
/// same concern.
fn escape_js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}
