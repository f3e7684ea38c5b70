use pagesmith_model::{
    Alignment, Block, CardBlock, ContainerBlock, ContainerLayout, ListType, Page, StyleSet,
};

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Shared stylesheet emitted into every exported document.
const SHARED_CSS: &str = r#"* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}
body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
  line-height: 1.6;
  color: #333;
  max-width: 1200px;
  margin: 0 auto;
  padding: 2rem;
}
h1 { font-size: 2.5rem; font-weight: bold; margin-bottom: 1.5rem; }
h2 { font-size: 2rem; font-weight: 600; margin-bottom: 1rem; }
h3 { font-size: 1.5rem; font-weight: 500; margin-bottom: 0.75rem; }
p { margin-bottom: 1rem; }
img { max-width: 100%; height: auto; border-radius: 0.5rem; }
ul, ol { margin-bottom: 1rem; padding-left: 1.5rem; }
video { max-width: 100%; }
.text-left { text-align: left; }
.text-center { text-align: center; }
.text-right { text-align: right; }
.flex { display: flex; }
.justify-start { justify-content: flex-start; }
.justify-center { justify-content: center; }
.justify-end { justify-content: flex-end; }
.container-vertical { display: flex; flex-direction: column; }
.container-horizontal { display: flex; flex-wrap: wrap; }
.card { border-radius: 0.5rem; }
.card-image { width: 100%; object-fit: cover; border-radius: 0.5rem; margin-bottom: 0.75rem; }
.btn {
  display: inline-block;
  padding: 0.5rem 1.5rem;
  border-radius: 0.375rem;
  text-decoration: none;
  font-weight: 500;
  transition: all 0.2s;
  border: none;
  cursor: pointer;
}
.btn-primary {
  background-color: #3b82f6;
  color: white;
}
.btn-primary:hover {
  background-color: #2563eb;
}
.btn-secondary {
  background-color: #6b7280;
  color: white;
}
.btn-secondary:hover {
  background-color: #4b5563;
}
.btn-outline {
  background-color: transparent;
  color: #3b82f6;
  border: 1px solid #3b82f6;
}
.btn-outline:hover {
  background-color: #3b82f6;
  color: white;
}"#;

/// Compile a page to a standalone HTML document.
///
/// Emission is total over all block variants; top-level blocks are
/// stable-sorted by `position` before emission, container children emit
/// in array order.
pub fn compile_to_html(page: &Page, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    compile_head(page, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line(&format!("<h1>{}</h1>", escape_html(&page.title)));

    let mut ordered: Vec<&Block> = page.blocks.iter().collect();
    ordered.sort_by_key(|block| block.position());

    for block in ordered {
        compile_block(block, &mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add_line("</html>");

    ctx.get_output()
}

fn compile_head(page: &Page, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&page.title)));

    ctx.add_line("<style>");
    ctx.indent();
    for line in SHARED_CSS.lines() {
        ctx.add_line(line);
    }
    ctx.dedent();
    ctx.add_line("</style>");

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_block(block: &Block, ctx: &mut Context) {
    match block {
        Block::Heading(b) => {
            let tag = format!("h{}", b.level.clamp(1, 3));
            ctx.add_line(&format!(
                "<{} class=\"text-{}\"{}>{}</{}>",
                tag,
                b.align.as_str(),
                style_attr(&[], b.styles.as_ref()),
                escape_html(&b.content),
                tag
            ));
        }

        Block::Text(b) => {
            ctx.add_line(&format!(
                "<p class=\"text-{}\"{}>{}</p>",
                b.align.as_str(),
                style_attr(&[], b.styles.as_ref()),
                escape_html(&b.content)
            ));
        }

        Block::Image(b) => {
            ctx.add_line("<div class=\"flex justify-center\">");
            ctx.indent();
            ctx.add_line(&format!(
                "<img src=\"{}\" alt=\"{}\"{} />",
                escape_html(&b.url),
                escape_html(&b.alt),
                style_attr(&width_pairs(&b.width), b.styles.as_ref())
            ));
            ctx.dedent();
            ctx.add_line("</div>");
        }

        Block::Button(b) => {
            ctx.add_line(&format!("<div class=\"flex {}\">", justify_class(b.align)));
            ctx.indent();
            ctx.add_line(&format!(
                "<a href=\"{}\" class=\"btn btn-{}\"{}>{}</a>",
                escape_html(&b.url),
                b.variant.as_str(),
                style_attr(&[], b.styles.as_ref()),
                escape_html(&b.text)
            ));
            ctx.dedent();
            ctx.add_line("</div>");
        }

        Block::Container(b) => compile_container(b, ctx),

        Block::Video(b) => {
            let mut flags = String::new();
            if b.autoplay {
                flags.push_str(" autoplay");
            }
            if b.controls {
                flags.push_str(" controls");
            }
            if b.loop_playback {
                flags.push_str(" loop");
            }
            ctx.add_line(&format!(
                "<video src=\"{}\"{}{}></video>",
                escape_html(&b.url),
                flags,
                style_attr(&width_pairs(&b.width), b.styles.as_ref())
            ));
        }

        Block::Divider(b) => {
            let rule = vec![
                ("border".to_string(), "none".to_string()),
                (
                    "border-top".to_string(),
                    format!("{} {} {}", b.thickness, b.style.as_css(), b.color),
                ),
            ];
            ctx.add_line(&format!(
                "<hr{} />",
                style_attr(&rule, b.styles.as_ref())
            ));
        }

        Block::List(b) => {
            let tag = match b.list_type {
                ListType::Ordered => "ol",
                ListType::Unordered => "ul",
            };
            ctx.add_line(&format!("<{}{}>", tag, style_attr(&[], b.styles.as_ref())));
            ctx.indent();
            for item in &b.items {
                ctx.add_line(&format!("<li>{}</li>", escape_html(item)));
            }
            ctx.dedent();
            ctx.add_line(&format!("</{}>", tag));
        }

        Block::Card(b) => compile_card(b, ctx),

        Block::Spacer(b) => {
            let height = vec![("height".to_string(), b.height.clone())];
            ctx.add_line(&format!(
                "<div{}></div>",
                style_attr(&height, b.styles.as_ref())
            ));
        }
    }
}

fn compile_container(container: &ContainerBlock, ctx: &mut Context) {
    let layout = match container.layout {
        ContainerLayout::Vertical => "container-vertical",
        ContainerLayout::Horizontal => "container-horizontal",
    };
    let mut extra = Vec::new();
    if let Some(gap) = &container.gap {
        extra.push(("gap".to_string(), gap.clone()));
    }

    ctx.add_line(&format!(
        "<div class=\"{}\"{}>",
        layout,
        style_attr(&extra, container.styles.as_ref())
    ));
    ctx.indent();
    for child in &container.blocks {
        compile_block(child, ctx);
    }
    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_card(card: &CardBlock, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<div class=\"card\"{}>",
        style_attr(&[], card.styles.as_ref())
    ));
    ctx.indent();

    if let Some(image_url) = &card.image_url {
        ctx.add_line(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"card-image\" />",
            escape_html(image_url),
            escape_html(&card.title)
        ));
    }

    ctx.add_line(&format!("<h3>{}</h3>", escape_html(&card.title)));
    ctx.add_line(&format!("<p>{}</p>", escape_html(&card.content)));

    if let Some(button_text) = &card.button_text {
        let url = card.button_url.as_deref().unwrap_or("#");
        ctx.add_line(&format!(
            "<a href=\"{}\" class=\"btn btn-primary\">{}</a>",
            escape_html(url),
            escape_html(button_text)
        ));
    }

    ctx.dedent();
    ctx.add_line("</div>");
}

fn justify_class(align: Alignment) -> &'static str {
    match align {
        Alignment::Left => "justify-start",
        Alignment::Center => "justify-center",
        Alignment::Right => "justify-end",
    }
}

/// `width: auto` means "natural size" and emits nothing.
fn width_pairs(width: &str) -> Vec<(String, String)> {
    if width == "auto" {
        Vec::new()
    } else {
        vec![("width".to_string(), width.to_string())]
    }
}

/// Render an inline `style` attribute from element-specific pairs plus
/// the block's flattened style set. Empty input renders nothing at all.
fn style_attr(extra: &[(String, String)], styles: Option<&StyleSet>) -> String {
    let mut pairs: Vec<(String, String)> = extra.to_vec();
    if let Some(styles) = styles {
        for (key, value) in styles.css_properties() {
            pairs.push((key.to_string(), value));
        }
    }

    if pairs.is_empty() {
        return String::new();
    }

    let css: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}: {};", key, escape_html(value)))
        .collect();
    format!(" style=\"{}\"", css.join(" "))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
