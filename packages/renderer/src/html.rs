//! HTML compilation over dispatched presentation variants.

use tracing::trace;
use vellum_model::Document;

use crate::dispatcher::{render_document, RenderContext, RenderedChild, RenderedElement};

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

/// Compile a document to an HTML fragment.
pub fn compile_document(
    document: &Document,
    render_ctx: &RenderContext,
    options: CompileOptions,
) -> String {
    let rendered = render_document(document, render_ctx);
    trace!(blocks = rendered.len(), "compiling document to html");

    let mut ctx = Context::new(options);
    ctx.add_line("<div class=\"editor\">");
    ctx.indent();

    for element in &rendered {
        compile_element(element, &mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.get_output()
}

fn compile_element(element: &RenderedElement, ctx: &mut Context) {
    match element {
        RenderedElement::Code { children } => {
            let mut line = String::from("<pre><code>");
            compile_children(children, &mut line);
            line.push_str("</code></pre>");
            ctx.add_line(&line);
        }

        RenderedElement::Image {
            url,
            selected,
            show_delete,
        } => {
            let class = if *selected {
                "image-block selected"
            } else {
                "image-block"
            };
            ctx.add_line(&format!("<div class=\"{}\" contenteditable=\"false\">", class));
            ctx.indent();
            ctx.add_line(&format!("<img src=\"{}\">", escape_attr(url)));
            if *show_delete {
                ctx.add_line("<button class=\"image-delete\">delete</button>");
            }
            ctx.dedent();
            ctx.add_line("</div>");
        }

        RenderedElement::Paragraph { children } => {
            let mut line = String::from("<p>");
            compile_children(children, &mut line);
            line.push_str("</p>");
            ctx.add_line(&line);
        }
    }
}

fn compile_children(children: &[RenderedChild], out: &mut String) {
    for child in children {
        match child {
            RenderedChild::Text(text) => out.push_str(&escape_text(text)),
            RenderedChild::Element(el) => {
                // Nested blocks inside a text container are rare; compile
                // them inline without pretty indentation.
                let mut inner = Context::new(CompileOptions {
                    pretty: false,
                    indent: String::new(),
                });
                compile_element(el, &mut inner);
                out.push_str(&inner.get_output());
            }
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}
