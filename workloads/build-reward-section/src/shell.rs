//! Page shell wrapping the section for server-rendered delivery.

use base_ui::html_escape;

use crate::content::PLAY_FAILURE_LABEL;
use crate::section::HOVER_REGION_ATTR;

/// Head content for the page.
#[derive(Debug, Clone, Default)]
pub struct PageHead {
    pub title: String,
    pub meta: Vec<(String, String)>,
    pub styles: Vec<String>,
}

impl PageHead {
    /// Create head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = format!("<title>{}</title>\n", html_escape(&self.title));
        for (name, content) in &self.meta {
            html.push_str(&format!(
                "<meta name=\"{}\" content=\"{}\">\n",
                html_escape(name),
                html_escape(content)
            ));
        }
        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }
        html
    }
}

/// Document around one or more rendered sections.
#[derive(Debug, Clone)]
pub struct PageShell {
    head: PageHead,
    scripts: Vec<String>,
}

impl PageShell {
    /// Create a shell with the given head.
    pub fn new(head: PageHead) -> Self {
        Self {
            head,
            scripts: Vec::new(),
        }
    }

    /// Append an inline script to the end of the body.
    pub fn with_script(mut self, js: impl Into<String>) -> Self {
        self.scripts.push(js.into());
        self
    }

    /// Everything before the sections.
    pub fn render_opening(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n{}</head>\n<body>\n<main>\n",
            self.head.render()
        )
    }

    /// Everything after the sections.
    pub fn render_closing(&self) -> String {
        let mut html = String::from("\n</main>\n");
        for js in &self.scripts {
            html.push_str(&format!("<script>{}</script>\n", js));
        }
        html.push_str("</body>\n</html>");
        html
    }

    /// Wrap rendered sections into a full document.
    pub fn render(&self, sections: &[&str]) -> String {
        let mut html = self.render_opening();
        for section in sections {
            html.push_str(section);
        }
        html.push_str(&self.render_closing());
        html
    }
}

/// Client script: pointer-enter on a hover region plays its video.
///
/// Rejections go to `console.error` under the same label the Rust
/// controller reports with.
pub fn hover_play_script() -> String {
    format!(
        r#"
document.querySelectorAll('[{attr}]').forEach((region) => {{
    region.addEventListener('mouseenter', () => {{
        const video = document.getElementById(region.getAttribute('{attr}'));
        if (!video || !video.isConnected) return;
        const request = video.play();
        if (request && request.catch) {{
            request.catch((error) => console.error('{label}', error));
        }}
    }});
}});
"#,
        attr = HOVER_REGION_ATTR,
        label = PLAY_FAILURE_LABEL
    )
}

/// Shell used by the workload.
pub fn create_shell() -> PageShell {
    let head = PageHead::new("Build and you will be rewarded | Base")
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta(
            "description",
            "Base builders are eligible for grants, marketing and retroactive public goods funding.",
        )
        .with_style(SECTION_STYLES);

    PageShell::new(head).with_script(hover_play_script())
}

const SECTION_STYLES: &str = r#"
body { margin: 0; background: #0a0b0d; color: #e3e7e9; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }
main { max-width: 1200px; margin: 0 auto; padding: 0 2rem; }
[data-hover-play] video { display: block; max-width: 100%; }
a[target="_blank"] { text-decoration: none; }
@media (prefers-reduced-motion: reduce) { [data-hover-play] video { display: none; } }
"#;
