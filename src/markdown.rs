//! Markdown-to-HTML rendering for chat transcripts.
//!
//! A deterministic, stateless transform over the subset of markdown the
//! assistant emits: fenced code blocks, inline code, headings, bold, dashed
//! lists, and paragraph breaks. Fenced blocks are split out before anything
//! else runs and their bodies are HTML-escaped exactly once; the remaining
//! transforms never see code content.

use regex::Regex;
use std::sync::LazyLock;

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline-code pattern is constant"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern is constant"));

enum Segment<'a> {
    Text(&'a str),
    Code { lang: &'a str, body: &'a str },
}

/// Render markdown-ish text to an HTML fragment.
pub fn render(text: &str) -> String {
    let mut html = String::new();
    for segment in split_fences(text) {
        match segment {
            Segment::Code { lang, body } => html.push_str(&code_block(lang, body)),
            Segment::Text(t) => html.push_str(&prose(t)),
        }
    }
    let wrapped = format!("<p>{html}</p>");
    wrapped.replace("<p></p>", "").replace("<p><br></p>", "")
}

/// Split on triple-backtick fences. An opening fence is three backticks, an
/// optional word-only language tag, and a newline; anything else (including a
/// fence that never closes) stays plain text.
fn split_fences(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = text;
    while let Some((before, lang, body, after)) = find_fence(rest) {
        segments.push(Segment::Text(before));
        segments.push(Segment::Code { lang, body });
        rest = after;
    }
    segments.push(Segment::Text(rest));
    segments
}

fn find_fence(text: &str) -> Option<(&str, &str, &str, &str)> {
    let mut search_from = 0;
    while let Some(pos) = text[search_from..].find("```") {
        let start = search_from + pos;
        let after_ticks = &text[start + 3..];
        if let Some(nl) = after_ticks.find('\n') {
            let tag = &after_ticks[..nl];
            if tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                let body_and_rest = &after_ticks[nl + 1..];
                if let Some(end) = body_and_rest.find("```") {
                    let lang = if tag.is_empty() { "plaintext" } else { tag };
                    return Some((
                        &text[..start],
                        lang,
                        &body_and_rest[..end],
                        &body_and_rest[end + 3..],
                    ));
                }
            }
        }
        search_from = start + 3;
    }
    None
}

fn code_block(lang: &str, body: &str) -> String {
    let escaped = escape_html(body.trim());
    format!(
        "<div class=\"code-block\">\
<div class=\"code-header\"><span class=\"code-lang\">{lang}</span></div>\
<pre><code class=\"language-{lang}\">{escaped}</code></pre>\
</div>"
    )
}

fn prose(text: &str) -> String {
    let text = INLINE_CODE.replace_all(text, "<code class=\"inline-code\">$1</code>");
    let text = block_lines(&text);
    let text = BOLD.replace_all(&text, "<strong>$1</strong>");
    let text = text.replace("\n\n", "</p><p>");
    text.replace('\n', "<br>")
}

/// Line-level transforms: headings and list items. Adjacent list items are
/// collected into one `<ul>`; the newlines between them are consumed by the
/// container.
fn block_lines(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut list_run: Vec<String> = Vec::new();

    for line in text.split('\n') {
        if let Some(item) = line.strip_prefix("- ") {
            list_run.push(format!("<li>{item}</li>"));
            continue;
        }
        if !list_run.is_empty() {
            out.push(format!("<ul>{}</ul>", list_run.join("")));
            list_run.clear();
        }
        if let Some(heading) = line.strip_prefix("### ") {
            out.push(format!("<h3>{heading}</h3>"));
        } else if let Some(heading) = line.strip_prefix("## ") {
            out.push(format!("<h2>{heading}</h2>"));
        } else if let Some(heading) = line.strip_prefix("# ") {
            out.push(format!("<h1>{heading}</h1>"));
        } else {
            out.push(line.to_string());
        }
    }
    if !list_run.is_empty() {
        out.push(format!("<ul>{}</ul>", list_run.join("")));
    }
    out.join("\n")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_code_fence_content() {
        let html = render("```html\n<script>alert('x')</script>\n```");
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn code_fence_carries_its_language_tag() {
        let html = render("```javascript\nconst x = 1;\n```");
        assert!(html.contains("language-javascript"));
        assert!(html.contains("<span class=\"code-lang\">javascript</span>"));
    }

    #[test]
    fn untagged_fence_defaults_to_plaintext() {
        let html = render("```\nplain\n```");
        assert!(html.contains("language-plaintext"));
    }

    #[test]
    fn other_transforms_never_touch_code_bodies() {
        let html = render("```javascript\n# not a heading\n**not bold**\n- not a list\n```");
        assert!(html.contains("# not a heading"));
        assert!(html.contains("**not bold**"));
        assert!(html.contains("- not a list"));
        assert!(!html.contains("<h1>"));
        assert!(!html.contains("<strong>"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn unclosed_fence_stays_plain_text() {
        let html = render("before\n```javascript\nconst x = 1;");
        assert!(!html.contains("code-block"));
        assert!(html.contains("```javascript"));
    }

    #[test]
    fn renders_inline_code() {
        let html = render("call `map()` on it");
        assert!(html.contains("<code class=\"inline-code\">map()</code>"));
    }

    #[test]
    fn renders_heading_levels() {
        let html = render("# One\n## Two\n### Three");
        assert!(html.contains("<h1>One</h1>"));
        assert!(html.contains("<h2>Two</h2>"));
        assert!(html.contains("<h3>Three</h3>"));
    }

    #[test]
    fn renders_bold_spans() {
        let html = render("this is **important** stuff");
        assert!(html.contains("<strong>important</strong>"));
    }

    #[test]
    fn adjacent_list_items_share_one_container() {
        let html = render("- first\n- second\n\nafter");
        assert!(html.contains("<ul><li>first</li><li>second</li></ul>"));
        assert_eq!(html.matches("<ul>").count(), 1);
    }

    #[test]
    fn separated_lists_get_separate_containers() {
        let html = render("- a\n\ntext\n\n- b");
        assert_eq!(html.matches("<ul>").count(), 2);
    }

    #[test]
    fn double_newline_breaks_paragraphs() {
        let html = render("first\n\nsecond");
        assert_eq!(html, "<p>first</p><p>second</p>");
    }

    #[test]
    fn single_newline_becomes_a_line_break() {
        let html = render("first\nsecond");
        assert_eq!(html, "<p>first<br>second</p>");
    }

    #[test]
    fn drops_empty_paragraph_artifacts() {
        let html = render("\n\ntext");
        assert!(!html.contains("<p></p>"));
        assert!(html.contains("<p>text</p>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let input = "# Title\n\nSome `inline` and **bold**\n\n```js\nlet a = 1;\n```\n\n- one\n- two";
        assert_eq!(render(input), render(input));
    }
}
