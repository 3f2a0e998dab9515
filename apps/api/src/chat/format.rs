//! Display post-pass: turns the lightweight answer markup into HTML for the chat widget.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern is valid"));
static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("📧|📱|🌐|💼|🐙|🎯|🏗️|📚|🔧|🧠").expect("emoji pattern is valid")
});

/// Minimal HTML escaping so remote or user text cannot inject markup.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `**x**` → `<strong>`, `*x*` → `<em>`, newlines → `<br>`, known emoji wrapped
/// in `<span class="emoji">`.
pub fn format_for_display(content: &str) -> String {
    let escaped = escape_html(content);
    let bolded = BOLD_RE.replace_all(&escaped, "<strong>$1</strong>");
    let italic = ITALIC_RE.replace_all(&bolded, "<em>$1</em>");
    let broken = italic.replace('\n', "<br>");
    EMOJI_RE
        .replace_all(&broken, r#"<span class="emoji">$0</span>"#)
        .into_owned()
}
