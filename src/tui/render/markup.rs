use once_cell::sync::Lazy;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use regex::Regex;

static INLINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(.+?)\*\*|~~(.+?)~~").expect("inline markup regex is valid")
});

const BULLET: &str = "\u{2022} ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Bold,
    Strike,
}

/// Split one line into runs of plain, `**bold**` and `~~struck~~` text.
/// Unclosed markers stay literal.
pub fn parse_inline(text: &str) -> Vec<(String, Emphasis)> {
    let mut runs = Vec::new();
    let mut last_end = 0;
    for caps in INLINE_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last_end {
            runs.push((text[last_end..whole.start()].to_string(), Emphasis::Plain));
        }
        if let Some(bold) = caps.get(1) {
            runs.push((bold.as_str().to_string(), Emphasis::Bold));
        } else if let Some(strike) = caps.get(2) {
            runs.push((strike.as_str().to_string(), Emphasis::Strike));
        }
        last_end = whole.end();
    }
    if last_end < text.len() {
        runs.push((text[last_end..].to_string(), Emphasis::Plain));
    }
    runs
}

/// Description text as styled lines: inline emphasis plus `- ` bullets
pub fn render_markup(description: &str, base: Style) -> Vec<Line<'static>> {
    description
        .lines()
        .map(|line| {
            let mut spans = Vec::new();
            let body = match line.strip_prefix("- ") {
                Some(rest) => {
                    spans.push(Span::styled(BULLET, base));
                    rest
                }
                None => line,
            };
            for (text, emphasis) in parse_inline(body) {
                let style = match emphasis {
                    Emphasis::Plain => base,
                    Emphasis::Bold => base.add_modifier(Modifier::BOLD),
                    Emphasis::Strike => base.add_modifier(Modifier::CROSSED_OUT),
                };
                spans.push(Span::styled(text, style));
            }
            Line::from(spans)
        })
        .collect()
}
