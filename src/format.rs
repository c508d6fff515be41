// src/format.rs

//! Article content formatter.
//!
//! Converts the constrained markdown-like syntax used in article bodies
//! into sanitized HTML fragments. Implemented as an explicit small-step
//! transformer: lines are tokenized, classified, and emitted in a fixed
//! precedence order (headings, fenced code blocks, inline code, list
//! items, status lines, links, bold, paragraphs).
//!
//! The transformation is a pure function of its input: no I/O, no state.
//! It is NOT idempotent (a second pass would wrap emitted tags again), so
//! callers apply it exactly once per render. Malformed constructs
//! (unclosed fences, broken link syntax) pass through literally.

/// Block-level classification of a single input line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Heading(u8, &'a str),
    FenceOpen(&'a str),
    ListItem(&'a str),
    Checked(&'a str),
    Unchecked(&'a str),
    Blank,
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    if let Some(rest) = line.strip_prefix("#### ") {
        Line::Heading(4, rest)
    } else if let Some(rest) = line.strip_prefix("### ") {
        Line::Heading(3, rest)
    } else if let Some(rest) = line.strip_prefix("## ") {
        Line::Heading(2, rest)
    } else if let Some(rest) = line.strip_prefix("```") {
        Line::FenceOpen(rest.trim())
    } else if let Some(rest) = line.strip_prefix("- ") {
        Line::ListItem(rest)
    } else if let Some(rest) = line.strip_prefix("✅ ") {
        Line::Checked(rest)
    } else if let Some(rest) = line.strip_prefix("❌ ") {
        Line::Unchecked(rest)
    } else if line.trim().is_empty() {
        Line::Blank
    } else {
        Line::Text(line)
    }
}

/// Format raw article content into sanitized HTML.
///
/// Empty or whitespace-only input yields an empty string.
pub fn format_content(content: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let mut blocks: Vec<String> = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut list: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        match classify(lines[i]) {
            Line::FenceOpen(lang) => {
                // A fence only forms a code block if a closing fence exists;
                // otherwise the line passes through literally.
                if let Some(close) = lines[i + 1..].iter().position(|l| l.starts_with("```")) {
                    flush_paragraph(&mut blocks, &mut paragraph);
                    flush_list(&mut blocks, &mut list);
                    let body = lines[i + 1..i + 1 + close].join("\n");
                    blocks.push(format!(
                        "<pre><code class=\"language-{}\">{}</code></pre>",
                        escape_html(lang),
                        escape_html(&body)
                    ));
                    i += close + 2;
                    continue;
                }
                paragraph.push(lines[i]);
            }
            Line::Heading(level, text) => {
                flush_paragraph(&mut blocks, &mut paragraph);
                flush_list(&mut blocks, &mut list);
                blocks.push(format!("<h{level}>{}</h{level}>", inline(text)));
            }
            Line::ListItem(text) => {
                flush_paragraph(&mut blocks, &mut paragraph);
                list.push(text);
            }
            Line::Checked(text) => {
                flush_paragraph(&mut blocks, &mut paragraph);
                flush_list(&mut blocks, &mut list);
                blocks.push(format!(
                    "<div class=\"checkbox checked\"><i class=\"fas fa-check\"></i> {}</div>",
                    inline(text)
                ));
            }
            Line::Unchecked(text) => {
                flush_paragraph(&mut blocks, &mut paragraph);
                flush_list(&mut blocks, &mut list);
                blocks.push(format!(
                    "<div class=\"checkbox unchecked\"><i class=\"fas fa-times\"></i> {}</div>",
                    inline(text)
                ));
            }
            Line::Blank => {
                flush_paragraph(&mut blocks, &mut paragraph);
                flush_list(&mut blocks, &mut list);
            }
            Line::Text(text) => {
                flush_list(&mut blocks, &mut list);
                paragraph.push(text);
            }
        }
        i += 1;
    }

    flush_paragraph(&mut blocks, &mut paragraph);
    flush_list(&mut blocks, &mut list);
    blocks.join("\n")
}

fn flush_paragraph(blocks: &mut Vec<String>, paragraph: &mut Vec<&str>) {
    if paragraph.is_empty() {
        return;
    }
    let text = paragraph.join("\n");
    paragraph.clear();
    blocks.push(format!("<p>{}</p>", inline(&text)));
}

fn flush_list(blocks: &mut Vec<String>, list: &mut Vec<&str>) {
    if list.is_empty() {
        return;
    }
    let items: Vec<String> = list
        .iter()
        .map(|text| format!("<li>{}</li>", inline(text)))
        .collect();
    list.clear();
    blocks.push(format!("<ul>{}</ul>", items.join("")));
}

/// Apply inline markup in precedence order: code spans, then links, then
/// bold. Text content is HTML-escaped before markup is inserted.
fn inline(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    let mut from = 0;
    while let Some(rel_open) = rest[from..].find('`') {
        let open = from + rel_open;
        match rest[open + 1..].find('`') {
            Some(rel) => {
                let close = open + 1 + rel;
                // A span needs content; an empty pair (as in a run of
                // backticks) leaves the first backtick literal.
                if close == open + 1 {
                    from = open + 1;
                    continue;
                }
                out.push_str(&links_and_bold(&rest[..open]));
                out.push_str("<code>");
                out.push_str(&escape_html(&rest[open + 1..close]));
                out.push_str("</code>");
                rest = &rest[close + 1..];
                from = 0;
            }
            // Unpaired backtick stays literal.
            None => break,
        }
    }
    out.push_str(&links_and_bold(rest));
    out
}

fn links_and_bold(text: &str) -> String {
    bold(&links(&escape_html(text)))
}

/// Recognize `[text](url)` link syntax. Malformed links pass through.
fn links(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    loop {
        let Some(open) = rest.find('[') else { break };
        let Some(close_rel) = rest[open + 1..].find(']') else {
            break;
        };
        let close = open + 1 + close_rel;
        let label = &rest[open + 1..close];
        let after = &rest[close + 1..];
        if label.is_empty() || !after.starts_with('(') {
            out.push_str(&rest[..close + 1]);
            rest = after;
            continue;
        }
        let Some(paren_rel) = after[1..].find(')') else {
            break;
        };
        let url = &after[1..1 + paren_rel];
        if url.is_empty() {
            out.push_str(&rest[..close + 1]);
            rest = after;
            continue;
        }
        out.push_str(&rest[..open]);
        out.push_str("<a href=\"");
        out.push_str(url);
        out.push_str("\" target=\"_blank\" rel=\"noopener\">");
        out.push_str(label);
        out.push_str("</a>");
        rest = &after[1 + paren_rel + 1..];
    }
    out.push_str(rest);
    out
}

/// Recognize `**bold**` emphasis pairs.
fn bold(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(open) = rest.find("**") {
        match rest[open + 2..].find("**") {
            Some(rel) => {
                let close = open + 2 + rel;
                out.push_str(&rest[..open]);
                out.push_str("<strong>");
                out.push_str(&rest[open + 2..close]);
                out.push_str("</strong>");
                rest = &rest[close + 2..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Escape HTML-significant characters in text content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
