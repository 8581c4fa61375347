// src/core/html.rs
// Minimal markup tree for the fragments the teletext service emits.
// Byte-scanning, single pass: tags with attributes, text with entity
// decoding, void elements, comment skipping. Tolerant of stray close
// tags. Whitespace in text is preserved (rows live inside <pre>).

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Tag(Tag),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Tag {
    fn root() -> Self {
        Tag { name: s!("#fragment"), ..Default::default() }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn classes(&self) -> Vec<&str> {
        self.attr("class")
            .map(|c| c.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| *c == class)
    }

    /// First descendant (depth-first, document order) with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Tag> {
        for child in &self.children {
            if let Node::Tag(t) = child {
                if t.id() == Some(id) {
                    return Some(t);
                }
                if let Some(hit) = t.find_by_id(id) {
                    return Some(hit);
                }
            }
        }
        None
    }

    /// All descendants with the given tag name and class, document order.
    pub fn find_all(&self, name: &str, class: &str) -> Vec<&Tag> {
        let mut out = Vec::new();
        self.collect_all(name, class, &mut out);
        out
    }

    fn collect_all<'a>(&'a self, name: &str, class: &str, out: &mut Vec<&'a Tag>) {
        for child in &self.children {
            if let Node::Tag(t) = child {
                if t.name == name && t.has_class(class) {
                    out.push(t);
                }
                t.collect_all(name, class, out);
            }
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text(&self) -> String {
        let mut out = s!();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Tag(t) => t.collect_text(out),
            }
        }
    }
}

// Elements that never carry children.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta", "wbr"];
// Elements whose raw content is skipped wholesale.
const RAW_TAGS: &[&str] = &["script", "style"];

/// Parse a document or fragment into a synthetic `#fragment` root.
/// Never fails: unparseable stretches degrade to text or get skipped.
pub fn parse_fragment(s: &str) -> Tag {
    let b = s.as_bytes();
    let n = s.len();
    let mut i = 0usize;
    let mut stack: Vec<Tag> = vec![Tag::root()];

    while i < n {
        if b[i] != b'<' {
            let end = s[i..].find('<').map(|j| i + j).unwrap_or(n);
            push_text(&mut stack, &s[i..end]);
            i = end;
            continue;
        }
        if s[i..].starts_with("<!--") {
            i = s[i..].find("-->").map(|j| i + j + 3).unwrap_or(n);
            continue;
        }
        if s[i..].starts_with("<!") || s[i..].starts_with("<?") {
            // doctype / processing instruction
            i = s[i..].find('>').map(|j| i + j + 1).unwrap_or(n);
            continue;
        }
        if i + 1 < n && b[i + 1] == b'/' {
            let end = s[i..].find('>').map(|j| i + j).unwrap_or(n);
            let name = to_lower(s[i + 2..end.min(n)].trim());
            close_tag(&mut stack, &name);
            i = if end < n { end + 1 } else { n };
            continue;
        }
        if i + 1 < n && b[i + 1].is_ascii_alphabetic() {
            let (tag, self_closing, next) = parse_open_tag(s, i);
            i = next;
            if self_closing || VOID_TAGS.contains(&tag.name.as_str()) {
                attach(&mut stack, Node::Tag(tag));
            } else if RAW_TAGS.contains(&tag.name.as_str()) {
                // skip raw content up to the matching close tag
                let close = format!("</{}", tag.name);
                let lc = to_lower(&s[i..]);
                match lc.find(&close) {
                    Some(j) => {
                        let after = i + j;
                        i = s[after..].find('>').map(|k| after + k + 1).unwrap_or(n);
                    }
                    None => i = n,
                }
                attach(&mut stack, Node::Tag(tag));
            } else {
                stack.push(tag);
            }
            continue;
        }
        // lone '<' that opens no tag
        push_text(&mut stack, "<");
        i += 1;
    }

    // unclosed tags fold back into their parents
    while stack.len() > 1 {
        if let Some(tag) = stack.pop() {
            attach(&mut stack, Node::Tag(tag));
        }
    }
    stack.pop().unwrap_or_else(Tag::root)
}

fn attach(stack: &mut Vec<Tag>, node: Node) {
    if let Some(top) = stack.last_mut() {
        top.children.push(node);
    }
}

fn push_text(stack: &mut Vec<Tag>, raw: &str) {
    if raw.is_empty() {
        return;
    }
    let text = decode_entities(raw);
    if let Some(top) = stack.last_mut() {
        // merge adjacent text runs
        if let Some(Node::Text(prev)) = top.children.last_mut() {
            prev.push_str(&text);
        } else {
            top.children.push(Node::Text(text));
        }
    }
}

/// Pop up to and including the nearest open tag with this name.
/// A close tag with no matching open is dropped.
fn close_tag(stack: &mut Vec<Tag>, name: &str) {
    let Some(depth) = stack.iter().rposition(|t| t.name == name) else {
        return;
    };
    if depth == 0 {
        return; // never pop the root
    }
    while stack.len() > depth {
        if let Some(tag) = stack.pop() {
            attach(stack, Node::Tag(tag));
        }
    }
}

/// Parse `<name attr=value ...>` starting at `at` (which points at '<').
/// Returns the open tag, whether it self-closed, and the next position.
fn parse_open_tag(s: &str, at: usize) -> (Tag, bool, usize) {
    let b = s.as_bytes();
    let n = s.len();
    let mut i = at + 1;

    let name_start = i;
    while i < n && (b[i].is_ascii_alphanumeric() || b[i] == b'-') {
        i += 1;
    }
    let mut tag = Tag { name: to_lower(&s[name_start..i]), ..Default::default() };
    let mut self_closing = false;

    loop {
        while i < n && b[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= n {
            break;
        }
        match b[i] {
            b'>' => {
                i += 1;
                break;
            }
            b'/' => {
                self_closing = true;
                i += 1;
            }
            _ => {
                let key_start = i;
                while i < n && !b[i].is_ascii_whitespace() && b[i] != b'=' && b[i] != b'>' && b[i] != b'/' {
                    i += 1;
                }
                let key = to_lower(&s[key_start..i]);
                let mut value = s!();
                if i < n && b[i] == b'=' {
                    i += 1;
                    if i < n && (b[i] == b'"' || b[i] == b'\'') {
                        let quote = b[i];
                        i += 1;
                        let val_start = i;
                        while i < n && b[i] != quote {
                            i += 1;
                        }
                        value = decode_entities(&s[val_start..i]);
                        if i < n {
                            i += 1;
                        }
                    } else {
                        let val_start = i;
                        while i < n && !b[i].is_ascii_whitespace() && b[i] != b'>' {
                            i += 1;
                        }
                        value = decode_entities(&s[val_start..i]);
                    }
                }
                if !key.is_empty() {
                    tag.attrs.push((key, value));
                }
            }
        }
    }
    (tag, self_closing, i)
}

/// Replace the handful of entities the service emits. `&nbsp;` becomes a
/// plain space: teletext cells are spaces, not no-break spaces. Unknown
/// entities pass through literally.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s!(s);
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail[1..].find(';').filter(|&j| j <= 10) {
            Some(j) => {
                let name = &tail[1..1 + j];
                match entity_char(name) {
                    Some(ch) => out.push(ch),
                    None => out.push_str(&tail[..j + 2]),
                }
                rest = &tail[j + 2..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn entity_char(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let cp = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse().ok()?
            } else {
                return None;
            };
            char::from_u32(cp)
        }
    }
}
