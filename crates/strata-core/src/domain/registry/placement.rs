//! Insertion strategies.
//!
//! A [`Placement`] looks at the current text of a registry file and either
//! returns the merged text or declines (`None`) because its anchor is
//! missing. Requests hold an ordered list of placements; the first one that
//! accepts wins.

/// Text placed around a fragment when the document has no anchor for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    pub open: String,
    pub close: String,
}

impl Wrapper {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    fn wrap(&self, fragment: &str) -> String {
        format!("{}{}{}", self.open, fragment, self.close)
    }
}

/// Where to put a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// On its own line(s) directly above the line holding `marker`.
    ///
    /// The marker stays below everything inserted, so repeated inserts keep
    /// their call order.
    BeforeMarker { marker: String },

    /// On the line after the first occurrence of `token`.
    AfterToken { token: String },

    /// After the last line-leading statement that starts with `keyword`,
    /// once its `terminator` has been reached.
    AfterLastStatement { keyword: String, terminator: String },

    /// At the top of the document, followed by a blank line.
    Prepend { wrapper: Option<Wrapper> },

    /// At the end of the document. Wrapped blocks are set off by a blank line.
    Append { wrapper: Option<Wrapper> },
}

impl Placement {
    pub fn before_marker(marker: impl Into<String>) -> Self {
        Self::BeforeMarker {
            marker: marker.into(),
        }
    }

    pub fn after_token(token: impl Into<String>) -> Self {
        Self::AfterToken {
            token: token.into(),
        }
    }

    pub fn after_last_statement(keyword: impl Into<String>, terminator: impl Into<String>) -> Self {
        Self::AfterLastStatement {
            keyword: keyword.into(),
            terminator: terminator.into(),
        }
    }

    pub fn prepend() -> Self {
        Self::Prepend { wrapper: None }
    }

    pub fn append() -> Self {
        Self::Append { wrapper: None }
    }

    pub fn append_wrapped(wrapper: Wrapper) -> Self {
        Self::Append {
            wrapper: Some(wrapper),
        }
    }

    /// Stable name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BeforeMarker { .. } => "before-marker",
            Self::AfterToken { .. } => "after-token",
            Self::AfterLastStatement { .. } => "after-last-statement",
            Self::Prepend { .. } => "prepend",
            Self::Append { .. } => "append",
        }
    }

    /// `true` for placements that accept any document.
    pub fn is_unconditional(&self) -> bool {
        matches!(self, Self::Prepend { .. } | Self::Append { .. })
    }

    /// Merge `fragment` (newline-terminated) into `content`, or decline.
    pub fn apply(&self, content: &str, fragment: &str) -> Option<String> {
        match self {
            Self::BeforeMarker { marker } => before_marker(content, marker, fragment),
            Self::AfterToken { token } => after_token(content, token, fragment),
            Self::AfterLastStatement {
                keyword,
                terminator,
            } => after_last_statement(content, keyword, terminator, fragment),
            Self::Prepend { wrapper } => Some(prepend(content, &wrapped(wrapper, fragment))),
            Self::Append { wrapper } => {
                Some(append(content, &wrapped(wrapper, fragment), wrapper.is_some()))
            }
        }
    }
}

fn wrapped(wrapper: &Option<Wrapper>, fragment: &str) -> String {
    match wrapper {
        Some(w) => w.wrap(fragment),
        None => fragment.to_string(),
    }
}

fn splice(content: &str, at: usize, insert: &str) -> String {
    let mut out = String::with_capacity(content.len() + insert.len());
    out.push_str(&content[..at]);
    out.push_str(insert);
    out.push_str(&content[at..]);
    out
}

/// Byte offset of the start of the line containing `idx`.
fn line_start(content: &str, idx: usize) -> usize {
    content[..idx].rfind('\n').map_or(0, |p| p + 1)
}

fn before_marker(content: &str, marker: &str, fragment: &str) -> Option<String> {
    let idx = content.find(marker)?;
    let start = line_start(content, idx);

    if content[start..idx].trim().is_empty() {
        Some(splice(content, start, fragment))
    } else {
        // marker trails other text; it moves to its own line below the fragment
        let cut = start + content[start..idx].trim_end().len();
        Some(format!("{}\n{fragment}{}", &content[..cut], &content[idx..]))
    }
}

fn after_token(content: &str, token: &str, fragment: &str) -> Option<String> {
    let after = content.find(token)? + token.len();

    match content[after..].find('\n') {
        Some(rel) if content[after..after + rel].trim().is_empty() => {
            Some(splice(content, after + rel + 1, fragment))
        }
        _ => Some(splice(content, after, &format!("\n{fragment}"))),
    }
}

fn after_last_statement(
    content: &str,
    keyword: &str,
    terminator: &str,
    fragment: &str,
) -> Option<String> {
    let mut offset = 0;
    let mut last = None;
    for line in content.split_inclusive('\n') {
        if line.trim_start().starts_with(keyword) {
            last = Some(offset);
        }
        offset += line.len();
    }

    let start = last?;
    let end = start + content[start..].find(terminator)? + terminator.len();

    match content[end..].find('\n') {
        Some(rel) => Some(splice(content, end + rel + 1, fragment)),
        None => Some(format!("{content}\n{fragment}")),
    }
}

fn prepend(content: &str, block: &str) -> String {
    if content.is_empty() {
        block.to_string()
    } else {
        format!("{block}\n{content}")
    }
}

fn append(content: &str, block: &str, separate: bool) -> String {
    if content.is_empty() {
        return block.to_string();
    }

    let mut out = content.to_string();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    if separate {
        out.push('\n');
    }
    out.push_str(block);
    out
}
