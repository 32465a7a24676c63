//! Editor content model shared by the content editor and its callers.
//!
//! DESIGN
//! ======
//! Content is a list of block nodes in the `{ type, id, children: [{ text }] }`
//! shape rich-text editors exchange. The shell only needs a paragraph-per-line
//! projection of it; every field it does not understand is kept in `extra` /
//! `marks` so values round-trip unchanged through the adapter.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Block type used for lines created by the plain-text surface.
pub const PARAGRAPH: &str = "p";

/// Full editor value.
pub type EditorContent = Vec<EditorNode>;

/// One block node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub children: Vec<EditorText>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Text leaf. Formatting marks (`bold`, `italic`, ...) live in `marks`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorText {
    pub text: String,
    #[serde(flatten)]
    pub marks: Map<String, Value>,
}

impl EditorText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), marks: Map::new() }
    }
}

impl EditorNode {
    /// New paragraph with a fresh id.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: PARAGRAPH.to_owned(),
            id: Some(uuid::Uuid::new_v4().to_string()),
            children: vec![EditorText::plain(text)],
            extra: Map::new(),
        }
    }

    /// Concatenated text of all leaves.
    pub fn text(&self) -> String {
        self.children.iter().map(|leaf| leaf.text.as_str()).collect()
    }

    /// Copy of this node holding `text` as a single unmarked leaf.
    fn with_text(&self, text: &str) -> Self {
        Self {
            kind: self.kind.clone(),
            id: self.id.clone(),
            children: vec![EditorText::plain(text)],
            extra: self.extra.clone(),
        }
    }
}

/// True when the value has no visible text.
pub fn is_empty(content: &[EditorNode]) -> bool {
    content.iter().all(|node| node.children.iter().all(|leaf| leaf.text.is_empty()))
}

/// Plain-text projection: one line per block.
pub fn content_to_text(content: &[EditorNode]) -> String {
    content.iter().map(EditorNode::text).collect::<Vec<_>>().join("\n")
}

/// Rebuild a full value from edited text.
///
/// Lines are matched to `previous` blocks by their text (longest common
/// subsequence), so an unchanged line keeps its node as-is even when lines
/// were inserted or removed around it. Between two matched lines, edited lines
/// take over the unmatched old nodes in order, keeping their type, id and extra
/// fields; any surplus becomes new paragraphs. Empty text yields an empty value.
pub fn text_to_content(text: &str, previous: &[EditorNode]) -> EditorContent {
    if text.is_empty() {
        return Vec::new();
    }
    let lines: Vec<&str> = text.split('\n').collect();
    let old: Vec<String> = previous.iter().map(EditorNode::text).collect();

    let mut next = Vec::with_capacity(lines.len());
    let (mut old_from, mut new_from) = (0, 0);
    let anchors = common_lines(&old, &lines).into_iter().chain(std::iter::once((old.len(), lines.len())));
    for (old_at, new_at) in anchors {
        fill_gap(&mut next, &previous[old_from..old_at], &lines[new_from..new_at]);
        if let Some(node) = previous.get(old_at) {
            next.push(node.clone());
        }
        old_from = old_at + 1;
        new_from = new_at + 1;
    }
    next
}

/// Index pairs `(old, new)` of lines kept unchanged, in increasing order.
fn common_lines(old: &[String], new: &[&str]) -> Vec<(usize, usize)> {
    let (n, m) = (old.len(), new.len());
    // lcs[i][j]: length of the common subsequence of old[i..] and new[j..].
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if old[i] == new[j] { lcs[i + 1][j + 1] + 1 } else { lcs[i + 1][j].max(lcs[i][j + 1]) };
        }
    }

    let mut pairs = Vec::with_capacity(lcs[0][0]);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i] == new[j] {
            pairs.push((i, j));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    pairs
}

/// Lines edited between two kept lines reuse the replaced nodes in order.
fn fill_gap(next: &mut EditorContent, replaced: &[EditorNode], lines: &[&str]) {
    next.extend(lines.iter().enumerate().map(|(k, line)| match replaced.get(k) {
        Some(node) => node.with_text(line),
        None => EditorNode::paragraph(*line),
    }));
}

/// Outcome of a user edit on the surface: the next value to report, or `None`
/// when edits are rejected.
pub fn apply_edit(read_only: bool, text: &str, previous: &[EditorNode]) -> Option<EditorContent> {
    if read_only {
        return None;
    }
    Some(text_to_content(text, previous))
}
