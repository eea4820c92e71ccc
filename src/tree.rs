//! Building a merged directory tree from a list of path strings.

use crate::error::PathTreeError;
use crate::tokenizer::tokenize;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::mem;

/// A directory in the merged tree.
///
/// A directory holds named child directories and a set of file names ending
/// there; either may be empty and both may be populated at once. The root of a
/// built tree is always a directory without a name of its own.
///
/// Every operation walks the tree with an explicit stack, so arbitrarily deep
/// paths never exhaust the thread stack. Deserialization rejects a child
/// directory that holds neither files nor subdirectories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTreeNode")]
pub struct TreeNode {
    /// Child directories keyed by name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, TreeNode>,
    /// File names that terminate in this directory.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub leaves: BTreeSet<String>,
}

#[derive(Deserialize)]
struct RawTreeNode {
    #[serde(default)]
    children: BTreeMap<String, TreeNode>,
    #[serde(default)]
    leaves: BTreeSet<String>,
}

impl TryFrom<RawTreeNode> for TreeNode {
    type Error = String;

    fn try_from(raw: RawTreeNode) -> Result<Self, Self::Error> {
        if let Some((name, _)) = raw.children.iter().find(|(_, child)| child.is_empty()) {
            return Err(format!("directory {:?} has no files or subdirectories", name));
        }
        Ok(TreeNode {
            children: raw.children,
            leaves: raw.leaves,
        })
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending: Vec<TreeNode> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(mem::take(&mut node.children).into_values());
        }
    }
}

impl TreeNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory holding a single file.
    pub fn leaf(name: impl Into<String>) -> Self {
        let mut node = Self::new();
        node.leaves.insert(name.into());
        node
    }

    /// A directory whose only entry is the child directory `name`.
    pub fn branch(name: impl Into<String>, child: TreeNode) -> Self {
        let mut node = Self::new();
        node.children.insert(name.into(), child);
        node
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.leaves.is_empty()
    }

    /// Consumes both nodes and returns their union.
    pub fn merge(mut self, other: TreeNode) -> TreeNode {
        self.merge_from(other);
        self
    }

    /// Unions `other` into `self`: leaf sets are joined and children sharing a
    /// name are merged level by level.
    pub fn merge_from(&mut self, other: TreeNode) {
        let mut work: Vec<(&mut TreeNode, TreeNode)> = vec![(self, other)];
        while let Some((target, mut source)) = work.pop() {
            target.leaves.append(&mut source.leaves);
            let mut shared = BTreeMap::new();
            for (name, child) in mem::take(&mut source.children) {
                if target.children.contains_key(&name) {
                    shared.insert(name, child);
                } else {
                    target.children.insert(name, child);
                }
            }
            let (Some(first), Some(last)) = (
                shared.keys().next().cloned(),
                shared.keys().next_back().cloned(),
            ) else {
                continue;
            };
            for (name, slot) in target.children.range_mut(first..=last) {
                if let Some(child) = shared.remove(name) {
                    work.push((slot, child));
                }
            }
        }
    }

    /// Number of directory levels below this node.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.values().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Total number of files in this node and all of its descendants.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += node.leaves.len();
            stack.extend(node.children.values());
        }
        count
    }

    /// Flattens the tree back into `dir/.../file` strings, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.leaf_count());
        let mut stack = vec![(self, String::new())];
        while let Some((node, prefix)) = stack.pop() {
            for leaf in &node.leaves {
                out.push(format!("{}{}", prefix, leaf));
            }
            for (name, child) in &node.children {
                stack.push((child, format!("{}{}/", prefix, name)));
            }
        }
        out.sort();
        out
    }
}

/// Builds the single-path tree for one tokenized path.
///
/// Segments are consumed from the file name upward and the walk stops at the
/// first empty segment, so a leading separator never becomes a directory.
/// Returns `None` when no segment is usable.
pub fn path_chain(segments: &[&str]) -> Option<TreeNode> {
    let mut chain: Option<TreeNode> = None;
    for segment in segments.iter().rev() {
        if segment.is_empty() {
            break;
        }
        chain = Some(match chain {
            None => TreeNode::leaf(*segment),
            Some(inner) => TreeNode::branch(*segment, inner),
        });
    }
    chain
}

/// Builds one merged tree from a list of paths.
///
/// The result does not depend on input order and duplicate paths collapse.
/// An empty list yields an empty root.
pub fn build<I, S>(paths: I) -> TreeNode
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let paths: Vec<S> = paths.into_iter().collect();
    let mut tokenized: Vec<Vec<&str>> = paths.iter().map(|p| tokenize(p.as_ref())).collect();
    tokenized.sort();
    #[cfg(feature = "logging")]
    tracing::debug!("Building tree from {} paths", tokenized.len());
    merge_chains(&tokenized)
}

#[cfg(feature = "parallel")]
fn merge_chains(tokenized: &[Vec<&str>]) -> TreeNode {
    tokenized
        .par_iter()
        .filter_map(|segments| path_chain(segments))
        .reduce(TreeNode::new, TreeNode::merge)
}

#[cfg(not(feature = "parallel"))]
fn merge_chains(tokenized: &[Vec<&str>]) -> TreeNode {
    tokenized
        .iter()
        .filter_map(|segments| path_chain(segments))
        .fold(TreeNode::new(), TreeNode::merge)
}

/// Builds a tree from a JSON array of path strings.
///
/// # Errors
///
/// Returns [`PathTreeError::InvalidInput`] if `value` is not an array or if any
/// element is not a string.
pub fn build_from_json(value: &Value) -> Result<TreeNode, PathTreeError> {
    Ok(build(json_paths(value)?))
}

pub(crate) fn json_paths(value: &Value) -> Result<Vec<&str>, PathTreeError> {
    let items = value.as_array().ok_or_else(|| {
        PathTreeError::InvalidInput(format!("expected an array of paths, found {}", value))
    })?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().ok_or_else(|| {
                PathTreeError::InvalidInput(format!(
                    "element {} is not a string: {}",
                    index, item
                ))
            })
        })
        .collect()
}
