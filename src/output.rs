//! Output formatting for built trees.
//!
//! Provides functions to format a [`TreeNode`] as indented text, JSON, or a flat
//! path list, and to format an unbuilt path list as lines or JSON. Only the indented text applies the print limits; JSON and paths
//! always carry the whole tree.

use crate::printer::render_lines;
use crate::{PathTreeError, PrintOptions, TreeNode};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tree,
    Json,
    Paths,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Tree | OutputFormat::Paths => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the tree into a string.
///
/// # Errors
///
/// Returns [`PathTreeError::InvalidArgument`] if JSON is requested for a tree
/// too deep to read back, and [`PathTreeError::Json`] if serialization fails.
pub fn format_tree(
    tree: &TreeNode,
    format: OutputFormat,
    options: &PrintOptions,
    pretty: bool,
) -> Result<String, PathTreeError> {
    match format {
        OutputFormat::Tree => Ok(join_lines(render_lines(tree, options))),
        OutputFormat::Json => format_json(tree, pretty),
        OutputFormat::Paths => Ok(join_lines(tree.paths())),
    }
}

/// Formats a flat path list, such as generator output, in list order.
///
/// # Errors
///
/// Returns [`PathTreeError::InvalidArgument`] for [`OutputFormat::Tree`], since
/// an unbuilt list has no tree shape, and [`PathTreeError::Json`] if
/// serialization fails.
pub fn format_path_list(
    paths: &[String],
    format: OutputFormat,
    pretty: bool,
) -> Result<String, PathTreeError> {
    match format {
        OutputFormat::Paths => Ok(join_lines(paths.to_vec())),
        OutputFormat::Json => {
            let mut json = if pretty {
                serde_json::to_string_pretty(paths)?
            } else {
                serde_json::to_string(paths)?
            };
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Tree => Err(PathTreeError::InvalidArgument(
            "a path list prints as paths or json; build a tree first".to_string(),
        )),
    }
}

/// Writes the formatted tree to a file.
pub fn write_tree_to_file(
    tree: &TreeNode,
    format: OutputFormat,
    options: &PrintOptions,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), PathTreeError> {
    let content = format_tree(tree, format, options, pretty)?;
    fs::write(&path, content).map_err(|e| PathTreeError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn join_lines(lines: Vec<String>) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

// serde_json refuses to read back documents nested deeper than 128, and every
// directory level costs two nesting levels.
const MAX_JSON_DEPTH: usize = 62;

fn format_json(tree: &TreeNode, pretty: bool) -> Result<String, PathTreeError> {
    let depth = tree.depth();
    if depth > MAX_JSON_DEPTH {
        return Err(PathTreeError::InvalidArgument(format!(
            "tree is {} directories deep, JSON output supports at most {}",
            depth, MAX_JSON_DEPTH
        )));
    }
    let mut json = if pretty {
        serde_json::to_string_pretty(tree)?
    } else {
        serde_json::to_string(tree)?
    };
    json.push('\n');
    Ok(json)
}
