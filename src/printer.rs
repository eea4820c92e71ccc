//! Rendering of a [`TreeNode`] as indented lines.
//!
//! Every nesting level adds four spaces and each line carries a single
//! directory or file name. Entries of a directory are visited in ascending
//! name order, so the output is reproducible.

use crate::error::PathTreeError;
use crate::options::PrintOptions;
use crate::tree::TreeNode;
use std::convert::Infallible;
use std::io::Write;

const INDENT: &str = "    ";

/// Destination for rendered lines.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> Result<(), PathTreeError>;
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<(), PathTreeError> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Writes each line, newline-terminated, to an [`std::io::Write`].
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), PathTreeError> {
        writeln!(self.inner, "{}", line)?;
        Ok(())
    }
}

enum Item<'a> {
    Dir(&'a str, &'a TreeNode),
    File(&'a str),
}

impl Item<'_> {
    fn name(&self) -> &str {
        match self {
            Item::Dir(name, _) | Item::File(name) => name,
        }
    }
}

// Directories are chained first so the stable sort puts them ahead of a file
// with the same name.
fn sorted_items(node: &TreeNode) -> Vec<Item<'_>> {
    let mut items: Vec<Item<'_>> = node
        .children
        .iter()
        .map(|(name, child)| Item::Dir(name, child))
        .chain(node.leaves.iter().map(|name| Item::File(name)))
        .collect();
    items.sort_by(|a, b| a.name().cmp(b.name()));
    items
}

struct Frame<'a> {
    items: std::vec::IntoIter<Item<'a>>,
    depth_left: usize,
    level: usize,
    leaves_printed: usize,
}

impl<'a> Frame<'a> {
    fn new(node: &'a TreeNode, depth_left: usize, level: usize) -> Self {
        Self {
            items: sorted_items(node).into_iter(),
            depth_left,
            level,
            leaves_printed: 0,
        }
    }
}

// Pre-order walk with an explicit stack; `emit` receives the nesting level and
// the name of every printed entry.
fn walk<E>(
    tree: &TreeNode,
    options: &PrintOptions,
    mut emit: impl FnMut(usize, &str) -> Result<(), E>,
) -> Result<(), E> {
    let mut stack = vec![Frame::new(tree, options.max_depth, 0)];
    while let Some(frame) = stack.last_mut() {
        let Some(item) = frame.items.next() else {
            stack.pop();
            continue;
        };
        match item {
            Item::File(name) => {
                // Skipped files do not end the scan; later directories still print.
                if frame.leaves_printed >= options.max_leaves {
                    continue;
                }
                frame.leaves_printed += 1;
                emit(frame.level, name)?;
            }
            Item::Dir(name, child) => {
                if frame.depth_left == 0 {
                    continue;
                }
                let (depth_left, level) = (frame.depth_left - 1, frame.level + 1);
                emit(level - 1, name)?;
                stack.push(Frame::new(child, depth_left, level));
            }
        }
    }
    Ok(())
}

fn indented(level: usize, name: &str, line: &mut String) {
    line.clear();
    for _ in 0..level {
        line.push_str(INDENT);
    }
    line.push_str(name);
}

/// Renders `tree` into lines, honouring the depth and per-directory file limits.
pub fn render_lines(tree: &TreeNode, options: &PrintOptions) -> Vec<String> {
    let mut lines = Vec::new();
    let rendered: Result<(), Infallible> = walk(tree, options, |level, name| {
        let mut line = String::with_capacity(level * INDENT.len() + name.len());
        indented(level, name, &mut line);
        lines.push(line);
        Ok(())
    });
    match rendered {
        Ok(()) => lines,
        Err(never) => match never {},
    }
}

/// Renders `tree` and hands each line to `sink` as it is produced.
///
/// # Errors
///
/// Propagates the first error returned by the sink.
pub fn write_tree<S: LineSink + ?Sized>(
    tree: &TreeNode,
    options: &PrintOptions,
    sink: &mut S,
) -> Result<(), PathTreeError> {
    let mut line = String::new();
    walk(tree, options, |level, name| {
        indented(level, name, &mut line);
        sink.write_line(&line)
    })
}

/// Prints `tree` using signed limits.
///
/// # Errors
///
/// Returns [`PathTreeError::InvalidArgument`] if `max_depth` or `max_leaves`
/// is negative, otherwise any error from the sink.
pub fn print_tree<S: LineSink + ?Sized>(
    tree: &TreeNode,
    max_depth: i64,
    max_leaves: i64,
    sink: &mut S,
) -> Result<(), PathTreeError> {
    let options = PrintOptions::new(max_depth, max_leaves)?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Printing tree with max_depth={} max_leaves={}",
        options.max_depth,
        options.max_leaves
    );
    write_tree(tree, &options, sink)
}
