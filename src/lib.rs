//! # Pathtree
//!
//! `pathtree` turns a flat list of `/`-separated path strings into a merged
//! directory tree, renders that tree as indented text with limits on depth and
//! on files per directory, and can generate random path lists to feed it.
//!
//! Nothing here touches a real filesystem walk: paths are plain strings.
//!
//! # Features
//!
//! - `parallel` (default): Builds and merges per-path chains with Rayon.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```
//! use pathtree::{PrintOptions, build, render_lines};
//!
//! let tree = build(["/home/user/a.txt", "/home/user/b.txt"]);
//! let lines = render_lines(&tree, &PrintOptions::default());
//!
//! assert_eq!(lines, ["home", "    user", "        a.txt", "        b.txt"]);
//! ```

mod error;
mod generator;
pub mod input;
mod options;
pub mod output;
mod printer;
mod tokenizer;
mod tree;

pub use error::PathTreeError;
pub use generator::{PathGenerator, generate, generate_paths};
pub use options::{GeneratorBuilder, GeneratorOptions, PrintOptions};
pub use printer::{LineSink, WriterSink, print_tree, render_lines, write_tree};
pub use tokenizer::tokenize;
pub use tree::{TreeNode, build, build_from_json, path_chain};
