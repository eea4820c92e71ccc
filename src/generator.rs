//! Random synthetic path lists for use as fixtures.
//!
//! Generated paths look like `<base>/folder1/.../folderD/<name>.txt`, where the
//! directory at depth `D` is always `folder1` through `folderD`, so a given depth
//! names exactly one directory.

use crate::error::PathTreeError;
use crate::options::GeneratorOptions;
use rand::Rng;
use rand::distributions::Alphanumeric;
use std::collections::{BTreeSet, HashMap};

const NAME_LEN: usize = 8;
const EXTENSION: &str = "txt";

/// Lazily yields random paths until one of the generator limits is hit.
///
/// Each round picks a directory depth uniformly among the directories that
/// still have room, then emits between 1 and `max_folder_files` files into it.
/// Iteration ends once `count` paths or `max_depth * max_folder_files` files
/// have been produced.
pub struct PathGenerator<'a, R: Rng> {
    options: &'a GeneratorOptions,
    rng: &'a mut R,
    base: &'a str,
    files_per_depth: HashMap<usize, usize>,
    full_depths: BTreeSet<usize>,
    emitted: usize,
    batch: Option<(usize, usize)>,
}

impl<'a, R: Rng> PathGenerator<'a, R> {
    pub fn new(options: &'a GeneratorOptions, rng: &'a mut R) -> Self {
        Self {
            options,
            rng,
            base: options.base_path.trim_end_matches('/'),
            files_per_depth: HashMap::new(),
            full_depths: BTreeSet::new(),
            emitted: 0,
            batch: None,
        }
    }

    /// Number of paths produced so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn exhausted(&self) -> bool {
        self.emitted >= self.options.count || self.emitted >= self.options.leaf_cap()
    }

    /// Picks the `k`-th depth in `1..=max_depth` that is not yet full.
    fn pick_open_depth(&mut self) -> Option<usize> {
        let open = self.options.max_depth.checked_sub(self.full_depths.len())?;
        if open == 0 {
            return None;
        }
        let mut depth = self.rng.gen_range(0..open) + 1;
        for &full in &self.full_depths {
            if full <= depth {
                depth += 1;
            } else {
                break;
            }
        }
        Some(depth)
    }

    fn make_path(&mut self, depth: usize) -> String {
        let mut path = String::from(self.base);
        for level in 1..=depth {
            path.push_str(&format!("/folder{}", level));
        }
        let name: String = (0..NAME_LEN)
            .map(|_| self.rng.sample(Alphanumeric) as char)
            .collect();
        path.push_str(&format!("/{}.{}", name, EXTENSION));
        path
    }
}

impl<R: Rng> Iterator for PathGenerator<'_, R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if self.exhausted() {
                return None;
            }
            if let Some((depth, remaining)) = self.batch.take() {
                if remaining > 0 && !self.full_depths.contains(&depth) {
                    let files = self.files_per_depth.entry(depth).or_insert(0);
                    *files += 1;
                    if *files >= self.options.max_folder_files {
                        self.full_depths.insert(depth);
                    }
                    self.batch = Some((depth, remaining - 1));
                    self.emitted += 1;
                    return Some(self.make_path(depth));
                }
            }
            let depth = self.pick_open_depth()?;
            let files = self.rng.gen_range(1..=self.options.max_folder_files);
            self.batch = Some((depth, files));
        }
    }
}

/// Generates a full path list in generation order.
///
/// # Errors
///
/// Returns [`PathTreeError::InvalidArgument`] if any of `count`, `max_depth`
/// or `max_folder_files` is zero.
pub fn generate<R: Rng>(
    options: &GeneratorOptions,
    rng: &mut R,
) -> Result<Vec<String>, PathTreeError> {
    options.validate()?;
    let paths: Vec<String> = PathGenerator::new(options, rng).collect();
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Generated {} paths under {}",
        paths.len(),
        options.base_path
    );
    Ok(paths)
}

/// Generates paths from signed arguments.
///
/// # Errors
///
/// Returns [`PathTreeError::InvalidArgument`] if `count`, `max_depth` or
/// `max_folder_files` is less than 1.
pub fn generate_paths<R: Rng>(
    base_path: &str,
    count: i64,
    max_depth: i64,
    max_folder_files: i64,
    rng: &mut R,
) -> Result<Vec<String>, PathTreeError> {
    let options = GeneratorOptions::new(base_path, count, max_depth, max_folder_files)?;
    generate(&options, rng)
}
