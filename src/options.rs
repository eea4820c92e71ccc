use crate::error::PathTreeError;
use serde::{Deserialize, Serialize};
/// Limits applied when rendering a tree.
///
/// `max_depth` is the number of directory levels that may be printed below the
/// root, `max_leaves` the number of files printed per directory. Zero is valid
/// for both and prints nothing at that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintOptions {
    pub max_depth: usize,
    pub max_leaves: usize,
}
impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            max_depth: 5,
            max_leaves: 5,
        }
    }
}
impl PrintOptions {
    /// Validates signed limits, as received from a caller or the command line.
    ///
    /// # Errors
    ///
    /// Returns [`PathTreeError::InvalidArgument`] if either limit is negative.
    pub fn new(max_depth: i64, max_leaves: i64) -> Result<Self, PathTreeError> {
        Ok(Self {
            max_depth: non_negative("max_depth", max_depth)?,
            max_leaves: non_negative("max_leaves", max_leaves)?,
        })
    }
}
/// Parameters of the random path generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub base_path: String,
    pub count: usize,
    pub max_depth: usize,
    pub max_folder_files: usize,
}
impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            base_path: "/home/user".to_string(),
            count: 5,
            max_depth: 3,
            max_folder_files: 1,
        }
    }
}
impl GeneratorOptions {
    /// # Errors
    ///
    /// Returns [`PathTreeError::InvalidArgument`] if `count`, `max_depth` or
    /// `max_folder_files` is less than 1.
    pub fn new(
        base_path: impl Into<String>,
        count: i64,
        max_depth: i64,
        max_folder_files: i64,
    ) -> Result<Self, PathTreeError> {
        Ok(Self {
            base_path: base_path.into(),
            count: positive("count", count)?,
            max_depth: positive("max_depth", max_depth)?,
            max_folder_files: positive("max_folder_files", max_folder_files)?,
        })
    }
    /// Upper bound on files across every generated directory.
    pub fn leaf_cap(&self) -> usize {
        self.max_depth.saturating_mul(self.max_folder_files)
    }
    pub(crate) fn validate(&self) -> Result<(), PathTreeError> {
        for (name, value) in [
            ("count", self.count),
            ("max_depth", self.max_depth),
            ("max_folder_files", self.max_folder_files),
        ] {
            if value == 0 {
                return Err(PathTreeError::InvalidArgument(format!(
                    "{} must be at least 1",
                    name
                )));
            }
        }
        Ok(())
    }
}
#[derive(Debug, Default)]
pub struct GeneratorBuilder {
    options: GeneratorOptions,
}
impl GeneratorBuilder {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            options: GeneratorOptions {
                base_path: base_path.into(),
                ..Default::default()
            },
        }
    }
    pub fn count(mut self, count: usize) -> Self {
        self.options.count = count;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = depth;
        self
    }
    pub fn max_folder_files(mut self, files: usize) -> Self {
        self.options.max_folder_files = files;
        self
    }
    pub fn build(self) -> Result<GeneratorOptions, PathTreeError> {
        self.options.validate()?;
        Ok(self.options)
    }
}
fn non_negative(name: &str, value: i64) -> Result<usize, PathTreeError> {
    usize::try_from(value).map_err(|_| {
        PathTreeError::InvalidArgument(format!("{} must not be negative, got {}", name, value))
    })
}
fn positive(name: &str, value: i64) -> Result<usize, PathTreeError> {
    match usize::try_from(value) {
        Ok(v) if v >= 1 => Ok(v),
        _ => Err(PathTreeError::InvalidArgument(format!(
            "{} must be at least 1, got {}",
            name, value
        ))),
    }
}
