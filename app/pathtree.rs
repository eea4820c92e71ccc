//! Command-line interface for pathtree.
//!
//! This binary builds a tree from paths given on the command line, read from a
//! file, or generated at random, and prints it in one of several formats.

use clap::{Parser, ValueEnum};
use pathtree::input::{DEMO_PATHS, load_paths};
use pathtree::output::{self, format_path_list, format_tree, write_tree_to_file};
use pathtree::{GeneratorOptions, PathTreeError, PrintOptions, build, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process::exit;

/// pathtree — render flat path lists as a directory tree
#[derive(Parser)]
#[command(name = "pathtree", version, about, long_about = None)]
struct Cli {
    /// Paths to build the tree from (a demo list is used if none are given)
    paths: Vec<String>,

    /// Read paths from a file (JSON array or one path per line)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory levels printed below the root
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    max_depth: i64,

    /// Files printed per directory
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    max_leaves: i64,

    /// Output format (tree for tree modes, paths for generate)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Write output to a file instead of stdout; a directory gets tree.<ext> or paths.<ext>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Operation mode
    #[arg(long, value_enum, default_value_t = Mode::Tree)]
    mode: Mode,

    /// Base path for generated paths
    #[arg(long, default_value = "/home/user")]
    base_path: String,

    /// Number of paths to generate
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    count: i64,

    /// Maximum folder depth of generated paths
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    gen_depth: i64,

    /// Maximum files per generated folder
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    folder_files: i64,

    /// Seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    Tree,
    Generate,
    GenerateTree,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Tree,
    Json,
    Paths,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Tree => output::OutputFormat::Tree,
            OutputFormat::Json => output::OutputFormat::Json,
            OutputFormat::Paths => output::OutputFormat::Paths,
        }
    }
}

impl Cli {
    fn generator_options(&self) -> Result<GeneratorOptions, PathTreeError> {
        GeneratorOptions::new(
            self.base_path.as_str(),
            self.count,
            self.gen_depth,
            self.folder_files,
        )
    }

    fn generated_paths(&self) -> Result<Vec<String>, PathTreeError> {
        let options = self.generator_options()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        generate(&options, &mut rng)
    }

    fn source_paths(&self) -> Result<Vec<String>, PathTreeError> {
        let mut paths = match &self.input {
            Some(file) => load_paths(file)?,
            None => Vec::new(),
        };
        paths.extend(self.paths.iter().cloned());
        if paths.is_empty() {
            paths = DEMO_PATHS.iter().map(|p| p.to_string()).collect();
        }
        Ok(paths)
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(not(feature = "logging"))]
fn init_logging(_verbose: bool) {}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), PathTreeError> {
    if cli.mode == Mode::Generate {
        let format = cli.format.unwrap_or(OutputFormat::Paths);
        let generated = cli.generated_paths()?;
        let content = format_path_list(&generated, format.into(), cli.pretty)?;
        return emit(cli, "paths", format.into(), content);
    }

    let print_options = PrintOptions::new(cli.max_depth, cli.max_leaves)?;
    let paths = match cli.mode {
        Mode::GenerateTree => cli.generated_paths()?,
        _ => cli.source_paths()?,
    };
    let format = cli.format.unwrap_or(OutputFormat::Tree);
    let tree = build(&paths);
    match output_file(cli, "tree", format.into()) {
        Some(file) => {
            write_tree_to_file(&tree, format.into(), &print_options, file, cli.pretty)
        }
        None => print_content(format_tree(
            &tree,
            format.into(),
            &print_options,
            cli.pretty,
        )?),
    }
}

/// Resolves `--output`, naming the file after `stem` and the format extension
/// when it points at a directory.
fn output_file(cli: &Cli, stem: &str, format: output::OutputFormat) -> Option<PathBuf> {
    let file = cli.output.as_ref()?;
    if file.is_dir() {
        Some(file.join(format!("{}.{}", stem, format.extension())))
    } else {
        Some(file.clone())
    }
}

fn emit(
    cli: &Cli,
    stem: &str,
    format: output::OutputFormat,
    content: String,
) -> Result<(), PathTreeError> {
    match output_file(cli, stem, format) {
        Some(file) => std::fs::write(&file, content).map_err(|e| PathTreeError::Io {
            path: file,
            source: e,
        }),
        None => print_content(content),
    }
}

fn print_content(content: String) -> Result<(), PathTreeError> {
    print!("{}", content);
    Ok(())
}
