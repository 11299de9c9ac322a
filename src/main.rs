//! gddoc — generate Godot class-reference XML from GDScript doc comments.
//!
//! Scans `##` doc comments above class, signal, method, member and constant
//! declarations and writes one document per input file into a `doc_classes`
//! directory next to the source (or into an explicit output directory).

mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "gddoc",
    about = "Generate Godot XML class documentation from GDScript doc comments"
)]
struct Cli {
    /// Input .gd files, directories, or glob patterns.
    #[arg(required = true)]
    files: Vec<String>,

    /// Output directory. Defaults to a doc_classes directory next to each input.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: xml (default), json
    #[arg(short = 'f', long, default_value = "xml")]
    format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let renderer = render::create_renderer(&cli.format)?;

    let input_files = expand_globs(&cli.files)?;
    if input_files.is_empty() {
        anyhow::bail!("no input files found");
    }

    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let doc = match parser::parse_file(path, &content) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let out_dir = output_dir_for(path, cli.output.as_deref());
        fs::create_dir_all(&out_dir).with_context(|| {
            format!("failed to create output directory: {}", out_dir.display())
        })?;

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("class");
        let out_path = out_dir.join(format!("{}.{}", stem, renderer.file_extension()));

        let rendered = renderer.render(&doc)?;
        fs::write(&out_path, rendered)
            .with_context(|| format!("failed to write {}", out_path.display()))?;

        println!("Generated documentation: {}", out_path.display());
    }

    Ok(())
}

/// File extensions recognized as source files.
const SUPPORTED_EXTENSIONS: &[&str] = &["gd"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Output directory for an input file: the explicit directory when given,
/// otherwise a doc_classes directory next to the input.
fn output_dir_for(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("doc_classes"),
    }
}
