//! resumex CLI - resume structure inference tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use resumex::{
    parse_batch, render, FileSkillSource, JsonFormat, ParseOptions, ParsedResume, TextItem,
};

#[derive(Parser)]
#[command(name = "resumex")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Infer resume structure from positioned PDF text items", long_about = None)]
struct Cli {
    /// Input JSON file of text items
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse text items into resume JSON
    Parse {
        /// Input JSON file of text items
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include per-field candidate scores
        #[arg(long)]
        scores: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Known-skills list to match skills against
        #[arg(long, value_name = "FILE", env = "RESUMEX_SKILLS")]
        skills: Option<PathBuf>,

        /// Skip text normalization and item merging
        #[arg(long)]
        raw: bool,
    },

    /// Print a human-readable resume summary
    Text {
        /// Input JSON file of text items
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show how lines were grouped into sections
    Sections {
        /// Input JSON file of text items
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Parse many files into an output directory
    Batch {
        /// Input JSON files of text items
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "resumex_output")]
        output: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Parse one file at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Parse {
            input,
            output,
            scores,
            compact,
            skills,
            raw,
        }) => cmd_parse(
            &input,
            output.as_deref(),
            scores,
            compact,
            skills.as_deref(),
            raw,
        ),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Sections { input }) => cmd_sections(&input),
        Some(Commands::Batch {
            inputs,
            output,
            compact,
            sequential,
        }) => cmd_batch(&inputs, &output, compact, sequential),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: parse to stdout if input is provided
            if let Some(input) = cli.input {
                cmd_parse(&input, None, false, false, None, false)
            } else {
                println!("{}", "Usage: resumex <FILE>".yellow());
                println!("       resumex --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_items(input: &Path) -> Result<Vec<TextItem>, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    Ok(serde_json::from_str(&json)?)
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn enrich(parsed: ParsedResume, skills: &Path) -> Result<ParsedResume, Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    let source = FileSkillSource::new(skills);
    Ok(runtime.block_on(parsed.with_known_skills(&source)))
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    scores: bool,
    compact: bool,
    skills: Option<&Path>,
    raw: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = if raw {
        ParseOptions::new().raw()
    } else {
        ParseOptions::new()
    };
    let items = read_items(input)?;
    log::debug!("Read {} text items from {}", items.len(), input.display());
    let mut parsed = resumex::parse_text_items_with_options(&items, &options)?;

    if let Some(path) = skills {
        parsed = enrich(parsed, path)?;
    }

    let format = json_format(compact);
    let json = if scores {
        render::to_json(&parsed, format)?
    } else {
        render::to_json(&parsed.resume, format)?
    };

    write_output(output, &json)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = resumex::parse_file(input)?;
    let text = render::to_text(&parsed.resume)?;
    write_output(output, &text)
}

fn cmd_sections(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let items = read_items(input)?;
    let sections = resumex::parse_sections(&items, &ParseOptions::default())?;

    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    print!("{}", render::sections_to_text(&sections));

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    compact: bool,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // Read inputs; unreadable files are reported but don't stop the batch
    pb.set_message("Reading inputs...");
    let mut documents = Vec::new();
    let mut names = Vec::new();
    let mut failures = 0usize;
    for input in inputs {
        match read_items(input) {
            Ok(items) => {
                documents.push(items);
                names.push(input);
            }
            Err(e) => {
                pb.println(format!("{} {}: {}", "Skipped".yellow(), input.display(), e));
                failures += 1;
                pb.inc(1);
            }
        }
    }

    pb.set_message("Parsing resumes...");
    let options = if sequential {
        ParseOptions::new().sequential()
    } else {
        ParseOptions::new()
    };
    let results = parse_batch(&documents, &options);
    pb.inc(1);

    pb.set_message("Writing JSON...");
    for (input, result) in names.into_iter().zip(results) {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        match result {
            Ok(parsed) => {
                let json = render::to_json(&parsed.resume, json_format(compact))?;
                fs::write(output_dir.join(format!("{}.resume.json", stem)), json)?;
            }
            Err(e) => {
                pb.println(format!("{} {}: {}", "Failed".red(), input.display(), e));
                failures += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "{} {} of {} resumes to {}",
        "Saved".green(),
        inputs.len() - failures,
        inputs.len(),
        output_dir.display()
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "resumex".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume structure inference tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/resumex".dimmed());
    println!("License: MIT");
}
