//! fixturegen CLI - test fixture generator

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use fixturegen::render::manifest_json;
use fixturegen::{
    generate_all_with, BatchReport, ContentType, FixtureBuilder, FixturePlan, JsonFormat,
    OutputFormat, PageSize, RenderOptions,
};

/// Default batch output directory.
const DEFAULT_OUTPUT_DIR: &str = "test_files";

#[derive(Parser)]
#[command(name = "fixturegen")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Generate PDF, text, HTML and Markdown test fixtures", long_about = None)]
struct Cli {
    /// Output directory for the standard batch
    #[arg(short, long, value_name = "DIR", env = "FIXTUREGEN_OUTPUT_DIR")]
    output: Option<PathBuf>,

    /// Page size for the standard batch
    #[arg(long, env = "FIXTUREGEN_PAGE_SIZE", default_value = "letter")]
    page_size: PageSize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the standard fixture set
    #[command(alias = "gen")]
    Generate {
        /// Output directory
        #[arg(
            short,
            long,
            value_name = "DIR",
            env = "FIXTUREGEN_OUTPUT_DIR",
            default_value = DEFAULT_OUTPUT_DIR
        )]
        output: PathBuf,

        /// Page size: letter, a4, or WIDTHxHEIGHT in points
        #[arg(long, env = "FIXTUREGEN_PAGE_SIZE", default_value = "letter")]
        page_size: PageSize,

        /// Compress PDF streams
        #[arg(long)]
        compress: bool,

        /// Skip the file listing
        #[arg(short, long)]
        quiet: bool,
    },

    /// Build a single fixture
    Build {
        /// Content type (text, image, table, metadata, encrypted, watermark, comparison, ocr, large)
        #[arg(value_name = "TYPE")]
        content_type: String,

        /// Number of pages
        #[arg(short, long, default_value = "1")]
        pages: u32,

        /// Output file (defaults to <TYPE>.<format extension>)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format (inferred from the file extension if not specified)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Page size: letter, a4, or WIDTHxHEIGHT in points
        #[arg(long, env = "FIXTUREGEN_PAGE_SIZE", default_value = "letter")]
        page_size: PageSize,

        /// Compress PDF streams
        #[arg(long)]
        compress: bool,
    },

    /// List content types and the standard fixture set
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Portable Document Format
    Pdf,
    /// Plain text
    Text,
    /// Standalone HTML page
    Html,
    /// Markdown
    #[value(alias = "md")]
    Markdown,
    /// JSON dump of the document tree
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Pdf => OutputFormat::Pdf,
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate {
            output,
            page_size,
            compress,
            quiet,
        }) => cmd_generate(&output, page_size, compress, quiet),
        Some(Commands::Build {
            content_type,
            pages,
            output,
            format,
            page_size,
            compress,
        }) => cmd_build(
            &content_type,
            pages,
            output.as_deref(),
            format,
            page_size,
            compress,
        ),
        Some(Commands::List { json }) => cmd_list(json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: generate the standard set
            let output = cli
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
            cmd_generate(&output, cli.page_size, false, false)
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        if e
            .downcast_ref::<fixturegen::Error>()
            .is_some_and(|e| e.is_missing_dependency())
        {
            eprintln!(
                "\nRebuild with PDF support:\n  {}",
                "cargo install fixturegen-cli --features pdf".cyan()
            );
        }
        std::process::exit(1);
    }
}

fn render_options(page_size: PageSize, compress: bool) -> RenderOptions {
    RenderOptions::new()
        .with_page_size(page_size)
        .with_compression(compress)
}

fn cmd_generate(
    output: &Path,
    page_size: PageSize,
    compress: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let plan = FixturePlan::standard();
    let builder = FixtureBuilder::new().with_render_options(render_options(page_size, compress));

    println!("{}", "=".repeat(60));
    println!("{}", "Generating Test Files".cyan().bold());
    println!("{}", "=".repeat(60));

    let pb = ProgressBar::new(plan.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = generate_all_with(&plan, &builder, output, |file| {
        pb.set_message(file.file_name());
        pb.inc(1);
    });
    let report = match report {
        Ok(report) => report,
        Err(e) => {
            pb.abandon_with_message("Failed");
            return Err(e.into());
        }
    };
    pb.finish_with_message("Done!");

    if !quiet {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &BatchReport) {
    println!("\n{}", "Files created:".green().bold());
    for file in &report.files {
        println!(
            "  {:30} {}",
            file.file_name(),
            format!("({} bytes)", format_size(file.size)).dimmed()
        );
    }

    println!("\n{}: {}", "Total files".bold(), report.file_count());
    println!(
        "{}: {} bytes",
        "Total size".bold(),
        format_size(report.total_size())
    );
    println!(
        "{} {}",
        "Output directory:".green(),
        report.output_dir.display()
    );
}

fn cmd_build(
    content_type: &str,
    pages: u32,
    output: Option<&Path>,
    format: Option<FormatArg>,
    page_size: PageSize,
    compress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content_type: ContentType = content_type.parse()?;
    log::debug!("Building {} fixture with {} pages", content_type, pages);

    let mut builder =
        FixtureBuilder::new().with_render_options(render_options(page_size, compress));
    if let Some(format) = format {
        builder = builder.with_format(format.into());
    }

    let path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_output(content_type, format));

    let file = builder.build(content_type, pages, &path)?;

    println!(
        "{} {} ({} bytes, {})",
        "Saved to".green(),
        file.path.display(),
        format_size(file.size),
        file.format
    );

    Ok(())
}

/// `<type>.<ext>` in the working directory.
fn default_output(content_type: ContentType, format: Option<FormatArg>) -> PathBuf {
    let format = format.map(OutputFormat::from).unwrap_or(OutputFormat::Pdf);
    PathBuf::from(format!("{}.{}", content_type, format.extension()))
}

fn cmd_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let plan = FixturePlan::standard();

    if json {
        println!("{}", manifest_json(&plan, JsonFormat::Pretty)?);
        return Ok(());
    }

    println!("{}", "Content Types".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for ct in ContentType::ALL {
        println!("  {:12} {}", ct.as_str().bold(), ct.description());
    }

    println!();
    println!("{}", "Standard Fixture Set".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for job in plan.jobs() {
        let available = OutputFormat::from_path(&job.file_name)
            .map(|f| f.is_available())
            .unwrap_or(false);
        let name = if available {
            job.file_name.as_str().normal()
        } else {
            job.file_name.as_str().dimmed()
        };
        println!("  {}", name);
    }
    println!("\n{}: {}", "Total files".bold(), plan.len());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "fixturegen".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Test fixture generator");
    println!();
    let formats: Vec<String> = OutputFormat::ALL
        .iter()
        .filter(|f| f.is_available())
        .map(|f| f.to_string())
        .collect();
    println!("Formats: {}", formats.join(", "));
    println!("License: MIT");
}

/// Group digits in threes: `1234567` -> `1,234,567`.
fn format_size(bytes: u64) -> String {
    let digits = bytes.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
