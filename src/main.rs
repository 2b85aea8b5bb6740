//! folio - LaTeX manuscript importer and academic formatter

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio::academic::{parse_date, title_page};
use folio::{Chapter, ChapterId, ImportFile, Importer, StyleKind, audit, format_chapter};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "LaTeX manuscript importer and academic formatter", long_about = None)]
#[command(after_help = "EXAMPLES:
    folio import thesis.tex              Split a LaTeX file into plain-text chapters
    folio format --style mla ch1.txt     Lay out a chapter in MLA style
    folio audit --style apa ch1.txt      List APA formatting issues")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert LaTeX files into plain-text chapters
    Import {
        /// LaTeX source files, imported in order
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Print chapters as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply academic formatting to a plain-text chapter
    Format {
        #[arg(short, long, default_value = "apa")]
        style: StyleKind,

        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Report formatting issues without changing anything
    Audit {
        #[arg(short, long, default_value = "apa")]
        style: StyleKind,

        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print issues as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a title page
    TitlePage {
        #[arg(short, long, default_value = "apa")]
        style: StyleKind,

        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        #[arg(long, default_value = "")]
        institution: String,

        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Import { files, json } => import(&files, json),
        Command::Format { style, file } => format(&file, style),
        Command::Audit { style, file, json } => check(&file, style, json),
        Command::TitlePage {
            style,
            title,
            author,
            institution,
            date,
        } => show_title_page(style, &title, &author, &institution, date.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn import(paths: &[PathBuf], json: bool) -> Result<(), String> {
    let files = paths
        .iter()
        .map(ImportFile::read)
        .collect::<folio::Result<Vec<_>>>()
        .map_err(|e| e.to_string())?;

    let chapters = Importer::new().import_batch(&files);
    tracing::info!(files = files.len(), chapters = chapters.len(), "import finished");

    if json {
        let out = serde_json::to_string_pretty(&chapters).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    for chapter in &chapters {
        println!("== {} ({}) ==", chapter.title, chapter.id);
        if chapter.needs_paragraph_analysis() {
            println!("[needs paragraph review]");
        }
        println!("{}\n", chapter.clean_content());
    }
    Ok(())
}

fn read_chapter(path: &Path) -> Result<Chapter, String> {
    let file = ImportFile::read(path).map_err(|e| e.to_string())?;
    Ok(Chapter::new(
        ChapterId::from(file.name.as_str()),
        file.name.clone(),
        file.text,
    ))
}

fn format(path: &Path, style: StyleKind) -> Result<(), String> {
    let mut chapter = read_chapter(path)?;
    format_chapter(&mut chapter, style).map_err(|e| e.to_string())?;
    println!("{}", chapter.content);
    Ok(())
}

fn check(path: &Path, style: StyleKind, json: bool) -> Result<(), String> {
    let chapter = read_chapter(path)?;
    let issues = audit(&chapter.content, style);

    if json {
        let out = serde_json::to_string_pretty(&issues).map_err(|e| e.to_string())?;
        println!("{out}");
    } else if issues.is_empty() {
        println!("No {style} formatting issues found.");
    } else {
        for issue in &issues {
            println!("- {issue}");
        }
    }
    Ok(())
}

fn show_title_page(
    style: StyleKind,
    title: &str,
    author: &str,
    institution: &str,
    date: Option<&str>,
) -> Result<(), String> {
    let date = match date {
        Some(s) => parse_date(s).map_err(|e| e.to_string())?,
        None => chrono::Local::now().date_naive(),
    };
    println!("{}", title_page(style, title, author, institution, date));
    Ok(())
}
