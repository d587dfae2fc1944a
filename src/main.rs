use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use itertools::Itertools;
use log::warn;
use std::path::PathBuf;

use quizbank::admin::AdminBank;
use quizbank::mirror::Mirror;
use quizbank::quiz::QuizBank;
use quizbank::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "quizbank")]
#[command(version, about = "Study quiz question bank tools", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, default_value = "warn")]
    log_level: String,
    #[arg(long, value_name = "DIR")]
    images: Option<PathBuf>,
    #[arg(long, default_value = "false")]
    no_mirror: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the questions the way the quiz reads them
    List { file: Option<PathBuf> },
    /// Load the questions the way the editor reads them and report problems
    Check { file: Option<PathBuf> },
    /// Rewrite the questions in the editor's export format
    Export {
        file: Option<PathBuf>,
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Delete one question by id and export the rest
    Remove {
        id: String,
        file: Option<PathBuf>,
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    let mut settings = Settings::default();
    if let Some(images) = args.images {
        settings.images_dir = images;
    }
    if args.no_mirror {
        settings.mirror_enabled = false;
    }

    let result = match args.command {
        Commands::List { file } => list(&settings, file),
        Commands::Check { file } => check(&settings, file),
        Commands::Export { file, out } => export(&settings, file, out),
        Commands::Remove { id, file, out } => remove(&settings, &id, file, out),
    };

    if let Err(e) = result {
        eprintln!("{}", format!("{:#}", e).red());
        std::process::exit(1);
    }
}

fn list(settings: &Settings, file: Option<PathBuf>) -> Result<()> {
    let source = file.unwrap_or_else(|| settings.source_file.clone());
    let bank = QuizBank::open(&source, settings).unwrap_or_else(|e| {
        eprintln!("{}", format!("Could not load questions: {:#}", e).red());
        QuizBank::empty(settings)
    });

    for (index, question) in bank.records().iter().enumerate() {
        let heading = format!("Câu {}/{} (#{})", index + 1, bank.len(), question.stt);
        if question.is_priority {
            println!("{} {} {}", heading.cyan(), "⚠ ĐIỂM LIỆT".yellow(), question.question);
        } else {
            println!("{} {}", heading.cyan(), question.question);
        }

        let answers = question
            .visible_answers()
            .into_iter()
            .map(|(label, text)| {
                if question.is_correct(label) {
                    format!("{}. {} ✓", label, text).green().to_string()
                } else {
                    format!("{}. {}", label, text)
                }
            })
            .join("   ");
        println!("    {}", answers);

        if let Some(path) = bank.image_path(index) {
            println!("    {}", path.display().to_string().dimmed());
        }
    }
    Ok(())
}

fn open_admin_bank(settings: &Settings, file: Option<PathBuf>) -> AdminBank {
    let source = file.unwrap_or_else(|| settings.source_file.clone());
    let bank = AdminBank::open(&source).unwrap_or_else(|e| {
        eprintln!("{}", format!("Could not load questions: {:#}", e).red());
        AdminBank::default()
    });
    if !settings.mirror_enabled {
        return bank;
    }
    match Mirror::in_cache_dir() {
        Ok(mirror) => bank.with_mirror(mirror),
        Err(e) => {
            warn!("Questions will not be mirrored: {:#}", e);
            bank
        }
    }
}

fn check(settings: &Settings, file: Option<PathBuf>) -> Result<()> {
    let bank = open_admin_bank(settings, file);
    let mut problems = 0;
    for (index, question) in bank.records().iter().enumerate() {
        if let Err(e) = question.check() {
            problems += 1;
            println!(
                "{}",
                format!("Câu {} (#{}): {:#}", index + 1, question.id, e).yellow()
            );
        }
    }
    println!(
        "{}",
        format!(
            "{} questions, {} with problems, next id {}",
            bank.len(),
            problems,
            bank.next_id()
        )
        .cyan()
    );
    Ok(())
}

fn export(settings: &Settings, file: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let bank = open_admin_bank(settings, file);
    write_export(settings, &bank, out)
}

fn remove(
    settings: &Settings,
    id: &str,
    file: Option<PathBuf>,
    out: Option<PathBuf>,
) -> Result<()> {
    let mut bank = open_admin_bank(settings, file);
    let index = bank
        .by_id(id)
        .map(|(index, _)| index)
        .with_context(|| format!("There is no question with id {}", id))?;
    let removed = bank.remove(index)?;
    println!("{}", format!("Removed #{}: {}", removed.id, removed.text).cyan());
    write_export(settings, &bank, out)
}

fn write_export(settings: &Settings, bank: &AdminBank, out: Option<PathBuf>) -> Result<()> {
    let destination = out.unwrap_or_else(|| settings.export_file.clone());
    bank.export(&destination)?;
    println!(
        "{}",
        format!(
            "Exported {} questions to {}",
            bank.len(),
            destination.display()
        )
        .green()
    );
    Ok(())
}
