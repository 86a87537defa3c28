mod chat;
mod config;
mod fetch;
mod library;
mod mock;
mod model;
mod parser;

use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use reqwest::Client;

use crate::config::SheetConfig;
use crate::fetch::fetch_sheet;
use crate::library::Library;
use crate::model::{QuestionType, ResourceItem, Worksheet};

#[derive(Parser)]
#[command(name = "capy_library", about = "Thư viện số Capy: sheet-published resources and worksheets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load all four collections and show summary counts
    Load,
    /// List one resource collection
    Resources {
        #[arg(value_enum)]
        collection: Collection,
        /// Filter by grade (1-5)
        #[arg(short, long)]
        grade: Option<String>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
    /// List worksheets, or show one worksheet's questions
    Worksheets {
        /// Worksheet id to show in full
        #[arg(short, long)]
        id: Option<String>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
    /// Ask the Capy assistant a question
    Chat {
        message: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Collection {
    Videos,
    Ebooks,
    Lectures,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let config = SheetConfig::from_env();
    let client = Client::new();

    match cli.command {
        Commands::Load => {
            let library = Library::load(&client, &config).await;
            println!("Videos:     {}", library.videos.len());
            println!("Ebooks:     {}", library.ebooks.len());
            println!("Lectures:   {}", library.lectures.len());
            println!("Worksheets: {}", library.worksheets.len());
            let questions: usize = library.worksheets.iter().map(|w| w.questions.len()).sum();
            println!("Questions:  {}", questions);
        }
        Commands::Resources { collection, grade, limit } => {
            let (url, fallback) = match collection {
                Collection::Videos => (&config.videos, mock::videos()),
                Collection::Ebooks => (&config.ebooks, mock::ebooks()),
                Collection::Lectures => (&config.lectures, mock::lectures()),
            };
            let items = fetch_sheet(&client, url, fallback, parser::parse_resources).await;
            let filtered: Vec<&ResourceItem> = items
                .iter()
                .filter(|i| grade.as_deref().map_or(true, |g| i.grade == g))
                .take(limit)
                .collect();
            if filtered.is_empty() {
                println!("No resources found.");
                return Ok(());
            }
            print_resources(&filtered);
        }
        Commands::Worksheets { id, limit } => {
            let sheets =
                fetch_sheet(&client, &config.worksheets, mock::worksheets(), parser::parse_worksheets)
                    .await;
            match id {
                Some(id) => match sheets.iter().find(|w| w.id == id) {
                    Some(sheet) => print_worksheet(sheet),
                    None => println!("No worksheet with id '{}'.", id),
                },
                None => {
                    if sheets.is_empty() {
                        println!("No worksheets found.");
                        return Ok(());
                    }
                    print_worksheet_list(&sheets, limit);
                }
            }
        }
        Commands::Chat { message } => {
            let reply = chat::send_message(&client, &message).await;
            println!("{}", reply);
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

fn print_resources(items: &[&ResourceItem]) {
    println!(
        "{:>3} | {:<8} | {:<36} | {:<16} | {:<16} | {:>4}",
        "#", "Id", "Title", "Category", "Author", "Lớp"
    );
    println!("{}", "-".repeat(98));

    for (i, item) in items.iter().enumerate() {
        println!(
            "{:>3} | {:<8} | {:<36} | {:<16} | {:<16} | {:>4}",
            i + 1,
            truncate(&item.id, 8),
            truncate(&item.title, 36),
            truncate(&item.category, 16),
            truncate(&item.author, 16),
            item.grade
        );
    }

    let videos: Vec<_> = items.iter().filter(|i| i.embed_url.is_some()).collect();
    if !videos.is_empty() {
        println!("\n--- Playable ---");
        for item in &videos {
            println!("  {}: {}", truncate(&item.title, 36), item.embed_url.as_deref().unwrap_or(""));
        }
    }

    println!("\n{} resources", items.len());
}

fn print_worksheet_list(sheets: &[Worksheet], limit: usize) {
    println!("{:>3} | {:<10} | {:<44} | {:>9}", "#", "Id", "Title", "Questions");
    println!("{}", "-".repeat(75));
    for (i, sheet) in sheets.iter().take(limit).enumerate() {
        println!(
            "{:>3} | {:<10} | {:<44} | {:>9}",
            i + 1,
            truncate(&sheet.id, 10),
            truncate(&sheet.title, 44),
            sheet.questions.len()
        );
    }
    println!("\n{} worksheets | worksheets --id <id> for questions", sheets.len());
}

fn print_worksheet(sheet: &Worksheet) {
    println!("{} ({})", sheet.title, sheet.id);
    for (i, q) in sheet.questions.iter().enumerate() {
        println!("\nCâu {}: {}", i + 1, q.text);
        match q.question_type {
            QuestionType::MultipleChoice => {
                for (option, letter) in q.options.iter().flatten().zip('A'..) {
                    println!("  {}. {}", letter, option);
                }
            }
            QuestionType::Text => println!("  (tự luận)"),
        }
        if !q.correct_answer.is_empty() {
            println!("  Đáp án: {}", q.correct_answer);
        }
        if !q.explanation.is_empty() {
            println!("  Giải thích: {}", q.explanation);
        }
    }
    println!("\n{} questions", sheet.questions.len());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
