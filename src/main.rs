use clap::Parser;
use journalyze::application::{
    AddEntryService, AnalyzeSentimentService, ConfigService, ExtractKeywordsService, InitService,
    ListEntriesService, ShowEntryService,
};
use journalyze::cli::{
    format_entry, format_entry_list, format_keywords, format_sentiment, parse_cli_date, Cli,
    Commands,
};
use journalyze::error::JournalyzeError;
use journalyze::infrastructure::FileSystemRepository;
use std::io::{IsTerminal, Read};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JournalyzeError> {
    match cli.command {
        Commands::Init { path } => {
            let config = InitService::execute(&path)?;
            println!("Initialized journalyze journal at {}", path.display());
            println!("Store: {}", config.store);
            Ok(())
        }
        Commands::Add { title, content } => {
            let repo = FileSystemRepository::discover()?;
            let service = AddEntryService::new(repo);

            let content = resolve_content(content)?;
            let added = service.execute(&title, content)?;

            println!(
                "Added entry #{} '{}' ({})",
                added.id,
                added.title,
                added.date.format("%d-%m-%Y")
            );
            Ok(())
        }
        Commands::List { from, to, limit } => {
            let repo = FileSystemRepository::discover()?;
            let service = ListEntriesService::new(repo);

            let from = from.as_deref().map(parse_cli_date).transpose()?;
            let to = to.as_deref().map(parse_cli_date).transpose()?;

            let listings = service.execute(from, to, limit)?;
            print!("{}", ensure_newline(format_entry_list(&listings)));
            Ok(())
        }
        Commands::Show { entry } => {
            let repo = FileSystemRepository::discover()?;
            let service = ShowEntryService::new(repo);

            let (id, entry) = service.execute(&entry)?;
            print!("{}", format_entry(id, &entry));
            Ok(())
        }
        Commands::Sentiment { entry } => {
            let repo = FileSystemRepository::discover()?;
            let service = AnalyzeSentimentService::new(repo);

            let outcome = service.execute(&entry)?;
            println!("{}", format_sentiment(&outcome));
            Ok(())
        }
        Commands::Keywords { entry } => {
            let repo = FileSystemRepository::discover()?;
            let service = ExtractKeywordsService::new(repo);

            let outcome = service.execute(&entry)?;
            println!("{}", format_keywords(&outcome));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("store = {}", config.store);
                println!("editor = {}", config.editor);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: journalyze config [--list | <key> [<value>]]");
                println!("Valid keys: store, editor, created");
                Ok(())
            }
        }
    }
}

/// Missing positional content falls back to piped stdin; `None` means the
/// add service should open the editor instead.
fn resolve_content(content: Option<String>) -> Result<Option<String>, JournalyzeError> {
    match content {
        Some(text) => Ok(Some(text)),
        None => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                Ok(None)
            } else {
                let mut buffer = String::new();
                stdin.read_to_string(&mut buffer)?;
                Ok(Some(buffer))
            }
        }
    }
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
