use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use hub_client::format::{clean_content, format_date, format_time_ago};
use hub_client::{ClientConfig, HeadlinesClient, Session};
use hub_core::{ArticleId, Error, Result};
use hub_storage::{ArticleStore, BookmarkStore, FileStore, KeyValueStore};
use hub_web::ProxyConfig;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Proxy backend the client commands talk to
    #[arg(long, default_value = "http://localhost:5000")]
    backend_url: String,
    /// Where cached articles and bookmarks are persisted
    #[arg(long, default_value = "newshub.json")]
    data: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the news proxy server (reads NEWS_API_KEY from the environment)
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Fetch and cache top headlines
    Headlines {
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Search the current headline page
    Search { query: String },
    /// Show a cached article by ID
    Article { id: String },
    /// Manage saved articles
    Bookmark {
        #[command(subcommand)]
        command: BookmarkCommands,
    },
}

#[derive(clap::Subcommand, Debug)]
enum BookmarkCommands {
    /// Save a cached article by ID
    Add { id: String },
    /// Remove a saved article by ID
    Remove { id: String },
    /// List saved articles
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    let Cli {
        backend_url,
        data,
        command,
    } = Cli::parse();

    match command {
        Commands::Serve { port } => {
            let mut config = ProxyConfig::from_env()?;
            if let Some(port) = port {
                config.port = port;
            }
            hub_web::serve(config).await
        }
        Commands::Headlines { country, category } => {
            let mut session = session(&backend_url, &data)?;
            if let Some(country) = country {
                session.set_country(country);
            }
            let articles = session.load_headlines(category.as_deref()).await?;
            if articles.is_empty() {
                println!("No headlines available.");
            }
            for article in articles {
                println!(
                    "{}  {:>10}  {} ({})",
                    article.id(),
                    format_time_ago(article.published_at),
                    article.title,
                    article.source.name
                );
            }
            Ok(())
        }
        Commands::Search { query } => {
            let mut session = session(&backend_url, &data)?;
            let articles = session.search(&query).await?;
            if articles.is_empty() {
                println!("No results found for \"{}\".", query);
            }
            for article in articles {
                println!("{}  {}", article.id(), article.title);
            }
            Ok(())
        }
        Commands::Article { id } => {
            let backend = backend(&data)?;
            let store = ArticleStore::new(backend.clone());
            let bookmarks = BookmarkStore::new(backend);
            let id = ArticleId::from(id);

            let article = store
                .retrieve(&id)
                .ok_or_else(|| Error::Storage(format!("No cached article with ID {}", id)))?;

            println!("{}", article.title);
            println!("{} | {}", article.source.name, format_date(article.published_at));
            if let Some(description) = &article.description {
                println!("\n{}", description);
            }
            if let Some(content) = &article.content {
                println!("\n{}", clean_content(content));
            }
            println!("\n{}", article.url);
            if bookmarks.is_bookmarked(&article.url) {
                println!("(bookmarked)");
            }
            Ok(())
        }
        Commands::Bookmark { command } => {
            let backend = backend(&data)?;
            let store = ArticleStore::new(backend.clone());
            let bookmarks = BookmarkStore::new(backend);

            match command {
                BookmarkCommands::Add { id } => {
                    let id = ArticleId::from(id);
                    let article = store.retrieve(&id).ok_or_else(|| {
                        Error::Storage(format!("No cached article with ID {}", id))
                    })?;
                    if bookmarks.add(&article)? {
                        println!("Saved \"{}\".", article.title);
                    } else {
                        println!("\"{}\" is already saved.", article.title);
                    }
                }
                BookmarkCommands::Remove { id } => {
                    bookmarks.remove(&ArticleId::from(id))?;
                    println!("Removed.");
                }
                BookmarkCommands::List => {
                    let saved = bookmarks.list();
                    if saved.is_empty() {
                        println!("No saved articles.");
                    }
                    for bookmark in saved {
                        println!(
                            "{}  {:>10}  {}",
                            bookmark.id,
                            format_time_ago(bookmark.saved_at),
                            bookmark.title
                        );
                    }
                }
            }
            Ok(())
        }
    }
}

fn backend(data: &Path) -> Result<Arc<dyn KeyValueStore>> {
    Ok(Arc::new(FileStore::open(data)?))
}

fn session(backend_url: &str, data: &Path) -> Result<Session> {
    let client = HeadlinesClient::new(ClientConfig::new(backend_url));
    let store = ArticleStore::new(backend(data)?);
    Ok(Session::new(client, store))
}
