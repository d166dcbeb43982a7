mod config;
mod content;
mod listing;
mod loader;
mod parser;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::Source;

#[derive(Parser)]
#[command(name = "blog_loader", about = "Render the latest blog posts as HTML cards")]
struct Cli {
    /// GitHub user or org owning the posts repository
    #[arg(long, default_value = config::DEFAULT_OWNER)]
    owner: String,

    /// Repository holding the post files
    #[arg(long, default_value = config::DEFAULT_REPO)]
    repo: String,

    /// Directory inside the repository containing the posts
    #[arg(long, default_value = config::DEFAULT_POSTS_PATH)]
    path: String,

    /// How many of the newest posts to render
    #[arg(long, default_value_t = config::DEFAULT_MAX_POSTS)]
    max_posts: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the newest posts and render the blog cards fragment.
    /// On any pipeline failure the static fallback card is rendered instead.
    Render {
        /// Write the fragment here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the qualifying post files, newest first
    List,
    /// Fetch one post by filename and print its extracted fields
    Show { name: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let source = Source {
        owner: cli.owner,
        repo: cli.repo,
        posts_path: cli.path,
        max_posts: cli.max_posts,
    };
    let client = content::http_client()?;

    match cli.command {
        Commands::Render { output } => {
            let outcome = loader::load_posts(&client, &source).await;
            let html = loader::render_outcome(outcome, &source);
            match output {
                Some(path) => {
                    std::fs::write(&path, &html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {} bytes to {}", html.len(), path.display());
                }
                None => print!("{}", html),
            }
            Ok(())
        }
        Commands::List => {
            let files = listing::fetch_post_files(&client, &source).await?;
            let files = listing::sort_files_by_date(files);
            if files.is_empty() {
                println!("No post files found.");
                return Ok(());
            }

            println!(
                "{:>3} | {:<40} | {:<14} | {:<10}",
                "#", "File", "Category", "Created"
            );
            println!("{}", "-".repeat(78));
            for (i, f) in files.iter().enumerate() {
                let category = parser::category::from_filename(&f.name);
                println!(
                    "{:>3} | {:<40} | {:<14} | {:<10}",
                    i + 1,
                    truncate(&f.name, 40),
                    category.name,
                    render::format_date(&f.created_at),
                );
            }
            println!("\n{} post file(s)", files.len());
            Ok(())
        }
        Commands::Show { name } => {
            let files = listing::fetch_post_files(&client, &source).await?;
            let file = files
                .into_iter()
                .find(|f| f.name == name)
                .with_context(|| format!("No post file named {}", name))?;
            let post = content::load_post_content(&client, &file).await?;

            println!("File:      {}", post.filename);
            println!("Title:     {}", post.title);
            println!("Subtitle:  {}", post.subtitle);
            println!("Excerpt:   {}", truncate(&post.excerpt, 100));
            println!("Date:      {}", post.date);
            println!("Thumbnail: {}", post.thumbnail.as_deref().unwrap_or("-"));
            println!("Category:  {} ({})", post.category.name, post.category.color);
            println!("Created:   {}", render::format_date(&post.created_at));
            println!("URL:       {}", source.post_url(&post.filename));
            Ok(())
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
