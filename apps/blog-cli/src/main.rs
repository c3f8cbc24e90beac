//! Command-line client for the Blog API.
//!
//! One subcommand per view of the original frontend: list, detail, create,
//! edit, and delete with interactive confirmation.

use std::io::{self, Read, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use blog_shared::{CreatePostRequest, PostResponse, UpdatePostRequest};

mod api;

use api::BlogApiClient;

const PREVIEW_LEN: usize = 150;

#[derive(Parser)]
#[command(name = "blog-cli")]
#[command(about = "Command-line client for the Blog API", long_about = None)]
struct Cli {
    /// Base URL of the Blog API
    #[arg(
        long,
        global = true,
        env = "BLOG_API_URL",
        default_value = "http://localhost:5000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all posts, newest first
    List,

    /// Show a single post
    Show { id: String },

    /// Create a new post
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Post body; read from stdin when omitted
        #[arg(long)]
        content: Option<String>,
    },

    /// Edit a post; only the provided fields change
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a post
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = BlogApiClient::new(&cli.api_url);

    match cli.command {
        Commands::List => list(&client).await,
        Commands::Show { id } => show(&client, &id).await,
        Commands::Create {
            title,
            author,
            content,
        } => create(&client, title, author, content).await,
        Commands::Edit { id, title, content } => edit(&client, &id, title, content).await,
        Commands::Delete { id, yes } => delete(&client, &id, yes).await,
    }
}

async fn list(client: &BlogApiClient) -> Result<()> {
    let posts = client.list().await.context("Failed to fetch posts")?;

    if posts.is_empty() {
        println!("No posts yet. Create your first blog post to get started!");
        return Ok(());
    }

    for post in &posts {
        println!("{}", post.title);
        println!(
            "  By: {} | {}",
            post.author,
            post.created_at.format("%b %e, %Y")
        );
        println!("  {}", preview(&post.content));
        println!("  id: {}", post.id);
        println!();
    }

    Ok(())
}

async fn show(client: &BlogApiClient, id: &str) -> Result<()> {
    let post = client.get(id).await.context("Failed to fetch post")?;
    print_post(&post);
    Ok(())
}

async fn create(
    client: &BlogApiClient,
    title: String,
    author: String,
    content: Option<String>,
) -> Result<()> {
    let content = match content {
        Some(content) => content,
        None => {
            // Mirror `--content -` style tools: the body comes from stdin.
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read content from stdin")?;
            buf
        }
    };

    let post = client
        .create(&CreatePostRequest {
            title,
            content,
            author,
        })
        .await
        .context("Failed to create post. Please try again.")?;

    println!("Created post {}", post.id);
    Ok(())
}

async fn edit(
    client: &BlogApiClient,
    id: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    if title.is_none() && content.is_none() {
        bail!("Nothing to update - pass --title and/or --content");
    }

    let post = client
        .update(id, &UpdatePostRequest { title, content })
        .await
        .context("Failed to update post")?;

    println!("Updated post {}", post.id);
    Ok(())
}

async fn delete(client: &BlogApiClient, id: &str, yes: bool) -> Result<()> {
    if !yes && !confirm("Are you sure you want to delete this post?")? {
        println!("Aborted.");
        return Ok(());
    }

    client.delete(id).await.context("Failed to delete post")?;

    println!("Post deleted successfully");
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn print_post(post: &PostResponse) {
    println!("{}", post.title);
    println!(
        "By: {} | created {} | updated {}",
        post.author,
        post.created_at.format("%b %e, %Y %H:%M"),
        post.updated_at.format("%b %e, %Y %H:%M")
    );
    println!();
    // Paragraphs are newline-separated; render them with a blank line between.
    for paragraph in post.content.split('\n').filter(|p| !p.trim().is_empty()) {
        println!("{paragraph}");
        println!();
    }
}

fn preview(content: &str) -> String {
    let flat = content.replace('\n', " ");
    if flat.chars().count() <= PREVIEW_LEN {
        return flat;
    }
    let cut: String = flat.chars().take(PREVIEW_LEN).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn short_content_is_not_truncated() {
        assert_eq!(preview("hello"), "hello");
    }

    #[test]
    fn long_content_is_truncated_with_ellipsis() {
        let content = "x".repeat(400);
        let p = preview(&content);
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), super::PREVIEW_LEN + 3);
    }

    #[test]
    fn newlines_are_flattened_in_previews() {
        assert_eq!(preview("a\nb"), "a b");
    }
}
