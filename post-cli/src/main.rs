use anyhow::Result;
use clap::{Parser, Subcommand};
use post_client::PostClient;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the post server
    #[arg(short, long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all posts
    List,

    /// Show a single post
    Get {
        #[arg(short, long)]
        id: i64,
    },

    /// Create a new post
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,
    },

    /// Update an existing post
    Update {
        #[arg(short, long)]
        id: i64,

        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,
    },

    /// Delete a post
    Delete {
        #[arg(short, long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let server = cli
        .server
        .or_else(|| std::env::var("POST_SERVER_URL").ok())
        .unwrap_or_else(|| "http://localhost:5000".to_string());

    println!("🔌 Connecting to: {}", server);

    let client = PostClient::new(server);

    match &cli.command {
        Commands::List => match client.list_posts().await {
            Ok(posts) => {
                println!("✅ Found {} posts", posts.len());
                println!();

                if posts.is_empty() {
                    println!("   No posts found");
                    println!("   Tip: Create your first post: post-cli create --title \"My Post\" --content \"Hello\"");
                } else {
                    for (i, post) in posts.iter().enumerate() {
                        println!("   {}. [{}] {}", i + 1, post.id, post.title);
                        println!("      Created: {}", post.created_at);
                        println!("      Content: {}", truncate(&post.content, 50));
                        println!();
                    }
                }
            }
            Err(e) => {
                println!("❌ Failed to list posts: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Get { id } => match client.get_post(*id).await {
            Ok(post) => {
                println!("✅ Post retrieved:");
                println!("   ID: {}", post.id);
                println!("   Title: {}", post.title);
                println!("   Content: {}", post.content);
                println!("   Created: {}", post.created_at);
                println!("   Updated: {}", post.updated_at);
            }
            Err(e) => {
                if e.is_not_found() {
                    println!("❌ Post #{} not found", id);
                    println!("   Tip: Use 'list' command to see available posts");
                } else {
                    println!("❌ Error: {}", e);
                }
                std::process::exit(1);
            }
        },

        Commands::Create { title, content } => {
            println!("📝 Creating new post...");

            match client.create_post(title, content).await {
                Ok(post) => {
                    println!("✅ Post created successfully!");
                    println!("   ID: {}", post.id);
                    println!("   Title: {}", post.title);
                    println!("   Created: {}", post.created_at);
                }
                Err(e) => {
                    if e.is_invalid_request() {
                        println!("❌ Post was rejected: {}", e);
                    } else {
                        println!("❌ Failed to create post: {}", e);
                    }
                    std::process::exit(1);
                }
            }
        }

        Commands::Update { id, title, content } => {
            println!("✏️ Updating post #{}", id);

            match client.update_post(*id, title, content).await {
                Ok(post) => {
                    println!("✅ Post updated successfully!");
                    println!("   ID: {}", post.id);
                    println!("   Title: {}", post.title);
                    println!("   Content: {}", post.content);
                    println!("   Updated: {}", post.updated_at);
                }
                Err(e) => {
                    if e.is_not_found() {
                        println!("❌ Post #{} not found", id);
                    } else {
                        println!("❌ Failed to update post: {}", e);
                    }
                    std::process::exit(1);
                }
            }
        }

        Commands::Delete { id } => match client.delete_post(*id).await {
            Ok(message) => {
                println!("✅ {}", message);
            }
            Err(e) => {
                if e.is_not_found() {
                    println!("❌ Post #{} not found", id);
                } else {
                    println!("❌ Failed to delete post: {}", e);
                }
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len])
    }
}
