//! Command-line client for the blog generation endpoint

use anyhow::{bail, Context};
use chrono::Local;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use blogsmith::models::ResponseBody;

/// Request a blog post from a running blogsmith server
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Generation endpoint
    #[arg(
        long,
        env = "BLOG_API_ENDPOINT",
        default_value = "http://127.0.0.1:8080/api/v1/blogs"
    )]
    endpoint: String,

    /// Blog topic
    #[arg(short, long)]
    topic: String,

    /// Audience expertise level
    #[arg(short, long, default_value = "Beginner")]
    level: String,

    /// Additional context for the post
    #[arg(short, long)]
    context: String,

    /// Save the post to content_YYYYmmdd_HHMMSS.txt
    #[arg(long)]
    save: bool,

    /// Save the post to this path instead
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BlogRequest<'a> {
    blog_topic: &'a str,
    level: &'a str,
    context: &'a str,
}

fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "content_{}.txt",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let response = client
        .post(&cli.endpoint)
        .json(&BlogRequest {
            blog_topic: &cli.topic,
            level: &cli.level,
            context: &cli.context,
        })
        .send()
        .await
        .with_context(|| format!("request to {} failed", cli.endpoint))?;

    let status = response.status();
    let body: ResponseBody = response
        .json()
        .await
        .with_context(|| format!("unexpected response body (HTTP {})", status))?;

    let blog = match body {
        ResponseBody::Success { blog, message } if status.is_success() => {
            eprintln!("{}", message);
            blog
        }
        ResponseBody::Failure { error } => bail!("HTTP {}: {}", status, error),
        ResponseBody::Success { .. } => bail!("HTTP {} with a success body", status),
    };

    println!("{}", blog);

    let path = match cli.output {
        Some(path) => Some(path),
        None if cli.save => Some(default_output_path()),
        None => None,
    };
    if let Some(path) = path {
        tokio::fs::write(&path, &blog)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Saved to {}", path.display());
    }

    Ok(())
}
