use clap::Parser;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "insights-cli")]
#[command(about = "Submit an insights request to a running Gavagai relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// API key for the relay's edge auth, when enabled.
    #[arg(short, long)]
    key: Option<String>,

    /// Gavagai project to query.
    #[arg(short, long)]
    project_id: String,

    #[arg(long)]
    topic: Option<String>,

    #[arg(long)]
    sentiment: Option<String>,

    /// Text snippets to include in the payload (repeatable).
    #[arg(long = "text")]
    texts: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    if let Some(key) = &cli.key {
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", key))?);
    }

    let payload = json!({
        "projectId": cli.project_id,
        "topic": cli.topic,
        "texts": cli.texts,
        "sentiment": cli.sentiment,
    });

    let res = client
        .post(format!("{}/api/v1/gavagai/insights", cli.url))
        .headers(headers)
        .json(&payload)
        .send()
        .await?;

    print_response(res).await?;

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: relay returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
