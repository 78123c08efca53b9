use azure_vision::{AzureVisionConfig, TagOptions};
use std::path::Path;

/// Tags a local image using credentials from AZURE_CV_KEY and
/// AZURE_CV_ENDPOINT. An optional confidence threshold drops low-scoring
/// tags.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let image_path = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: tag_images <image_path> [min_confidence]");
        std::process::exit(1);
    });

    let min_confidence = std::env::args().nth(2).and_then(|v| v.parse::<f64>().ok());

    let config = AzureVisionConfig::from_env()?;
    let client = reqwest::Client::new();

    let options = TagOptions {
        min_confidence,
        ..Default::default()
    };

    println!("Tagging {}...", image_path);

    let tags = azure_vision::try_tag_image(
        &client,
        &config,
        Path::new(&image_path),
        &options,
    )
    .await?;

    println!("Tags ({}):", tags.len());
    for tag in &tags {
        println!("  - {}", tag);
    }

    Ok(())
}
