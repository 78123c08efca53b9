use azure_vision::{AzureVisionConfig, CaptionOptions};
use std::path::Path;

/// Captions a local image using credentials from AZURE_CV_KEY and
/// AZURE_CV_ENDPOINT.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let image_path = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: describe_image <image_path> [language]");
        std::process::exit(1);
    });

    let language = std::env::args().nth(2).unwrap_or("en".to_string());

    let config = AzureVisionConfig::from_env()?;
    let client = reqwest::Client::new();

    let options = CaptionOptions {
        language,
        ..Default::default()
    };

    println!("Describing {}...", image_path);

    let caption = azure_vision::describe_image(
        &client,
        &config,
        Path::new(&image_path),
        &options,
    )
    .await?;

    println!("Caption: {}", caption);

    Ok(())
}
