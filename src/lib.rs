//! # azure-vision
//!
//! Azure Computer Vision v3.2 client for image captioning and tagging.
//!
//! ## Features
//!
//! - **Image captioning** via the Analyze operation's Description feature,
//!   with the original API contract preserved: non-200 responses and missing
//!   captions come back as the sentinel strings `"Error: {status}, {body}"`
//!   and `"No caption generated"`
//! - **Image tagging** via the Tags feature, in API order, with optional
//!   client-side confidence filtering
//! - **Bytes API** for in-memory images (no file I/O required)
//! - **Explicit configuration** — credentials live in a config struct passed
//!   to each call, with an optional [`AzureVisionConfig::from_env`] loader
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use azure_vision::{AzureVisionConfig, CaptionOptions, TagOptions};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AzureVisionConfig::from_env()?;
//!     let client = reqwest::Client::new();
//!
//!     // Caption an image
//!     let caption = azure_vision::describe_image(
//!         &client, &config,
//!         Path::new("photo.jpg"),
//!         &CaptionOptions::default(),
//!     ).await?;
//!     println!("Caption: {}", caption);
//!
//!     // Tag an image (failures collapse to an empty list)
//!     let tags = azure_vision::tag_image(
//!         &client, &config,
//!         Path::new("photo.jpg"),
//!         &TagOptions::default(),
//!     ).await;
//!     println!("Tags: {:?}", tags);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! `describe_image` folds API-level failures into its returned string, as
//! callers of the original endpoint contract expect. `tag_image` swallows
//! all failures into an empty list; use [`try_tag_image`] when you need to
//! tell "zero tags" apart from "call failed".

pub mod captioner;
pub mod extract;
pub mod tagger;
pub mod types;

// Re-export main types at crate root
pub use captioner::{describe_image, describe_image_bytes, CaptionError, NO_CAPTION};
pub use extract::{extract_caption, extract_tags, TagEntry};
pub use tagger::{tag_image, tag_image_bytes, try_tag_image, TagError};
pub use types::{AzureVisionConfig, CaptionOptions, ConfigError, TagOptions};
