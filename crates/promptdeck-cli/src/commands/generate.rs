//! Generate command

use anyhow::{bail, Context, Result};
use promptdeck_core::{Category, GeneratedResult, NotebookFormat, PromptInputs, VariantCount};
use promptdeck_store::LibraryStore;

pub struct GenerateArgs {
    pub category: String,
    pub subject: String,
    pub style: String,
    pub mood: String,
    pub colors: String,
    pub elements: String,
    pub notes: Option<String>,
    pub data_file: Option<String>,
    pub ref_image: Option<String>,
    pub count: u8,
    pub ratio: Option<String>,
    pub notebook_format: Option<String>,
    pub save: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let category = parse_category(&args.category)?;
    let prompt_count = VariantCount::try_from(args.count)
        .map_err(|_| anyhow::anyhow!("--count must be 1, 3 or 5"))?;

    let notebook_format = match &args.notebook_format {
        Some(raw) => Some(NotebookFormat::parse(raw).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown notebook format '{}'. Use briefing, faq, timeline or study-guide",
                raw
            )
        })?),
        None => None,
    };

    let data_file_content = match &args.data_file {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read data file {}", path))?,
        ),
        None => None,
    };

    let reference_image = match &args.ref_image {
        Some(path) => Some(super::read_image_base64(path)?),
        None => None,
    };

    let inputs = PromptInputs {
        subject: args.subject,
        style: args.style,
        mood: args.mood,
        colors: args.colors,
        elements: args.elements,
        additional_info: args.notes,
        reference_image,
        data_file_content,
        prompt_count,
        selected_ratio: args.ratio,
        notebook_format,
    };

    let mut service = super::default_service()?;
    let prompts = service.generate_prompts(category, &inputs)?;

    println!("{} ({} variants)", category.label(), prompts.len());
    for (i, prompt) in prompts.iter().enumerate() {
        println!("\n--- Variant {} ---\n{}", i + 1, prompt);
    }

    if args.save {
        let result = GeneratedResult::new(category, inputs, prompts);
        let id = result.id.clone();
        LibraryStore::default_store().upsert(result);
        println!("\nSaved to library as {}", id);
    }

    Ok(())
}

pub fn parse_category(raw: &str) -> Result<Category> {
    match Category::parse(raw) {
        Some(category) => Ok(category),
        None => bail!(
            "Unknown category '{}'. Valid: poster, banner, newspaper, cover, artwork, \
             isometric, menu, travel, card, infographic, notebook",
            raw
        ),
    }
}
