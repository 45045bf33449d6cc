//! Promptdeck CLI - Generate AI image prompts from graphic-design briefs

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{analyze, generate, keys, library, preview, suggest};

#[derive(Parser)]
#[command(name = "promptdeck")]
#[command(about = "AI prompt generator for graphic-design briefs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate prompt variants for a design brief
    Generate {
        /// Category (poster, banner, newspaper, cover, artwork, isometric,
        /// menu, travel, card, infographic, notebook)
        category: String,

        /// Main subject of the design
        #[arg(long)]
        subject: String,

        /// Desired artistic style
        #[arg(long, default_value = "")]
        style: String,

        /// Mood / atmosphere
        #[arg(long, default_value = "")]
        mood: String,

        /// Color palette
        #[arg(long, default_value = "")]
        colors: String,

        /// Key visual elements
        #[arg(long, default_value = "")]
        elements: String,

        /// Free-text notes (raw analysis data for infographics)
        #[arg(long)]
        notes: Option<String>,

        /// Text/CSV file whose content feeds the analysis input
        #[arg(long)]
        data_file: Option<String>,

        /// Reference image file (logo or product shot)
        #[arg(long)]
        ref_image: Option<String>,

        /// Number of variants (1, 3 or 5)
        #[arg(long, default_value_t = 1)]
        count: u8,

        /// Aspect-ratio override (honored for infographics only)
        #[arg(long)]
        ratio: Option<String>,

        /// Notebook sub-format (briefing, faq, timeline, study-guide)
        #[arg(long)]
        notebook_format: Option<String>,

        /// Save the result to the library
        #[arg(long)]
        save: bool,
    },

    /// Render a preview image for a finished prompt
    Preview {
        /// The prompt to visualize
        prompt: String,

        /// Aspect ratio
        #[arg(long, default_value = "1:1")]
        ratio: String,

        /// Reference image file
        #[arg(long)]
        ref_image: Option<String>,

        /// Output image path
        #[arg(long, default_value = "preview.png")]
        out: String,

        /// Library id to attach the preview to
        #[arg(long)]
        attach: Option<String>,
    },

    /// Suggest style, mood, colors and elements for a subject
    Suggest {
        /// Subject of the design
        subject: String,

        /// Category the suggestion is for
        #[arg(long, default_value = "poster")]
        category: String,
    },

    /// Extract design attributes from an existing image
    Analyze {
        /// Path to the image file
        image: String,
    },

    /// Library of saved results
    #[command(subcommand)]
    Library(library::LibraryCommands),

    /// API key management
    #[command(subcommand)]
    Keys(keys::KeysCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            category,
            subject,
            style,
            mood,
            colors,
            elements,
            notes,
            data_file,
            ref_image,
            count,
            ratio,
            notebook_format,
            save,
        } => generate::run(generate::GenerateArgs {
            category,
            subject,
            style,
            mood,
            colors,
            elements,
            notes,
            data_file,
            ref_image,
            count,
            ratio,
            notebook_format,
            save,
        }),
        Commands::Preview {
            prompt,
            ratio,
            ref_image,
            out,
            attach,
        } => preview::run(&prompt, &ratio, ref_image.as_deref(), &out, attach.as_deref()),
        Commands::Suggest { subject, category } => suggest::run(&subject, &category),
        Commands::Analyze { image } => analyze::run(&image),
        Commands::Library(cmd) => library::run(cmd),
        Commands::Keys(cmd) => keys::run(cmd),
    }
}
