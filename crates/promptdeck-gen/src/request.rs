//! Request building: brief -> fully-specified generation request
//!
//! Pure derivation, no I/O. Category-specific instruction blocks are
//! dispatched through a lookup table so adding a category is a data
//! change, not a control-flow edit.

use promptdeck_core::{AspectRatio, Category, NotebookFormat, PromptInputs};

/// A fully-specified generation request, ready for the wire client
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub content: String,
    pub response_schema: serde_json::Value,
    pub aspect_ratio: String,
}

/// Everything an instruction block may draw on
struct InstructionContext<'a> {
    category: Category,
    aspect_ratio: &'a str,
    inputs: &'a PromptInputs,
}

type InstructionFn = for<'a> fn(&InstructionContext<'a>) -> String;

/// Categories with specialized instruction blocks. Anything not listed
/// falls through to the generic layout instruction.
const CATEGORY_INSTRUCTIONS: &[(Category, InstructionFn)] = &[
    (Category::Isometric, isometric_instruction),
    (Category::Infographic, infographic_instruction),
    (Category::NotebookStyle, notebook_instruction),
];

/// Derive the complete request for a brief. Identical inputs always
/// yield an identical request.
pub fn build_request(category: Category, inputs: &PromptInputs) -> GenerationRequest {
    let aspect_ratio = resolve_aspect_ratio(category, inputs);
    let count = inputs.prompt_count.as_u8();

    let ctx = InstructionContext {
        category,
        aspect_ratio: &aspect_ratio,
        inputs,
    };
    let category_instruction = CATEGORY_INSTRUCTIONS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, f)| f(&ctx))
        .unwrap_or_else(|| generic_instruction(&ctx));

    let reference_instruction = if inputs.reference_image.is_some() {
        "The user supplied a reference image (logo or product shot). Every prompt \
         must include guidance to incorporate this reference image naturally."
    } else {
        ""
    };

    let system_instruction = format!(
        "You are a prompt-engineering master with a deep sense for design.\n\
         \n\
         TASK:\n\
         Analyze the user's brief, then think carefully and produce exactly {count} DISTINCT prompts.\n\
         The goal is to offer several creative takes on the same underlying subject.\n\
         \n\
         VARIANT REQUIREMENTS (when count > 1):\n\
         - Prompt 1: hews closest to the original description and the SUPPLIED DATA; accuracy first.\n\
         - Prompt 2 (if any): a bolder artistic treatment (striking lighting, breakthrough composition).\n\
         - Prompt 3 (if any): abstraction or an altered camera angle for a fresh perspective.\n\
         - Prompts 4-5 (if any): a shifted palette or mood for a completely different feel, still on topic.\n\
         \n\
         PROMPT STRUCTURE:\n\
         [Publication type] + [Detailed subject] + [Concrete data/statistics, if any] + \
         [Visual and layout description] + [Lighting/Color] + [Technical specs/Render style] + --ar {ratio}\n\
         \n\
         {category_instruction}\n\
         {reference_instruction}\n\
         \n\
         The output must be JSON of the form: {{ \"prompts\": [\"string\", \"string\", ...] }}",
        count = count,
        ratio = aspect_ratio,
        category_instruction = category_instruction,
        reference_instruction = reference_instruction,
    );

    let content = format!(
        "Subject: {subject}\n\
         Desired style: {style}\n\
         Mood: {mood}\n\
         Colors: {colors}\n\
         Key elements: {elements}\n\
         \n\
         INPUT DATA FOR ANALYSIS (takes priority for infographic/notebook briefs):\n\
         1. File content: \"\"\"{file}\"\"\"\n\
         2. Additional notes / raw data: \"\"\"{notes}\"\"\"\n\
         \n\
         Produce {count} high-quality prompts.",
        subject = inputs.subject,
        style = inputs.style,
        mood = inputs.mood,
        colors = inputs.colors,
        elements = inputs.elements,
        file = inputs.data_file_content.as_deref().unwrap_or("None"),
        notes = inputs.additional_info.as_deref().unwrap_or("None"),
        count = count,
    );

    GenerationRequest {
        system_instruction,
        content,
        response_schema: multi_prompt_schema(),
        aspect_ratio,
    }
}

/// An explicit ratio override applies only to infographics; every other
/// category uses its default.
fn resolve_aspect_ratio(category: Category, inputs: &PromptInputs) -> String {
    if category == Category::Infographic {
        if let Some(ratio) = &inputs.selected_ratio {
            return ratio.clone();
        }
    }
    category.default_aspect_ratio().to_string()
}

fn generic_instruction(ctx: &InstructionContext<'_>) -> String {
    format!(
        "Respect the standard layout conventions of a {}.",
        ctx.category.label()
    )
}

fn isometric_instruction(_ctx: &InstructionContext<'_>) -> String {
    "For ISOMETRIC output, keep the Unreal Engine 5 / 3D render technical framing \
     fixed, but vary the lighting angle or the arrangement of objects for each variant."
        .to_string()
}

fn infographic_instruction(ctx: &InstructionContext<'_>) -> String {
    let wide = AspectRatio::parse(ctx.aspect_ratio)
        .map(|r| r.is_wide())
        .unwrap_or(false);
    let layout = if wide {
        "HORIZONTAL: arrange the data left to right, or as a grid layout in the \
         manner of a dashboard or presentation slide."
    } else {
        "VERTICAL: arrange the data top to bottom as a storytelling flow."
    };

    format!(
        "SPECIAL MODE - INFOGRAPHIC (AUTOMATIC DATA ANALYSIS):\n\
         You act as a DATA ANALYST as well as a GRAPHIC DESIGNER.\n\
         \n\
         LAYOUT REQUIREMENT: {layout}\n\
         \n\
         DATA SOURCES TO ANALYZE:\n\
         1. The uploaded file content, if any.\n\
         2. IMPORTANT: the 'Additional notes' field. Treat it as a raw report to be visualized.\n\
         \n\
         MANDATORY IN EVERY RESULT PROMPT:\n\
         1. DATA EXTRACTION: read the notes or file and pull out 3-5 concrete figures, \
         time points or core claims.\n\
         2. BE SPECIFIC: the prompt must NOT merely say \"draw a chart\". It must describe \
         the data itself. Instead of \"a pie chart\", write \"a 3D pie chart showing a 60% \
         red segment and a 40% blue segment, labeled with the extracted figures\".\n\
         3. STRUCTURE: Header (large title) -> Body (charts/blocks) -> Footer.\n\
         \n\
         VISUAL STYLE:\n\
         Use \"High-end corporate visualization\", \"Futuristic data interface\", or \
         \"Clean minimal vector infographics\"."
    )
}

fn notebook_instruction(ctx: &InstructionContext<'_>) -> String {
    let format = ctx
        .inputs
        .notebook_format
        .unwrap_or(NotebookFormat::Briefing);

    format!(
        "SPECIAL MODE - SMART DOCUMENT STYLE:\n\
         Goal: an image mimicking a smart-document interface (a clean digital document UI).\n\
         \n\
         REQUIRED FORMAT: {format}\n\
         \n\
         DESIGN PRINCIPLES (MATERIAL DESIGN):\n\
         1. Background: clean white or very light gray (#F9F9F9).\n\
         2. Accent colors: pastels (lavender, mint, blush pink) as highlights or card fills.\n\
         3. Typography: a modern sans-serif, heavy black for headings, dark gray for body text.\n\
         4. Layout: card-based UI with rounded corners (16px/24px) and a very soft shadow.\n\
         5. Content:\n\
            - Extract data from the notes or file content to populate the mockup.\n\
            - Show placeholder text blocks (lorem ipsum or short summaries) organized cleanly.\n\
         \n\
         PROMPT REQUIREMENT:\n\
         Describe a digital UI mockup presenting the document in the required format: detailed \
         text blocks, bold headings, floating pastel note cards. Smart, clean, high-tech yet friendly.",
        format = format.label(),
    )
}

/// Response schema for prompt generation: `{ "prompts": string[] }`
pub fn multi_prompt_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "prompts": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "The list of optimized prompts"
            }
        },
        "required": ["prompts"]
    })
}

/// Response schema for the suggest / analyze operations
pub fn detail_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "style": { "type": "STRING", "description": "Artistic style" },
            "mood": { "type": "STRING", "description": "Mood / atmosphere" },
            "colors": { "type": "STRING", "description": "Color palette" },
            "elements": { "type": "STRING", "description": "Key visual elements" }
        },
        "required": ["style", "mood", "colors", "elements"]
    })
}
