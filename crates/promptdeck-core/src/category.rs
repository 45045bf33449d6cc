//! Design categories and aspect ratios

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of design output to generate prompts for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Poster,
    Banner,
    Newspaper,
    Cover,
    Artwork,
    Isometric,
    Menu,
    Travel,
    Card,
    Infographic,
    NotebookStyle,
}

impl Category {
    /// All categories, in the order they are presented to users
    pub const ALL: [Category; 11] = [
        Category::NotebookStyle,
        Category::Infographic,
        Category::Poster,
        Category::Banner,
        Category::Travel,
        Category::Menu,
        Category::Card,
        Category::Newspaper,
        Category::Cover,
        Category::Artwork,
        Category::Isometric,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Poster => "Advertising Poster",
            Category::Banner => "Website Banner",
            Category::Newspaper => "Editorial Layout",
            Category::Cover => "Book / Album Cover",
            Category::Artwork => "Digital Artwork",
            Category::Isometric => "3D Isometric Info",
            Category::Menu => "Restaurant Menu",
            Category::Travel => "Travel Banner",
            Category::Card => "Greeting Card",
            Category::Infographic => "Data Infographic",
            Category::NotebookStyle => "Notebook Document",
        }
    }

    /// Default aspect ratio used when the caller does not override it
    pub fn default_aspect_ratio(&self) -> &'static str {
        match self {
            Category::NotebookStyle => "3:4",
            Category::Infographic => "1:2",
            Category::Poster => "3:4",
            Category::Banner => "16:9",
            Category::Travel => "16:9",
            Category::Menu => "3:4",
            Category::Card => "3:4",
            Category::Newspaper => "3:4",
            Category::Cover => "1:1",
            Category::Artwork => "16:9",
            Category::Isometric => "16:9",
        }
    }

    /// Parse a user-facing category name (CLI flag value)
    pub fn parse(s: &str) -> Option<Category> {
        match s.to_ascii_lowercase().as_str() {
            "poster" => Some(Category::Poster),
            "banner" => Some(Category::Banner),
            "newspaper" => Some(Category::Newspaper),
            "cover" => Some(Category::Cover),
            "artwork" => Some(Category::Artwork),
            "isometric" => Some(Category::Isometric),
            "menu" => Some(Category::Menu),
            "travel" => Some(Category::Travel),
            "card" => Some(Category::Card),
            "infographic" => Some(Category::Infographic),
            "notebook" | "notebook-style" => Some(Category::NotebookStyle),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sub-format selector for the notebook-style category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotebookFormat {
    Briefing,
    Faq,
    Timeline,
    StudyGuide,
}

impl NotebookFormat {
    pub fn label(&self) -> &'static str {
        match self {
            NotebookFormat::Briefing => {
                "Briefing Doc - clearly tiered document body with highlight cards"
            }
            NotebookFormat::Faq => "FAQ - accordion list or question/answer cards",
            NotebookFormat::Timeline => {
                "Timeline - vertical or horizontal axis with linked event markers"
            }
            NotebookFormat::StudyGuide => "Study Guide - flashcards or margin notes",
        }
    }

    pub fn parse(s: &str) -> Option<NotebookFormat> {
        match s.to_ascii_lowercase().as_str() {
            "briefing" => Some(NotebookFormat::Briefing),
            "faq" => Some(NotebookFormat::Faq),
            "timeline" => Some(NotebookFormat::Timeline),
            "study-guide" | "study_guide" => Some(NotebookFormat::StudyGuide),
            _ => None,
        }
    }
}

/// A parsed "W:H" aspect ratio string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    /// Parse a "W:H" string. Returns None for anything malformed.
    pub fn parse(s: &str) -> Option<AspectRatio> {
        let (w, h) = s.trim().split_once(':')?;
        let width: u32 = w.trim().parse().ok()?;
        let height: u32 = h.trim().parse().ok()?;
        if width == 0 || height == 0 {
            return None;
        }
        Some(AspectRatio { width, height })
    }

    /// Wider than tall. Unparsable ratios are treated as tall by callers.
    pub fn is_wide(&self) -> bool {
        self.width > self.height
    }
}
