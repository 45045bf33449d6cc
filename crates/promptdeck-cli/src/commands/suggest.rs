//! Suggest command

use anyhow::Result;

pub fn run(subject: &str, category: &str) -> Result<()> {
    let category = super::generate::parse_category(category)?;
    let mut service = super::default_service()?;
    let details = service.suggest_details(subject, category.label())?;

    println!("Suggestions for \"{}\" ({}):", subject, category.label());
    println!("  Style:    {}", details.style.as_deref().unwrap_or("-"));
    println!("  Mood:     {}", details.mood.as_deref().unwrap_or("-"));
    println!("  Colors:   {}", details.colors.as_deref().unwrap_or("-"));
    println!("  Elements: {}", details.elements.as_deref().unwrap_or("-"));
    Ok(())
}
