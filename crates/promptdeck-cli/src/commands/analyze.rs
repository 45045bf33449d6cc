//! Analyze command

use anyhow::Result;

pub fn run(image: &str) -> Result<()> {
    let payload = super::read_image_base64(image)?;
    let mut service = super::default_service()?;
    let details = service.extract_details_from_image(&payload)?;

    println!("Extracted design attributes from {}:", image);
    println!("  Style:    {}", details.style.as_deref().unwrap_or("-"));
    println!("  Mood:     {}", details.mood.as_deref().unwrap_or("-"));
    println!("  Colors:   {}", details.colors.as_deref().unwrap_or("-"));
    println!("  Elements: {}", details.elements.as_deref().unwrap_or("-"));
    Ok(())
}
