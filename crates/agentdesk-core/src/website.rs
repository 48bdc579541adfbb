//! Website-context composition: folds scraped fields into an appendable
//! prose block for the system prompts.

use crate::client::WebsiteContext;

/// Render the populated website fields as a labeled context section.
/// Returns `None` when no prose or contact field is set; the prompt then
/// omits the section and its heading entirely. Field order is fixed.
pub fn compose(ctx: &WebsiteContext) -> Option<String> {
    let mut sections: Vec<String> = Vec::new();

    if let Some(description) = &ctx.description {
        sections.push(format!("**Company Description:** {description}"));
    }
    if let Some(tagline) = &ctx.tagline {
        sections.push(format!("**Tagline:** \"{tagline}\""));
    }
    if let Some(about_us) = &ctx.about_us {
        sections.push(format!("**About the Business:** {about_us}"));
    }
    if let Some(phone) = &ctx.phone {
        sections.push(format!("**Business Phone:** {phone}"));
    }
    if let Some(email) = &ctx.email {
        sections.push(format!("**Business Email:** {email}"));
    }
    if let Some(address) = &ctx.address {
        sections.push(format!("**Address:** {address}"));
    }

    if sections.is_empty() {
        return None;
    }

    Some(format!(
        "\n---\n\n## Additional Business Context (from website)\n\n{}\n\nUse this information to provide more personalized and accurate responses. Reference the company's unique qualities when appropriate.\n",
        sections.join("\n\n")
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
