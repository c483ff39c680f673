//! Prompt assembly for the AI endpoints.
//!
//! The chat system instruction is the fixed persona, the static site
//! knowledge block, and an optional guidance line keyed on substrings of the
//! page path the visitor is on. The single-shot endpoints each use a fixed
//! system prompt.

pub const CHAT_PERSONA: &str =
    "You are WebNirvaan AI, an expert web & AI consultant. Be concise and helpful.";

/// Static knowledge about the agency, appended to the persona so the
/// assistant can answer site-specific questions without retrieval.
pub const SITE_KNOWLEDGE: &str = "\
WebNirvaan is a web & AI agency based in India. Services: business websites, \
e-commerce stores, custom web applications, AI chatbots and automation, and \
SEO. Typical projects take 2-6 weeks. Visitors can request a quote through \
the contact form or the AI pricing calculator.";

pub const PRICING_SYSTEM: &str =
    "You are an AI pricing assistant for web projects in India. Respond with price range and timeline.";

pub const SEO_AUDIT_SYSTEM: &str =
    "You are an SEO expert. Provide a quick SEO audit checklist.";

pub const EMAIL_REPLY_SYSTEM: &str =
    "Generate a short, professional email reply confirming we received the inquiry.";

pub const INQUIRY_SUMMARY_SYSTEM: &str =
    "Summarize this client requirement and suggest next steps.";

pub const RECOMMENDATION_SYSTEM: &str = "You recommend web solutions.";

/// Guidance keyed on substrings of the page path the chat widget reports.
pub fn page_guidance(page: &str) -> Option<&'static str> {
    if page.contains("pricing") {
        Some("The visitor is on the pricing page. Help them scope their project and point them at the AI pricing calculator for an estimate.")
    } else if page.contains("work") || page.contains("portfolio") {
        Some("The visitor is browsing past work. Relate answers to comparable projects and outcomes.")
    } else if page.contains("services") {
        Some("The visitor is on the services page. Explain what each service covers and which fits their need.")
    } else if page.contains("contact") {
        Some("The visitor is on the contact page. Encourage them to submit the form; the team replies within 24-48 hours.")
    } else {
        None
    }
}

/// Full system instruction for the chat relay.
pub fn chat_system_prompt(page: &str) -> String {
    let mut prompt = format!("{CHAT_PERSONA}\n\n{SITE_KNOWLEDGE}");
    if let Some(guidance) = page_guidance(page) {
        prompt.push_str("\n\n");
        prompt.push_str(guidance);
    }
    prompt
}

/// Prompt for the structured solution-recommendation endpoint. The model is
/// told to answer with strict JSON; the handler rejects anything that does
/// not parse.
pub fn recommendation_prompt(business: &str, goal: &str) -> String {
    format!(
        r#"You are a senior web & AI consultant.

Based on:
- Business type: {business}
- Primary goal: {goal}

Recommend the best website solution.

Return ONLY valid JSON in this format:

{{
  "title": string,
  "stack": string,
  "features": string[],
  "timeline": string,
  "summary": string
}}

Keep recommendations realistic for an Indian agency.
"#
    )
}
