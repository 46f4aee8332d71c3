// Shared prompt fragments used by more than one template.
// Template-specific prompts live in relay/prompts.rs.

/// System instruction for templates that do not send the JSON-mode hint.
pub const JSON_ONLY_SYSTEM: &str = "Respond with valid JSON only.";

/// System instruction for the plan templates: JSON only, concrete numbers.
pub const JSON_SPECIFIC_SYSTEM: &str = "Return valid JSON only. Be specific and numeric.";

/// Clichés every template forbids in generated text.
pub const BANNED_PHRASES_INSTRUCTION: &str = "\
- Do NOT use clichés like \"leverage social media,\" \"offer services,\" \
\"do market research,\" or \"build a brand.\"";

/// Closing rule appended to every template.
pub const NO_AI_MENTION_INSTRUCTION: &str = "- Do not mention \"AI\" or \"large language models\".";
