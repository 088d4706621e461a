// Cross-cutting prompt fragments. Feature prompts live next to the feature
// (see roadmap/prompts.rs) and pull these in.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps the model from inventing links.
pub const REAL_RESOURCES_INSTRUCTION: &str = "\
    Only recommend resources that actually exist, with their real provider and a working https URL. \
    If you are not sure a specific resource exists, use a search URL on the provider's site instead. \
    Mark a resource free only if it can be used at no cost.";
