// Prompt fragments shared by every provider call.

/// System message sent ahead of every generation prompt.
pub const SYSTEM_PROMPT: &str = "You analyze LinkedIn posts and generate authentic comments.";
