// Fixed client-side strings: quick prompts, the resume wrapper and local apologies.

/// Prepended to pasted resume text before it is sent.
pub const RESUME_PREFIX: &str = "Please analyze and validate my resume:\n\n";

/// Shown when the request fails or the server answers with a non-2xx status.
pub const CONNECTION_APOLOGY: &str = "Sorry, I'm having trouble connecting. Please try again.";

/// Shown when a successful reply carries neither content nor an error.
pub const EMPTY_REPLY_APOLOGY: &str = "Sorry, I couldn't process your request.";

/// The one-click questions offered under the chat log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickPrompt {
    AtsFriendly,
    FormatExperience,
    TechKeywords,
    ResumeLength,
    CommonMistakes,
}

impl QuickPrompt {
    pub const ALL: [QuickPrompt; 5] = [
        QuickPrompt::AtsFriendly,
        QuickPrompt::FormatExperience,
        QuickPrompt::TechKeywords,
        QuickPrompt::ResumeLength,
        QuickPrompt::CommonMistakes,
    ];

    pub fn text(self) -> &'static str {
        match self {
            QuickPrompt::AtsFriendly => "What makes a resume ATS-friendly?",
            QuickPrompt::FormatExperience => "How should I format my work experience?",
            QuickPrompt::TechKeywords => "What keywords should I include for tech roles?",
            QuickPrompt::ResumeLength => "How long should my resume be?",
            QuickPrompt::CommonMistakes => "What are common resume mistakes to avoid?",
        }
    }
}

/// Wraps pasted resume text, or `None` when there is nothing to send.
pub fn wrap_resume(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    Some(format!("{RESUME_PREFIX}{text}"))
}
