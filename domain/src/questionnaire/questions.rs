//! Question texts and the keyword triggers that unlock them

pub const LENGTH: &str = "What is the desired length of the output?";
pub const AUDIENCE: &str = "What is the target audience for this content?";
pub const KEYWORDS: &str = "Are there any specific keywords or phrases that must be included?";
pub const TONE: &str =
    "What is the overall tone or style you're aiming for (e.g., formal, informal, humorous)?";

/// The general pool, in canonical order
pub const GENERAL: [&str; 4] = [LENGTH, AUDIENCE, KEYWORDS, TONE];

pub const LANGUAGE: &str =
    "Which programming language are you referring to (e.g., Python, JavaScript)?";
pub const LIBRARIES: &str = "Are there any specific libraries or frameworks to be used or avoided?";
pub const EMAIL_PURPOSE: &str =
    "What is the purpose of this email (e.g., inquiry, marketing, follow-up)?";
pub const EMAIL_RECIPIENT: &str = "Who is the recipient of this email?";
pub const STORY_GENRE: &str =
    "What is the main genre of the story (e.g., fantasy, sci-fi, romance)?";
pub const STORY_SETTING: &str = "Are there any specific characters or settings to focus on?";
pub const MARKETING_PRODUCT: &str = "What is the product or service being marketed?";
pub const MARKETING_MESSAGE: &str = "What is the key message you want to convey?";
pub const BLOG_TOPIC: &str = "What is the main topic or title of the blog post/article?";
pub const BLOG_CALL_TO_ACTION: &str = "Is there a specific call to action you want to include?";
pub const EXPLANATION_AUDIENCE: &str =
    "What is the target audience for this explanation (e.g., beginner, intermediate, expert)?";
pub const COMPARISON_CRITERIA: &str =
    "What are the key aspects or criteria you want to focus on for the comparison/contrast?";
pub const MORE_DETAILS: &str = "Could you provide more details about the desired output?";
pub const PRIMARY_GOAL: &str = "What is the primary goal you want to achieve with this prompt?";

/// A keyword-gated group of context questions
pub struct Trigger {
    pub keywords: &'static [&'static str],
    pub questions: &'static [&'static str],
}

pub const CODE_TRIGGER: &[&str] = &["code", "script", "program"];

/// Context triggers in evaluation order. The code trigger is handled
/// separately because its second question is optional.
pub const TRIGGERS: &[Trigger] = &[
    Trigger {
        keywords: &["email"],
        questions: &[EMAIL_PURPOSE, EMAIL_RECIPIENT],
    },
    Trigger {
        keywords: &["story", "narrative"],
        questions: &[STORY_GENRE, STORY_SETTING],
    },
    Trigger {
        keywords: &["marketing", "advertisement"],
        questions: &[MARKETING_PRODUCT, MARKETING_MESSAGE],
    },
    Trigger {
        keywords: &["blog", "article"],
        questions: &[BLOG_TOPIC, BLOG_CALL_TO_ACTION],
    },
    Trigger {
        keywords: &["explain", "define", "what is", "describe"],
        questions: &[EXPLANATION_AUDIENCE],
    },
    Trigger {
        keywords: &["compare", "contrast", "difference between"],
        questions: &[COMPARISON_CRITERIA],
    },
];

/// Headline questions jump the queue when their theme word is in the prompt
pub const HEADLINES: [(&str, &str); 2] = [("story", STORY_GENRE), ("blog", BLOG_TOPIC)];
