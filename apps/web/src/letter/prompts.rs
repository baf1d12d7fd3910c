// Prompt constants for cover letter generation.
//
// Both fields are interpolated as-is, with no escaping or delimiters. A job
// listing or résumé can therefore carry instructions of its own.

/// System prompt template. Replace `{job_listing}` before sending.
pub const COVER_LETTER_SYSTEM_TEMPLATE: &str = "You are a cover letter creator. \
    Your task is to take the skills and experience from the user and create a cover letter \
    for the job posting provided. \
    Do NOT lie about technical skills, or infer skills. \
    Use what's already there to mold a cover letter to the specific job posting. \
    If you use the user's projects, you MUST include a brief description and link for each. \
    Please do NOT include any follow up text or boilerplate. \
    Here is the job listing: {job_listing}";

/// Prefix of the single user-role message.
pub const USER_INFO_PREFIX: &str = "User Information: ";

pub fn build_system_prompt(job_listing: &str) -> String {
    COVER_LETTER_SYSTEM_TEMPLATE.replace("{job_listing}", job_listing)
}

pub fn build_user_message(user_info: &str) -> String {
    format!("{USER_INFO_PREFIX}{user_info}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_embeds_listing_verbatim() {
        let listing = "Seeking Python engineer\n  - 3+ years <Django>";
        let system = build_system_prompt(listing);
        assert!(system.ends_with(&format!("Here is the job listing: {listing}")));
        assert!(!system.contains("{job_listing}"));
    }

    #[test]
    fn test_system_prompt_carries_rules() {
        let system = build_system_prompt("x");
        assert!(system.contains("Do NOT lie about technical skills, or infer skills."));
        assert!(system.contains("brief description and link for each"));
        assert!(system.contains("do NOT include any follow up text or boilerplate"));
    }

    #[test]
    fn test_empty_listing_is_not_rejected() {
        let system = build_system_prompt("");
        assert!(system.ends_with("Here is the job listing: "));
    }

    #[test]
    fn test_listing_containing_placeholder_is_not_expanded_twice() {
        let system = build_system_prompt("literal {job_listing} text");
        assert!(system.ends_with("literal {job_listing} text"));
    }

    #[test]
    fn test_user_message_prefix() {
        assert_eq!(
            build_user_message("5 years Python, built X"),
            "User Information: 5 years Python, built X"
        );
        assert_eq!(build_user_message(""), "User Information: ");
    }
}
