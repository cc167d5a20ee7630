//! Built-in template set used when nothing is stored yet.

use crate::template::{Category, Template};

const DEFAULTS: &[(&str, &str, Category, &str)] = &[
    (
        "default-greeting",
        "Warm welcome",
        Category::Greeting,
        "Hi <b>{client_name}</b>,<br>Thanks for reaching out! I'm {agent_name}, your \
         insurance advisor. When is a good time to talk about what you need covered?",
    ),
    (
        "default-follow-up",
        "Follow-up after call",
        Category::FollowUp,
        "Hi {client_name},<br>Great speaking with you today. As promised, here is a \
         quick recap:<ul><li>{point_one}</li><li>{point_two}</li></ul>Let me know if \
         you have any questions!",
    ),
    (
        "default-quote",
        "Quote ready",
        Category::Quote,
        "Hi {client_name},<br>Your <b>{product}</b> quote is ready: <b>{premium}</b> \
         per month, with a deductible of {deductible}.<br><i>This quote is valid until \
         {valid_until}.</i>",
    ),
    (
        "default-renewal",
        "Renewal reminder",
        Category::Renewal,
        "Hi {client_name},<br>Friendly reminder that your policy <b>{policy_number}</b> \
         renews on <u>{due_date}</u>. Reply here if you'd like to review your coverage \
         before then.",
    ),
    (
        "default-claims",
        "Claim status update",
        Category::Claims,
        "Hi {client_name},<br>Quick update on claim <b>{claim_number}</b>: {status}.\
         <br>Next step: {next_step}. I'll keep you posted!",
    ),
];

/// The built-in default templates, never used.
pub fn default_templates() -> Vec<Template> {
    DEFAULTS
        .iter()
        .map(|(id, title, category, content)| Template {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: *category,
            last_used: None,
        })
        .collect()
}
