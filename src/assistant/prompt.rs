//! Rewrite prompt rendering.
//!
//! Prompts are strict `{variable}` templates:
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Unlike message templates, an unknown variable is an error rather than
//! being left in place. A typo in a custom prompt would otherwise send the
//! provider a prompt with the message content missing.

use crate::engine::{self, VariableMap};
use crate::error::{AppError, Result};

/// Variables available to rewrite prompts.
pub const PROMPT_VARIABLES: &[&str] = &["content", "instruction", "placeholders"];

/// System message sent ahead of the prompt by chat-style providers.
pub const SYSTEM_MESSAGE: &str =
    "You edit short customer messages for insurance sales agents. Reply with the edited message only.";

/// Built-in rewrite prompt.
pub const DEFAULT_REWRITE_PROMPT: &str = "\
Rewrite the message template below as instructed.

Instruction: {instruction}

Rules:
- Keep every placeholder written in curly braces, such as {{client_name}}, exactly as written. \
Placeholders in this template: {placeholders}
- Format only with <b>, <i> and <br> tags. Do not use Markdown or any other markup.
- Reply with the rewritten template only, without explanations or code fences.

Template:
{content}";

/// Error type for prompt rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in prompt")]
    UndefinedVariable { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in prompt")]
    UnmatchedBrace { position: usize },

    /// An empty variable name was found (e.g., `{}`).
    #[error("empty variable name '{{}}' at position {position} in prompt")]
    EmptyVariableName { position: usize },
}

/// Render a prompt template by substituting variables.
///
/// Whitespace around a variable name is ignored, so `{ content }` works.
pub fn render_prompt(template: &str, variables: &VariableMap) -> std::result::Result<String, PromptError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(PromptError::UnmatchedBrace { position: pos }),
                    }
                }

                if name.is_empty() {
                    return Err(PromptError::EmptyVariableName { position: pos });
                }

                let name = name.trim();
                match variables.get(name) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(PromptError::UndefinedVariable {
                            name: name.to_string(),
                            position: pos,
                        });
                    }
                }
            }
            '}' => {
                // `}}` collapses to one brace; a lone `}` is literal.
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}

/// Variables for rewriting `content` according to `instruction`.
pub fn rewrite_variables(content: &str, instruction: &str) -> VariableMap {
    let names = engine::extract_placeholders(content);
    let placeholders = if names.is_empty() {
        "(none)".to_string()
    } else {
        names
            .iter()
            .map(|name| format!("{{{}}}", name))
            .collect::<Vec<_>>()
            .join(", ")
    };

    engine::vars([
        ("content", content.to_string()),
        ("instruction", instruction.trim().to_string()),
        ("placeholders", placeholders),
    ])
}

/// Render the rewrite prompt, using `custom` when configured.
pub fn build_rewrite_prompt(custom: Option<&str>, content: &str, instruction: &str) -> Result<String> {
    let template = custom.unwrap_or(DEFAULT_REWRITE_PROMPT);
    render_prompt(template, &rewrite_variables(content, instruction)).map_err(|e| {
        AppError::ConfigError(format!(
            "rewrite prompt is invalid: {}\nAvailable variables: {}",
            e,
            PROMPT_VARIABLES.join(", ")
        ))
    })
}

/// Check that a custom prompt only uses known variables.
pub fn check_prompt_template(template: &str) -> std::result::Result<(), PromptError> {
    let probe = engine::vars(PROMPT_VARIABLES.iter().map(|name| (*name, "")));
    render_prompt(template, &probe).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::vars;

    #[test]
    fn test_simple_substitution() {
        let vars = vars([("name", "Alice"), ("greeting", "Hello")]);
        let result = render_prompt("{greeting}, {name}!", &vars).unwrap();
        assert_eq!(result, "Hello, Alice!");
    }

    #[test]
    fn test_escaped_braces() {
        let vars = VariableMap::new();
        assert_eq!(
            render_prompt("Keep {{client_name}} as is", &vars).unwrap(),
            "Keep {client_name} as is"
        );
        assert_eq!(render_prompt("a }} b } c", &vars).unwrap(), "a } b } c");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let vars = vars([("content", "Hi {name}, {{x}}")]);
        assert_eq!(
            render_prompt("Template: {content}", &vars).unwrap(),
            "Template: Hi {name}, {{x}}"
        );
    }

    #[test]
    fn test_undefined_variable_error() {
        let err = render_prompt("Hello {name}", &VariableMap::new()).unwrap_err();
        assert_eq!(
            err,
            PromptError::UndefinedVariable {
                name: "name".to_string(),
                position: 6
            }
        );
        assert_eq!(
            err.to_string(),
            "undefined variable 'name' at position 6 in prompt"
        );
    }

    #[test]
    fn test_unmatched_and_empty_errors() {
        let vars = VariableMap::new();
        assert_eq!(
            render_prompt("Hello {name", &vars).unwrap_err(),
            PromptError::UnmatchedBrace { position: 6 }
        );
        assert_eq!(
            render_prompt("Hello {}", &vars).unwrap_err(),
            PromptError::EmptyVariableName { position: 6 }
        );
        assert_eq!(
            PromptError::UnmatchedBrace { position: 5 }.to_string(),
            "unmatched '{' at position 5 in prompt"
        );
    }

    #[test]
    fn test_whitespace_in_variable_name() {
        let vars = vars([("content", "body")]);
        assert_eq!(render_prompt("[{ content }]", &vars).unwrap(), "[body]");
    }

    #[test]
    fn test_default_prompt_mentions_rules_and_content() {
        let prompt = build_rewrite_prompt(
            None,
            "Hi {client_name}, renew {policy}",
            "  make it friendlier ",
        )
        .unwrap();

        assert!(prompt.contains("Instruction: make it friendlier\n"));
        assert!(prompt.contains("such as {client_name}, exactly"));
        assert!(prompt.contains("Placeholders in this template: {client_name}, {policy}"));
        assert!(prompt.contains("<b>, <i> and <br>"));
        assert!(prompt.ends_with("Template:\nHi {client_name}, renew {policy}"));
    }

    #[test]
    fn test_prompt_without_placeholders() {
        let prompt = build_rewrite_prompt(None, "Thanks!", "shorter").unwrap();
        assert!(prompt.contains("Placeholders in this template: (none)"));
    }

    #[test]
    fn test_custom_prompt() {
        let prompt = build_rewrite_prompt(Some("{instruction}: {content}"), "Hi {x}", "shout").unwrap();
        assert_eq!(prompt, "shout: Hi {x}");
    }

    #[test]
    fn test_custom_prompt_with_unknown_variable() {
        let err = build_rewrite_prompt(Some("{body}"), "Hi", "shout").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("content, instruction, placeholders"));
    }

    #[test]
    fn test_check_prompt_template() {
        assert!(check_prompt_template(DEFAULT_REWRITE_PROMPT).is_ok());
        assert!(check_prompt_template("{content} {{literal}}").is_ok());
        assert!(check_prompt_template("{contents}").is_err());
        assert!(check_prompt_template("{content").is_err());
    }
}
