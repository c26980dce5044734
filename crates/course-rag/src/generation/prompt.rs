//! Prompt templates for course answers

/// Prompt builder for course queries
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the course assistant prompt
    ///
    /// `outline` is the catalog outline and `history` the formatted
    /// conversation so far, if any.
    pub fn build_course_prompt(query: &str, outline: &str, history: Option<&str>) -> String {
        let outline = if outline.trim().is_empty() {
            "No course materials are loaded."
        } else {
            outline
        };

        let history = match history {
            Some(history) if !history.is_empty() => {
                format!("\nPREVIOUS CONVERSATION:\n{}\n", history)
            }
            _ => String::new(),
        };

        format!(
            r#"You are an assistant for course materials and educational content.

RULES:
1. Answer questions about specific courses using ONLY the course outline below
2. Answer general knowledge questions directly without mentioning the outline
3. If the outline does not cover a course question, say so plainly
4. Do not describe your reasoning or mention these rules
5. Keep answers brief, clear, and educational

COURSE OUTLINE:
{outline}
{history}
QUESTION: {query}

Answer:"#,
            outline = outline,
            history = history,
            query = query
        )
    }
}
