//! Instruction Composition
//!
//! Builds the text handed to the generation service. One canonical template
//! per operation, shared by every front-end.

use crate::domain::entities::{GenerationInstruction, PromptRequest};

/// Join tags with ", ", or "None" when there are none
pub fn tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        "None".to_string()
    } else {
        tags.join(", ")
    }
}

/// Refine template: objective, structure, specificity, tone, word count
pub fn refine_instruction(request: &PromptRequest) -> GenerationInstruction {
    GenerationInstruction::new(format!(
        r#"You are a professional prompt generator. Your task is to take the following user input and transform it into a high-quality, optimized prompt for the target AI model '{target_model}'. The prompt should help the user learn about the topic in a structured and comprehensive way. Follow these guidelines:

1. **Objective**: Clearly define the purpose of the prompt (e.g., learning about Agentic AI from basics).
2. **Structure**: Break the prompt into logical sections (e.g., foundational concepts, advanced topics, applications).
3. **Specificity**: Include specific details or examples to guide the model.
4. **Tone**: Use a professional and engaging tone.
5. **Word Count**: Ensure the prompt adheres to the word limit: {word_range}.

**Tags**: Incorporate the following tags into the prompt: {tags}.

**User Input**:
{prompt}

**Optimized Prompt**:"#,
        target_model = request.target_model,
        word_range = request.length.word_range(),
        tags = tag_list(&request.tags),
        prompt = request.prompt,
    ))
}

/// Evaluate template: clarity, specificity, structure, tone, suggestions
pub fn evaluation_instruction(prompt: &str) -> GenerationInstruction {
    GenerationInstruction::new(format!(
        r#"You are a professional prompt evaluator. Your task is to analyze the following user input and provide feedback on how to improve it. Focus on the following aspects:

1. **Clarity**: Is the prompt clear and easy to understand?
2. **Specificity**: Does the prompt provide enough details for the AI model to generate a meaningful response?
3. **Structure**: Is the prompt logically structured?
4. **Tone**: Is the tone appropriate for the intended audience?
5. **Suggestions**: Provide specific suggestions for improvement.

**User Input**:
{prompt}

**Evaluation**:"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::LengthTier;

    #[test]
    fn test_tag_list() {
        assert_eq!(tag_list(&[]), "None");
        assert_eq!(
            tag_list(&["technical".to_string(), "concise".to_string()]),
            "technical, concise"
        );
        // Duplicates are kept as given
        assert_eq!(tag_list(&["a".to_string(), "a".to_string()]), "a, a");
    }

    #[test]
    fn test_refine_instruction_embeds_fields() {
        let request = PromptRequest::new("Explain recursion")
            .with_length(LengthTier::Short)
            .with_target_model("Gemini")
            .with_tags(vec!["beginner".to_string()]);

        let instruction = refine_instruction(&request);
        let text = instruction.as_str();

        assert!(text.contains("300-500 words"));
        assert!(text.contains("'Gemini'"));
        assert!(text.contains("Incorporate the following tags into the prompt: beginner."));
        assert!(text.contains("**User Input**:\nExplain recursion\n"));
        assert!(text.ends_with("**Optimized Prompt**:"));
    }

    #[test]
    fn test_refine_instruction_per_tier() {
        for tier in LengthTier::ALL {
            let request = PromptRequest::new("Tell me about tides").with_length(tier);
            let text = refine_instruction(&request).into_inner();
            assert!(text.contains(tier.word_range()));
            assert!(text.contains("Tell me about tides"));
        }

        let fallback = PromptRequest::new("x").with_length(LengthTier::from_label("gigantic"));
        assert!(refine_instruction(&fallback)
            .as_str()
            .contains("800-1000 words"));
    }

    #[test]
    fn test_refine_instruction_defaults() {
        let text = refine_instruction(&PromptRequest::new("Summarize a paper")).into_inner();
        assert!(text.contains("'ChatGPT'"));
        assert!(text.contains("the prompt: None."));
        assert!(text.contains("800-1000 words"));
    }

    #[test]
    fn test_refine_instruction_is_deterministic() {
        let request = PromptRequest::new("Plan a trip").with_tags(vec!["budget".to_string()]);
        assert_eq!(refine_instruction(&request), refine_instruction(&request));
    }

    #[test]
    fn test_evaluation_instruction() {
        let text = evaluation_instruction("Write a poem about {braces}").into_inner();
        assert!(text.contains("**User Input**:\nWrite a poem about {braces}\n"));
        for aspect in ["Clarity", "Specificity", "Structure", "Tone", "Suggestions"] {
            assert!(text.contains(&format!("**{}**", aspect)));
        }
        assert!(text.ends_with("**Evaluation**:"));
    }
}
