//! System-prompt assembly and the conversational sliding window.

use qanun_core::models::{Category, GenerationMessage, Message, MessageRole};

/// Build the system prompt for one turn: role framing, the legal-domain
/// framing when a category is known, and the retrieved context.
pub fn build_system_prompt(category: Option<Category>, context: &str) -> String {
    let mut prompt = String::from(
        "أنت مساعد قانوني. أجب اعتماداً على النصوص القانونية المرفقة فقط، \
         واذكر رقم المادة والقانون عند الاستشهاد، ونبّه السائل إلى أن الإجابة \
         لا تغني عن استشارة محامٍ.",
    );

    if let Some(cat) = category {
        prompt.push_str("\nمجال الاستفسار: ");
        prompt.push_str(cat.name_ar());
    }

    if context.is_empty() {
        prompt.push_str("\nلا توجد نصوص مسترجعة لهذا الاستفسار.");
    } else {
        prompt.push_str("\n\nالنصوص المسترجعة:\n");
        prompt.push_str(context);
    }
    prompt
}

/// The most recent `window` messages, mapped to the generation wire
/// shape, oldest first.
pub fn recent_messages(messages: &[Message], window: usize) -> Vec<GenerationMessage> {
    let start = messages.len().saturating_sub(window);
    messages[start..]
        .iter()
        .map(|m| GenerationMessage {
            role: match m.role {
                MessageRole::User => "user".to_string(),
                MessageRole::Assistant => "assistant".to_string(),
            },
            content: m.content.clone(),
        })
        .collect()
}
