use super::options::Options;

/// Fixed system message sent alongside every prompt.
pub const SYSTEM_MESSAGE: &str =
    "You are Context, a selection-based assistant that processes highlighted text.";

/// Instruction header that opens every prompt.
pub const INSTRUCTIONS: &str = "You are Context, a selection-based assistant.

You are given text that the user has highlighted from their screen.
This text may come from:
- a conversation (chat, messages, email),
- a document or book,
- notes, code comments, or mixed content.

Assume the highlighted text is the ONLY context you are allowed to use.

Rules:
- Use ONLY the highlighted text. Do NOT invent facts, names, times, or details.
- If the text is a conversation, assume the LAST message is the one to respond to.
- If the text is informational (document, book, notes), answer or explain based strictly on it.
- Match the language of the highlighted text.
- Be natural, human, and paste-ready.
- Be concise by default.
- If crucial information is missing, ask exactly ONE short clarification question instead of guessing.
- Output ONLY the final result (reply, explanation, rewrite, etc.).
- Do NOT include explanations, meta-comments, labels, quotes, or formatting instructions.

If the user provides extra instructions (intent, style, length), follow them.
If nothing is specified, default to a concise, neutral response.

Now produce the result.";

const CONVERSATION_NOTE: &str =
    "Note: This appears to be a conversation. Respond to the last message.";

const INFORMATIONAL_NOTE: &str =
    "Note: This appears to be informational content. Explain or answer based strictly on it.";

/// Builds the user prompt for `text`.
///
/// Sections always appear in the same order: instructions, option lines,
/// the content note, then the highlighted text verbatim.
pub fn build_prompt(text: &str, is_conversation: bool, options: &Options) -> String {
    let mut prompt = String::with_capacity(INSTRUCTIONS.len() + text.len() + 256);
    prompt.push_str(INSTRUCTIONS);

    if let Some(intent) = &options.intent {
        prompt.push_str("\n\nUser intent: ");
        prompt.push_str(intent);
    }
    if let Some(style) = &options.style {
        prompt.push_str("\nStyle: ");
        prompt.push_str(style);
    }
    if let Some(length) = options.length {
        prompt.push_str("\nLength: ");
        prompt.push_str(length.as_str());
    }

    prompt.push_str("\n\n");
    prompt.push_str(if is_conversation {
        CONVERSATION_NOTE
    } else {
        INFORMATIONAL_NOTE
    });

    prompt.push_str("\n\nHighlighted text:\n");
    prompt.push_str(text);

    prompt
}
