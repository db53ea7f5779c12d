// Shared prompt fragments and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Closing instruction placed before the format block of every prompt.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON.\nNo markdown.\nNo explanation.";

/// Substitutes `{key}` placeholders in a single left-to-right pass.
///
/// Inserted values are never rescanned, so candidate text containing `{role}`
/// or similar is passed through literally. Braces that do not name a known
/// key (e.g. JSON format blocks) are left as-is. `{json_only}` is always
/// available.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let value = vars
            .iter()
            .copied()
            .chain(std::iter::once(("json_only", JSON_ONLY_INSTRUCTION)))
            .find(|(key, _)| {
                tail.starts_with(key) && tail[key.len()..].starts_with('}')
            });
        match value {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
