//! Best-effort extraction of JSON fragments from free-text model output.
//!
//! Models wrap their JSON in prose or markdown fences, so the first step
//! is a permissive slice from the first opening bracket to the last
//! closing one; only then is the slice parsed. Callers fall back to
//! deterministic templates when either step fails.

use serde::de::DeserializeOwned;

/// Slice from the first `[` to the last `]`, inclusive.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (start < end).then(|| &text[start..=end])
}

/// Slice from the first `{` to the last `}`, inclusive.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Deserialize the first JSON array found in `text`.
pub fn parse_embedded_array<T: DeserializeOwned>(text: &str) -> Option<T> {
    serde_json::from_str(extract_json_array(text)?).ok()
}

/// Deserialize the first JSON object found in `text`.
pub fn parse_embedded_object<T: DeserializeOwned>(text: &str) -> Option<T> {
    serde_json::from_str(extract_json_object(text)?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_extracted_from_prose() {
        let text = "Claro! Aqui estão os posts:\n```json\n[1, 2, 3]\n```\nEspero que ajude.";
        assert_eq!(extract_json_array(text), Some("[1, 2, 3]"));
    }

    #[test]
    fn array_slice_is_greedy_to_last_bracket() {
        let text = "[1] e também [2]";
        assert_eq!(extract_json_array(text), Some("[1] e também [2]"));
    }

    #[test]
    fn no_array_yields_none() {
        assert_eq!(extract_json_array("sem colchetes aqui"), None);
        assert_eq!(extract_json_array("só abre ["), None);
        assert_eq!(extract_json_array("] só fecha"), None);
    }

    #[test]
    fn object_extracted_from_fenced_reply() {
        let text = "Resultado:\n{\"cta\": \"Saber Mais\"}\nfim";
        assert_eq!(extract_json_object(text), Some("{\"cta\": \"Saber Mais\"}"));
    }

    #[test]
    fn parse_embedded_array_roundtrips() {
        let nums: Vec<u32> = parse_embedded_array("prefixo [1,2,3] sufixo").unwrap();
        assert_eq!(nums, vec![1, 2, 3]);
    }

    #[test]
    fn invalid_json_inside_brackets_is_none() {
        assert!(parse_embedded_array::<Vec<u32>>("[1, 2, oops]").is_none());
    }
}
