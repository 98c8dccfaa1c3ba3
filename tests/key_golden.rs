
use text_prompt::{decode_keys, PromptKeybindings};

#[test]
fn key_vectors_match_fixture() {
    let bindings = PromptKeybindings::default();
    let raw = fixture::read_fixture("key_vectors.tsv");
    for (idx, line) in raw.lines().enumerate() {
        let line_num = idx + 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        assert!(
            parts.len() == 2,
            "line {line_num}: expected 2 columns, got {}",
            parts.len()
        );
        let input = fixture::unescape(parts[0]);
        let expected = parts[1].trim();

        let keys = decode_keys(&input);
        assert_eq!(keys.len(), 1, "line {line_num}: {input:?} decoded to {keys:?}");
        let actual = match bindings.action_for(&keys[0]) {
            Some(action) => format!("{action:?}"),
            None => "none".to_string(),
        };
        assert_eq!(actual, expected, "line {line_num}: action for {input:?}");
    }
}
