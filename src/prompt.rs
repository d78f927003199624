const PREAMBLE: &str = "Compare the following code files and provide suggestions for improvement:\n\n";
const CLOSING: &str = "Provide the suggestions in a clear and concise manner.";

/// Build the instruction sent to the model. Inputs are embedded verbatim.
pub fn build_prompt(correct_code: &str, submitted_code: &str) -> String {
    let mut out = String::with_capacity(
        PREAMBLE.len() + CLOSING.len() + correct_code.len() + submitted_code.len() + 40,
    );

    out.push_str(PREAMBLE);
    out.push_str("Correct Code:\n");
    out.push_str(correct_code);
    out.push_str("\n\n");
    out.push_str("Submitted Code:\n");
    out.push_str(submitted_code);
    out.push_str("\n\n");
    out.push_str(CLOSING);

    out
}

/// Form-style percent encoding (space becomes `+`), as the message content
/// is sent encoded.
pub fn encode_prompt(prompt: &str) -> String {
    urlencoding::encode(prompt).replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_both_snippets_in_order() {
        let prompt = build_prompt("print(1)", "print(2)");
        let correct = prompt.find("print(1)").unwrap();
        let submitted = prompt.find("print(2)").unwrap();
        assert!(correct < submitted);
        assert!(prompt.starts_with("Compare the following code files"));
        assert!(prompt.ends_with("clear and concise manner."));
    }

    #[test]
    fn exact_layout() {
        assert_eq!(
            build_prompt("a", "b"),
            "Compare the following code files and provide suggestions for improvement:\n\n\
             Correct Code:\na\n\n\
             Submitted Code:\nb\n\n\
             Provide the suggestions in a clear and concise manner."
        );
    }

    #[test]
    fn empty_inputs_keep_sections() {
        let prompt = build_prompt("", "");
        assert!(prompt.contains("Correct Code:\n\n\nSubmitted Code:\n\n\n"));
    }

    #[test]
    fn odd_characters_pass_through() {
        let correct = "fn main() {\u{0}}\n// ünïcode \"quotes\"";
        let submitted = "Submitted Code:\nnot a header";
        let prompt = build_prompt(correct, submitted);
        assert!(prompt.contains(correct));
        assert!(prompt.contains(submitted));
    }

    #[test]
    fn encodes_like_a_form() {
        assert_eq!(encode_prompt("a b\nc"), "a+b%0Ac");
        assert_eq!(encode_prompt("x=1&y"), "x%3D1%26y");
        assert_eq!(encode_prompt("plain"), "plain");
    }
}
