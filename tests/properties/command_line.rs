//! Property tests for command line parsing.

use proptest::prelude::*;

use biblio::presentation::command::{parse_line, tokenize, Command, Request};

fn plain_token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics, whatever the line.
    #[test]
    fn property_parse_never_panics(line in ".{0,80}") {
        let _ = parse_line(&line);
    }

    /// PROPERTY: Lines starting with `--` are always comments.
    #[test]
    fn property_comments_are_ignored(rest in ".{0,40}") {
        let line = format!("--{rest}");
        prop_assert_eq!(parse_line(&line), Ok(None));
    }

    /// PROPERTY: Quoting a token preserves it exactly, spaces included.
    #[test]
    fn property_quoted_tokens_survive(words in proptest::collection::vec(plain_token(), 1..4)) {
        let title = words.join(" ");
        let line = format!("acquerir \"{title}\" Author 2024-01-01");
        let parsed = parse_line(&line).unwrap();
        match parsed {
            Some(Command::Run(Request::Acquire { title: parsed_title, .. })) => {
                prop_assert_eq!(parsed_title, title)
            }
            other => prop_assert!(false, "unexpected parse: {:?}", other),
        }
    }

    /// PROPERTY: Extra whitespace between tokens does not change the tokens.
    #[test]
    fn property_whitespace_is_insignificant(
        tokens in proptest::collection::vec(plain_token(), 1..6),
        gap in "[ \t]{1,4}",
    ) {
        let line = tokens.join(gap.as_str());
        prop_assert_eq!(tokenize(&line).unwrap(), tokens);
    }

    /// PROPERTY: Ids parse when positive and are rejected otherwise.
    #[test]
    fn property_ids_must_be_positive(id in 0u64..1_000_000) {
        let result = parse_line(&format!("vendre {id}"));
        prop_assert_eq!(result.is_ok(), id > 0);
    }
}
