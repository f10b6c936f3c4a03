//! Property tests for output-path resolution.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use docbench::{ensure_extension, resolve_output, DocbenchResult, Prompter, ScriptedPrompter};

/// A prompter that must never be consulted.
struct PanickingPrompter;

impl Prompter for PanickingPrompter {
    fn confirm(&self, message: &str, _default: bool) -> DocbenchResult<bool> {
        panic!("unexpected confirm prompt: {message}");
    }

    fn input(&self, message: &str, _default: &str) -> DocbenchResult<String> {
        panic!("unexpected input prompt: {message}");
    }
}

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: ensure_extension never panics and its result always ends
    /// with the extension (case-insensitively).
    #[test]
    fn property_ensure_extension_suffix(
        name in "(?s).{0,64}",
        ext in "\\.[a-z]{1,5}"
    ) {
        let result = ensure_extension(&name, &ext);
        prop_assert!(
            result.to_ascii_lowercase().ends_with(&ext.to_ascii_lowercase()),
            "{result:?} does not end with {ext:?}"
        );
    }

    /// PROPERTY: ensure_extension is idempotent.
    #[test]
    fn property_ensure_extension_idempotent(
        name in file_name(),
        ext in "\\.[a-z]{1,5}"
    ) {
        let once = ensure_extension(&name, &ext);
        let twice = ensure_extension(&once, &ext);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: an explicit output value never triggers a prompt, whatever
    /// the input path looks like.
    #[test]
    fn property_explicit_output_never_prompts(
        input in file_name(),
        explicit in file_name()
    ) {
        let resolved = resolve_output(
            Path::new(&input),
            Some(&explicit),
            ".txt",
            "text file",
            &PanickingPrompter,
        )
        .unwrap();
        prop_assert_eq!(resolved, PathBuf::from(ensure_extension(&explicit, ".txt")));
    }

    /// PROPERTY: with all-default answers the resolved path lands next to
    /// the input and carries the expected extension.
    #[test]
    fn property_default_answers_resolve_next_to_input(
        stem in "[A-Za-z0-9_-]{1,16}"
    ) {
        let input = PathBuf::from("/work").join(format!("{stem}.pdf"));
        let resolved = resolve_output(
            &input,
            None,
            ".txt",
            "text file",
            &ScriptedPrompter::empty(),
        )
        .unwrap();
        prop_assert_eq!(resolved.parent(), Some(Path::new("/work")));
        prop_assert_eq!(resolved, PathBuf::from(format!("/work/{stem}.txt")));
    }
}
