//! Text normalization applied before tokenization.

/// Separator treated as a word boundary (typewriter em-dash).
pub const DASH_SEPARATOR: &str = "--";

/// Lowercase `text` and replace every `--` with a single space.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace(DASH_SEPARATOR, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases() {
        assert_eq!(normalize("The Cat SAT"), "the cat sat");
    }

    #[test]
    fn double_hyphen_becomes_space() {
        assert_eq!(normalize("well--actually"), "well actually");
    }

    #[test]
    fn single_hyphen_is_kept() {
        assert_eq!(normalize("well-known"), "well-known");
    }

    #[test]
    fn triple_hyphen_leaves_one() {
        // Replacement is left to right and non-overlapping.
        assert_eq!(normalize("a---b"), "a -b");
        assert_eq!(normalize("a----b"), "a  b");
    }

    #[test]
    fn idempotent_on_normalized_text() {
        let samples = [
            "The cat sat. The cat ran!",
            "well--actually",
            "Don't STOP -- (really)",
            "",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
