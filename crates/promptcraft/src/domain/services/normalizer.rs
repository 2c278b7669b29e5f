//! Output Normalizer
//!
//! Models like to answer in Markdown; the front-ends show plain text.

/// Remove every `*` and trim surrounding whitespace.
///
/// Total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    text.replace('*', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "*",
        "**Bold** heading\n\n* bullet one\n* bullet two",
        "  * leading star with space",
        "trailing star *  ",
        "no markup at all",
        "a * b ** c",
        "\n\t**\t\n",
        "unicode ✨ *stays* ✨",
    ];

    #[test]
    fn test_strips_asterisks_and_whitespace() {
        assert_eq!(normalize("**Objective**: learn  "), "Objective: learn");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" * "), "");
    }

    #[test]
    fn test_output_has_no_asterisks_or_padding() {
        for sample in SAMPLES {
            let out = normalize(sample);
            assert!(!out.contains('*'), "asterisk left in {:?}", out);
            assert_eq!(out, out.trim(), "padding left in {:?}", out);
        }
    }

    #[test]
    fn test_idempotent() {
        for sample in SAMPLES {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once);
        }
    }
}
