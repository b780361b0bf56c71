use std::env;

/// Status glyphs used across terminal output.
///
/// Resolved once at process start from the environment and handed to
/// the reporter; nothing reads the environment mid-pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub error: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub information: &'static str,
}

const EMOJI: Glyphs = Glyphs {
    error: "❌ ",
    warning: "⚠️ ",
    success: "✅ ",
    information: "ℹ️ ",
};

// In Japan a check mark reads as "wrong" and an O-mark as "correct";
// the verdict glyphs swap for Japanese locales.
const EMOJI_JA: Glyphs = Glyphs {
    error: "✔️ ",
    warning: "⚠️ ",
    success: "⭕️ ",
    information: "ℹ️ ",
};

const NERD_FONT: Glyphs = Glyphs {
    error: "\u{f057} ",
    warning: "\u{f071} ",
    success: "\u{f058} ",
    information: "\u{f05a} ",
};

impl Glyphs {
    /// Pick the glyph set for this process.
    pub fn detect() -> Self {
        Self::select(
            env::var_os("NERD_FONT").is_some(),
            locale_from_env().as_deref(),
        )
    }

    fn select(nerd_font: bool, locale: Option<&str>) -> Self {
        if nerd_font {
            return NERD_FONT;
        }
        match locale {
            Some(l) if l.starts_with("ja") || l.starts_with("jpn") => EMOJI_JA,
            _ => EMOJI,
        }
    }
}

fn locale_from_env() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"].iter().find_map(|key| {
        let value = env::var(key).ok()?;
        if value.is_empty() { None } else { Some(value) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_emoji_set() {
        let glyphs = Glyphs::select(false, Some("en_US.UTF-8"));
        assert_eq!(glyphs, EMOJI);
    }

    #[test]
    fn no_locale_falls_back_to_emoji() {
        assert_eq!(Glyphs::select(false, None), EMOJI);
    }

    #[test]
    fn japanese_locale_swaps_verdict_glyphs() {
        let glyphs = Glyphs::select(false, Some("ja_JP.UTF-8"));
        assert_eq!(glyphs, EMOJI_JA);
        assert_eq!(glyphs.warning, EMOJI.warning);
        assert_ne!(glyphs.success, EMOJI.success);
    }

    #[test]
    fn nerd_font_wins_over_locale() {
        let glyphs = Glyphs::select(true, Some("ja_JP.UTF-8"));
        assert_eq!(glyphs, NERD_FONT);
    }
}
