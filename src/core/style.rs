//! Render styles (value transforms) and prompt decorations.

use crate::core::text::ansi::Paint;
use crate::error::{PromptError, Result};

const EMOJI_GLYPH: &str = "😃";

/// Maps a logical value to its display text.
///
/// `scale` is the number of terminal columns one logical character occupies after
/// rendering; the cursor math multiplies logical offsets by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Default,
    Password,
    Emoji,
    Invisible,
}

impl Transform {
    pub const NAMES: [&'static str; 4] = ["default", "password", "emoji", "invisible"];

    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(Self::Default),
            "password" => Ok(Self::Password),
            "emoji" => Ok(Self::Emoji),
            "invisible" => Ok(Self::Invisible),
            other => Err(PromptError::unknown_style(other)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Password => "password",
            Self::Emoji => "emoji",
            Self::Invisible => "invisible",
        }
    }

    pub fn scale(self) -> usize {
        match self {
            Self::Default | Self::Password => 1,
            Self::Emoji => 2,
            Self::Invisible => 0,
        }
    }

    pub fn render(self, input: &str) -> String {
        let count = input.chars().count();
        match self {
            Self::Default => input.to_string(),
            Self::Password => "*".repeat(count),
            Self::Emoji => EMOJI_GLYPH.repeat(count),
            Self::Invisible => String::new(),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::Default
    }
}

/// Leading status glyph: in progress, done, or aborted.
pub fn symbol(done: bool, aborted: bool) -> String {
    if aborted {
        Paint::Red.apply("✖")
    } else if done {
        Paint::Green.apply("✔")
    } else {
        Paint::Cyan.apply("?")
    }
}

/// Separator between the message and the value.
pub fn delimiter(completing: bool) -> String {
    Paint::Gray.apply(if completing { "…" } else { "›" })
}

#[cfg(test)]
mod tests {
    use super::{delimiter, symbol, Transform};
    use crate::core::text::width::visible_width;
    use crate::error::PromptError;

    #[test]
    fn registry_round_trips_names() {
        for name in Transform::NAMES {
            let transform = Transform::from_name(name).expect("known style");
            assert_eq!(transform.name(), name);
        }
    }

    #[test]
    fn unknown_style_is_rejected() {
        let err = Transform::from_name("sparkly").expect_err("unknown");
        assert!(matches!(err, PromptError::UnknownStyle { name } if name == "sparkly"));
    }

    #[test]
    fn rendered_width_matches_scale() {
        for transform in [
            Transform::Default,
            Transform::Password,
            Transform::Emoji,
            Transform::Invisible,
        ] {
            let rendered = transform.render("abcd");
            assert_eq!(visible_width(&rendered), 4 * transform.scale(), "{transform:?}");
        }
    }

    #[test]
    fn password_masks_each_character() {
        assert_eq!(Transform::Password.render("héllo"), "*****");
    }

    #[test]
    fn editing_decorations_are_single_column() {
        assert_eq!(visible_width(&symbol(false, false)), 1);
        assert_eq!(visible_width(&delimiter(false)), 1);
        assert_eq!(visible_width(&delimiter(true)), 1);
    }
}
