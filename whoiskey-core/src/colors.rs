//! Terminal palette for `whoiskey` output.
//!
//! Canonical keys are sky, resolved outcomes green, unmapped labels yellow
//! and secondary text grey. Only ANSI bright colors are used so the output
//! reads the same on any terminal theme.

use colored::{ColoredString, Colorize};

/// Palette colors applied to anything string-like.
pub trait CatppuccinExt {
    fn ctp_red(&self) -> ColoredString;
    fn ctp_yellow(&self) -> ColoredString;
    fn ctp_green(&self) -> ColoredString;
    fn sky(&self) -> ColoredString;
    fn lavender(&self) -> ColoredString;
    fn ctp_white(&self) -> ColoredString;
    fn subtext0(&self) -> ColoredString;
    fn overlay0(&self) -> ColoredString;
}

impl<S: AsRef<str>> CatppuccinExt for S {
    fn ctp_red(&self) -> ColoredString {
        self.as_ref().bright_red()
    }

    fn ctp_yellow(&self) -> ColoredString {
        self.as_ref().bright_yellow()
    }

    fn ctp_green(&self) -> ColoredString {
        self.as_ref().bright_green()
    }

    fn sky(&self) -> ColoredString {
        self.as_ref().bright_cyan()
    }

    fn lavender(&self) -> ColoredString {
        self.as_ref().bright_purple()
    }

    fn ctp_white(&self) -> ColoredString {
        self.as_ref().bright_white()
    }

    fn subtext0(&self) -> ColoredString {
        self.as_ref().white()
    }

    fn overlay0(&self) -> ColoredString {
        self.as_ref().bright_black()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::Color;

    #[test]
    fn test_palette_uses_ansi_colors() {
        assert_eq!("tech_email".sky().fgcolor(), Some(Color::BrightCyan));
        assert_eq!("mapped".ctp_green().fgcolor(), Some(Color::BrightGreen));
        assert_eq!("unmapped".ctp_yellow().fgcolor(), Some(Color::BrightYellow));
        assert_eq!("(tech)".overlay0().fgcolor(), Some(Color::BrightBlack));
        assert_eq!("─".subtext0().fgcolor(), Some(Color::White));
        assert_eq!(String::from("x").lavender().fgcolor(), Some(Color::BrightMagenta));
    }
}
