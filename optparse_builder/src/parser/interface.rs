use std::env;
use terminal_size::{terminal_size, Width};

use crate::constant::*;

// The wrapped text stops short of the full width.
const WRAP_MALUS: usize = 2;

/// Greedy-fill `text` into lines, for a left margin of `indent` within `columns`.
///
/// A line breaks at the whitespace which would carry it past `columns - 2`.
/// Newlines are hard breaks.
/// The text after the last whitespace is kept on the current line, even when it overflows.
/// A word wider than the line is placed on its own line, never split.
/// The margin is not included in the returned lines.
pub(crate) fn wrap(text: &str, indent: usize, columns: usize) -> Vec<&str> {
    let limit = columns.saturating_sub(WRAP_MALUS);
    let breaks = text
        .char_indices()
        .filter(|(_, c)| matches!(c, ' ' | '\t' | '\n'))
        .map(|(position, c)| (position, c == '\n'));
    let mut lines = Vec::default();
    let mut line_start = 0;
    let mut word_start = 0;

    for (position, hard) in breaks {
        if word_start > line_start && indent + text[line_start..position].chars().count() > limit
        {
            lines.push(&text[line_start..word_start - 1]);
            line_start = word_start;
        }

        if hard {
            lines.push(&text[line_start..position]);
            line_start = position + 1;
        }

        word_start = position + 1;
    }

    lines.push(&text[line_start..]);
    lines
}

/// The source of the column width which help messages are wrapped to.
pub trait WidthProvider {
    /// The number of columns; read once per render.
    fn columns(&self) -> usize;
}

/// The width of the current terminal.
///
/// Taken from the `COLUMNS` environment variable, else the terminal itself, else 80.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalWidth;

impl WidthProvider for TerminalWidth {
    fn columns(&self) -> usize {
        env::var(COLUMNS_VARIABLE)
            .ok()
            .and_then(|columns| columns.trim().parse::<usize>().ok())
            .filter(|columns| *columns > 0)
            .or_else(|| terminal_size().map(|(Width(width), _)| width as usize))
            .unwrap_or(DEFAULT_COLUMNS)
    }
}

/// A fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub usize);

impl WidthProvider for FixedWidth {
    fn columns(&self) -> usize {
        self.0
    }
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, message: String);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        print!("{message}");
    }

    fn print_error(&self, message: String) {
        eprint!("{message}");
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", vec![""])]
    #[case("abc", vec!["abc"])]
    #[case("abc def", vec!["abc def"])]
    #[case("aaa bbb ccc", vec!["aaa bbb ccc"])]
    #[case("aaa bbb ccc ddd", vec!["aaa bbb", "ccc ddd"])]
    #[case("aaaa bbbb cc", vec!["aaaa", "bbbb cc"])]
    #[case("aaaaaaaaaaaa b", vec!["aaaaaaaaaaaa b"])]
    #[case("aaaaaaaaaaaa b c", vec!["aaaaaaaaaaaa", "b c"])]
    #[case("a aaaaaaaaaaaa b", vec!["a", "aaaaaaaaaaaa b"])]
    #[case("aa\nbb cc", vec!["aa", "bb cc"])]
    #[case("aa\n\nbb", vec!["aa", "", "bb"])]
    #[case("aa bb\n", vec!["aa bb", ""])]
    #[case("aaa\tbbb ccc dd", vec!["aaa\tbbb", "ccc dd"])]
    fn wrap_columns(#[case] text: &str, #[case] expected: Vec<&str>) {
        // 10 columns leaves 8 per line.
        assert_eq!(wrap(text, 0, 10), expected);
    }

    #[test]
    fn wrap_indent() {
        assert_eq!(wrap("aaa bbb ccc", 2, 10), vec!["aaa", "bbb ccc"]);
        assert_eq!(wrap("aa bb cc dd", 2, 10), vec!["aa bb", "cc dd"]);
        assert_eq!(wrap("aa bb cc", 20, 10), vec!["aa", "bb cc"]);
    }

    #[test]
    fn wrap_last_word_stays() {
        assert_eq!(
            wrap("aaaa bbbb cccc dddd eeee ffff", 12, 40),
            vec!["aaaa bbbb cccc dddd eeee ffff"]
        );
        assert_eq!(
            wrap("aaaa bbbb cccc dddd eeee ffff gggg", 12, 40),
            vec!["aaaa bbbb cccc dddd eeee", "ffff gggg"]
        );
    }

    #[test]
    fn wrap_narrow() {
        assert_eq!(wrap("aa bb", 0, 0), vec!["aa bb"]);
        assert_eq!(wrap("aa bb cc", 0, 0), vec!["aa", "bb cc"]);
        assert_eq!(wrap("ü ü ü ü ü ü", 0, 7), vec!["ü ü ü", "ü ü ü"]);
    }

    #[rstest]
    #[case(1)]
    #[case(80)]
    #[case(123)]
    fn fixed_width(#[case] columns: usize) {
        assert_eq!(FixedWidth(columns).columns(), columns);
    }

    #[test]
    fn terminal_width_positive() {
        assert!(TerminalWidth.columns() > 0);
    }
}
