//! Line-oriented CSV field splitting.
//!
//! Handles the quoting subset recipient exports actually use: quoted fields
//! may contain commas and doubled quotes. Each physical line is parsed on its
//! own, so quoted newlines are not supported, and every field is trimmed.

/// Splits one CSV line into trimmed cells.
///
/// ```
/// use common::csv::parse_line;
/// assert_eq!(parse_line(r#""a,b","c""d""#), vec!["a,b", "c\"d"]);
/// ```
pub fn parse_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => cells.push(take_cell(&mut current)),
            _ => current.push(ch),
        }
    }
    cells.push(take_cell(&mut current));
    cells
}

fn take_cell(current: &mut String) -> String {
    let cell = current.trim().to_string();
    current.clear();
    cell
}

/// Lines that carry at least one non-whitespace character.
///
/// A leading byte-order mark is dropped, matching what browsers do when they
/// decode a UTF-8 file as text.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.strip_prefix('\u{feff}')
        .unwrap_or(text)
        .lines()
        .filter(|line| !line.trim().is_empty())
}

/// Parses every non-blank line of `text`, header included.
pub fn parse_document(text: &str) -> Vec<Vec<String>> {
    non_blank_lines(text).map(parse_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_plain_fields() {
        assert_eq!(parse_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn quoted_comma_and_escaped_quote() {
        assert_eq!(parse_line(r#""a,b","c""d""#), vec!["a,b", "c\"d"]);
    }

    #[test]
    fn trims_every_field() {
        assert_eq!(parse_line("  +237123 ,  Hello world  "), vec!["+237123", "Hello world"]);
        assert_eq!(parse_line(r#"" padded ""#), vec!["padded"]);
    }

    #[test]
    fn empty_fields_are_kept() {
        assert_eq!(parse_line(",,"), vec!["", "", ""]);
        assert_eq!(parse_line(""), vec![""]);
    }

    #[test]
    fn unterminated_quote_swallows_the_rest() {
        assert_eq!(parse_line(r#""open,still open"#), vec!["open,still open"]);
    }

    #[test]
    fn doubled_quote_outside_quotes_toggles_twice() {
        assert_eq!(parse_line(r#"a""b,c"#), vec!["ab", "c"]);
    }

    #[test]
    fn blank_lines_and_bom_are_skipped() {
        let text = "\u{feff}phone,content\r\n\r\n   \n+237123,Hi\n";
        assert_eq!(
            parse_document(text),
            vec![vec!["phone", "content"], vec!["+237123", "Hi"]]
        );
    }

    proptest! {
        #[test]
        fn unquoted_lines_match_split_and_trim(line in "[^\"\r\n]{0,64}") {
            let expected: Vec<String> = line.split(',').map(|s| s.trim().to_string()).collect();
            prop_assert_eq!(parse_line(&line), expected);
        }
    }
}
