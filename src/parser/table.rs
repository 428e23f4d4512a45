//! Generic parser for whitespace-aligned CLI tables.
//!
//! Controller commands print tables as fixed-width columns interleaved with
//! banners, separators and summary lines. A [`TableLayout`] pairs a
//! [`RowRecognizer`] (which lines are data rows) with a [`FieldSplit`]
//! policy (how a row is cut into fields) and a minimum field count.
//!
//! Lines that are not recognized are skipped, and recognized rows with too
//! few fields are dropped rather than padded.

/// Decides whether a raw output line is a data row
pub trait RowRecognizer {
    fn recognizes(&self, line: &str) -> bool;
}

impl<F> RowRecognizer for F
where
    F: Fn(&str) -> bool,
{
    fn recognizes(&self, line: &str) -> bool {
        self(line)
    }
}

/// How a recognized row is cut into fields
///
/// Both policies trim the line first, so no field is ever empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSplit {
    /// Two or more consecutive whitespace characters separate fields;
    /// a single space stays inside the field ("Floor 1").
    Columns,

    /// Any run of whitespace separates fields
    Tokens,
}

impl FieldSplit {
    /// Split one line according to this policy
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            FieldSplit::Columns => split_columns(line),
            FieldSplit::Tokens => line.split_whitespace().collect(),
        }
    }
}

/// Row recognition, splitting and minimum width for one command's table
#[derive(Debug, Clone)]
pub struct TableLayout<R> {
    pub recognizer: R,
    pub split: FieldSplit,
    pub min_fields: usize,
}

impl<R: RowRecognizer> TableLayout<R> {
    pub fn new(recognizer: R, split: FieldSplit, min_fields: usize) -> Self {
        Self {
            recognizer,
            split,
            min_fields,
        }
    }

    /// Lazily yield the fields of every data row in `text`, in line order
    pub fn rows<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Vec<&'a str>> + 'a {
        text.lines()
            .filter(move |line| self.recognizer.recognizes(line))
            .map(move |line| self.split.split(line))
            .filter(move |fields| fields.len() >= self.min_fields)
    }
}

/// Split on runs of two or more whitespace characters
///
/// **Private** - backs `FieldSplit::Columns`
fn split_columns(line: &str) -> Vec<&str> {
    let line = line.trim();
    let mut fields = Vec::new();
    let mut start = 0;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !c.is_whitespace() {
            continue;
        }

        // A lone space belongs to the field
        match chars.peek() {
            Some(&(_, next)) if next.is_whitespace() => {}
            _ => continue,
        }

        fields.push(&line[start..i]);

        let mut end = i + c.len_utf8();
        while let Some(&(j, ws)) = chars.peek() {
            if !ws.is_whitespace() {
                break;
            }
            end = j + ws.len_utf8();
            chars.next();
        }
        start = end;
    }

    if start < line.len() {
        fields.push(&line[start..]);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_columns_keeps_single_spaces() {
        assert_eq!(
            FieldSplit::Columns.split("1   Floor 1   guest net"),
            vec!["1", "Floor 1", "guest net"]
        );
    }

    #[test]
    fn test_split_columns_mixed_whitespace() {
        assert_eq!(
            FieldSplit::Columns.split("  0\t\tintf-a \t AA:BB:CC:DD:EE:01  "),
            vec!["0", "intf-a", "AA:BB:CC:DD:EE:01"]
        );
    }

    #[test]
    fn test_split_columns_blank_line() {
        assert!(FieldSplit::Columns.split("   ").is_empty());
    }

    #[test]
    fn test_split_tokens() {
        assert_eq!(
            FieldSplit::Tokens.split(" a b\tc "),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_rows_skips_unrecognized_and_short() {
        let text = "Header  Line  Here\n1  a  b\n2  short\nfooter\n3  c  d\n";
        let layout = TableLayout::new(
            |line: &str| line.starts_with(|c: char| c.is_ascii_digit()),
            FieldSplit::Columns,
            3,
        );

        let rows: Vec<Vec<&str>> = layout.rows(text).collect();

        assert_eq!(rows, vec![vec!["1", "a", "b"], vec!["3", "c", "d"]]);
    }

    #[test]
    fn test_rows_handles_crlf() {
        let layout = TableLayout::new(|_: &str| true, FieldSplit::Columns, 2);
        let rows: Vec<Vec<&str>> = layout.rows("x  y\r\nz  w\r\n").collect();
        assert_eq!(rows, vec![vec!["x", "y"], vec!["z", "w"]]);
    }
}
