/// Field separator outside a quoted section.
pub const DELIMITER: char = ',';
/// Opens and closes a quoted section; doubled inside one for a literal quote.
pub const QUOTE: char = '"';

/// Split one CSV line into fields.
///
/// - `,` separates fields unless it sits inside a `"…"` section.
/// - Inside a quoted section `""` yields a single literal `"`.
/// - Trailing `\r`/`\n` are stripped from the last field only.
///
/// An unterminated quote simply runs to the end of the line. Never fails, and
/// always returns at least one field.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    field.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
        } else if ch == QUOTE {
            in_quotes = true;
        } else if ch == DELIMITER {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(ch);
        }
    }

    let kept = field.trim_end_matches(&['\r', '\n'][..]).len();
    field.truncate(kept);
    fields.push(field);
    fields
}
