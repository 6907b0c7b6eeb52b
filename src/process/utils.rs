use super::tokenize::DELIMITER;

/// Byte-order marker that may open a UTF-8 file.
pub const BOM: char = '\u{feff}';

/// Drop leading byte-order markers.
pub fn strip_bom(line: &str) -> &str {
    line.trim_start_matches(BOM)
}

/// Fit a tokenized row to `width` columns.
///
/// Short rows are right-padded with empty strings. Long rows keep the first
/// `width - 1` values and fold everything from there on into the last column,
/// re-joined with the delimiter. The fold is lossy: a stray comma in an
/// unquoted field shifts text into the wrong column.
pub fn reconcile_fields(mut values: Vec<String>, width: usize) -> Vec<String> {
    if values.len() < width {
        values.resize(width, String::new());
    } else if values.len() > width {
        if width == 0 {
            values.clear();
            return values;
        }
        let overflow = values.split_off(width - 1);
        values.push(overflow.join(&DELIMITER.to_string()));
    }
    values
}
