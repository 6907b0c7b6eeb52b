use crate::process::tokenize::parse_csv_line;
use crate::process::utils::strip_bom;

/// Column names, from the first line of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    /// Tokenize a raw header line. A leading byte-order marker is dropped and
    /// every name is trimmed.
    pub fn from_line(line: &str) -> Self {
        let names = parse_csv_line(strip_bom(line))
            .into_iter()
            .map(|name| name.trim().to_string())
            .collect();
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
