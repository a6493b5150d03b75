//! Shared utilities for operations across notegraph crates.

use crate::{Error, Result};

/// Generic JSON serialization with consistent error handling
/// Works with any type that implements Serialize (including slices)
pub fn to_json_string<T: serde::Serialize + ?Sized>(data: &T, context: &str) -> Result<String> {
    serde_json::to_string_pretty(data).map_err(|e| {
        Error::serialization(format!("Failed to serialize {} as JSON: {}", context, e))
    })
}

/// Generic CSV serialization builder
/// Use the CSVBuilder fluent API to construct and export CSV data
pub struct CSVBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CSVBuilder {
    /// Create a new CSV with headers
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row of values; each value is quoted when needed
    pub fn add_row<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rows
            .push(values.into_iter().map(|v| quote_field(v.as_ref())).collect());
        self
    }

    /// Build the CSV string
    pub fn build(self) -> String {
        let mut csv = self.headers.join(",") + "\n";
        for row in self.rows {
            csv.push_str(&row.join(","));
            csv.push('\n');
        }
        csv
    }
}

fn quote_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_builder() {
        let csv = CSVBuilder::new(&["guid", "title"])
            .add_row(["1", "Plain"])
            .add_row(["2", "Comma, \"quoted\""])
            .build();

        assert_eq!(csv, "guid,title\n1,Plain\n2,\"Comma, \"\"quoted\"\"\"\n");
    }

    #[test]
    fn test_to_json_string() {
        let json = to_json_string(&vec![1, 2], "numbers").unwrap();
        assert!(json.contains('1'));
    }
}
