use std::collections::HashMap;

/// How header cells are folded into row keys. The two sheet families use
/// different conventions: resource sheets join words ("Thumbnail Url" →
/// `thumbnailurl`), worksheet sheets underscore them ("Dap An A" →
/// `dap_an_a`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Joined,
    Underscored,
}

impl HeaderStyle {
    fn normalize(self, cell: &str) -> String {
        let sep = match self {
            HeaderStyle::Joined => "",
            HeaderStyle::Underscored => "_",
        };
        cell.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(sep)
    }
}

/// One data line keyed by normalized header. `line` is the 1-based
/// position below the header line; skipped blank lines still consume
/// positions, so ids synthesized from it stay stable across reparses.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub line: usize,
    fields: HashMap<String, String>,
}

impl RawRow {
    /// Field value for a normalized header key; empty string when the
    /// column is absent or the cell was blank.
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    /// First non-empty value among aliased header keys, in priority order.
    pub fn get_any(&self, keys: &[&str]) -> &str {
        keys.iter()
            .map(|k| self.get(k))
            .find(|v| !v.is_empty())
            .unwrap_or("")
    }

    #[cfg(test)]
    pub fn from_pairs(line: usize, pairs: &[(&str, &str)]) -> RawRow {
        RawRow {
            line,
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Split published TSV text into header-keyed rows.
///
/// Tab and newline are hard delimiters; there is no quoting convention,
/// so values containing either are not supported. Tolerant everywhere
/// else: fewer than two lines yields no rows, a line whose sole cell is
/// blank is skipped (published exports commonly end with one), missing
/// trailing cells resolve to empty strings and extra cells are ignored.
/// Trimming each value also absorbs the CR that CRLF exports leave behind.
pub fn parse(text: &str, style: HeaderStyle) -> Vec<RawRow> {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let headers: Vec<String> = lines[0]
        .split('\t')
        .map(|h| style.normalize(h))
        .collect();

    let mut rows = Vec::new();
    for (i, line) in lines.iter().enumerate().skip(1) {
        let cells: Vec<&str> = line.split('\t').collect();
        if cells.len() == 1 && cells[0].trim().is_empty() {
            continue;
        }

        let mut fields = HashMap::with_capacity(headers.len());
        for (j, header) in headers.iter().enumerate() {
            let value = cells.get(j).map(|c| c.trim()).unwrap_or("");
            fields.insert(header.clone(), value.to_string());
        }
        rows.push(RawRow { line: i, fields });
    }

    rows
}
