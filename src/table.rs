use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Character substitution table driving permutation generation.
///
/// Built from a text file with one rule per line: the first character is the
/// target, every remaining character is an allowed substitute for it. A line
/// holding a single character maps that character to no substitutes at all.
#[derive(Debug, Default, Clone)]
pub struct SubstitutionTable {
    map: HashMap<char, Vec<char>>,
}

impl SubstitutionTable {
    /// Load a table from a UTF-8 file. Open and decode failures are fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read substitution table {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    /// Parse table rules from text. Blank lines are skipped; a repeated key
    /// replaces the earlier entry.
    pub fn parse(text: &str) -> Self {
        let mut map = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            let mut chars = line.chars();
            let Some(key) = chars.next() else { continue };
            map.insert(key, chars.collect());
        }
        Self { map }
    }

    /// Substitutes configured for `c`, in table order. Empty for unknown chars.
    pub fn alternatives(&self, c: char) -> &[char] {
        self.map.get(&c).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_key_and_alternatives() {
        let table = SubstitutionTable::parse("o0\na@4\n");
        assert_eq!(table.alternatives('o'), &['0']);
        assert_eq!(table.alternatives('a'), &['@', '4']);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = SubstitutionTable::parse("\n\no0\n   \ne3\n");
        assert_eq!(table.alternatives('o'), &['0']);
        assert_eq!(table.alternatives('e'), &['3']);
    }

    #[test]
    fn single_char_line_maps_to_empty_list() {
        let table = SubstitutionTable::parse("x\n");
        assert!(table.alternatives('x').is_empty());
    }

    #[test]
    fn unknown_char_has_no_alternatives() {
        let table = SubstitutionTable::parse("o0\n");
        assert!(table.alternatives('z').is_empty());
    }

    #[test]
    fn later_duplicate_key_wins() {
        let table = SubstitutionTable::parse("o0\noQ\n");
        assert_eq!(table.alternatives('o'), &['Q']);
    }

    #[test]
    fn non_ascii_rules_round_trip() {
        let table = SubstitutionTable::parse("aа\noо0\n");
        assert_eq!(table.alternatives('a'), &['а']);
        assert_eq!(table.alternatives('o'), &['о', '0']);
    }

    #[test]
    fn load_reads_utf8_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "o0\nl1i\n").unwrap();
        let table = SubstitutionTable::load(file.path()).unwrap();
        assert_eq!(table.alternatives('l'), &['1', 'i']);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = SubstitutionTable::load("/nonexistent/chars.txt").unwrap_err();
        assert!(err.to_string().contains("substitution table"));
    }
}
