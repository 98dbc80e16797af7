//! Minimal INI-style key/value store
//!
//! Both the simulator's task files and the target application's profile are
//! flat `key=value` files with optional `[section]` headers. This module
//! provides the [`KeyValueStore`] seam the translation engine reads from and
//! writes to, plus an insertion-ordered in-memory implementation.

use crate::utils::io::LineSink;
use std::borrow::Cow;
use std::io;

/// Read/write access to sectioned key/value data
///
/// Keys referenced by the translation engine are fixed, literal names
/// (e.g. `TPPosX3`, `StartLine`) and must be preserved exactly for
/// target-application compatibility. The anonymous section is the empty
/// string.
pub trait KeyValueStore {
    fn get(&self, section: &str, key: &str) -> Option<&str>;
    fn set(&mut self, section: &str, key: &str, value: String);
}

#[derive(Debug, Clone, Default)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

/// In-memory key/value store with INI text parsing and serialization
///
/// Sections and keys keep their insertion order so that serialized output
/// is stable and diffs against the source files stay readable.
#[derive(Debug, Clone, Default)]
pub struct IniFile {
    sections: Vec<Section>,
}

impl IniFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse INI text
    ///
    /// Empty lines and lines starting with `;` or `#` are skipped. Keys
    /// before the first `[section]` header belong to the anonymous section.
    pub fn parse(text: &str) -> Self {
        let mut file = Self::new();
        let mut current = String::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current = name.trim().to_string();
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                file.set(&current, key.trim(), value.trim().to_string());
            }
        }

        file
    }

    /// Parse INI data of unknown encoding
    ///
    /// The simulator writes its files in the platform legacy encoding, so
    /// this attempts UTF-8 first and falls back to Windows-1252.
    pub fn parse_bytes(bytes: &[u8]) -> Self {
        let text: Cow<'_, str> = match str::from_utf8(bytes) {
            Ok(s) => s.into(),
            Err(_) => encoding_rs::WINDOWS_1252.decode(bytes).0,
        };
        Self::parse(&text)
    }

    /// Serialize all sections in insertion order
    ///
    /// The anonymous section is written first, without a header.
    pub fn write_to<S: LineSink>(&self, sink: &mut S) -> io::Result<()> {
        for section in &self.sections {
            if !section.name.is_empty() {
                sink.append_line(&format!("[{}]", section.name))?;
            }
            for (key, value) in &section.entries {
                sink.append_line(&format!("{key}={value}"))?;
            }
        }
        Ok(())
    }

    fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}

impl KeyValueStore for IniFile {
    fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?
            .entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn set(&mut self, section: &str, key: &str, value: String) {
        let section = match self.sections.iter_mut().find(|s| s.name == section) {
            Some(section) => section,
            None => {
                self.sections.push(Section {
                    name: section.to_string(),
                    entries: Vec::new(),
                });
                self.sections.last_mut().unwrap()
            }
        };

        match section.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => section.entries.push((key.to_string(), value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TASK_SNIPPET: &str = "\
[Task]
Count=4
TPName0=Aerodrome

[Plane]
Class=StdCirrus
";

    #[test]
    fn parse_and_get() {
        let file = IniFile::parse(TASK_SNIPPET);
        assert_eq!(file.get("Task", "Count"), Some("4"));
        assert_eq!(file.get("Task", "TPName0"), Some("Aerodrome"));
        assert_eq!(file.get("Plane", "Class"), Some("StdCirrus"));
        assert_eq!(file.get("Task", "TPName1"), None);
        assert_eq!(file.get("Nowhere", "Count"), None);
    }

    #[test]
    fn anonymous_section() {
        let file = IniFile::parse("AutoAdvance=3\n[Task]\nCount=2\n");
        assert_eq!(file.get("", "AutoAdvance"), Some("3"));
        assert_eq!(file.get("Task", "Count"), Some("2"));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let file = IniFile::parse("; generated file\n\n# note\nKey=Value\n");
        assert_eq!(file.get("", "Key"), Some("Value"));
    }

    #[test]
    fn set_overwrites_existing_keys() {
        let mut file = IniFile::parse("[Task]\nCount=4\n");
        file.set("Task", "Count", "5".to_string());
        file.set("Task", "PZCount", "1".to_string());
        assert_eq!(file.get("Task", "Count"), Some("5"));
        assert_eq!(file.get("Task", "PZCount"), Some("1"));
    }

    #[test]
    fn windows_1252_fallback() {
        // "TPName1=Zürich" with 0xFC (ü) is not valid UTF-8
        let mut bytes = b"[Task]\nTPName1=Z".to_vec();
        bytes.push(0xFC);
        bytes.extend_from_slice(b"rich\n");

        let file = IniFile::parse_bytes(&bytes);
        assert_eq!(file.get("Task", "TPName1"), Some("Zürich"));
    }

    #[test]
    fn serialization_keeps_insertion_order() {
        let mut file = IniFile::new();
        file.set("", "StartLine", "2".to_string());
        file.set("", "StartRadius", "1000".to_string());
        file.set("Task", "Count", "3".to_string());

        let mut buffer = Vec::new();
        file.write_to(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "StartLine=2\nStartRadius=1000\n[Task]\nCount=3\n"
        );
    }
}
