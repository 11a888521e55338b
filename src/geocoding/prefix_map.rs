// Copyright (C) 2025 The phone-number-helper Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    io::{self, BufRead, Read},
};

use crate::errors::PrefixFileError;

const MAX_LINE_LENGTH: usize = 2 * 1024;

/// Reads `<key>|<value>` lines, calling `on_entry` for each of them.
///
/// Blank lines and lines starting with `#` are skipped, as are lines without
/// a separator or with an empty key.
pub(super) fn read_entries<R, F>(mut reader: R, mut on_entry: F) -> Result<(), PrefixFileError>
where
    R: BufRead,
    F: FnMut(&str, &str) -> Result<(), PrefixFileError>,
{
    let mut line_buffer = Vec::with_capacity(MAX_LINE_LENGTH + 1);
    let mut line_number = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        // At most one byte past the limit is buffered for an oversized line
        let bytes_read = (&mut reader)
            .take(MAX_LINE_LENGTH as u64 + 1)
            .read_until(b'\n', &mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }
        if bytes_read > MAX_LINE_LENGTH {
            return Err(PrefixFileError::LineTooLong {
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = std::str::from_utf8(&line_buffer)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?
            .trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('|') {
            if key.is_empty() {
                continue;
            }
            on_entry(key, value)?;
        }
    }

    Ok(())
}

/// Descriptions keyed by a leading digit sequence of the E.164 number
/// (country calling code followed by the national significant number).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PrefixMap {
    descriptions: BTreeMap<u64, String>,
    /// Lengths of the stored prefixes, so lookups only probe those.
    possible_lengths: BTreeSet<usize>,
}

impl PrefixMap {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, PrefixFileError> {
        let mut map = Self::default();
        read_entries(reader, |prefix, description| {
            let prefix_code = prefix.parse().map_err(|e| PrefixFileError::PrefixParseError {
                prefix: prefix.to_string(),
                source: e,
            })?;
            map.descriptions.insert(prefix_code, description.to_string());
            map.possible_lengths.insert(prefix.len());
            Ok(())
        })?;
        Ok(map)
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }

    /// Returns the description of the longest stored prefix of `digits`.
    /// Empty descriptions count as missing.
    pub fn lookup(&self, digits: &str) -> Option<&str> {
        for &length in self.possible_lengths.iter().rev() {
            let Some(prefix) = digits.get(..length) else {
                continue;
            };
            let Ok(prefix_code) = prefix.parse::<u64>() else {
                continue;
            };
            if let Some(description) = self.descriptions.get(&prefix_code) {
                if !description.is_empty() {
                    return Some(description);
                }
            }
        }
        None
    }
}

/// Reads `<REGION>|<name>` lines into a map keyed by upper-case region code.
pub(super) fn read_country_names<R: BufRead>(
    reader: R,
) -> Result<HashMap<String, String>, PrefixFileError> {
    let mut names = HashMap::new();
    read_entries(reader, |region, name| {
        names.insert(region.to_ascii_uppercase(), name.to_string());
        Ok(())
    })?;
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::{read_country_names, PrefixMap};
    use crate::errors::PrefixFileError;

    const SAMPLE: &str = "\
# comment line
1650|California

1650253|Mountain View, CA
1212|New York, NY
|ignored
no separator here
1999|
";

    #[test]
    fn parse_and_lookup_longest_prefix() {
        let map = PrefixMap::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(map.len(), 4);
        assert_eq!(map.lookup("16502530000"), Some("Mountain View, CA"));
        assert_eq!(map.lookup("16501110000"), Some("California"));
        assert_eq!(map.lookup("12125550000"), Some("New York, NY"));
        assert_eq!(map.lookup("13105550000"), None);
        assert_eq!(map.lookup("165"), None);
        assert_eq!(map.lookup(""), None);
    }

    #[test]
    fn empty_description_is_missing() {
        let map = PrefixMap::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(map.lookup("19995550000"), None);
    }

    #[test]
    fn last_line_without_newline() {
        let map = PrefixMap::from_reader("4420|London".as_bytes()).unwrap();
        assert_eq!(map.lookup("442087654321"), Some("London"));
    }

    #[test]
    fn invalid_prefix_is_error() {
        let err = PrefixMap::from_reader("44ab|London\n".as_bytes()).unwrap_err();
        assert!(matches!(err, PrefixFileError::PrefixParseError { ref prefix, .. } if prefix == "44ab"));
    }

    #[test]
    fn too_long_line_is_error() {
        let long_line = format!("4420|{}\n", "x".repeat(4096));
        let err = PrefixMap::from_reader(long_line.as_bytes()).unwrap_err();
        assert!(matches!(err, PrefixFileError::LineTooLong { line_num: 1, .. }));
    }

    #[test]
    fn too_long_line_is_rejected_before_its_end() {
        // multi-byte characters straddle the read limit
        let long_line = format!("4420|{}\n4421|Later\n", "\u{e9}".repeat(3000));
        let mut reader = long_line.as_bytes();
        let err = PrefixMap::from_reader(&mut reader).unwrap_err();
        assert!(matches!(err, PrefixFileError::LineTooLong { line_num: 1, max_len: 2048 }));
        // the rest of the oversized line was never consumed
        assert!(reader.len() > long_line.len() - 2 * 1024 - 2);
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let err = PrefixMap::from_reader(&b"4420|\xff\xfe\n"[..]).unwrap_err();
        assert!(matches!(err, PrefixFileError::IO(ref io) if io.kind() == std::io::ErrorKind::InvalidData));
    }

    #[test]
    fn country_names_are_keyed_upper_case() {
        let names = read_country_names("us|United States\nGB|United Kingdom\n".as_bytes()).unwrap();
        assert_eq!(names.get("US").map(String::as_str), Some("United States"));
        assert_eq!(names.get("GB").map(String::as_str), Some("United Kingdom"));
    }
}
