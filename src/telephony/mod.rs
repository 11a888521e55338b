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

//! String utilities for dial strings as delivered by a telephony stack.

pub(crate) mod helper_constants;

use helper_constants::{
    CLIR_OFF, CLIR_ON, PAUSE, PLUS_SIGN, URI_AT_SIGN, URI_ESCAPED_AT_SIGN, WAIT, WILD,
};

/// True for characters a dialer sends to the network as-is.
pub fn is_dialable(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '*' | '#' | WILD) || c == PLUS_SIGN
}

/// True for characters that start the post-dial part of a dial string.
pub fn is_starts_post_dial(c: char) -> bool {
    c == PAUSE || c == WAIT
}

/// Extracts the network portion of a dial string: the part sent to the
/// network when the call is placed.
///
/// Decimal digits of any script are converted to ASCII, separators are
/// dropped and the walk stops at the first post-dial character. A `+` is kept
/// only at the start or right after a CLIR prefix.
///
/// ```
/// use phone_number_helper::telephony::extract_network_portion;
///
/// assert_eq!(extract_network_portion("+1 (650) 253-0000,1234"), "+16502530000");
/// assert_eq!(extract_network_portion("*31#+447911123456"), "*31#+447911123456");
/// ```
pub fn extract_network_portion(number: &str) -> String {
    let normalized = dec_from_char::normalize_decimals(number);
    let mut network_portion = String::with_capacity(normalized.len());

    for c in normalized.chars() {
        if c.is_ascii_digit() {
            network_portion.push(c);
        } else if c == PLUS_SIGN {
            if network_portion.is_empty()
                || network_portion == CLIR_ON
                || network_portion == CLIR_OFF
            {
                network_portion.push(c);
            }
        } else if is_dialable(c) {
            network_portion.push(c);
        } else if is_starts_post_dial(c) {
            break;
        }
    }
    network_portion
}

/// Returns true if the number is a URI-style address (for example a SIP
/// address) rather than a dialable phone number.
pub fn is_uri_number(number: &str) -> bool {
    number.contains(URI_AT_SIGN) || number.contains(URI_ESCAPED_AT_SIGN)
}

#[cfg(test)]
mod tests {
    use super::{extract_network_portion, is_dialable, is_starts_post_dial, is_uri_number};

    #[test]
    fn network_portion_strips_separators() {
        assert_eq!(extract_network_portion("(650) 253-0000"), "6502530000");
        assert_eq!(extract_network_portion("650.253.0000"), "6502530000");
        assert_eq!(extract_network_portion("1-800-FLOWERS"), "1800");
        assert_eq!(extract_network_portion(""), "");
    }

    #[test]
    fn network_portion_stops_at_post_dial() {
        assert_eq!(extract_network_portion("6502530000,123"), "6502530000");
        assert_eq!(extract_network_portion("6502530000;123"), "6502530000");
        assert_eq!(extract_network_portion(",123"), "");
    }

    #[test]
    fn network_portion_keeps_plus_only_at_start() {
        assert_eq!(extract_network_portion("+16502530000"), "+16502530000");
        assert_eq!(extract_network_portion("  +1 650"), "+1650");
        assert_eq!(extract_network_portion("1+650"), "1650");
        assert_eq!(extract_network_portion("++1"), "+1");
    }

    #[test]
    fn network_portion_keeps_plus_after_clir() {
        assert_eq!(extract_network_portion("*31#+16502530000"), "*31#+16502530000");
        assert_eq!(extract_network_portion("#31#+16502530000"), "#31#+16502530000");
        assert_eq!(extract_network_portion("*30#+1650"), "*30#1650");
    }

    #[test]
    fn network_portion_keeps_dialable_symbols() {
        assert_eq!(extract_network_portion("*86"), "*86");
        assert_eq!(extract_network_portion("#123#"), "#123#");
        assert_eq!(extract_network_portion("12N4"), "12N4");
    }

    #[test]
    fn network_portion_converts_unicode_digits() {
        // Fullwidth and Arabic-Indic digits
        assert_eq!(extract_network_portion("\u{FF16}\u{FF15}\u{FF10}"), "650");
        assert_eq!(extract_network_portion("\u{0661}\u{0662}\u{0663}"), "123");
    }

    #[test]
    fn dialable_and_post_dial_chars() {
        for c in ['0', '9', '*', '#', '+', 'N'] {
            assert!(is_dialable(c), "{c} should be dialable");
        }
        for c in ['-', ' ', 'a', ',', ';', 'n'] {
            assert!(!is_dialable(c), "{c} should not be dialable");
        }
        assert!(is_starts_post_dial(','));
        assert!(is_starts_post_dial(';'));
        assert!(!is_starts_post_dial('#'));
    }

    #[test]
    fn uri_numbers() {
        assert!(is_uri_number("alice@example.com"));
        assert!(is_uri_number("alice%40example.com"));
        assert!(!is_uri_number("+16502530000"));
        assert!(!is_uri_number(""));
    }
}
