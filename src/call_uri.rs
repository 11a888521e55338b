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

use std::{borrow::Cow, fmt};

use strum::{EnumIter, IntoEnumIterator};

// Left unencoded by the platform URI class on top of alphanumerics and `-_.~`
const UNRESERVED_MARKS: [(&str, &str); 5] =
    [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")];

/// Schemes a call can be addressed with.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UriScheme {
    /// **Telephone number.** Example: `tel:%2B16502530000`.
    Tel,
    /// **SIP address.** Example: `sip:alice%40example.com`.
    Sip,
    /// **Configured voicemail.** Always `voicemail:x`.
    Voicemail,
}

impl UriScheme {
    pub const fn as_str(&self) -> &'static str {
        match self {
            UriScheme::Tel => "tel",
            UriScheme::Sip => "sip",
            UriScheme::Voicemail => "voicemail",
        }
    }
}

/// Opaque URI addressing a call target. The scheme specific part is stored
/// decoded and encoded on display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallUri {
    scheme: UriScheme,
    scheme_specific_part: String,
}

impl CallUri {
    pub fn from_parts(scheme: UriScheme, scheme_specific_part: impl Into<String>) -> Self {
        Self {
            scheme,
            scheme_specific_part: scheme_specific_part.into(),
        }
    }

    /// URI that dials the configured voicemail, whatever its number.
    pub fn voicemail() -> Self {
        Self::from_parts(UriScheme::Voicemail, "x")
    }

    /// Parses `<scheme>:<encoded part>`. Returns `None` for unknown schemes
    /// or a part that does not decode to UTF-8.
    pub fn parse(uri: &str) -> Option<Self> {
        let (scheme, encoded) = uri.split_once(':')?;
        let scheme = UriScheme::iter().find(|s| s.as_str().eq_ignore_ascii_case(scheme))?;
        let decoded = urlencoding::decode(encoded).ok()?;
        Some(Self::from_parts(scheme, decoded))
    }

    pub fn scheme(&self) -> UriScheme {
        self.scheme
    }

    pub fn scheme_specific_part(&self) -> &str {
        &self.scheme_specific_part
    }

    /// Percent-encodes every character except ASCII alphanumerics and
    /// `-_.~!'()*`.
    pub fn encoded_scheme_specific_part(&self) -> Cow<'_, str> {
        let encoded = urlencoding::encode(&self.scheme_specific_part);
        // Every '%' in the output starts an escape, so these cannot match
        // across escape boundaries.
        if !UNRESERVED_MARKS.iter().any(|(escape, _)| encoded.contains(escape)) {
            return encoded;
        }
        let mut restored = encoded.into_owned();
        for (escape, mark) in UNRESERVED_MARKS {
            restored = restored.replace(escape, mark);
        }
        Cow::Owned(restored)
    }
}

impl fmt::Display for CallUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.encoded_scheme_specific_part();
        f.write_str(&fast_cat::concat_str!(self.scheme.as_str(), ":", &*encoded))
    }
}
