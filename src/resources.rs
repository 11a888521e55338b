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

use std::{borrow::Cow, collections::HashMap, fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use strum::EnumIter;

use crate::errors::InvalidLocaleError;

// language, then an optional ISO 3166 alpha-2 or UN M.49 region
static LOCALE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{2,3})(?:[-_]([A-Za-z]{2}|[0-9]{3}))?$")
        .expect("locale pattern is a valid regex")
});

/// Strings the helper shows instead of a number.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Unknown,
    Private,
    Payphone,
    Voicemail,
}

impl Label {
    /// English text used when no override is configured.
    pub const fn default_text(&self) -> &'static str {
        match self {
            Label::Unknown => "Unknown",
            Label::Private => "Private number",
            Label::Payphone => "Pay phone",
            Label::Voicemail => "Voicemail",
        }
    }
}

/// A language with an optional region, e.g. `en_US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    pub fn new(language: &str, region: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            region: region.map(|r| r.to_ascii_uppercase()),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en", Some("US"))
    }
}

impl FromStr for Locale {
    type Err = InvalidLocaleError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let captures = LOCALE_PATTERN
            .captures(tag.trim())
            .ok_or_else(|| InvalidLocaleError(tag.to_owned()))?;
        let language = captures.get(1).map_or("", |m| m.as_str());
        Ok(Self::new(language, captures.get(2).map(|m| m.as_str())))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

/// Source of user-visible strings and of the display locale.
pub trait Resources {
    fn label(&self, label: Label) -> Cow<'_, str>;

    fn locale(&self) -> &Locale;
}

/// English labels with optional per-label overrides.
#[derive(Debug, Clone, Default)]
pub struct DefaultResources {
    locale: Locale,
    overrides: HashMap<Label, String>,
}

impl DefaultResources {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            overrides: HashMap::new(),
        }
    }

    pub fn with_label(mut self, label: Label, text: impl Into<String>) -> Self {
        self.overrides.insert(label, text.into());
        self
    }
}

impl Resources for DefaultResources {
    fn label(&self, label: Label) -> Cow<'_, str> {
        match self.overrides.get(&label) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Borrowed(label.default_text()),
        }
    }

    fn locale(&self) -> &Locale {
        &self.locale
    }
}
