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

mod embedded_data;
pub mod prefix_map;

use std::{
    collections::HashMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::{Arc, LazyLock},
};

use dashmap::DashMap;
use log::{trace, warn};
use phonenumber::{metadata::DATABASE, Mode, PhoneNumber, Type};

use crate::{errors::PrefixFileError, resources::Locale};
pub use prefix_map::PrefixMap;

const ENGLISH: &str = "en";

// Calling codes whose mobile numbers carry a geographical area code.
const GEO_MOBILE_COUNTRIES: [u16; 4] = [52, 54, 55, 62];

// Argentina dials mobile numbers with a '9' before the area code.
const ARGENTINA_CALLING_CODE: u16 = 54;
const ARGENTINA_MOBILE_TOKEN: &str = "9";
const COUNTRIES_DIR: &str = "countries";

/// Process-wide geocoder backed by the embedded data only.
pub static OFFLINE_GEOCODER: LazyLock<OfflineGeocoder> = LazyLock::new(OfflineGeocoder::new);

/// Text description of where a phone number is located.
pub trait Geocoder {
    /// Returns a description of the number's location in the language of
    /// `locale`, or an empty string if none is available.
    fn description_for_number(&self, number: &PhoneNumber, locale: &Locale) -> String;
}

type CountryNames = HashMap<String, String>;

/// Geocoder reading prefix files for area descriptions and country names.
///
/// Data is looked up in the optional data directory first
/// (`<dir>/<language>/<calling code>.txt`, `<dir>/countries/<language>.txt`)
/// and then in the data compiled into the library. Parsed files are cached.
pub struct OfflineGeocoder {
    data_dir: Option<PathBuf>,
    area_cache: DashMap<(String, u16), Option<Arc<PrefixMap>>>,
    country_cache: DashMap<String, Option<Arc<CountryNames>>>,
}

impl Default for OfflineGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl OfflineGeocoder {
    pub fn new() -> Self {
        Self {
            data_dir: None,
            area_cache: DashMap::new(),
            country_cache: DashMap::new(),
        }
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
            ..Self::new()
        }
    }

    /// Area description for the leading digits of an E.164 number
    /// (without `+`) in the given language.
    pub fn area_description(
        &self,
        language: &str,
        country_calling_code: u16,
        digits: &str,
    ) -> Option<String> {
        let prefix_map = self.area_map(language, country_calling_code)?;
        prefix_map.lookup(digits).map(str::to_owned)
    }

    /// Name of `region` (e.g. `"CH"`) in the given language.
    pub fn country_name(&self, language: &str, region: &str) -> Option<String> {
        let names = self.country_names(language)?;
        names.get(&region.to_ascii_uppercase()).cloned()
    }

    fn area_map(&self, language: &str, country_calling_code: u16) -> Option<Arc<PrefixMap>> {
        let key = (language.to_owned(), country_calling_code);
        if let Some(cached) = self.area_cache.get(&key) {
            return cached.value().clone();
        }
        let entry = self
            .area_cache
            .entry(key)
            .or_insert_with(|| self.load_area_map(language, country_calling_code).map(Arc::new));
        entry.value().clone()
    }

    fn country_names(&self, language: &str) -> Option<Arc<CountryNames>> {
        if let Some(cached) = self.country_cache.get(language) {
            return cached.value().clone();
        }
        let entry = self
            .country_cache
            .entry(language.to_owned())
            .or_insert_with(|| self.load_country_names(language).map(Arc::new));
        entry.value().clone()
    }

    fn load_area_map(&self, language: &str, country_calling_code: u16) -> Option<PrefixMap> {
        let mut buf = itoa::Buffer::new();
        let country_calling_code_str = buf.format(country_calling_code);
        let file_name = fast_cat::concat_str!(country_calling_code_str, ".txt");

        if let Some(dir) = &self.data_dir {
            let path = dir.join(language).join(&file_name);
            if path.is_file() {
                match read_file(&path, PrefixMap::from_reader) {
                    Ok(map) => {
                        trace!("Loaded {} prefixes from {}", map.len(), path.display());
                        return Some(map);
                    }
                    Err(err) => warn!("Skipping prefix file {}: {}", path.display(), err),
                }
            }
        }

        let data = embedded_data::area_descriptions(language, country_calling_code)?;
        match PrefixMap::from_reader(data.as_bytes()) {
            Ok(map) => {
                trace!(
                    "Loaded {} embedded prefixes for {}/{}",
                    map.len(),
                    language,
                    file_name
                );
                Some(map)
            }
            Err(err) => {
                warn!("Embedded prefix file {}/{} is invalid: {}", language, file_name, err);
                None
            }
        }
    }

    fn load_country_names(&self, language: &str) -> Option<CountryNames> {
        let file_name = fast_cat::concat_str!(language, ".txt");

        if let Some(dir) = &self.data_dir {
            let path = dir.join(COUNTRIES_DIR).join(&file_name);
            if path.is_file() {
                match read_file(&path, prefix_map::read_country_names) {
                    Ok(names) => return Some(names),
                    Err(err) => warn!("Skipping country names file {}: {}", path.display(), err),
                }
            }
        }

        let data = embedded_data::country_names(language)?;
        match prefix_map::read_country_names(data.as_bytes()) {
            Ok(names) => Some(names),
            Err(err) => {
                warn!("Embedded country names for {} are invalid: {}", language, err);
                None
            }
        }
    }

    fn country_name_for_number(&self, number: &PhoneNumber, language: &str) -> Option<String> {
        let region = format!("{:?}", number.country().id()?);
        self.country_name(language, &region)
            .or_else(|| self.country_name(ENGLISH, &region))
    }
}

impl Geocoder for OfflineGeocoder {
    fn description_for_number(&self, number: &PhoneNumber, locale: &Locale) -> String {
        if !phonenumber::is_valid(number) {
            trace!(
                "No description for invalid number {}",
                phonenumber::format(number).mode(Mode::E164)
            );
            return String::new();
        }

        let country_calling_code = number.code().value();
        let language = locale.language();
        let number_type = number.number_type(&DATABASE);
        if matches!(number_type, Type::Unknown) {
            return String::new();
        }
        if !is_number_geographical(&number_type, country_calling_code) {
            return self
                .country_name_for_number(number, language)
                .unwrap_or_default();
        }

        let e164 = phonenumber::format(number).mode(Mode::E164).to_string();
        let digits = lookup_digits(country_calling_code, &number_type, &e164);

        self.area_description(language, country_calling_code, &digits)
            .or_else(|| {
                if language != ENGLISH && may_fall_back_to_english(language) {
                    self.area_description(ENGLISH, country_calling_code, &digits)
                } else {
                    None
                }
            })
            .or_else(|| self.country_name_for_number(number, language))
            .unwrap_or_default()
    }
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn description_for_number(&self, number: &PhoneNumber, locale: &Locale) -> String {
        (**self).description_for_number(number, locale)
    }
}

impl<G: Geocoder + ?Sized> Geocoder for Arc<G> {
    fn description_for_number(&self, number: &PhoneNumber, locale: &Locale) -> String {
        (**self).description_for_number(number, locale)
    }
}

/// Fixed-line numbers always have a location, mobile numbers only in
/// countries that keep area codes for them.
fn is_number_geographical(number_type: &Type, country_calling_code: u16) -> bool {
    match number_type {
        Type::FixedLine | Type::FixedLineOrMobile => true,
        Type::Mobile => GEO_MOBILE_COUNTRIES.contains(&country_calling_code),
        _ => false,
    }
}

/// Calling code followed by the national significant number, taken from an
/// E.164 string, without the mobile token that would hide the area code.
fn lookup_digits(country_calling_code: u16, number_type: &Type, e164: &str) -> String {
    let digits = e164.trim_start_matches('+');
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);
    let national = digits.strip_prefix(country_calling_code_str).unwrap_or(digits);

    let is_mobile = matches!(number_type, Type::Mobile | Type::FixedLineOrMobile);
    match national.strip_prefix(ARGENTINA_MOBILE_TOKEN) {
        Some(stripped) if is_mobile && country_calling_code == ARGENTINA_CALLING_CODE => {
            fast_cat::concat_str!(country_calling_code_str, stripped)
        }
        _ => fast_cat::concat_str!(country_calling_code_str, national),
    }
}

/// Area names written in a script other than Latin are not replaced by
/// English ones.
fn may_fall_back_to_english(language: &str) -> bool {
    !matches!(language, "zh" | "ja" | "ko")
}

fn read_file<T>(
    path: &Path,
    parse: impl FnOnce(BufReader<File>) -> Result<T, PrefixFileError>,
) -> Result<T, PrefixFileError> {
    let file = File::open(path)?;
    parse(BufReader::new(file))
}
