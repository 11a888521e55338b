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

use std::{borrow::Cow, panic};

use log::{debug, error, trace};
use phonenumber::{PhoneNumber, country};

use crate::{
    call_uri::{CallUri, UriScheme},
    errors::ParseNumberError,
    geocoding::{Geocoder, OFFLINE_GEOCODER},
    resources::{Label, Resources},
    special_numbers::SpecialNumber,
    telephony,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ParseNumberError>;

/// Helper for formatting and managing phone numbers shown in call logs.
pub struct PhoneNumberHelper<R: Resources> {
    resources: R,

    /// Compared against the network portion of queried numbers.
    voicemail_number: Option<String>,

    /// Source of location descriptions.
    geocoder: Box<dyn Geocoder + Send + Sync>,
}

impl<R: Resources> PhoneNumberHelper<R> {
    /// Creates a helper using the shared offline geocoder. An empty
    /// voicemail number counts as not configured.
    pub fn new(resources: R, voicemail_number: Option<&str>) -> Self {
        let voicemail_number = voicemail_number
            .filter(|number| !number.is_empty())
            .map(str::to_owned);
        trace!("Voicemail number configured: {}", voicemail_number.is_some());
        Self {
            resources,
            voicemail_number,
            geocoder: Box::new(&*OFFLINE_GEOCODER),
        }
    }

    pub fn with_geocoder(mut self, geocoder: impl Geocoder + Send + Sync + 'static) -> Self {
        self.geocoder = Box::new(geocoder);
        self
    }

    pub fn resources(&self) -> &R {
        &self.resources
    }

    pub fn voicemail_number(&self) -> Option<&str> {
        self.voicemail_number.as_deref()
    }

    /// Returns true if it is possible to place a call to the given number.
    pub fn can_place_calls_to(&self, number: &str) -> bool {
        !(number.is_empty() || SpecialNumber::from_number(number).is_some())
    }

    /// Returns true if it is possible to send an SMS to the given number.
    pub fn can_send_sms_to(&self, number: &str) -> bool {
        self.can_place_calls_to(number)
            && !self.is_voicemail_number(number)
            && !self.is_sip_number(number)
    }

    /// Returns the string to display for the given phone number.
    ///
    /// Placeholders and the voicemail number are replaced by their labels,
    /// otherwise `formatted_number` is preferred over the raw number when it
    /// is present and non-empty.
    pub fn display_number<'a>(
        &'a self,
        number: &'a str,
        formatted_number: Option<&'a str>,
    ) -> Cow<'a, str> {
        if number.is_empty() {
            return Cow::Borrowed("");
        }
        if let Some(special) = SpecialNumber::from_number(number) {
            return self.resources.label(special.label());
        }
        if self.is_voicemail_number(number) {
            return self.resources.label(Label::Voicemail);
        }
        match formatted_number {
            Some(formatted) if !formatted.is_empty() => Cow::Borrowed(formatted),
            _ => Cow::Borrowed(number),
        }
    }

    /// Returns a URI that can be used to place a call to this number.
    pub fn call_uri(&self, number: &str) -> CallUri {
        if self.is_voicemail_number(number) {
            return CallUri::voicemail();
        }
        if self.is_sip_number(number) {
            return CallUri::from_parts(UriScheme::Sip, number);
        }
        CallUri::from_parts(UriScheme::Tel, number)
    }

    /// Returns true if the given number is the number of the configured
    /// voicemail.
    pub fn is_voicemail_number(&self, number: &str) -> bool {
        match &self.voicemail_number {
            Some(voicemail) => telephony::extract_network_portion(number) == *voicemail,
            None => false,
        }
    }

    /// Returns true if the given number is a SIP address.
    pub fn is_sip_number(&self, number: &str) -> bool {
        telephony::is_uri_number(number)
    }

    /// Returns a structured phone number from the given text representation,
    /// or `None` if the number cannot be parsed.
    pub fn parse_phone_number(&self, number: &str, country_iso: &str) -> Option<PhoneNumber> {
        self.try_parse_phone_number(number, country_iso)
            .inspect_err(|err| debug!("{}", err))
            .ok()
    }

    /// Parses `number`, interpreting national numbers as belonging to the
    /// region `country_iso` (e.g. `"US"`, case-insensitive). Numbers in
    /// international format parse even when the region is unknown.
    pub fn try_parse_phone_number(&self, number: &str, country_iso: &str) -> Result<PhoneNumber> {
        if number.trim().is_empty() {
            return Err(ParseNumberError::EmptyNumber);
        }
        let country = country_iso.trim().to_ascii_uppercase().parse::<country::Id>().ok();

        // The parser is not free of panics on malformed input
        let result = panic::catch_unwind(|| phonenumber::parse(country, number));
        match result {
            Ok(Ok(phone_number)) => Ok(phone_number),
            Ok(Err(err)) => Err(ParseNumberError::Unparseable {
                number: number.to_owned(),
                reason: format!("{:?}", err),
            }),
            Err(_) => {
                error!("phonenumber crate panicked while parsing {:?}", number);
                Err(ParseNumberError::ParserPanicked(number.to_owned()))
            }
        }
    }

    /// Returns the geocode associated with a phone number or the empty string
    /// if not available.
    pub fn geocode_for_number(&self, structured_phone_number: Option<&PhoneNumber>) -> String {
        match structured_phone_number {
            Some(number) => self
                .geocoder
                .description_for_number(number, self.resources.locale()),
            None => String::new(),
        }
    }

    /// Parses `number` for `country_iso` and returns its geocode, or the empty
    /// string if it cannot be parsed or located.
    pub fn geocode_for_raw_number(&self, number: &str, country_iso: &str) -> String {
        let parsed = self.parse_phone_number(number, country_iso);
        self.geocode_for_number(parsed.as_ref())
    }
}
