mod call_uri;
mod errors;
mod phone_number_helper;
mod resources;
mod special_numbers;
pub mod geocoding;
pub mod telephony;

pub use call_uri::{CallUri, UriScheme};
pub use errors::{InvalidLocaleError, ParseNumberError, PrefixFileError};
pub use geocoding::{Geocoder, OfflineGeocoder, OFFLINE_GEOCODER};
pub use phone_number_helper::PhoneNumberHelper;
pub use resources::{DefaultResources, Label, Locale, Resources};
pub use special_numbers::SpecialNumber;

/// Structured phone number type produced by the parser.
pub use phonenumber::PhoneNumber;

#[cfg(test)]
mod tests;
