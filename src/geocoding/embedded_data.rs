//! Geocoding data compiled into the library from `resources/geocoding`.

/// `(language, country calling code, prefix file)`
pub(super) static AREA_DESCRIPTIONS: &[(&str, u16, &str)] = &[
    ("en", 1, include_str!("../../resources/geocoding/en/1.txt")),
    ("en", 33, include_str!("../../resources/geocoding/en/33.txt")),
    ("en", 44, include_str!("../../resources/geocoding/en/44.txt")),
    ("en", 49, include_str!("../../resources/geocoding/en/49.txt")),
    ("de", 49, include_str!("../../resources/geocoding/de/49.txt")),
    ("fr", 33, include_str!("../../resources/geocoding/fr/33.txt")),
];

/// `(language, country names file)`
pub(super) static COUNTRY_NAMES: &[(&str, &str)] = &[
    ("en", include_str!("../../resources/geocoding/countries/en.txt")),
    ("de", include_str!("../../resources/geocoding/countries/de.txt")),
    ("fr", include_str!("../../resources/geocoding/countries/fr.txt")),
    ("ja", include_str!("../../resources/geocoding/countries/ja.txt")),
];

pub(super) fn area_descriptions(language: &str, country_calling_code: u16) -> Option<&'static str> {
    AREA_DESCRIPTIONS
        .iter()
        .find(|(lang, code, _)| *lang == language && *code == country_calling_code)
        .map(|(_, _, data)| *data)
}

pub(super) fn country_names(language: &str) -> Option<&'static str> {
    COUNTRY_NAMES
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, data)| *data)
}
