use strum::{EnumIter, IntoEnumIterator};

use crate::resources::Label;

/// Placeholder values reported by the telephony stack instead of a real
/// caller number.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialNumber {
    /// **Unknown caller.**
    /// The network did not deliver any number for the call.
    Unknown,
    /// **Private caller.**
    /// The caller withheld their number.
    Private,
    /// **Pay phone.**
    /// The call originated from a public pay phone.
    Payphone,
}

impl SpecialNumber {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SpecialNumber::Unknown => "-1",
            SpecialNumber::Private => "-2",
            SpecialNumber::Payphone => "-3",
        }
    }

    /// Returns the placeholder `number` stands for, comparing the whole
    /// string exactly.
    pub fn from_number(number: &str) -> Option<Self> {
        Self::iter().find(|special| special.as_str() == number)
    }

    /// Label shown in place of the placeholder.
    pub const fn label(&self) -> Label {
        match self {
            SpecialNumber::Unknown => Label::Unknown,
            SpecialNumber::Private => Label::Private,
            SpecialNumber::Payphone => Label::Payphone,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::SpecialNumber;

    #[test]
    fn from_number_matches_whole_string() {
        assert_eq!(SpecialNumber::from_number("-1"), Some(SpecialNumber::Unknown));
        assert_eq!(SpecialNumber::from_number("-2"), Some(SpecialNumber::Private));
        assert_eq!(SpecialNumber::from_number("-3"), Some(SpecialNumber::Payphone));
        assert_eq!(SpecialNumber::from_number("-4"), None);
        assert_eq!(SpecialNumber::from_number(" -1"), None);
        assert_eq!(SpecialNumber::from_number("-10"), None);
        assert_eq!(SpecialNumber::from_number(""), None);
    }

    #[test]
    fn values_are_distinct() {
        let values: Vec<_> = SpecialNumber::iter().map(|s| s.as_str()).collect();
        assert_eq!(values, vec!["-1", "-2", "-3"]);
    }
}
