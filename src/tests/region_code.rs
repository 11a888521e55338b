pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn ch() -> &'static str {
        "CH"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn us() -> &'static str {
        "US"
    }

    /// Unknown or unspecified region.
    pub fn zz() -> &'static str {
        "ZZ"
    }
}
