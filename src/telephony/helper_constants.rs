/// Pause character; everything after it is dialed once the call connects.
pub const PAUSE: char = ',';
/// Wait character; everything after it is dialed on user confirmation.
pub const WAIT: char = ';';
/// Wildcard that matches any single digit.
pub const WILD: char = 'N';

pub const PLUS_SIGN: char = '+';

// Calling line identification restriction prefixes. A '+' right after one
// of them still starts an international number.
pub const CLIR_ON: &'static str = "*31#";
pub const CLIR_OFF: &'static str = "#31#";

// '@' marks a SIP address. Some providers deliver it escaped.
pub const URI_AT_SIGN: &'static str = "@";
pub const URI_ESCAPED_AT_SIGN: &'static str = "%40";
