//! Value escaping for workflow commands
//!
//! The runner splits commands on newlines and parameters on `,` and `:`,
//! so those characters are percent-encoded. `%` itself is encoded first.

/// Escape a command message (the part after the closing `::`)
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command parameter value (`key=value`)
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Reverse of [`escape_data`]
pub fn unescape_data(value: &str) -> String {
    value
        .replace("%0D", "\r")
        .replace("%0A", "\n")
        .replace("%25", "%")
}

/// Reverse of [`escape_property`]
pub fn unescape_property(value: &str) -> String {
    unescape_data(&value.replace("%3A", ":").replace("%2C", ","))
}
