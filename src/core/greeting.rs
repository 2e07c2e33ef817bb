/// Name used when the caller does not supply one.
pub const DEFAULT_NAME: &str = "World";

pub const GREETING_PREFIX: &str = "Hello, ";
pub const GREETING_SUFFIX: &str = "!";

/// Builds `"Hello, <name>!"`, falling back to [`DEFAULT_NAME`].
///
/// Any text is accepted as-is, including the empty string.
pub fn greet(name: Option<&str>) -> String {
    let name = name.unwrap_or(DEFAULT_NAME);
    format!("{GREETING_PREFIX}{name}{GREETING_SUFFIX}")
}
