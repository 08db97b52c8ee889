pub const BRANCH: &str = "├───";
pub const LAST_BRANCH: &str = "└───";
pub const OPEN_INDENT: &str = "│\t";
pub const CLOSED_INDENT: &str = "\t";
pub const EMPTY_SIZE: &str = "(empty)";

/// Raw byte count, no unit scaling: `0` is `(empty)`, anything else `(<n>b)`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        EMPTY_SIZE.to_owned()
    } else {
        format!("({bytes}b)")
    }
}

pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}
