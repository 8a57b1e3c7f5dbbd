/// Format a duration in whole seconds as `MM:SS`.
///
/// Both fields are zero-padded to two digits. There is no hour
/// rollover: the minutes field keeps growing past 59.
pub fn format_mm_ss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
