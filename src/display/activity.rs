//! Activity log display formatting

use crate::audit::ActivityEntry;

/// Format activity entries, one per line, oldest first
pub fn format_activity_log(entries: &[ActivityEntry]) -> String {
    if entries.is_empty() {
        return "No activity recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}
