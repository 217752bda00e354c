use console::style;

/// Format an error message with a red `ERROR:` label for stderr.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold().for_stderr(), message)
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a block of text (help, usage) to stderr without decoration.
pub fn display_usage(text: &str) {
    eprintln!("{}", text.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_keeps_message() {
        let formatted = format_error("no .git directory found");
        assert!(formatted.contains("ERROR:"));
        assert!(formatted.ends_with("no .git directory found"));
    }
}
