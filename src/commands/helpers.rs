//! Command helper utilities

use console::Style;

/// Print `content` verbatim under a dimmed header naming it
pub fn print_fragment(title: &str, content: &str) {
    println!("{}", Style::new().dim().apply_to(format!("# ----- {title} -----")));
    print!("{content}");
    if !content.is_empty() && !content.ends_with('\n') {
        println!();
    }
}

/// Join key names for display, or a dash when there are none
pub fn format_keys(keys: &[String]) -> String {
    if keys.is_empty() {
        "-".to_string()
    } else {
        keys.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keys() {
        assert_eq!(format_keys(&[]), "-");
        assert_eq!(
            format_keys(&["group".to_string(), "device-name".to_string()]),
            "group, device-name"
        );
    }
}
