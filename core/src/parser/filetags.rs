use once_cell::sync::Lazy;
use regex::Regex;

static FILETAGS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#\+FILETAGS: (.*\S.*)$").expect("valid filetags regex"));

/// Reads the document-level tag directive. The first matching line wins and
/// its value is split on whitespace, tokens kept verbatim. A document without
/// the directive yields an empty list.
pub fn scan_filetags(text: &str) -> Vec<String> {
    text.lines()
        .find_map(|line| FILETAGS_RE.captures(line))
        .map(|caps| caps[1].split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_filetags() {
        let text = "#+TITLE: Chores\n#+FILETAGS: work urgent\n* TODO Buy milk\n";
        assert_eq!(scan_filetags(text), vec!["work", "urgent"]);
    }

    #[test]
    fn test_first_directive_wins() {
        let text = "#+FILETAGS: home\n#+FILETAGS: office\n";
        assert_eq!(scan_filetags(text), vec!["home"]);
    }

    #[test]
    fn test_missing_or_malformed_directive() {
        assert!(scan_filetags("* TODO Nothing here\n").is_empty());
        assert!(scan_filetags("#+filetags: lower\n").is_empty());
        assert!(scan_filetags("#+FILETAGS:\n").is_empty());
    }

    #[test]
    fn test_empty_directive_does_not_stop_scan() {
        let text = "#+FILETAGS:   \n#+FILETAGS: later\n";
        assert_eq!(scan_filetags(text), vec!["later"]);
    }

    #[test]
    fn test_tokens_are_verbatim() {
        let text = "#+FILETAGS: :Work:  C++ \n";
        assert_eq!(scan_filetags(text), vec![":Work:", "C++"]);
    }
}
