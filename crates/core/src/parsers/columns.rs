/// Index of the first header cell (left to right) whose lowercased text
/// contains any of `keywords`. Keywords are expected in lowercase.
pub fn resolve_column<S: AsRef<str>>(headers: &[S], keywords: &[&str]) -> Option<usize> {
    resolve_column_excluding(headers, keywords, &[])
}

/// Like [`resolve_column`], but skips headers containing any of `excluded`.
///
/// The history sheet's RON column needs this: its gain/loss header also
/// mentions RON and sits next to it.
pub fn resolve_column_excluding<S: AsRef<str>>(
    headers: &[S],
    keywords: &[&str],
    excluded: &[&str],
) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.as_ref().to_lowercase();
        keywords.iter().any(|k| header.contains(k)) && !excluded.iter().any(|x| header.contains(x))
    })
}

/// Index of the header equal to `name`, ignoring case and surrounding whitespace.
pub fn resolve_exact_column<S: AsRef<str>>(headers: &[S], name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.as_ref().trim().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins() {
        let headers = ["Data", "Valoare EUR", "EUR cash"];
        assert_eq!(resolve_column(&headers, &["eur"]), Some(1));
    }

    #[test]
    fn any_keyword_matches() {
        let headers = ["Comentariu", "Data"];
        assert_eq!(resolve_column(&headers, &["date", "data"]), Some(1));
    }

    #[test]
    fn missing_is_none() {
        let headers = ["a", "b"];
        assert_eq!(resolve_column(&headers, &["eur"]), None);
    }

    #[test]
    fn exclusion_skips_gain_loss_header() {
        let headers = ["Data", "Gain/Loss RON", "Total RON"];
        assert_eq!(
            resolve_column_excluding(&headers, &["ron"], &["gain", "loss"]),
            Some(2)
        );
    }

    #[test]
    fn exact_match_ignores_case() {
        let headers = ["Car", " DATA ", "Data nasterii"];
        assert_eq!(resolve_exact_column(&headers, "data"), Some(1));
        assert_eq!(resolve_exact_column(&["Date"], "data"), None);
    }
}
