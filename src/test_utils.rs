#[cfg(test)]
pub mod fixtures {
    /// Plain study notes with no characters that HTML escaping would change.
    pub fn sample_notes() -> String {
        "Mitochondria are the powerhouse of the cell. They produce ATP through cellular respiration.".to_string()
    }

    /// Inputs that count as no notes at all.
    pub fn blank_notes() -> Vec<&'static str> {
        vec!["", " ", "\n\n", "\t \r\n"]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_blank_notes_are_blank() {
        for notes in blank_notes() {
            assert!(notes.trim().is_empty());
        }
    }

    #[test]
    fn test_fixtures_sample_notes_need_no_escaping() {
        let notes = sample_notes();
        assert!(!notes.trim().is_empty());
        assert!(!notes.contains(['<', '>', '&']));
    }
}
