//! Form-submission detection.
//!
//! The ambient "was this a POST" read is isolated behind a trait so the
//! validator core carries no environment coupling; tests and non-HTTP
//! embeddings inject [`StaticSubmission`].

use http::Method;

/// Reports whether the surrounding request context is a form submission.
pub trait SubmissionDetector {
    /// True iff the ambient context indicates a submitted form.
    fn detect(&self) -> bool;
}

/// Default detector: reads the CGI `REQUEST_METHOD` environment variable
/// and reports true for `POST`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CgiSubmission;

impl SubmissionDetector for CgiSubmission {
    fn detect(&self) -> bool {
        std::env::var("REQUEST_METHOD")
            .ok()
            .and_then(|method| method.parse::<Method>().ok())
            .is_some_and(|method| method == Method::POST)
    }
}

/// Fixed-answer detector for tests and non-HTTP embeddings.
#[derive(Debug, Clone, Copy)]
pub struct StaticSubmission(pub bool);

impl SubmissionDetector for StaticSubmission {
    fn detect(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_detector_reports_its_value() {
        assert!(StaticSubmission(true).detect());
        assert!(!StaticSubmission(false).detect());
    }

    #[test]
    fn cgi_detector_reads_request_method() {
        // Serialized by the single-threaded assumption of these tests;
        // restore to avoid leaking into the environment of other tests.
        std::env::set_var("REQUEST_METHOD", "POST");
        assert!(CgiSubmission.detect());
        std::env::set_var("REQUEST_METHOD", "GET");
        assert!(!CgiSubmission.detect());
        std::env::remove_var("REQUEST_METHOD");
        assert!(!CgiSubmission.detect());
    }
}
