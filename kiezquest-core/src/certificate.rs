//! Certificate text assembly.
//!
//! The completion certificate is a fixed set of text lines; rendering them to
//! a downloadable document is the platform layer's job. Keeping the assembly
//! here lets the lines be built and checked without a browser.

/// The localized text fields of a completion certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateText {
    pub title: String,
    pub congrats: String,
    pub body: String,
    pub issued_on: String,
}

impl CertificateText {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        congrats: impl Into<String>,
        body: impl Into<String>,
        issued_on: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            congrats: congrats.into(),
            body: body.into(),
            issued_on: issued_on.into(),
        }
    }

    /// The lines in render order, top of the page first.
    #[must_use]
    pub fn lines(&self) -> [&str; 4] {
        [&self.title, &self.congrats, &self.body, &self.issued_on]
    }
}
