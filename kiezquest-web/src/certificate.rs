//! Certificate rendering and download.
//!
//! Renders the assembled certificate lines to a one-page PDF and hands it to
//! the browser as a download. Rendering is pure and runs anywhere; only the
//! download step touches the DOM.

use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::collections::BTreeMap;
use wasm_bindgen::JsValue;

use crate::{dom, i18n};
use kiezquest_core::CertificateText;

pub const CERTIFICATE_FILE_NAME: &str = "kiezquest_zertifikat.pdf";

/// Assemble the certificate text from the current locale and an issue date.
#[must_use]
pub fn localized_text(issued_date: &str) -> CertificateText {
    let mut args = BTreeMap::new();
    args.insert("date", issued_date);
    CertificateText::new(
        i18n::t("certificate.title"),
        i18n::t("certificate.congrats"),
        i18n::t("certificate.body"),
        i18n::tr("certificate.issued_on", Some(&args)),
    )
}

/// Render the certificate to PDF bytes.
///
/// # Errors
///
/// Returns an error if the built-in font cannot be added or the document
/// fails to serialize.
pub fn render_pdf(text: &CertificateText) -> Result<Vec<u8>, printpdf::Error> {
    // A4 portrait.
    let (doc, page, layer) =
        PdfDocument::new(text.title.as_str(), Mm(210.0), Mm(297.0), "certificate");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let surface = doc.get_page(page).get_layer(layer);

    let mut y = 260.0;
    let sizes = [18.0, 14.0, 12.0, 12.0];
    for (line, size) in text.lines().into_iter().zip(sizes) {
        surface.use_text(line, size, Mm(20.0), Mm(y), &font);
        y -= 14.0;
    }
    doc.save_to_bytes()
}

/// Render the certificate and trigger a browser download.
///
/// Safe to invoke any number of times; failures are logged, never surfaced
/// as a crash.
pub fn download(text: &CertificateText) {
    match render_pdf(text) {
        Ok(bytes) => {
            if let Err(err) = trigger_download(&bytes) {
                dom::console_error(&format!(
                    "certificate download failed: {}",
                    dom::js_error_message(&err)
                ));
            }
        }
        Err(err) => log::error!("certificate rendering failed: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn trigger_download(bytes: &[u8]) -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlAnchorElement;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = dom::document().create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(CERTIFICATE_FILE_NAME);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn trigger_download(_bytes: &[u8]) -> Result<(), JsValue> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_pdf_document() {
        let text = CertificateText::new(
            "Zertifikat",
            "Herzlichen Glückwunsch!",
            "Alle Stationen erfolgreich abgeschlossen.",
            "Ausgestellt am: 7.8.2026",
        );
        let bytes = render_pdf(&text).expect("pdf renders");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn localized_text_interpolates_the_date() {
        i18n::set_lang("de");
        let text = localized_text("7.8.2026");
        assert!(text.issued_on.contains("7.8.2026"));
        assert!(!text.title.is_empty());
    }
}
