//! PDF export: styled HTML in, paginated PDF bytes out.
//!
//! Thin wrapper over printpdf's HTML pipeline. Images arrive inside the HTML as
//! data URIs, so the image and font maps stay empty. Renderer warnings are not
//! fatal — they are drained into the log.

use std::collections::BTreeMap;

use printpdf::{GeneratePdfOptions, PdfDocument, PdfSaveOptions};
use tracing::{debug, info, warn};

use crate::errors::RenderError;

pub fn render_pdf(html: &str) -> Result<Vec<u8>, RenderError> {
    let mut warnings = Vec::new();

    let doc = PdfDocument::from_html(
        html,
        &BTreeMap::new(), // images — embedded as data URIs instead
        &BTreeMap::new(), // fonts — the stylesheet sticks to built-ins
        &GeneratePdfOptions::default(),
        &mut warnings,
    )
    .map_err(|e| RenderError::Pdf(e.to_string()))?;

    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    if !warnings.is_empty() {
        warn!(count = warnings.len(), "renderer reported warnings");
        for w in &warnings {
            debug!("{w:?}");
        }
    }
    info!(bytes = bytes.len(), "PDF rendered");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_document_renders_to_pdf() {
        let html = "<html><head><title>t</title></head><body><p>hello</p></body></html>";
        let bytes = render_pdf(html).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "output should be a PDF");
        assert!(!bytes.is_empty());
    }
}
