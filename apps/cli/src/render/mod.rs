// The two render stages: profile → HTML string → PDF bytes.
// Pagination, line breaking and font handling all belong to the PDF library;
// nothing here measures or lays out text.

pub mod html;
pub mod pdf;

pub use html::render_html;
pub use pdf::render_pdf;
