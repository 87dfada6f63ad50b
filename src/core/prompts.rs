//! Prompt templates shared by every provider adapter

/// Base instruction for page transcription
pub const OCR_SYSTEM_PROMPT: &str = "\
Convert the following document page to markdown.
Return only the markdown with no explanation text. Do not include delimiters like ```markdown or ```html.

RULES:
  - You must include all information on the page. Do not exclude headers, footers, charts, infographics, or subtext.
  - Return tables in an HTML format.
  - Logos should be wrapped in brackets. Ex: <logo>Coca-Cola<logo>
  - Watermarks should be wrapped in brackets. Ex: <watermark>OFFICIAL COPY<watermark>
  - Page numbers should be wrapped in brackets. Ex: <page_number>14<page_number> or <page_number>9/22<page_number>
  - Prefer using ☐ and ☑ for check boxes.";

/// Instruction for schema-driven extraction
pub const EXTRACTION_PROMPT: &str = "\
Extract data from the provided image according to the requested schema.
Only include values that are visible on the page. Use null for fields that cannot be found.";

/// Instruction asking the model to keep the previous page's formatting
pub fn consistency_prompt(prior_page: &str) -> String {
    format!(
        "Markdown must maintain consistent formatting with the following page: \n\n \"\"\"{}\"\"\"",
        prior_page
    )
}
