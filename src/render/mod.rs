//! Markdown rendering pipeline: header comments, result table, document.

pub mod comments;
pub mod document;
pub mod table;

pub use comments::header_comments;
pub use document::assemble_document;
pub use table::render_table;
