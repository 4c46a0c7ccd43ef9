pub mod ask;
pub mod pdf_query;
pub mod summarize;
