// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Line tokenizing and profile table parsing

mod csv_parser;
mod line_tokenizer;

pub use csv_parser::CsvProfileParser;
pub use line_tokenizer::tokenize_line;
