mod bracket_table;
mod tax_bracket;

pub use bracket_table::{RESIDENT_BRACKETS, TAX_FREE_THRESHOLD};
pub use tax_bracket::TaxBracket;
