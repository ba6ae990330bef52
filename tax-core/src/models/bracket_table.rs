//! The fixed resident income tax bracket table.
//!
//! Rates follow the ATO individual income tax rates for residents.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::TaxBracket;

/// Income at or below this amount is tax free.
pub const TAX_FREE_THRESHOLD: Decimal = dec!(18200);

/// Resident brackets, ascending by `min_income`. The last bracket is open.
pub const RESIDENT_BRACKETS: [TaxBracket; 4] = [
    TaxBracket {
        min_income: TAX_FREE_THRESHOLD,
        max_income: Some(dec!(45000)),
        tax_rate: dec!(0.19),
    },
    TaxBracket {
        min_income: dec!(45000),
        max_income: Some(dec!(120000)),
        tax_rate: dec!(0.325),
    },
    TaxBracket {
        min_income: dec!(120000),
        max_income: Some(dec!(180000)),
        tax_rate: dec!(0.37),
    },
    TaxBracket {
        min_income: dec!(180000),
        max_income: None,
        tax_rate: dec!(0.45),
    },
];
