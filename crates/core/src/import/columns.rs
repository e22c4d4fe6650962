//! Declarative mapping from source column positions to position fields.
//!
//! The source layout is fixed at 57 columns. Each entry pairs a zero-based
//! column index with the setter that extracts the field; positions 38 and
//! 41 carry no data in the source layout and have no entry.

use log::debug;

use super::sheet::{Cell, Row};
use crate::positions::NewPosition;

type ColumnSetter = fn(&mut NewPosition, Option<&Cell>);

macro_rules! text_col {
    ($index:expr, $field:ident) => {
        ($index, (|position: &mut NewPosition, cell: Option<&Cell>| {
            position.$field = cell.and_then(Cell::as_string);
        }) as ColumnSetter)
    };
}

macro_rules! decimal_col {
    ($index:expr, $field:ident) => {
        ($index, (|position: &mut NewPosition, cell: Option<&Cell>| {
            position.$field = cell.and_then(Cell::as_decimal);
            if position.$field.is_none() {
                if let Some(c) = cell {
                    if !c.is_blank() {
                        debug!("Column {} not usable as amount: {:?}", $index, c);
                    }
                }
            }
        }) as ColumnSetter)
    };
}

macro_rules! integer_col {
    ($index:expr, $field:ident) => {
        ($index, (|position: &mut NewPosition, cell: Option<&Cell>| {
            position.$field = cell.and_then(Cell::as_integer);
            if position.$field.is_none() {
                if let Some(c) = cell {
                    if !c.is_blank() {
                        debug!("Column {} not usable as integer: {:?}", $index, c);
                    }
                }
            }
        }) as ColumnSetter)
    };
}

macro_rules! datetime_col {
    ($index:expr, $field:ident) => {
        ($index, (|position: &mut NewPosition, cell: Option<&Cell>| {
            position.$field = cell.and_then(Cell::as_datetime);
            if position.$field.is_none() {
                if let Some(c) = cell {
                    if !c.is_blank() {
                        debug!("Column {} not usable as timestamp: {:?}", $index, c);
                    }
                }
            }
        }) as ColumnSetter)
    };
}

const COLUMN_MAP: &[(usize, ColumnSetter)] = &[
    text_col!(0, partner_id),
    text_col!(1, account_id),
    datetime_col!(2, position_created_date),
    text_col!(3, fi_unit_type_code),
    decimal_col!(4, balance_amount),
    decimal_col!(5, value_amount),
    decimal_col!(6, trade_amount),
    datetime_col!(7, valuation_date),
    datetime_col!(8, as_of_date),
    text_col!(9, value_currency),
    text_col!(10, source_currency),
    decimal_col!(11, original_quantity),
    decimal_col!(12, market_value_amount),
    decimal_col!(13, fx_rate),
    text_col!(14, valor),
    text_col!(15, isin),
    text_col!(16, instrument_name_short),
    text_col!(17, symbol_id),
    text_col!(18, title_group_id),
    text_col!(19, title_id),
    text_col!(20, title_id_description),
    text_col!(21, symbol_id_alt),
    text_col!(22, product_description),
    text_col!(23, product_id),
    text_col!(24, product_id_description),
    text_col!(25, product_class_id),
    text_col!(26, product_class_description),
    text_col!(27, product_family_id),
    text_col!(28, product_family_description),
    text_col!(29, asset_class),
    text_col!(30, asset_class_subtype),
    text_col!(31, asset_class_description_short),
    text_col!(32, asset_class_description_long),
    text_col!(33, category_type_code),
    text_col!(34, instrument_id),
    text_col!(35, portfolio_currency),
    text_col!(36, portfolio_short_name),
    text_col!(37, currency_id),
    text_col!(39, mandate_pricing_id),
    text_col!(40, mandate_program),
    text_col!(42, mandate_pricing_name_short),
    text_col!(43, mandate_pricing_name_long),
    text_col!(44, mandate_pricing_type),
    text_col!(45, mandate_program_secondary),
    text_col!(46, investment_strategy_code),
    text_col!(47, investment_strategy_name),
    text_col!(48, solution_subtype_id),
    text_col!(49, solution_subtype_name_short),
    text_col!(50, solution_name_short),
    text_col!(51, solution_name_long),
    text_col!(52, mandate_type),
    text_col!(53, mandate_subtype),
    text_col!(54, mandate_group),
    text_col!(55, domicile),
    integer_col!(56, client_advisor_id),
];

/// Builds a position from one classified row. Missing trailing cells and
/// unusable cells leave their field unset.
pub fn map_row(row: &Row) -> NewPosition {
    let mut position = NewPosition::default();
    for (index, setter) in COLUMN_MAP {
        setter(&mut position, row.cell(*index));
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row_of(fields: &[&str]) -> Row {
        Row::new(fields.iter().map(|f| Cell::classify(f)).collect())
    }

    #[test]
    fn maps_typed_fields_from_their_positions() {
        let mut fields = vec![""; 57];
        fields[0] = "123456";
        fields[1] = "ACC-001";
        fields[5] = "2500.75";
        fields[7] = "2024-03-15T00:00:00Z";
        fields[9] = "CHF";
        fields[16] = "Nestle SA";
        fields[56] = "42";
        let position = map_row(&row_of(&fields));

        // A numeric identifier still lands as text without a decimal point
        assert_eq!(position.partner_id.as_deref(), Some("123456"));
        assert_eq!(position.account_id.as_deref(), Some("ACC-001"));
        assert_eq!(position.value_amount, Some(dec!(2500.75)));
        assert!(position.valuation_date.is_some());
        assert_eq!(position.value_currency.as_deref(), Some("CHF"));
        assert_eq!(position.instrument_name_short.as_deref(), Some("Nestle SA"));
        assert_eq!(position.client_advisor_id, Some(42));
    }

    #[test]
    fn unused_source_positions_are_ignored() {
        let mut fields = vec![""; 57];
        fields[38] = "noise";
        fields[41] = "more noise";
        let position = map_row(&row_of(&fields));
        assert_eq!(position, NewPosition::default());
    }

    #[test]
    fn short_rows_leave_trailing_fields_unset() {
        let position = map_row(&row_of(&["P1", "ACC-9"]));
        assert_eq!(position.partner_id.as_deref(), Some("P1"));
        assert_eq!(position.account_id.as_deref(), Some("ACC-9"));
        assert!(position.value_amount.is_none());
        assert!(position.client_advisor_id.is_none());
    }

    #[test]
    fn map_stays_inside_the_source_layout() {
        use crate::constants::SOURCE_COLUMN_COUNT;
        assert!(COLUMN_MAP.iter().all(|(index, _)| *index < SOURCE_COLUMN_COUNT));
        // Two duplicate source positions carry no entry
        assert_eq!(COLUMN_MAP.len(), SOURCE_COLUMN_COUNT - 2);
    }

    #[test]
    fn textual_amount_is_dropped_not_parsed() {
        let mut fields = vec![""; 57];
        fields[5] = "n/a";
        let position = map_row(&row_of(&fields));
        assert!(position.value_amount.is_none());
    }
}
