//! Plain-text rendering helpers.

use std::fmt;

use procura_core::currency::round_display;
use rust_decimal::Decimal;

/// Fixed-width text table with a header row.
///
/// Column widths follow the longest cell; short rows leave trailing
/// columns blank.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given column headers.
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (column, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                if column < widths.len() {
                    widths[column] = widths[column].max(len);
                } else {
                    widths.push(len);
                }
            }
        }
        widths
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_row(f, &self.headers, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_row(f, &rule, &widths)?;
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let blank = String::new();
    for (column, width) in widths.iter().enumerate() {
        let cell = cells.get(column).unwrap_or(&blank);
        if column + 1 == widths.len() {
            writeln!(f, "{cell}")?;
        } else {
            let width = *width;
            write!(f, "{cell:<width$}  ")?;
        }
    }
    Ok(())
}

/// Formats a money amount the way the budget table shows it.
#[must_use]
pub fn euros(value: Decimal) -> String {
    format!("€ {:.2}", round_display(value))
}

/// Formats a ratio the way the budget table shows percentages.
#[must_use]
pub fn percent(value: Decimal) -> String {
    format!("{:.2} %", round_display(value))
}

/// Formats an amount as typed, without currency or padding.
#[must_use]
pub fn amount(value: Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_table_pads_to_longest_cell() {
        let mut table = Table::new(["Code", "Status"]);
        table.row(["DA-1", "Validated"]);
        table.row(["DA-1000", "Done"]);

        let rendered = table.to_string();
        let expected = "Code     Status\n\
                        -------  ---------\n\
                        DA-1     Validated\n\
                        DA-1000  Done\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_table_tolerates_short_rows() {
        let mut table = Table::new(["A", "B", "C"]);
        table.row(["1"]);
        assert_eq!(table.to_string(), "A  B  C\n-  -  -\n1     \n");
    }

    #[test]
    fn test_euros_two_decimals() {
        assert_eq!(euros(dec!(1080)), "€ 1080.00");
        assert_eq!(euros(dec!(2.555)), "€ 2.56");
        assert_eq!(euros(dec!(0)), "€ 0.00");
    }

    #[test]
    fn test_percent_two_decimals() {
        assert_eq!(percent(dec!(92.5926)), "92.59 %");
        assert_eq!(percent(dec!(20)), "20.00 %");
    }

    #[test]
    fn test_amount_drops_trailing_zeros() {
        assert_eq!(amount(dec!(12.50)), "12.5");
        assert_eq!(amount(dec!(1000)), "1000");
    }
}
