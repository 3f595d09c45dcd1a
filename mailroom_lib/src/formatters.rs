use rust_decimal::{Decimal, RoundingStrategy};

// Number of digits after the decimal point
const PRECISION: u32 = 2;

/// How to display large numbers
#[derive(Clone, Copy, Default)]
pub enum Separators {
    #[default]
    None,              // no special formatting    1234456.78
    Every3Digit(char), // char every 3 digits      1,234,456.78
}

/// How to display money amounts
#[derive(Clone)]
pub struct Formatter {
    pub symbol: String,
    pub separators: Separators,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            separators: Separators::default(),
        }
    }
}

impl Formatter {
    /// Display the absolute value of value, without currency symbol
    fn push_abs_num(&self, into: &mut String, value: Decimal) {
        let rounded = value
            .abs()
            .round_dp_with_strategy(PRECISION, RoundingStrategy::MidpointNearestEven);
        let val: Vec<char> = rounded.to_string().chars().collect();
        let decimal = val.iter().position(|&r| r == '.').unwrap_or(val.len());

        for (idx, p) in val.iter().take(decimal).enumerate() {
            if let Separators::Every3Digit(sep) = self.separators {
                if idx > 0 && (decimal - idx) % 3 == 0 {
                    into.push(sep);
                }
            }
            into.push(*p);
        }

        into.push('.');
        let mut count = 0_u32;
        for p in val.iter().skip(decimal + 1) {
            into.push(*p);
            count += 1;
        }
        for _ in count..PRECISION {
            into.push('0');
        }
    }

    /// Only the number, e.g. "1800.00"
    pub fn display_number(&self, value: Decimal) -> String {
        let mut buffer = String::new();
        if value.is_sign_negative() && !value.is_zero() {
            buffer.push('-');
        }
        self.push_abs_num(&mut buffer, value);
        buffer
    }

    /// The amount with its currency symbol, e.g. "$1800.00"
    pub fn display(&self, value: Decimal) -> String {
        format!("{}{}", self.symbol, self.display_number(value))
    }

    /// The currency symbol first, then the number right-aligned so that the
    /// whole text occupies at least width characters, e.g. "$     1800.00"
    pub fn display_in_width(&self, value: Decimal, width: usize) -> String {
        let width = width.saturating_sub(self.symbol.chars().count());
        format!("{}{:>width$}", self.symbol, self.display_number(value))
    }
}

#[cfg(test)]
mod test {
    use crate::formatters::{Formatter, Separators};
    use rust_decimal_macros::dec;

    #[test]
    fn test_display() {
        let f = Formatter::default();
        assert_eq!(f.display(dec!(1800)), "$1800.00");
        assert_eq!(f.display(dec!(100.00)), "$100.00");
        assert_eq!(f.display(dec!(1234567.238)), "$1234567.24");
        assert_eq!(f.display(dec!(523.1)), "$523.10");
        assert_eq!(f.display(dec!(-12.5)), "$-12.50");
        assert_eq!(f.display_number(dec!(0.2)), "0.20");

        // round to nearest even
        assert_eq!(f.display(dec!(0.235)), "$0.24");
        assert_eq!(f.display(dec!(0.245)), "$0.24");
        assert_eq!(f.display(dec!(2166.72666)), "$2166.73");

        let f = Formatter {
            separators: Separators::Every3Digit(','),
            ..Formatter::default()
        };
        assert_eq!(f.display(dec!(234567)), "$234,567.00");
        assert_eq!(f.display(dec!(1234567.238)), "$1,234,567.24");

        let f = Formatter {
            symbol: "EUR ".to_string(),
            separators: Separators::Every3Digit(' '),
        };
        assert_eq!(f.display(dec!(1234567.2)), "EUR 1 234 567.20");
    }

    #[test]
    fn test_display_in_width() {
        let f = Formatter::default();
        assert_eq!(f.display_in_width(dec!(1800), 20), "$            1800.00");
        assert_eq!(f.display_in_width(dec!(1800), 20).chars().count(), 20);
        assert_eq!(f.display_in_width(dec!(123456.5), 5), "$123456.50");
    }
}
