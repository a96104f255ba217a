//! Decimal width of integers.
//!
//! [`DigitCount::digit_count`] returns the number of characters needed to print
//! an integer in base 10, optionally with a `,` between every group of three
//! digits. The magnitude is classified against fixed decimal ranges, so no
//! string is built and no logarithm is taken.
//!
//! Negative values are classified on the signed value itself. Negating
//! `i32::MIN` or `i64::MIN` would overflow, so the tables below carry their own
//! negative ranges.
//!
//! ```
//! use refmeta_core::digits::{digit_count, DigitCount};
//!
//! assert_eq!(digit_count(-1_234_567i32, false), 8);
//! assert_eq!((-1_234_567i32).digit_count(true), 10); // "-1,234,567"
//! assert_eq!(0u64.digit_count(true), 1);
//! ```

/// Types whose printed decimal width can be computed without formatting.
pub trait DigitCount: Copy {
    /// Number of base-10 digits in the magnitude, ignoring sign.
    fn decimal_digits(self) -> usize;

    /// Whether a leading `-` is printed.
    fn is_negative(self) -> bool;

    /// Characters needed to print `self`, including the sign and, when
    /// `use_separators` is set, one separator per full group of three digits.
    fn digit_count(self, use_separators: bool) -> usize {
        let digits = self.decimal_digits();
        let separators = if use_separators { (digits - 1) / 3 } else { 0 };
        digits + separators + usize::from(self.is_negative())
    }
}

/// Free-function form of [`DigitCount::digit_count`].
pub fn digit_count<T: DigitCount>(value: T, use_separators: bool) -> usize {
    value.digit_count(use_separators)
}

impl DigitCount for u32 {
    fn decimal_digits(self) -> usize {
        match self {
            0..=9 => 1,
            10..=99 => 2,
            100..=999 => 3,
            1_000..=9_999 => 4,
            10_000..=99_999 => 5,
            100_000..=999_999 => 6,
            1_000_000..=9_999_999 => 7,
            10_000_000..=99_999_999 => 8,
            100_000_000..=999_999_999 => 9,
            1_000_000_000..=u32::MAX => 10,
        }
    }

    fn is_negative(self) -> bool {
        false
    }
}

impl DigitCount for i32 {
    fn decimal_digits(self) -> usize {
        match self {
            i32::MIN..=-1_000_000_000 => 10,
            -999_999_999..=-100_000_000 => 9,
            -99_999_999..=-10_000_000 => 8,
            -9_999_999..=-1_000_000 => 7,
            -999_999..=-100_000 => 6,
            -99_999..=-10_000 => 5,
            -9_999..=-1_000 => 4,
            -999..=-100 => 3,
            -99..=-10 => 2,
            -9..=9 => 1,
            10..=99 => 2,
            100..=999 => 3,
            1_000..=9_999 => 4,
            10_000..=99_999 => 5,
            100_000..=999_999 => 6,
            1_000_000..=9_999_999 => 7,
            10_000_000..=99_999_999 => 8,
            100_000_000..=999_999_999 => 9,
            1_000_000_000..=i32::MAX => 10,
        }
    }

    fn is_negative(self) -> bool {
        self < 0
    }
}

impl DigitCount for u64 {
    fn decimal_digits(self) -> usize {
        match self {
            0..=9 => 1,
            10..=99 => 2,
            100..=999 => 3,
            1_000..=9_999 => 4,
            10_000..=99_999 => 5,
            100_000..=999_999 => 6,
            1_000_000..=9_999_999 => 7,
            10_000_000..=99_999_999 => 8,
            100_000_000..=999_999_999 => 9,
            1_000_000_000..=9_999_999_999 => 10,
            10_000_000_000..=99_999_999_999 => 11,
            100_000_000_000..=999_999_999_999 => 12,
            1_000_000_000_000..=9_999_999_999_999 => 13,
            10_000_000_000_000..=99_999_999_999_999 => 14,
            100_000_000_000_000..=999_999_999_999_999 => 15,
            1_000_000_000_000_000..=9_999_999_999_999_999 => 16,
            10_000_000_000_000_000..=99_999_999_999_999_999 => 17,
            100_000_000_000_000_000..=999_999_999_999_999_999 => 18,
            1_000_000_000_000_000_000..=9_999_999_999_999_999_999 => 19,
            10_000_000_000_000_000_000..=u64::MAX => 20,
        }
    }

    fn is_negative(self) -> bool {
        false
    }
}

impl DigitCount for i64 {
    fn decimal_digits(self) -> usize {
        match self {
            i64::MIN..=-1_000_000_000_000_000_000 => 19,
            -999_999_999_999_999_999..=-100_000_000_000_000_000 => 18,
            -99_999_999_999_999_999..=-10_000_000_000_000_000 => 17,
            -9_999_999_999_999_999..=-1_000_000_000_000_000 => 16,
            -999_999_999_999_999..=-100_000_000_000_000 => 15,
            -99_999_999_999_999..=-10_000_000_000_000 => 14,
            -9_999_999_999_999..=-1_000_000_000_000 => 13,
            -999_999_999_999..=-100_000_000_000 => 12,
            -99_999_999_999..=-10_000_000_000 => 11,
            -9_999_999_999..=-1_000_000_000 => 10,
            -999_999_999..=-100_000_000 => 9,
            -99_999_999..=-10_000_000 => 8,
            -9_999_999..=-1_000_000 => 7,
            -999_999..=-100_000 => 6,
            -99_999..=-10_000 => 5,
            -9_999..=-1_000 => 4,
            -999..=-100 => 3,
            -99..=-10 => 2,
            -9..=9 => 1,
            10..=99 => 2,
            100..=999 => 3,
            1_000..=9_999 => 4,
            10_000..=99_999 => 5,
            100_000..=999_999 => 6,
            1_000_000..=9_999_999 => 7,
            10_000_000..=99_999_999 => 8,
            100_000_000..=999_999_999 => 9,
            1_000_000_000..=9_999_999_999 => 10,
            10_000_000_000..=99_999_999_999 => 11,
            100_000_000_000..=999_999_999_999 => 12,
            1_000_000_000_000..=9_999_999_999_999 => 13,
            10_000_000_000_000..=99_999_999_999_999 => 14,
            100_000_000_000_000..=999_999_999_999_999 => 15,
            1_000_000_000_000_000..=9_999_999_999_999_999 => 16,
            10_000_000_000_000_000..=99_999_999_999_999_999 => 17,
            100_000_000_000_000_000..=999_999_999_999_999_999 => 18,
            1_000_000_000_000_000_000..=i64::MAX => 19,
        }
    }

    fn is_negative(self) -> bool {
        self < 0
    }
}

/// Narrower integers share the tables of the type they widen into losslessly.
macro_rules! impl_widened {
    ($($narrow:ty => $wide:ty),* $(,)?) => {
        $(
            impl DigitCount for $narrow {
                fn decimal_digits(self) -> usize {
                    <$wide>::from(self).decimal_digits()
                }

                fn is_negative(self) -> bool {
                    <$wide>::from(self).is_negative()
                }
            }
        )*
    };
}

impl_widened!(u8 => u32, u16 => u32, i8 => i32, i16 => i32);

impl DigitCount for usize {
    fn decimal_digits(self) -> usize {
        // usize is at most 64 bits on every supported target.
        (self as u64).decimal_digits()
    }

    fn is_negative(self) -> bool {
        false
    }
}

impl DigitCount for isize {
    fn decimal_digits(self) -> usize {
        (self as i64).decimal_digits()
    }

    fn is_negative(self) -> bool {
        self < 0
    }
}
