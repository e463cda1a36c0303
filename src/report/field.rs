use ash::vk;
use std::fmt;

/// Value of one named field of a limits or features record.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Unsigned(u64),
    Signed(i64),
    Float(f32),
    /// Fixed-size array, rendered as `(e0, e1, ...)`.
    Array(Vec<FieldValue>),
}

/// Named accessor into a record of type `T`.
pub struct Field<T> {
    pub name: &'static str,
    pub read: fn(&T) -> FieldValue,
}

impl<T> Field<T> {
    pub fn value(&self, record: &T) -> FieldValue {
        (self.read)(record)
    }
}

/// Builds a `&[Field<T>]` table from `"vkName" => rust_member` pairs.
macro_rules! field_table {
    ($record:ty { $($name:literal => $member:ident),* $(,)? }) => {
        &[
            $(
                $crate::report::field::Field::<$record> {
                    name: $name,
                    read: |record: &$record| $crate::report::field::FieldValue::from(record.$member),
                },
            )*
        ]
    };
}

pub(crate) use field_table;

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Unsigned(value.into())
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        Self::Unsigned(value as u64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Signed(value.into())
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<vk::SampleCountFlags> for FieldValue {
    fn from(value: vk::SampleCountFlags) -> Self {
        Self::Unsigned(value.as_raw().into())
    }
}

impl<T: Into<FieldValue>, const N: usize> From<[T; N]> for FieldValue {
    fn from(values: [T; N]) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Unsigned(value) => write!(f, "{}", value),
            FieldValue::Signed(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write_general(f, f64::from(*value)),
            FieldValue::Array(values) => {
                f.write_str("(")?;
                for (i, value) in values.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str(")")
            }
        }
    }
}

const SIGNIFICANT_DIGITS: i32 = 6;

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// `%g` style output: six significant digits, trailing zeros dropped,
/// scientific notation for very small or very large magnitudes.
fn write_general(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
    }
    if value == 0.0 {
        return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // Rounding to the target precision first decides the exponent, so
    // 999999.5 switches to scientific notation like printf does.
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.write_str(&scientific);
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        f.write_str(trim_fraction(&format!("{:.*}", decimals, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_use_plain_text() {
        assert_eq!(FieldValue::from(42u32).to_string(), "42");
        assert_eq!(FieldValue::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(FieldValue::from(-8i32).to_string(), "-8");
        assert_eq!(FieldValue::from(vk::TRUE).to_string(), "1");
    }

    #[test]
    fn arrays_are_parenthesized() {
        assert_eq!(FieldValue::from([4u32, 8]).to_string(), "(4, 8)");
        assert_eq!(FieldValue::from([65535u32, 65535, 65535]).to_string(), "(65535, 65535, 65535)");
        assert_eq!(FieldValue::from([1.0f32, 64.0]).to_string(), "(1, 64)");
    }

    #[test]
    fn sample_counts_print_raw_bits() {
        let counts = vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4;
        assert_eq!(FieldValue::from(counts).to_string(), "5");
    }

    #[test]
    fn floats_follow_general_notation() {
        let cases: &[(f32, &str)] = &[
            (0.0, "0"),
            (-0.0, "-0"),
            (1.0, "1"),
            (0.5, "0.5"),
            (16.0, "16"),
            (-0.5, "-0.5"),
            (0.0625, "0.0625"),
            (52.083332, "52.0833"),
            (1e-9, "1e-09"),
            (0.0001, "0.0001"),
            (123456.0, "123456"),
            (1048576.0, "1.04858e+06"),
            (2000000.0, "2e+06"),
            (f32::INFINITY, "inf"),
        ];
        for (value, expected) in cases {
            assert_eq!(FieldValue::from(*value).to_string(), *expected, "{:?}", value);
        }
    }

    struct Pair {
        first: u32,
        range: [f32; 2],
    }

    #[test]
    fn table_reads_members_in_declared_order() {
        const PAIR_FIELDS: &[Field<Pair>] = field_table!(Pair {
            "first" => first,
            "range" => range,
        });

        let pair = Pair {
            first: 7,
            range: [0.5, 2.0],
        };
        let rendered: Vec<String> = PAIR_FIELDS
            .iter()
            .map(|field| format!("{} {}", field.name, field.value(&pair)))
            .collect();
        assert_eq!(rendered, ["first 7", "range (0.5, 2)"]);
    }
}
