use heapless::String as HeaplessString;
use sqlx::{sqlite::SqliteRow, Row};
use std::error::Error;
use std::str::FromStr;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &SqliteRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| {
        format!("Value for column '{col_name}' is too long (max {N} chars)").into()
    })
}

/// Retrieves an optional `HeaplessString` from a row.
pub fn get_optional_heapless_string<const N: usize>(
    row: &SqliteRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let s: Option<String> = row.try_get(col_name)?;
    s.map(|val| HeaplessString::from_str(&val))
        .transpose()
        .map_err(|_| {
            format!("Value for column '{col_name}' is too long (max {N} chars)").into()
        })
}

/// Converts a database count into a `usize`.
pub fn count_to_usize(count: i64) -> Result<usize, Box<dyn Error + Send + Sync>> {
    usize::try_from(count).map_err(|_| format!("Count {count} is out of range").into())
}

/// Converts a page bound into a SQL integer parameter.
///
/// Bounds past `i64::MAX` are clamped; no table holds that many rows, so the
/// window stays empty either way.
pub fn bound_to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_conversion() {
        assert_eq!(count_to_usize(42).unwrap(), 42);
        assert!(count_to_usize(-1).is_err());
    }

    #[test]
    fn test_bound_conversion() {
        assert_eq!(bound_to_i64(200), 200);
        assert_eq!(bound_to_i64(usize::MAX), i64::MAX);
    }
}
