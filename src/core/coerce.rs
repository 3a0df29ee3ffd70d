// src/core/coerce.rs

/// Lossy integer coercion for count cells.
///
/// An unreported count is shown as zero, so blanks, junk text and missing cells all
/// yield `0`. Decimal text is truncated toward zero (`"3.0"` → 3, `"2.9"` → 2).
pub fn coerce_int(value: Option<&str>) -> i64 {
    let Some(raw) = value else { return 0 };
    let t = raw.trim();
    if t.is_empty() {
        return 0;
    }
    if let Ok(n) = t.parse::<i64>() {
        return n;
    }
    match t.parse::<f64>() {
        Ok(f) if f.is_finite() && f.abs() < i64::MAX as f64 => f.trunc() as i64,
        _ => 0,
    }
}

#[inline]
pub fn to_int(cell: &str) -> i64 {
    coerce_int(Some(cell))
}
