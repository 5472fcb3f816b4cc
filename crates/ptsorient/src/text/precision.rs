use std::borrow::Cow;

use crate::record::Record;

/// Fractional digits in the shortest round-trip rendering of `v`.
#[inline]
pub fn fraction_digits(v: f64) -> usize {
    let s = v.to_string();
    s.find('.').map_or(0, |dot| s.len() - dot - 1)
}

/// Cap a record's fractional digits at `precision`.
///
/// If any component needs more than `precision` digits, every component is
/// rewritten in fixed point with exactly `precision` digits, single-space
/// separated, and the flag is `true`. Otherwise the original text comes back
/// untouched (spacing included) and the flag is `false`.
pub fn normalize_line<'a>(record: &Record<'a>, precision: usize) -> (Cow<'a, str>, bool) {
    let point = &record.point;
    if point.components().all(|v| fraction_digits(v) <= precision) {
        return (Cow::Borrowed(record.text), false);
    }
    let fields: Vec<String> = point
        .components()
        .map(|v| format!("{v:.precision$}"))
        .collect();
    (Cow::Owned(fields.join(" ")), true)
}
