// Copyright 2026 the Fontprobe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Returns the value whose key is numerically closest to `key`.
///
/// Tables are scanned in declaration order and the first key at the minimum distance wins,
/// so ties resolve deterministically toward earlier entries.
///
/// Returns `None` only for an empty table.
///
/// ```
/// use font_attrs::nearest_value;
///
/// let table = [(100, 'a'), (300, 'b'), (500, 'c')];
/// assert_eq!(nearest_value(&table, 180), Some('a'));
/// assert_eq!(nearest_value(&table, 250), Some('b'));
/// // 200 is equidistant from 100 and 300; the earlier entry wins.
/// assert_eq!(nearest_value(&table, 200), Some('a'));
/// ```
pub fn nearest_value<V: Copy>(table: &[(i32, V)], key: i32) -> Option<V> {
    table
        .iter()
        .min_by_key(|(k, _)| (i64::from(*k) - i64::from(key)).unsigned_abs())
        .map(|(_, v)| *v)
}
