//! Nonlinear scale tables.
//!
//! Each table maps a stored byte code (the index) to the quantity an editor
//! displays. The hardware's resolution is non-uniform, so translating user
//! input back into a code is a search over the table:
//!
//! - [`ceiling_search`] rounds up to the next coarser hardware step, so the
//!   decoded value is never smaller than requested.
//! - [`nearest_search`] picks the closest step, earlier index on ties.
//!
//! Tables are short (under 128 entries) and immutable, so both searches
//! are linear scans.

/// Frequency envelope times, in milliseconds.
pub static FREQ_TIME_SCALE: ScaleTable = ScaleTable::new(
    "freq_time",
    &[
        0, 1, 2, 3, 4, 5, 6, 7, //
        8, 9, 10, 11, 12, 13, 14, 15, //
        25, 28, 32, 36, 40, 45, 51, 57, //
        64, 72, 81, 91, 102, 115, 129, 145, //
        163, 183, 205, 230, 258, 290, 326, 366, //
        411, 461, 517, 581, 652, 732, 822, 922, //
        1035, 1162, 1304, 1464, 1644, 1845, 2071, 2325, //
        2609, 2929, 3288, 3691, 4143, 4650, 5219, 5859, //
        6576, 7382, 8286, 9300, 10439, 11718, 13153, 14764, //
        16572, 18600, 20078, 23436, 26306, 29528, 29529, 29530, //
        29531, 29532, 29533, 29534, 29535,
    ],
);

/// Amplitude envelope times, in milliseconds.
pub static AMP_TIME_SCALE: ScaleTable = ScaleTable::new(
    "amp_time",
    &[
        0, 1, 2, 3, 4, 5, 6, 7, //
        8, 9, 10, 11, 12, 13, 14, 15, //
        16, 17, 18, 19, 20, 21, 22, 23, //
        24, 25, 26, 27, 28, 29, 30, 31, //
        32, 33, 34, 35, 36, 37, 38, 39, //
        40, 45, 51, 57, 64, 72, 81, 91, //
        102, 115, 129, 145, 163, 183, 205, 230, //
        258, 290, 326, 366, 411, 461, 517, 581, //
        652, 732, 822, 922, 1035, 1162, 1304, 1464, //
        1644, 1845, 2071, 2325, 2609, 2929, 3288, 3691, //
        4143, 4650, 5219, 5859, 6576,
    ],
);

/// Frequency envelope values: unit steps near zero, coarser further out.
pub static FREQ_VALUE_SCALE: ScaleTable = ScaleTable::new(
    "freq_value",
    &[
        0, 1, 2, 3, 4, 5, 6, 7, //
        8, 9, 10, 11, 12, 13, 14, 15, //
        16, 18, 20, 22, 24, 26, 28, 30, //
        32, 34, 36, 38, 40, 42, 44, 46, //
        48, 56, 64, 72, 80, 88, 96, 104, //
        112, 120, 128, 136, 144, 152, 160, 168, //
        176, 208, 240, 272, 304, 336, 368, 400, //
        432, 464, 496, 528, 560, 592, 624, 656,
    ],
);

/// Smallest index whose value is `>= value`, or `table.len()` if none is.
///
/// The `table.len()` result is not a valid code; see
/// [`ScaleTable::ceiling_code`] for the saturating form.
pub fn ceiling_search(table: &[i32], value: i32) -> usize {
    table
        .iter()
        .position(|v| *v >= value)
        .unwrap_or(table.len())
}

/// Index minimizing `|table[i] - value|`; the earlier index wins ties.
pub fn nearest_search(table: &[i32], value: i32) -> usize {
    table
        .iter()
        .enumerate()
        .min_by_key(|(_, v)| (**v as i64 - value as i64).abs())
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// An immutable code-to-display table.
#[derive(Debug)]
pub struct ScaleTable {
    name: &'static str,
    values: &'static [i32],
}

impl ScaleTable {
    pub const fn new(name: &'static str, values: &'static [i32]) -> Self {
        Self { name, values }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn as_slice(&self) -> &'static [i32] {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Highest valid code. Entries past index 255 are unreachable.
    pub fn max_code(&self) -> u8 {
        u8::try_from(self.len().saturating_sub(1)).unwrap_or(u8::MAX)
    }

    /// Displayed value for a stored code.
    pub fn value(&self, code: u8) -> Option<i32> {
        self.values.get(code as usize).copied()
    }

    pub fn ceiling_search(&self, value: i32) -> usize {
        ceiling_search(self.values, value)
    }

    pub fn nearest_search(&self, value: i32) -> usize {
        nearest_search(self.values, value)
    }

    /// Ceiling code, or `None` when `value` exceeds the table.
    pub fn checked_ceiling_code(&self, value: i32) -> Option<u8> {
        let code = self.ceiling_search(value);
        if code < self.len() {
            u8::try_from(code).ok()
        } else {
            None
        }
    }

    /// Ceiling code, saturating at [`max_code`](Self::max_code).
    pub fn ceiling_code(&self, value: i32) -> u8 {
        self.checked_ceiling_code(value).unwrap_or_else(|| {
            tracing::debug!(
                "{} value {} exceeds table maximum, saturating at code {}",
                self.name,
                value,
                self.max_code()
            );
            self.max_code()
        })
    }

    /// Nearest code, saturating at [`max_code`](Self::max_code).
    pub fn nearest_code(&self, value: i32) -> u8 {
        u8::try_from(self.nearest_search(value)).unwrap_or(u8::MAX)
    }
}

/// Frequency envelope time as displayed to its stored code.
pub fn unscale_freq_time_value(time: i32) -> u8 {
    FREQ_TIME_SCALE.ceiling_code(time)
}

pub fn checked_unscale_freq_time_value(time: i32) -> Option<u8> {
    FREQ_TIME_SCALE.checked_ceiling_code(time)
}

/// Amplitude envelope time as displayed to its stored code.
pub fn unscale_amp_time_value(time: i32) -> u8 {
    AMP_TIME_SCALE.ceiling_code(time)
}

pub fn checked_unscale_amp_time_value(time: i32) -> Option<u8> {
    AMP_TIME_SCALE.checked_ceiling_code(time)
}
