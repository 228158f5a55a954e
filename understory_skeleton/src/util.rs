// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small numeric helpers that stay `no_std` without pulling in `libm`.

/// Rounds half away from zero and converts to `i64`, saturating.
pub(crate) fn round_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let shifted = if value.is_sign_negative() {
        value - 0.5
    } else {
        value + 0.5
    };
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Float to int casts saturate; callers clamp the result to small counts"
    )]
    let rounded = shifted as i64;
    rounded
}

/// Ceiling of a non-negative value as `i64`, saturating.
pub(crate) fn ceil_to_i64(value: f64) -> i64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Float to int casts saturate; callers clamp the result to small counts"
    )]
    let truncated = value as i64;
    if (truncated as f64) < value {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}
