// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for record and override generation.

use aadhaar_qr::TestOverrides;
use proptest::prelude::*;

/// Raw field bytes: anything except the delimiter.
pub fn field_bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..0xFF, 0..24)
}

/// The sixteen text fields of a record.
pub fn record_fields_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(field_bytes_strategy(), 16)
}

/// Photo bytes, delimiters included.
pub fn photo_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

/// Override value, possibly empty.
pub fn override_value_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[0-9A-Za-z -]{0,12}")
}

/// Any combination of the four demographic overrides.
pub fn overrides_strategy() -> impl Strategy<Value = TestOverrides> {
    (
        override_value_strategy(),
        override_value_strategy(),
        override_value_strategy(),
        override_value_strategy(),
    )
        .prop_map(|(date_of_birth, pincode, gender, state)| TestOverrides {
            date_of_birth,
            pincode,
            gender,
            state,
            reference_timestamp: None,
        })
}
