// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test Data Composer
//!
//! Rewrites decoded record fields into a `V2` test record. Overrides replace
//! the bytes of their field in place; delimiters, the photo and every other
//! field are copied unchanged. Values are not validated.

use std::ops::Range;

use tracing::debug;

use crate::record::{field_spans, IdField, RecordError, LAST_FOUR_LEN, VERSION_TAG};

/// Substitute values spliced into a test record.
///
/// Unset values leave their field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestOverrides {
    pub date_of_birth: Option<String>,
    pub pincode: Option<String>,
    pub gender: Option<String>,
    pub state: Option<String>,
    /// Replaces the timestamp that follows the last four digits of the
    /// reference id.
    pub reference_timestamp: Option<String>,
}

impl TestOverrides {
    /// Overrides for the four demographic fields.
    pub fn new(
        date_of_birth: impl Into<String>,
        pincode: impl Into<String>,
        gender: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            date_of_birth: Some(date_of_birth.into()),
            pincode: Some(pincode.into()),
            gender: Some(gender.into()),
            state: Some(state.into()),
            reference_timestamp: None,
        }
    }

    pub fn with_date_of_birth(mut self, value: impl Into<String>) -> Self {
        self.date_of_birth = Some(value.into());
        self
    }

    pub fn with_pincode(mut self, value: impl Into<String>) -> Self {
        self.pincode = Some(value.into());
        self
    }

    pub fn with_gender(mut self, value: impl Into<String>) -> Self {
        self.gender = Some(value.into());
        self
    }

    pub fn with_state(mut self, value: impl Into<String>) -> Self {
        self.state = Some(value.into());
        self
    }

    pub fn with_reference_timestamp(mut self, value: impl Into<String>) -> Self {
        self.reference_timestamp = Some(value.into());
        self
    }

    fn fields(&self) -> [(IdField, Option<&str>); 4] {
        [
            (IdField::DateOfBirth, self.date_of_birth.as_deref()),
            (IdField::Gender, self.gender.as_deref()),
            (IdField::Pincode, self.pincode.as_deref()),
            (IdField::State, self.state.as_deref()),
        ]
    }
}

/// Builds a `V2` test record from signed data whose signature was stripped.
///
/// The output is the version tag followed by `signed_data` with each
/// override replacing its field. Input that already starts with the tag is
/// not tagged twice.
///
/// # Errors
/// `RecordError::MissingField` if the record ends before the state field.
pub fn compose_v2_test_data(
    signed_data: &[u8],
    overrides: &TestOverrides,
) -> Result<Vec<u8>, RecordError> {
    let spans = field_spans(signed_data);
    spans.span(IdField::State)?;

    let mut replacements: Vec<(Range<usize>, &[u8])> = Vec::new();

    if let Some(timestamp) = overrides.reference_timestamp.as_deref() {
        let reference = spans.span(IdField::ReferenceId)?;
        let start = (reference.start + LAST_FOUR_LEN).min(reference.end);
        replacements.push((start..reference.end, timestamp.as_bytes()));
    }

    for (field, value) in overrides.fields() {
        if let Some(value) = value {
            replacements.push((spans.span(field)?, value.as_bytes()));
        }
    }

    replacements.sort_by_key(|(range, _)| range.start);

    let mut composed = Vec::with_capacity(VERSION_TAG.len() + signed_data.len());
    composed.extend_from_slice(VERSION_TAG);

    let mut cursor = spans.body_start();
    for (range, value) in &replacements {
        composed.extend_from_slice(&signed_data[cursor..range.start]);
        composed.extend_from_slice(value);
        cursor = range.end;
    }
    composed.extend_from_slice(&signed_data[cursor..]);

    debug!(
        input_len = signed_data.len(),
        output_len = composed.len(),
        replaced = replacements.len(),
        "composed V2 test record"
    );

    Ok(composed)
}
