// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field layout of the signed record.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::RecordError;

/// Field separator.
pub const DELIMITER: u8 = 0xFF;

/// Version marker of `V2` records: ASCII "V2" followed by the delimiter.
pub const VERSION_TAG: &[u8; 3] = b"V2\xFF";

/// Number of delimited text fields before the photo.
const TEXT_FIELD_COUNT: usize = 16;

/// Length of the identity-number suffix at the start of the reference id.
pub(crate) const LAST_FOUR_LEN: usize = 4;

/// Position of each delimited field in the signed data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdField {
    EmailMobileIndicator,
    ReferenceId,
    Name,
    DateOfBirth,
    Gender,
    CareOf,
    District,
    Landmark,
    House,
    Location,
    Pincode,
    PostOffice,
    State,
    Street,
    SubDistrict,
    Vtc,
}

impl IdField {
    /// All text fields in record order.
    pub const ALL: [IdField; TEXT_FIELD_COUNT] = [
        IdField::EmailMobileIndicator,
        IdField::ReferenceId,
        IdField::Name,
        IdField::DateOfBirth,
        IdField::Gender,
        IdField::CareOf,
        IdField::District,
        IdField::Landmark,
        IdField::House,
        IdField::Location,
        IdField::Pincode,
        IdField::PostOffice,
        IdField::State,
        IdField::Street,
        IdField::SubDistrict,
        IdField::Vtc,
    ];

    /// Zero-based position of the field.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Byte ranges of the delimited fields.
///
/// Ranges are absolute offsets into the signed data and exclude the
/// delimiters themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpans {
    body_start: usize,
    spans: Vec<Range<usize>>,
    photo_start: Option<usize>,
}

impl FieldSpans {
    /// Offset of the first field (after the version tag, if any).
    pub fn body_start(&self) -> usize {
        self.body_start
    }

    /// Byte range of a field, if the record reaches it.
    pub fn span(&self, field: IdField) -> Result<Range<usize>, RecordError> {
        self.spans
            .get(field.index())
            .cloned()
            .ok_or(RecordError::MissingField(field))
    }

    /// Offset of the photo bytes, if all text fields are present.
    pub fn photo_start(&self) -> Option<usize> {
        self.photo_start
    }

    /// Number of complete fields found.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns true if no complete field was found.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Locates the delimited fields of signed record data.
///
/// Scanning stops after the last text field so that `0xFF` bytes inside the
/// photo are never taken for delimiters.
pub fn field_spans(signed_data: &[u8]) -> FieldSpans {
    let body_start = if signed_data.starts_with(VERSION_TAG) {
        VERSION_TAG.len()
    } else {
        0
    };

    let mut spans = Vec::with_capacity(TEXT_FIELD_COUNT);
    let mut photo_start = None;
    let mut start = body_start;

    for (offset, byte) in signed_data.iter().enumerate().skip(body_start) {
        if *byte != DELIMITER {
            continue;
        }
        spans.push(start..offset);
        start = offset + 1;
        if spans.len() == TEXT_FIELD_COUNT {
            photo_start = Some(start);
            break;
        }
    }

    FieldSpans {
        body_start,
        spans,
        photo_start,
    }
}

/// Identity fields exposed next to the QR data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityFields {
    /// Last four digits of the identity number followed by the timestamp.
    pub reference_id: String,
    pub last_four_digits: String,
    pub timestamp: String,
    pub name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub pincode: String,
    pub state: String,
}

impl IdentityFields {
    /// Extracts the text fields from signed record data.
    pub fn extract(signed_data: &[u8]) -> Result<Self, RecordError> {
        let spans = field_spans(signed_data);
        let text = |field: IdField| -> Result<String, RecordError> {
            let range = spans.span(field)?;
            Ok(String::from_utf8_lossy(&signed_data[range]).into_owned())
        };

        let reference_id = text(IdField::ReferenceId)?;
        let split = reference_id
            .char_indices()
            .nth(LAST_FOUR_LEN)
            .map(|(i, _)| i)
            .unwrap_or(reference_id.len());
        let (last_four_digits, timestamp) = reference_id.split_at(split);

        Ok(Self {
            last_four_digits: last_four_digits.to_string(),
            timestamp: timestamp.to_string(),
            name: text(IdField::Name)?,
            date_of_birth: text(IdField::DateOfBirth)?,
            gender: text(IdField::Gender)?,
            pincode: text(IdField::Pincode)?,
            state: text(IdField::State)?,
            reference_id,
        })
    }
}
