//! Booking inquiry form state and validation.
//!
//! The inquiry is never sent anywhere; a valid form only produces an
//! on-page acknowledgement.

use chrono::NaiveDate;

/// Date format of `<input type="date">` values.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Counter fields on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuestField {
    /// Adults, at least one.
    Adults,
    /// Children.
    Children,
    /// Rooms, at least one.
    Rooms,
    /// Extra beds.
    ExtraBeds,
}

impl GuestField {
    /// Fields in form order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Adults, Self::Children, Self::Rooms, Self::ExtraBeds]
    }

    /// Smallest accepted value.
    #[must_use]
    pub const fn min(self) -> u32 {
        match self {
            Self::Adults | Self::Rooms => 1,
            Self::Children | Self::ExtraBeds => 0,
        }
    }

    /// Translation key of the field label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Adults => "booking.adults",
            Self::Children => "booking.children",
            Self::Rooms => "booking.rooms",
            Self::ExtraBeds => "booking.extra_beds",
        }
    }
}

/// Problems that block acknowledging an inquiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InquiryIssue {
    /// No check-in date.
    MissingCheckIn,
    /// No check-out date.
    MissingCheckOut,
    /// A date did not parse as `YYYY-MM-DD`.
    InvalidDate,
    /// Check-out is on or before check-in.
    CheckOutNotAfterCheckIn,
    /// A counter is below its minimum.
    BelowMinimum(GuestField),
}

impl InquiryIssue {
    /// Translation key of the message.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::MissingCheckIn => "booking.issues.missing_check_in",
            Self::MissingCheckOut => "booking.issues.missing_check_out",
            Self::InvalidDate => "booking.issues.invalid_date",
            Self::CheckOutNotAfterCheckIn => "booking.issues.check_out_order",
            Self::BelowMinimum(GuestField::Adults) => "booking.issues.adults",
            Self::BelowMinimum(GuestField::Rooms) => "booking.issues.rooms",
            Self::BelowMinimum(_) => "booking.issues.count",
        }
    }
}

/// Stay preferences captured by the inquiry form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingInquiry {
    /// Raw check-in value (`YYYY-MM-DD`).
    pub check_in: String,
    /// Raw check-out value (`YYYY-MM-DD`).
    pub check_out: String,
    /// Adult guests.
    pub adults: u32,
    /// Child guests.
    pub children: u32,
    /// Rooms requested.
    pub rooms: u32,
    /// Extra beds requested.
    pub extra_beds: u32,
}

impl Default for BookingInquiry {
    fn default() -> Self {
        Self {
            check_in: String::new(),
            check_out: String::new(),
            adults: GuestField::Adults.min(),
            children: GuestField::Children.min(),
            rooms: GuestField::Rooms.min(),
            extra_beds: GuestField::ExtraBeds.min(),
        }
    }
}

impl BookingInquiry {
    /// Current value of a counter.
    #[must_use]
    pub const fn count(&self, field: GuestField) -> u32 {
        match field {
            GuestField::Adults => self.adults,
            GuestField::Children => self.children,
            GuestField::Rooms => self.rooms,
            GuestField::ExtraBeds => self.extra_beds,
        }
    }

    /// Set a counter, raising it to the field minimum.
    pub const fn set_count(&mut self, field: GuestField, value: u32) {
        let value = if value < field.min() { field.min() } else { value };
        match field {
            GuestField::Adults => self.adults = value,
            GuestField::Children => self.children = value,
            GuestField::Rooms => self.rooms = value,
            GuestField::ExtraBeds => self.extra_beds = value,
        }
    }

    /// Set a counter from raw input text; unparsable input is ignored.
    pub fn set_count_from_input(&mut self, field: GuestField, raw: &str) {
        if let Ok(value) = raw.trim().parse::<u32>() {
            self.set_count(field, value);
        }
    }

    /// Every issue blocking the inquiry, in form order.
    #[must_use]
    pub fn validate(&self) -> Vec<InquiryIssue> {
        let mut issues = Vec::new();
        let check_in = parse_date(&self.check_in, InquiryIssue::MissingCheckIn, &mut issues);
        let check_out = parse_date(&self.check_out, InquiryIssue::MissingCheckOut, &mut issues);
        if let (Some(start), Some(end)) = (check_in, check_out) {
            if end <= start {
                issues.push(InquiryIssue::CheckOutNotAfterCheckIn);
            }
        }
        for field in GuestField::all() {
            if self.count(field) < field.min() {
                issues.push(InquiryIssue::BelowMinimum(field));
            }
        }
        issues
    }

    /// Nights between the dates, when both parse and are ordered.
    #[must_use]
    pub fn nights(&self) -> Option<i64> {
        let start = NaiveDate::parse_from_str(self.check_in.trim(), DATE_FORMAT).ok()?;
        let end = NaiveDate::parse_from_str(self.check_out.trim(), DATE_FORMAT).ok()?;
        let nights = (end - start).num_days();
        (nights > 0).then_some(nights)
    }

    /// Total shown next to the form: the nightly price, regardless of the
    /// selected range.
    #[must_use]
    pub const fn displayed_total(&self, nightly_price: f64) -> f64 {
        nightly_price
    }
}

fn parse_date(
    raw: &str,
    missing: InquiryIssue,
    issues: &mut Vec<InquiryIssue>,
) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        issues.push(missing);
        return None;
    }
    let parsed = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok();
    if parsed.is_none() && !issues.contains(&InquiryIssue::InvalidDate) {
        issues.push(InquiryIssue::InvalidDate);
    }
    parsed
}
