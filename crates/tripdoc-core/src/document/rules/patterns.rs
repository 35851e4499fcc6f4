//! Common regex patterns for travel document extraction.

use lazy_static::lazy_static;
use regex::Regex;

// Digits, letters and word boundaries are ASCII-only throughout; the
// crate's defaults would also accept e.g. Arabic-Indic digits.
lazy_static! {
    // Numeric dates, day first: 25/12/2024, 2.1.25, 25-12-2024
    pub static ref DATE_DMY: Regex = Regex::new(
        r"(?-u:\b)([0-9]{1,2})[/\-.]([0-9]{1,2})[/\-.]([0-9]{2,4})(?-u:\b)"
    ).unwrap();

    // English month names: "Dec 25, 2024", "January 3rd 2025"
    pub static ref DATE_MONTH_NAME: Regex = Regex::new(
        r"(?i-u)\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* ([0-9]{1,2})(?:st|nd|rd|th)?,? ([0-9]{4})\b"
    ).unwrap();

    // Numeric dates, year first: 2024-12-25, 2024/1/5
    pub static ref DATE_YMD: Regex = Regex::new(
        r"(?-u:\b)([0-9]{4})[/\-.]([0-9]{1,2})[/\-.]([0-9]{1,2})(?-u:\b)"
    ).unwrap();

    // Carrier code plus number: TG315, tg 315, JAL 6
    pub static ref FLIGHT_NUMBER: Regex = Regex::new(
        r"(?-u:\b)([A-Za-z]{2,3})\s*([0-9]{1,4})(?-u:\b)"
    ).unwrap();

    // Labeled booking reference
    pub static ref BOOKING_REFERENCE: Regex = Regex::new(
        r"(?i)(?-u:\b(?:confirmation|booking|reservation|ref|reference|number):?)\s*(?-u:([a-z0-9]{5,10})\b)"
    ).unwrap();
}
