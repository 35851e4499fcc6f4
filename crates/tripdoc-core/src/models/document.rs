//! Travel document data models.
//!
//! The JSON shape matches what the upload workflow stores: camelCase fields,
//! the document kind under `type`, and details without a type tag.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of travel document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Flight ticket, boarding pass or airline e-ticket.
    Flight,
    /// Hotel booking or accommodation confirmation.
    Hotel,
    /// Anything else.
    #[default]
    Other,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Hotel => "hotel",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flight-specific fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDetails {
    /// Operating airline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,

    /// Flight number, e.g. `TG315`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
}

impl FlightDetails {
    pub fn is_empty(&self) -> bool {
        self.airline.is_none() && self.flight_number.is_none()
    }
}

/// Hotel-specific fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetails {
    /// Hotel name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,

    /// Booking / confirmation reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_reference: Option<String>,
}

impl HotelDetails {
    pub fn is_empty(&self) -> bool {
        self.hotel_name.is_none() && self.booking_reference.is_none()
    }
}

/// Type-specific details attached to an extraction result.
///
/// Serialized as the bare details object, `{}` when there are none. Only
/// present when at least one field was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DocumentDetails {
    Flight(FlightDetails),
    Hotel(HotelDetails),
    #[default]
    None,
}

impl Serialize for DocumentDetails {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        match self {
            Self::Flight(details) => details.serialize(serializer),
            Self::Hotel(details) => details.serialize(serializer),
            Self::None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

impl<'de> Deserialize<'de> for DocumentDetails {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RawDetails {
            airline: Option<String>,
            flight_number: Option<String>,
            hotel_name: Option<String>,
            booking_reference: Option<String>,
        }

        let raw = RawDetails::deserialize(deserializer)?;
        let flight = FlightDetails {
            airline: raw.airline,
            flight_number: raw.flight_number,
        };
        let hotel = HotelDetails {
            hotel_name: raw.hotel_name,
            booking_reference: raw.booking_reference,
        };

        Ok(DocumentDetails::from_parts(flight, hotel))
    }
}

impl DocumentDetails {
    fn from_parts(flight: FlightDetails, hotel: HotelDetails) -> Self {
        if !hotel.is_empty() {
            Self::Hotel(hotel)
        } else if !flight.is_empty() {
            Self::Flight(flight)
        } else {
            Self::None
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn flight(&self) -> Option<&FlightDetails> {
        match self {
            Self::Flight(details) => Some(details),
            _ => None,
        }
    }

    pub fn hotel(&self) -> Option<&HotelDetails> {
        match self {
            Self::Hotel(details) => Some(details),
            _ => None,
        }
    }
}

/// Structured information extracted from one travel document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Document classification.
    #[serde(rename = "type")]
    pub kind: DocumentKind,

    /// Display title, e.g. "Thai Airways to Bangkok".
    pub title: String,

    /// Destination from the gazetteer, or "Unknown".
    pub destination: String,

    /// Earliest date found, or today.
    pub start_date: NaiveDate,

    /// Second earliest date found, or start date plus the default trip length.
    pub end_date: NaiveDate,

    /// Flight or hotel fields, when the kind has any.
    pub details: DocumentDetails,
}

/// Outcome of a parse, as handed to the upload workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ParseResultWire", try_from = "ParseResultWire")]
pub enum ParseResult {
    Success(ExtractionResult),
    Failure(String),
}

impl ParseResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn data(&self) -> Option<&ExtractionResult> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<ExtractionResult, String> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(error) => Err(error),
        }
    }
}

/// Wire form: `{success, data?, error?}`.
#[derive(Serialize, Deserialize)]
struct ParseResultWire {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<ExtractionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<ParseResult> for ParseResultWire {
    fn from(result: ParseResult) -> Self {
        match result {
            ParseResult::Success(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            ParseResult::Failure(error) => Self {
                success: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<ParseResultWire> for ParseResult {
    type Error = String;

    fn try_from(wire: ParseResultWire) -> Result<Self, Self::Error> {
        match (wire.success, wire.data, wire.error) {
            (true, Some(data), _) => Ok(Self::Success(data)),
            (true, None, _) => Err("successful parse result without data".to_string()),
            (false, _, error) => Ok(Self::Failure(error.unwrap_or_default())),
        }
    }
}
