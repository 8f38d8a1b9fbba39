use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Room category of the monitored dataset (number of bedrooms)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    Two,
    Four,
    Six,
}

impl RoomType {
    /// Parse from the selector value
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "2" => Some(Self::Two),
            "4" => Some(Self::Four),
            "6" => Some(Self::Six),
            _ => None,
        }
    }

    /// Wire and display value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Four => "4",
            Self::Six => "6",
        }
    }
}

/// Calendar month by name. The dataset has no year axis, so February is
/// fixed at 29 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Parse from the selector value
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_str() == name)
    }

    /// Wire and display value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Number of selectable days in this month
    pub fn days(&self) -> u8 {
        match self {
            Self::January
            | Self::March
            | Self::May
            | Self::July
            | Self::August
            | Self::October
            | Self::December => 31,
            Self::April | Self::June | Self::September | Self::November => 30,
            Self::February => 29,
        }
    }
}

/// Day range for a month selector value. Unrecognized names fall back to
/// the widest range so the selector never ends up empty.
pub fn days_in_month(name: &str) -> u8 {
    Month::from_name(name).map(|m| m.days()).unwrap_or(31)
}

/// Analysis depth requested from the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisMode {
    #[default]
    Basic,
    Enhanced,
}

impl AnalysisMode {
    /// Parse from the selector value
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "basic" => Some(Self::Basic),
            "enhanced" => Some(Self::Enhanced),
            _ => None,
        }
    }

    /// Wire and display value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Enhanced => "enhanced",
        }
    }
}

/// One source of selector values: either the values captured at submit time
/// or the live control values tracked while the operator edits the form.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub room_type: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub mode: Option<String>,
}

/// Everything read from the form when the operator submits
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
    pub submitted: FormFields,
    pub live: FormFields,
    pub show_anomalies: bool,
    pub show_trends: bool,
}

/// The form is expected to always provide the required selectors; this error
/// exists as a guard, not as a primary validation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid value for {0}")]
    InvalidField(&'static str),
}

/// A validated analysis request, ready to send to the service
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub room_type: RoomType,
    pub month: Month,
    pub day: u8,
    pub mode: AnalysisMode,
    pub show_anomalies: bool,
    pub show_trends: bool,
}

impl AnalysisRequest {
    /// Build a request from the form. Each selector resolves from the
    /// submitted value first, then the live control value; the mode falls
    /// back to `basic`. Checkbox flags are taken from checkbox state only.
    pub fn from_form(form: &FormSnapshot) -> Result<Self, ValidationError> {
        let room_type = resolve(&form.submitted.room_type, &form.live.room_type)
            .ok_or(ValidationError::MissingField("room type"))?;
        let room_type =
            RoomType::from_value(&room_type).ok_or(ValidationError::InvalidField("room type"))?;

        let month = resolve(&form.submitted.month, &form.live.month)
            .ok_or(ValidationError::MissingField("month"))?;
        let month = Month::from_name(&month).ok_or(ValidationError::InvalidField("month"))?;

        let day = resolve(&form.submitted.day, &form.live.day)
            .ok_or(ValidationError::MissingField("day"))?;
        let day: u8 = day
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidField("day"))?;
        if day == 0 || day > month.days() {
            return Err(ValidationError::InvalidField("day"));
        }

        let mode = resolve(&form.submitted.mode, &form.live.mode)
            .and_then(|m| AnalysisMode::from_value(&m))
            .unwrap_or_default();

        Ok(Self {
            room_type,
            month,
            day,
            mode,
            show_anomalies: form.show_anomalies,
            show_trends: form.show_trends,
        })
    }
}

fn resolve(submitted: &Option<String>, live: &Option<String>) -> Option<String> {
    submitted
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| live.as_deref().filter(|s| !s.is_empty()))
        .map(str::to_owned)
}

impl Serialize for AnalysisRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut body = serializer.serialize_struct("AnalysisRequest", 6)?;
        body.serialize_field("bedType", self.room_type.as_str())?;
        body.serialize_field("month", self.month.as_str())?;
        body.serialize_field("day", &self.day)?;
        body.serialize_field("analysisMode", self.mode.as_str())?;
        body.serialize_field("showAnomalies", &self.show_anomalies)?;
        body.serialize_field("showTrends", &self.show_trends)?;
        body.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(fields: FormFields) -> FormSnapshot {
        FormSnapshot {
            submitted: fields,
            live: FormFields::default(),
            show_anomalies: true,
            show_trends: false,
        }
    }

    #[test]
    fn day_table_matches_calendar() {
        let expected = [
            ("January", 31),
            ("February", 29),
            ("March", 31),
            ("April", 30),
            ("May", 31),
            ("June", 30),
            ("July", 31),
            ("August", 31),
            ("September", 30),
            ("October", 31),
            ("November", 30),
            ("December", 31),
        ];
        for (name, days) in expected {
            assert_eq!(days_in_month(name), days, "{name}");
        }
    }

    #[test]
    fn unknown_month_defaults_to_widest_range() {
        assert_eq!(days_in_month("Smarch"), 31);
        assert_eq!(days_in_month(""), 31);
    }

    #[test]
    fn builds_from_submitted_values() {
        let form = snapshot(FormFields {
            room_type: Some("2".into()),
            month: Some("February".into()),
            day: Some("29".into()),
            mode: Some("enhanced".into()),
        });
        let request = AnalysisRequest::from_form(&form).unwrap();
        assert_eq!(request.room_type, RoomType::Two);
        assert_eq!(request.month, Month::February);
        assert_eq!(request.day, 29);
        assert_eq!(request.mode, AnalysisMode::Enhanced);
        assert!(request.show_anomalies);
        assert!(!request.show_trends);
    }

    #[test]
    fn falls_back_to_live_control_values() {
        let form = FormSnapshot {
            submitted: FormFields::default(),
            live: FormFields {
                room_type: Some("6".into()),
                month: Some("April".into()),
                day: Some("30".into()),
                mode: None,
            },
            show_anomalies: false,
            show_trends: true,
        };
        let request = AnalysisRequest::from_form(&form).unwrap();
        assert_eq!(request.room_type, RoomType::Six);
        assert_eq!(request.month, Month::April);
        assert_eq!(request.day, 30);
        assert_eq!(request.mode, AnalysisMode::Basic);
    }

    #[test]
    fn submitted_values_win_over_live_values() {
        let form = FormSnapshot {
            submitted: FormFields {
                room_type: Some("4".into()),
                month: Some("June".into()),
                day: Some("12".into()),
                mode: Some("basic".into()),
            },
            live: FormFields {
                room_type: Some("2".into()),
                month: Some("January".into()),
                day: Some("1".into()),
                mode: Some("enhanced".into()),
            },
            show_anomalies: true,
            show_trends: true,
        };
        let request = AnalysisRequest::from_form(&form).unwrap();
        assert_eq!(request.room_type, RoomType::Four);
        assert_eq!(request.month, Month::June);
        assert_eq!(request.day, 12);
        assert_eq!(request.mode, AnalysisMode::Basic);
    }

    #[test]
    fn mode_defaults_to_basic_when_absent() {
        let form = snapshot(FormFields {
            room_type: Some("4".into()),
            month: Some("May".into()),
            day: Some("3".into()),
            mode: None,
        });
        let request = AnalysisRequest::from_form(&form).unwrap();
        assert_eq!(request.mode, AnalysisMode::Basic);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let form = snapshot(FormFields {
            room_type: Some("4".into()),
            month: None,
            day: Some("3".into()),
            mode: None,
        });
        assert_eq!(
            AnalysisRequest::from_form(&form),
            Err(ValidationError::MissingField("month"))
        );
    }

    #[test]
    fn day_outside_month_range_is_rejected() {
        let form = snapshot(FormFields {
            room_type: Some("2".into()),
            month: Some("February".into()),
            day: Some("30".into()),
            mode: None,
        });
        assert_eq!(
            AnalysisRequest::from_form(&form),
            Err(ValidationError::InvalidField("day"))
        );
    }

    #[test]
    fn serializes_to_wire_body() {
        let form = snapshot(FormFields {
            room_type: Some("2".into()),
            month: Some("February".into()),
            day: Some("29".into()),
            mode: None,
        });
        let request = AnalysisRequest::from_form(&form).unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "bedType": "2",
                "month": "February",
                "day": 29,
                "analysisMode": "basic",
                "showAnomalies": true,
                "showTrends": false,
            })
        );
    }
}
