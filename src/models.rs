use serde::{Deserialize, Serialize};

// ============ License Record Models ============

/// Sex marker as printed on the license.
///
/// `UNKNOWN` is returned when the field is unreadable on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
    Other,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

/// Units a height can be recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnits {
    Inches,
    Centimeters,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

/// Units a weight can be recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnits {
    Pounds,
    Kilograms,
}

/// Height as recorded on the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Height {
    /// Numeric value in the recorded units.
    pub value: f64,
    /// Units the value was recorded in.
    pub units: HeightUnits,
}

/// Weight as recorded on the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    /// Numeric value in the recorded units.
    pub value: f64,
    /// Units the value was recorded in.
    pub units: WeightUnits,
}

/// The structured fields extracted from one driver's license image.
///
/// Every field is always present in a valid response: the upstream schema
/// marks all of them required with no additional properties, so missing data
/// arrives as the sentinel strings `"N/A"` or `"UNKNOWN"`, never as an
/// absent key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseRecord {
    /// License number, a mix of alphanumeric characters.
    pub drivers_license_number: String,
    /// First name, with any middle name already split out.
    pub first_name: String,
    /// Middle name, or `"N/A"` when the person has none.
    pub middle_name: String,
    /// Last name.
    pub last_name: String,
    /// Address as stated on the license.
    pub address: String,
    /// Date of birth, free-text as printed.
    pub date_of_birth: String,
    /// Sex marker.
    pub sex: Sex,
    /// Hair color, `"N/A"` when not present on the document.
    pub hair_color: String,
    /// Eye color.
    pub eye_color: String,
    /// Issuing date, free-text as printed.
    pub issuing_date_iss: String,
    /// Height, with the units it was recorded in.
    pub height: Height,
    /// Weight, with the units it was recorded in.
    pub weight: Weight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(Sex::Unknown).unwrap(), "UNKNOWN");
        assert_eq!(serde_json::to_value(Sex::Other).unwrap(), "Other");
        assert_eq!(serde_json::to_value(HeightUnits::Inches).unwrap(), "inches");
        assert_eq!(
            serde_json::to_value(HeightUnits::Unknown).unwrap(),
            "UNKNOWN"
        );
        assert_eq!(
            serde_json::to_value(WeightUnits::Kilograms).unwrap(),
            "kilograms"
        );
    }

    #[test]
    fn test_record_requires_all_fields() {
        // A payload missing `weight` must fail to parse, never yield a partial record
        let incomplete = serde_json::json!({
            "drivers_license_number": "A1234567",
            "first_name": "Jane",
            "middle_name": "N/A",
            "last_name": "Doe",
            "address": "1 Main St",
            "date_of_birth": "01/01/1990",
            "sex": "F",
            "hair_color": "BRN",
            "eye_color": "BLU",
            "issuing_date_iss": "01/01/2020",
            "height": { "value": 65.0, "units": "inches" }
        });

        let result: Result<LicenseRecord, _> = serde_json::from_value(incomplete);
        assert!(result.is_err());
    }
}
