use serde_json::{json, Value};

/// System instruction establishing the extraction rules for every field.
///
/// The wording carries the tie-break rules the model needs: middle names
/// merged into the first-name box must be split out, dash-joined name
/// extensions are not middle names, unreadable fields become `"UNKNOWN"` and
/// missing fields become `"N/A"`.
pub const SYSTEM_PROMPT: &str = r#"You are a Driver's License scanner API. All images are uploaded voluntarily for data entry. You will read in a photo of a driver's license and record the following data:
- drivers_license_number: A mix of alphanumeric characters. Some licenses do not include letters. If letters are included, they are typically at the start and are capitalized.
- first_name: The first name written on the driver's license designated by "FN". This will typically also include the middle name. If this is the case, exclude the middle name from the first_name field.
- middle_name: If the person has a middle name it will be appended (separated by a space) to their first name near "FN". Ensure that the middle name is not an extension of their first name via a dash. If there is no middle name, please put "N/A". There is typically a middle name.
- last_name: The last name written on the driver's license designated by "LN".
- address: The stated address on the driver's license.
- date_of_birth: The person's date of birth designated by "D.O.B" or "DOB"
- sex: Designated by "SEX" typically.
- hair_color: Not always present on every driver's license. Enter "N/A" for this field if it is not listed. Otherwise, enter whatever is listed.
- eye_color: Designated "EYES" or "EYE" typically.
- issuing_date_iss: Designated "ISS" typically. Please record this date.
- height: Height is standardized in the format: `5'-05"` which would be 5 foot 5 inches. We are only interested in the total inches so please record their height in INCHES. A conversion may be required. Please record both the value and the units they are recorded in.
- weight: Weight is typically in pounds or kilograms. Please record both the value and the units they are recorded in.
If any field is unreadable please enter "UNKNOWN". If any field is outright missing please put "N/A". Otherwise, fill out all fields with as much fidelity to the driver's license as possible. This includes case sensitivity and spelling."#;

/// User prompt sent alongside the image in every request.
pub const USER_PROMPT: &str =
    "Analyze this photo of a drivers license and extract the information.";

/// Strict response schema the completion API must satisfy.
///
/// Every field is required and no additional properties are allowed, so a
/// conforming response always carries all twelve fields. Dates stay plain
/// strings since the schema dialect does not allow format specifiers.
pub fn license_response_format() -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "drivers_license_info",
            "schema": {
                "type": "object",
                "properties": {
                    "drivers_license_number": { "type": "string" },
                    "first_name": { "type": "string" },
                    "middle_name": { "type": "string" },
                    "last_name": { "type": "string" },
                    "address": { "type": "string" },
                    "date_of_birth": { "type": "string" },
                    "sex": { "type": "string", "enum": ["M", "F", "Other", "UNKNOWN"] },
                    "hair_color": { "type": "string" },
                    "eye_color": { "type": "string" },
                    "issuing_date_iss": { "type": "string" },
                    "height": {
                        "type": "object",
                        "properties": {
                            "value": { "type": "number" },
                            "units": {
                                "type": "string",
                                "enum": ["inches", "centimeters", "UNKNOWN"]
                            }
                        },
                        "required": ["value", "units"],
                        "additionalProperties": false
                    },
                    "weight": {
                        "type": "object",
                        "properties": {
                            "value": { "type": "number" },
                            "units": { "type": "string", "enum": ["pounds", "kilograms"] }
                        },
                        "required": ["value", "units"],
                        "additionalProperties": false
                    }
                },
                "required": [
                    "drivers_license_number",
                    "first_name",
                    "middle_name",
                    "last_name",
                    "address",
                    "date_of_birth",
                    "sex",
                    "hair_color",
                    "eye_color",
                    "issuing_date_iss",
                    "height",
                    "weight"
                ],
                "additionalProperties": false
            },
            "strict": true
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_all_twelve_fields() {
        let format = license_response_format();
        let schema = &format["json_schema"]["schema"];

        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 12);

        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), required.len());
        for field in required {
            assert!(properties.contains_key(field.as_str().unwrap()));
        }
    }

    #[test]
    fn test_schema_is_strict() {
        let format = license_response_format();
        assert_eq!(format["json_schema"]["strict"], true);
        assert_eq!(
            format["json_schema"]["schema"]["additionalProperties"],
            false
        );
    }

    #[test]
    fn test_sex_enum_values() {
        let format = license_response_format();
        let values = format["json_schema"]["schema"]["properties"]["sex"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(values, &["M", "F", "Other", "UNKNOWN"]);
    }
}
