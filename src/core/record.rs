//! The intake record: the value set the form produces when collected.
//!
//! Only the fields belonging to the selected pattern are populated; the
//! fields of the other patterns stay empty, mirroring which field group is
//! visible on screen.

use serde::{Deserialize, Serialize};

use crate::core::{field_group_for, FieldGroup};

/// Fixed category choices offered by the category picker.
pub const CATEGORIES: [&str; 3] = ["1on1", "グルコン", "講座"];

/// Everything the form knows about one recording, ready to serialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub title: String,
    pub thumbnail_text: String,
    pub category: String,
    /// Minute-precision local time, `YYYY-MM-DDTHH:MM`.
    pub start_time: String,
    pub pattern: String,
    #[serde(default)]
    pub lecturer_name: String,
    #[serde(default)]
    pub lecturer_image1: String,
    #[serde(default)]
    pub lecturer_image2: String,
    #[serde(default)]
    pub student_name: String,
}

/// Raw values read from the three field groups' widgets, before the
/// pattern-dependent mapping is applied.
#[derive(Debug, Clone, Default)]
pub struct GroupInputs {
    pub lecturer_name_p1: String,
    pub lecturer_image1: String,
    pub lecturer_image2: String,
    pub lecturer_name_p2: String,
    pub lecturer_image_single: String,
    pub lecturer_name_p3: String,
    pub student_name: String,
}

impl IntakeRecord {
    /// Assemble a record from the common fields and the group inputs of the
    /// selected pattern. Free-text fields are trimmed; picker values are
    /// carried verbatim. An empty or unrecognized pattern leaves all
    /// group-specific fields empty.
    pub fn assemble(
        title: &str,
        thumbnail_text: &str,
        category: &str,
        start_time: &str,
        pattern: &str,
        groups: &GroupInputs,
    ) -> Self {
        let mut record = Self {
            title: title.trim().to_string(),
            thumbnail_text: thumbnail_text.trim().to_string(),
            category: category.to_string(),
            start_time: start_time.to_string(),
            pattern: pattern.to_string(),
            ..Self::default()
        };

        match field_group_for(pattern) {
            Some(FieldGroup::Pattern1) => {
                record.lecturer_name = groups.lecturer_name_p1.trim().to_string();
                record.lecturer_image1 = groups.lecturer_image1.clone();
                record.lecturer_image2 = groups.lecturer_image2.clone();
            }
            Some(FieldGroup::Pattern2) => {
                record.lecturer_name = groups.lecturer_name_p2.trim().to_string();
                record.lecturer_image1 = groups.lecturer_image_single.clone();
            }
            Some(FieldGroup::Pattern3) => {
                record.lecturer_name = groups.lecturer_name_p3.trim().to_string();
                record.student_name = groups.student_name.trim().to_string();
            }
            None => {}
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PATTERN_1, PATTERN_2, PATTERN_3};

    fn inputs() -> GroupInputs {
        GroupInputs {
            lecturer_name_p1: "Sato".to_string(),
            lecturer_image1: "01_Sato_Suzuki_solo.png".to_string(),
            lecturer_image2: "02_Tanaka_x_duo.png".to_string(),
            lecturer_name_p2: "Suzuki".to_string(),
            lecturer_image_single: "03_Suzuki_x_solo.png".to_string(),
            lecturer_name_p3: "Tanaka".to_string(),
            student_name: "Yamada".to_string(),
        }
    }

    #[test]
    fn test_pattern1_carries_two_images() {
        let record =
            IntakeRecord::assemble("t", "tt", "講座", "2024-03-01T10:07", PATTERN_1, &inputs());

        assert_eq!(record.lecturer_name, "Sato");
        assert_eq!(record.lecturer_image1, "01_Sato_Suzuki_solo.png");
        assert_eq!(record.lecturer_image2, "02_Tanaka_x_duo.png");
        assert_eq!(record.student_name, "");
    }

    #[test]
    fn test_pattern2_carries_a_single_image() {
        let record =
            IntakeRecord::assemble("t", "tt", "1on1", "2024-03-01T10:07", PATTERN_2, &inputs());

        assert_eq!(record.lecturer_name, "Suzuki");
        assert_eq!(record.lecturer_image1, "03_Suzuki_x_solo.png");
        assert_eq!(record.lecturer_image2, "");
        assert_eq!(record.student_name, "");
    }

    #[test]
    fn test_pattern3_carries_the_student_name() {
        let record =
            IntakeRecord::assemble("t", "tt", "1on1", "2024-03-01T10:07", PATTERN_3, &inputs());

        assert_eq!(record.lecturer_name, "Tanaka");
        assert_eq!(record.student_name, "Yamada");
        assert_eq!(record.lecturer_image1, "");
        assert_eq!(record.lecturer_image2, "");
    }

    #[test]
    fn test_unrecognized_pattern_leaves_group_fields_empty() {
        let record = IntakeRecord::assemble("t", "tt", "1on1", "", "", &inputs());

        assert_eq!(record.lecturer_name, "");
        assert_eq!(record.lecturer_image1, "");
        assert_eq!(record.student_name, "");
    }

    #[test]
    fn test_free_text_is_trimmed() {
        let record = IntakeRecord::assemble(
            "  title  ",
            " text ",
            "講座",
            "2024-03-01T10:07",
            PATTERN_3,
            &GroupInputs {
                lecturer_name_p3: " Tanaka ".to_string(),
                ..GroupInputs::default()
            },
        );

        assert_eq!(record.title, "title");
        assert_eq!(record.thumbnail_text, "text");
        assert_eq!(record.lecturer_name, "Tanaka");
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record =
            IntakeRecord::assemble("t", "tt", "講座", "2024-03-01T10:07", PATTERN_2, &inputs());

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"pattern\":\"パターン2\""));

        let deserialized: IntakeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
    }
}
