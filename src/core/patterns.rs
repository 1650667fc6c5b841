//! Recognized pattern values and the pattern → field-group rule.
//!
//! The pattern picker's selection decides which of the three
//! pattern-specific field groups is shown. The comparison is exact and
//! case-sensitive, with no trimming or normalization: the pattern names are
//! opaque string constants.

/// Identifier of the picker whose selection drives field-group visibility.
pub const PATTERN_PICKER_ID: &str = "pattern";

/// The three recognized pattern values, in field-group order.
pub const PATTERN_1: &str = "パターン1";
pub const PATTERN_2: &str = "パターン2";
pub const PATTERN_3: &str = "パターン3";

/// One of the three pattern-specific field groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    /// Lecturer name plus two lecturer images.
    Pattern1,
    /// Lecturer name plus a single lecturer image.
    Pattern2,
    /// Lecturer name plus a student name.
    Pattern3,
}

impl FieldGroup {
    /// All groups, in display order.
    pub const ALL: [FieldGroup; 3] = [
        FieldGroup::Pattern1,
        FieldGroup::Pattern2,
        FieldGroup::Pattern3,
    ];

    /// The pattern value this group belongs to.
    pub fn pattern_value(self) -> &'static str {
        match self {
            FieldGroup::Pattern1 => PATTERN_1,
            FieldGroup::Pattern2 => PATTERN_2,
            FieldGroup::Pattern3 => PATTERN_3,
        }
    }
}

/// Map a pattern value to the field group it shows.
///
/// Returns `None` for an empty or unrecognized value. Callers must treat
/// `None` as "leave all groups in their prior visibility state", not as
/// "hide everything".
pub fn field_group_for(value: &str) -> Option<FieldGroup> {
    match value {
        PATTERN_1 => Some(FieldGroup::Pattern1),
        PATTERN_2 => Some(FieldGroup::Pattern2),
        PATTERN_3 => Some(FieldGroup::Pattern3),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_pattern_maps_to_its_group() {
        assert_eq!(field_group_for(PATTERN_1), Some(FieldGroup::Pattern1));
        assert_eq!(field_group_for(PATTERN_2), Some(FieldGroup::Pattern2));
        assert_eq!(field_group_for(PATTERN_3), Some(FieldGroup::Pattern3));
    }

    #[test]
    fn test_empty_and_unrecognized_values_match_nothing() {
        assert_eq!(field_group_for(""), None);
        assert_eq!(field_group_for("パターン4"), None);
        assert_eq!(field_group_for("pattern1"), None);
    }

    #[test]
    fn test_no_trimming_or_normalization() {
        assert_eq!(field_group_for(" パターン1"), None);
        assert_eq!(field_group_for("パターン1 "), None);
    }

    #[test]
    fn test_group_round_trips_through_its_value() {
        for group in FieldGroup::ALL {
            assert_eq!(field_group_for(group.pattern_value()), Some(group));
        }
    }
}
