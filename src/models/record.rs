//! Record model representing one contact in the address book.

use crate::domain::{BirthdayDate, Name, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a fixed name, an ordered list of phone numbers and an
/// optional birthday.
///
/// The record does not reject duplicate phone numbers; that policy lives in
/// [`ContactService`](crate::services::ContactService).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validate `number` and append it.
    pub fn add_phone(&mut self, number: &str) -> RecordResult<()> {
        self.phones.push(PhoneNumber::new(number)?);
        Ok(())
    }

    /// Remove the first phone equal to `number`.
    pub fn remove_phone(&mut self, number: &str) -> RecordResult<()> {
        let index = self
            .position_of(number)
            .ok_or_else(|| RecordError::PhoneNotFound(number.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the phone equal to `old_number` with `new_number`, keeping its
    /// position in the list.
    ///
    /// Nothing changes if `old_number` is missing or `new_number` is invalid.
    pub fn edit_phone(&mut self, old_number: &str, new_number: &str) -> RecordResult<()> {
        let index = self
            .position_of(old_number)
            .ok_or_else(|| RecordError::PhoneNotFound(old_number.to_string()))?;
        self.phones[index] = PhoneNumber::new(new_number)?;
        Ok(())
    }

    /// First phone equal to `number`, if any.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> RecordResult<()> {
        self.birthday = Some(BirthdayDate::new(birthday)?);
        Ok(())
    }

    fn position_of(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == number)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for phone in &self.phones {
            write!(f, "\n  {}", phone)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("Alice").unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("Alice").unwrap();
        assert_eq!(record.name().as_str(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_new_rejects_empty_name() {
        assert_eq!(Record::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_then_find_phone() {
        let record = record_with_phones(&["1234567890"]);
        let found = record.find_phone("1234567890").unwrap();
        assert_eq!(found.as_str(), "1234567890");
        assert!(record.find_phone("0987654321").is_none());
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = Record::new("Alice").unwrap();
        let err = record.add_phone("12345").unwrap_err();
        assert!(matches!(err, RecordError::Validation(ValidationError::InvalidPhone(_))));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let record = record_with_phones(&["1234567890", "1234567890"]);
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_then_find_phone() {
        let mut record = record_with_phones(&["1234567890", "1111111111"]);
        record.remove_phone("1234567890").unwrap();
        assert!(record.find_phone("1234567890").is_none());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_remove_phone_removes_only_first_match() {
        let mut record = record_with_phones(&["1234567890", "2222222222", "1234567890"]);
        record.remove_phone("1234567890").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["2222222222", "1234567890"]);
    }

    #[test]
    fn test_remove_missing_phone() {
        let mut record = record_with_phones(&["1234567890"]);
        let err = record.remove_phone("0000000000").unwrap_err();
        assert_eq!(err, RecordError::PhoneNotFound("0000000000".to_string()));
    }

    #[test]
    fn test_edit_phone_keeps_position() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "3333333333"]);
        record.edit_phone("2222222222", "4444444444").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1111111111", "4444444444", "3333333333"]);
    }

    #[test]
    fn test_edit_missing_phone_leaves_list_unchanged() {
        let mut record = record_with_phones(&["1111111111"]);
        let before = record.clone();
        let err = record.edit_phone("9999999999", "2222222222").unwrap_err();
        assert_eq!(err, RecordError::PhoneNotFound("9999999999".to_string()));
        assert_eq!(record, before);
    }

    #[test]
    fn test_edit_phone_to_invalid_keeps_old_number() {
        let mut record = record_with_phones(&["1111111111"]);
        let err = record.edit_phone("1111111111", "abc").unwrap_err();
        assert!(matches!(err, RecordError::Validation(_)));
        assert!(record.find_phone("1111111111").is_some());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = Record::new("Alice").unwrap();
        record.add_birthday("01.01.2000").unwrap();
        record.add_birthday("02.02.2001").unwrap();
        assert_eq!(record.birthday().unwrap().as_str(), "02.02.2001");
    }

    #[test]
    fn test_add_invalid_birthday_keeps_previous() {
        let mut record = Record::new("Alice").unwrap();
        record.add_birthday("01.01.2000").unwrap();
        assert!(record.add_birthday("2000-01-01").is_err());
        assert_eq!(record.birthday().unwrap().as_str(), "01.01.2000");
    }

    #[test]
    fn test_record_display() {
        let record = record_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(record.to_string(), "Alice\n  1111111111\n  2222222222");
    }

    #[test]
    fn test_record_display_without_phones() {
        let record = Record::new("Bob").unwrap();
        assert_eq!(record.to_string(), "Bob");
    }

    #[test]
    fn test_record_serde_round_trip() {
        let mut record = record_with_phones(&["1111111111"]);
        record.add_birthday("15.06.1990").unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Alice",
                "phones": ["1111111111"],
                "birthday": "15.06.1990"
            })
        );

        let restored: Record = serde_json::from_value(json).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn test_record_deserialize_rejects_bad_phone() {
        let json = serde_json::json!({ "name": "Alice", "phones": ["123"] });
        assert!(serde_json::from_value::<Record>(json).is_err());
    }
}
