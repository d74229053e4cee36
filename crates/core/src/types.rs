/// Database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Timestamps are stored and compared in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Maximum length of category, subcategory, and contact name fields.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a photo description.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Maximum length of a contact phone number.
pub const MAX_PHONE_LEN: usize = 20;
