/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Id of the demo user every favorite is attributed to.
pub const DEFAULT_CURRENT_USER_ID: DbId = 1;
