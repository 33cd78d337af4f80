/// Subject type for interactive users.
pub const SUBJECT_TYPE_USER: &str = "user";

/// Token scope granted to first-party callers.
pub const FIRST_PARTY_SCOPE: &str = "*";
