//! Sample `user` resource schema.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Resource;

fn default_true() -> bool {
    true
}

/// Users collection schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct User {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Address
    pub address: String,
    /// Age in years
    #[validate(range(min = 0, max = 120))]
    #[schema(minimum = 0, maximum = 120)]
    pub age: Option<i32>,
    /// Whether user is active
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Resource for User {
    const COLLECTION: &'static str = "user";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(age: Option<i32>) -> User {
        User {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            address: "1 Main St".into(),
            age,
            is_active: true,
        }
    }

    #[test]
    fn age_within_bounds_is_valid() {
        assert!(user(None).validate().is_ok());
        assert!(user(Some(0)).validate().is_ok());
        assert!(user(Some(120)).validate().is_ok());
    }

    #[test]
    fn age_out_of_bounds_is_rejected() {
        assert!(user(Some(-1)).validate().is_err());
        assert!(user(Some(121)).validate().is_err());
    }

    #[test]
    fn is_active_defaults_to_true() {
        let parsed: User = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","address":"1 Main St"}"#,
        )
        .unwrap();
        assert!(parsed.is_active);
        assert_eq!(parsed.age, None);
    }
}
