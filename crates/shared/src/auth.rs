//! Authentication claims carried by bearer tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: Uuid,
    /// Company the user is currently working in.
    ///
    /// Users that have not been associated with a company yet get a token
    /// without this claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empresa: Option<i64>,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(user_id: Uuid, company_id: Option<i64>, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            empresa: company_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the company ID from claims, if the user has one.
    #[must_use]
    pub const fn company_id(&self) -> Option<i64> {
        self.empresa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_claim_is_optional_on_the_wire() {
        let claims: Claims = serde_json::from_str(
            r#"{"sub":"6f1c2d1e-8a4b-4f7e-9c3d-2b1a0e9f8d7c","iat":1,"exp":2}"#,
        )
        .unwrap();

        assert_eq!(claims.company_id(), None);
    }

    #[test]
    fn test_company_claim_roundtrips() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, Some(42), Utc::now());
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["empresa"], 42);
        assert_eq!(claims.user_id(), user_id);
    }
}
