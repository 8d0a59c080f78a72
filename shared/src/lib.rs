use serde::{Serialize, Deserialize};

// ===== ACCOUNT TYPES =====

/// Subscription tier of a distribution account.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Artist,
    Label,
}

impl Plan {
    pub fn display_name(&self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Artist => "Artist",
            Plan::Label => "Label",
        }
    }
}

/// Authenticated account record as the backend returns it and as it is
/// persisted between visits. Field names follow the backend's camelCase
/// wire format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub artist_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub plan: Plan,
    pub verified: bool,
    pub joined_at: String,
}

// ===== AUTH PAYLOADS =====

/// Login form payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationProfile {
    pub email: String,
    pub password: String,
    pub artist_name: String,
    pub full_name: String,
    pub country: String,
}

/// Successful login/register response: bearer token plus the account
/// record. Both travel together into local storage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_profile_parses_backend_wire_format() {
        let json = r#"{
            "id": "1",
            "email": "a@b.com",
            "name": "A",
            "artistName": "A",
            "plan": "free",
            "verified": false,
            "joinedAt": "2025-01-01"
        }"#;

        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.artist_name, "A");
        assert_eq!(user.plan, Plan::Free);
        assert!(user.avatar.is_none());
    }

    #[test]
    fn persisted_user_record_keeps_camel_case_keys() {
        let user = UserProfile {
            id: "42".into(),
            email: "mara@example.com".into(),
            name: "Mara Voss".into(),
            artist_name: "MARAV".into(),
            avatar: None,
            plan: Plan::Artist,
            verified: true,
            joined_at: "2024-11-05".into(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"artistName\""));
        assert!(json.contains("\"joinedAt\""));
        assert!(!json.contains("avatar"));
    }
}
