use serde::Deserialize;

use super::enums::{AccessLevel, ResourceType};

/// Account visible to the current API token.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub access_levels: Vec<AccessLevel>,
}

/// Grant attached to one resource node.
#[derive(Debug, Clone, Deserialize)]
pub struct Permission {
    pub resource_id: i64,
    pub resource_type: ResourceType,
    pub access_level: AccessLevel,
}

#[cfg(test)]
mod tests {
    use super::Account;

    #[test]
    fn decodes_with_and_without_access_levels() {
        let account: Account =
            serde_json::from_str(r#"{"id":5,"name":"Ops","access_levels":["owner"]}"#)
                .expect("decodes");
        assert_eq!(account.id, 5);
        assert_eq!(account.access_levels.len(), 1);

        let bare: Account = serde_json::from_str(r#"{"id":6,"name":"Dev"}"#).expect("decodes");
        assert!(bare.access_levels.is_empty());
    }
}
