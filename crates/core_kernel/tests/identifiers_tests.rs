//! Unit tests for the Identifiers module
//!
//! Tests cover creation, parsing, UUID conversion, and the JSON wire form
//! of the client and policy identifiers.

use core_kernel::{ClientId, PolicyId};
use uuid::Uuid;

mod client_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        assert_ne!(ClientId::new(), ClientId::new());
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = ClientId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = ClientId::new_v7();
        assert!(id1 < id2);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(ClientId::prefix(), "CLI");
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = ClientId::new();
        let parsed: ClientId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("CLI-not-a-uuid".parse::<ClientId>().is_err());
        assert!("".parse::<ClientId>().is_err());
    }
}

mod policy_id_tests {
    use super::*;

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let id = PolicyId::from(uuid);
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
        assert_eq!(*PolicyId::from_uuid(uuid).as_uuid(), uuid);
    }

    #[test]
    fn test_json_serialization_is_transparent() {
        let uuid = Uuid::new_v4();
        let id = PolicyId::from_uuid(uuid);

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));

        let back: PolicyId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_prefixed_client_id_does_not_parse_as_policy_prefix_stripped() {
        // The CLI- prefix is not stripped by PolicyId, so the string is not a UUID
        let client = ClientId::new();
        assert!(client.to_string().parse::<PolicyId>().is_err());
    }
}
