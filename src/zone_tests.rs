// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for zone identity types.

#[cfg(test)]
mod tests {
    use crate::zone::*;

    #[test]
    fn test_canonical_name_strips_trailing_dot() {
        let zone = Zone::new("example.com.", "z-1");
        assert_eq!(zone.canonical_name(), "example.com");
    }

    #[test]
    fn test_canonical_name_without_trailing_dot_is_unchanged() {
        let zone = Zone::new("example.com", "z-1");
        assert_eq!(zone.canonical_name(), "example.com");
    }

    #[test]
    fn test_canonical_name_strips_only_one_dot() {
        assert_eq!(canonical_zone_name("example.com.."), "example.com.");
    }

    #[test]
    fn test_validate_accepts_fqdn() {
        assert!(Zone::new("sub.example.org.", "z").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_root_and_empty() {
        assert!(Zone::new(".", "z").validate().is_err());
        assert!(Zone::new("", "z").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_label() {
        let err = Zone::new("example..com.", "z").validate().unwrap_err();
        assert!(err.contains("empty labels"));
    }

    #[test]
    fn test_validate_rejects_path_separator() {
        assert!(Zone::new("evil/../com.", "z").validate().is_err());
    }

    #[test]
    fn test_zone_display() {
        let zone = Zone::new("example.com.", "abc-123");
        assert_eq!(zone.to_string(), "example.com. (abc-123)");
    }

    #[test]
    fn test_master_server_default_port() {
        let master: MasterServer = serde_yaml::from_str("host: 192.0.2.1").unwrap();
        assert_eq!(master.port, 5354);
    }

    #[test]
    fn test_tsig_algorithm_wire_names() {
        assert_eq!(TsigAlgorithm::HmacSha256.as_str(), "hmac-sha256");
        assert_eq!(TsigAlgorithm::HmacMd5.to_string(), "hmac-md5");

        let parsed: TsigAlgorithm = serde_yaml::from_str("hmac-sha512").unwrap();
        assert_eq!(parsed, TsigAlgorithm::HmacSha512);
    }

    #[test]
    fn test_tsig_key_debug_redacts_secret() {
        let key = TsigKey {
            name: "transfer-key".to_string(),
            algorithm: TsigAlgorithm::HmacSha256,
            secret: "c2VjcmV0".to_string(),
        };
        let debug = format!("{key:?}");
        assert!(debug.contains("transfer-key"));
        assert!(!debug.contains("c2VjcmV0"));
    }
}
