// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tests for NS1 request documents and probe classification.

#[cfg(test)]
mod tests {
    use crate::ns1::types::{ZoneDocument, ZoneProbe};
    use crate::zone::{MasterServer, TsigAlgorithm, TsigKey, Zone};
    use reqwest::StatusCode;
    use serde_json::json;

    fn tsig_key() -> TsigKey {
        TsigKey {
            name: "transfer-key".to_string(),
            algorithm: TsigAlgorithm::HmacSha256,
            secret: "c2VjcmV0LWtleQ==".to_string(),
        }
    }

    #[test]
    fn test_document_without_tsig_has_no_tsig_key() {
        let zone = Zone::new("example.com.", "z-1");
        let master = MasterServer::new("192.0.2.10", 5354);

        let body = serde_json::to_value(ZoneDocument::secondary(&zone, &master, None)).unwrap();

        assert_eq!(
            body,
            json!({
                "zone": "example.com",
                "secondary": {
                    "enabled": true,
                    "primary_ip": "192.0.2.10",
                    "primary_port": 5354
                }
            })
        );
        assert!(body["secondary"].get("tsig").is_none());
    }

    #[test]
    fn test_document_with_tsig() {
        let zone = Zone::new("example.com.", "z-1");
        let master = MasterServer::new("192.0.2.10", 53);
        let key = tsig_key();

        let body =
            serde_json::to_value(ZoneDocument::secondary(&zone, &master, Some(&key))).unwrap();

        assert_eq!(
            body["secondary"]["tsig"],
            json!({
                "enabled": true,
                "hash": "hmac-sha256",
                "name": "transfer-key",
                "key": "c2VjcmV0LWtleQ=="
            })
        );
        assert_eq!(body["secondary"]["primary_port"], 53);
    }

    #[test]
    fn test_document_debug_redacts_tsig_secret() {
        let zone = Zone::new("example.com.", "z-1");
        let master = MasterServer::new("192.0.2.10", 53);
        let key = tsig_key();

        let debug = format!("{:?}", ZoneDocument::secondary(&zone, &master, Some(&key)));
        assert!(debug.contains("transfer-key"));
        assert!(!debug.contains("c2VjcmV0LWtleQ=="));
    }

    #[test]
    fn test_probe_from_status() {
        assert_eq!(ZoneProbe::from_status(StatusCode::OK), ZoneProbe::Exists);
        assert_eq!(
            ZoneProbe::from_status(StatusCode::NOT_FOUND),
            ZoneProbe::NotFound
        );
        assert_eq!(
            ZoneProbe::from_status(StatusCode::UNAUTHORIZED),
            ZoneProbe::UnexpectedStatus(StatusCode::UNAUTHORIZED)
        );
    }

    #[test]
    fn test_only_200_counts_as_existing() {
        assert!(ZoneProbe::Exists.exists());
        assert!(!ZoneProbe::NotFound.exists());
        assert!(!ZoneProbe::from_status(StatusCode::NO_CONTENT).exists());
        assert!(!ZoneProbe::from_status(StatusCode::INTERNAL_SERVER_ERROR).exists());
    }
}
