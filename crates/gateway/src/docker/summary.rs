//! Typed projection of Docker's container-list answer into the wire shape
//! served by the gateway. Fixed field set so schema drift fails to compile
//! instead of silently producing `null`s.

use serde::Serialize;

/// Port mapping as reported by the daemon, order-preserving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortMapping {
    #[serde(rename = "private")]
    pub private_port: u16,
    /// Absent when the port is exposed but not bound to the host.
    #[serde(rename = "public", skip_serializing_if = "Option::is_none")]
    pub public_port: Option<u16>,
    #[serde(rename = "type")]
    pub protocol: String,
}

/// One container as served by `GET /api/containers`.
///
/// Derived read-only from the daemon's current answer; regenerated on every
/// query, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerSummary {
    pub id: String,
    /// Display name without the daemon's leading slash.
    pub name: String,
    pub image: String,
    /// Enumerated status string: "running", "exited", ...
    pub state: String,
    pub ports: Vec<PortMapping>,
}

impl From<bollard::models::ContainerSummary> for ContainerSummary {
    fn from(s: bollard::models::ContainerSummary) -> Self {
        let ports = s
            .ports
            .unwrap_or_default()
            .into_iter()
            .map(|p| PortMapping {
                private_port: p.private_port,
                public_port: p.public_port,
                protocol: p
                    .typ
                    .map(|t| t.to_string().to_lowercase())
                    .unwrap_or_else(|| "tcp".to_string()),
            })
            .collect();

        Self {
            id: s.id.unwrap_or_default(),
            // The daemon reports names as "/web"; strip exactly one
            // leading separator, like the list API consumers expect.
            name: s
                .names
                .as_deref()
                .and_then(|n| n.first())
                .map(|n| n.strip_prefix('/').unwrap_or(n))
                .unwrap_or_default()
                .to_string(),
            image: s.image.unwrap_or_default(),
            state: s
                .state
                .map(|s| s.to_string().to_lowercase())
                .unwrap_or_else(|| "unknown".into()),
            ports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bollard::models::{ContainerSummary as BollardSummary, PortSummary, PortSummaryTypeEnum};

    fn bollard_summary(names: Vec<&str>) -> BollardSummary {
        BollardSummary {
            id: Some("abc123".to_string()),
            names: Some(names.into_iter().map(String::from).collect()),
            image: Some("nginx:latest".to_string()),
            state: Some(bollard::models::ContainerSummaryStateEnum::RUNNING),
            ports: Some(vec![PortSummary {
                ip: Some("0.0.0.0".to_string()),
                private_port: 80,
                public_port: Some(8080),
                typ: Some(PortSummaryTypeEnum::TCP),
                ..Default::default()
            }]),
            ..Default::default()
        }
    }

    #[test]
    fn test_projection_running_nginx() {
        let summary = ContainerSummary::from(bollard_summary(vec!["/web"]));

        assert_eq!(summary.id, "abc123");
        assert_eq!(summary.name, "web");
        assert_eq!(summary.image, "nginx:latest");
        assert_eq!(summary.state, "running");
        assert_eq!(
            summary.ports,
            vec![PortMapping {
                private_port: 80,
                public_port: Some(8080),
                protocol: "tcp".to_string(),
            }]
        );
    }

    #[test]
    fn test_name_without_separator_unchanged() {
        let summary = ContainerSummary::from(bollard_summary(vec!["web"]));
        assert_eq!(summary.name, "web");
    }

    #[test]
    fn test_name_strips_exactly_one_separator() {
        let summary = ContainerSummary::from(bollard_summary(vec!["//odd"]));
        assert_eq!(summary.name, "/odd");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let summary = ContainerSummary::from(BollardSummary::default());
        assert_eq!(summary.id, "");
        assert_eq!(summary.name, "");
        assert_eq!(summary.image, "");
        assert_eq!(summary.state, "unknown");
        assert!(summary.ports.is_empty());
    }

    #[test]
    fn test_unbound_port_serializes_without_public() {
        let mapping = PortMapping {
            private_port: 5432,
            public_port: None,
            protocol: "tcp".to_string(),
        };
        let json = serde_json::to_value(&mapping).unwrap();
        assert_eq!(json, serde_json::json!({"private": 5432, "type": "tcp"}));
    }

    #[test]
    fn test_wire_shape_field_names() {
        let summary = ContainerSummary::from(bollard_summary(vec!["/web"]));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc123",
                "name": "web",
                "image": "nginx:latest",
                "state": "running",
                "ports": [{"private": 80, "public": 8080, "type": "tcp"}],
            })
        );
    }
}
