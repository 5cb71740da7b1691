//! Deserializing mirror of the gateway's wire shapes.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortMapping {
    #[serde(rename = "private")]
    pub private_port: u16,
    #[serde(rename = "public", default)]
    pub public_port: Option<u16>,
    #[serde(rename = "type")]
    pub protocol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContainerSummary {
    pub id: String,
    pub name: String,
    pub image: String,
    pub state: String,
    #[serde(default)]
    pub ports: Vec<PortMapping>,
}

impl ContainerSummary {
    pub fn is_running(&self) -> bool {
        self.state == "running"
    }

    /// Compact port list for the list row, e.g. "8080→80/tcp, 443/tcp".
    pub fn ports_label(&self) -> String {
        self.ports
            .iter()
            .map(|p| match p.public_port {
                Some(public) => format!("{}→{}/{}", public, p.private_port, p.protocol),
                None => format!("{}/{}", p.private_port, p.protocol),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
