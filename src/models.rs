// Wire shapes exchanged with the API. These are passive records: every field
// maps 1:1 to a JSON key, absent fields decode to their zero/empty value via
// `#[serde(default)]`, and free-text status strings pass through verbatim so
// new server-side states never break decoding.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub droplet_limit: i64,
    pub floating_ip_limit: i64,
    pub volume_limit: i64,
    pub email: String,
    pub uuid: String,
    pub email_verified: bool,
    pub status: String,
    pub status_message: String,
    pub team: Option<Team>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub uuid: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Droplet {
    pub id: u64,
    pub name: String,
    pub memory: i64,
    pub vcpus: i64,
    pub disk: i64,
    pub locked: bool,
    pub status: String,
    pub kernel: Option<Kernel>,
    pub created_at: String,
    pub features: Vec<String>,
    pub backup_ids: Vec<i64>,
    pub snapshot_ids: Vec<i64>,
    pub image: Option<Image>,
    pub size: Option<Size>,
    pub size_slug: String,
    pub networks: Option<Networks>,
    pub region: Option<Region>,
    pub tags: Vec<String>,
    pub volume_ids: Vec<String>,
    pub vpc_uuid: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Kernel {
    pub id: i64,
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub distribution: String,
    pub slug: String,
    pub public: bool,
    pub regions: Vec<String>,
    pub min_disk_size: i64,
    pub size_gigabytes: f64,
    pub created_at: String,
    pub description: String,
    pub tags: Vec<String>,
    pub status: String,
    pub error_message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Networks {
    pub v4: Vec<NetworkV4>,
    pub v6: Vec<NetworkV6>,
}

// `type` on the wire is "public" or "private".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkV4 {
    pub ip_address: String,
    pub netmask: String,
    pub gateway: String,
    #[serde(rename = "type")]
    pub kind: String,
}

// IPv6 netmask is a prefix length, not a dotted quad.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkV6 {
    pub ip_address: String,
    pub netmask: i64,
    pub gateway: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub name: String,
    pub slug: String,
    pub features: Vec<String>,
    pub available: bool,
    pub sizes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Size {
    pub slug: String,
    pub memory: i64,
    pub vcpus: i64,
    pub disk: i64,
    pub transfer: f64,
    pub price_monthly: f64,
    pub price_hourly: f64,
    pub regions: Vec<String>,
    pub available: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub id: i64,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub started_at: String,
    pub completed_at: Option<String>,
    pub resource_id: i64,
    pub resource_type: String,
    pub region: Option<Region>,
    pub region_slug: String,
}

/// Request body for droplet creation. Write-only: built by the command
/// surface, serialized once, never round-tripped back. Optional fields are
/// omitted from the body entirely when empty or false.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateDropletRequest {
    pub name: String,
    pub region: String,
    pub size: String,
    pub image: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub backups: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub ipv6: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub monitoring: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_data: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vpc_uuid: String,
}

fn is_false(v: &bool) -> bool {
    !v
}

// Per-endpoint response envelopes. Each endpoint nests its payload under a
// named key; modeling the envelopes explicitly keeps each decode contract
// exact instead of funneling everything through one generic wrapper.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountResponse {
    pub account: Account,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DropletResponse {
    pub droplet: Droplet,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DropletListResponse {
    pub droplets: Vec<Droplet>,
    pub links: Links,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateDropletResponse {
    pub droplet: Droplet,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Links {
    pub pages: Option<Pages>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Pages {
    pub first: String,
    pub prev: String,
    pub next: String,
    pub last: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub total: i64,
}

/// Error envelope returned by the API on any non-2xx status.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    pub id: String,
    pub message: String,
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_droplet_decodes_with_defaults() {
        let droplet: Droplet =
            serde_json::from_str(r#"{"id": 42, "name": "web-1"}"#).unwrap();
        assert_eq!(droplet.id, 42);
        assert_eq!(droplet.name, "web-1");
        assert_eq!(droplet.memory, 0);
        assert_eq!(droplet.status, "");
        assert!(droplet.networks.is_none());
        assert!(droplet.tags.is_empty());
    }

    #[test]
    fn unknown_status_is_preserved_verbatim() {
        let droplet: Droplet =
            serde_json::from_str(r#"{"id": 1, "status": "hibernating"}"#).unwrap();
        assert_eq!(droplet.status, "hibernating");
    }

    #[test]
    fn create_request_omits_empty_optionals() {
        let req = CreateDropletRequest {
            name: "web-1".to_string(),
            region: "nyc3".to_string(),
            size: "s-1vcpu-1gb".to_string(),
            image: "ubuntu-24-04-x64".to_string(),
            ..Default::default()
        };
        let body = serde_json::to_value(&req).unwrap();
        let mut keys: Vec<&str> =
            body.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["image", "name", "region", "size"]);
    }

    #[test]
    fn create_request_serializes_set_optionals() {
        let req = CreateDropletRequest {
            name: "web-1".to_string(),
            region: "nyc3".to_string(),
            size: "s-1vcpu-1gb".to_string(),
            image: "ubuntu-24-04-x64".to_string(),
            tags: vec!["web".to_string()],
            ipv6: true,
            ..Default::default()
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["tags"], serde_json::json!(["web"]));
        assert_eq!(body["ipv6"], serde_json::json!(true));
        assert!(body.get("backups").is_none());
    }

    #[test]
    fn network_type_maps_to_kind() {
        let nets: Networks = serde_json::from_str(
            r#"{"v4": [{"ip_address": "10.0.0.2", "netmask": "255.255.240.0",
                        "gateway": "10.0.0.1", "type": "private"}]}"#,
        )
        .unwrap();
        assert_eq!(nets.v4[0].kind, "private");
        assert!(nets.v6.is_empty());
    }
}
