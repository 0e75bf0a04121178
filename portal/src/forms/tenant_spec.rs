use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub servers: u32,
}

impl Zone {
    pub fn new<S: Into<String>>(name: S, servers: u32) -> Self {
        Self {
            name: name.into(),
            servers,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeConfiguration {
    /// number followed by a kubernetes unit, e.g. "100Gi"
    pub size: String,
    pub storage_class: String,
}

/// Body of the tenant creation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSpec {
    pub name: String,
    pub service_name: String,
    pub image: String,
    pub enable_ssl: bool,
    pub enable_mcs: bool,
    pub access_key: String,
    pub secret_key: String,
    pub volumes_per_server: u32,
    pub volume_configuration: VolumeConfiguration,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub mount_path: String,
    pub zones: Vec<Zone>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_wire_field_names() {
        let spec = TenantSpec {
            name: "tenant-1".to_string(),
            service_name: "tenant-1".to_string(),
            volumes_per_server: 4,
            volume_configuration: VolumeConfiguration {
                size: "100Gi".to_string(),
                storage_class: "standard".to_string(),
            },
            zones: vec![Zone::new("zone-1", 4)],
            ..Default::default()
        };
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "tenant-1",
                "service_name": "tenant-1",
                "image": "",
                "enable_ssl": false,
                "enable_mcs": false,
                "access_key": "",
                "secret_key": "",
                "volumes_per_server": 4,
                "volume_configuration": {
                    "size": "100Gi",
                    "storage_class": "standard"
                },
                "zones": [{"name": "zone-1", "servers": 4}]
            })
        );
    }
}
