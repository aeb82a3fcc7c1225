use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One Teleservices instance as reported by the inventory API.
///
/// For reference, a record looks like:
///
/// ```json
/// {"application_name": "etalle_teleservices", "is_docker": false,
///  "type": "teleservices", "environment": "production", "image_id": "",
///  "images_version": "", "vhost_name": "https://etalle.guichet-citoyen.be",
///  "total_size": "293.099876", "instance_port_urls": null, "minisites": {},
///  "packages": ["imio_ts_aes"], "host": "ts003.prod.imio.be"}
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Teleservice {
    pub application_name: String,
    #[serde(default)]
    pub environment: String,
    pub host: String,
    #[serde(default)]
    pub vhost_name: String,
    /// Size in MB, kept as the decimal string the API sends.
    #[serde(deserialize_with = "decimal_string")]
    pub total_size: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub packages: Vec<String>,
    // Pass-through fields, unused by listing or connecting
    #[serde(default)]
    pub is_docker: Option<bool>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub images_version: Option<String>,
    #[serde(default)]
    pub instance_port_urls: Option<Value>,
    #[serde(default)]
    pub minisites: Option<Value>,
}

impl Teleservice {
    /// Size converted from MB to GB.
    ///
    /// Returns `None` when `total_size` is not a non-negative decimal.
    pub fn total_size_gb(&self) -> Option<f64> {
        let mb: f64 = self.total_size.trim().parse().ok()?;
        if mb.is_finite() && mb >= 0.0 {
            Some(mb / 1024.0)
        } else {
            None
        }
    }

    /// Checks the invariants a usable record must hold.
    pub fn validate(&self) -> Result<(), String> {
        if self.application_name.trim().is_empty() {
            return Err("application_name is empty".into());
        }
        if self.host.trim().is_empty() {
            return Err(format!("host is empty for {}", self.application_name));
        }
        if self.total_size_gb().is_none() {
            return Err(format!(
                "total_size {:?} of {} is not a non-negative decimal",
                self.total_size, self.application_name
            ));
        }
        Ok(())
    }
}

// The API sends sizes as strings, but a bare number is accepted too.
fn decimal_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a decimal string or number, got {}",
            other
        ))),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
