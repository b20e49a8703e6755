use chrono::Utc;

/// Per-run build identity, generated once and treated as constant
/// throughout page generation.
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Random identifier used to cache-bust generated asset URLs
    pub id: String,
    /// Human-readable build timestamp
    pub time: String,
}

impl BuildInfo {
    /// Generate a fresh build identity
    pub fn generate() -> Self {
        let bytes: [u8; 4] = rand::random();
        let id = bytes.iter().map(|b| format!("{:02X}", b)).collect();

        BuildInfo {
            id,
            time: Utc::now().to_rfc2822(),
        }
    }

    /// Build identity with fixed values, for deterministic tests
    pub fn fixed(id: &str, time: &str) -> Self {
        BuildInfo {
            id: id.to_string(),
            time: time.to_string(),
        }
    }
}
