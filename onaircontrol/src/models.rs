//! Data models for the Icecast admin API

use serde::{Deserialize, Serialize};

/// Aggregate server statistics returned by `GET /admin/stats`
#[derive(Debug, Clone, Deserialize)]
pub struct ServerStats {
    /// Total connected listeners across all mounts
    #[serde(default)]
    pub listeners: u64,
    /// Number of connected source clients
    #[serde(default)]
    pub source_clients: u64,
    /// Server uptime in seconds
    #[serde(default)]
    pub uptime: u64,
    /// Connected sources, one entry per mount
    #[serde(default)]
    pub sources: Vec<MountInfo>,
}

impl ServerStats {
    /// Find a source entry by mount name
    pub fn source(&self, mount: &str) -> Option<&MountInfo> {
        self.sources.iter().find(|source| source.mount == mount)
    }
}

/// Per-mount source information
#[derive(Debug, Clone, Deserialize)]
pub struct MountInfo {
    /// Mount name listeners connect to (e.g. `/stream`)
    pub mount: String,
    /// Listeners currently connected to this mount
    #[serde(default)]
    pub listeners: u64,
    /// Source bitrate in kbps, when the server reports it
    pub bitrate: Option<u32>,
    /// Currently published "now playing" string, if any
    pub title: Option<String>,
}

/// Body of `POST /admin/metadata`
#[derive(Debug, Clone, Serialize)]
pub struct MetadataUpdate<'a> {
    /// Target mount
    pub mount: &'a str,
    /// Update mode; always `updinfo` for now-playing updates
    pub mode: &'a str,
    /// The new now-playing string
    pub song: &'a str,
}

/// Body of `POST /admin/fallbacks`
#[derive(Debug, Clone, Serialize)]
pub struct FallbackUpdate<'a> {
    /// Target mount
    pub mount: &'a str,
    /// Track or stream URL the mount should switch to
    pub fallback: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stats_parse_with_missing_aggregates() {
        let stats: ServerStats = serde_json::from_value(json!({
            "sources": [{"mount": "/stream"}]
        }))
        .unwrap();

        assert_eq!(stats.listeners, 0);
        assert_eq!(stats.sources.len(), 1);
        assert_eq!(stats.sources[0].mount, "/stream");
        assert_eq!(stats.sources[0].listeners, 0);
        assert!(stats.sources[0].bitrate.is_none());
    }

    #[test]
    fn source_lookup_by_mount() {
        let stats: ServerStats = serde_json::from_value(json!({
            "listeners": 7,
            "sources": [
                {"mount": "/stream", "listeners": 5, "bitrate": 128},
                {"mount": "/backup", "listeners": 2}
            ]
        }))
        .unwrap();

        assert_eq!(stats.source("/stream").unwrap().bitrate, Some(128));
        assert!(stats.source("/missing").is_none());
    }
}
