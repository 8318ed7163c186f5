//! Data feed location and reload cadence.

pub struct DataSourceConfig {
    /// URL of the merged observation feed (a JSON array of records).
    pub url: &'static str,
    /// Full-reload interval in seconds. The reload restarts the whole load
    /// pipeline and is the only recovery path from a failed load.
    pub reload_interval_secs: u64,
}

pub const DATA_SOURCE: DataSourceConfig = DataSourceConfig {
    url: "http://localhost:8000/data/merged_with_forecast.json",
    reload_interval_secs: 60,
};
