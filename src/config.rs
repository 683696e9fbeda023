//! Application configuration, resolved once at startup.

use log::warn;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Where entity data comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
	#[default]
	Sample,
	Remote,
}

impl DataSourceKind {
	fn parse(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"sample" | "mock" => Some(Self::Sample),
			"remote" | "api" => Some(Self::Remote),
			_ => None,
		}
	}
}

/// Force and interaction constants for the network graph.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
	pub force_charge: f32,
	pub force_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
	/// Rest length of an edge in world units.
	pub link_distance: f64,
	pub link_strength: f64,
	pub center_strength: f64,
	pub collide_strength: f64,
	pub alpha_min: f64,
	pub alpha_decay: f64,
	/// Alpha target while a node is dragged.
	pub alpha_reheat: f64,
	pub zoom_min: f64,
	pub zoom_max: f64,
	/// Pointer travel (px) below which a press counts as a click.
	pub click_tolerance: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			force_charge: 250.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			link_distance: 100.0,
			link_strength: 0.1,
			center_strength: 1.0,
			collide_strength: 0.7,
			alpha_min: 0.001,
			// 1 - alpha_min^(1/300): cools in roughly 300 ticks
			alpha_decay: 0.0228,
			alpha_reheat: 0.3,
			zoom_min: 0.2,
			zoom_max: 3.0,
			click_tolerance: 4.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	pub data_source: DataSourceKind,
	pub api_base_url: String,
	pub layout: LayoutConfig,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			data_source: DataSourceKind::default(),
			api_base_url: DEFAULT_API_URL.into(),
			layout: LayoutConfig::default(),
		}
	}
}

impl AppConfig {
	/// Resolve from build-time environment: `ALUMNI_CONFIG` (JSON), then the
	/// `ALUMNI_DATA_SOURCE` and `ALUMNI_API_URL` overrides.
	pub fn from_build_env() -> Self {
		option_env!("ALUMNI_CONFIG")
			.map(Self::from_json)
			.unwrap_or_default()
			.with_overrides(option_env!("ALUMNI_DATA_SOURCE"), option_env!("ALUMNI_API_URL"))
	}

	/// Parse a (possibly partial) JSON config. Invalid input falls back to defaults.
	pub fn from_json(json: &str) -> Self {
		serde_json::from_str(json).unwrap_or_else(|err| {
			warn!("ignoring invalid ALUMNI_CONFIG: {err}");
			Self::default()
		})
	}

	pub fn with_overrides(mut self, data_source: Option<&str>, api_url: Option<&str>) -> Self {
		if let Some(value) = data_source {
			match DataSourceKind::parse(value) {
				Some(kind) => self.data_source = kind,
				None => warn!("unknown data source '{value}', using {:?}", self.data_source),
			}
		}
		if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
			self.api_base_url = url.trim_end_matches('/').to_owned();
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_use_sample_data() {
		let config = AppConfig::default().with_overrides(None, None);
		assert_eq!(config, AppConfig::default());
		assert_eq!(config.data_source, DataSourceKind::Sample);
		assert_eq!(config.api_base_url, DEFAULT_API_URL);
	}

	#[test]
	fn overrides_apply_and_unknown_source_is_ignored() {
		let config = AppConfig::default()
			.with_overrides(Some(" Remote "), Some("https://alumni.example/api/"));
		assert_eq!(config.data_source, DataSourceKind::Remote);
		assert_eq!(config.api_base_url, "https://alumni.example/api");

		let config = AppConfig::default().with_overrides(Some("ftp"), Some("  "));
		assert_eq!(config.data_source, DataSourceKind::Sample);
		assert_eq!(config.api_base_url, DEFAULT_API_URL);
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let config =
			AppConfig::from_json(r#"{ "data_source": "remote", "layout": { "link_distance": 60.0 } }"#);
		assert_eq!(config.data_source, DataSourceKind::Remote);
		assert_eq!(config.layout.link_distance, 60.0);
		assert_eq!(config.layout.zoom_max, 3.0);
		assert_eq!(config.api_base_url, DEFAULT_API_URL);
	}

	#[test]
	fn invalid_json_falls_back_to_defaults() {
		assert_eq!(AppConfig::from_json("{ not json"), AppConfig::default());
	}
}
