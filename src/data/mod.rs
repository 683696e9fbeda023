//! Entity data access: the bundled sample, the REST client and the reactive store.

mod fence;
mod remote;
mod sample;
mod source;
mod store;

use std::rc::Rc;

use crate::config::{AppConfig, DataSourceKind};

pub use remote::RemoteSource;
pub use sample::sample_snapshot;
pub use source::{DEMO_PASSWORD, EntitySource, SampleSource};
pub use store::DirectoryStore;

pub fn source_for(config: &AppConfig) -> Rc<dyn EntitySource> {
	match config.data_source {
		DataSourceKind::Sample => Rc::new(SampleSource::new(sample_snapshot())),
		DataSourceKind::Remote => {
			let remote = RemoteSource::new(&config.api_base_url);
			let probe = remote.clone();
			leptos::task::spawn_local(async move {
				let health = probe.health().await;
				log::info!("backend health: {} {}", health.status, health.message);
			});
			Rc::new(remote)
		}
	}
}
