//! Alumni network explorer: a Leptos client-side app that draws alumni and the
//! departments, companies, skills and events they connect to as a force graph.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod config;
mod data;
mod error;
mod network;
mod pages;
mod session;

// Top-Level pages
use crate::components::{Header, Notice};
use crate::config::AppConfig;
use crate::data::DirectoryStore;
use crate::network::FilterState;
use crate::pages::directory::Directory;
use crate::pages::home::Home;
use crate::pages::login::Login;
use crate::pages::not_found::NotFound;
use crate::pages::profile::Profile;
use crate::session::SessionContext;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// App root: resolves configuration, provides the shared stores and routes
/// between the dashboard, directory, login and profile pages.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let config = AppConfig::from_build_env();
	info!("data source: {:?}", config.data_source);
	let store = DirectoryStore::new(data::source_for(&config));
	provide_context(config);
	provide_context(store);
	provide_context(SessionContext::default());
	provide_context(RwSignal::new(FilterState::default()));
	store.reload();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		<Title text="Alumni Network" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Header />
			<Notice />
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/directory") view=Directory />
				<Route path=path!("/login") view=Login />
				<Route path=path!("/profile") view=Profile />
			</Routes>
		</Router>
	}
}
