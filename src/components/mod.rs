//! Reusable view pieces. Only `force_graph` carries real logic.

mod alumni_card;
mod filter_panel;
pub mod force_graph;
mod header;
mod notice;
mod sidebar;

pub use alumni_card::AlumniCard;
pub use filter_panel::{FilterPanel, SearchBox};
pub use header::Header;
pub use notice::Notice;
pub use sidebar::CategorySidebar;
