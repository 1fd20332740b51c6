//! Navigation core of the console: tab registry, content cache,
//! route resolution and address bar synchronization.

pub mod config;
pub mod content_cache;
pub mod error;
pub mod history;
pub mod nav_tree;
pub mod route_resolver;
pub mod session;
pub mod tab;
pub mod tabs_state;

pub use config::{load_config, NavigationConfig};
pub use content_cache::{ContentCache, Loadable, Populate, Slot, SlotId};
pub use error::NavigationError;
pub use history::{sync_address, AddressBar};
pub use nav_tree::{find_title, parse_nav_tree, resolve_title, NavNode};
pub use route_resolver::RouteRegistry;
pub use session::{Activation, NavigationSession};
pub use tab::{compose_address, generate_key, split_address, TabItem, TabKey};
pub use tabs_state::{Closed, TabsState};
