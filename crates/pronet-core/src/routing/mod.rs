// ── Routing ──
//
// Route values, the per-flow router and the container that maps routes
// to concrete screens.

mod container;
mod route;
mod router;

pub use container::{NavigationContainer, Screen};
pub use route::Route;
pub use router::{NavigationPath, Router};
