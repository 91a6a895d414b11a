//! Page context: the current route and per-page override data.

mod lookup;
mod route;

pub use lookup::{PageLookup, lookup_page};
pub use route::{RouteProvider, normalize_route, route_segments, segment_title};
