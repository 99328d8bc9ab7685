pub mod health;
pub mod route;
pub mod component;
pub mod menu;

pub use health::health_handler;
pub use route::{get_route_handler, list_routes_handler};
pub use component::component_handler;
pub use menu::menu_handler;
