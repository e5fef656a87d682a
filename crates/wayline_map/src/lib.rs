pub mod map_elements;
pub mod order_map;
pub mod route_map;
pub mod stop;
pub mod style;
