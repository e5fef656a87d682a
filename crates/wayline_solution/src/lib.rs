pub mod response;
pub mod routes;
pub mod table;
pub mod timestamp;
