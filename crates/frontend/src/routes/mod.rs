pub mod page;
pub mod routes;
