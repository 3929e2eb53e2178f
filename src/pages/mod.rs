pub mod lazy_view;
pub mod route_table;
pub mod views;
