use crate::pages::{route_table::RouteTable, views::Views};

#[derive(Clone)]
pub struct AppState {
    pub route_table: RouteTable,
    pub views: Views,
}
