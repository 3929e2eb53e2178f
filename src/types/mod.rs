pub mod app_state;
pub mod booking;
pub mod forms;
pub mod page_state;
