pub mod create_todont;
pub mod delete_todont;
pub mod get_todont;
pub mod list_todonts;
pub mod toggle_todont;
pub mod update_todont;
