pub mod clear_history;
pub mod get_favorite_status;
pub mod get_favorites;
pub mod get_history;
pub mod record_view;
pub mod toggle_favorite;
