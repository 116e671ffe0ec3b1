pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod http_client;
pub mod notifier;
pub mod page_frame;
pub mod page_standard;
