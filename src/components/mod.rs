pub mod auth;
pub mod dashboard;
pub mod history;
pub mod layout;
pub mod widgets;
