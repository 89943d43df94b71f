mod error;
mod footer;
mod header;
mod loading;
mod main_content;
mod movie_detail;
mod pagination;
mod splash;
mod toast;
mod ui;

pub use self::ui::ui;
