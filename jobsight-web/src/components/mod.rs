pub mod loading;
pub mod tag_input;
pub mod toast;
