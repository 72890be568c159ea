pub mod alert_dialog;
pub mod header;
pub mod help_bar;
pub mod loading_indicator;
pub mod logout_confirmation;
pub mod popup;
pub mod text_input;
