pub mod hover_text;

pub use hover_text::ui_hover_text_system;
