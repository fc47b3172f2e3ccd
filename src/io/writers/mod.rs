pub mod html;
pub mod json;
pub mod theme;

pub use html::HtmlWriter;
pub use json::JsonWriter;
pub use theme::Theme;
