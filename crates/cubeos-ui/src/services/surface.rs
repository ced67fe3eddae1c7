//! Document-root theme surface.

use crate::core::platform::ThemeSurface;
use gloo::console;
use gloo::utils::document_element;

/// [`ThemeSurface`] writing to `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

impl ThemeSurface for DocumentSurface {
    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = document_element().set_attribute(name, value) {
            console::error!("theme attribute update failed", name.to_string(), err);
        }
    }

    fn set_class(&self, class: &str, enabled: bool) {
        if let Err(err) = document_element()
            .class_list()
            .toggle_with_force(class, enabled)
        {
            console::error!("theme class update failed", class.to_string(), err);
        }
    }
}
