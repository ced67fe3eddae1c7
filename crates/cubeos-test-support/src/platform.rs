//! In-memory fakes for the browser seams.

use async_trait::async_trait;
use cubeos_ui::core::platform::{
    ConfirmDialog, ConfirmRequest, KeyValueStore, SessionEvents, ThemeSurface,
};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

/// [`KeyValueStore`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Storage pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.set(key, value);
        storage
    }

    /// Current value for `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// [`ThemeSurface`] that records what was applied.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    attributes: RefCell<HashMap<String, String>>,
    classes: RefCell<HashSet<String>>,
    attribute_writes: Cell<usize>,
}

impl RecordingSurface {
    /// Current value of attribute `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    /// Whether `class` is currently set.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    /// Number of attribute writes so far.
    #[must_use]
    pub fn attribute_writes(&self) -> usize {
        self.attribute_writes.get()
    }
}

impl ThemeSurface for RecordingSurface {
    fn set_attribute(&self, name: &str, value: &str) {
        self.attribute_writes.set(self.attribute_writes.get() + 1);
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn set_class(&self, class: &str, enabled: bool) {
        let mut classes = self.classes.borrow_mut();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }
}

/// [`ConfirmDialog`] with a fixed answer that records every prompt.
#[derive(Debug)]
pub struct ScriptedConfirm {
    answer: Cell<bool>,
    prompts: RefCell<Vec<ConfirmRequest>>,
}

impl ScriptedConfirm {
    /// Dialog that always answers `answer`.
    #[must_use]
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Cell::new(answer),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Change the scripted answer.
    pub fn set_answer(&self, answer: bool) {
        self.answer.set(answer);
    }

    /// Prompts shown so far.
    #[must_use]
    pub fn prompts(&self) -> Vec<ConfirmRequest> {
        self.prompts.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ConfirmDialog for ScriptedConfirm {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        self.prompts.borrow_mut().push(request);
        self.answer.get()
    }
}

/// [`SessionEvents`] that counts notifications and runs an optional hook.
#[derive(Default)]
pub struct RecordingEvents {
    expired: Cell<usize>,
    hook: RefCell<Option<Box<dyn Fn()>>>,
}

impl RecordingEvents {
    /// Number of expiry notifications.
    #[must_use]
    pub fn expired_count(&self) -> usize {
        self.expired.get()
    }

    /// Run `hook` on every expiry notification (stands in for the window event).
    pub fn on_expired(&self, hook: impl Fn() + 'static) {
        *self.hook.borrow_mut() = Some(Box::new(hook));
    }
}

impl SessionEvents for RecordingEvents {
    fn session_expired(&self) {
        self.expired.set(self.expired.get() + 1);
        if let Some(hook) = self.hook.borrow().as_ref() {
            hook();
        }
    }
}
