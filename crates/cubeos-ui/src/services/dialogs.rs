//! Native confirmation dialog.

use crate::core::platform::{ConfirmDialog, ConfirmRequest};
use async_trait::async_trait;

/// [`ConfirmDialog`] backed by `window.confirm`; the variant leads the text.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

#[async_trait(?Send)]
impl ConfirmDialog for BrowserConfirm {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        gloo::dialogs::confirm(&request.prompt_text())
    }
}
