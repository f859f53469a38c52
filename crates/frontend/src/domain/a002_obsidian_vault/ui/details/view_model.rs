use super::draft::ObsidianConnectorDraft;
use super::model;
use crate::domain::a001_connector::api as connector_api;
use crate::shared::state::request_guard::RequestGuard;
use contracts::domain::a002_obsidian_vault::VaultPreview;
use leptos::prelude::*;

/// ViewModel for the Obsidian connector setup form
///
/// Uses simplified MVVM pattern:
/// - Form data stored directly as ObsidianConnectorDraft
/// - Commands for the async operations (preview, create)
/// - Preview and create each hold their own in-flight slot, so a
///   double-click cannot launch two overlapping requests
#[derive(Clone)]
pub struct AddObsidianConnectorVm {
    pub form: RwSignal<ObsidianConnectorDraft>,
    pub preview: RwSignal<Option<VaultPreview>>,
    /// The shown preview no longer matches the edited path list.
    pub preview_stale: RwSignal<bool>,
    pub preview_error: RwSignal<Option<String>>,
    pub submit_error: RwSignal<Option<String>>,
    /// Transient success banner; cleared automatically.
    pub notice: RwSignal<Option<String>>,
    pub is_previewing: RwSignal<bool>,
    pub is_submitting: RwSignal<bool>,
    preview_guard: RwSignal<RequestGuard>,
    submit_guard: RwSignal<RequestGuard>,
    notice_seq: RwSignal<u64>,
    access_token: Signal<Option<String>>,
}

impl AddObsidianConnectorVm {
    pub fn new(access_token: Signal<Option<String>>) -> Self {
        Self {
            form: RwSignal::new(ObsidianConnectorDraft::default()),
            preview: RwSignal::new(None),
            preview_stale: RwSignal::new(false),
            preview_error: RwSignal::new(None),
            submit_error: RwSignal::new(None),
            notice: RwSignal::new(None),
            is_previewing: RwSignal::new(false),
            is_submitting: RwSignal::new(false),
            preview_guard: RwSignal::new(RequestGuard::new()),
            submit_guard: RwSignal::new(RequestGuard::new()),
            notice_seq: RwSignal::new(0),
            access_token,
        }
    }

    pub fn add_path(&self) {
        self.form.update(|f| f.add_path());
        self.mark_preview_stale();
    }

    pub fn remove_path(&self, index: usize) {
        self.form.update(|f| f.remove_path(index));
        self.mark_preview_stale();
    }

    pub fn update_path(&self, index: usize, value: String) {
        self.form.update(|f| f.update_path(index, value));
        self.mark_preview_stale();
    }

    /// Editing paths does not clear a loaded preview; it is only flagged
    /// so the user can see it no longer matches the form.
    fn mark_preview_stale(&self) {
        if self.preview.with_untracked(|p| p.is_some()) {
            self.preview_stale.set(true);
        }
    }

    /// Fetch vault statistics for the current paths. Side effect only;
    /// submission re-validates on its own.
    pub fn preview_command(&self) {
        let paths = self.form.with_untracked(|f| f.non_empty_paths());
        if paths.is_empty() {
            self.preview_error
                .set(Some("Please enter at least one vault path".to_string()));
            return;
        }

        let Some(token) = self.access_token.get_untracked() else {
            self.preview_error
                .set(Some("Your session has expired. Please sign in again.".to_string()));
            return;
        };

        // Claim the preview slot; a second trigger while one request is
        // running is dropped here, not just greyed out in the UI.
        let Some(ticket) = self.preview_guard.try_update(|g| g.begin()).flatten() else {
            return;
        };

        self.is_previewing.set(true);
        self.preview_error.set(None);

        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::preview_vault_files(&token, paths).await;

            let apply = vm
                .preview_guard
                .try_update(|g| g.finish(ticket))
                .unwrap_or(false);
            vm.is_previewing.set(false);
            if !apply {
                return;
            }

            match result {
                Ok(data) => {
                    let total = data.total_files;
                    vm.preview.set(Some(data));
                    vm.preview_stale.set(false);
                    vm.flash_notice(format!("Found {} vault files", total));
                }
                Err(e) => {
                    log::error!("vault preview failed: {}", e);
                    // Prior preview stays visible next to the banner.
                    vm.preview_error.set(Some(e));
                }
            }
        });
    }

    /// Validate the draft, register the connector, and hand control back
    /// through `on_created`. The draft is left untouched on failure.
    pub fn create_command(&self, on_created: Callback<()>) {
        let dto = match self.form.with_untracked(|f| f.to_create_dto()) {
            Ok(dto) => dto,
            Err(e) => {
                self.submit_error.set(Some(e));
                return;
            }
        };

        let Some(token) = self.access_token.get_untracked() else {
            self.submit_error
                .set(Some("Your session has expired. Please sign in again.".to_string()));
            return;
        };

        let Some(ticket) = self.submit_guard.try_update(|g| g.begin()).flatten() else {
            return;
        };

        self.is_submitting.set(true);
        self.submit_error.set(None);

        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = connector_api::create_connector(&token, &dto).await;

            let apply = vm
                .submit_guard
                .try_update(|g| g.finish(ticket))
                .unwrap_or(false);
            vm.is_submitting.set(false);
            if !apply {
                return;
            }

            match result {
                Ok(()) => on_created.run(()),
                Err(e) => {
                    log::error!("connector creation failed: {}", e);
                    vm.submit_error.set(Some(e));
                }
            }
        });
    }

    /// Show a success banner and clear it after a few seconds, unless a
    /// newer banner replaced it in the meantime.
    fn flash_notice(&self, message: String) {
        let seq = self.notice_seq.get_untracked() + 1;
        self.notice_seq.set(seq);
        self.notice.set(Some(message));

        let notice = self.notice;
        let notice_seq = self.notice_seq;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(4_000).await;
            if notice_seq.get_untracked() == seq {
                notice.set(None);
            }
        });
    }
}
