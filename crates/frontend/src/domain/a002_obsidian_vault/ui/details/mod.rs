//! Obsidian connector setup UI module
//!
//! Simplified MVVM pattern implementation:
//! - draft.rs: form state (path list + name) and its invariants
//! - model.rs: API functions (vault preview)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod draft;
mod model;
mod view;
mod view_model;

pub use draft::ObsidianConnectorDraft;
pub use view::AddObsidianConnectorPage;
pub use view_model::AddObsidianConnectorVm;
