//! Runtime failure kinds.

/// Result type for component runtime operations.
pub type Result<T> = std::result::Result<T, ComponentError>;

/// Fatal failures of the component runtime.
///
/// Everything else the runtime encounters (a missing optional metadata
/// entry point, missing non-version metadata keys, unload irregularities)
/// is recovered locally and reported through diagnostics only.
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    /// The identifier could not be resolved by the locator, or the resolved
    /// image could not be loaded. The module is left unbound.
    #[error("component not found: {id} ({reason})")]
    ComponentNotFound { id: String, reason: String },

    /// The image loaded but exports no usable construction entry point. The
    /// module stays bound; its metadata remains inspectable.
    #[error("no component factory in module {id}")]
    FactoryNotFound { id: String },
}
