/// Errors returned by the template registry.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No conversation template is registered under the given name.
    #[error("conversation template not found: {0}")]
    TemplateNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
