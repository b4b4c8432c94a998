//! Default values and functions for configuration

// Default constants
pub(crate) const DEFAULT_STORE_PROVIDER: &str = "chroma";
pub(crate) const DEFAULT_STORE_HOST: &str = "localhost";

pub(crate) fn default_store_provider() -> String {
    DEFAULT_STORE_PROVIDER.to_string()
}

pub(crate) fn default_store_host() -> String {
    DEFAULT_STORE_HOST.to_string()
}

pub(crate) fn default_store_port() -> u16 {
    8000
}

pub(crate) fn default_timeout_ms() -> u64 {
    30_000
}

pub(crate) fn default_page_limit() -> usize {
    1000
}

pub(crate) fn default_doc_preview_chars() -> usize {
    200
}
