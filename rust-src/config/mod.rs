//! Configuration and settings for the salary dashboard.

mod settings;

pub use settings::{
    default_export_path,
    DATA_ENV_VAR,
    BIND_ENV_VAR,
    DEFAULT_BIND_ADDR,
    DEFAULT_DATA_FILE,
    PAGE_SUBTITLE,
    PAGE_TITLE,
    PLOTLY_CDN,
    SERVICE_NAME,
};
