/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Default page size for list requests (API maximum)
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Page size for workspace probes; only the envelope or a single item is needed
    pub const PROBE_PAGE_SIZE: u32 = 1;

    /// Maximum concurrent page requests when following pagination
    pub const MAX_CONCURRENT_PAGE_REQUESTS: usize = 10;

    /// JSON:API content type sent with every request
    pub const CONTENT_TYPE: &str = "application/vnd.api+json";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable consulted first (also bound to `--token`)
    pub const ADMIN_TOKEN_ENV_VAR: &str = "TFE_ADMIN_TOKEN";

    /// Fallback environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["TFE_TOKEN", "TFC_TOKEN", "HCP_TOKEN"];

    /// Credentials file name
    pub const FILE_NAME: &str = "terraform.d/credentials.tfrc.json";

    /// Path to Terraform credentials file on Unix (relative to HOME)
    pub const FILE_PATH_UNIX: &str = ".terraform.d/credentials.tfrc.json";
}

/// Report file settings
pub mod report {
    /// chrono format for the report file name
    pub const FILE_NAME_FORMAT: &str = "workspace_report_%Y%m%d_%H%M%S.csv";

    /// Error text recorded for organizations the API reports as missing
    pub const NOT_FOUND_MESSAGE: &str = "organization not found";

    /// Error text recorded for organizations skipped after cancellation
    pub const CANCELLED_MESSAGE: &str = "skipped: run cancelled";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "info";

    /// Default number of organizations processed concurrently
    pub const MAX_WORKERS: usize = 5;

    /// Default directory for the CSV report
    pub const OUTPUT_DIR: &str = ".";
}
