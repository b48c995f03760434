//! Application constants for the API configuration inspector
//!
//! Centralizes file names, environment variables and output markers,
//! organized by functional domain.

/// Environment variable names
pub mod env {
    /// Overrides the path of the API configuration document
    pub const API_CONFIG_PATH: &str = "WG_API_CONFIG";
}

/// File name and location constants
pub mod files {
    /// Default name of the generated API configuration document
    pub const DEFAULT_API_CONFIG: &str = "wundergraph.config.json";

    /// Project-local tool configuration file
    pub const LOCAL_TOOL_CONFIG: &str = "apiconfig.toml";

    /// Directory under the user config dir holding the tool configuration
    pub const TOOL_CONFIG_DIR: &str = "apiconfig";

    /// Tool configuration file name inside [`TOOL_CONFIG_DIR`]
    pub const TOOL_CONFIG_FILE: &str = "config.toml";
}

/// Code generation constants
pub mod codegen {
    /// Separator used when rendering role definitions as a union type
    pub const ROLE_UNION_SEPARATOR: &str = " | ";
}

/// Process exit codes used by the CLI
pub mod exit {
    /// Command succeeded
    pub const SUCCESS: i32 = 0;

    /// Command failed with an error
    pub const FAILURE: i32 = 1;

    /// `check` ran successfully but cookie auth is disabled
    pub const COOKIE_AUTH_DISABLED: i32 = 2;
}

// Re-export commonly used constants at module level for convenience
pub use env::API_CONFIG_PATH as ENV_API_CONFIG_PATH;
pub use files::DEFAULT_API_CONFIG;
