//! Fixed paths and environment variable names

/// Configuration file read when neither `--config` nor `AUTO_PATCH_CFG` is given
pub const DEFAULT_CONFIG_PATH: &str = "/etc/auto-patch.toml";

/// Colon-separated list of configuration files, read in order
pub const CONFIG_PATH_ENV: &str = "AUTO_PATCH_CFG";

pub const DEFAULT_ZYPPER: &str = "/usr/bin/zypper";

pub const ENV_RETRY_MAX: &str = "AUTO_PATCH_RETRY_MAX";
pub const ENV_RETRY_WAIT: &str = "AUTO_PATCH_RETRY_WAIT";
pub const ENV_MAILREPORT: &str = "AUTO_PATCH_MAILREPORT";
pub const ENV_MAILTO: &str = "AUTO_PATCH_MAILTO";
