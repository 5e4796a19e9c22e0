//! Mail report section and template resolution

use serde::{Deserialize, Serialize};

/// The `[mailreport]` section
///
/// `mailfrom`, `mailto`, `subject` and `mailhost` are templates that may
/// reference `%(hostname)s` and `%(user)s`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailReportConfig {
    #[serde(default = "default_report", deserialize_with = "crate::flag::deserialize")]
    pub report: bool,
    /// Overrides the detected host name
    #[serde(default)]
    pub hostname: Option<String>,
    /// Overrides the detected user name
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default = "default_mailfrom")]
    pub mailfrom: String,
    #[serde(default = "default_mailto")]
    pub mailto: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_mailhost")]
    pub mailhost: String,
}

impl Default for MailReportConfig {
    fn default() -> Self {
        Self {
            report: default_report(),
            hostname: None,
            user: None,
            mailfrom: default_mailfrom(),
            mailto: default_mailto(),
            subject: default_subject(),
            mailhost: default_mailhost(),
        }
    }
}

/// Mail settings with all templates expanded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub mailhost: String,
}

impl MailReportConfig {
    /// Expand the templates using the configured or detected identity
    #[must_use]
    pub fn resolve(&self) -> MailSettings {
        let hostname = self.hostname.clone().unwrap_or_else(detect_hostname);
        let user = self.user.clone().unwrap_or_else(detect_user);
        let expand = |template: &str| expand_template(template, &hostname, &user);

        MailSettings {
            from: expand(&self.mailfrom),
            to: expand(&self.mailto),
            subject: expand(&self.subject),
            mailhost: expand(&self.mailhost),
        }
    }
}

/// Substitute `%(hostname)s` and `%(user)s` in `template`
#[must_use]
pub fn expand_template(template: &str, hostname: &str, user: &str) -> String {
    template
        .replace("%(hostname)s", hostname)
        .replace("%(user)s", user)
}

fn detect_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "localhost".to_string())
}

fn detect_user() -> String {
    whoami::username().unwrap_or_else(|_| "root".to_string())
}

fn default_report() -> bool {
    true
}

fn default_mailfrom() -> String {
    "%(user)s@%(hostname)s".to_string()
}

fn default_mailto() -> String {
    "root@%(hostname)s".to_string()
}

fn default_subject() -> String {
    "auto-patch %(hostname)s".to_string()
}

fn default_mailhost() -> String {
    "localhost".to_string()
}
