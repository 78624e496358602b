//! Scans domain: scan definitions, lifecycle control and timezones.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::{from_epoch_secs, int_bool};

// ─── ScanStatus ──────────────────────────────────────────────────────────────

/// Status of the most recent run of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Empty,
    Pending,
    Initializing,
    Running,
    Pausing,
    Paused,
    Resuming,
    Stopping,
    Canceled,
    Aborted,
    Completed,
    Imported,
    Processing,
    #[serde(other)]
    Other,
}

impl ScanStatus {
    /// Whether a run is in flight (a new launch would be rejected).
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ScanStatus::Pending
                | ScanStatus::Initializing
                | ScanStatus::Running
                | ScanStatus::Pausing
                | ScanStatus::Paused
                | ScanStatus::Resuming
                | ScanStatus::Stopping
                | ScanStatus::Processing
        )
    }
}

// ─── Scan ────────────────────────────────────────────────────────────────────

/// A scan as listed by `GET scans`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scan {
    pub id: u64,
    #[serde(default)]
    pub uuid: Option<String>,
    pub name: String,
    #[serde(default = "default_status")]
    pub status: ScanStatus,
    #[serde(default)]
    pub folder_id: Option<u64>,
    #[serde(default, deserialize_with = "int_bool::deserialize")]
    pub read: bool,
    #[serde(default, deserialize_with = "int_bool::deserialize")]
    pub enabled: bool,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub creation_date: Option<i64>,
    #[serde(default)]
    pub last_modification_date: Option<i64>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub rrules: Option<String>,
    #[serde(default)]
    pub starttime: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_status() -> ScanStatus {
    ScanStatus::Empty
}

impl Scan {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.creation_date.and_then(from_epoch_secs)
    }

    pub fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        self.last_modification_date.and_then(from_epoch_secs)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScansResponse {
    /// `null` when the folder holds no scans.
    #[serde(default)]
    pub scans: Option<Vec<Scan>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScanEnvelope {
    pub scan: Scan,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LaunchResponse {
    pub scan_uuid: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TimezonesResponse {
    #[serde(default)]
    pub timezones: Vec<Timezone>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Timezone {
    pub value: String,
}

// ─── ScanCreate ──────────────────────────────────────────────────────────────

/// Settings for a new scan. `template_uuid` comes from the editor templates.
#[derive(Debug, Clone, Default)]
pub struct ScanCreate {
    pub template_uuid: String,
    pub name: String,
    pub targets: Vec<String>,
    pub description: Option<String>,
    pub folder_id: Option<u64>,
    pub scanner_id: Option<String>,
    pub policy_id: Option<u64>,
    pub emails: Vec<String>,
    pub enabled: bool,
    pub timezone: Option<String>,
    pub rrules: Option<String>,
    pub starttime: Option<String>,
}

impl ScanCreate {
    pub fn new(template_uuid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            template_uuid: template_uuid.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = targets.into_iter().map(Into::into).collect();
        self
    }

    pub fn folder_id(mut self, id: u64) -> Self {
        self.folder_id = Some(id);
        self
    }

    pub fn scanner_id(mut self, id: impl Into<String>) -> Self {
        self.scanner_id = Some(id.into());
        self
    }

    pub fn policy_id(mut self, id: u64) -> Self {
        self.policy_id = Some(id);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Addresses notified when a run finishes.
    pub fn emails<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emails = emails.into_iter().map(Into::into).collect();
        self
    }

    /// Enable the schedule, e.g. `schedule("UTC", "FREQ=WEEKLY;INTERVAL=1;BYDAY=MO", "20240101T030000")`.
    pub fn schedule(
        mut self,
        timezone: impl Into<String>,
        rrules: impl Into<String>,
        starttime: impl Into<String>,
    ) -> Self {
        self.enabled = true;
        self.timezone = Some(timezone.into());
        self.rrules = Some(rrules.into());
        self.starttime = Some(starttime.into());
        self
    }

    /// The `POST scans` body: `{"uuid": ..., "settings": {...}}`.
    pub(crate) fn to_payload(&self) -> serde_json::Value {
        let mut settings = serde_json::Map::new();
        settings.insert("name".into(), self.name.clone().into());
        settings.insert("enabled".into(), self.enabled.into());
        if !self.targets.is_empty() {
            settings.insert("text_targets".into(), self.targets.join(",").into());
        }
        if let Some(d) = &self.description {
            settings.insert("description".into(), d.clone().into());
        }
        if let Some(id) = self.folder_id {
            settings.insert("folder_id".into(), id.into());
        }
        if let Some(id) = &self.scanner_id {
            settings.insert("scanner_id".into(), id.clone().into());
        }
        if let Some(id) = self.policy_id {
            settings.insert("policy_id".into(), id.into());
        }
        if !self.emails.is_empty() {
            settings.insert("emails".into(), self.emails.join(",").into());
        }
        if let Some(tz) = &self.timezone {
            settings.insert("timezone".into(), tz.clone().into());
        }
        if let Some(r) = &self.rrules {
            settings.insert("rrules".into(), r.clone().into());
        }
        if let Some(s) = &self.starttime {
            settings.insert("starttime".into(), s.clone().into());
        }
        serde_json::json!({
            "uuid": self.template_uuid,
            "settings": settings,
        })
    }
}
