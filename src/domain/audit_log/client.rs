//! Audit log sub-client.

use crate::client::TenableIo;
use crate::domain::audit_log::{AuditEvent, EventFilter, EventsResponse, FILTER_OPERATORS, MAX_EVENTS};
use crate::error::SdkError;
use crate::validation::{check_choice, check_not_empty, check_range};

pub struct AuditLog<'a> {
    pub(crate) client: &'a TenableIo,
}

impl<'a> AuditLog<'a> {
    /// Audit events matching every filter, newest first.
    pub async fn events(
        &self,
        filters: &[EventFilter],
        limit: Option<u32>,
    ) -> Result<Vec<AuditEvent>, SdkError> {
        let query = build_events_query(filters, limit)?;
        let resp: EventsResponse = self
            .client
            .session
            .get("audit-log/v1/events", &query)
            .await?;
        Ok(resp.events)
    }
}

fn build_events_query(
    filters: &[EventFilter],
    limit: Option<u32>,
) -> Result<Vec<(&'static str, String)>, SdkError> {
    let mut query = Vec::with_capacity(filters.len() + 1);
    for filter in filters {
        check_not_empty("filter field", &filter.field)?;
        check_choice("filter operator", &filter.operator.as_str(), &FILTER_OPERATORS)?;
        query.push(("f", filter.to_query()));
    }
    if let Some(limit) = limit {
        check_range("limit", limit, 1, MAX_EVENTS)?;
        query.push(("limit", limit.to_string()));
    }
    Ok(query)
}
