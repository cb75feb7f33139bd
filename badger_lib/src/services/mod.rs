//! Per-resource services. Each method is one request/response round trip.

mod accounts;
mod check_ins;
mod comments;
mod dashboards;
mod deployments;
mod environments;
mod status_pages;
mod teams;
mod uptime;

pub use accounts::AccountsService;
pub use check_ins::CheckInsService;
pub use comments::CommentsService;
pub use dashboards::DashboardsService;
pub use deployments::DeploymentsService;
pub use environments::EnvironmentsService;
pub use status_pages::StatusPagesService;
pub use teams::TeamsService;
pub use uptime::UptimeService;

use std::borrow::Cow;

/// Percent-encode a caller-supplied id for use as one path segment.
pub(crate) fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}
