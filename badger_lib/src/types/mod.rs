//! Typed request and response records for the Honeybadger API.

mod account;
mod check_in;
mod comment;
mod common;
mod dashboard;
mod deployment;
mod environment;
mod project;
mod status_page;
mod team;
mod uptime;

pub use account::{Account, AccountInvitation, AccountInvitationParams, AccountUser};
pub use check_in::{CheckIn, CheckInBulkResult, CheckInBulkUpdateResponse, CheckInParams};
pub use comment::Comment;
pub use common::{DeleteResult, FlexibleId, ListResponse, Number, PaginationLinks, UpdateResult};
pub use dashboard::{Dashboard, DashboardRequest};
pub use deployment::Deployment;
pub use environment::{Environment, EnvironmentParams};
pub use project::{BacktraceEntry, Fault, Notice, NoticeEnvironment, NoticeRequest, Project, User};
pub use status_page::{StatusPage, StatusPageParams};
pub use team::{Team, TeamInvitation, TeamInvitationParams, TeamMember};
pub use uptime::{Outage, RequestHeader, Site, SiteParams, UptimeCheck};

pub(crate) use account::{AccountInvitationRequest, AccountUserUpdateRequest, RoleParams};
pub(crate) use check_in::{CheckInBulkRequest, CheckInRequest};
pub(crate) use comment::{CommentBody, CommentRequest};
pub(crate) use common::null_as_default;
pub(crate) use dashboard::DashboardEnvelope;
pub(crate) use environment::EnvironmentRequest;
pub(crate) use status_page::StatusPageRequest;
pub(crate) use team::{
    TeamInvitationRequest, TeamMemberAdmin, TeamMemberUpdateRequest, TeamName, TeamRequest,
};
pub(crate) use uptime::SiteRequest;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;

    fn decode<T: DeserializeOwned>(json: &str) -> T {
        match serde_json::from_str(json) {
            Ok(value) => value,
            Err(err) => panic!("{} failed to decode: {}", json, err),
        }
    }

    #[test]
    fn null_plain_fields_decode_as_zero_values() {
        let comment: Comment = decode(
            r#"{"id": 1, "fault_id": null, "event": null, "source": null,
                "notices_count": null, "author": null, "body": null}"#,
        );
        assert_eq!(comment.id, 1);
        assert_eq!(comment.body, "");
        assert_eq!(comment.notices_count, 0);

        let account: Account = decode(r#"{"id": null, "email": null, "name": null}"#);
        assert_eq!(account.id, "");
        assert_eq!(account.name, "");

        let user: AccountUser = decode(r#"{"id": 3, "role": null, "name": null, "email": null}"#);
        assert_eq!(user.id, 3);
        assert_eq!(user.role, "");

        let invitation: AccountInvitation =
            decode(r#"{"id": null, "token": null, "email": null, "role": null, "team_ids": null}"#);
        assert_eq!(invitation.id, 0);
        assert!(invitation.team_ids.is_empty());

        let site: Site = decode(
            r#"{"id": "s1", "active": null, "frequency": null, "match": null,
                "match_type": null, "name": null, "state": null, "url": null}"#,
        );
        assert_eq!(site.id, "s1");
        assert!(!site.active);
        assert_eq!(site.match_type, "");

        let deploy: Deployment = decode(r#"{"id": 7, "project_id": null, "environment": null}"#);
        assert_eq!(deploy.id, 7);
        assert_eq!(deploy.project_id, 0);
    }

    #[test]
    fn null_plain_fields_decode_for_every_record() {
        let check_in: CheckIn = decode(
            r#"{"id": null, "name": null, "slug": null,
                "schedule_type": null, "project_id": null}"#,
        );
        assert_eq!(check_in.slug, "");

        let bulk: CheckInBulkUpdateResponse = decode(
            r#"{"create": null, "update": [{"success": null, "slug": null}], "delete": null}"#,
        );
        assert!(bulk.create.is_empty());
        assert!(!bulk.update[0].success);

        let dashboard: Dashboard = decode(
            r#"{"id": null, "title": null, "widgets": null, "is_default": null,
                "shared": null, "project_id": null}"#,
        );
        assert!(dashboard.widgets.is_empty());

        let environment: Environment =
            decode(r#"{"id": 2, "project_id": null, "name": null, "notifications": null}"#);
        assert!(!environment.notifications);

        let status_page: StatusPage = decode(
            r#"{"id": null, "name": null, "account_id": null, "url": null,
                "sites": null, "check_ins": null}"#,
        );
        assert_eq!(status_page.account_id, "");

        let team: Team = decode(r#"{"id": null, "name": null}"#);
        assert_eq!(team.name, "");
        let member: TeamMember = decode(r#"{"id": 1, "name": null, "email": null, "admin": null}"#);
        assert!(!member.admin);
        let team_invitation: TeamInvitation =
            decode(r#"{"id": 1, "token": null, "email": null, "admin": null}"#);
        assert_eq!(team_invitation.token, "");

        let outage: Outage = decode(r#"{"reason": null, "up_at": null}"#);
        assert!(outage.is_ongoing());
        let check: UptimeCheck = decode(r#"{"duration": null, "location": null, "up": null}"#);
        assert_eq!(check.duration, 0);

        let project: Project = decode(
            r#"{"id": 1, "name": null, "active": null, "environments": null,
                "fault_count": null, "token": null, "sites": null, "teams": null, "users": null}"#,
        );
        assert!(project.sites.is_empty());

        let fault: Fault = decode(r#"{"id": 5, "klass": null, "tags": null, "url": null}"#);
        assert!(fault.tags.is_empty());

        let notice: Notice = decode(
            r#"{"id": null, "environment": null, "request": null, "message": null,
                "backtrace": [{"number": null, "file": null, "method": null, "args": null}],
                "application_trace": null}"#,
        );
        assert_eq!(notice.backtrace[0].number, Number(0));
        assert!(notice.application_trace.is_empty());
        assert!(notice.request.url.is_none());
    }
}
