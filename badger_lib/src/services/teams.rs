use reqwest::Method;

use super::segment;
use crate::client::Client;
use crate::error::Error;
use crate::types::{
    ListResponse, Team, TeamInvitation, TeamInvitationParams, TeamInvitationRequest,
    TeamMember, TeamMemberAdmin, TeamMemberUpdateRequest, TeamName, TeamRequest,
};

/// Teams, team members, and team invitations.
///
/// Teams are listed and created through the account they belong to
/// (`?account_id=`); every other call addresses the team by its own id.
#[derive(Debug, Clone, Copy)]
pub struct TeamsService<'a> {
    client: &'a Client,
}

impl<'a> TeamsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, account_id: &str) -> Result<ListResponse<Team>, Error> {
        self.client.get(&scoped_to_account(account_id)).await
    }

    pub async fn get(&self, team_id: u64) -> Result<Team, Error> {
        self.client.get(&team_path(team_id)).await
    }

    pub async fn create(&self, account_id: &str, name: &str) -> Result<Team, Error> {
        let body = TeamRequest {
            team: TeamName { name },
        };
        self.client
            .send_json(Method::POST, &scoped_to_account(account_id), &body)
            .await
    }

    /// Rename a team. The server answers 204 No Content.
    pub async fn update(&self, team_id: u64, name: &str) -> Result<(), Error> {
        let body = TeamRequest {
            team: TeamName { name },
        };
        self.client
            .send_no_content(Method::PUT, &team_path(team_id), &body)
            .await
    }

    pub async fn delete(&self, team_id: u64) -> Result<(), Error> {
        self.client.delete(&team_path(team_id)).await
    }

    pub async fn list_members(&self, team_id: u64) -> Result<ListResponse<TeamMember>, Error> {
        self.client
            .get(&format!("/teams/{}/team_members", team_id))
            .await
    }

    /// Grant or revoke team admin rights.
    pub async fn update_member(
        &self,
        team_id: u64,
        member_id: u64,
        admin: bool,
    ) -> Result<(), Error> {
        let body = TeamMemberUpdateRequest {
            team_member: TeamMemberAdmin { admin },
        };
        self.client
            .send_no_content(Method::PUT, &member_path(team_id, member_id), &body)
            .await
    }

    pub async fn remove_member(&self, team_id: u64, member_id: u64) -> Result<(), Error> {
        self.client.delete(&member_path(team_id, member_id)).await
    }

    pub async fn list_invitations(
        &self,
        team_id: u64,
    ) -> Result<ListResponse<TeamInvitation>, Error> {
        self.client
            .get(&format!("/teams/{}/team_invitations", team_id))
            .await
    }

    pub async fn get_invitation(
        &self,
        team_id: u64,
        invitation_id: u64,
    ) -> Result<TeamInvitation, Error> {
        self.client
            .get(&invitation_path(team_id, invitation_id))
            .await
    }

    pub async fn create_invitation(
        &self,
        team_id: u64,
        params: &TeamInvitationParams,
    ) -> Result<TeamInvitation, Error> {
        let path = format!("/teams/{}/team_invitations", team_id);
        let body = TeamInvitationRequest {
            team_invitation: params,
        };
        self.client.send_json(Method::POST, &path, &body).await
    }

    pub async fn update_invitation(
        &self,
        team_id: u64,
        invitation_id: u64,
        params: &TeamInvitationParams,
    ) -> Result<(), Error> {
        let body = TeamInvitationRequest {
            team_invitation: params,
        };
        self.client
            .send_no_content(Method::PUT, &invitation_path(team_id, invitation_id), &body)
            .await
    }

    pub async fn delete_invitation(&self, team_id: u64, invitation_id: u64) -> Result<(), Error> {
        self.client
            .delete(&invitation_path(team_id, invitation_id))
            .await
    }
}

fn scoped_to_account(account_id: &str) -> String {
    format!("/teams?account_id={}", segment(account_id))
}

fn team_path(team_id: u64) -> String {
    format!("/teams/{}", team_id)
}

fn member_path(team_id: u64, member_id: u64) -> String {
    format!("/teams/{}/team_members/{}", team_id, member_id)
}

fn invitation_path(team_id: u64, invitation_id: u64) -> String {
    format!("/teams/{}/team_invitations/{}", team_id, invitation_id)
}
