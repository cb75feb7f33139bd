use reqwest::Method;

use super::segment;
use crate::client::Client;
use crate::error::Error;
use crate::types::{
    Account, AccountInvitation, AccountInvitationParams, AccountInvitationRequest, AccountUser,
    AccountUserUpdateRequest, ListResponse, RoleParams,
};

/// Accounts, their users, and pending invitations.
#[derive(Debug, Clone, Copy)]
pub struct AccountsService<'a> {
    client: &'a Client,
}

impl<'a> AccountsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List accounts the token can access.
    pub async fn list(&self) -> Result<ListResponse<Account>, Error> {
        self.client.get("/accounts").await
    }

    /// Get one account, including quota and API usage stats.
    pub async fn get(&self, account_id: &str) -> Result<Account, Error> {
        self.client
            .get(&format!("/accounts/{}", segment(account_id)))
            .await
    }

    pub async fn list_users(&self, account_id: &str) -> Result<Vec<AccountUser>, Error> {
        self.client
            .get(&format!("/accounts/{}/users", segment(account_id)))
            .await
    }

    pub async fn get_user(&self, account_id: &str, user_id: u64) -> Result<AccountUser, Error> {
        self.client
            .get(&user_path(account_id, user_id))
            .await
    }

    /// Change a user's role (Member, Billing, Admin, Owner).
    pub async fn update_user(
        &self,
        account_id: &str,
        user_id: u64,
        role: &str,
    ) -> Result<AccountUser, Error> {
        let body = AccountUserUpdateRequest {
            user: RoleParams { role },
        };
        self.client
            .send_json(Method::PUT, &user_path(account_id, user_id), &body)
            .await
    }

    pub async fn remove_user(&self, account_id: &str, user_id: u64) -> Result<(), Error> {
        self.client.delete(&user_path(account_id, user_id)).await
    }

    pub async fn list_invitations(
        &self,
        account_id: &str,
    ) -> Result<Vec<AccountInvitation>, Error> {
        self.client
            .get(&format!("/accounts/{}/invitations", segment(account_id)))
            .await
    }

    pub async fn get_invitation(
        &self,
        account_id: &str,
        invitation_id: u64,
    ) -> Result<AccountInvitation, Error> {
        self.client
            .get(&invitation_path(account_id, invitation_id))
            .await
    }

    pub async fn create_invitation(
        &self,
        account_id: &str,
        params: &AccountInvitationParams,
    ) -> Result<AccountInvitation, Error> {
        let path = format!("/accounts/{}/invitations", segment(account_id));
        let body = AccountInvitationRequest { invitation: params };
        self.client.send_json(Method::POST, &path, &body).await
    }

    pub async fn update_invitation(
        &self,
        account_id: &str,
        invitation_id: u64,
        params: &AccountInvitationParams,
    ) -> Result<AccountInvitation, Error> {
        let body = AccountInvitationRequest { invitation: params };
        self.client
            .send_json(
                Method::PUT,
                &invitation_path(account_id, invitation_id),
                &body,
            )
            .await
    }

    pub async fn delete_invitation(
        &self,
        account_id: &str,
        invitation_id: u64,
    ) -> Result<(), Error> {
        self.client
            .delete(&invitation_path(account_id, invitation_id))
            .await
    }
}

fn user_path(account_id: &str, user_id: u64) -> String {
    format!("/accounts/{}/users/{}", segment(account_id), user_id)
}

fn invitation_path(account_id: &str, invitation_id: u64) -> String {
    format!(
        "/accounts/{}/invitations/{}",
        segment(account_id),
        invitation_id
    )
}
