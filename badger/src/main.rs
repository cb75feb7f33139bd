//! Honeybadger CLI: manage accounts, check-ins, deploys, uptime sites, and teams.

mod output;

use std::process::ExitCode;
use std::time::Duration;

use badger_lib::types::{CheckInParams, DeleteResult, EnvironmentParams, UpdateResult};
use badger_lib::{
    parse_timestamp, resolve_auth_token, Client, DeploymentListOptions, Error, TimeWindowOptions,
    DEFAULT_BASE_URL,
};
use clap::{Args, Parser, Subcommand};
use output::{OutputFormat, Renderer};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "badger")]
#[command(about = "Honeybadger CLI - manage check-ins, deploys, uptime sites, and teams")]
#[command(long_about = None)]
struct Cli {
    /// Output format: plain (human-readable), json (structured).
    #[arg(short, long, global = true, default_value = "plain")]
    output: OutputFormat,

    /// API host; `/v2` is appended to every request path.
    #[arg(long, global = true, env = "HONEYBADGER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Personal auth token. When unset, a configured password manager is used.
    #[arg(long, global = true, env = "HONEYBADGER_AUTH_TOKEN", hide_env_values = true)]
    auth_token: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    /// Show timestamps in UTC. By default timestamps are shown in the local timezone.
    #[arg(long, global = true)]
    utc: bool,

    /// Log HTTP traffic to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Accounts, account users, and invitations
    #[command(subcommand)]
    Accounts(AccountsCmd),
    /// Scheduled check-ins of a project
    #[command(subcommand)]
    CheckIns(CheckInsCmd),
    /// Comments on a fault
    #[command(subcommand)]
    Comments(CommentsCmd),
    /// Insights dashboards of a project
    #[command(subcommand)]
    Dashboards(DashboardsCmd),
    /// Recorded deploys of a project
    #[command(subcommand)]
    Deploys(DeploysCmd),
    /// Environments of a project
    #[command(subcommand)]
    Environments(EnvironmentsCmd),
    /// Status pages of an account
    #[command(subcommand)]
    StatusPages(StatusPagesCmd),
    /// Teams, members, and invitations
    #[command(subcommand)]
    Teams(TeamsCmd),
    /// Uptime-monitored sites
    #[command(subcommand)]
    Sites(SitesCmd),
    /// Show version
    Version,
}

#[derive(Subcommand)]
enum AccountsCmd {
    /// List accounts
    List,
    /// Show one account with quota usage
    Get { account_id: String },
    /// List account users
    Users { account_id: String },
    /// Show one account user
    User { account_id: String, user_id: u64 },
    /// Change a user's role
    SetRole {
        account_id: String,
        user_id: u64,
        #[arg(value_parser = ["Member", "Billing", "Admin", "Owner"])]
        role: String,
    },
    /// Remove a user from the account
    RemoveUser { account_id: String, user_id: u64 },
    /// List pending invitations
    Invitations { account_id: String },
}

#[derive(Subcommand)]
enum CheckInsCmd {
    /// List check-ins
    List { project_id: u64 },
    /// Show one check-in
    Get { project_id: u64, check_in_id: String },
    /// Create a simple (--report-period) or cron (--cron) check-in
    Create {
        project_id: u64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: Option<String>,
        /// Expected reporting interval, e.g. "1 day"
        #[arg(long, required_unless_present = "cron")]
        report_period: Option<String>,
        /// Cron schedule, e.g. "0 * * * *"
        #[arg(long, conflicts_with = "report_period")]
        cron: Option<String>,
        #[arg(long, requires = "cron")]
        cron_timezone: Option<String>,
        #[arg(long)]
        grace_period: Option<String>,
    },
    /// Delete a check-in
    Delete { project_id: u64, check_in_id: String },
}

#[derive(Subcommand)]
enum CommentsCmd {
    /// List comments on a fault
    List { project_id: u64, fault_id: u64 },
    Get {
        project_id: u64,
        fault_id: u64,
        comment_id: u64,
    },
    /// Add a comment
    Create {
        project_id: u64,
        fault_id: u64,
        body: String,
    },
    /// Replace a comment's body
    Update {
        project_id: u64,
        fault_id: u64,
        comment_id: u64,
        body: String,
    },
    Delete {
        project_id: u64,
        fault_id: u64,
        comment_id: u64,
    },
}

#[derive(Subcommand)]
enum DashboardsCmd {
    List { project_id: u64 },
    Get { project_id: u64, dashboard_id: String },
    Delete { project_id: u64, dashboard_id: String },
}

#[derive(Subcommand)]
enum DeploysCmd {
    /// List deploys, newest first
    List {
        project_id: u64,
        #[command(flatten)]
        filters: DeployFilters,
    },
    Get { project_id: u64, deploy_id: u64 },
    Delete { project_id: u64, deploy_id: u64 },
}

#[derive(Args)]
struct DeployFilters {
    #[arg(long)]
    environment: Option<String>,
    #[arg(long)]
    local_username: Option<String>,
    /// Unix seconds or RFC 3339, after 1970-01-01
    #[arg(long, value_parser = parse_window_bound)]
    created_after: Option<i64>,
    /// Unix seconds or RFC 3339, after 1970-01-01
    #[arg(long, value_parser = parse_window_bound)]
    created_before: Option<i64>,
    /// Page size (max 25)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=25))]
    limit: Option<u32>,
}

impl From<DeployFilters> for DeploymentListOptions {
    fn from(f: DeployFilters) -> Self {
        DeploymentListOptions {
            environment: f.environment,
            local_username: f.local_username,
            created_after: f.created_after,
            created_before: f.created_before,
            limit: f.limit,
        }
    }
}

#[derive(Subcommand)]
enum EnvironmentsCmd {
    List { project_id: u64 },
    Get { project_id: u64, environment_id: u64 },
    /// Create an environment
    Create {
        project_id: u64,
        name: String,
        /// Whether errors in this environment send notifications
        #[arg(long)]
        notifications: Option<bool>,
    },
    Delete { project_id: u64, environment_id: u64 },
}

#[derive(Subcommand)]
enum StatusPagesCmd {
    List { account_id: String },
    Get { account_id: String, status_page_id: String },
    Delete { account_id: String, status_page_id: String },
}

#[derive(Subcommand)]
enum TeamsCmd {
    /// List the teams of an account
    List { account_id: String },
    Get { team_id: u64 },
    Create { account_id: String, name: String },
    Rename { team_id: u64, name: String },
    Delete { team_id: u64 },
    /// List team members
    Members { team_id: u64 },
    /// List pending team invitations
    Invitations { team_id: u64 },
}

#[derive(Subcommand)]
enum SitesCmd {
    List { project_id: u64 },
    Get { project_id: u64, site_id: String },
    Delete { project_id: u64, site_id: String },
    /// Outages of a site
    Outages {
        project_id: u64,
        site_id: String,
        #[command(flatten)]
        window: WindowFilters,
    },
    /// Individual uptime checks of a site
    Checks {
        project_id: u64,
        site_id: String,
        #[command(flatten)]
        window: WindowFilters,
    },
}

#[derive(Args)]
struct WindowFilters {
    /// Unix seconds or RFC 3339, after 1970-01-01
    #[arg(long, value_parser = parse_window_bound)]
    created_after: Option<i64>,
    /// Unix seconds or RFC 3339, after 1970-01-01
    #[arg(long, value_parser = parse_window_bound)]
    created_before: Option<i64>,
    #[arg(long)]
    limit: Option<u32>,
}

impl From<WindowFilters> for TimeWindowOptions {
    fn from(f: WindowFilters) -> Self {
        TimeWindowOptions {
            created_after: f.created_after,
            created_before: f.created_before,
            limit: f.limit,
        }
    }
}

/// Like `parse_timestamp`, but rejects the epoch and anything before it,
/// which the list options would otherwise leave out of the query.
fn parse_window_bound(s: &str) -> Result<i64, String> {
    let secs = parse_timestamp(s)?;
    if secs <= 0 {
        return Err(format!("Timestamp must be after 1970-01-01T00:00:00Z: {}", s.trim()));
    }
    Ok(secs)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if matches!(cli.command, Commands::Version) {
        println!("badger {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let out = Renderer {
        format: cli.output,
        use_utc: cli.utc,
    };
    let result = match connect(&cli) {
        Ok(client) => run(&client, cli.command, out).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", describe(&e));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,badger_lib=debug,badger=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn connect(cli: &Cli) -> Result<Client, Error> {
    let explicit = cli
        .auth_token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let token = match explicit {
        Some(token) => token.to_string(),
        None => {
            let (token, source) = resolve_auth_token()?;
            tracing::debug!(%source, "resolved auth token");
            token
        }
    };

    Client::builder()
        .with_base_url(cli.base_url.clone())
        .with_auth_token(token)
        .with_timeout(Duration::from_secs(cli.timeout))
        .build()
}

/// API errors print as `HTTP <status>: <message>`.
fn describe(err: &Error) -> String {
    match err {
        Error::Api(api) => api.to_string(),
        other => other.to_string(),
    }
}

fn emit<T: Serialize>(out: Renderer, value: &T) -> Result<(), Error> {
    let value = serde_json::to_value(value).map_err(Error::Encode)?;
    println!("{}", out.render(&value).map_err(Error::Encode)?.trim_end());
    Ok(())
}

fn deleted(out: Renderer, message: String) -> Result<(), Error> {
    emit(
        out,
        &DeleteResult {
            success: true,
            message,
        },
    )
}

fn updated(out: Renderer, message: String) -> Result<(), Error> {
    emit(
        out,
        &UpdateResult {
            success: true,
            message,
        },
    )
}

async fn run(client: &Client, cmd: Commands, out: Renderer) -> Result<(), Error> {
    match cmd {
        Commands::Accounts(cmd) => accounts(client, cmd, out).await,
        Commands::CheckIns(cmd) => check_ins(client, cmd, out).await,
        Commands::Comments(cmd) => comments(client, cmd, out).await,
        Commands::Dashboards(cmd) => dashboards(client, cmd, out).await,
        Commands::Deploys(cmd) => deploys(client, cmd, out).await,
        Commands::Environments(cmd) => environments(client, cmd, out).await,
        Commands::StatusPages(cmd) => status_pages(client, cmd, out).await,
        Commands::Teams(cmd) => teams(client, cmd, out).await,
        Commands::Sites(cmd) => sites(client, cmd, out).await,
        Commands::Version => Ok(()),
    }
}

async fn accounts(client: &Client, cmd: AccountsCmd, out: Renderer) -> Result<(), Error> {
    let svc = client.accounts();
    match cmd {
        AccountsCmd::List => emit(out, &svc.list().await?),
        AccountsCmd::Get { account_id } => emit(out, &svc.get(&account_id).await?),
        AccountsCmd::Users { account_id } => emit(out, &svc.list_users(&account_id).await?),
        AccountsCmd::User {
            account_id,
            user_id,
        } => emit(out, &svc.get_user(&account_id, user_id).await?),
        AccountsCmd::SetRole {
            account_id,
            user_id,
            role,
        } => emit(out, &svc.update_user(&account_id, user_id, &role).await?),
        AccountsCmd::RemoveUser {
            account_id,
            user_id,
        } => {
            svc.remove_user(&account_id, user_id).await?;
            deleted(out, format!("User {} removed from account {}", user_id, account_id))
        }
        AccountsCmd::Invitations { account_id } => {
            emit(out, &svc.list_invitations(&account_id).await?)
        }
    }
}

async fn check_ins(client: &Client, cmd: CheckInsCmd, out: Renderer) -> Result<(), Error> {
    let svc = client.check_ins();
    match cmd {
        CheckInsCmd::List { project_id } => emit(out, &svc.list(project_id).await?),
        CheckInsCmd::Get {
            project_id,
            check_in_id,
        } => emit(out, &svc.get(project_id, &check_in_id).await?),
        CheckInsCmd::Create {
            project_id,
            name,
            slug,
            report_period,
            cron,
            cron_timezone,
            grace_period,
        } => {
            let mut params = match cron {
                Some(schedule) => CheckInParams::cron(name, schedule),
                None => CheckInParams::simple(name, report_period.unwrap_or_default()),
            };
            params.slug = slug;
            params.cron_timezone = cron_timezone;
            params.grace_period = grace_period;
            emit(out, &svc.create(project_id, &params).await?)
        }
        CheckInsCmd::Delete {
            project_id,
            check_in_id,
        } => {
            svc.delete(project_id, &check_in_id).await?;
            deleted(out, format!("Check-in {} deleted", check_in_id))
        }
    }
}

async fn comments(client: &Client, cmd: CommentsCmd, out: Renderer) -> Result<(), Error> {
    let svc = client.comments();
    match cmd {
        CommentsCmd::List {
            project_id,
            fault_id,
        } => emit(out, &svc.list(project_id, fault_id).await?),
        CommentsCmd::Get {
            project_id,
            fault_id,
            comment_id,
        } => emit(out, &svc.get(project_id, fault_id, comment_id).await?),
        CommentsCmd::Create {
            project_id,
            fault_id,
            body,
        } => emit(out, &svc.create(project_id, fault_id, &body).await?),
        CommentsCmd::Update {
            project_id,
            fault_id,
            comment_id,
            body,
        } => {
            svc.update(project_id, fault_id, comment_id, &body).await?;
            updated(out, format!("Comment {} updated", comment_id))
        }
        CommentsCmd::Delete {
            project_id,
            fault_id,
            comment_id,
        } => {
            svc.delete(project_id, fault_id, comment_id).await?;
            deleted(out, format!("Comment {} deleted", comment_id))
        }
    }
}

async fn dashboards(client: &Client, cmd: DashboardsCmd, out: Renderer) -> Result<(), Error> {
    let svc = client.dashboards();
    match cmd {
        DashboardsCmd::List { project_id } => emit(out, &svc.list(project_id).await?),
        DashboardsCmd::Get {
            project_id,
            dashboard_id,
        } => emit(out, &svc.get(project_id, &dashboard_id).await?),
        DashboardsCmd::Delete {
            project_id,
            dashboard_id,
        } => emit(out, &svc.delete(project_id, &dashboard_id).await?),
    }
}

async fn deploys(client: &Client, cmd: DeploysCmd, out: Renderer) -> Result<(), Error> {
    let svc = client.deployments();
    match cmd {
        DeploysCmd::List {
            project_id,
            filters,
        } => {
            let options = DeploymentListOptions::from(filters);
            emit(out, &svc.list(project_id, &options).await?)
        }
        DeploysCmd::Get {
            project_id,
            deploy_id,
        } => emit(out, &svc.get(project_id, deploy_id).await?),
        DeploysCmd::Delete {
            project_id,
            deploy_id,
        } => {
            svc.delete(project_id, deploy_id).await?;
            deleted(out, format!("Deploy {} deleted", deploy_id))
        }
    }
}

async fn environments(client: &Client, cmd: EnvironmentsCmd, out: Renderer) -> Result<(), Error> {
    let svc = client.environments();
    match cmd {
        EnvironmentsCmd::List { project_id } => emit(out, &svc.list(project_id).await?),
        EnvironmentsCmd::Get {
            project_id,
            environment_id,
        } => emit(out, &svc.get(project_id, environment_id).await?),
        EnvironmentsCmd::Create {
            project_id,
            name,
            notifications,
        } => {
            let params = EnvironmentParams {
                name: Some(name),
                notifications,
            };
            emit(out, &svc.create(project_id, &params).await?)
        }
        EnvironmentsCmd::Delete {
            project_id,
            environment_id,
        } => {
            svc.delete(project_id, environment_id).await?;
            deleted(out, format!("Environment {} deleted", environment_id))
        }
    }
}

async fn status_pages(client: &Client, cmd: StatusPagesCmd, out: Renderer) -> Result<(), Error> {
    let svc = client.status_pages();
    match cmd {
        StatusPagesCmd::List { account_id } => emit(out, &svc.list(&account_id).await?),
        StatusPagesCmd::Get {
            account_id,
            status_page_id,
        } => emit(out, &svc.get(&account_id, &status_page_id).await?),
        StatusPagesCmd::Delete {
            account_id,
            status_page_id,
        } => {
            svc.delete(&account_id, &status_page_id).await?;
            deleted(out, format!("Status page {} deleted", status_page_id))
        }
    }
}

async fn teams(client: &Client, cmd: TeamsCmd, out: Renderer) -> Result<(), Error> {
    let svc = client.teams();
    match cmd {
        TeamsCmd::List { account_id } => emit(out, &svc.list(&account_id).await?),
        TeamsCmd::Get { team_id } => emit(out, &svc.get(team_id).await?),
        TeamsCmd::Create { account_id, name } => emit(out, &svc.create(&account_id, &name).await?),
        TeamsCmd::Rename { team_id, name } => {
            svc.update(team_id, &name).await?;
            updated(out, format!("Team {} renamed to {}", team_id, name))
        }
        TeamsCmd::Delete { team_id } => {
            svc.delete(team_id).await?;
            deleted(out, format!("Team {} deleted", team_id))
        }
        TeamsCmd::Members { team_id } => emit(out, &svc.list_members(team_id).await?),
        TeamsCmd::Invitations { team_id } => emit(out, &svc.list_invitations(team_id).await?),
    }
}

async fn sites(client: &Client, cmd: SitesCmd, out: Renderer) -> Result<(), Error> {
    let svc = client.uptime();
    match cmd {
        SitesCmd::List { project_id } => emit(out, &svc.list(project_id).await?),
        SitesCmd::Get {
            project_id,
            site_id,
        } => emit(out, &svc.get(project_id, &site_id).await?),
        SitesCmd::Delete {
            project_id,
            site_id,
        } => {
            svc.delete(project_id, &site_id).await?;
            deleted(out, format!("Site {} deleted", site_id))
        }
        SitesCmd::Outages {
            project_id,
            site_id,
            window,
        } => {
            let options = TimeWindowOptions::from(window);
            emit(out, &svc.list_outages(project_id, &site_id, &options).await?)
        }
        SitesCmd::Checks {
            project_id,
            site_id,
            window,
        } => {
            let options = TimeWindowOptions::from(window);
            emit(
                out,
                &svc.list_uptime_checks(project_id, &site_id, &options).await?,
            )
        }
    }
}
