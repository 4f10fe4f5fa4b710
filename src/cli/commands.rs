//! CLI command definitions

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "orgtag")]
#[command(
    about = "Tag the default-branch head of all repositories in a GitHub org which belong to the specified team(s)",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Tag to apply (can be given several times)
    #[arg(long = "tag", value_name = "NAME", required = true)]
    pub tags: Vec<String>,

    /// GitHub organization
    #[arg(long, value_name = "ORG")]
    pub org: String,

    /// Team whose repos may be tagged (can be given several times)
    #[arg(long = "team", value_name = "NAME", required = true)]
    pub teams: Vec<String>,

    /// Analyze and report without creating any tags
    #[arg(long)]
    pub dry_run: bool,

    /// Name recorded on created tags (defaults to git config user.name)
    #[arg(long, value_name = "NAME")]
    pub tagger: Option<String>,

    /// Email recorded on created tags (defaults to git config user.email)
    #[arg(long, value_name = "ADDR")]
    pub email: Option<String>,

    /// Literal access token (overrides --token-path and GITHUB_TOKEN)
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// File containing the access token
    #[arg(long, value_name = "PATH", default_value = "~/.orgtag_token")]
    pub token_path: String,

    /// Tag the SHA recorded in this build manifest instead of the branch head
    #[arg(long, value_name = "BUILD_ID", requires = "versiondb_url")]
    pub manifest: Option<String>,

    /// Base URL of the version database serving build manifests
    #[arg(long, value_name = "URL")]
    pub versiondb_url: Option<String>,

    /// Base URL of the GitHub API
    #[arg(long, value_name = "URL", default_value = "https://api.github.com")]
    pub github_url: String,

    /// Verbose diagnostics
    #[arg(short = 'd', long)]
    pub debug: bool,
}
