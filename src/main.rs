use clap::Parser;
use orgtag::application::{
    apply_missing_tags, find_missing_tags, matching_teams, resolve_target_repos, TargetSource,
    TeamMembershipCache,
};
use orgtag::cli::{output, Cli};
use orgtag::domain::tag::unique_tags;
use orgtag::error::{OrgtagError, Result};
use orgtag::infrastructure::{fetch_manifest, resolve_identity, resolve_token, GithubClient};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("orgtag=debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // Identity and token are resolved before any provider call so setup
    // errors abort with zero writes.
    let tagger = resolve_identity(cli.tagger.as_deref(), cli.email.as_deref())?;
    let token = resolve_token(cli.token.as_deref(), &cli.token_path)?;
    let client = GithubClient::with_base_url(token, &cli.github_url)?;

    let manifest = match &cli.manifest {
        Some(build_id) => {
            let url = cli.versiondb_url.as_deref().ok_or_else(|| {
                OrgtagError::Config("--manifest requires --versiondb-url".to_string())
            })?;
            Some(fetch_manifest(url, build_id)?)
        }
        None => None,
    };

    let tags = unique_tags(&cli.tags);
    let repos = resolve_target_repos(&client, &cli.org, &cli.teams)?;

    let mut cache = TeamMembershipCache::new();
    let mut listing = Vec::new();
    for repo in &repos {
        let teams = matching_teams(&client, &mut cache, repo, &cli.teams)?;
        listing.push((repo.full_name.clone(), teams));
    }
    print!("{}", output::format_selected_repos(&listing));

    let reconciliation = find_missing_tags(&client, &repos, &tags)?;
    print!("{}", output::format_fully_tagged(&reconciliation.fully_tagged));

    if reconciliation.is_empty() {
        return Err(OrgtagError::NothingToDo);
    }
    print!("{}", output::format_missing(&reconciliation));

    let target = match &manifest {
        Some(manifest) => TargetSource::Manifest(manifest),
        None => TargetSource::DefaultBranchHead,
    };
    let report = apply_missing_tags(&client, &reconciliation, target, &tagger, cli.dry_run);
    print!("{}", output::format_summary(&report));

    if report.is_clean() {
        Ok(())
    } else {
        Err(OrgtagError::TaggingIncomplete {
            failures: report.failures.len(),
        })
    }
}
