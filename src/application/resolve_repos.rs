//! Repository set resolution from team membership

use crate::domain::{Repository, Team};
use crate::error::{OrgtagError, Result};
use crate::infrastructure::{OrgProvider, TeamProvider};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Per-run memoization of team membership, keyed by repository full name.
///
/// Repository values returned from independent queries are distinct, so the
/// cache key must be the stable full name. The cache lives for one run and
/// is never shared across invocations.
#[derive(Debug, Default)]
pub struct TeamMembershipCache {
    teams: HashMap<String, Vec<String>>,
}

impl TeamMembershipCache {
    pub fn new() -> Self {
        TeamMembershipCache::default()
    }

    fn get(&self, full_name: &str) -> Option<&Vec<String>> {
        self.teams.get(full_name)
    }

    fn insert(&mut self, full_name: String, teams: Vec<String>) {
        self.teams.insert(full_name, teams);
    }
}

/// Resolve the candidate repository set for the requested teams.
///
/// The result is the union of the matched teams' repositories, deduplicated
/// by full name in first-seen order. Fails when no team matches or the
/// union is empty; both are fatal before any tagging work.
pub fn resolve_target_repos<P>(
    provider: &P,
    org: &str,
    team_names: &[String],
) -> Result<Vec<Repository>>
where
    P: OrgProvider + TeamProvider,
{
    debug!("looking for teams: {team_names:?}");
    let teams = provider.list_teams(org)?;

    let matched: Vec<&Team> = teams
        .iter()
        .filter(|t| team_names.iter().any(|name| name == &t.name))
        .collect();
    debug!("found teams: {:?}", matched.iter().map(|t| &t.name).collect::<Vec<_>>());

    if matched.is_empty() {
        return Err(OrgtagError::NoTeamsFound {
            org: org.to_string(),
            requested: team_names.join(", "),
        });
    }

    let mut seen = HashSet::new();
    let mut repos = Vec::new();
    for team in matched {
        for repo in provider.list_team_repos(org, team)? {
            if seen.insert(repo.full_name.clone()) {
                repos.push(repo);
            }
        }
    }

    if repos.is_empty() {
        return Err(OrgtagError::NoRepositoriesFound {
            org: org.to_string(),
        });
    }

    Ok(repos)
}

/// The requested teams through which a repository was selected, memoized
/// for the rest of the run.
pub fn matching_teams<P: TeamProvider>(
    provider: &P,
    cache: &mut TeamMembershipCache,
    repo: &Repository,
    requested: &[String],
) -> Result<Vec<String>> {
    if cache.get(&repo.full_name).is_none() {
        let teams = provider.list_repo_teams(&repo.full_name)?;
        cache.insert(
            repo.full_name.clone(),
            teams.into_iter().map(|t| t.name).collect(),
        );
    }

    Ok(cache
        .get(&repo.full_name)
        .map(|all| {
            all.iter()
                .filter(|name| requested.contains(name))
                .cloned()
                .collect()
        })
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeTeams {
        teams: Vec<Team>,
        repos_by_slug: HashMap<String, Vec<Repository>>,
        teams_by_repo: HashMap<String, Vec<Team>>,
        membership_calls: RefCell<usize>,
    }

    impl FakeTeams {
        fn new() -> Self {
            let core = Team::new("Core", "core");
            let extras = Team::new("Extras", "extras");

            let widget = Repository::new("acme/widget", "main");
            let gadget = Repository::new("acme/gadget", "main");

            let mut repos_by_slug = HashMap::new();
            repos_by_slug.insert("core".to_string(), vec![widget.clone(), gadget.clone()]);
            repos_by_slug.insert("extras".to_string(), vec![gadget.clone()]);

            let mut teams_by_repo = HashMap::new();
            teams_by_repo.insert("acme/widget".to_string(), vec![core.clone()]);
            teams_by_repo.insert(
                "acme/gadget".to_string(),
                vec![core.clone(), extras.clone()],
            );

            FakeTeams {
                teams: vec![core, extras],
                repos_by_slug,
                teams_by_repo,
                membership_calls: RefCell::new(0),
            }
        }
    }

    impl OrgProvider for FakeTeams {
        fn list_teams(&self, _org: &str) -> Result<Vec<Team>> {
            Ok(self.teams.clone())
        }
    }

    impl TeamProvider for FakeTeams {
        fn list_team_repos(&self, _org: &str, team: &Team) -> Result<Vec<Repository>> {
            Ok(self.repos_by_slug.get(&team.slug).cloned().unwrap_or_default())
        }

        fn list_repo_teams(&self, full_name: &str) -> Result<Vec<Team>> {
            *self.membership_calls.borrow_mut() += 1;
            Ok(self.teams_by_repo.get(full_name).cloned().unwrap_or_default())
        }
    }

    #[test]
    fn test_union_deduplicates_by_full_name() {
        let provider = FakeTeams::new();
        let repos = resolve_target_repos(
            &provider,
            "acme",
            &["Core".to_string(), "Extras".to_string()],
        )
        .unwrap();

        let full_names: Vec<_> = repos.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(full_names, ["acme/widget", "acme/gadget"]);
    }

    #[test]
    fn test_resolution_is_order_independent_as_a_set() {
        let provider = FakeTeams::new();
        let forward = resolve_target_repos(
            &provider,
            "acme",
            &["Core".to_string(), "Extras".to_string()],
        )
        .unwrap();
        let reverse = resolve_target_repos(
            &provider,
            "acme",
            &["Extras".to_string(), "Core".to_string()],
        )
        .unwrap();

        let mut forward: Vec<_> = forward.into_iter().map(|r| r.full_name).collect();
        let mut reverse: Vec<_> = reverse.into_iter().map(|r| r.full_name).collect();
        forward.sort();
        reverse.sort();
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_no_matching_teams_is_fatal() {
        let provider = FakeTeams::new();
        let result = resolve_target_repos(&provider, "acme", &["Ghost Team".to_string()]);

        match result.unwrap_err() {
            OrgtagError::NoTeamsFound { org, requested } => {
                assert_eq!(org, "acme");
                assert_eq!(requested, "Ghost Team");
            }
            other => panic!("expected NoTeamsFound, got {other}"),
        }
    }

    #[test]
    fn test_matched_teams_without_repos_is_fatal() {
        let mut provider = FakeTeams::new();
        provider.repos_by_slug.clear();

        let result = resolve_target_repos(&provider, "acme", &["Core".to_string()]);
        assert!(matches!(
            result.unwrap_err(),
            OrgtagError::NoRepositoriesFound { .. }
        ));
    }

    #[test]
    fn test_matching_teams_reports_all_requested_matches() {
        let provider = FakeTeams::new();
        let mut cache = TeamMembershipCache::new();
        let gadget = Repository::new("acme/gadget", "main");

        let requested = vec!["Core".to_string(), "Extras".to_string()];
        let teams = matching_teams(&provider, &mut cache, &gadget, &requested).unwrap();
        assert_eq!(teams, ["Core", "Extras"]);

        // Restricted to the requested subset.
        let only_core = vec!["Core".to_string()];
        let teams = matching_teams(&provider, &mut cache, &gadget, &only_core).unwrap();
        assert_eq!(teams, ["Core"]);
    }

    #[test]
    fn test_membership_is_memoized_per_repo() {
        let provider = FakeTeams::new();
        let mut cache = TeamMembershipCache::new();
        let widget = Repository::new("acme/widget", "main");
        let requested = vec!["Core".to_string()];

        matching_teams(&provider, &mut cache, &widget, &requested).unwrap();
        matching_teams(&provider, &mut cache, &widget, &requested).unwrap();
        matching_teams(&provider, &mut cache, &widget, &requested).unwrap();

        assert_eq!(*provider.membership_calls.borrow(), 1);
    }
}
