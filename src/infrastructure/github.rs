//! GitHub REST client implementing the provider traits

use crate::domain::{Repository, ResolvedRef, TaggerIdentity, Team};
use crate::error::{OrgtagError, Result};
use crate::infrastructure::provider::{OrgProvider, RefProvider, TeamProvider};
use crate::infrastructure::USER_AGENT;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const PAGE_SIZE: usize = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub API response and request payloads
#[derive(Debug, Deserialize)]
struct GitRef {
    object: GitObject,
}

#[derive(Debug, Deserialize)]
struct GitObject {
    sha: String,
    #[serde(rename = "type")]
    object_type: String,
}

#[derive(Debug, Deserialize)]
struct TagObject {
    sha: String,
}

#[derive(Debug, Serialize)]
struct CreateTagRequest<'a> {
    tag: &'a str,
    message: &'a str,
    object: &'a str,
    #[serde(rename = "type")]
    object_type: &'a str,
    tagger: &'a TaggerIdentity,
}

#[derive(Debug, Serialize)]
struct CreateRefRequest<'a> {
    #[serde(rename = "ref")]
    ref_name: &'a str,
    sha: &'a str,
}

/// Authenticated client for one GitHub (or compatible) API endpoint.
pub struct GithubClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(token: String) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    /// Create a client against a non-default API endpoint.
    pub fn with_base_url(token: String, base_url: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(GithubClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, url: &str) -> reqwest::blocking::RequestBuilder {
        self.http
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github.v3+json")
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.get(url).send()?;
        Self::read_json(response)
    }

    /// GET that treats 404 as absence instead of an error.
    fn get_optional<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        let response = self.get(url).send()?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::read_json(response).map(Some)
    }

    fn get_paginated<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            let url = format!("{}?page={page}&per_page={PAGE_SIZE}", self.url(path));
            let items: Vec<T> = self.get_json(&url)?;

            if items.is_empty() {
                break;
            }

            let count = items.len();
            all_items.extend(items);

            if count < PAGE_SIZE {
                break;
            }
            page += 1;
        }

        Ok(all_items)
    }

    fn post_json<T: serde::de::DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .http
            .post(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github.v3+json")
            .json(body)
            .send()?;
        Self::read_json(response)
    }

    fn read_json<T: serde::de::DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(OrgtagError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json()?)
    }
}

impl OrgProvider for GithubClient {
    fn list_teams(&self, org: &str) -> Result<Vec<Team>> {
        debug!("listing teams of org {org}");
        self.get_paginated(&format!("/orgs/{org}/teams"))
    }
}

impl TeamProvider for GithubClient {
    fn list_team_repos(&self, org: &str, team: &Team) -> Result<Vec<Repository>> {
        debug!("listing repos of team {} in org {org}", team.name);
        self.get_paginated(&format!("/orgs/{org}/teams/{}/repos", team.slug))
    }

    fn list_repo_teams(&self, full_name: &str) -> Result<Vec<Team>> {
        debug!("listing teams of {full_name}");
        self.get_paginated(&format!("/repos/{full_name}/teams"))
    }
}

impl RefProvider for GithubClient {
    fn get_ref(&self, repo: &Repository, ref_path: &str) -> Result<Option<ResolvedRef>> {
        let url = self.url(&format!("/repos/{}/git/ref/{ref_path}", repo.full_name));
        let git_ref: Option<GitRef> = self.get_optional(&url)?;
        Ok(git_ref.map(|r| ResolvedRef::new(r.object.sha, r.object.object_type)))
    }

    fn create_tag_object(
        &self,
        repo: &Repository,
        tag: &str,
        message: &str,
        target: &ResolvedRef,
        tagger: &TaggerIdentity,
    ) -> Result<String> {
        let url = self.url(&format!("/repos/{}/git/tags", repo.full_name));
        let request = CreateTagRequest {
            tag,
            message,
            object: &target.sha,
            object_type: &target.object_type,
            tagger,
        };
        let created: TagObject = self.post_json(&url, &request)?;
        debug!("created tag object {} for {}", created.sha, repo.full_name);
        Ok(created.sha)
    }

    fn create_ref(&self, repo: &Repository, ref_path: &str, sha: &str) -> Result<()> {
        let url = self.url(&format!("/repos/{}/git/refs", repo.full_name));
        let request = CreateRefRequest { ref_name: ref_path, sha };
        let _: serde_json::Value = self.post_json(&url, &request)?;
        debug!("created ref {ref_path} in {}", repo.full_name);
        Ok(())
    }
}
