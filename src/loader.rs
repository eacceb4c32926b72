// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::{fmt::Display, io::Write};

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};
use itertools::Itertools;
use url::Url;

use crate::question::{parse_questions, Question};

/// Where a copy of the dataset may live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    File(Utf8PathBuf),
    Remote(Url),
}

impl Location {
    /// Resolve a configured candidate. `http(s)://` URLs stay remote, `file://`
    /// URLs and plain paths become files relative to `root`.
    pub fn resolve(root: &Utf8Path, candidate: &str) -> Location {
        if let Ok(url) = Url::parse(candidate) {
            match url.scheme() {
                "http" | "https" => return Location::Remote(url),
                "file" => {
                    if let Some(path) = url
                        .to_file_path()
                        .ok()
                        .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
                    {
                        return Location::File(path);
                    }
                }
                _ => (),
            }
        }
        Location::File(root.join(candidate))
    }

    pub fn as_file(&self) -> Option<&Utf8Path> {
        match self {
            Location::File(path) => Some(path),
            Location::Remote(_) => None,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::File(path) => write!(f, "{}", path),
            Location::Remote(url) => write!(f, "{}", url),
        }
    }
}

pub fn resolve_candidates<S: AsRef<str>>(root: &Utf8Path, candidates: &[S]) -> Vec<Location> {
    candidates
        .iter()
        .map(|c| Location::resolve(root, c.as_ref()))
        .collect()
}

/// Retrieves the raw body stored at a [`Location`].
pub trait Fetch {
    /// Fails on I/O errors, network errors and non-success HTTP statuses.
    fn fetch(&self, location: &Location) -> eyre::Result<String>;
}

pub struct DefaultFetcher {
    client: reqwest::blocking::Client,
}

impl DefaultFetcher {
    pub fn new() -> eyre::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("tiku/", env!("CARGO_PKG_VERSION")))
            .build()
            .wrap_err("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl Fetch for DefaultFetcher {
    fn fetch(&self, location: &Location) -> eyre::Result<String> {
        match location {
            Location::File(path) => std::fs::read_to_string(path)
                .wrap_err_with(|| eyre!("failed to read `{}`", path)),
            Location::Remote(url) => {
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .wrap_err_with(|| eyre!("failed to request `{}`", url))?;
                let status = response.status();
                if !status.is_success() {
                    return Err(eyre!("HTTP {} from `{}`", status, url));
                }
                response
                    .text()
                    .wrap_err_with(|| eyre!("failed to read response body of `{}`", url))
            }
        }
    }
}

/// A successfully loaded collection and where it came from.
#[derive(Debug)]
pub struct Loaded {
    pub questions: Vec<Question>,
    pub location: Location,
}

/// Try every candidate in order and keep the first one that fetches and parses
/// as a question array. Each failure is reported as a warning before moving on.
///
/// Progress lines go to stderr, leaving stdout to `tiku show`.
pub fn load_questions<F: Fetch>(fetcher: &F, candidates: &[Location]) -> eyre::Result<Loaded> {
    load_questions_with_progress(fetcher, candidates, &mut std::io::stderr())
}

pub fn load_questions_with_progress<F: Fetch, W: Write>(
    fetcher: &F,
    candidates: &[Location],
    progress: &mut W,
) -> eyre::Result<Loaded> {
    for location in candidates {
        writeln!(progress, "[load] Trying \"{}\"", location)?;
        let attempt = fetcher
            .fetch(location)
            .and_then(|body| parse_questions(&body).wrap_err("invalid question data"));
        match attempt {
            Ok(questions) => {
                writeln!(
                    progress,
                    "[load] Loaded {} questions from \"{}\"",
                    questions.len(),
                    location
                )?;
                return Ok(Loaded {
                    questions,
                    location: location.clone(),
                });
            }
            Err(err) => {
                color_print::ceprintln!("<y>[load] Warning: \"{}\" failed: {:#}</>", location, err);
            }
        }
    }

    Err(eyre!(
        "failed to load questions, tried: {}",
        candidates.iter().map(|c| format!("`{}`", c)).join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;

    /// Serves canned bodies; unknown locations behave like a 404.
    struct MockFetcher {
        bodies: HashMap<String, String>,
        requested: RefCell<Vec<String>>,
    }

    impl MockFetcher {
        fn new(bodies: &[(&str, &str)]) -> Self {
            Self {
                bodies: bodies
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                requested: RefCell::new(vec![]),
            }
        }
    }

    impl Fetch for MockFetcher {
        fn fetch(&self, location: &Location) -> eyre::Result<String> {
            self.requested.borrow_mut().push(location.to_string());
            self.bodies
                .get(&location.to_string())
                .cloned()
                .ok_or_else(|| eyre!("HTTP 404 Not Found from `{}`", location))
        }
    }

    fn remote(s: &str) -> Location {
        Location::Remote(Url::parse(s).unwrap())
    }

    #[test]
    fn test_falls_back_to_next_candidate() {
        let body = r#"[{"type": "单选题", "tags": ["数列"], "no": 1}, {"type": "填空题", "no": 2}]"#;
        let fetcher = MockFetcher::new(&[("https://example.com/b/data.json", body)]);
        let candidates = [
            remote("https://example.com/a/data.json"),
            remote("https://example.com/b/data.json"),
        ];

        let loaded = load_questions(&fetcher, &candidates).unwrap();
        assert_eq!(loaded.questions, parse_questions(body).unwrap());
        assert_eq!(loaded.location, candidates[1]);
        assert_eq!(fetcher.requested.borrow().len(), 2);
    }

    #[test]
    fn test_stops_at_first_success() {
        let fetcher = MockFetcher::new(&[
            ("https://example.com/a.json", "[]"),
            ("https://example.com/b.json", r#"[{"no": 1}]"#),
        ]);
        let candidates = [remote("https://example.com/a.json"), remote("https://example.com/b.json")];

        let loaded = load_questions(&fetcher, &candidates).unwrap();
        assert!(loaded.questions.is_empty());
        assert_eq!(*fetcher.requested.borrow(), ["https://example.com/a.json"]);
    }

    #[test]
    fn test_invalid_json_is_a_failure() {
        let fetcher = MockFetcher::new(&[
            ("https://example.com/a.json", "<html>not found</html>"),
            ("https://example.com/b.json", r#"[{"no": 3}]"#),
        ]);
        let candidates = [remote("https://example.com/a.json"), remote("https://example.com/b.json")];

        let loaded = load_questions(&fetcher, &candidates).unwrap();
        assert_eq!(loaded.questions[0].no.to_string(), "3");
    }

    #[test]
    fn test_loose_records_do_not_reject_candidate() {
        let body = r#"[
            {"year": "2023", "no": "7", "type": "单选题", "tags": ["数列"], "content": "q1"},
            {"year": null, "type": null, "tags": null, "content": null}
        ]"#;
        let fetcher = MockFetcher::new(&[
            ("https://example.com/a.json", body),
            ("https://example.com/b.json", "[]"),
        ]);
        let candidates = [remote("https://example.com/a.json"), remote("https://example.com/b.json")];

        let loaded = load_questions(&fetcher, &candidates).unwrap();
        assert_eq!(loaded.location, candidates[0]);
        assert_eq!(loaded.questions.len(), 2);
        assert_eq!(loaded.questions[0].year.to_string(), "2023");
        assert_eq!(*fetcher.requested.borrow(), ["https://example.com/a.json"]);
    }

    #[test]
    fn test_progress_lines() {
        let fetcher = MockFetcher::new(&[("https://example.com/b.json", r#"[{"no": 1}, {"no": 2}]"#)]);
        let candidates = [remote("https://example.com/a.json"), remote("https://example.com/b.json")];

        let mut progress = Vec::new();
        load_questions_with_progress(&fetcher, &candidates, &mut progress).unwrap();
        assert_eq!(
            String::from_utf8(progress).unwrap(),
            "[load] Trying \"https://example.com/a.json\"\n\
             [load] Trying \"https://example.com/b.json\"\n\
             [load] Loaded 2 questions from \"https://example.com/b.json\"\n"
        );
    }

    #[test]
    fn test_all_candidates_fail() {
        let fetcher = MockFetcher::new(&[]);
        let candidates = [remote("https://example.com/a.json"), remote("https://example.com/b.json")];

        let err = load_questions(&fetcher, &candidates).unwrap_err();
        assert!(err.to_string().contains("https://example.com/b.json"));
        assert_eq!(fetcher.requested.borrow().len(), 2);
        assert!(load_questions(&fetcher, &[]).is_err());
    }

    #[test]
    fn test_resolve_locations() {
        let root = Utf8Path::new("/site");
        assert_eq!(
            Location::resolve(root, "./data.json"),
            Location::File("/site/./data.json".into())
        );
        assert_eq!(
            Location::resolve(root, "https://cdn.example.com/data.json"),
            remote("https://cdn.example.com/data.json")
        );
        assert_eq!(
            Location::resolve(root, "/abs/data.json"),
            Location::File("/abs/data.json".into())
        );
    }

    #[test]
    fn test_default_fetcher_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        std::fs::write(root.join("data.json"), r#"[{"no": 9}]"#).unwrap();

        let fetcher = DefaultFetcher::new().unwrap();
        let candidates = resolve_candidates(root, &["missing.json", "data.json"]);
        let loaded = load_questions(&fetcher, &candidates).unwrap();
        assert_eq!(loaded.questions[0].no.to_string(), "9");
        assert_eq!(loaded.location.as_file(), Some(root.join("data.json").as_path()));
    }
}
