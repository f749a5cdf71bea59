use crate::util::{equals_ignore_case, split_list};

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Outcome of checking a request's `Origin` header against the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// No `Origin` header: answer with `*`.
    Any,
    /// Listed origin: echo it back.
    Mirror(String),
    /// Unlisted origin: reject the request.
    Disallow,
}

/// How a request origin is compared with the configured allow-list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OriginMatching {
    /// The origin occurs anywhere in the configured value, case-sensitively.
    /// `https://app.example` is admitted by `https://app.example.com`.
    #[default]
    Contains,
    /// The origin equals one list entry, ignoring ASCII and Unicode case.
    /// Stricter than [`OriginMatching::Contains`]: partial origins are
    /// rejected.
    Exact,
}

/// A parsed origin allow-list, as read from configuration for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    raw: String,
    entries: Vec<String>,
    matching: OriginMatching,
}

impl AllowList {
    /// Parses a comma or whitespace separated list. `*` admits every origin.
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            entries: split_list(raw).map(str::to_owned).collect(),
            matching: OriginMatching::default(),
        }
    }

    pub fn with_matching(mut self, matching: OriginMatching) -> Self {
        self.matching = matching;
        self
    }

    pub fn matching(&self) -> OriginMatching {
        self.matching
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn allows(&self, origin: &str) -> bool {
        if origin.is_empty() || origin.len() > MAX_ORIGIN_LENGTH {
            return false;
        }
        if self.entries.iter().any(|entry| entry == "*") {
            return true;
        }

        match self.matching {
            OriginMatching::Contains => self.raw.contains(origin),
            OriginMatching::Exact => self
                .entries
                .iter()
                .any(|entry| equals_ignore_case(entry, origin)),
        }
    }

    pub fn resolve(&self, origin: Option<&str>) -> OriginDecision {
        match origin {
            None => OriginDecision::Any,
            Some(origin) if self.allows(origin) => OriginDecision::Mirror(origin.to_string()),
            Some(_) => OriginDecision::Disallow,
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries: Vec<String> = iter
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect();

        Self {
            raw: entries.join(","),
            entries,
            matching: OriginMatching::default(),
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
