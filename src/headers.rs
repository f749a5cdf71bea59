use crate::constants::header;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use indexmap::IndexMap;

/// Response headers in the order they were produced.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self {
            headers: IndexMap::with_capacity(8),
        }
    }

    pub(crate) fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name, value.into());
        }
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let incoming = value.into().trim().to_string();
        if incoming.is_empty() {
            return;
        }

        match self.headers.get_mut(header::VARY) {
            Some(existing) => {
                let present = existing
                    .split(',')
                    .any(|part| part.trim().eq_ignore_ascii_case(&incoming));
                if !present {
                    existing.push_str(", ");
                    existing.push_str(&incoming);
                }
            }
            None => {
                self.headers.insert(header::VARY.to_string(), incoming);
            }
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

/// Copies `headers` onto a response header map.
///
/// Names already present on the response are left untouched, so a handler that
/// sets one of these headers itself keeps its own value. `Vary` is appended.
pub(crate) fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) else {
            continue;
        };

        if name.eq_ignore_ascii_case(header::VARY) {
            map.append(header_name, header_value);
        } else {
            map.entry(header_name).or_insert(header_value);
        }
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
