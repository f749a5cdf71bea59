/// A single `name=value` pair captured from a matched path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub value: String,
}

/// Route parameters in the order the pattern declares them.
///
/// Names are expected to be unique within a route; lookups return the first
/// match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<Param>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.entries.push(Param {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn by_name(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|param| param.name == name)
            .map(|param| param.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|param| (param.name.as_str(), param.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for Params
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.push(name, value);
        }
        params
    }
}

/// Captures are percent-decoded; a value that does not decode to UTF-8 is
/// kept as sent.
impl<'k, 'v> From<&matchit::Params<'k, 'v>> for Params {
    fn from(value: &matchit::Params<'k, 'v>) -> Self {
        value
            .iter()
            .map(|(name, raw)| match urlencoding::decode(raw) {
                Ok(decoded) => (name, decoded.into_owned()),
                Err(_) => (name, raw.to_string()),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;
