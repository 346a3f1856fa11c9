//! Build-time macro expansion.
//!
//! Configured values may reference build variables as `${NAME}` or `$NAME`;
//! `$$` produces a literal `$`. Variables come from the process environment
//! (where the CI server exports its build variables) overlaid with explicit
//! `--define KEY=VALUE` pairs.
use regex::{Captures, Regex};
use std::{collections::BTreeMap, env, sync::LazyLock};

use crate::{error::PerformerError, result::Result};

static MACRO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$\$|\$\{(?<braced>[^}]*)\}|\$(?<bare>[A-Za-z_][A-Za-z0-9_]*)",
    )
    .unwrap()
});

static BRACED_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").unwrap());

/// Capability to expand macros in a configured value against the current
/// build.
pub trait MacroExpander {
    fn expand(&self, input: &str) -> Result<String>;
}

/// Variables visible to the running build.
#[derive(Debug, Default, Clone)]
pub struct BuildContext {
    variables: BTreeMap<String, String>,
}

impl BuildContext {
    /// Context seeded from the current process environment. Variables that
    /// are not valid unicode are skipped.
    pub fn from_env() -> Self {
        let variables = env::vars_os()
            .filter_map(|(key, value)| {
                Some((key.into_string().ok()?, value.into_string().ok()?))
            })
            .collect();

        Self { variables }
    }

    /// Overlays definitions on top of the existing variables.
    pub fn with_definitions(
        mut self,
        definitions: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        self.variables.extend(definitions);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    fn lookup(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| PerformerError::UnknownMacro(name.into()).into())
    }
}

impl MacroExpander for BuildContext {
    fn expand(&self, input: &str) -> Result<String> {
        let mut expanded = String::with_capacity(input.len());
        let mut last = 0;

        for caps in MACRO_REGEX.captures_iter(input) {
            let whole = caps.get(0).map(|m| m.range()).unwrap_or_default();
            expanded.push_str(&input[last..whole.start]);
            expanded.push_str(self.replacement(&caps)?);
            last = whole.end;
        }

        expanded.push_str(&input[last..]);

        Ok(expanded)
    }
}

impl BuildContext {
    fn replacement<'a>(&'a self, caps: &Captures<'_>) -> Result<&'a str> {
        if let Some(name) = caps.name("braced") {
            let name = name.as_str().trim();
            if !BRACED_NAME_REGEX.is_match(name) {
                return Err(PerformerError::MalformedMacro(format!(
                    "${{{name}}}"
                ))
                .into());
            }
            return self.lookup(name);
        }

        if let Some(name) = caps.name("bare") {
            return self.lookup(name.as_str());
        }

        Ok("$")
    }
}

/// Parses a `KEY=VALUE` definition passed on the command line.
pub fn parse_definition(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(PerformerError::invalid_args(format!(
            "definition must have the form KEY=VALUE: {raw}"
        ))
        .into()),
    }
}
