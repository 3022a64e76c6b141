//! Application name derivation.

use crate::domain::AppError;

/// Application name in the forms the generated files need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppName {
    underscored: String,
}

impl AppName {
    /// Derive from a Ruby constant or directory name (`MyApp`, `my-app`, `Admin::Portal`).
    pub fn derive(raw: &str) -> Result<Self, AppError> {
        let underscored = underscore(raw.trim());
        let valid = !underscored.is_empty()
            && !underscored.starts_with('/')
            && !underscored.ends_with('/')
            && underscored.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '/');
        if !valid {
            return Err(AppError::InvalidAppName(raw.to_string()));
        }
        Ok(Self { underscored })
    }

    /// Read the primary module from `config/application.rb` content.
    pub fn from_application_config(content: &str) -> Option<Result<Self, AppError>> {
        content.lines().find_map(|line| {
            let rest = line.trim_start().strip_prefix("module ")?;
            let constant = rest.split_whitespace().next()?;
            Some(Self::derive(constant))
        })
    }

    /// `my_app`
    pub fn underscored(&self) -> &str {
        &self.underscored
    }

    /// `my-app`
    pub fn hyphenated(&self) -> String {
        self.underscored.replace('_', "-")
    }

    /// Database name prefix, namespaces flattened.
    pub fn database_prefix(&self) -> String {
        self.underscored.replace('/', "_")
    }

    /// Service host prefix used by deployed databases.
    pub fn host_prefix(&self) -> String {
        self.database_prefix().replace('_', "-")
    }
}

fn underscore(raw: &str) -> String {
    let chars: Vec<char> = raw.replace("::", "/").chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary {
                out.push('_');
            }
        }
        match c {
            '-' | ' ' => out.push('_'),
            _ => out.push(c.to_ascii_lowercase()),
        }
    }

    out
}
