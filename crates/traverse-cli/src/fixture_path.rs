use anyhow::Context;
use std::path::{Path, PathBuf};
use traverse_core::fixture::Fixture;

pub const FIXTURE_FILE: &str = "traverse.yaml";

/// Where the active fixture comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureSource {
    /// Builtin demo data.
    Builtin,
    /// A fixture file on disk.
    File(PathBuf),
}

impl FixtureSource {
    /// Load the fixture this source points at.
    pub fn load(&self) -> anyhow::Result<Fixture> {
        match self {
            FixtureSource::Builtin => Ok(Fixture::default()),
            FixtureSource::File(path) => Fixture::load(path)
                .with_context(|| format!("failed to load fixture {}", path.display())),
        }
    }
}

/// Resolve the fixture source.
///
/// Priority:
/// 1. `--fixture` flag / `TRAVERSE_FIXTURE` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `traverse.yaml`
/// 3. Builtin demo data
pub fn resolve_fixture(explicit: Option<&Path>) -> FixtureSource {
    if let Some(p) = explicit {
        return FixtureSource::File(p.to_path_buf());
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut dir = cwd;
    loop {
        let candidate = dir.join(FIXTURE_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "found fixture file");
            return FixtureSource::File(candidate);
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    tracing::debug!("no fixture file found, using builtin demo data");
    FixtureSource::Builtin
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        let result = resolve_fixture(Some(&path));
        assert_eq!(result, FixtureSource::File(path));
    }

    #[test]
    fn builtin_source_loads_demo_data() {
        let fixture = FixtureSource::Builtin.load().unwrap();
        assert_eq!(fixture, Fixture::default());
    }

    #[test]
    fn file_source_reports_the_failing_path() {
        let source = FixtureSource::File(PathBuf::from("/nonexistent/traverse.yaml"));
        let err = source.load().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/traverse.yaml"));
    }

    #[test]
    fn file_source_loads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FIXTURE_FILE);
        std::fs::write(&path, "sequence: [7, 8]\n").unwrap();

        let fixture = FixtureSource::File(path).load().unwrap();
        assert_eq!(fixture.sequence.iter().collect::<Vec<_>>(), vec![7, 8]);
    }
}
