//! Build-time metadata.
//!
//! Release pipelines inject the git commit, build time and compiler version
//! through `WAITUP_GIT_COMMIT`, `WAITUP_BUILD_TIME` and `WAITUP_RUSTC_VERSION`
//! at compile time. Local builds fall back to placeholder values.

use serde::Serialize;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit the binary was built from.
pub const GIT_COMMIT: &str = match option_env!("WAITUP_GIT_COMMIT") {
    Some(commit) => commit,
    None => "unknown-git-commit",
};

/// When the binary was built.
pub const BUILD_TIME: &str = match option_env!("WAITUP_BUILD_TIME") {
    Some(time) => time,
    None => "unknown-build-time",
};

/// Compiler used for the build.
pub const RUSTC_VERSION: &str = match option_env!("WAITUP_RUSTC_VERSION") {
    Some(version) => version,
    None => "unknown-rustc-version",
};

/// Snapshot of everything `waitup version` reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub rustc_version: &'static str,
    pub git_commit: &'static str,
    pub build_time: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
}

impl BuildInfo {
    /// Metadata for the running binary.
    pub fn current() -> Self {
        Self {
            version: VERSION,
            rustc_version: RUSTC_VERSION,
            git_commit: GIT_COMMIT,
            build_time: BUILD_TIME,
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }

    /// Multi-line, aligned rendering for terminals.
    pub fn render(&self) -> String {
        format!(
            "Version:           {}\n\
             Rust version:      {}\n\
             Git commit:        {}\n\
             Built:             {}\n\
             OS/Arch:           {}/{}",
            self.version, self.rustc_version, self.git_commit, self.build_time, self.os, self.arch
        )
    }
}

/// User-Agent header sent by network checkers.
pub fn user_agent() -> String {
    format!("waitup/{}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_uses_package_version() {
        let info = BuildInfo::current();
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.os, std::env::consts::OS);
    }

    #[test]
    fn render_lists_every_field() {
        let info = BuildInfo {
            version: "1.2.3",
            rustc_version: "rustc 1.93.0",
            git_commit: "abc1234",
            build_time: "2026-01-01T00:00:00Z",
            os: "linux",
            arch: "x86_64",
        };
        let rendered = info.render();
        assert!(rendered.contains("Version:           1.2.3"));
        assert!(rendered.contains("Rust version:      rustc 1.93.0"));
        assert!(rendered.contains("Git commit:        abc1234"));
        assert!(rendered.contains("Built:             2026-01-01T00:00:00Z"));
        assert!(rendered.contains("OS/Arch:           linux/x86_64"));
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(BuildInfo::current()).unwrap();
        assert_eq!(json["version"], VERSION);
        assert!(json.get("git_commit").is_some());
    }

    #[test]
    fn user_agent_includes_version() {
        assert_eq!(user_agent(), format!("waitup/{}", VERSION));
    }
}
