/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
}

/// `--version` text: package version followed by the build provenance.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CADENCE_BUILD_HASH"),
    ", ",
    env!("CADENCE_BUILD_STATUS"),
    ", ",
    env!("CADENCE_BUILD_TARGET"),
    ", ",
    env!("CADENCE_BUILD_PROFILE"),
    ", built ",
    env!("CADENCE_BUILD_TIMESTAMP"),
    ")"
);

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("CADENCE_BUILD_HASH"),
        git_status: env!("CADENCE_BUILD_STATUS"),
        timestamp: env!("CADENCE_BUILD_TIMESTAMP"),
        target: env!("CADENCE_BUILD_TARGET"),
        profile: env!("CADENCE_BUILD_PROFILE"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_version_starts_with_package_version() {
        assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
        let build = current();
        assert_eq!(build.version, env!("CARGO_PKG_VERSION"));
        assert!(LONG_VERSION.contains(build.target));
        assert!(LONG_VERSION.contains(build.profile));
        assert!(LONG_VERSION.ends_with(&format!("built {})", build.timestamp)));
    }
}
