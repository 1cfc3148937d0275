//! Platform detection.

/// Environment variables set by common CI providers.
const CI_VARS: [&str; 6] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    is_ci_with(|var| std::env::var_os(var).is_some())
}

fn is_ci_with<F: Fn(&str) -> bool>(is_set: F) -> bool {
    CI_VARS.into_iter().any(is_set)
}
