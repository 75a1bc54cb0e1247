//! Deployment base path handling.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/app` for a project page),
/// router paths and asset URLs are prefixed accordingly. Local builds without
/// `PUBLIC_URL` stay root-anchored.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router, or `None` when hosted at the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');
    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}
