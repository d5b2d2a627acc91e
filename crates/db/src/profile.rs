pub const DEFAULT_PROFILE: &str = "Default";

/// File-system safe form of a profile name: every run of characters outside
/// `[A-Za-z0-9_-]` becomes a single `_`.
pub fn profile_slug(profile: &str) -> String {
    let mut slug = String::with_capacity(profile.len());
    let mut in_run = false;

    for c in profile.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
            in_run = false;
        } else if !in_run {
            slug.push('_');
            in_run = true;
        }
    }

    slug
}

/// `base` for the default profile, `base__<slug>` for every other one.
pub fn profile_table(base: &str, profile: &str) -> String {
    let profile = profile.trim();

    if profile.is_empty() || profile.eq_ignore_ascii_case(DEFAULT_PROFILE) {
        return base.to_owned();
    }

    format!("{base}__{}", profile_slug(profile))
}
