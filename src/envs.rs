use std::collections::HashMap;
use std::path::Path;

pub const HOME_VAR: &str = "SQLAUNCH_HOME";
pub const MUST_USE_GRAAL_VAR: &str = "SQLAUNCH_MUST_USE_GRAAL";

#[inline(always)]
pub fn  snapshot() -> HashMap<String, String>
{
    std::env::vars().collect()
}

pub fn  ensure_home(env: &mut HashMap<String, String>, workspace_root: &Path)
{
    env.entry(HOME_VAR.to_string())
        .or_insert_with(|| workspace_root.to_string_lossy().to_string());
}
