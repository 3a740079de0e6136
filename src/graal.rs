use crate::config::*;
use crate::envs::MUST_USE_GRAAL_VAR;
use crate::error::LaunchError;
use crate::jdk::Jdk;
use std::collections::HashMap;
use std::fs;

pub const ORANGE: &str = "\x1b[33m";
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy)]
pub struct GraalSupport
{
    pub present: bool,
}

impl GraalSupport
{
    pub fn detect(jdk: &Jdk, config: &Config) -> Self
    {
        if let Some(forced) = config.graal
        {
            return GraalSupport { present: forced };
        }
        if jdk.home.join("lib").join("jvmci").is_dir()
        {
            return GraalSupport { present: true };
        }
        let present = match fs::read_to_string(jdk.home.join("release"))
        {
            Ok(release) => release.contains("JVMCI") || release.contains("jvmci"),
            Err(_) => false,
        };
        GraalSupport { present }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode
{
    Off,
    Strict,
    WarnOnly,
}

pub fn  check_mode(env: &HashMap<String, String>) -> CheckMode
{
    match env.get(MUST_USE_GRAAL_VAR).map(String::as_str)
    {
        Some("1") => CheckMode::Strict,
        Some("0") => CheckMode::WarnOnly,
        _ => CheckMode::Off,
    }
}

pub fn  check_vm(support: GraalSupport, must_be_jvmci: bool) -> Result<(), LaunchError>
{
    if !support.present
    {
        if must_be_jvmci
        {
            return Err(LaunchError::MissingRuntime);
        }
        eprintln!("{ORANGE}[VM WARNING]{RESET} graal compiler was not found, executing on the standard VM");
    }
    Ok(())
}
