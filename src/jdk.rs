use crate::config::*;
use crate::error::LaunchError;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Jdk
{
    pub home: PathBuf,
}

impl Jdk
{
    pub fn resolve(config: &Config, env: &HashMap<String, String>) -> Result<Self, LaunchError>
    {
        if let Some(home) = &config.jdk_home
        {
            return Self::from_home(PathBuf::from(home));
        }
        for var in ["JAVA_HOME", "JDK_HOME"]
        {
            if let Some(home) = env.get(var)
            {
                if let Ok(jdk) = Self::from_home(PathBuf::from(home))
                {
                    return Ok(jdk);
                }
            }
        }
        if let Some(path) = env.get("PATH")
        {
            for dir in std::env::split_paths(path)
            {
                let candidate = dir.join(java_executable());
                if candidate.is_file()
                {
                    if let Some(home) = candidate.parent().and_then(|bin| bin.parent())
                    {
                        return Ok(Jdk { home: home.to_path_buf() });
                    }
                }
            }
        }
        Err(LaunchError::JdkNotFound(
            "set jdk_home in sqlaunch.toml, JAVA_HOME, or put java on PATH".to_string(),
        ))
    }

    fn from_home(home: PathBuf) -> Result<Self, LaunchError>
    {
        if home.join("bin").join(java_executable()).is_file()
        {
            Ok(Jdk { home })
        }
        else
        {
            Err(LaunchError::JdkNotFound(format!(
                "no {} under '{}/bin'",
                java_executable(),
                home.display()
            )))
        }
    }

    #[inline(always)]
    pub fn  java(&self) -> PathBuf
    {
        self.home.join("bin").join(java_executable())
    }
}

#[inline(always)]
pub fn  java_executable() -> &'static str
{
    if cfg!(windows) { "java.exe" } else { "java" }
}
