use crate::error::LaunchError;
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

pub trait JavaRunner
{
    fn run(&self, java: &Path, args: &[String], env: &HashMap<String, String>)
        -> Result<i32, LaunchError>;
}

pub struct JavaCommand;

impl JavaRunner for JavaCommand
{
    fn run(&self, java: &Path, args: &[String], env: &HashMap<String, String>)
        -> Result<i32, LaunchError>
    {
        let status = Command::new(java).args(args).envs(env).status()?;
        Ok(status.code().unwrap_or(1))
    }
}
