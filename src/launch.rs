use crate::classify::*;
use crate::config::*;
use crate::envs;
use crate::error::LaunchError;
use crate::graal::{self, CheckMode, GraalSupport};
use crate::jdk::Jdk;
use crate::spawn::JavaRunner;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const ORANGE: &str = "\x1b[33m";
pub const RESET: &str = "\x1b[0m";

pub const GRAAL_HEURISTICS: &[&str] = &[
    "-XX:+UseJVMCICompiler",
    "-Djvmci.Compiler=graal",
    "-Dgraal.TraceTruffleCompilation=true",
    "-Dgraal.TruffleCompilationThreshold=10",
    "-Dgraal.TraceTrufflePerformanceWarnings=true",
    "-Dgraal.TruffleCompilationExceptionsArePrinted=true",
];

pub const ASSERTION_FLAGS: &[&str] = &["-ea", "-esa"];
pub const ASSERTION_SUPPRESSOR: &str = "-da";

pub fn build_vm_args(
    classified: &Classified,
    splitter: &dyn VmArgSplitter,
    extra_vm_args: Option<&Vec<String>>,
    graal: GraalSupport,
    classpath: &str,
    entry_point: &str) -> Vec<String>
{
    let (mut args, leftover) = splitter.split(classified.other.clone());
    args.extend(classified.vm_args.iter().cloned());
    if graal.present
    {
        args.extend(GRAAL_HEURISTICS.iter().map(|s| s.to_string()));
    }
    let suppressed = extra_vm_args
        .map(|extra| extra.iter().any(|a| a == ASSERTION_SUPPRESSOR))
        .unwrap_or(false);
    if !suppressed
    {
        args.extend(ASSERTION_FLAGS.iter().map(|s| s.to_string()));
    }
    if let Some(extra) = extra_vm_args
    {
        args.extend(extra.iter().cloned());
    }
    args.push("-cp".to_string());
    args.push(classpath.to_string());
    args.push(entry_point.to_string());
    args.extend(classified.guest_args.iter().cloned());
    args.extend(leftover);
    args
}

pub fn  expand_classpath(paths: &[String]) -> String
{
    let mut entries = Vec::new();
    for path in paths
    {
        if let Some(dir) = path.strip_suffix("/*")
        {
            let mut jars = Vec::new();
            if let Ok(read_dir) = fs::read_dir(dir)
            {
                for entry in read_dir.flatten()
                {
                    if entry.path().extension().map(|ext| ext == "jar").unwrap_or(false)
                    {
                        jars.push(entry.path().to_string_lossy().to_string());
                    }
                }
            }
            jars.sort();
            entries.extend(jars);
        }
        else
        {
            entries.push(path.clone());
        }
    }
    entries.join(if cfg!(windows) { ";" } else { ":" })
}

pub fn launch(
    tokens: &[String],
    config: &Config,
    mut env: HashMap<String, String>,
    workspace_root: &Path,
    runner: &dyn JavaRunner) -> Result<i32, LaunchError>
{
    envs::ensure_home(&mut env, workspace_root);
    let jdk = Jdk::resolve(config, &env)?;
    let support = GraalSupport::detect(&jdk, config);
    match graal::check_mode(&env)
    {
        CheckMode::Strict => graal::check_vm(support, true)?,
        CheckMode::WarnOnly => graal::check_vm(support, false)?,
        CheckMode::Off => (),
    }
    let classified = classify(tokens)?;
    let classpath = expand_classpath(&config.classpath);
    let args = build_vm_args(
        &classified,
        &JvmPrefixSplitter,
        config.args.jvm.as_ref(),
        support,
        &classpath,
        &config.entry_point,
    );
    let java = jdk.java();
    if config.log_level > 0
    {
        eprintln!("{ORANGE}[LAUNCH]{RESET} {} {}", java.display(), args.join(" "));
    }
    runner.run(&java, &args, &env)
}
