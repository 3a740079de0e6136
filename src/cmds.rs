use crate::config::*;
use std::fs;

pub const ORANGE: &str = "\x1b[33m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const RESET: &str = "\x1b[0m";

#[inline(always)]
pub fn  init(config: &Config) -> Result<(), Box<dyn std::error::Error>>
{
    if fs::metadata(CONF_FILE).is_err()
    {
        config.write()?;
        eprintln!("{GREEN}[INIT]{RESET} wrote {CONF_FILE}");
    }
    else
    {
        eprintln!("{ORANGE}[INIT]{RESET} {CONF_FILE} already exists, leaving it alone");
    }
    Ok(())
}

pub fn  help()
{
    println!("{GREEN}sqlaunch - minimal Graal-aware launcher for Squeak images{RESET}");
    println!();
    println!("{ORANGE}Usage:{RESET}");
    println!("  sqlaunch [tokens...]");
    println!("  sqlaunch init | help");
    println!();
    println!("{ORANGE}Recognized tokens:{RESET}");
    println!("  -debug                     Attach a JDWP debugger on port 8000 (suspends on start)");
    println!("  -dump                      Dump Graal compilation graphs with detailed traces");
    println!("  -disassemble               Print compiled call targets, with detailed traces");
    println!("  -r <file> / -m <class>     Forwarded to the image together with their value");
    println!("  --help                     Forwarded to the image (use 'help' for this text)");
    println!("  <file>.image               Image to open");
    println!("  -X*/-D*/-ea/...            Standard JVM flags, passed to the VM");
    println!("  anything else              Forwarded to the image");
    println!();
    println!("{ORANGE}Environment:{RESET}");
    println!("  SQLAUNCH_HOME              Workspace root, set to the current directory if absent");
    println!("  SQLAUNCH_MUST_USE_GRAAL    1 = refuse to run without Graal, 0 = warn only");
    println!();
    println!("{ORANGE}Quirks & Notes:{RESET}");
    println!("  - Graal tuning flags are only injected when the JDK ships the graal compiler.");
    println!("  - Assertions (-ea -esa) are on unless your jvm args include -da.");
    println!("  - Classpath entries support wildcards like lib/*");
    println!("  - The exit code is the JVM's exit code, verbatim.");
    println!();
    println!("{ORANGE}Example:{RESET}");
    println!("  sqlaunch init");
    println!("  sqlaunch -debug Squeak6.0.image");
    println!("  sqlaunch -Xmx4g Squeak6.0.image -r script.st");
    println!();
}
