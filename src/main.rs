use sqlaunch::config::*;
use sqlaunch::{cmds, cmds::*};
use sqlaunch::envs;
use sqlaunch::launch;
use sqlaunch::spawn::JavaCommand;
use std::env;

fn  main() -> Result<(), i32>
{
    let args: Vec<String> = env::args().collect();
    let conf = Config::load().unwrap_or_default();
    match args.get(1).map(String::as_str)
    {
        Some("init") =>
        {
            if let Err(e) = cmds::init(&conf)
            {
                eprintln!("{RED}[sqlaunch]{RESET} {e}");
                return Err(1);
            }
        }
        Some("help") =>
        {
            cmds::help();
        }
        _ =>
        {
            let cwd = match env::current_dir()
            {
                Ok(dir) => dir,
                Err(e) =>
                {
                    eprintln!("{RED}[sqlaunch]{RESET} {e}");
                    return Err(1);
                }
            };
            match launch::launch(&args[1..], &conf, envs::snapshot(), &cwd, &JavaCommand)
            {
                Ok(0) => (),
                Ok(code) => std::process::exit(code),
                Err(e) =>
                {
                    eprintln!("{RED}[sqlaunch]{RESET} {e}");
                    return Err(1);
                }
            }
        }
    }
    Ok(())
}
