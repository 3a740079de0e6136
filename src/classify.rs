use crate::error::LaunchError;

pub const DEBUG_FLAGS: &[&str] = &[
    "-Xdebug",
    "-Xrunjdwp:transport=dt_socket,server=y,address=8000,suspend=y",
];

pub const DUMP_FLAGS: &[&str] = &[
    "-Dgraal.Dump=",
    "-Dgraal.MethodFilter=Truffle.*",
    "-Dgraal.TruffleBackgroundCompilation=false",
    "-Dgraal.TraceTruffleCompilation=true",
    "-Dgraal.TraceTruffleCompilationDetails=true",
];

pub const DISASSEMBLE_FLAGS: &[&str] = &[
    "-XX:CompileCommand=print,*OptimizedCallTarget.callRoot",
    "-XX:CompileCommand=exclude,*OptimizedCallTarget.callRoot",
    "-Dgraal.TruffleBackgroundCompilation=false",
    "-Dgraal.TraceTruffleCompilation=true",
    "-Dgraal.TraceTruffleCompilationDetails=true",
];

pub const IMAGE_SUFFIX: &str = ".image";

#[derive(Debug, Default, Clone)]
pub struct Classified
{
    pub vm_args:        Vec<String>,
    pub guest_args:     Vec<String>,
    pub other:          Vec<String>,
}

pub fn  classify(tokens: &[String]) -> Result<Classified, LaunchError>
{
    let mut out = Classified::default();
    let mut i = 0;
    while i < tokens.len()
    {
        let arg = &tokens[i];
        i += 1;
        match arg.as_str()
        {
            "-debug" => out.vm_args.extend(DEBUG_FLAGS.iter().map(|s| s.to_string())),
            "-dump" => out.vm_args.extend(DUMP_FLAGS.iter().map(|s| s.to_string())),
            "-disassemble" => out.vm_args.extend(DISASSEMBLE_FLAGS.iter().map(|s| s.to_string())),
            "-r" | "-m" =>
            {
                let value = match tokens.get(i)
                {
                    Some(v) => v,
                    None => return Err(LaunchError::MalformedArgument(arg.clone())),
                };
                i += 1;
                out.guest_args.push(arg.clone());
                out.guest_args.push(value.clone());
            }
            "--help" => out.guest_args.push(arg.clone()),
            _ if arg.ends_with(IMAGE_SUFFIX) => out.guest_args.push(arg.clone()),
            _ => out.other.push(arg.clone()),
        }
    }
    Ok(out)
}

pub trait VmArgSplitter
{
    fn split(&self, tokens: Vec<String>) -> (Vec<String>, Vec<String>);
}

const VM_EXACT: &[&str] = &["-ea", "-esa", "-da"];
const VM_PREFIXES: &[&str] = &["-X", "-D", "-agentlib:", "-javaagent:", "-verbose"];

pub struct JvmPrefixSplitter;

impl VmArgSplitter for JvmPrefixSplitter
{
    fn split(&self, tokens: Vec<String>) -> (Vec<String>, Vec<String>)
    {
        let mut vm = Vec::new();
        let mut rest = Vec::new();
        for token in tokens
        {
            if VM_EXACT.contains(&token.as_str())
                || VM_PREFIXES.iter().any(|p| token.starts_with(p))
            {
                vm.push(token);
            }
            else
            {
                rest.push(token);
            }
        }
        (vm, rest)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn toks(args: &[&str]) -> Vec<String>
    {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn debug_trigger_expands_and_image_goes_to_guest()
    {
        let c = classify(&toks(&["-debug", "foo.image"])).unwrap();
        assert_eq!(c.vm_args, toks(DEBUG_FLAGS));
        assert_eq!(c.guest_args, toks(&["foo.image"]));
        assert!(c.other.is_empty());
    }

    #[test]
    fn paired_flags_stay_paired()
    {
        let c = classify(&toks(&["-r", "myfile", "-m", "main"])).unwrap();
        assert_eq!(c.guest_args, toks(&["-r", "myfile", "-m", "main"]));
        assert!(c.vm_args.is_empty());
        assert!(c.other.is_empty());
    }

    #[test]
    fn paired_flags_survive_interleaving()
    {
        let c = classify(&toks(&["-Xmx2g", "-r", "myfile", "stray", "-m", "main"])).unwrap();
        assert_eq!(c.guest_args, toks(&["-r", "myfile", "-m", "main"]));
        assert_eq!(c.other, toks(&["-Xmx2g", "stray"]));
    }

    #[test]
    fn help_goes_to_guest_without_diagnostics()
    {
        let c = classify(&toks(&["--help"])).unwrap();
        assert_eq!(c.guest_args, toks(&["--help"]));
        assert!(c.vm_args.is_empty());
        assert!(c.other.is_empty());
    }

    #[test]
    fn paired_flag_without_value_is_malformed()
    {
        match classify(&toks(&["-r"]))
        {
            Err(LaunchError::MalformedArgument(flag)) => assert_eq!(flag, "-r"),
            other => panic!("expected MalformedArgument, got {:?}", other),
        }
    }

    #[test]
    fn paired_flag_consumes_next_token_unconditionally()
    {
        let c = classify(&toks(&["-r", "-m"])).unwrap();
        assert_eq!(c.guest_args, toks(&["-r", "-m"]));
    }

    #[test]
    fn every_token_lands_exactly_once()
    {
        let input = toks(&["-dump", "a.image", "-r", "x", "plain", "-Dfoo=bar", "--help"]);
        let c = classify(&input).unwrap();
        let mut seen: Vec<String> = Vec::new();
        seen.extend(c.guest_args.clone());
        seen.extend(c.other.clone());
        for token in &input
        {
            if token == "-dump"
            {
                continue;
            }
            assert_eq!(seen.iter().filter(|t| *t == token).count(), 1, "token {token}");
        }
        assert_eq!(c.vm_args, toks(DUMP_FLAGS));
    }

    #[test]
    fn relative_order_is_preserved_per_stream()
    {
        let c = classify(&toks(&["one", "a.image", "two", "b.image", "three"])).unwrap();
        assert_eq!(c.guest_args, toks(&["a.image", "b.image"]));
        assert_eq!(c.other, toks(&["one", "two", "three"]));
    }

    #[test]
    fn splitter_recognizes_jvm_shapes_only()
    {
        let (vm, rest) = JvmPrefixSplitter.split(toks(&[
            "-Xmx2g", "-Dfoo=bar", "-ea", "-da", "-verbose:gc", "script.st", "-x",
        ]));
        assert_eq!(vm, toks(&["-Xmx2g", "-Dfoo=bar", "-ea", "-da", "-verbose:gc"]));
        assert_eq!(rest, toks(&["script.st", "-x"]));
    }
}
