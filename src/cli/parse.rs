use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "--reset" => flags.reset = true,
            "--history" => flags.history = true,
            "--clear-history" => flags.clear_history = true,
            "--strength" => flags.strength_only = true,
            "--numbers" => flags.numbers = true,
            "--specials" => flags.specials = true,
            "-p" | "--pronounceable" => flags.pronounceable = true,
            "--allow-ambiguous" => flags.allow_ambiguous = true,
            "--no-confusing" => flags.no_confusing = true,
            "--no-o-zero" => flags.no_o_zero = true,
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(parse_value(args, i)?);
            }
            "-n" | "--number" => {
                i += 1;
                flags.number = Some(parse_value(args, i)?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn parse_value(args: &[String], i: usize) -> Result<usize, ParseError> {
    let Some(raw) = args.get(i) else {
        return Err(ParseError::MissingValue(args[i - 1].clone()));
    };
    raw.parse()
        .map_err(|_| ParseError::InvalidNumber(raw.clone()))
}
