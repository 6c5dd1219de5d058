//! Help text.

pub fn print_help() {
    println!(
        "passgen {} - secure password generator

USAGE:
    passgen [OPTIONS]

GENERATION:
    -l, --length <N>       Password length, 6 to 100 (default 10)
    -n, --number <N>       Passwords per run, 1 to 3 (default 1)
        --numbers          Include at least one digit
        --specials         Include at least one special character
    -p, --pronounceable    Alternate consonants and vowels (e.g. \"Bamiro7!\")
        --allow-ambiguous  Keep O, 0, I, l, 1 (excluded by default)
        --no-confusing     At most one of i, l, 1 per password
        --no-o-zero        Never mix o/O with 0

WORKFLOW:
        --strength         Print the strength estimate and exit
    -b, --board            Copy results to the clipboard
    -s, --saved            Start from the saved preferences
        --save             Persist the effective options as preferences
        --reset            Clear the saved preferences
        --history          List recent passwords
        --clear-history    Forget recent passwords

MISC:
    -q, --quiet            Suppress warnings and reports
    -h, --help             Show this help
    -v, --version          Show version",
        env!("CARGO_PKG_VERSION")
    );
}

pub fn print_usage_hint() {
    eprintln!("Try 'passgen --help' for usage.");
}
