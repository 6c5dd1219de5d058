use std::env;

fn main() {
    // Keep generated secrets out of core dumps.
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    passgen::cli::run(env::args().collect());
}
