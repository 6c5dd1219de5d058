//! CLI context - bundles the effective configuration, flags, and clipboard
//! state, and drives one run end to end.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, help, parse, prompts};
use crate::config::GenerationConfig;
use crate::history::History;
use crate::pass::{self, strength};
use crate::prefs;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for one CLI invocation.
pub struct Context {
    pub config: GenerationConfig,
    pub flags: CliFlags,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Parse arguments and build the effective configuration.
    ///
    /// With no explicit generation options (or with `--saved`) the saved
    /// preferences are the base, matching their last interactive use; an
    /// explicit invocation starts from defaults with a batch size of one.
    pub fn new(args: &[String]) -> Result<Self, String> {
        let flags = parse(args).map_err(|e| e.to_string())?;

        let use_saved = flags.saved || !flags.has_explicit_args();
        let mut config = if use_saved {
            prefs::load()
        } else {
            GenerationConfig {
                count: 1,
                ..Default::default()
            }
        };
        flags.apply(&mut config);

        Ok(Self {
            config,
            flags,
            clipboard: None,
        })
    }

    /// Run the CLI. Returns `Err(Done)` for early exits, `Ok(())` when a
    /// generation was performed.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        prompts::set_quiet(self.flags.quiet);
        self.handle_prefs()?;
        self.handle_history()?;
        self.handle_strength_only()?;
        self.setup_clipboard();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            help::print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    fn handle_prefs(&self) -> Result<(), Done> {
        if self.flags.reset {
            match prefs::reset() {
                Ok(()) => prompts::warn("Preferences reset to defaults."),
                Err(e) => prompts::error(&format!("Failed to reset preferences: {}", e)),
            }
            return Err(Done);
        }
        if self.flags.save
            && let Err(e) = prefs::save(&self.config)
        {
            prompts::warn(&format!("Failed to save preferences: {}", e));
        }
        Ok(())
    }

    fn handle_history(&self) -> Result<(), Done> {
        if self.flags.clear_history {
            let mut history = History::load();
            match history.clear() {
                Ok(()) => prompts::warn("History cleared."),
                Err(e) => prompts::error(&format!("Failed to clear history: {}", e)),
            }
            return Err(Done);
        }
        if self.flags.history {
            let history = History::load();
            if history.is_empty() {
                println!("(no history)");
            } else {
                for entry in history.entries() {
                    println!("{}  {}", entry.created_at.format("%Y-%m-%d %H:%M:%S"), entry.value);
                }
            }
            return Err(Done);
        }
        Ok(())
    }

    fn handle_strength_only(&self) -> Result<(), Done> {
        if self.flags.strength_only {
            println!(
                "{} (~{:.0} bits)",
                strength::estimate(&self.config),
                strength::entropy_bits(&self.config)
            );
            return Err(Done);
        }
        Ok(())
    }

    fn setup_clipboard(&mut self) {
        if !self.flags.clipboard {
            return;
        }
        match ClipboardContext::new() {
            Ok(ctx) => self.clipboard = Some(ctx),
            Err(_) => {
                if !prompts::clipboard_fallback_prompt() {
                    std::process::exit(0);
                }
            }
        }
    }

    /// Generate, record to history, and hand off to clipboard or stdout.
    fn generate_output(&mut self) {
        let generated = match pass::generate(&self.config) {
            Ok(generated) => generated,
            Err(e) => {
                prompts::error(&e.to_string());
                std::process::exit(1);
            }
        };

        let passwords = generated.into_vec();
        let mut history = History::load();
        history.add(&passwords);
        if let Err(e) = history.save() {
            prompts::warn(&format!("Failed to save history: {}", e));
        }

        let mut text = passwords.join("\n");
        if let Some(ctx) = self.clipboard.as_mut() {
            match ctx.set_contents(text.clone()) {
                Ok(()) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied(passwords.len());
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
        } else {
            println!("{}", text);
        }
        text.zeroize();

        prompts::strength_line(
            strength::estimate(&self.config).as_str(),
            strength::entropy_bits(&self.config),
        );
    }
}
