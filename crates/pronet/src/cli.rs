//! Clap derive structures for the `pronet` CLI.
//!
//! Defines the complete command tree, global flags, and shared value enums.
//! Kept free of crate-internal imports so `build.rs` can include it for
//! man page generation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// pronet -- drive the pronet client core from a terminal
#[derive(Debug, Parser)]
#[command(
    name = "pronet",
    version,
    about = "Drive the pronet professional-networking client from the command line",
    long_about = "Headless host for the pronet client core.\n\n\
        Walks the onboarding, sign-in and discovery flows against built-in\n\
        mock services. Flow flags persist between runs unless --ephemeral is set.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct GlobalOpts {
    /// Output format (defaults to the config file's setting)
    #[arg(long, short = 'o', env = "PRONET_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Flag-state file (overrides the config file)
    #[arg(long, env = "PRONET_STATE_FILE", global = true, conflicts_with = "ephemeral")]
    pub state_file: Option<PathBuf>,

    /// Keep flow flags in memory only for this run
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

impl GlobalOpts {
    /// Resolved output format.
    pub fn format(&self) -> OutputFormat {
        self.output.clone().unwrap_or(OutputFormat::Table)
    }

    /// Resolved color mode.
    pub fn color_mode(&self) -> ColorMode {
        self.color.clone().unwrap_or(ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Domain value enums ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SwipeArg {
    Like,
    Pass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CountryArg {
    /// United States (+1)
    Us,
    /// United Kingdom (+44)
    Gb,
    /// Bangladesh (+880)
    Bd,
    /// India (+91)
    In,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FilterArg {
    #[default]
    All,
    Messages,
    Matches,
    System,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the persisted flags and the flow they select
    Flow,

    /// Introduction slides and onboarding completion
    #[command(alias = "ob")]
    Onboarding(OnboardingArgs),

    /// Phone/OTP and OAuth sign-in
    Auth(AuthArgs),

    /// Swipe through the discovery deck
    #[command(alias = "d")]
    Discover(DiscoverArgs),

    /// Conversations and chat threads
    #[command(alias = "c")]
    Chats(ChatsArgs),

    /// List notifications
    #[command(alias = "n")]
    Notifications(NotificationsArgs),

    /// Own and other members' profiles
    #[command(alias = "p")]
    Profile(ProfileArgs),

    /// Interactive session across all flows
    Session,

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Onboarding ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct OnboardingArgs {
    #[command(subcommand)]
    pub command: OnboardingCommand,
}

#[derive(Debug, Subcommand)]
pub enum OnboardingCommand {
    /// List the introduction slides
    Slides,

    /// Acknowledge onboarding with the server and mark it complete
    Complete {
        /// Make the mock onboarding service reject the request
        #[arg(long, hide = true)]
        simulate_failure: bool,
    },
}

// ── Auth ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Send a one-time code to a phone number
    SendCode {
        /// Phone number without the country prefix
        phone: String,

        /// Country dial code
        #[arg(long, short = 'c', value_enum, default_value = "us")]
        country: CountryArg,
    },

    /// Verify a six-digit code and sign in
    Verify {
        /// The code received by SMS
        code: String,
    },

    /// Sign in with an OAuth provider
    Oauth {
        /// Provider name
        #[arg(default_value = "linkedin")]
        provider: String,
    },

    /// Sign out (onboarding stays complete)
    Logout,
}

// ── Discover ─────────────────────────────────────────────────────────

/// Deck settings that override the config file for one run.
#[derive(Debug, Args)]
pub struct DeckOpts {
    /// Drop swiped cards instead of recycling them
    #[arg(long)]
    pub linear: bool,

    /// Free swipes allowed today (0 = unlimited)
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,
}

#[derive(Debug, Args)]
pub struct DiscoverArgs {
    #[command(subcommand)]
    pub command: DiscoverCommand,
}

#[derive(Debug, Subcommand)]
pub enum DiscoverCommand {
    /// Show the deck in order, top card first
    Deck {
        #[command(flatten)]
        deck: DeckOpts,
    },

    /// Apply a sequence of swipes and report each outcome
    Swipe {
        /// Swipes to apply, in order
        #[arg(required = true, value_enum)]
        actions: Vec<SwipeArg>,

        #[command(flatten)]
        deck: DeckOpts,
    },
}

// ── Chats ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ChatsArgs {
    #[command(subcommand)]
    pub command: ChatsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ChatsCommand {
    /// List conversations
    #[command(alias = "ls")]
    List {
        /// Filter on partner name or last message
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show the thread with a partner
    Thread {
        /// Partner name (case-insensitive, partial match)
        partner: String,

        /// Send a message before showing the thread
        #[arg(long)]
        send: Option<String>,
    },
}

// ── Notifications ────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NotificationsArgs {
    /// Only show one kind
    #[arg(long, short = 'f', value_enum, default_value = "all")]
    pub filter: FilterArg,

    /// Only show unread items
    #[arg(long)]
    pub unread: bool,
}

// ── Profile ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show your own profile
    Show,

    /// Show another member's public profile
    View {
        /// Profile id or full name
        id: String,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Print the config and state file locations
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
