use clap::{Parser, Subcommand};
use henteklar::api::StatusFilter;
use std::path::PathBuf;

/// Environment variable that relocates the data directory.
pub const HOME_ENV: &str = "HENTEKLAR_HOME";

#[derive(Parser, Debug)]
#[command(name = "henteklar", bin_name = "henteklar", version)]
#[command(about = "Kindergarten check-in and pick-up roster", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Directory holding the session and config files
    #[arg(long, global = true, env = HOME_ENV, hide_env_values = true, help_heading = "Options")]
    pub home: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in (the demo accepts any non-empty credentials)
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Log out and forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// List children
    #[command(alias = "ls")]
    List {
        /// Attendance filter: all, in or out
        #[arg(short, long, default_value_t = StatusFilter::All)]
        status: StatusFilter,

        /// Case-insensitive name search
        #[arg(short = 'q', long)]
        search: Option<String>,
    },

    /// Show total, checked-in and checked-out counts
    Summary,

    /// Show a child's profile and contacts
    Show { id: String },

    /// Check a child in or out
    #[command(alias = "t")]
    Toggle { id: String },

    /// Make a contact the child's primary contact
    Primary {
        /// Id of the child
        child: String,

        /// Id of the contact (e.g. p2)
        contact: String,
    },

    /// Print call and email links for a child's contacts
    Contacts { id: String },

    /// Get or set configuration
    Config {
        /// Configuration key (language, login-delay-ms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive session that keeps one roster for its whole lifetime
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_filters() {
        let cli = Cli::try_parse_from(["henteklar", "list", "--status", "in", "-q", "emma"]).unwrap();
        match cli.command {
            Some(Commands::List { status, search }) => {
                assert_eq!(status, StatusFilter::In);
                assert_eq!(search.as_deref(), Some("emma"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn list_defaults_to_all() {
        let cli = Cli::try_parse_from(["henteklar", "ls"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                status: StatusFilter::All,
                search: None
            })
        ));
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(Cli::try_parse_from(["henteklar", "list", "--status", "maybe"]).is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["henteklar", "toggle", "3", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Toggle { ref id }) if id == "3"));
    }
}
