//! CLI command definitions

use crate::domain::ThemePreference;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Mood check-ins and journal entries, kept for one session", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $MOODLOG_CONFIG, else built-in defaults)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Theme preference (light, dark, system)
    #[arg(long, value_name = "THEME")]
    pub theme: Option<ThemePreference>,

    /// Start with an empty journal instead of the sample entries
    #[arg(long)]
    pub no_samples: bool,

    /// Run one command and exit; without one, read commands from stdin
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the moods you can pick from
    Moods,

    /// Record today's mood without writing anything
    Checkin {
        /// Mood label or number (e.g., calm, 2)
        mood: String,
    },

    /// Write about how you feel today
    Journal {
        /// Mood label or number (e.g., happy, 1)
        mood: String,

        /// What's on your mind
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Show today's entry
    Today,

    /// List entries, newest first
    #[command(alias = "list")]
    History {
        /// Earliest date to include (e.g., 2024-01-15, yesterday, 7d)
        #[arg(long)]
        from: Option<String>,

        /// Latest date to include
        #[arg(long)]
        to: Option<String>,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one entry in full
    Show {
        /// Entry id (see history)
        id: String,
    },

    /// Change an entry's mood, date or text
    Edit {
        /// Entry id (see history)
        id: String,

        /// New mood
        #[arg(long)]
        mood: Option<String>,

        /// New date
        #[arg(long)]
        date: Option<String>,

        /// Remove the written text
        #[arg(long, conflicts_with = "text")]
        clear: bool,

        /// New text (replaces the old text)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id (see history)
        id: String,
    },

    /// Mood distribution over recent days
    Insights {
        /// Number of days to look back, today included
        #[arg(long, default_value_t = 30)]
        days: u32,
    },

    /// Show or change the theme
    Theme {
        /// light, dark or system
        preference: Option<String>,
    },

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// One line typed into an interactive session
#[derive(Parser, Debug)]
#[command(name = "moodlog", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot_with_flags() {
        let cli = Cli::try_parse_from(["moodlog", "--theme", "light", "--no-samples", "today"]).unwrap();
        assert_eq!(cli.theme, Some(ThemePreference::Light));
        assert!(cli.no_samples);
        assert_eq!(cli.command, Some(Commands::Today));
    }

    #[test]
    fn test_parse_without_command() {
        let cli = Cli::try_parse_from(["moodlog"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_samples);
    }

    #[test]
    fn test_rejects_unknown_theme_flag() {
        assert!(Cli::try_parse_from(["moodlog", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn test_session_line_journal_collects_text() {
        let line = SessionLine::try_parse_from(["journal", "calm", "quiet", "-", "evening"]).unwrap();
        assert_eq!(
            line.command,
            Commands::Journal {
                mood: "calm".to_string(),
                text: vec!["quiet".to_string(), "-".to_string(), "evening".to_string()],
            }
        );
    }

    #[test]
    fn test_session_line_journal_without_text() {
        let line = SessionLine::try_parse_from(["journal", "calm"]).unwrap();
        assert_eq!(
            line.command,
            Commands::Journal {
                mood: "calm".to_string(),
                text: vec![],
            }
        );
    }

    #[test]
    fn test_session_line_aliases() {
        let line = SessionLine::try_parse_from(["list", "--from", "7d"]).unwrap();
        assert!(matches!(line.command, Commands::History { from: Some(_), to: None, json: false }));
        let line = SessionLine::try_parse_from(["exit"]).unwrap();
        assert_eq!(line.command, Commands::Quit);
    }

    #[test]
    fn test_session_line_edit_flags_then_text() {
        let line =
            SessionLine::try_parse_from(["edit", "abc", "--mood", "sad", "rough", "day"]).unwrap();
        assert_eq!(
            line.command,
            Commands::Edit {
                id: "abc".to_string(),
                mood: Some("sad".to_string()),
                date: None,
                clear: false,
                text: vec!["rough".to_string(), "day".to_string()],
            }
        );
    }

    #[test]
    fn test_insights_default_days() {
        let line = SessionLine::try_parse_from(["insights"]).unwrap();
        assert_eq!(line.command, Commands::Insights { days: 30 });
    }
}
