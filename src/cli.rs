//! Command-line argument parsing for the gamedeck CLI.
//!
//! This module handles parsing command-line arguments and determining
//! what to run.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run the TUI application (default)
    RunTui {
        /// Deep-link query string overriding the stored location
        link: Option<String>,
        /// Override for the catalog API base URL
        api_url: Option<String>,
    },
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use gamedeck::cli::{parse_args, CliCommand};
///
/// let args = vec!["gamedeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut link = None;
    let mut api_url = None;

    let mut args = args.skip(1); // program name
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--link" => link = args.next(),
            "--api-url" => api_url = args.next(),
            other => {
                // A bare query string works as a deep link too:
                // `gamedeck "category_id=2&page=3&per_page=50"`.
                if link.is_none() && !other.starts_with('-') {
                    link = Some(other.to_string());
                }
            }
        }
    }

    CliCommand::RunTui { link, api_url }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_runs_tui() {
        assert_eq!(
            parse(&["gamedeck"]),
            CliCommand::RunTui {
                link: None,
                api_url: None
            }
        );
    }

    #[test]
    fn test_version_flags() {
        assert_eq!(parse(&["gamedeck", "--version"]), CliCommand::Version);
        assert_eq!(parse(&["gamedeck", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_link_flag() {
        assert_eq!(
            parse(&["gamedeck", "--link", "page=3&per_page=50"]),
            CliCommand::RunTui {
                link: Some("page=3&per_page=50".to_string()),
                api_url: None
            }
        );
    }

    #[test]
    fn test_bare_query_string_is_a_link() {
        assert_eq!(
            parse(&["gamedeck", "category_id=2&page=2&per_page=20"]),
            CliCommand::RunTui {
                link: Some("category_id=2&page=2&per_page=20".to_string()),
                api_url: None
            }
        );
    }

    #[test]
    fn test_api_url_flag() {
        let command = parse(&["gamedeck", "--api-url", "http://localhost:8080"]);
        assert_eq!(
            command,
            CliCommand::RunTui {
                link: None,
                api_url: Some("http://localhost:8080".to_string())
            }
        );
    }
}
