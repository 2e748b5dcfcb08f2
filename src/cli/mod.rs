use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CliInvocation {
    PrintHelp,
    PrintVersion,
    Tui {
        log_path: Option<PathBuf>,
        theme: Option<crate::infra::ThemeChoice>,
    },
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum CliParseError {
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("missing value for flag: {0}")]
    MissingFlagValue(String),

    #[error("invalid value for {flag}: {value}")]
    InvalidFlagValue { flag: String, value: String },

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

pub fn parse_invocation(args: &[String]) -> Result<CliInvocation, CliParseError> {
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return Ok(CliInvocation::PrintHelp);
    }
    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        return Ok(CliInvocation::PrintVersion);
    }

    let mut log_path: Option<PathBuf> = None;
    let mut theme: Option<crate::infra::ThemeChoice> = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--theme" | "-t" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliParseError::MissingFlagValue("--theme".to_string()))?;
                theme = Some(match value.as_str() {
                    "dark" => crate::infra::ThemeChoice::Dark,
                    "light" => crate::infra::ThemeChoice::Light,
                    other => {
                        return Err(CliParseError::InvalidFlagValue {
                            flag: "--theme".to_string(),
                            value: other.to_string(),
                        });
                    }
                });
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CliParseError::UnknownFlag(flag.to_string()));
            }
            positional => {
                if log_path.is_some() {
                    return Err(CliParseError::UnexpectedArgument(positional.to_string()));
                }
                log_path = Some(PathBuf::from(positional));
            }
        }
    }

    Ok(CliInvocation::Tui { log_path, theme })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::ThemeChoice;

    fn args(parts: &[&str]) -> Vec<String> {
        std::iter::once("opsdeck")
            .chain(parts.iter().copied())
            .map(|part| part.to_string())
            .collect()
    }

    #[test]
    fn bare_invocation_starts_the_tui() {
        assert_eq!(
            parse_invocation(&args(&[])),
            Ok(CliInvocation::Tui {
                log_path: None,
                theme: None
            })
        );
    }

    #[test]
    fn log_path_and_theme_are_parsed() {
        assert_eq!(
            parse_invocation(&args(&["/var/log/app.log", "--theme", "light"])),
            Ok(CliInvocation::Tui {
                log_path: Some(PathBuf::from("/var/log/app.log")),
                theme: Some(ThemeChoice::Light),
            })
        );
    }

    #[test]
    fn help_wins_over_everything() {
        assert_eq!(
            parse_invocation(&args(&["foo.log", "--help"])),
            Ok(CliInvocation::PrintHelp)
        );
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(matches!(
            parse_invocation(&args(&["--frobnicate"])),
            Err(CliParseError::UnknownFlag(_))
        ));
    }

    #[test]
    fn second_positional_is_rejected() {
        assert!(matches!(
            parse_invocation(&args(&["a.log", "b.log"])),
            Err(CliParseError::UnexpectedArgument(_))
        ));
    }

    #[test]
    fn bad_theme_value_is_reported() {
        assert!(matches!(
            parse_invocation(&args(&["--theme", "solarized"])),
            Err(CliParseError::InvalidFlagValue { .. })
        ));
    }
}
