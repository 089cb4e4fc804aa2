use std::fmt;
use std::path::PathBuf;

/// Source of the payload text handed to the materializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadInput {
    Stdin,
    File(PathBuf),
    /// Payload passed directly on the command line.
    Inline(String),
}

impl PayloadInput {
    /// Maps the CLI's positional argument: missing or `-` means stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => PayloadInput::Stdin,
            Some(path) => PayloadInput::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for PayloadInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadInput::Stdin => write!(f, "<stdin>"),
            PayloadInput::File(path) => write!(f, "{}", path.display()),
            PayloadInput::Inline(_) => write!(f, "<inline>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg_stdin() {
        assert_eq!(PayloadInput::from_arg(None), PayloadInput::Stdin);
        assert_eq!(PayloadInput::from_arg(Some("-")), PayloadInput::Stdin);
    }

    #[test]
    fn test_from_arg_file() {
        assert_eq!(
            PayloadInput::from_arg(Some("releases.json")),
            PayloadInput::File(PathBuf::from("releases.json"))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(PayloadInput::Stdin.to_string(), "<stdin>");
        assert_eq!(
            PayloadInput::File(PathBuf::from("/tmp/a.json")).to_string(),
            "/tmp/a.json"
        );
        assert_eq!(PayloadInput::Inline("{}".into()).to_string(), "<inline>");
    }
}
