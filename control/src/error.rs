//! Failures the device cannot recover from.

use core::fmt;

/// Peripheral whose bring-up failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Component {
    AudioCodec,
    Display,
    DisplaySelfTest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A collaborator failed to initialize, carrying its raw status code.
    InitializationFailure { component: Component, status: i32 },
}

impl Error {
    /// Raw status code of the failing collaborator, used as exit code.
    #[must_use]
    pub fn status(&self) -> i32 {
        match self {
            Self::InitializationFailure { status, .. } => *status,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AudioCodec => write!(f, "audio codec"),
            Self::Display => write!(f, "display"),
            Self::DisplaySelfTest => write!(f, "display self-test"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitializationFailure { component, status } => {
                write!(f, "{component} failed to initialize with status {status}")
            }
        }
    }
}

pub(crate) trait InitResultExt {
    fn or_fail(self, component: Component) -> Result<(), Error>;
}

impl InitResultExt for Result<(), i32> {
    fn or_fail(self, component: Component) -> Result<(), Error> {
        self.map_err(|status| Error::InitializationFailure { component, status })
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use heapless::String;

    use super::*;

    #[test]
    fn when_collaborator_fails_its_status_is_kept() {
        let result: Result<(), i32> = Err(-3);
        let error = result.or_fail(Component::Display).unwrap_err();
        assert_eq!(
            error,
            Error::InitializationFailure {
                component: Component::Display,
                status: -3
            }
        );
        assert_eq!(error.status(), -3);
    }

    #[test]
    fn when_formatted_it_names_component_and_status() {
        let error = Error::InitializationFailure {
            component: Component::DisplaySelfTest,
            status: -1,
        };
        let mut text: String<64> = String::new();
        write!(text, "{error}").unwrap();
        assert_eq!(
            text.as_str(),
            "display self-test failed to initialize with status -1"
        );
    }

    #[test]
    fn when_collaborator_succeeds_it_passes_through() {
        let result: Result<(), i32> = Ok(());
        assert!(result.or_fail(Component::AudioCodec).is_ok());
    }
}
