use derive_new::new;
use serde::{Deserialize, Serialize};
use snafu::Snafu;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseId;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                if input.is_empty() || input.chars().any(char::is_whitespace) {
                    return Err(ParseId::new(input.to_string()));
                }

                Ok(Self(input.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(input: &str) -> Self {
                Self(input.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(TaskId);
define_id!(UserId);
define_id!(VictoryId);

impl VictoryId {
    /// Fresh feed-unique id for a newly shared victory.
    pub fn generate() -> VictoryId {
        VictoryId(format!("victory-{}", Uuid::new_v4()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Snafu, new)]
#[snafu(display("Failed to parse id: `{}`", text))]
pub struct ParseId {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank_ids() {
        assert!("task-4".parse::<TaskId>().is_ok());
        assert!("".parse::<TaskId>().is_err());
        assert!("task 4".parse::<TaskId>().is_err());
    }

    #[test]
    fn generated_victory_ids_are_unique() {
        assert_ne!(VictoryId::generate(), VictoryId::generate());
    }
}
