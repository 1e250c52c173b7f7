use thiserror::Error;

use crate::game::types::Location;

/// Reasons a command is rejected. The `Display` text is exactly what the
/// player sees, so a rejected command is still a normal reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    // Malformed commands
    /// First token is not a known verb.
    #[error("неизвестная команда")]
    UnknownCommand(String),

    /// Verb given without the arguments it needs. Carries the usage reply.
    #[error("{0}")]
    MissingArgument(&'static str),

    // Invalid targets
    #[error("нет пути в {0}")]
    NoPath(String),

    #[error("нет такого")]
    NoSuchItem(String),

    #[error("нельзя надеть")]
    NotWearable(String),

    #[error("не к чему применить")]
    NothingToApply,

    #[error("ты в неизвестной комнате")]
    RoomNotFound(Location),

    // Unmet preconditions
    #[error("дверь закрыта")]
    ExitLocked(String),

    #[error("некуда класть")]
    NoContainer,

    #[error("нет предмета в инвентаре - {0}")]
    NotInInventory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_echo_the_player_words() {
        assert_eq!(GameError::NoPath("подвал".into()).to_string(), "нет пути в подвал");
        assert_eq!(
            GameError::NotInInventory("ключи".into()).to_string(),
            "нет предмета в инвентаре - ключи"
        );
        assert_eq!(
            GameError::MissingArgument("не указано что взять").to_string(),
            "не указано что взять"
        );
        assert_eq!(GameError::NoSuchItem("ложка".into()).to_string(), "нет такого");
    }
}
