use super::*;
use chumsky::{prelude::*, text::whitespace};
use itertools::Itertools;

use crate::model::{MediaType, TaskId, TaskStatus, UserId, VictoryId};

#[derive(Debug, Snafu)]
#[snafu(display("cannot parse '{input}' - {}", self.combine_errors("\n")))]
pub struct ParseError {
    input: String,
    errors: Vec<Simple<char>>,
}

impl ParseError {
    fn combine_errors(&self, separator: &str) -> String {
        self.errors.iter().map(|err| err.to_string()).join(separator)
    }
}

pub fn parse(input: &str) -> Result<Action, ParseError> {
    let action = program().parse(input).map_err(|errors| ParseError {
        input: input.to_string(),
        errors,
    })?;

    Ok(action)
}

fn program() -> impl Parser<char, Action, Error = Simple<char>> {
    action_move()
        .or(action_upvote())
        .or(action_victory())
        .or(action_board())
        .or(action_leaderboard())
        .or(action_feed())
        .or(action_skip())
        .or(action_exit())
        .then_ignore(end())
}

fn action_move() -> impl Parser<char, Action, Error = Simple<char>> {
    just("move")
        .then_ignore(whitespace().at_least(1))
        .ignore_then(task_ref())
        .then_ignore(whitespace().at_least(1))
        .then(status())
        .map(|(task_id, status)| Action::Move { task_id, status })
}

fn action_upvote() -> impl Parser<char, Action, Error = Simple<char>> {
    just("upvote")
        .then_ignore(whitespace().at_least(1))
        .ignore_then(victory_ref())
        .then_ignore(whitespace().at_least(1))
        .then(user_ref())
        .map(|(victory_id, voter)| Action::Upvote { victory_id, voter })
}

fn action_victory() -> impl Parser<char, Action, Error = Simple<char>> {
    just("victory")
        .then_ignore(whitespace().at_least(1))
        .ignore_then(media())
        .then(whitespace().at_least(1).ignore_then(word()).or_not())
        .map(|(media_type, media_url)| Action::Victory {
            media_type,
            media_url,
        })
}

fn action_board() -> impl Parser<char, Action, Error = Simple<char>> {
    just("board").to(Action::Board)
}

fn action_leaderboard() -> impl Parser<char, Action, Error = Simple<char>> {
    just("leaderboard").to(Action::Leaderboard)
}

fn action_feed() -> impl Parser<char, Action, Error = Simple<char>> {
    just("feed").to(Action::Feed)
}

fn action_skip() -> impl Parser<char, Action, Error = Simple<char>> {
    just("skip").to(Action::Skip)
}

fn action_exit() -> impl Parser<char, Action, Error = Simple<char>> {
    choice((just("exit"), just("quit"))).to(Action::Exit)
}

fn word() -> impl Parser<char, String, Error = Simple<char>> {
    filter(|c: &char| !c.is_whitespace())
        .repeated()
        .at_least(1)
        .map(|chars| chars.into_iter().collect())
}

fn task_ref() -> impl Parser<char, TaskId, Error = Simple<char>> {
    word().try_map(|word, span| {
        word.parse()
            .map_err(|_| Simple::custom(span, "invalid task id"))
    })
}

fn victory_ref() -> impl Parser<char, VictoryId, Error = Simple<char>> {
    word().try_map(|word, span| {
        word.parse()
            .map_err(|_| Simple::custom(span, "invalid victory id"))
    })
}

fn user_ref() -> impl Parser<char, UserId, Error = Simple<char>> {
    word().try_map(|word, span| {
        word.parse()
            .map_err(|_| Simple::custom(span, "invalid user id"))
    })
}

fn status() -> impl Parser<char, TaskStatus, Error = Simple<char>> {
    word().try_map(|word, span| {
        word.parse::<TaskStatus>()
            .map_err(|err| Simple::custom(span, err.to_string()))
    })
}

fn media() -> impl Parser<char, MediaType, Error = Simple<char>> {
    choice((
        just("video").to(MediaType::Video),
        just("screenshot").to(MediaType::Screenshot),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_grammar() {
        let action = program().parse("move task-4 done").unwrap();

        assert_eq!(
            action,
            Action::Move {
                task_id: "task-4".into(),
                status: TaskStatus::Done,
            }
        );
    }

    #[test]
    fn upvote_grammar() {
        let action = program().parse("upvote victory-1 user-2").unwrap();

        assert_eq!(
            action,
            Action::Upvote {
                victory_id: "victory-1".into(),
                voter: "user-2".into(),
            }
        );
    }

    #[test]
    fn victory_grammar_defaults_the_url() {
        let action = program().parse("victory screenshot").unwrap();

        assert_eq!(
            action,
            Action::Victory {
                media_type: MediaType::Screenshot,
                media_url: None,
            }
        );

        let action = program().parse("victory video /clip.mp4").unwrap();

        assert_eq!(
            action,
            Action::Victory {
                media_type: MediaType::Video,
                media_url: Some("/clip.mp4".to_string()),
            }
        );
    }

    #[test]
    fn bare_words_map_to_views() {
        assert_eq!(program().parse("board").unwrap(), Action::Board);
        assert_eq!(program().parse("leaderboard").unwrap(), Action::Leaderboard);
        assert_eq!(program().parse("feed").unwrap(), Action::Feed);
        assert_eq!(program().parse("quit").unwrap(), Action::Exit);
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(parse("yeet task-1").is_err());
        assert!(parse("move task-4 blocked").is_err());
        assert!(parse("boardgame").is_err());
    }
}
