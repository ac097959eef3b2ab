//! Parsing of terminal input lines into commands.

use kinrow_server::infrastructure::dto::websocket::ClientMessage;
use thiserror::Error;

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `<row> <col>`
    Move { row: usize, col: usize },
    /// `/new <size> <win>`
    Configure {
        board_size: usize,
        win_length: usize,
    },
    /// `/help`
    Help,
    /// `/quit` or `/exit`
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}', type /help for the list of commands")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a non-negative number")]
    InvalidNumber(String),
}

const MOVE_USAGE: &str = "<row> <col>";
const NEW_USAGE: &str = "/new <size> <win>";

impl Command {
    /// Parse a trimmed, non-empty input line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            ["/quit" | "/exit"] => Ok(Command::Quit),
            ["/help"] => Ok(Command::Help),
            ["/new", size, win] => Ok(Command::Configure {
                board_size: parse_number(size)?,
                win_length: parse_number(win)?,
            }),
            ["/new", ..] => Err(CommandError::Usage(NEW_USAGE)),
            [first, ..] if first.starts_with('/') => {
                Err(CommandError::UnknownCommand(first.to_string()))
            }
            [row, col] => Ok(Command::Move {
                row: parse_number(row)?,
                col: parse_number(col)?,
            }),
            _ => Err(CommandError::Usage(MOVE_USAGE)),
        }
    }

    /// The frame to send for this command, if it talks to the server
    pub fn to_message(self) -> Option<ClientMessage> {
        match self {
            Command::Move { row, col } => Some(ClientMessage::Move { row, col }),
            Command::Configure {
                board_size,
                win_length,
            } => Some(ClientMessage::Configure {
                board_size,
                win_length,
            }),
            Command::Help | Command::Quit => None,
        }
    }
}

fn parse_number(token: &str) -> Result<usize, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::InvalidNumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        // テスト項目: "<row> <col>" が着手コマンドとして解釈される
        // given (前提条件):
        let line = "1 2";

        // when (操作):
        let result = Command::parse(line);

        // then (期待する結果):
        assert_eq!(result, Ok(Command::Move { row: 1, col: 2 }));
    }

    #[test]
    fn test_parse_move_with_extra_spaces() {
        // テスト項目: 連続する空白は区切りとして扱われる
        // given (前提条件):
        let line = "  10    4 ";

        // when (操作):
        let result = Command::parse(line);

        // then (期待する結果):
        assert_eq!(result, Ok(Command::Move { row: 10, col: 4 }));
    }

    #[test]
    fn test_parse_new_game() {
        // テスト項目: "/new <size> <win>" が盤面構成コマンドとして解釈される
        // given (前提条件):
        let line = "/new 15 5";

        // when (操作):
        let result = Command::parse(line);

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(Command::Configure {
                board_size: 15,
                win_length: 5
            })
        );
    }

    #[test]
    fn test_parse_new_game_with_missing_argument() {
        // テスト項目: 引数が足りない /new は使い方を返す
        // given (前提条件):
        let line = "/new 3";

        // when (操作):
        let result = Command::parse(line);

        // then (期待する結果):
        assert_eq!(result, Err(CommandError::Usage(NEW_USAGE)));
    }

    #[test]
    fn test_parse_quit_and_help() {
        // テスト項目: /quit, /exit, /help が解釈される
        // given (前提条件):
        let lines = ["/quit", "/exit", "/help"];

        // when (操作):
        let results: Vec<_> = lines.iter().map(|line| Command::parse(line)).collect();

        // then (期待する結果):
        assert_eq!(
            results,
            vec![Ok(Command::Quit), Ok(Command::Quit), Ok(Command::Help)]
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        // テスト項目: 未知のスラッシュコマンドはエラーになる
        // given (前提条件):
        let line = "/undo";

        // when (操作):
        let result = Command::parse(line);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(CommandError::UnknownCommand("/undo".to_string()))
        );
    }

    #[test]
    fn test_parse_negative_coordinate() {
        // テスト項目: 負の座標は数値エラーになる
        // given (前提条件):
        let line = "-1 2";

        // when (操作):
        let result = Command::parse(line);

        // then (期待する結果):
        assert_eq!(result, Err(CommandError::InvalidNumber("-1".to_string())));
    }

    #[test]
    fn test_parse_single_token() {
        // テスト項目: 座標が 1 つだけの入力は使い方を返す
        // given (前提条件):
        let line = "3";

        // when (操作):
        let result = Command::parse(line);

        // then (期待する結果):
        assert_eq!(result, Err(CommandError::Usage(MOVE_USAGE)));
    }

    #[test]
    fn test_to_message() {
        // テスト項目: サーバーへ送るコマンドだけがフレームに変換される
        // given (前提条件):
        let configure = Command::Configure {
            board_size: 3,
            win_length: 3,
        };

        // when (操作):
        let configure_message = configure.to_message();
        let quit_message = Command::Quit.to_message();

        // then (期待する結果):
        assert_eq!(
            configure_message,
            Some(ClientMessage::Configure {
                board_size: 3,
                win_length: 3
            })
        );
        assert_eq!(quit_message, None);
    }
}
