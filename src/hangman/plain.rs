//! Line-oriented front end for pipes and scripts.
//!
//! Each input line is one command: a letter to guess (the first alphabetic
//! character on the line), `:restart`, `:theme <name>` or `:quit`. The
//! state is printed after every command, as text or as one JSON object per
//! line.

use anyhow::Result;
use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::warn;

use crate::hangman::engine::{GameEngine, MAX_INCORRECT};
use crate::hangman::game::describe;
use crate::hangman::view::GameView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(char),
    Restart,
    Theme(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix(':') {
        let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        return match name {
            "restart" | "r" => Some(Command::Restart),
            "theme" | "t" => Some(Command::Theme(arg.trim().to_string())),
            "quit" | "q" => Some(Command::Quit),
            _ => None,
        };
    }
    line.chars().find(|c| c.is_ascii_alphabetic()).map(Command::Guess)
}

pub fn render_text(view: &GameView) -> String {
    let wrong: String = view.incorrect_guesses.iter().collect();
    let mut text = format!(
        "[{}] {}   wrong: {} ({}/{})",
        view.theme,
        view.pattern,
        if wrong.is_empty() { "-" } else { wrong.as_str() },
        view.incorrect_count,
        MAX_INCORRECT
    );
    if view.is_over() {
        text.push('\n');
        text.push_str(&view.message);
        if let Some(answer) = &view.answer {
            text.push_str(&format!(" The phrase was '{}'.", answer));
        }
    }
    text
}

pub async fn run<R, W>(engine: &mut GameEngine, input: R, mut output: W, format: OutputFormat) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_view(&mut output, &engine.view(), format).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_line(&line) else {
            write_note(&mut output, format, "Commands: a letter, :restart, :theme <name>, :quit").await?;
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Restart => engine.restart(),
            Command::Theme(name) => {
                if let Err(e) = engine.pick_theme_by_name(&name) {
                    warn!(%e, "theme change rejected");
                    write_error(&mut output, format, &e.to_string()).await?;
                    continue;
                }
            }
            Command::Guess(letter) => {
                let outcome = engine.make_guess(letter);
                if format == OutputFormat::Text {
                    write_note(&mut output, format, &describe(outcome, letter)).await?;
                }
            }
        }
        write_view(&mut output, &engine.view(), format).await?;
    }

    output.flush().await?;
    Ok(())
}

async fn write_view<W: AsyncWrite + Unpin>(out: &mut W, view: &GameView, format: OutputFormat) -> Result<()> {
    let line = match format {
        OutputFormat::Text => render_text(view),
        OutputFormat::Json => serde_json::to_string(view)?,
    };
    out.write_all(format!("{}\n", line).as_bytes()).await?;
    Ok(())
}

async fn write_note<W: AsyncWrite + Unpin>(out: &mut W, format: OutputFormat, note: &str) -> Result<()> {
    let line = match format {
        OutputFormat::Text => note.to_string(),
        OutputFormat::Json => json!({ "note": note }).to_string(),
    };
    out.write_all(format!("{}\n", line).as_bytes()).await?;
    Ok(())
}

async fn write_error<W: AsyncWrite + Unpin>(out: &mut W, format: OutputFormat, error: &str) -> Result<()> {
    let line = match format {
        OutputFormat::Text => format!("error: {}", error),
        OutputFormat::Json => json!({ "error": error }).to_string(),
    };
    out.write_all(format!("{}\n", line).as_bytes()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hangman::theme::Theme;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("a"), Some(Command::Guess('a')));
        assert_eq!(parse_line("  7 X"), Some(Command::Guess('X')));
        assert_eq!(parse_line(":restart"), Some(Command::Restart));
        assert_eq!(parse_line(":theme Native American"), Some(Command::Theme("Native American".into())));
        assert_eq!(parse_line(":q"), Some(Command::Quit));
        assert_eq!(parse_line(":nope"), None);
        assert_eq!(parse_line("123"), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn test_render_text() {
        let mut engine = GameEngine::with_phrase(Theme::NativeAmerican, "bone", 0).unwrap();
        assert_eq!(render_text(&engine.view()), "[Native American] ----   wrong: - (0/6)");
        engine.make_guess('o');
        engine.make_guess('x');
        assert_eq!(render_text(&engine.view()), "[Native American] -o--   wrong: x (1/6)");
    }

    #[tokio::test]
    async fn test_run_text_session() {
        let mut engine = GameEngine::with_phrase(Theme::Thanksgiving, "corn", 0).unwrap();
        let input = b"c\no\nr\nn\nz\n:quit\nq\n";
        let mut out = Vec::new();

        run(&mut engine, &input[..], &mut out, OutputFormat::Text).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("[Thanksgiving] corn   wrong: - (0/6)"));
        assert!(out.contains("Congratulations! You win! The phrase was 'corn'."));
        assert!(out.contains("Game over! Press Enter for a new phrase."));
        assert!(engine.has_won());
        assert_eq!(engine.incorrect_count(), 0);
    }

    #[tokio::test]
    async fn test_run_rejects_unknown_theme() {
        let mut engine = GameEngine::with_phrase(Theme::Thanksgiving, "corn", 0).unwrap();
        let input = b":theme easter\n:theme christmas\n";
        let mut out = Vec::new();

        run(&mut engine, &input[..], &mut out, OutputFormat::Text).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("error: unknown theme 'easter'"));
        assert_eq!(engine.theme(), Theme::Christmas);
    }

    #[tokio::test]
    async fn test_run_json_lines() {
        let mut engine = GameEngine::with_phrase(Theme::NativeAmerican, "bone", 0).unwrap();
        let input = b"b\n:theme nowhere\n";
        let mut out = Vec::new();

        run(&mut engine, &input[..], &mut out, OutputFormat::Json).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["pattern"], "----");
        assert_eq!(lines[1]["pattern"], "b---");
        assert_eq!(lines[1]["theme"], "native-american");
        assert_eq!(lines[1]["status"], "in_progress");
        assert!(lines[2]["error"].as_str().unwrap().contains("nowhere"));
    }
}
