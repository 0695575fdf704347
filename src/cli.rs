use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tokio::io::BufReader;
use tracing::info;

use crate::config::{self, AppConfig};
use crate::core::engine::Engine;
use crate::hangman::plain::{self, OutputFormat};
use crate::hangman::{GameEngine, HangmanGame, Theme};
use crate::logging;

#[derive(Parser)]
#[command(name = "hangterm")]
#[command(about = "🎩 Hangman in your terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a game (default)
    Play(PlayArgs),
    /// List available themes
    Themes,
}

#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Phrase theme, e.g. "thanksgiving" or "native-american"
    #[arg(short, long)]
    pub theme: Option<Theme>,

    /// Seed for phrase selection (repeatable games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Line-based mode reading commands from stdin
    #[arg(long)]
    pub plain: bool,

    /// Print each state as JSON (plain mode only)
    #[arg(long, requires = "plain")]
    pub json: bool,
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config()?;

    match cli.command {
        Some(Commands::Themes) => {
            println!("🎮 Available themes:");
            println!();
            for theme in Theme::ALL {
                println!("📦 {} ({} phrases)", theme, theme.phrases().len());
                println!("   --theme {}", theme.slug());
                println!();
            }
            Ok(())
        }
        Some(Commands::Play(args)) => play(args, config).await,
        None => play(PlayArgs::default(), config).await,
    }
}

fn build_engine(args: &PlayArgs, config: &AppConfig) -> GameEngine {
    let theme = args.theme.unwrap_or(config.theme);
    match args.seed.or(config.seed) {
        Some(seed) => GameEngine::seeded(theme, seed),
        None => GameEngine::new(theme),
    }
}

async fn play(args: PlayArgs, config: AppConfig) -> Result<()> {
    logging::init(&config.logging);

    let mut engine = build_engine(&args, &config);
    info!(theme = %engine.theme(), plain = args.plain, "starting");

    if args.plain {
        let format = if args.json { OutputFormat::Json } else { OutputFormat::Text };
        let stdin = BufReader::new(tokio::io::stdin());
        return plain::run(&mut engine, stdin, tokio::io::stdout(), format).await;
    }

    let terminal = ratatui::try_init()?;
    let result = Engine::new(HangmanGame::new(engine)).run(terminal).await;
    ratatui::restore();

    let game = result?;
    info!(status = ?game.engine().status(), "exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_args(argv: &[&str]) -> PlayArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Some(Commands::Play(args)) => args,
            _ => panic!("expected play"),
        }
    }

    #[test]
    fn test_parse_play_flags() {
        let args = play_args(&["hangterm", "play", "--theme", "Christmas", "--seed", "5", "--plain", "--json"]);
        assert_eq!(args.theme, Some(Theme::Christmas));
        assert_eq!(args.seed, Some(5));
        assert!(args.plain && args.json);
    }

    #[test]
    fn test_unknown_theme_is_an_error() {
        let err = Cli::try_parse_from(["hangterm", "play", "--theme", "easter"]).err().unwrap();
        assert!(err.to_string().contains("unknown theme 'easter'"));
    }

    #[test]
    fn test_json_requires_plain() {
        assert!(Cli::try_parse_from(["hangterm", "play", "--json"]).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = AppConfig {
            theme: Theme::Thanksgiving,
            seed: Some(1),
            ..AppConfig::default()
        };
        let from_config = build_engine(&PlayArgs::default(), &config);
        assert_eq!(from_config.theme(), Theme::Thanksgiving);

        let args = PlayArgs {
            theme: Some(Theme::Christmas),
            seed: Some(1),
            ..PlayArgs::default()
        };
        let engine = build_engine(&args, &config);
        assert_eq!(engine.theme(), Theme::Christmas);
        assert_eq!(engine.target_phrase(), GameEngine::seeded(Theme::Christmas, 1).target_phrase());
    }
}
