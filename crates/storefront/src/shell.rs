//! Interactive command shell.
//!
//! Each input line parses into a [`Command`]; [`execute`] applies it to the
//! session and renders the resulting screen. Refused actions never abort the
//! shell: they come back as a destructive notice in the output.

use std::fmt;
use std::str::FromStr;

use askama::Template;
use secrecy::SecretString;
use thiserror::Error;
use tracing::{debug, instrument};

use levelup_core::{FilterTag, ListingId, Price};

use crate::error::{AppError, Result};
use crate::models::Notice;
use crate::state::{AppState, View};
use crate::views::{
    CatalogTemplate, ContactsTemplate, DashboardTemplate, FaqTemplate, HelpTemplate,
    HomeTemplate, ListingTemplate, MessageTemplate, NoticeTemplate, TranscriptTemplate,
};

/// A parsed shell command.
#[derive(Debug)]
pub enum Command {
    Help,
    Home,
    /// Show the catalog, switching filter first when a tag is given.
    Catalog(Option<FilterTag>),
    Show(ListingId),
    Buy(ListingId),
    LoginSteam,
    LoginEmail {
        email: String,
        password: SecretString,
    },
    Logout,
    Dashboard,
    TopUp(Price),
    /// Set the avatar URL; empty clears it.
    Avatar(String),
    Sell {
        price: Price,
        title: String,
    },
    Faq,
    Contacts,
    Chat(String),
    ChatOpen,
    ChatClose,
    ChatReset,
    Quit,
}

/// Input that does not form a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("not a valid amount: {0}")]
    InvalidAmount(String),
}

impl ParseCommandError {
    /// The toast to show for this error.
    #[must_use]
    pub fn notice(&self) -> Notice {
        let description = match self {
            Self::Empty => "Введите команду или help".to_string(),
            Self::Unknown(word) => format!("Неизвестная команда «{word}». Введите help"),
            Self::MissingArgument { command, argument } => {
                format!("{command}: не указан аргумент {argument}")
            }
            Self::InvalidAmount(value) => format!("«{value}» не является суммой"),
        };
        Notice::destructive("Некорректный ввод", description)
    }
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    input
        .split_once(char::is_whitespace)
        .map_or((input, ""), |(word, rest)| (word, rest.trim()))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> std::result::Result<&'a str, ParseCommandError> {
    if rest.is_empty() {
        Err(ParseCommandError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}

fn parse_amount(value: &str) -> std::result::Result<Price, ParseCommandError> {
    value
        .parse::<u64>()
        .map(Price::new)
        .map_err(|_| ParseCommandError::InvalidAmount(value.to_string()))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        let (word, rest) = split_word(input);
        if word.is_empty() {
            return Err(ParseCommandError::Empty);
        }

        let command = match word.to_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "home" => Self::Home,
            "catalog" => Self::Catalog((!rest.is_empty()).then(|| FilterTag::from_key(rest))),
            "show" => Self::Show(ListingId::new(required(rest, "show", "id")?)),
            "buy" => Self::Buy(ListingId::new(required(rest, "buy", "id")?)),
            "login" if rest.is_empty() => Self::LoginSteam,
            "login" => {
                let (email, password) = split_word(rest);
                Self::LoginEmail {
                    email: email.to_string(),
                    password: SecretString::from(required(password, "login", "password")?),
                }
            }
            "logout" => Self::Logout,
            "dashboard" => Self::Dashboard,
            "topup" => Self::TopUp(parse_amount(required(rest, "topup", "amount")?)?),
            "avatar" => Self::Avatar(rest.to_string()),
            "sell" => {
                let (price, title) = split_word(required(rest, "sell", "price")?);
                Self::Sell {
                    price: parse_amount(price)?,
                    title: required(title, "sell", "title")?.to_string(),
                }
            }
            "faq" => Self::Faq,
            "contacts" => Self::Contacts,
            "chat" => match rest.to_lowercase().as_str() {
                "" | "open" => Self::ChatOpen,
                "close" => Self::ChatClose,
                "reset" => Self::ChatReset,
                _ => Self::Chat(rest.to_string()),
            },
            "quit" | "exit" => Self::Quit,
            _ => return Err(ParseCommandError::Unknown(word.to_string())),
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Help => "help",
            Self::Home => "home",
            Self::Catalog(_) => "catalog",
            Self::Show(_) => "show",
            Self::Buy(_) => "buy",
            Self::LoginSteam | Self::LoginEmail { .. } => "login",
            Self::Logout => "logout",
            Self::Dashboard => "dashboard",
            Self::TopUp(_) => "topup",
            Self::Avatar(_) => "avatar",
            Self::Sell { .. } => "sell",
            Self::Faq => "faq",
            Self::Contacts => "contacts",
            Self::Chat(_) | Self::ChatOpen | Self::ChatClose | Self::ChatReset => "chat",
            Self::Quit => "quit",
        };
        f.write_str(name)
    }
}

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Rendered text to print.
    pub output: String,
    /// The shell should exit.
    pub quit: bool,
}

impl Outcome {
    const fn show(output: String) -> Self {
        Self {
            output,
            quit: false,
        }
    }
}

/// Render a notice as a single line.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_notice(notice: &Notice) -> askama::Result<String> {
    NoticeTemplate { notice }.render()
}

fn render_action(result: Result<Notice>) -> askama::Result<String> {
    let notice = result.unwrap_or_else(|err| err.notice());
    render_notice(&notice)
}

fn render_error(err: &AppError) -> askama::Result<String> {
    render_notice(&err.notice())
}

/// Apply `command` to the session and render the result.
///
/// # Errors
///
/// Returns an error only if a template fails to render.
#[instrument(skip(state, command), fields(command = %command))]
pub async fn execute(state: &mut AppState, command: Command) -> askama::Result<Outcome> {
    debug!("Executing command");
    let output = match command {
        Command::Help => HelpTemplate.render()?,
        Command::Home => {
            state.show_home();
            let home = HomeTemplate::new(state).render()?;
            let catalog = CatalogTemplate::for_state(state).render()?;
            format!("{home}\n\n{catalog}")
        }
        Command::Catalog(tag) => {
            if let Some(tag) = tag {
                state.set_filter(tag);
            }
            CatalogTemplate::for_state(state).render()?
        }
        Command::Show(id) => match state.content().get_listing(&id) {
            Some(listing) => ListingTemplate { listing }.render()?,
            None => render_error(&AppError::ListingNotFound(id))?,
        },
        Command::Buy(id) => render_action(state.buy(&id))?,
        Command::LoginSteam => render_notice(&state.login_with_steam())?,
        Command::LoginEmail { email, password } => {
            render_action(state.login_with_email(&email, &password))?
        }
        Command::Logout => render_action(state.logout())?,
        Command::Dashboard => match state.toggle_dashboard() {
            Ok(View::Dashboard) => render_dashboard(state)?,
            Ok(View::Home) => HomeTemplate::new(state).render()?,
            Err(err) => render_error(&err)?,
        },
        Command::TopUp(amount) => render_action(state.top_up(amount))?,
        Command::Avatar(url) => render_action(state.set_avatar(&url))?,
        Command::Sell { price, title } => render_action(state.list_for_sale(&title, price))?,
        Command::Faq => FaqTemplate {
            entries: state.content().faq(),
        }
        .render()?,
        Command::Contacts => ContactsTemplate {
            contacts: state.content().contacts(),
        }
        .render()?,
        Command::Chat(text) => match state.chat().send(&text).await {
            Some(message) => MessageTemplate::new(&message).render()?,
            None => String::new(),
        },
        Command::ChatOpen => {
            state.chat().open().await;
            render_transcript(state).await?
        }
        Command::ChatClose => {
            state.chat().close().await;
            render_notice(&Notice::info("Чат", "Окно чата закрыто"))?
        }
        Command::ChatReset => {
            state.chat().reset().await;
            render_transcript(state).await?
        }
        Command::Quit => {
            return Ok(Outcome {
                output: "До скорой встречи!".to_string(),
                quit: true,
            });
        }
    };
    Ok(Outcome::show(output))
}

/// Parse and execute one input line.
///
/// # Errors
///
/// Returns an error only if a template fails to render.
pub async fn execute_line(state: &mut AppState, line: &str) -> askama::Result<Outcome> {
    match line.parse::<Command>() {
        Ok(command) => execute(state, command).await,
        Err(ParseCommandError::Empty) => Ok(Outcome::show(String::new())),
        Err(err) => Ok(Outcome::show(render_notice(&err.notice())?)),
    }
}

fn render_dashboard(state: &AppState) -> askama::Result<String> {
    match state.dashboard() {
        Ok(dashboard) => DashboardTemplate::new(dashboard).render(),
        Err(err) => render_error(&err),
    }
}

async fn render_transcript(state: &AppState) -> askama::Result<String> {
    let chat = state.chat();
    let transcript = chat.transcript().await;
    let typing = chat.is_typing().await;
    TranscriptTemplate::new(&transcript, typing).render()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use secrecy::ExposeSecret;

    use super::*;
    use crate::config::StorefrontConfig;

    fn state() -> AppState {
        AppState::new(StorefrontConfig {
            reply_delay: Duration::ZERO,
            ..StorefrontConfig::default()
        })
    }

    #[test]
    fn test_parse_simple_commands() {
        assert!(matches!("help".parse::<Command>(), Ok(Command::Help)));
        assert!(matches!("  DASHBOARD ".parse::<Command>(), Ok(Command::Dashboard)));
        assert!(matches!("login".parse::<Command>(), Ok(Command::LoginSteam)));
        assert!(matches!("chat".parse::<Command>(), Ok(Command::ChatOpen)));
        assert!(matches!("chat reset".parse::<Command>(), Ok(Command::ChatReset)));
        assert!(matches!("exit".parse::<Command>(), Ok(Command::Quit)));
    }

    #[test]
    fn test_parse_catalog_filter_is_lenient() {
        assert!(matches!("catalog".parse::<Command>(), Ok(Command::Catalog(None))));
        assert!(matches!(
            "catalog premium".parse::<Command>(),
            Ok(Command::Catalog(Some(FilterTag::Premium)))
        ));
        assert!(matches!(
            "catalog nonsense".parse::<Command>(),
            Ok(Command::Catalog(Some(FilterTag::All)))
        ));
        assert!(matches!(
            "catalog Premium".parse::<Command>(),
            Ok(Command::Catalog(Some(FilterTag::All)))
        ));
    }

    #[test]
    fn test_parse_arguments() {
        let Ok(Command::LoginEmail { email, password }) = "login me@example.com s3cret".parse::<Command>()
        else {
            panic!("expected email login");
        };
        assert_eq!(email, "me@example.com");
        assert_eq!(password.expose_secret(), "s3cret");

        let Ok(Command::Sell { price, title }) = "sell 700 My old account".parse::<Command>() else {
            panic!("expected sell");
        };
        assert_eq!(price, Price::new(700));
        assert_eq!(title, "My old account");

        let Ok(Command::Chat(text)) = "chat Как купить аккаунт?".parse::<Command>() else {
            panic!("expected chat");
        };
        assert_eq!(text, "Как купить аккаунт?");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "".parse::<Command>().unwrap_err(),
            ParseCommandError::Empty
        );
        assert_eq!(
            "dance".parse::<Command>().unwrap_err(),
            ParseCommandError::Unknown("dance".to_string())
        );
        assert_eq!(
            "buy".parse::<Command>().unwrap_err(),
            ParseCommandError::MissingArgument {
                command: "buy",
                argument: "id"
            }
        );
        assert_eq!(
            "topup lots".parse::<Command>().unwrap_err(),
            ParseCommandError::InvalidAmount("lots".to_string())
        );
        assert!(matches!(
            "login me@example.com".parse::<Command>(),
            Err(ParseCommandError::MissingArgument { .. })
        ));
    }

    #[tokio::test]
    async fn test_buy_while_signed_out_shows_notice() {
        let mut state = state();
        let outcome = execute_line(&mut state, "buy 3").await.unwrap();
        assert!(outcome.output.contains("Требуется авторизация"));
        assert!(!outcome.quit);
    }

    #[tokio::test]
    async fn test_login_then_buy() {
        let mut state = state();
        execute_line(&mut state, "login").await.unwrap();
        let outcome = execute_line(&mut state, "buy 3").await.unwrap();
        assert!(outcome.output.contains("Покупка успешна!"));

        let outcome = execute_line(&mut state, "dashboard").await.unwrap();
        assert!(outcome.output.contains("Всего покупок:    1"));
    }

    #[tokio::test]
    async fn test_unknown_command_is_not_fatal() {
        let mut state = state();
        let outcome = execute_line(&mut state, "dance").await.unwrap();
        assert!(outcome.output.contains("dance"));
        assert!(!outcome.quit);
    }

    #[tokio::test]
    async fn test_quit() {
        let mut state = state();
        assert!(execute_line(&mut state, "quit").await.unwrap().quit);
    }

    #[tokio::test]
    async fn test_catalog_switches_filter() {
        let mut state = state();
        execute_line(&mut state, "catalog featured").await.unwrap();
        assert_eq!(state.filter(), FilterTag::Featured);
        let outcome = execute_line(&mut state, "catalog").await.unwrap();
        assert!(outcome.output.contains("[Рекомендуем]"));
    }
}
