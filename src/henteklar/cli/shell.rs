//! Interactive session.
//!
//! Reads one command per line and keeps the same roster for the whole session,
//! so check-ins made here show up in later listings. Screens are tracked with a
//! [`Navigator`]; the prompt names the current one.
//!
//! A transition event is shown above the prompt for [`EVENT_DISPLAY`] after it
//! happened and then dropped.

use super::commands::{
    handle_contacts, handle_dashboard, handle_list, handle_login, handle_logout, handle_primary,
    handle_show, handle_whoami, AppContext,
};
use super::render::{describe_error, render_event, render_login_hint, render_settings};
use colored::Colorize;
use henteklar::api::StatusFilter;
use henteklar::error::{HenteklarError, Result};
use henteklar::i18n::{Locale, Translator};
use henteklar::model::{ChildId, TransitionEvent};
use henteklar::nav::{Navigator, Route};
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

pub const EVENT_DISPLAY: Duration = Duration::from_secs(3);

const HELP: &str = "\
Commands:
  login <email> <password>   log in
  logout                     log out
  whoami                     show the logged-in user
  home                       overview with counts
  list [all|in|out] [name]   check-in/out list, optionally filtered
  show <id>                  child profile and contacts
  toggle <id>                check a child in or out
  primary <id> <contact>     make a contact the primary one
  contacts <id>              call and email links
  settings                   account and language
  lang [nb|en]               switch language
  back                       previous screen
  quit                       leave the shell
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ShellCommand {
    Empty,
    Help,
    Quit,
    Back,
    Home,
    Settings,
    Login { email: String, password: String },
    Logout,
    Whoami,
    List {
        status: StatusFilter,
        search: Option<String>,
    },
    Show(String),
    Toggle(String),
    Primary { child: String, contact: String },
    Contacts(String),
    Language(Option<Locale>),
}

fn usage(text: &str) -> HenteklarError {
    HenteklarError::Validation(format!("usage: {}", text))
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(ShellCommand::Empty);
        };
        let args: Vec<&str> = words.collect();

        let one = |text: &str| match args.as_slice() {
            [id] => Ok(id.to_string()),
            _ => Err(usage(text)),
        };

        match name.to_lowercase().as_str() {
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            "back" => Ok(ShellCommand::Back),
            "home" | "overview" => Ok(ShellCommand::Home),
            "settings" => Ok(ShellCommand::Settings),
            "logout" => Ok(ShellCommand::Logout),
            "whoami" => Ok(ShellCommand::Whoami),
            "login" => match args.as_slice() {
                [email, password] => Ok(ShellCommand::Login {
                    email: email.to_string(),
                    password: password.to_string(),
                }),
                _ => Err(usage("login <email> <password>")),
            },
            "list" | "ls" => {
                let (status, rest) = match args.split_first() {
                    Some((first, rest)) => match first.parse::<StatusFilter>() {
                        Ok(status) => (status, rest),
                        Err(_) => (StatusFilter::All, args.as_slice()),
                    },
                    None => (StatusFilter::All, args.as_slice()),
                };
                let search = (!rest.is_empty()).then(|| rest.join(" "));
                Ok(ShellCommand::List { status, search })
            }
            "show" => one("show <id>").map(ShellCommand::Show),
            "toggle" | "t" => one("toggle <id>").map(ShellCommand::Toggle),
            "contacts" => one("contacts <id>").map(ShellCommand::Contacts),
            "primary" => match args.as_slice() {
                [child, contact] => Ok(ShellCommand::Primary {
                    child: child.to_string(),
                    contact: contact.to_string(),
                }),
                _ => Err(usage("primary <id> <contact>")),
            },
            "lang" => match args.as_slice() {
                [] => Ok(ShellCommand::Language(None)),
                [code] => code.parse().map(|l| ShellCommand::Language(Some(l))),
                _ => Err(usage("lang [nb|en]")),
            },
            other => Err(HenteklarError::Validation(format!(
                "Unknown command: {} (type help)",
                other
            ))),
        }
    }
}

/// A transition event and the moment it happened.
#[derive(Debug, Clone)]
struct EventBanner {
    event: TransitionEvent,
    shown_at: Instant,
}

impl EventBanner {
    fn new(event: TransitionEvent) -> Self {
        Self {
            event,
            shown_at: Instant::now(),
        }
    }

    fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < EVENT_DISPLAY
    }
}

struct Shell {
    nav: Navigator,
    banner: Option<EventBanner>,
}

pub(super) fn run(ctx: &mut AppContext) -> Result<()> {
    let mut shell = Shell {
        nav: Navigator::new(ctx.api.is_authenticated()),
        banner: None,
    };
    shell.show_route(ctx);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        shell.prompt(ctx.api.translator())?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let outcome = ShellCommand::parse(&line).and_then(|cmd| match cmd {
            ShellCommand::Quit => Ok(false),
            cmd => shell.execute(ctx, cmd).map(|_| true),
        });
        match outcome {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("{}", describe_error(&e, ctx.api.translator()).red()),
        }
    }
    Ok(())
}

impl Shell {
    fn prompt(&mut self, t: &Translator) -> Result<()> {
        if let Some(banner) = &self.banner {
            if banner.is_visible_at(Instant::now()) {
                println!("{}", render_event(&banner.event, t));
            } else {
                self.banner = None;
            }
        }
        print!("{}> ", t.t(self.nav.current().title_key()).bold());
        io::stdout().flush()?;
        Ok(())
    }

    fn execute(&mut self, ctx: &mut AppContext, cmd: ShellCommand) -> Result<()> {
        let authenticated = ctx.api.is_authenticated();
        match cmd {
            ShellCommand::Empty | ShellCommand::Quit => Ok(()),
            ShellCommand::Help => {
                print!("{}", HELP);
                Ok(())
            }
            ShellCommand::Back => {
                self.nav.go_back();
                self.show_route(ctx);
                Ok(())
            }
            ShellCommand::Home => {
                self.nav.go_to_dashboard(authenticated);
                self.show_route(ctx);
                Ok(())
            }
            ShellCommand::Settings => {
                self.nav.go_to_settings(authenticated);
                self.show_route(ctx);
                Ok(())
            }
            ShellCommand::Login { email, password } => {
                handle_login(ctx, &email, &password)?;
                self.nav.on_login();
                self.show_route(ctx);
                Ok(())
            }
            ShellCommand::Logout => {
                handle_logout(ctx)?;
                self.banner = None;
                self.nav.on_logout();
                Ok(())
            }
            ShellCommand::Whoami => handle_whoami(ctx),
            ShellCommand::List { status, search } => {
                if self.nav.go_to_check_in_out(authenticated) == &Route::Login {
                    return Err(HenteklarError::Unauthenticated);
                }
                handle_list(ctx, status, search)
            }
            ShellCommand::Show(id) => {
                ctx.api.child_profile(&id)?;
                self.nav.go_to_child_profile(ChildId::new(id), authenticated);
                self.show_route(ctx);
                Ok(())
            }
            ShellCommand::Toggle(id) => {
                let result = ctx.api.toggle_attendance(&id)?;
                if let Some(event) = result.event {
                    self.banner = Some(EventBanner::new(event));
                }
                Ok(())
            }
            ShellCommand::Primary { child, contact } => handle_primary(ctx, &child, &contact),
            ShellCommand::Contacts(id) => handle_contacts(ctx, &id),
            ShellCommand::Language(locale) => {
                match locale {
                    Some(locale) => ctx.api.set_language(locale),
                    None => {
                        ctx.api.toggle_language();
                    }
                }
                println!("{}", ctx.api.translator().t("settings.languageDesc"));
                Ok(())
            }
        }
    }

    /// Prints the screen for the current route.
    fn show_route(&self, ctx: &AppContext) {
        let t = ctx.api.translator();
        let shown = match self.nav.current() {
            Route::Landing => {
                println!("{}", t.t("appName").bold());
                println!("{}", "type help for commands".dimmed());
                Ok(())
            }
            Route::Login => {
                print!("{}", render_login_hint(t));
                Ok(())
            }
            Route::Dashboard => handle_dashboard(ctx),
            Route::CheckInOut => handle_list(ctx, StatusFilter::All, None),
            Route::ChildProfile(id) => handle_show(ctx, id.as_str()),
            Route::Settings => {
                print!("{}", render_settings(ctx.api.current_user(), t));
                Ok(())
            }
        };
        if let Err(e) = shown {
            println!("{}", describe_error(&e, t).red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_with_status_and_search() {
        assert_eq!(
            ShellCommand::parse("list in emma han").unwrap(),
            ShellCommand::List {
                status: StatusFilter::In,
                search: Some("emma han".into())
            }
        );
        assert_eq!(
            ShellCommand::parse("ls olivia").unwrap(),
            ShellCommand::List {
                status: StatusFilter::All,
                search: Some("olivia".into())
            }
        );
        assert_eq!(
            ShellCommand::parse("list").unwrap(),
            ShellCommand::List {
                status: StatusFilter::All,
                search: None
            }
        );
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            ShellCommand::parse("  toggle 3 \n").unwrap(),
            ShellCommand::Toggle("3".into())
        );
        assert_eq!(
            ShellCommand::parse("primary 1 p2").unwrap(),
            ShellCommand::Primary {
                child: "1".into(),
                contact: "p2".into()
            }
        );
        assert_eq!(
            ShellCommand::parse("lang en").unwrap(),
            ShellCommand::Language(Some(Locale::En))
        );
        assert_eq!(ShellCommand::parse("").unwrap(), ShellCommand::Empty);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(ShellCommand::parse("toggle").is_err());
        assert!(ShellCommand::parse("login only-email").is_err());
        assert!(ShellCommand::parse("lang sv").is_err());
        assert!(ShellCommand::parse("dance").is_err());
    }

    #[test]
    fn banner_expires_after_display_window() {
        let banner = EventBanner::new(TransitionEvent {
            child_name: "Anna".into(),
            direction: henteklar::model::Direction::In,
            timestamp: "14:05".into(),
        });
        assert!(banner.is_visible_at(banner.shown_at));
        assert!(banner.is_visible_at(banner.shown_at + Duration::from_millis(2999)));
        assert!(!banner.is_visible_at(banner.shown_at + EVENT_DISPLAY));
    }
}
