//! Terminal formatting of command results.
//!
//! Every `render_*` function returns a `String` so output can be checked in
//! tests; printing happens in the handlers.

use colored::Colorize;
use henteklar::api::{CmdMessage, MessageLevel, RosterCounts, RosterFilter, StatusFilter};
use henteklar::commands::contacts::ContactAction;
use henteklar::config::HenteklarConfig;
use henteklar::error::HenteklarError;
use henteklar::i18n::Translator;
use henteklar::model::{Child, Direction, TransitionEvent, User};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 4;
const NAME_WIDTH: usize = 24;
const GROUP_WIDTH: usize = 14;
const IN_MARKER: &str = "●";
const OUT_MARKER: &str = "○";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_children(children: &[Child], t: &Translator) -> String {
    if children.is_empty() {
        return format!("{}\n", t.t("dashboard.noChildrenFound").dimmed());
    }

    children
        .iter()
        .map(|child| format!("{}\n", child_row(child, t)))
        .collect()
}

/// The check-in/out screen: filter tabs with counts, then one row per child
/// with the action a toggle would perform.
pub(super) fn render_check_in_out(
    children: &[Child],
    counts: &RosterCounts,
    filter: &RosterFilter,
    t: &Translator,
) -> String {
    let tabs: Vec<String> = [
        (StatusFilter::All, "checkInOut.all"),
        (StatusFilter::In, "checkInOut.in"),
        (StatusFilter::Out, "checkInOut.out"),
    ]
    .into_iter()
    .map(|(status, key)| {
        let label = format!("{} ({})", t.t(key), counts.for_status(status));
        if status == filter.status {
            format!("[{}]", label).bold().to_string()
        } else {
            label.dimmed().to_string()
        }
    })
    .collect();

    let mut out = format!("{}\n{}\n", t.t("checkInOut.title").bold(), tabs.join("  "));
    if let Some(query) = &filter.query {
        out.push_str(&format!("{}: {}", t.t("search"), query).dimmed().to_string());
        out.push('\n');
    }

    if children.is_empty() {
        out.push_str(&format!("{}\n", t.t("checkInOut.noChildrenFound").dimmed()));
        return out;
    }
    for child in children {
        let action = if child.is_checked_in() {
            t.t("checkInOut.checkOut")
        } else {
            t.t("checkInOut.checkIn")
        };
        out.push_str(&format!("{}  → {}\n", child_row(child, t), action.cyan()));
    }
    out
}

/// Overview screen: counts followed by the whole roster.
pub(super) fn render_dashboard(
    counts: &RosterCounts,
    children: &[Child],
    t: &Translator,
) -> String {
    format!(
        "{}\n{}\n{}",
        render_counts(counts, t),
        t.t("dashboard.allChildren").bold(),
        render_children(children, t)
    )
}

fn child_row(child: &Child, t: &Translator) -> String {
    let marker = if child.is_checked_in() {
        IN_MARKER.green()
    } else {
        OUT_MARKER.dimmed()
    };
    let id = format!("{:>width$}", child.id.as_str(), width = ID_WIDTH);
    format!(
        "{} {} {}{}{}",
        id.yellow(),
        marker,
        pad_to_width(&child.name, NAME_WIDTH),
        pad_to_width(&child.group, GROUP_WIDTH).dimmed(),
        status_line(child, "dashboard.inSince", t)
    )
}

fn status_line(child: &Child, in_since_key: &str, t: &Translator) -> String {
    if let Some(at) = child.checked_in_at() {
        return format!("{} {}", t.t(in_since_key), at).green().to_string();
    }
    let line = match child.checked_out_at() {
        Some(at) => format!("{} {}", t.t("dashboard.pickedUp"), at),
        None => t.t("checkInOut.out").to_string(),
    };
    line.dimmed().to_string()
}

pub(super) fn render_counts(counts: &RosterCounts, t: &Translator) -> String {
    let rows = [
        (t.t("dashboard.totalChildren"), counts.total),
        (t.t("dashboard.checkedIn"), counts.checked_in),
        (t.t("dashboard.checkedOut"), counts.checked_out),
    ];
    let label_width = rows.iter().map(|(label, _)| label.width()).max().unwrap_or(0);

    let mut out = format!("{}\n", t.t("dashboard.title").bold());
    for (label, value) in rows {
        out.push_str(&format!(
            "  {}  {}\n",
            pad_to_width(label, label_width),
            value.to_string().bold()
        ));
    }
    out
}

pub(super) fn render_profile(child: &Child, t: &Translator) -> String {
    let mut out = format!(
        "{} {}\n{} {}, {}\n{}\n",
        child.avatar.yellow(),
        child.name.bold(),
        child.age,
        t.t("dashboard.years"),
        child.group,
        status_line(child, "childProfile.inSince", t)
    );

    out.push_str(&format!("\n{}\n", t.t("childProfile.contactInfo").bold()));
    for contact in &child.parents {
        let primary = if contact.is_primary {
            format!(" [{}]", t.t("childProfile.primary")).yellow().to_string()
        } else {
            String::new()
        };
        out.push_str(&format!(
            "  {:<4} {} ({}){}\n       {}  {}\n",
            contact.id.dimmed(),
            contact.name,
            t.t(contact.relation.label_key()),
            primary,
            contact.phone,
            contact.email
        ));
    }
    out
}

pub(super) fn render_contact_actions(actions: &[ContactAction], t: &Translator) -> String {
    let mut out = String::new();
    for action in actions {
        out.push_str(&format!(
            "{}\n  {:<12} {}\n  {:<12} {}\n",
            action.name.bold(),
            t.t("childProfile.call"),
            action.call_uri,
            t.t("childProfile.sendEmail"),
            action.email_uri
        ));
    }
    out
}

pub(super) fn render_user(user: Option<&User>, t: &Translator) -> String {
    match user {
        Some(user) => format!(
            "{} {} <{}> ({})\n",
            t.t("loginPage.loggedInAs"),
            user.name.bold(),
            user.email,
            t.t(user.role.label_key())
        ),
        None => format!("{}\n", t.t("loginPage.notLoggedIn").dimmed()),
    }
}

pub(super) fn render_login_hint(t: &Translator) -> String {
    format!(
        "{}\n  login <{}> <{}>\n",
        t.t("loginPage.subtitle"),
        t.t("loginPage.email").to_lowercase(),
        t.t("loginPage.password").to_lowercase()
    )
}

pub(super) fn render_settings(user: Option<&User>, t: &Translator) -> String {
    format!(
        "{}\n\n{}\n  {}{}\n  {}\n",
        t.t("settings.title").bold(),
        t.t("settings.account").bold(),
        render_user(user, t),
        t.t("settings.language").bold(),
        t.t("settings.languageDesc")
    )
}

pub(super) fn render_event(event: &TransitionEvent, t: &Translator) -> String {
    let text = match event.direction {
        Direction::In => t.t("checkInOut.checkedIn"),
        Direction::Out => t.t("checkInOut.checkedOut"),
    };
    let line = format!("{} {} {}", event.child_name, text, event.timestamp);
    match event.direction {
        Direction::In => line.green().to_string(),
        Direction::Out => line.cyan().to_string(),
    }
}

pub(super) fn render_config(config: &HenteklarConfig) -> String {
    HenteklarConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

/// Localized text for errors the user can cause.
pub(super) fn describe_error(err: &HenteklarError, t: &Translator) -> String {
    match err {
        HenteklarError::ChildNotFound(id) => format!("{}: {}", t.t("childProfile.notFound"), id),
        HenteklarError::Unauthenticated => t.t("loginPage.notLoggedIn").to_string(),
        HenteklarError::MissingCredentials => t.t("loginPage.fillAllFields").to_string(),
        HenteklarError::AuthFailed(_) => t.t("loginPage.loginError").to_string(),
        other => other.to_string(),
    }
}

/// Pads or truncates `s` to exactly `width` terminal columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut current = 0;

    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > width.saturating_sub(1) {
            result.push('…');
            current += 1;
            break;
        }
        result.push(c);
        current += w;
    }

    result.push_str(&" ".repeat(width.saturating_sub(current)));
    result
}
