// SPDX-License-Identifier: MPL-2.0
use chrono::Local;
use eatery_flamingo::application::catalog::Catalog;
use eatery_flamingo::application::links;
use eatery_flamingo::application::menu::{MenuBrowser, MenuViewMode};
use eatery_flamingo::application::submit::{self, SubmitOutcome};
use eatery_flamingo::application::viewer::{Effect, ViewStatus, ViewerOptions};
use eatery_flamingo::cli::{self, Command, Flags, Trigger};
use eatery_flamingo::config::{self, Config};
use eatery_flamingo::domain::forms::{BookingForm, ContactForm, MessageCounter};
use eatery_flamingo::error::{Error, Result};
use eatery_flamingo::i18n::I18n;
use eatery_flamingo::infrastructure::HttpSubmitter;
use eatery_flamingo::paths;
use eatery_flamingo::ui::notifications::Manager;
use eatery_flamingo::ui::presentation;
use std::io::{self, BufRead};
use std::process::ExitCode;
use unic_langid::LanguageIdentifier;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match cli::parse(std::env::args_os().skip(1).collect()) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{}", cli::HELP);
            return ExitCode::FAILURE;
        }
    };

    match run(flags) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(flags: Flags) -> Result<ExitCode> {
    paths::init_cli_override(flags.config_dir);
    let config = config::load()?;
    let mut i18n = I18n::new(flags.lang, &config);

    match flags.command {
        Command::Help => {
            print!("{}", cli::HELP);
            Ok(ExitCode::SUCCESS)
        }
        Command::Viewer { tab } => {
            let catalog = match flags.catalog.or_else(|| config.catalog_path.clone()) {
                Some(path) => Catalog::load_from_path(&path)?,
                None => Catalog::builtin(),
            };
            run_viewer(catalog, tab, &config, &mut i18n)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Contact(mut form) => {
            let sent = send_contact(&mut form, &config, &i18n)?;
            Ok(exit_code(sent))
        }
        Command::Book(mut form) => {
            let sent = send_booking(&mut form, &config, &i18n)?;
            Ok(exit_code(sent))
        }
        Command::WhatsApp(kind) => {
            println!("{}", links::quick_contact_url(kind, config.whatsapp_number()));
            Ok(ExitCode::SUCCESS)
        }
        Command::Hours => {
            let day = presentation::current_day_key(Local::now().date_naive());
            println!(
                "{}",
                i18n.tr_with_args("hours-today", &[("day".to_string(), day.to_string())])
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Lang(lang) => {
            let Ok(locale) = lang.parse::<LanguageIdentifier>() else {
                eprintln!("error: '{lang}' is not a language tag");
                return Ok(ExitCode::FAILURE);
            };
            if !i18n.set_locale(locale) {
                eprintln!("error: no translation for '{lang}'");
                return Ok(ExitCode::FAILURE);
            }
            config::save_language(&lang)?;
            println!("{}", i18n.tr("language-saved"));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(sent: bool) -> ExitCode {
    if sent {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

// =============================================================================
// Viewer
// =============================================================================

fn run_viewer(
    catalog: Catalog,
    tab: Option<String>,
    config: &Config,
    i18n: &mut I18n,
) -> Result<()> {
    let mut browser = MenuBrowser::new(catalog, ViewerOptions::from_config(config));
    if let Some(tab) = tab {
        browser.activate_tab(&tab);
    }
    print_effect(&Effect::Render(browser.viewer().snapshot()), i18n);

    for line in io::stdin().lock().lines() {
        let line = line?;
        let effect = match cli::parse_trigger(&line) {
            Some(Trigger::Tab(id)) => browser.activate_tab(&id),
            Some(Trigger::View(mode)) => {
                let effect = match mode {
                    Some(mode) => browser.set_view_mode(mode),
                    None => browser.toggle_view_mode(),
                };
                if !effect.is_none() {
                    println!("{}", i18n.tr(view_mode_key(browser.view_mode())));
                }
                continue;
            }
            Some(Trigger::Download) => {
                match browser.download_name() {
                    Some(name) => println!("{name}"),
                    None => println!("{}", i18n.tr("viewer-empty-result")),
                }
                continue;
            }
            Some(Trigger::Lang(lang)) => {
                let switched = lang
                    .parse::<LanguageIdentifier>()
                    .is_ok_and(|locale| i18n.set_locale(locale));
                if switched {
                    println!("{}", i18n.tr("language-changed"));
                } else {
                    log::warn!("Ignoring unsupported language '{lang}'");
                }
                continue;
            }
            Some(Trigger::Swipe { start_x, end_x }) => browser.viewer_mut().swipe(start_x, end_x),
            Some(Trigger::Viewer(message)) => browser.handle(message),
            None => {
                log::warn!("Ignoring unknown trigger '{}'", line.trim());
                continue;
            }
        };
        print_effect(&effect, i18n);
    }
    Ok(())
}

fn view_mode_key(mode: MenuViewMode) -> &'static str {
    match mode {
        MenuViewMode::Images => "menu-view-images",
        MenuViewMode::Text => "menu-view-text",
    }
}

fn print_effect(effect: &Effect, i18n: &I18n) {
    let Some(snapshot) = effect.snapshot() else {
        return;
    };
    if matches!(effect, Effect::Closed(_)) {
        println!("[closed]");
    }
    if snapshot.status == ViewStatus::Empty {
        println!("{}", i18n.tr("viewer-empty-result"));
        return;
    }
    let label = snapshot.current_item().map_or("", |item| item.label());
    println!(
        "{} {label} ({}%){}",
        presentation::counter_text(snapshot),
        snapshot.zoom.as_percent(),
        if snapshot.is_open { " [open]" } else { "" },
    );
}

// =============================================================================
// Forms
// =============================================================================

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(Error::from)
}

fn send_contact(form: &mut ContactForm, config: &Config, i18n: &I18n) -> Result<bool> {
    let counter: MessageCounter = form.message_counter();
    if counter.warning {
        log::warn!("Message is {} of {} characters", counter.length, counter.limit);
    }
    let submitter = HttpSubmitter::from_config(config)?;
    let mut notifications = Manager::new();
    let outcome = runtime()?.block_on(submit::submit_contact(
        &submitter,
        form,
        &mut notifications,
    ));
    report(&outcome, &notifications, i18n);
    Ok(outcome.is_sent())
}

fn send_booking(form: &mut BookingForm, config: &Config, i18n: &I18n) -> Result<bool> {
    let today = Local::now().date_naive();
    let submitter = HttpSubmitter::from_config(config)?;
    let mut notifications = Manager::new();
    let outcome = runtime()?.block_on(submit::submit_booking(
        &submitter,
        form,
        today,
        &mut notifications,
    ));
    report(&outcome, &notifications, i18n);
    Ok(outcome.is_sent())
}

fn report(outcome: &SubmitOutcome, notifications: &Manager, i18n: &I18n) {
    if let SubmitOutcome::Rejected(errors) = outcome {
        for line in i18n.tr_errors(errors) {
            eprintln!("- {line}");
        }
    }
    for notification in notifications.visible() {
        println!(
            "[{}] {}",
            notification.severity().as_str(),
            i18n.tr_with_args(notification.message_key(), notification.message_args())
        );
    }
}
