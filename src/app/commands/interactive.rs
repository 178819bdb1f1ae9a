//! Question sequence that builds an [`Answer`].

use crate::app::prompts::{self, ask_port, ask_yes_no, require_non_empty, resolve_root};
use crate::domain::input::looks_like_http_url;
use crate::domain::{AppError, Answer, InputRules, Preset};
use crate::ports::Console;

/// Menu entry that leaves the program.
pub const EXIT_CHOICE: i64 = 9;

const BANNER: &[&str] = &[
    "-------------------------------------------------------------------------------",
    "An interactive program to automate nginx virtual server creation.",
    "Licensed under the MIT License.",
    "-------------------------------------------------------------------------------",
];

/// Ask every question the chosen preset needs. `None` when the user picked Exit.
pub fn collect_answer<C: Console>(console: &C) -> Result<Option<Answer>, AppError> {
    for line in BANNER {
        console.say(line);
    }

    let Some(preset) = select_preset(console)? else {
        return Ok(None);
    };

    if preset.is_catch_all() {
        let mut answer = Answer::catch_all();
        answer.harden_security = ask_security(console)?;
        return Ok(Some(answer));
    }

    let domains = require_non_empty(
        console,
        "Domain/subdomain name(s), separated by spaces",
        InputRules::REQUIRED,
    )?;
    let mut answer = Answer::new(preset, Answer::split_domains(&domains));

    if preset.needs_document_root() {
        answer.document_root = Some(resolve_root(console)?.into_string());
    }

    if preset.needs_target() {
        answer.upstream_or_redirect_target = Some(ask_target(console, preset)?);
    }

    answer.listen_port = match preset.default_port() {
        Some(port) => ask_port(console, &format!("Listen port (default {port})"), Some(port))?,
        None => ask_port(console, "Port number the virtual server should listen on", None)?,
    };

    answer.is_default_server = ask_yes_no(console, "Make this the default server?", false)?;
    answer.send_hsts = ask_yes_no(console, "Send the HSTS header?", false)?;
    answer.harden_security = ask_security(console)?;

    if preset.serves_static_files() {
        answer.enable_asset_caching =
            ask_yes_no(console, "Enable browser caching of static assets?", false)?;
        if answer.enable_asset_caching {
            answer.max_cache_age =
                require_non_empty(console, "Max cache age (default 6h)", InputRules::OPTIONAL_WORD)?;
        }
    }

    Ok(Some(answer))
}

fn select_preset<C: Console>(console: &C) -> Result<Option<Preset>, AppError> {
    console.say("What do you want to do?");
    for preset in Preset::ALL {
        console.say(&format!("{}: {}", preset.menu_number(), preset.label()));
    }
    console.say(&format!("{EXIT_CHOICE}: Exit"));

    loop {
        let choice = prompts::ask_integer(console, "Selection")?;
        if choice == EXIT_CHOICE {
            return Ok(None);
        }
        match Preset::from_menu_number(choice) {
            Some(preset) => return Ok(Some(preset)),
            None => console.error("Enter a valid number."),
        }
    }
}

fn ask_target<C: Console>(console: &C, preset: Preset) -> Result<String, AppError> {
    let prompt = match preset {
        Preset::PermanentRedirect => {
            "Resource to redirect all requests to (e.g. http://example.com$request_uri; \
             $request_uri is NOT added automatically)"
        }
        _ => "Resource to proxy (e.g. http://127.0.0.1:8000 or http://example.com)",
    };
    let target = require_non_empty(console, prompt, InputRules::REQUIRED_WORD)?;
    if !looks_like_http_url(&target) {
        console.warn(&format!("'{target}' does not look like an http(s) URL, using it as-is"));
    }
    Ok(target)
}

fn ask_security<C: Console>(console: &C) -> Result<bool, AppError> {
    ask_yes_no(
        console,
        "Add additional security options (should not, but may break the config)?",
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConsole;

    #[test]
    fn exit_returns_none() {
        let console = ScriptedConsole::new(["9"]);
        assert_eq!(collect_answer(&console).unwrap(), None);
    }

    #[test]
    fn out_of_range_selection_is_asked_again() {
        let console = ScriptedConsole::new(["12", "0", "8", "n"]);
        let answer = collect_answer(&console).unwrap().unwrap();
        assert_eq!(answer, Answer::catch_all());
        assert_eq!(console.errors(), vec!["Enter a valid number.", "Enter a valid number."]);
    }

    #[test]
    fn proxy_session() {
        let console = ScriptedConsole::new([
            "5",
            "sulabs.ml writewith.me",
            "https://blog.sidsun.com",
            "",
            "",
            "y",
            "yes",
        ]);
        let answer = collect_answer(&console).unwrap().unwrap();
        assert_eq!(answer.preset, Preset::ReverseProxy);
        assert_eq!(answer.domains, vec!["sulabs.ml", "writewith.me"]);
        assert_eq!(answer.upstream_or_redirect_target.as_deref(), Some("https://blog.sidsun.com"));
        assert_eq!(answer.listen_port, 443);
        assert!(!answer.is_default_server);
        assert!(answer.send_hsts);
        assert!(answer.harden_security);
        assert!(!answer.enable_asset_caching);
        assert_eq!(console.remaining_inputs(), 0);
    }

    #[test]
    fn custom_port_proxy_requires_port() {
        let console =
            ScriptedConsole::new(["7", "_", "127.0.0.1:5000", "", "4321", "", "", ""]);
        let answer = collect_answer(&console).unwrap().unwrap();
        assert_eq!(answer.listen_port, 4321);
        assert_eq!(answer.name(), "_");
        assert_eq!(console.warnings().len(), 1);
    }

    #[test]
    fn static_site_asks_for_caching() {
        let console = ScriptedConsole::new([
            "2",
            "encrypt.ml",
            "/srv/www/does-not-exist-yet",
            "y",
            "",
            "",
            "y",
            "",
            "y",
            "1d",
        ]);
        let answer = collect_answer(&console).unwrap().unwrap();
        assert_eq!(answer.document_root.as_deref(), Some("/srv/www/does-not-exist-yet"));
        assert!(answer.send_hsts);
        assert!(answer.enable_asset_caching);
        assert_eq!(answer.max_cache_age, "1d");
        assert_eq!(console.remaining_inputs(), 0);
    }
}
