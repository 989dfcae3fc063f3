//! Terminal presentation: per-phase command grammar and text rendering.
//!
//! The device is passed around the table, so anything private is wiped
//! from the screen before the next holder looks at it.

use crate::editor::BankCommand;
use crate::protocol::{Intent, View};
use crate::state::Disclosure;
use crate::types::*;

/// ANSI clear-screen and cursor-home
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// A parsed line of input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Intent(Intent),
    /// Ask the AI collaborator for a new bank entry in the selected category
    Generate,
    /// Edit the content bank of the selected category
    Bank(BankCommand),
    /// Show who the imposter was on the answers summary
    ShowImposter,
    Help,
    Quit,
    /// Input the current screen does not understand, with a usage hint
    Invalid(String),
}

/// Parse one input line against the screen the user is looking at
pub fn parse_command(view: &View, line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let keyword = word.to_lowercase();

    match keyword.as_str() {
        "quit" | "exit" => return Command::Quit,
        "help" | "?" => return Command::Help,
        _ => {}
    }

    match view {
        View::Lobby { settings, .. } => parse_lobby(&keyword, rest, *settings),
        View::Reveal { disclosure, .. } => match keyword.as_str() {
            "show" => Command::Intent(Intent::Reveal),
            "done" if disclosure.is_some() => Command::Intent(Intent::RevealDone),
            "done" => Command::Invalid("Type 'show' first to see your card".to_string()),
            _ => Command::Invalid("Type 'show' to see your card, then 'done'".to_string()),
        },
        // Every other line is the answer itself
        View::Answering { .. } if line.is_empty() => {
            Command::Invalid("Type your answer and press enter".to_string())
        }
        View::Answering { .. } => Command::Intent(Intent::SubmitAnswer {
            text: line.to_string(),
        }),
        View::VotingLanding { .. } => match keyword.as_str() {
            "results" => Command::Intent(Intent::RevealResults),
            _ => Command::Invalid("Discuss and vote, then type 'results'".to_string()),
        },
        View::QuestionRevealActual { .. } => match keyword.as_str() {
            "next" => Command::Intent(Intent::StartRound),
            _ => Command::Invalid("Type 'next' to see everyone's answers".to_string()),
        },
        View::AnswersSummary { .. } => match keyword.as_str() {
            "imposter" => Command::ShowImposter,
            "reset" | "again" => Command::Intent(Intent::Reset),
            _ => Command::Invalid("Type 'imposter' to unmask, or 'reset' to play again".to_string()),
        },
        View::Result { .. } => match keyword.as_str() {
            "reset" | "again" => Command::Intent(Intent::Reset),
            _ => Command::Invalid("Type 'reset' to play again".to_string()),
        },
    }
}

fn parse_lobby(keyword: &str, rest: &str, settings: GameSettings) -> Command {
    match keyword {
        "add" => Command::Intent(Intent::AddPlayer),
        "remove" => match rest.parse::<PlayerId>() {
            Ok(player_id) => Command::Intent(Intent::RemovePlayer { player_id }),
            Err(_) => Command::Invalid("Usage: remove <player id>".to_string()),
        },
        "rename" => {
            let parsed = rest
                .split_once(char::is_whitespace)
                .and_then(|(id, name)| Some((id.parse::<PlayerId>().ok()?, name.trim())))
                .filter(|(_, name)| !name.is_empty());
            match parsed {
                Some((player_id, name)) => Command::Intent(Intent::RenamePlayer {
                    player_id,
                    name: name.to_string(),
                }),
                None => Command::Invalid("Usage: rename <player id> <name>".to_string()),
            }
        }
        "mode" => match rest.to_lowercase().as_str() {
            "word" => Command::Intent(Intent::SetMode {
                mode: GameMode::Word,
            }),
            "question" => Command::Intent(Intent::SetMode {
                mode: GameMode::Question,
            }),
            _ => Command::Invalid("Usage: mode word|question".to_string()),
        },
        "category" if !rest.is_empty() => Command::Intent(Intent::SelectCategory {
            category_id: rest.to_lowercase(),
        }),
        "category" => Command::Invalid("Usage: category <id>".to_string()),
        "toggle" => match rest.to_lowercase().as_str() {
            "category" => Command::Intent(Intent::UpdateSettings {
                settings: GameSettings {
                    show_category_to_imposter: !settings.show_category_to_imposter,
                    ..settings
                },
            }),
            "hint" => Command::Intent(Intent::UpdateSettings {
                settings: GameSettings {
                    show_hint_to_imposter: !settings.show_hint_to_imposter,
                    ..settings
                },
            }),
            _ => Command::Invalid("Usage: toggle category|hint".to_string()),
        },
        "start" => Command::Intent(Intent::StartGame),
        "generate" => Command::Generate,
        "bank" => parse_bank(rest),
        _ => Command::Invalid("Unknown command, type 'help'".to_string()),
    }
}

const BANK_USAGE: &str = "Usage: bank list | bank add <word> [| <hint>] | bank add <question A> | <question B> | \
     bank remove <n> | bank hint <n> <text>";

fn parse_bank(rest: &str) -> Command {
    let (action, args) = match rest.split_once(char::is_whitespace) {
        Some((action, args)) => (action.to_lowercase(), args.trim()),
        None => (rest.to_lowercase(), ""),
    };

    let command = match action.as_str() {
        "" | "list" => Some(BankCommand::List),
        "add" if !args.is_empty() => {
            let (first, second) = match args.split_once('|') {
                Some((first, second)) => (first.trim(), Some(second.trim().to_string())),
                None => (args, None),
            };
            Some(BankCommand::Add {
                first: first.to_string(),
                second: second.filter(|s| !s.is_empty()),
            })
        }
        "remove" => parse_index(args).map(|index| BankCommand::Remove { index }),
        "hint" => args.split_once(char::is_whitespace).and_then(|(n, hint)| {
            let hint = hint.trim();
            if hint.is_empty() {
                return None;
            }
            Some(BankCommand::Hint {
                index: parse_index(n)?,
                hint: hint.to_string(),
            })
        }),
        _ => None,
    };

    command
        .map(Command::Bank)
        .unwrap_or_else(|| Command::Invalid(BANK_USAGE.to_string()))
}

/// 1-based entry number as listed by `bank list`
fn parse_index(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

/// The view on screen plus presentation-only state.
///
/// On the answers summary, `reset` is held back until the imposter has been
/// unmasked.
pub struct Screen {
    view: View,
    imposter_shown: bool,
}

impl Screen {
    pub fn new(view: View) -> Self {
        Self {
            view,
            imposter_shown: false,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn parse(&self, line: &str) -> Command {
        match parse_command(&self.view, line) {
            Command::Intent(Intent::Reset)
                if matches!(self.view, View::AnswersSummary { .. }) && !self.imposter_shown =>
            {
                Command::Invalid("Type 'imposter' to unmask before playing again".to_string())
            }
            command => command,
        }
    }

    /// Unmasking line, marking the imposter as shown
    pub fn unmask(&mut self) -> Option<String> {
        let text = render_imposter(&self.view)?;
        self.imposter_shown = true;
        Some(text)
    }

    /// Swap in the next view and return the text to print, prefixed with a
    /// screen clear on hand-off
    pub fn advance(&mut self, next: View) -> String {
        let mut out = String::new();
        if needs_clear(&self.view, &next) {
            out.push_str(CLEAR_SCREEN);
        }
        out.push_str(&render(&next));
        if next.phase() != self.view.phase() {
            self.imposter_shown = false;
        }
        self.view = next;
        out
    }
}

/// Whether the screen must be wiped before showing `next`.
///
/// True once private content (a revealed card or a typed answer) has been
/// on screen and the view moves on.
pub fn needs_clear(previous: &View, next: &View) -> bool {
    let private_on_screen = matches!(
        previous,
        View::Reveal {
            disclosure: Some(_),
            ..
        } | View::Answering { .. }
    );
    private_on_screen && previous != next
}

/// Commands accepted on a screen
pub fn help(view: &View) -> &'static str {
    match view {
        View::Lobby { .. } => {
            "add | remove <id> | rename <id> <name> | mode word|question | category <id> | \
             toggle category|hint | bank list|add|remove|hint | generate | start | quit"
        }
        View::Reveal { .. } => "show | done | quit",
        View::Answering { .. } => "<your answer> | quit",
        View::VotingLanding { .. } => "results | quit",
        View::QuestionRevealActual { .. } => "next | quit",
        View::AnswersSummary { .. } => "imposter | reset | quit",
        View::Result { .. } => "reset | quit",
    }
}

/// Plain-text rendering of a view
pub fn render(view: &View) -> String {
    let mut out = String::new();
    match view {
        View::Lobby {
            players,
            mode,
            category,
            categories,
            settings,
            can_add,
            can_remove,
        } => {
            out.push_str("=== IMPOSTER ===\n\n");
            out.push_str(&format!("Players ({}):\n", players.len()));
            for p in players {
                out.push_str(&format!("  [{}] {}\n", p.id, p.name));
            }
            if !can_add {
                out.push_str(&format!("  (maximum of {} players)\n", MAX_PLAYERS));
            }
            if !can_remove {
                out.push_str(&format!("  (minimum of {} players)\n", MIN_PLAYERS));
            }
            out.push_str(&format!("\nMode: {}\n", mode_label(*mode)));
            out.push_str(&format!("Category: {} {}\n", category.icon, category.name));
            out.push_str("Available: ");
            out.push_str(
                &categories
                    .iter()
                    .map(|c| c.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            out.push('\n');
            if *mode == GameMode::Word {
                out.push_str(&format!(
                    "Imposter sees category: {} | hint: {}\n",
                    on_off(settings.show_category_to_imposter),
                    on_off(settings.show_hint_to_imposter)
                ));
            }
        }
        View::Reveal {
            player,
            index,
            total,
            disclosure,
            ..
        } => {
            out.push_str(&format!("Player {} of {}\n\n", index + 1, total));
            match disclosure {
                None => out.push_str(&format!(
                    "Pass the device to {}.\nType 'show' when nobody else is looking.\n",
                    player.name
                )),
                Some(disclosure) => {
                    out.push_str(&render_disclosure(disclosure));
                    out.push_str("\nType 'done' to hide it and pass the device on.\n");
                }
            }
        }
        View::Answering {
            player,
            index,
            total,
        } => {
            out.push_str(&format!(
                "{}, type your answer ({} of {}):\n",
                player.name,
                index + 1,
                total
            ));
        }
        View::VotingLanding { starting_player } => {
            out.push_str("Everyone has seen their card.\n\n");
            out.push_str(&format!("{} starts giving clues!\n", starting_player.name));
            out.push_str("Discuss, vote out loud, then type 'results'.\n");
        }
        View::QuestionRevealActual { question } => {
            out.push_str("The real question was:\n\n");
            out.push_str(&format!("  {}\n\n", question));
            out.push_str("Type 'next' to see everyone's answers.\n");
        }
        View::AnswersSummary { question, answers } => {
            out.push_str(&format!("Q: {}\n\n", question));
            for a in answers {
                out.push_str(&format!(
                    "  {}: {}\n",
                    a.player.name,
                    a.answer.as_deref().unwrap_or("-")
                ));
            }
            out.push_str("\nWho answered a different question?\n");
        }
        View::Result {
            imposter,
            secret_word,
            category,
        } => {
            out.push_str(&format!(
                "The imposter was: {}\n",
                imposter.as_ref().map(|p| p.name.as_str()).unwrap_or("nobody")
            ));
            out.push_str(&format!("The word was: {} ({})\n", secret_word, category));
        }
    }
    out.push_str(&format!("\n> {}\n", help(view)));
    out
}

/// Unmasking line for the answers summary
pub fn render_imposter(view: &View) -> Option<String> {
    match view {
        View::AnswersSummary { answers, .. } => answers
            .iter()
            .find(|a| a.is_imposter)
            .map(|a| format!("The imposter was: {}", a.player.name)),
        _ => None,
    }
}

fn render_disclosure(disclosure: &Disclosure) -> String {
    match disclosure {
        Disclosure::SecretWord { word } => format!("The secret word is:\n\n  {}\n", word),
        Disclosure::Imposter { category, hint } => {
            let mut out = String::from("You are the IMPOSTER!\nBlend in and don't get caught.\n");
            if let Some(category) = category {
                out.push_str(&format!("Category: {}\n", category));
            }
            if let Some(hint) = hint {
                out.push_str(&format!("Hint: {}\n", hint));
            }
            out
        }
        Disclosure::Question { question } => format!("Your question is:\n\n  {}\n", question),
    }
}

fn mode_label(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Word => "word",
        GameMode::Question => "question",
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::defaults;
    use crate::protocol::{AnswerInfo, PlayerInfo};

    fn lobby() -> View {
        View::from_state(
            &GameState::new(defaults::default_category(GameMode::Word)),
            None,
        )
    }

    fn player(id: PlayerId, name: &str) -> PlayerInfo {
        PlayerInfo {
            id,
            name: name.to_string(),
        }
    }

    fn reveal(disclosure: Option<Disclosure>) -> View {
        View::Reveal {
            player: player(1, "Alice"),
            index: 0,
            total: 3,
            mode: GameMode::Word,
            disclosure,
        }
    }

    #[test]
    fn test_lobby_commands() {
        let view = lobby();
        assert_eq!(
            parse_command(&view, "add"),
            Command::Intent(Intent::AddPlayer)
        );
        assert_eq!(
            parse_command(&view, "remove 2"),
            Command::Intent(Intent::RemovePlayer { player_id: 2 })
        );
        assert_eq!(
            parse_command(&view, "rename 1  Mary Jane "),
            Command::Intent(Intent::RenamePlayer {
                player_id: 1,
                name: "Mary Jane".to_string()
            })
        );
        assert_eq!(
            parse_command(&view, "MODE Question"),
            Command::Intent(Intent::SetMode {
                mode: GameMode::Question
            })
        );
        assert_eq!(
            parse_command(&view, "category food"),
            Command::Intent(Intent::SelectCategory {
                category_id: "food".to_string()
            })
        );
        assert_eq!(parse_command(&view, "generate"), Command::Generate);
        assert_eq!(parse_command(&view, " quit "), Command::Quit);
    }

    #[test]
    fn test_lobby_usage_errors() {
        let view = lobby();
        assert!(matches!(parse_command(&view, "remove bob"), Command::Invalid(_)));
        assert!(matches!(parse_command(&view, "rename 1"), Command::Invalid(_)));
        assert!(matches!(parse_command(&view, "mode chess"), Command::Invalid(_)));
        assert!(matches!(parse_command(&view, "show"), Command::Invalid(_)));
    }

    #[test]
    fn test_toggle_flips_current_setting_only() {
        let view = lobby();
        assert_eq!(
            parse_command(&view, "toggle hint"),
            Command::Intent(Intent::UpdateSettings {
                settings: GameSettings {
                    show_category_to_imposter: false,
                    show_hint_to_imposter: true,
                }
            })
        );
    }

    #[test]
    fn test_reveal_requires_show_before_done() {
        let concealed = reveal(None);
        assert_eq!(
            parse_command(&concealed, "show"),
            Command::Intent(Intent::Reveal)
        );
        assert!(matches!(parse_command(&concealed, "done"), Command::Invalid(_)));

        let shown = reveal(Some(Disclosure::SecretWord {
            word: "Pizza".to_string(),
        }));
        assert_eq!(
            parse_command(&shown, "done"),
            Command::Intent(Intent::RevealDone)
        );
    }

    #[test]
    fn test_answering_takes_whole_line_as_answer() {
        let view = View::Answering {
            player: player(2, "Bob"),
            index: 1,
            total: 3,
        };
        assert_eq!(
            parse_command(&view, "  pancakes with syrup "),
            Command::Intent(Intent::SubmitAnswer {
                text: "pancakes with syrup".to_string()
            })
        );
        assert!(matches!(parse_command(&view, "   "), Command::Invalid(_)));
    }

    #[test]
    fn test_concealed_reveal_never_renders_content() {
        let text = render(&reveal(None));
        assert!(text.contains("Pass the device to Alice"));
        assert!(!text.contains("secret word"));
    }

    #[test]
    fn test_imposter_render_respects_disclosed_extras() {
        let text = render(&reveal(Some(Disclosure::Imposter {
            category: Some("Food".to_string()),
            hint: None,
        })));
        assert!(text.contains("IMPOSTER"));
        assert!(text.contains("Category: Food"));
        assert!(!text.contains("Hint:"));
    }

    #[test]
    fn test_clear_after_private_screens() {
        let shown = reveal(Some(Disclosure::SecretWord {
            word: "Pizza".to_string(),
        }));
        let next = View::Reveal {
            player: player(2, "Bob"),
            index: 1,
            total: 3,
            mode: GameMode::Word,
            disclosure: None,
        };
        assert!(needs_clear(&shown, &next));
        assert!(!needs_clear(&reveal(None), &shown));
        assert!(!needs_clear(&lobby(), &reveal(None)));
    }

    fn summary() -> View {
        View::AnswersSummary {
            question: "Favorite breakfast?".to_string(),
            answers: vec![
                AnswerInfo {
                    player: player(1, "Alice"),
                    answer: Some("eggs".to_string()),
                    is_imposter: false,
                },
                AnswerInfo {
                    player: player(2, "Bob"),
                    answer: Some("toast".to_string()),
                    is_imposter: true,
                },
            ],
        }
    }

    #[test]
    fn test_render_imposter_only_on_summary() {
        let summary = summary();
        assert_eq!(
            render_imposter(&summary).as_deref(),
            Some("The imposter was: Bob")
        );
        assert!(!render(&summary).contains("imposter was"));
        assert_eq!(render_imposter(&lobby()), None);
    }

    #[test]
    fn test_bank_commands() {
        let view = lobby();
        assert_eq!(
            parse_command(&view, "bank"),
            Command::Bank(BankCommand::List)
        );
        assert_eq!(
            parse_command(&view, "bank list"),
            Command::Bank(BankCommand::List)
        );
        assert_eq!(
            parse_command(&view, "bank add Snow Globe"),
            Command::Bank(BankCommand::Add {
                first: "Snow Globe".to_string(),
                second: None
            })
        );
        assert_eq!(
            parse_command(&view, "bank add Snowman | Made of snow"),
            Command::Bank(BankCommand::Add {
                first: "Snowman".to_string(),
                second: Some("Made of snow".to_string())
            })
        );
        assert_eq!(
            parse_command(&view, "bank add Best breakfast? | Best meal?"),
            Command::Bank(BankCommand::Add {
                first: "Best breakfast?".to_string(),
                second: Some("Best meal?".to_string())
            })
        );
        assert_eq!(
            parse_command(&view, "bank remove 2"),
            Command::Bank(BankCommand::Remove { index: 2 })
        );
        assert_eq!(
            parse_command(&view, "bank hint 1 Very cold"),
            Command::Bank(BankCommand::Hint {
                index: 1,
                hint: "Very cold".to_string()
            })
        );
    }

    #[test]
    fn test_bank_usage_errors() {
        let view = lobby();
        for line in [
            "bank add",
            "bank remove",
            "bank remove 0",
            "bank remove two",
            "bank hint 1",
            "bank hint x cold",
            "bank shuffle",
        ] {
            assert!(
                matches!(parse_command(&view, line), Command::Invalid(_)),
                "{line}"
            );
        }
        // Bank edits are lobby-only
        assert!(matches!(
            parse_command(&summary(), "bank list"),
            Command::Invalid(_)
        ));
    }

    #[test]
    fn test_reset_waits_for_unmasking() {
        let mut screen = Screen::new(summary());
        assert!(matches!(screen.parse("reset"), Command::Invalid(_)));

        assert_eq!(screen.parse("imposter"), Command::ShowImposter);
        assert_eq!(screen.unmask().as_deref(), Some("The imposter was: Bob"));
        assert_eq!(screen.parse("reset"), Command::Intent(Intent::Reset));

        // A new round must unmask again
        screen.advance(lobby());
        screen.advance(summary());
        assert!(matches!(screen.parse("reset"), Command::Invalid(_)));
    }

    #[test]
    fn test_result_screen_resets_without_unmasking() {
        let screen = Screen::new(View::Result {
            imposter: Some(player(2, "Bob")),
            secret_word: "Pizza".to_string(),
            category: "Food".to_string(),
        });
        assert_eq!(screen.parse("reset"), Command::Intent(Intent::Reset));
    }

    #[test]
    fn test_screen_clears_on_hand_off() {
        let mut screen = Screen::new(reveal(Some(Disclosure::SecretWord {
            word: "Pizza".to_string(),
        })));
        let out = screen.advance(View::Reveal {
            player: player(2, "Bob"),
            index: 1,
            total: 3,
            mode: GameMode::Word,
            disclosure: None,
        });
        assert!(out.starts_with(CLEAR_SCREEN));
        assert!(!out.contains("Pizza"));
        assert!(matches!(screen.view(), View::Reveal { index: 1, .. }));
    }
}
